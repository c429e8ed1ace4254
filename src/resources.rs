use crate::registry::RegistryConfig;

pub const FALLBACK_LOCALE: &str = "en";

const EN: &str = include_str!("../locales/en.json");
const JA: &str = include_str!("../locales/ja.json");

/// Registry config holding the resources compiled into the binary.
pub fn bundled() -> RegistryConfig {
    RegistryConfig::new(FALLBACK_LOCALE)
        .with_json("en", EN)
        .with_json("ja", JA)
}
