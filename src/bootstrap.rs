use anyhow::{Context, Result};

use crate::locale::{self, PreferenceProvider};
use crate::registry::{Registry, RegistryConfig};
use crate::translator::Translator;

/// Anything that draws user-visible text through a [`Translator`].
pub trait UiRoot {
    fn render(&mut self, t: &Translator) -> Result<()>;
}

/// Initialized translation state, ready to mount a UI root.
pub struct Bootstrapper {
    translator: Translator,
}

impl Bootstrapper {
    /// Read the preferred locale and initialize the registry from `config`.
    ///
    /// Fails only when the resources themselves are unusable (missing or
    /// malformed fallback, non-flat dictionaries).
    pub fn new(provider: &dyn PreferenceProvider, config: RegistryConfig) -> Result<Self> {
        let preferences = provider.preferences();
        let candidate = locale::select(preferences.as_ref());
        tracing::debug!(?preferences, ?candidate, "locale preference read");

        let config = config.active_locale(candidate).language_only_fallback(true);
        let fallback = config.fallback_locale().to_string();
        let registry = Registry::initialize(config).with_context(|| {
            format!("failed to initialize translations (fallback locale '{fallback}')")
        })?;

        Ok(Self {
            translator: Translator::new(registry),
        })
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Render `root` for the first time.
    pub fn mount<R: UiRoot>(self, mut root: R) -> Result<Mounted<R>> {
        root.render(&self.translator)?;
        Ok(Mounted {
            translator: self.translator,
            root,
        })
    }
}

/// A UI root that has been rendered at least once.
pub struct Mounted<R: UiRoot> {
    translator: Translator,
    root: R,
}

impl<R: UiRoot> Mounted<R> {
    /// Switch the active locale, then re-render with it.
    pub fn switch_locale(&mut self, locale: &str) -> Result<()> {
        self.translator.registry().set_active_locale(locale);
        self.root.render(&self.translator)
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn into_root(self) -> R {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{FixedPreferences, LocalePreference};
    use serde_json::json;

    struct RecordingRoot {
        frames: Vec<String>,
    }

    impl RecordingRoot {
        fn new() -> Self {
            Self { frames: Vec::new() }
        }
    }

    impl UiRoot for RecordingRoot {
        fn render(&mut self, t: &Translator) -> Result<()> {
            self.frames.push(format!("{} / {}", t.t("greeting"), t.t("farewell")));
            Ok(())
        }
    }

    fn config() -> RegistryConfig {
        RegistryConfig::new("en")
            .with_resource("en", json!({ "greeting": "Hello", "farewell": "Goodbye" }))
            .with_resource("ja", json!({ "greeting": "こんにちは", "farewell": "さようなら" }))
    }

    fn prefs(locales: Vec<&str>) -> FixedPreferences {
        FixedPreferences(Some(LocalePreference::from(locales)))
    }

    #[test]
    fn test_first_preference_becomes_active() {
        let boot = Bootstrapper::new(&prefs(vec!["ja", "en"]), config()).unwrap();
        assert_eq!(boot.translator().registry().active_locale(), "ja");
        assert_eq!(boot.translator().t("greeting"), "こんにちは");
    }

    #[test]
    fn test_no_preference_uses_fallback() {
        let boot = Bootstrapper::new(&FixedPreferences::none(), config()).unwrap();
        assert_eq!(boot.translator().registry().active_locale(), "en");
        assert_eq!(boot.translator().t("greeting"), "Hello");
    }

    #[test]
    fn test_region_preference_matches_language() {
        let boot = Bootstrapper::new(&prefs(vec!["ja-JP"]), config()).unwrap();
        assert_eq!(boot.translator().t("greeting"), "こんにちは");
    }

    #[test]
    fn test_unsupported_preference_uses_fallback() {
        let boot = Bootstrapper::new(&prefs(vec!["fr", "ja"]), config()).unwrap();
        assert_eq!(boot.translator().t("greeting"), "Hello");
    }

    #[test]
    fn test_missing_fallback_aborts_before_mount() {
        let config =
            RegistryConfig::new("en").with_resource("ja", json!({ "greeting": "こんにちは" }));
        let err = Bootstrapper::new(&prefs(vec!["ja"]), config)
            .err()
            .expect("bootstrap must fail");
        assert!(format!("{err:#}").contains("fallback locale 'en'"));
    }

    #[test]
    fn test_mount_renders_once() {
        let boot = Bootstrapper::new(&prefs(vec!["ja"]), config()).unwrap();
        let mounted = boot.mount(RecordingRoot::new()).unwrap();
        assert_eq!(mounted.root().frames, vec!["こんにちは / さようなら"]);
    }

    #[test]
    fn test_switch_rerenders_in_new_locale() {
        let boot = Bootstrapper::new(&prefs(vec!["ja"]), config()).unwrap();
        let mut mounted = boot.mount(RecordingRoot::new()).unwrap();

        mounted.switch_locale("en").unwrap();

        assert_eq!(mounted.translator().registry().active_locale(), "en");
        let root = mounted.into_root();
        assert_eq!(root.frames, vec!["こんにちは / さようなら", "Hello / Goodbye"]);
    }
}
