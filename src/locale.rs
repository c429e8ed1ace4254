/// Locale preferences as reported by the environment, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalePreference {
    Single(String),
    Ordered(Vec<String>),
}

impl From<&str> for LocalePreference {
    fn from(locale: &str) -> Self {
        LocalePreference::Single(locale.to_string())
    }
}

impl From<String> for LocalePreference {
    fn from(locale: String) -> Self {
        LocalePreference::Single(locale)
    }
}

impl From<Vec<String>> for LocalePreference {
    fn from(locales: Vec<String>) -> Self {
        LocalePreference::Ordered(locales)
    }
}

impl From<Vec<&str>> for LocalePreference {
    fn from(locales: Vec<&str>) -> Self {
        LocalePreference::Ordered(locales.into_iter().map(String::from).collect())
    }
}

/// Pick the candidate locale: the first preference, if any.
///
/// Support is not checked here; an unsupported candidate is resolved later by
/// the registry's fallback chain.
pub fn select(preferences: Option<&LocalePreference>) -> Option<&str> {
    match preferences? {
        LocalePreference::Single(locale) => Some(locale.as_str()),
        LocalePreference::Ordered(locales) => locales.first().map(String::as_str),
    }
}

pub trait PreferenceProvider {
    fn preferences(&self) -> Option<LocalePreference>;
}

/// Reads the operating system's locale list.
pub struct SystemPreferences;

impl PreferenceProvider for SystemPreferences {
    fn preferences(&self) -> Option<LocalePreference> {
        let locales: Vec<String> = sys_locale::get_locales().collect();
        if !locales.is_empty() {
            return Some(LocalePreference::Ordered(locales));
        }
        // Some platforms only report a single locale
        sys_locale::get_locale().map(LocalePreference::Single)
    }
}

/// Preferences given up front (command line override, tests).
pub struct FixedPreferences(pub Option<LocalePreference>);

impl FixedPreferences {
    pub fn none() -> Self {
        Self(None)
    }
}

impl PreferenceProvider for FixedPreferences {
    fn preferences(&self) -> Option<LocalePreference> {
        self.0.clone()
    }
}

/// Language part of a locale code ("ja" for "ja-JP" or "ja_JP").
///
/// Returns `None` when the code has no region or script part.
pub fn primary_subtag(locale: &str) -> Option<&str> {
    let (language, rest) = locale.split_once(['-', '_'])?;
    if language.is_empty() || rest.is_empty() {
        return None;
    }
    Some(language)
}
