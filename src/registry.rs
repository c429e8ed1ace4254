use serde_json::Value;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::locale::primary_subtag;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no translation resource for fallback locale '{locale}'")]
    MissingFallback { locale: String },

    #[error("translation resource for '{locale}' is not a key/value object")]
    NotAnObject { locale: String },

    #[error("translation '{key}' in '{locale}' is not a string")]
    NotFlat { locale: String, key: String },

    #[error("failed to parse translation resource for '{locale}'")]
    Parse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Flat translation key -> localized string mapping for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary(HashMap<String, String>);

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(locale: &str, text: &str) -> Result<Self, RegistryError> {
        let value = serde_json::from_str(text).map_err(|source| RegistryError::Parse {
            locale: locale.to_string(),
            source,
        })?;
        Self::from_value(locale, value)
    }

    /// Accepts only a JSON object whose values are all strings.
    pub fn from_value(locale: &str, value: Value) -> Result<Self, RegistryError> {
        let Value::Object(map) = value else {
            return Err(RegistryError::NotAnObject {
                locale: locale.to_string(),
            });
        };

        let mut entries = HashMap::with_capacity(map.len());
        for (key, value) in map {
            match value {
                Value::String(text) => {
                    entries.insert(key, text);
                }
                _ => {
                    return Err(RegistryError::NotFlat {
                        locale: locale.to_string(),
                        key,
                    });
                }
            }
        }
        Ok(Self(entries))
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.0.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Debug, Clone)]
enum Resource {
    Json(String),
    Value(Value),
    Parsed(Dictionary),
}

impl Resource {
    fn into_dictionary(self, locale: &str) -> Result<Dictionary, RegistryError> {
        match self {
            Resource::Json(text) => Dictionary::from_json_str(locale, &text),
            Resource::Value(value) => Dictionary::from_value(locale, value),
            Resource::Parsed(dictionary) => Ok(dictionary),
        }
    }
}

/// Everything [`Registry::initialize`] needs.
///
/// Resources are validated lazily, when the registry is initialized, so a
/// malformed resource always surfaces as an initialization error.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    resources: BTreeMap<String, Resource>,
    fallback_locale: String,
    active_locale: Option<String>,
    language_only_fallback: bool,
}

impl RegistryConfig {
    pub fn new(fallback_locale: impl Into<String>) -> Self {
        Self {
            resources: BTreeMap::new(),
            fallback_locale: fallback_locale.into(),
            active_locale: None,
            language_only_fallback: false,
        }
    }

    /// Register a resource given as JSON text.
    pub fn with_json(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.resources.insert(locale.into(), Resource::Json(text.into()));
        self
    }

    pub fn with_resource(mut self, locale: impl Into<String>, value: Value) -> Self {
        self.resources.insert(locale.into(), Resource::Value(value));
        self
    }

    pub fn with_dictionary(mut self, locale: impl Into<String>, dictionary: Dictionary) -> Self {
        self.resources.insert(locale.into(), Resource::Parsed(dictionary));
        self
    }

    /// Candidate active locale. `None` means "no preference": the fallback
    /// locale becomes active.
    pub fn active_locale(mut self, locale: Option<&str>) -> Self {
        self.active_locale = locale.map(String::from);
        self
    }

    /// Also try the primary language subtag ("ja" for "ja-JP") before the
    /// fallback locale.
    pub fn language_only_fallback(mut self, enabled: bool) -> Self {
        self.language_only_fallback = enabled;
        self
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }
}

/// Owns the translation dictionaries and the active locale.
///
/// A `Registry` only exists once [`Registry::initialize`] succeeded, which
/// guarantees the fallback locale has a dictionary.
#[derive(Debug)]
pub struct Registry {
    dictionaries: HashMap<String, Dictionary>,
    fallback_locale: String,
    active_locale: RefCell<String>,
    language_only_fallback: bool,
}

impl Registry {
    pub fn initialize(config: RegistryConfig) -> Result<Self, RegistryError> {
        let mut dictionaries = HashMap::with_capacity(config.resources.len());
        for (locale, resource) in config.resources {
            let dictionary = resource.into_dictionary(&locale)?;
            dictionaries.insert(locale, dictionary);
        }

        if !dictionaries.contains_key(&config.fallback_locale) {
            return Err(RegistryError::MissingFallback {
                locale: config.fallback_locale,
            });
        }

        let active_locale = config
            .active_locale
            .unwrap_or_else(|| config.fallback_locale.clone());
        if !dictionaries.contains_key(&active_locale) {
            tracing::debug!(
                locale = %active_locale,
                fallback = %config.fallback_locale,
                "no dictionary for active locale, lookups will fall back"
            );
        }

        tracing::debug!(
            locales = dictionaries.len(),
            fallback = %config.fallback_locale,
            active = %active_locale,
            "translation registry initialized"
        );

        Ok(Self {
            dictionaries,
            fallback_locale: config.fallback_locale,
            active_locale: RefCell::new(active_locale),
            language_only_fallback: config.language_only_fallback,
        })
    }

    /// Translate `key` for the active locale.
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        let active = self.active_locale.borrow();
        self.lookup_in(key, &active)
    }

    /// Translate `key` for `locale`.
    ///
    /// Resolution order: the locale's own dictionary, its primary subtag when
    /// language-only fallback is on, the fallback dictionary, and finally the
    /// key itself.
    pub fn lookup_in<'a>(&'a self, key: &'a str, locale: &str) -> &'a str {
        if let Some(text) = self.dictionaries.get(locale).and_then(|d| d.get(key)) {
            return text;
        }

        if self.language_only_fallback {
            let by_language = primary_subtag(locale)
                .and_then(|language| self.dictionaries.get(language))
                .and_then(|d| d.get(key));
            if let Some(text) = by_language {
                return text;
            }
        }

        if let Some(text) = self.fallback_dictionary().get(key) {
            tracing::debug!(
                key,
                locale,
                fallback = %self.fallback_locale,
                "translation resolved from fallback locale"
            );
            return text;
        }

        tracing::debug!(key, locale, "missing translation key, returning key as-is");
        key
    }

    pub fn set_active_locale(&self, locale: impl Into<String>) {
        let locale = locale.into();
        tracing::debug!(locale = %locale, "switching active locale");
        self.active_locale.replace(locale);
    }

    pub fn active_locale(&self) -> String {
        self.active_locale.borrow().clone()
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Locales with a dictionary, sorted.
    pub fn available_locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.dictionaries.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Whether `locale`'s own dictionary has `key` (no fallback).
    pub fn has_key(&self, key: &str, locale: &str) -> bool {
        self.dictionaries
            .get(locale)
            .is_some_and(|d| d.contains_key(key))
    }

    /// The locale whose dictionary is tried first for the active locale.
    pub fn resolved_locale(&self) -> String {
        let active = self.active_locale.borrow();
        if self.dictionaries.contains_key(active.as_str()) {
            return active.clone();
        }
        if self.language_only_fallback {
            if let Some(language) = primary_subtag(&active) {
                if self.dictionaries.contains_key(language) {
                    return language.to_string();
                }
            }
        }
        self.fallback_locale.clone()
    }

    /// Per-locale coverage against the fallback dictionary's key set.
    pub fn coverage(&self) -> CoverageReport {
        let canonical = self.fallback_dictionary();
        let mut locales = Vec::new();

        for locale in self.available_locales() {
            if locale == self.fallback_locale {
                continue;
            }
            let dictionary = &self.dictionaries[locale];
            let mut missing: Vec<String> = canonical
                .keys()
                .filter(|key| !dictionary.contains_key(key))
                .map(String::from)
                .collect();
            missing.sort_unstable();

            locales.push(LocaleCoverage {
                locale: locale.to_string(),
                total: canonical.len(),
                translated: canonical.len() - missing.len(),
                missing,
            });
        }

        CoverageReport {
            fallback_locale: self.fallback_locale.clone(),
            locales,
        }
    }

    fn fallback_dictionary(&self) -> &Dictionary {
        // Present since initialize checked it
        &self.dictionaries[&self.fallback_locale]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub fallback_locale: String,
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|c| c.missing.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCoverage {
    pub locale: String,
    /// Keys in the fallback dictionary.
    pub total: usize,
    pub translated: usize,
    pub missing: Vec<String>,
}

impl LocaleCoverage {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.translated as f64 * 100.0 / self.total as f64
    }
}
