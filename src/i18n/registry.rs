//! Locale registry: single source of truth for the site's languages.
//!
//! The registry is built once behind a `OnceLock` and never mutated, so it can
//! be read from any request handler without locking.

use std::sync::OnceLock;

use crate::i18n::strings::{ENGLISH_STRINGS, PORTUGUESE_STRINGS};
use crate::i18n::{Locale, UiStrings};

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// The locale this entry describes
    pub locale: Locale,

    /// URL code (e.g., "pt", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Portuguese")
    pub name: &'static str,

    /// Native name of the language (e.g., "Português")
    pub native_name: &'static str,

    /// Value for the html `lang` attribute
    pub html_lang: &'static str,

    /// Whether this is the default locale (exactly one should be true)
    pub is_default: bool,

    /// Whether this locale is served
    pub enabled: bool,

    /// Page chrome strings
    pub strings: &'static UiStrings,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its URL code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the code is registered
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|config| config.code == code)
    }

    /// Get the configuration of a locale.
    ///
    /// Every `Locale` variant has an entry; `default_locales` is the place to
    /// add one when a variant is added.
    pub fn config_for(&self, locale: Locale) -> &LocaleConfig {
        match self.locales.iter().find(|config| config.locale == locale) {
            Some(config) => config,
            None => unreachable!("locale {:?} missing from registry", locale),
        }
    }

    /// Get all enabled locales.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|config| config.enabled).collect()
    }

    /// Get the default locale configuration.
    ///
    /// Falls back to the first registered locale if none is flagged.
    pub fn default_config(&self) -> &LocaleConfig {
        self.locales
            .iter()
            .find(|config| config.is_default)
            .unwrap_or(&self.locales[0])
    }
}

/// Default locale configurations: Portuguese (default) and English.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            locale: Locale::Pt,
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
            html_lang: "pt-BR",
            is_default: true,
            enabled: true,
            strings: &PORTUGUESE_STRINGS,
        },
        LocaleConfig {
            locale: Locale::En,
            code: "en",
            name: "English",
            native_name: "English",
            html_lang: "en",
            is_default: false,
            enabled: true,
            strings: &ENGLISH_STRINGS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_portuguese() {
        let config = LocaleRegistry::get().get_by_code("pt").unwrap();
        assert_eq!(config.locale, Locale::Pt);
        assert_eq!(config.name, "Portuguese");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LocaleRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_codes_match_enum() {
        for locale in Locale::ALL {
            let config = LocaleRegistry::get().config_for(locale);
            assert_eq!(config.code, locale.code());
        }
    }

    #[test]
    fn test_exactly_one_default() {
        let defaults = LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .filter(|config| config.is_default)
            .count();
        assert_eq!(defaults, 1);
    }

    #[test]
    fn test_list_enabled_contains_both() {
        let enabled = LocaleRegistry::get().list_enabled();
        assert_eq!(enabled.len(), 2);
        assert!(enabled.iter().any(|config| config.code == "pt"));
        assert!(enabled.iter().any(|config| config.code == "en"));
    }

    #[test]
    fn test_strings_wired_per_locale() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.config_for(Locale::Pt).strings.nav_projects, "Projetos");
        assert_eq!(registry.config_for(Locale::En).strings.nav_projects, "Projects");
    }
}
