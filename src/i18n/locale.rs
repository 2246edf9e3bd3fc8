//! Locale type: the closed set of display languages.
//!
//! The site is published in Portuguese and English. `Locale` is a plain enum so
//! no value outside that set is representable; metadata (names, `lang` tags,
//! which locale is the default) lives in the registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::i18n::{LocaleConfig, LocaleRegistry, UiStrings};

/// A display language of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Portuguese (default)
    Pt,
    /// English
    En,
}

impl Locale {
    /// Every locale, in registry order.
    pub const ALL: [Locale; 2] = [Locale::Pt, Locale::En];

    /// Create a Locale from its URL code.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code names an enabled locale
    /// * `Err(SiteError::UnknownLocale)` otherwise
    ///
    /// Comparison is exact: `"PT"` is not a locale code.
    pub fn from_code(code: &str) -> Result<Locale, SiteError> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(config.locale),
            _ => Err(SiteError::UnknownLocale(code.to_string())),
        }
    }

    /// Get the default locale (the one `/` falls back to).
    pub fn default_locale() -> Locale {
        LocaleRegistry::get().default_config().locale
    }

    /// URL code, also used as the path prefix (e.g. "pt").
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
        }
    }

    /// The other locale.
    pub fn toggled(&self) -> Locale {
        match self {
            Locale::Pt => Locale::En,
            Locale::En => Locale::Pt,
        }
    }

    /// Get the full locale configuration from the registry.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get().config_for(*self)
    }

    /// Native name (e.g. "Português").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Value for the html `lang` attribute.
    pub fn html_lang(&self) -> &'static str {
        self.config().html_lang
    }

    /// Page chrome strings for this locale.
    pub fn strings(&self) -> &'static UiStrings {
        self.config().strings
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}
