use std::time::Duration;

use anyhow::{Context, Result};

use crate::contact::DEFAULT_SUBMIT_DELAY;
use crate::i18n::Locale;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Localization
    pub default_locale: Locale,

    // Contact form
    pub contact_submit_delay: Duration,

    // Studio details shown in the footer and on the contact page
    pub studio: StudioInfo,
}

/// Public contact details of the studio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioInfo {
    pub email: String,
    pub phone: String,
}

impl StudioInfo {
    /// Phone number for a `tel:` link (digits and a leading '+').
    pub fn phone_href(&self) -> String {
        self.phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect()
    }
}

impl Default for StudioInfo {
    fn default() -> Self {
        Self {
            email: "contato@viewarquitetura.com.br".to_string(),
            phone: "+55 11 99999-9999".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = StudioInfo::default();

        let default_locale = match std::env::var("DEFAULT_LOCALE") {
            Ok(code) => Locale::from_code(code.trim())
                .with_context(|| format!("DEFAULT_LOCALE '{}' is not a supported locale", code))?,
            Err(_) => Locale::default_locale(),
        };

        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            default_locale,

            // Contact form
            contact_submit_delay: std::env::var("CONTACT_SUBMIT_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_SUBMIT_DELAY),

            // Studio
            studio: StudioInfo {
                email: std::env::var("STUDIO_EMAIL").unwrap_or(defaults.email),
                phone: std::env::var("STUDIO_PHONE").unwrap_or(defaults.phone),
            },
        })
    }

    /// Address the server listens on.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            default_locale: Locale::default_locale(),
            contact_submit_delay: DEFAULT_SUBMIT_DELAY,
            studio: StudioInfo::default(),
        }
    }
}
