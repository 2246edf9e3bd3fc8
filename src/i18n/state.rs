//! Per-session locale state.
//!
//! The active locale is an explicit value handed to the renderer rather than
//! a global flag. For an HTTP request it is seeded from the URL prefix.

use crate::i18n::Locale;

/// Holds the current display locale of one browsing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleState {
    current: Locale,
}

impl LocaleState {
    pub fn new(current: Locale) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Locale {
        self.current
    }

    pub fn set(&mut self, locale: Locale) {
        self.current = locale;
    }

    /// Flip between `pt` and `en`.
    pub fn toggle(&mut self) {
        self.current = self.current.toggled();
    }
}

impl Default for LocaleState {
    fn default() -> Self {
        Self::new(Locale::default_locale())
    }
}
