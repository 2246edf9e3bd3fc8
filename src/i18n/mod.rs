//! Internationalization (i18n) module for the bilingual site.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported locales and their metadata
//! - `locale`: Closed `Locale` type (`pt`, `en`)
//! - `state`: Per-session locale holder passed explicitly to the renderer
//! - `localized`: Bilingual resolution (`resolve`, `Localized<T>`)
//! - `path`: Locale-prefixed route paths
//! - `negotiate`: `Accept-Language` negotiation for unprefixed requests
//! - `strings`: Page chrome strings per locale
//!
//! # Example
//!
//! ```rust
//! use view_arquitetura::i18n::{localize, resolve, Locale, LocaleState};
//!
//! let mut state = LocaleState::default();
//! state.toggle();
//! assert_eq!(state.current(), Locale::En);
//! assert_eq!(resolve("Contato", "Contact", state.current()), "Contact");
//! assert_eq!(localize("contact", state.current()), "/en/contact");
//! ```

mod locale;
mod localized;
mod negotiate;
mod path;
mod registry;
mod state;
mod strings;

pub use locale::Locale;
pub use localized::{resolve, Localized, Text, TextList};
pub use negotiate::negotiate;
pub use path::{delocalize, localize};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use state::LocaleState;
pub use strings::{UiStrings, ENGLISH_STRINGS, PORTUGUESE_STRINGS};
