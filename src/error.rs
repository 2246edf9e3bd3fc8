use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::i18n::Locale;
use crate::render;

/// Errors surfaced to site visitors.
///
/// Every variant is terminal for the request; nothing is retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    /// A catalog has no record under `key`.
    #[error("{kind} '{key}' not found")]
    NotFound { kind: &'static str, key: String },

    /// The first path segment is not a served locale.
    #[error("unknown locale code: '{0}'")]
    UnknownLocale(String),

    /// No route matches the request path.
    #[error("no page at '{0}'")]
    NoRoute(String),
}

impl SiteError {
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        SiteError::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }

    /// Attach the locale the error page should be rendered in.
    pub fn in_locale(self, locale: Locale) -> LocalizedError {
        LocalizedError {
            locale,
            error: self,
        }
    }
}

/// A `SiteError` paired with the locale of the page that failed.
#[derive(Debug)]
pub struct LocalizedError {
    pub locale: Locale,
    pub error: SiteError,
}

impl IntoResponse for LocalizedError {
    fn into_response(self) -> Response {
        tracing::debug!(locale = %self.locale, "{}", self.error);
        (self.error.status(), Html(render::not_found(self.locale))).into_response()
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        self.in_locale(Locale::default_locale()).into_response()
    }
}
