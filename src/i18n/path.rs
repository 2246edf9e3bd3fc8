use crate::i18n::Locale;

/// Qualify a route path with a locale prefix.
///
/// The path is normalized to a single leading `/`; the root maps to
/// `/{locale}` and anything else to `/{locale}{path}`.
///
/// ```
/// use view_arquitetura::i18n::{localize, Locale};
///
/// assert_eq!(localize("/", Locale::En), "/en");
/// assert_eq!(localize("projects", Locale::Pt), "/pt/projects");
/// ```
pub fn localize(path: &str, locale: Locale) -> String {
    let trimmed = path.trim_start_matches('/');

    if trimmed.is_empty() {
        return format!("/{}", locale.code());
    }

    format!("/{}/{}", locale.code(), trimmed)
}

/// Split a locale-qualified path into its locale and the remaining route path.
///
/// Returns `None` when the first segment is not a locale code. The inverse of
/// `localize` for paths it produced.
pub fn delocalize(path: &str) -> Option<(Locale, String)> {
    let trimmed = path.trim_start_matches('/');
    let (code, rest) = match trimmed.split_once('/') {
        Some((code, rest)) => (code, rest),
        None => (trimmed, ""),
    };

    let locale = Locale::from_code(code).ok()?;
    Some((locale, format!("/{}", rest)))
}
