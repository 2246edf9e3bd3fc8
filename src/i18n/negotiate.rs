//! Locale negotiation for requests that carry no locale prefix.

use crate::i18n::Locale;

/// Pick the best supported locale from an `Accept-Language` header value.
///
/// Entries are ranked by their `q` weight (ties keep header order) and matched
/// on the primary language subtag, so `pt-BR` and `pt_PT` both select `pt`.
/// Entries with `q=0` are ignored. Returns `None` when nothing matches.
pub fn negotiate(accept_language: &str) -> Option<Locale> {
    let mut ranked: Vec<(f32, &str)> = accept_language
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.trim().split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() {
                return None;
            }

            let weight = parts
                .filter_map(|param| param.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            Some((weight, tag))
        })
        .filter(|(weight, _)| *weight > 0.0)
        .collect();

    // Stable sort keeps header order among equal weights
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    ranked.into_iter().find_map(|(_, tag)| {
        let primary = tag.split(['-', '_']).next()?.to_lowercase();
        Locale::from_code(&primary).ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_code() {
        assert_eq!(negotiate("en"), Some(Locale::En));
        assert_eq!(negotiate("pt"), Some(Locale::Pt));
    }

    #[test]
    fn test_region_subtags() {
        assert_eq!(negotiate("pt-BR"), Some(Locale::Pt));
        assert_eq!(negotiate("en_GB"), Some(Locale::En));
    }

    #[test]
    fn test_weights_respected() {
        assert_eq!(negotiate("en;q=0.4, pt-BR;q=0.9"), Some(Locale::Pt));
        assert_eq!(negotiate("de, en-US;q=0.8, pt;q=0.5"), Some(Locale::En));
    }

    #[test]
    fn test_ties_keep_header_order() {
        assert_eq!(negotiate("en, pt"), Some(Locale::En));
        assert_eq!(negotiate("pt;q=0.7, en;q=0.7"), Some(Locale::Pt));
    }

    #[test]
    fn test_zero_weight_excluded() {
        assert_eq!(negotiate("pt;q=0, en;q=0.1"), Some(Locale::En));
        assert_eq!(negotiate("en;q=0"), None);
    }

    #[test]
    fn test_case_insensitive_tag() {
        assert_eq!(negotiate("EN-us"), Some(Locale::En));
    }

    #[test]
    fn test_no_supported_locale() {
        assert_eq!(negotiate("fr-FR, de;q=0.9"), None);
        assert_eq!(negotiate(""), None);
        assert_eq!(negotiate("*"), None);
    }
}
