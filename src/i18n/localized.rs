//! Bilingual value resolution.
//!
//! `resolve` is the two-argument form used for one-off texts. Content records
//! use `Localized<T>`, which stores one value per locale and is indexed by the
//! active locale, so adding a locale only touches this type.

use crate::i18n::Locale;

/// Pick the text for `current` out of a Portuguese/English pair.
///
/// Total: an empty string is returned as-is, missing translations are not
/// detected here.
pub fn resolve<'a>(text_pt: &'a str, text_en: &'a str, current: Locale) -> &'a str {
    match current {
        Locale::Pt => text_pt,
        Locale::En => text_en,
    }
}

/// A value with one variant per locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized<T> {
    pub pt: T,
    pub en: T,
}

/// Localized text field of a static content record.
pub type Text = Localized<&'static str>;

/// Localized list field (e.g. the detail bullets of a process step).
pub type TextList = Localized<&'static [&'static str]>;

impl<T> Localized<T> {
    pub const fn new(pt: T, en: T) -> Self {
        Self { pt, en }
    }

    /// Borrow the variant for `locale`.
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Pt => &self.pt,
            Locale::En => &self.en,
        }
    }

    /// Iterate over `(locale, value)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Locale, &T)> {
        Locale::ALL.into_iter().map(move |locale| (locale, self.get(locale)))
    }
}

impl<T: Copy> Localized<T> {
    /// Copy out the variant for `locale`.
    pub fn at(&self, locale: Locale) -> T {
        *self.get(locale)
    }
}

impl<T> std::ops::Index<Locale> for Localized<T> {
    type Output = T;

    fn index(&self, locale: Locale) -> &T {
        self.get(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_portuguese() {
        assert_eq!(resolve("Casa Mirante", "Viewpoint House", Locale::Pt), "Casa Mirante");
    }

    #[test]
    fn test_resolve_english() {
        assert_eq!(resolve("Casa Mirante", "Viewpoint House", Locale::En), "Viewpoint House");
    }

    #[test]
    fn test_resolve_empty_translation_returned_as_is() {
        assert_eq!(resolve("Voltar", "", Locale::En), "");
    }

    proptest! {
        #[test]
        fn prop_resolve_returns_first_iff_pt(a in ".*", b in ".*", is_pt in any::<bool>()) {
            let current = if is_pt { Locale::Pt } else { Locale::En };
            let picked = resolve(&a, &b, current);
            if is_pt {
                prop_assert_eq!(picked, a.as_str());
            } else {
                prop_assert_eq!(picked, b.as_str());
            }
        }
    }

    // ==================== Localized Tests ====================

    #[test]
    fn test_localized_get_and_index() {
        let title: Text = Localized::new("Estúdio", "Studio");
        assert_eq!(*title.get(Locale::Pt), "Estúdio");
        assert_eq!(title[Locale::En], "Studio");
        assert_eq!(title.at(Locale::En), "Studio");
    }

    #[test]
    fn test_localized_agrees_with_resolve() {
        let title: Text = Localized::new("Processo", "Process");
        for locale in Locale::ALL {
            assert_eq!(title.at(locale), resolve(title.pt, title.en, locale));
        }
    }

    #[test]
    fn test_localized_iter_covers_all_locales() {
        let details: TextList = Localized {
            pt: &["Análise do terreno"],
            en: &["Site analysis"],
        };
        let collected: Vec<_> = details.iter().map(|(locale, _)| locale).collect();
        assert_eq!(collected, Locale::ALL.to_vec());
    }
}
