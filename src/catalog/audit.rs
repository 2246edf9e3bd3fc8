//! Content completeness audit.
//!
//! Checks that catalog keys are unique URL-safe slugs and that every localized
//! field is filled in for every locale. The audit only reports; rendering never
//! consults it and a failing audit does not stop the server.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::{Catalog, Record};

/// Audit report containing errors and warnings about catalog content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuditReport {
    /// Defects that break lookup or URLs (duplicate or malformed keys)
    pub errors: Vec<String>,

    /// Content gaps (blank translations, list length mismatches)
    pub warnings: Vec<String>,
}

impl AuditReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    pub fn merge(&mut self, other: AuditReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();

fn is_slug(key: &str) -> bool {
    let regex = SLUG_REGEX.get_or_init(|| {
        Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid")
    });
    regex.is_match(key)
}

/// Audit one catalog.
pub fn audit_catalog<R: Record>(catalog: &Catalog<R>) -> AuditReport {
    let mut report = AuditReport::new();
    let mut seen = HashSet::new();

    for record in catalog {
        let key = record.key();

        if !is_slug(key) {
            report
                .errors
                .push(format!("{} key '{}' is not a URL-safe slug", R::KIND, key));
        }
        if !seen.insert(key) {
            report
                .errors
                .push(format!("{} key '{}' is duplicated", R::KIND, key));
        }

        for (field, text) in record.texts() {
            for (locale, value) in text.iter() {
                if value.trim().is_empty() {
                    report.warnings.push(format!(
                        "{} '{}': field '{}' is blank in '{}'",
                        R::KIND,
                        key,
                        field,
                        locale
                    ));
                }
            }
        }

        for (field, list) in record.lists() {
            if list.pt.len() != list.en.len() {
                report.warnings.push(format!(
                    "{} '{}': list '{}' has {} items in 'pt' but {} in 'en'",
                    R::KIND,
                    key,
                    field,
                    list.pt.len(),
                    list.en.len()
                ));
            }
            for (locale, items) in list.iter() {
                if items.iter().any(|item| item.trim().is_empty()) {
                    report.warnings.push(format!(
                        "{} '{}': list '{}' has a blank item in '{}'",
                        R::KIND,
                        key,
                        field,
                        locale
                    ));
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProcessStep, ValueItem, PROCESS_STEPS, VALUES};
    use crate::i18n::Localized;

    fn value(slug: &'static str, title_en: &'static str) -> ValueItem {
        ValueItem {
            slug,
            title: Localized::new("Título", title_en),
            description: Localized::new("Descrição", "Description"),
        }
    }

    // ==================== Slug Tests ====================

    #[test]
    fn test_is_slug() {
        assert!(is_slug("casa-mirante"));
        assert!(is_slug("01"));
        assert!(!is_slug("Casa-Mirante"));
        assert!(!is_slug("casa mirante"));
        assert!(!is_slug("-casa"));
        assert!(!is_slug("casa--mirante"));
        assert!(!is_slug(""));
    }

    // ==================== Audit Tests ====================

    #[test]
    fn test_clean_catalog() {
        let report = audit_catalog(&Catalog::new(VALUES.to_vec()));
        assert!(report.is_clean());
    }

    #[test]
    fn test_blank_translation_is_warning() {
        let catalog = Catalog::new(vec![value("integridade", "")]);
        let report = audit_catalog(&catalog);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("field 'title' is blank in 'en'"));
    }

    #[test]
    fn test_duplicate_key_is_error() {
        let catalog = Catalog::new(vec![value("inovacao", "A"), value("inovacao", "B")]);
        let report = audit_catalog(&catalog);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("duplicated"));
    }

    #[test]
    fn test_malformed_key_is_error() {
        let catalog = Catalog::new(vec![value("Inovação", "Innovation")]);
        let report = audit_catalog(&catalog);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("not a URL-safe slug"));
    }

    #[test]
    fn test_list_length_mismatch_is_warning() {
        let mut step: ProcessStep = PROCESS_STEPS[0].clone();
        step.details = Localized {
            pt: &["Análise do terreno", "Briefing detalhado"],
            en: &["Site analysis"],
        };
        let report = audit_catalog(&Catalog::new(vec![step]));
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("2 items in 'pt' but 1 in 'en'"));
    }

    #[test]
    fn test_merge() {
        let mut report = AuditReport::new();
        let mut other = AuditReport::new();
        other.warnings.push("w".to_string());
        other.errors.push("e".to_string());
        report.merge(other);
        assert!(report.has_errors());
        assert!(report.has_warnings());
    }
}
