//! Static content catalogs.
//!
//! Each entity type (projects, process steps, values, team) has exactly one
//! authoritative table. Tables are built once at startup into `Catalog`s and
//! never mutated afterwards, so they are shared read-only across requests.

mod audit;
mod filter;
mod process;
mod projects;
mod studio;

pub use audit::{audit_catalog, AuditReport};
pub use filter::{filter_by_category, CategoryFilter, ALL_CATEGORIES};
pub use process::{ProcessStep, PROCESS_STEPS};
pub use projects::{next_index, prev_index, Category, Project, PROJECTS};
pub use studio::{Stat, TeamMember, ValueItem, AWARDS, STATS, TEAM, VALUES};

use crate::error::SiteError;
use crate::i18n::{Text, TextList};

/// Number of projects shown on the home page.
pub const FEATURED_COUNT: usize = 3;

/// A keyed content record with parallel per-locale text fields.
pub trait Record {
    /// Entity name used in log lines and not-found errors.
    const KIND: &'static str;

    /// Slug identifying the record within its catalog.
    fn key(&self) -> &str;

    /// Named localized text fields.
    fn texts(&self) -> Vec<(&'static str, Text)>;

    /// Named localized list fields.
    fn lists(&self) -> Vec<(&'static str, TextList)> {
        Vec::new()
    }
}

/// Insertion-ordered, read-only table of records keyed by slug.
#[derive(Debug, Clone)]
pub struct Catalog<R> {
    records: Vec<R>,
}

impl<R: Record> Catalog<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Look up a record by exact key.
    ///
    /// # Returns
    /// * `Ok(&R)` when the key is present
    /// * `Err(SiteError::NotFound)` otherwise; there is no fallback record
    pub fn find(&self, key: &str) -> Result<&R, SiteError> {
        self.get(key)
            .ok_or_else(|| SiteError::not_found(R::KIND, key))
    }

    pub fn get(&self, key: &str) -> Option<&R> {
        self.records.iter().find(|record| record.key() == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(R::key)
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a, R: Record> IntoIterator for &'a Catalog<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Every catalog the site renders from.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    pub projects: Catalog<Project>,
    pub process: Catalog<ProcessStep>,
    pub values: Catalog<ValueItem>,
    pub team: Catalog<TeamMember>,
}

impl ContentCatalog {
    /// Build the catalogs from the static tables.
    pub fn load() -> Self {
        Self {
            projects: Catalog::new(PROJECTS.to_vec()),
            process: Catalog::new(PROCESS_STEPS.to_vec()),
            values: Catalog::new(VALUES.to_vec()),
            team: Catalog::new(TEAM.to_vec()),
        }
    }

    /// Projects highlighted on the home page.
    pub fn featured_projects(&self) -> &[Project] {
        let all = self.projects.as_slice();
        &all[..FEATURED_COUNT.min(all.len())]
    }

    /// Run the content audit over every catalog.
    pub fn audit(&self) -> AuditReport {
        let mut report = AuditReport::new();
        report.merge(audit_catalog(&self.projects));
        report.merge(audit_catalog(&self.process));
        report.merge(audit_catalog(&self.values));
        report.merge(audit_catalog(&self.team));
        report
    }
}
