//! Category filtering for the projects listing.

use crate::catalog::{Category, Project};
use crate::i18n::{Localized, Text};

/// Filter value that selects every record.
pub const ALL_CATEGORIES: &str = "all";

/// Keep the records whose category id equals `category`, in input order.
///
/// `"all"` keeps everything. An id that names no category yields an empty
/// list; that is a valid result, distinct from a missing record.
pub fn filter_by_category<'a, I>(records: I, category: &str) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    records
        .into_iter()
        .filter(|project| category == ALL_CATEGORIES || project.category.id() == category)
        .collect()
}

/// One entry of the listing's filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilter {
    /// Query value (`"all"` or a category id)
    pub id: &'static str,
    pub label: Text,
}

impl CategoryFilter {
    /// The filter bar: "all" followed by every category.
    pub fn options() -> Vec<CategoryFilter> {
        let mut options = vec![CategoryFilter {
            id: ALL_CATEGORIES,
            label: Localized::new("Todos", "All"),
        }];
        options.extend(Category::ALL.into_iter().map(|category| CategoryFilter {
            id: category.id(),
            label: category.label(),
        }));
        options
    }
}
