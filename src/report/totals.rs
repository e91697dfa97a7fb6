use indexmap::IndexMap;
use serde::Serialize;

use crate::category::{CATEGORY_ORDER, Category};

/// Code-line total for one category, as reported and plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    #[serde(rename = "allocator")]
    pub category: Category,
    pub code_lines: u64,
}

impl CategoryTotal {
    #[must_use]
    pub const fn new(category: Category, code_lines: u64) -> Self {
        Self {
            category,
            code_lines,
        }
    }
}

/// Parsed totals keyed by category, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTotals {
    values: IndexMap<Category, u64>,
}

impl ReportTotals {
    /// Record a total, replacing any earlier value for the same category.
    pub fn insert(&mut self, category: Category, code_lines: u64) {
        self.values.insert(category, code_lines);
    }

    #[must_use]
    pub fn get(&self, category: Category) -> Option<u64> {
        self.values.get(&category).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Totals restricted to and sorted by `CATEGORY_ORDER`.
    ///
    /// Categories that were not found are left out rather than reported as zero.
    #[must_use]
    pub fn ordered(&self) -> Vec<CategoryTotal> {
        CATEGORY_ORDER
            .iter()
            .filter_map(|&category| {
                self.get(category)
                    .map(|code_lines| CategoryTotal::new(category, code_lines))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "totals_tests.rs"]
mod tests;
