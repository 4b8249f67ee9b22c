//! Per-category marker counts.

use crate::model::marker::Category;
use std::collections::BTreeMap;

/// Incrementally maintained count of records per category.
#[derive(Debug, Clone, Default)]
pub struct CategoryCounter {
    counts: BTreeMap<Category, usize>,
}

impl CategoryCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more marker of `category`.
    pub fn increment(&mut self, category: Category) {
        *self.counts.entry(category).or_insert(0) += 1;
    }

    /// Returns counts for every known category, zero-filled.
    pub fn snapshot(&self) -> CategoryCounts {
        let counts = Category::ALL
            .into_iter()
            .map(|category| (category, self.counts.get(&category).copied().unwrap_or(0)))
            .collect();
        CategoryCounts { counts }
    }
}

/// Immutable counter snapshot used for legend rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: BTreeMap<Category, usize>,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates categories in legend order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.counts.iter().map(|(category, count)| (*category, *count))
    }

    /// Legend suffix for one category, e.g. `(3건)`.
    pub fn legend_label(&self, category: Category) -> String {
        format!("({}건)", self.get(category))
    }
}
