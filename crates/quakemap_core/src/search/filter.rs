//! Category filter and substring search over the marker store.
//!
//! # Invariants
//! - Every stored record receives exactly one visibility instruction.
//! - Matching is case-insensitive on both sides; the query text is otherwise
//!   used exactly as typed.
//! - A query that trims to empty, or a query with no hits, hides the result
//!   panel.

use crate::display::ResultEntry;
use crate::model::marker::{fold_case, Category, MarkerId, MarkerRecord};
use crate::store::marker_store::MarkerStore;
use log::debug;

/// Selector value meaning "every category".
pub const SELECTOR_ALL: &str = "all";

/// Category half of a filter request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelector {
    #[default]
    All,
    Only(Category),
    /// Unrecognized selector text; matches no record.
    Unknown(String),
}

impl CategorySelector {
    /// Parses selector text from the category control.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed == SELECTOR_ALL {
            return Self::All;
        }
        match Category::parse(trimmed) {
            Some(category) => Self::Only(category),
            None => Self::Unknown(trimmed.to_string()),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
            Self::Unknown(_) => false,
        }
    }
}

/// Full filter request: category selector plus free-text query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub selector: CategorySelector,
    /// Raw query text as typed by the user.
    pub text: String,
}

impl FilterQuery {
    pub fn new(selector: CategorySelector, text: impl Into<String>) -> Self {
        Self {
            selector,
            text: text.into(),
        }
    }

    /// Case-folded query used for matching. Whitespace is kept.
    pub fn needle(&self) -> String {
        fold_case(&self.text)
    }

    /// True when the query has no visible characters.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Show/hide decision for one stored marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityInstruction {
    pub id: MarkerId,
    pub show: bool,
}

/// Search result panel state.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPanel<'a> {
    Hidden,
    Shown(Vec<ResultEntry<'a>>),
}

impl<'a> SearchPanel<'a> {
    /// Listed entries; empty while hidden.
    pub fn entries(&self) -> &[ResultEntry<'a>] {
        match self {
            Self::Hidden => &[],
            Self::Shown(entries) => entries,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Result of one filter pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    pub visibility: Vec<VisibilityInstruction>,
    pub search: SearchPanel<'a>,
}

impl FilterOutcome<'_> {
    pub fn shown_count(&self) -> usize {
        self.visibility.iter().filter(|item| item.show).count()
    }
}

/// Runs one full filter/search pass over `store`.
///
/// Never fails; unknown selectors hide everything but do not affect search.
pub fn filter_markers<'a>(store: &'a MarkerStore, query: &FilterQuery) -> FilterOutcome<'a> {
    let needle = query.needle();

    let visibility = store
        .all()
        .iter()
        .map(|record| VisibilityInstruction {
            id: record.id(),
            show: query.selector.matches(record.category()) && record.contains_folded(&needle),
        })
        .collect::<Vec<_>>();

    let search = if query.is_blank() {
        SearchPanel::Hidden
    } else {
        let entries = store
            .all()
            .iter()
            .filter(|record| record.contains_folded(&needle))
            .map(result_entry)
            .collect::<Vec<_>>();
        if entries.is_empty() {
            SearchPanel::Hidden
        } else {
            SearchPanel::Shown(entries)
        }
    };

    let outcome = FilterOutcome { visibility, search };
    debug!(
        "event=filter_pass module=search status=ok total={} shown={} results={} query_len={}",
        store.len(),
        outcome.shown_count(),
        outcome.search.entries().len(),
        needle.chars().count()
    );
    outcome
}

fn result_entry(record: &MarkerRecord) -> ResultEntry<'_> {
    ResultEntry {
        id: record.id(),
        title: record.title(),
        description: record.description(),
        visual: record.visual(),
    }
}
