//! Display surface contract.
//!
//! # Responsibility
//! - Define what core needs from a map surface: attach, show/hide, focus,
//!   result list and legend rendering.
//! - Keep the core free of any concrete rendering technology.
//!
//! # Invariants
//! - `VisualHandle` is issued only by a display and owned by one record.
//! - `show`/`hide` are idempotent.

pub mod memory;

use crate::model::marker::{Category, GeoPoint, MarkerId};
use crate::store::counter::CategoryCounts;

/// Opaque reference to one on-map visual.
///
/// Not `Clone` or `Copy`: each handle has exactly one owning record.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct VisualHandle(u64);

impl VisualHandle {
    /// Wraps a display-assigned raw id. Only display implementations call this.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Category-appropriate marker look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    /// CSS class of the marker icon.
    pub icon_class: &'static str,
}

impl MarkerStyle {
    pub fn for_category(category: Category) -> Self {
        let icon_class = match category {
            Category::Crime => "marker-icon-red",
            Category::Disaster => "marker-icon-blue",
            Category::Protest => "marker-icon-yellow",
        };
        Self { icon_class }
    }
}

/// Detail popup bound to a marker visual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Popup {
    pub fn new(heading: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            lines,
        }
    }
}

/// One row of the search result list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultEntry<'a> {
    pub id: MarkerId,
    pub title: &'a str,
    pub description: &'a str,
    pub visual: &'a VisualHandle,
}

impl ResultEntry<'_> {
    /// List text shown for the entry: `title: description`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.title, self.description)
    }
}

/// Map surface driven by the core.
pub trait DisplaySync {
    /// Creates a shown visual at `position` and returns its handle.
    fn attach(&mut self, position: GeoPoint, style: MarkerStyle, popup: Popup) -> VisualHandle;
    fn show(&mut self, visual: &VisualHandle);
    fn hide(&mut self, visual: &VisualHandle);
    /// Centers the view on `visual` at `zoom` and opens its popup.
    fn focus(&mut self, visual: &VisualHandle, zoom: u8);
    /// Replaces the result list with `entries` and shows it.
    fn render_result_list(&mut self, entries: &[ResultEntry<'_>]);
    fn hide_result_list(&mut self);
    fn render_legend(&mut self, counts: &CategoryCounts);
}

#[cfg(test)]
mod tests {
    use super::{MarkerStyle, ResultEntry, VisualHandle};
    use crate::model::marker::{Category, MarkerId};

    #[test]
    fn disaster_markers_use_blue_icon() {
        assert_eq!(
            MarkerStyle::for_category(Category::Disaster).icon_class,
            "marker-icon-blue"
        );
    }

    #[test]
    fn result_entry_label_joins_title_and_description() {
        let visual = VisualHandle::new(3);
        let entry = ResultEntry {
            id: MarkerId::from_index(0),
            title: "지진",
            description: "위치: Gyeongju",
            visual: &visual,
        };
        assert_eq!(entry.label(), "지진: 위치: Gyeongju");
    }
}
