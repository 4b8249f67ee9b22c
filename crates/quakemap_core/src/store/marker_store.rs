//! Ordered marker store.
//!
//! # Responsibility
//! - Validate marker input, attach its visual, and append the record.
//! - Expose a read-only, insertion-ordered view for the search engine.
//!
//! # Invariants
//! - Validation runs before `attach`, so a rejected add never creates an
//!   orphaned visual.
//! - Each successful add increments the counter exactly once.

use crate::display::{DisplaySync, MarkerStyle, Popup};
use crate::model::marker::{Category, GeoPoint, MarkerId, MarkerRecord, PositionError};
use crate::store::counter::{CategoryCounter, CategoryCounts};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for rejected `add` calls.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Category text is not one of the known ids.
    InvalidCategory(String),
    /// Position is not a finite, in-range coordinate pair.
    InvalidInput(PositionError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCategory(value) => write!(f, "unknown marker category `{value}`"),
            Self::InvalidInput(err) => write!(f, "invalid marker input: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCategory(_) => None,
            Self::InvalidInput(err) => Some(err),
        }
    }
}

impl From<PositionError> for StoreError {
    fn from(value: PositionError) -> Self {
        Self::InvalidInput(value)
    }
}

/// Append-only marker collection plus its category counter.
#[derive(Debug, Default)]
pub struct MarkerStore {
    records: Vec<MarkerRecord>,
    counter: CategoryCounter,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one marker with a popup built from its title and description.
    ///
    /// # Errors
    /// - `InvalidCategory` when `category` is not a known id.
    /// - `InvalidInput` when `position` fails [`GeoPoint::validate`].
    pub fn add<D: DisplaySync + ?Sized>(
        &mut self,
        display: &mut D,
        category: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        position: GeoPoint,
    ) -> StoreResult<MarkerId> {
        let title = title.into();
        let description = description.into();
        let popup = Popup::new(title.clone(), vec![description.clone()]);
        self.add_with_popup(display, category, title, description, position, popup)
    }

    /// Adds one marker with a caller-provided popup.
    ///
    /// Same contract as [`MarkerStore::add`].
    pub fn add_with_popup<D: DisplaySync + ?Sized>(
        &mut self,
        display: &mut D,
        category: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        position: GeoPoint,
        popup: Popup,
    ) -> StoreResult<MarkerId> {
        let Some(category) = Category::parse(category) else {
            warn!(
                "event=marker_add module=store status=error error_code=invalid_category category_len={}",
                category.len()
            );
            return Err(StoreError::InvalidCategory(category.to_string()));
        };
        if let Err(err) = position.validate() {
            warn!(
                "event=marker_add module=store status=error error_code=invalid_position category={}",
                category
            );
            return Err(err.into());
        }

        let visual = display.attach(position, MarkerStyle::for_category(category), popup);
        let id = MarkerId::from_index(self.records.len());
        self.records.push(MarkerRecord::new(
            id,
            category,
            title.into(),
            description.into(),
            position,
            visual,
        ));
        self.counter.increment(category);

        debug!(
            "event=marker_add module=store status=ok id={} category={} total={}",
            id.index(),
            category,
            self.records.len()
        );
        Ok(id)
    }

    /// Read-only view in insertion order.
    pub fn all(&self) -> &[MarkerRecord] {
        &self.records
    }

    pub fn get(&self, id: MarkerId) -> Option<&MarkerRecord> {
        self.records.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current per-category counts.
    pub fn counts(&self) -> CategoryCounts {
        self.counter.snapshot()
    }
}
