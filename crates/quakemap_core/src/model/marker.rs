//! Marker domain model.
//!
//! # Responsibility
//! - Define the record stored for every plotted event.
//! - Parse and validate the category and position inputs of a record.
//!
//! # Invariants
//! - `MarkerId` equals the record's index in insertion order.
//! - A record exclusively owns its `VisualHandle`; the handle is never cloned.
//! - Folded (lowercased) copies of title/description are computed once on
//!   creation and always mirror the stored text.

use crate::display::VisualHandle;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Category id for crime markers.
pub const CATEGORY_CRIME: &str = "crime";
/// Category id for disaster markers.
pub const CATEGORY_DISASTER: &str = "disaster";
/// Category id for protest markers.
pub const CATEGORY_PROTEST: &str = "protest";

/// Fixed classification used for filtering and legend counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Crime,
    Disaster,
    Protest,
}

impl Category {
    /// Every known category, in legend order.
    pub const ALL: [Category; 3] = [Category::Crime, Category::Disaster, Category::Protest];

    /// Stable string id used by selectors and feeds.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Crime => CATEGORY_CRIME,
            Self::Disaster => CATEGORY_DISASTER,
            Self::Protest => CATEGORY_PROTEST,
        }
    }

    /// Parses one category from its string id.
    ///
    /// Surrounding whitespace is ignored; the id itself must match exactly.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            CATEGORY_CRIME => Some(Self::Crime),
            CATEGORY_DISASTER => Some(Self::Disaster),
            CATEGORY_PROTEST => Some(Self::Protest),
            _ => None,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position validation failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionError {
    NonFinite { lat: f64, lon: f64 },
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl Display for PositionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite { lat, lon } => {
                write!(f, "position ({lat}, {lon}) is not a finite coordinate pair")
            }
            Self::LatitudeOutOfRange(lat) => {
                write!(f, "latitude {lat} is outside [-90, 90]")
            }
            Self::LongitudeOutOfRange(lon) => {
                write!(f, "longitude {lon} is outside [-180, 180]")
            }
        }
    }
}

impl Error for PositionError {}

/// Geographic coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Checks that both coordinates are finite and inside WGS84 ranges.
    pub fn validate(&self) -> Result<(), PositionError> {
        if !self.lat.is_finite() || !self.lon.is_finite() {
            return Err(PositionError::NonFinite {
                lat: self.lat,
                lon: self.lon,
            });
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(PositionError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(PositionError::LongitudeOutOfRange(self.lon));
        }
        Ok(())
    }
}

/// Insertion-order identity of a stored marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(usize);

impl MarkerId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based position in the store.
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for MarkerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One plotted event.
///
/// Records are only built by [`crate::MarkerStore::add`], which guarantees the
/// visual handle was attached through the display before the record exists.
#[derive(Debug)]
pub struct MarkerRecord {
    id: MarkerId,
    category: Category,
    title: String,
    description: String,
    title_folded: String,
    description_folded: String,
    position: GeoPoint,
    visual: VisualHandle,
}

impl MarkerRecord {
    pub(crate) fn new(
        id: MarkerId,
        category: Category,
        title: String,
        description: String,
        position: GeoPoint,
        visual: VisualHandle,
    ) -> Self {
        Self {
            id,
            category,
            title_folded: fold_case(&title),
            description_folded: fold_case(&description),
            title,
            description,
            position,
            visual,
        }
    }

    pub fn id(&self) -> MarkerId {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn visual(&self) -> &VisualHandle {
        &self.visual
    }

    /// Returns whether `needle` occurs in the title or description.
    ///
    /// `needle` must already be folded with [`fold_case`]; an empty needle
    /// matches every record.
    pub fn contains_folded(&self, needle: &str) -> bool {
        self.title_folded.contains(needle) || self.description_folded.contains(needle)
    }
}

/// Case-folds text for substring comparison.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}
