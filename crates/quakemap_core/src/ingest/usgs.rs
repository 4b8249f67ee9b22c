//! USGS FDSN GeoJSON event feed model.
//!
//! # Responsibility
//! - Decode the subset of the GeoJSON feed the map consumes.
//! - Decide per feature whether it becomes a marker.
//! - Build marker description and popup text for accepted events.
//!
//! # Invariants
//! - GeoJSON coordinates are `[lon, lat, depth?]`; the order is swapped into
//!   `GeoPoint { lat, lon }` here and nowhere else.

use super::{IngestError, IngestResult};
use crate::clock::format_kst_timestamp;
use crate::config::FeedConfig;
use crate::display::Popup;
use crate::model::marker::GeoPoint;
use serde::Deserialize;

/// Marker title for every earthquake.
pub const QUAKE_TITLE: &str = "지진";
/// Popup heading for every earthquake.
pub const QUAKE_POPUP_HEADING: &str = "지진 발생";
const UNKNOWN_TIME: &str = "-";

/// Top-level feed document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One event in the feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Properties {
    pub mag: Option<f64>,
    pub place: Option<String>,
    /// Origin time in epoch milliseconds.
    pub time: Option<i64>,
}

/// Accepted earthquake, ready to become one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct QuakeEvent {
    pub position: GeoPoint,
    pub time_ms: Option<i64>,
    pub place: String,
    pub magnitude: Option<f64>,
}

impl QuakeEvent {
    /// KST time text, or `-` when the feed carried no usable time.
    pub fn time_text(&self) -> String {
        self.time_ms
            .and_then(format_kst_timestamp)
            .unwrap_or_else(|| UNKNOWN_TIME.to_string())
    }

    /// Searchable marker description.
    pub fn description(&self) -> String {
        format!("발생일: {}, 위치: {}", self.time_text(), self.place)
    }

    pub fn popup(&self) -> Popup {
        Popup::new(
            QUAKE_POPUP_HEADING,
            vec![
                format!("발생일: {}", self.time_text()),
                format!("위치: {}", self.place),
            ],
        )
    }
}

/// Acceptance decision for one feature.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureVerdict {
    Accepted(QuakeEvent),
    /// Missing geometry, fewer than two coordinates, or non-finite values.
    Malformed,
    OutOfBounds,
    /// Place text names the excluded region.
    Excluded,
}

/// Classifies one feature against the feed bounds and exclusion rule.
pub fn classify(feature: &Feature, config: &FeedConfig) -> FeatureVerdict {
    let Some(position) = feature.position() else {
        return FeatureVerdict::Malformed;
    };
    if !config.bounds.contains(position) {
        return FeatureVerdict::OutOfBounds;
    }

    let place = feature.properties.place.clone().unwrap_or_default();
    if let Some(excluded) = config.excluded_place.as_deref() {
        if !excluded.is_empty() && place.contains(excluded) {
            return FeatureVerdict::Excluded;
        }
    }

    FeatureVerdict::Accepted(QuakeEvent {
        position,
        time_ms: feature.properties.time,
        place,
        magnitude: feature.properties.mag,
    })
}

impl Feature {
    /// `(lat, lon)` from the `[lon, lat, ..]` coordinate array.
    pub fn position(&self) -> Option<GeoPoint> {
        let coordinates = &self.geometry.as_ref()?.coordinates;
        let (lon, lat) = match coordinates.as_slice() {
            [lon, lat, ..] => (*lon, *lat),
            _ => return None,
        };
        (lon.is_finite() && lat.is_finite()).then(|| GeoPoint::new(lat, lon))
    }
}

/// Decodes a feed document from JSON text.
pub fn parse_feed(body: &str) -> IngestResult<FeatureCollection> {
    serde_json::from_str(body).map_err(IngestError::Decode)
}
