//! Feed and map view configuration.
//!
//! # Responsibility
//! - Provide defaults for the seismic feed query and the initial map view.
//! - Allow environment overrides without failing on malformed values.
//!
//! # Invariants
//! - A malformed environment value falls back to the default silently.

use crate::model::marker::GeoPoint;
use std::time::Duration;

pub const DEFAULT_FEED_ENDPOINT: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";
pub const DEFAULT_FEED_START: &str = "2020-01-01";
pub const DEFAULT_FEED_END: &str = "2024-12-31";
pub const DEFAULT_EXCLUDED_PLACE: &str = "Japan";
const DEFAULT_FEED_TIMEOUT_SECS: u64 = 15;

pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Inclusive latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Rectangle around the Korean peninsula.
    pub fn korea() -> Self {
        Self {
            min_lat: 33.0,
            max_lat: 43.0,
            min_lon: 124.0,
            max_lon: 132.0,
        }
    }

    /// Returns whether `point` lies inside, edges included.
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lon >= self.min_lon
            && point.lon <= self.max_lon
    }
}

/// Seismic feed query settings.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub endpoint: String,
    /// `YYYY-MM-DD` lower bound passed as `starttime`.
    pub start: String,
    /// `YYYY-MM-DD` upper bound passed as `endtime`.
    pub end: String,
    pub bounds: BoundingBox,
    /// Features whose place text contains this are dropped.
    pub excluded_place: Option<String>,
    pub timeout: Duration,
}

impl FeedConfig {
    /// Defaults with `QUAKEMAP_FEED_*` environment overrides applied.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: env_string("QUAKEMAP_FEED_URL").unwrap_or(defaults.endpoint),
            start: env_string("QUAKEMAP_FEED_START").unwrap_or(defaults.start),
            end: env_string("QUAKEMAP_FEED_END").unwrap_or(defaults.end),
            timeout: env_parsed("QUAKEMAP_FEED_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            ..defaults
        }
    }

    /// FDSN query parameters for the configured window and bounds.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("format", "geojson".to_string()),
            ("starttime", self.start.clone()),
            ("endtime", self.end.clone()),
            ("minlatitude", format!("{:.1}", self.bounds.min_lat)),
            ("maxlatitude", format!("{:.1}", self.bounds.max_lat)),
            ("minlongitude", format!("{:.1}", self.bounds.min_lon)),
            ("maxlongitude", format!("{:.1}", self.bounds.max_lon)),
        ]
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_FEED_ENDPOINT.to_string(),
            start: DEFAULT_FEED_START.to_string(),
            end: DEFAULT_FEED_END.to_string(),
            bounds: BoundingBox::korea(),
            excluded_place: Some(DEFAULT_EXCLUDED_PLACE.to_string()),
            timeout: Duration::from_secs(DEFAULT_FEED_TIMEOUT_SECS),
        }
    }
}

/// Initial map view and tile layer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewConfig {
    pub center: GeoPoint,
    pub zoom: u8,
    pub min_zoom: u8,
    /// Zoom used when a search result is selected.
    pub focus_zoom: u8,
    pub tile_url: String,
    pub tile_attribution: String,
    pub zoom_control_position: &'static str,
}

impl MapViewConfig {
    /// Defaults with `QUAKEMAP_CENTER_*`/`QUAKEMAP_ZOOM` overrides applied.
    ///
    /// The zoom is clamped to `min_zoom`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let center = GeoPoint::new(
            env_parsed("QUAKEMAP_CENTER_LAT").unwrap_or(defaults.center.lat),
            env_parsed("QUAKEMAP_CENTER_LON").unwrap_or(defaults.center.lon),
        );
        let zoom = env_parsed("QUAKEMAP_ZOOM")
            .unwrap_or(defaults.zoom)
            .max(defaults.min_zoom);
        Self {
            center,
            zoom,
            ..defaults
        }
    }
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            center: GeoPoint::new(35.9078, 127.7669),
            zoom: 7,
            min_zoom: 6,
            focus_zoom: 12,
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            zoom_control_position: "bottomright",
        }
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env_string(key).and_then(|value| value.parse().ok())
}
