//! Core domain logic for the quake map.
//! This crate owns the marker registry, the category counter and the
//! filter/search engine; map surfaces plug in through [`DisplaySync`].

pub mod clock;
pub mod config;
pub mod display;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use clock::{format_kst_timestamp, kst_clock_now, kst_clock_string};
pub use config::{BoundingBox, FeedConfig, MapViewConfig};
pub use display::memory::{InMemoryDisplay, ResultLine, VisualState};
pub use display::{DisplaySync, MarkerStyle, Popup, ResultEntry, VisualHandle};
pub use ingest::fetch::{fetch_feed, load_feed_file};
pub use ingest::usgs::{parse_feed, Feature, FeatureCollection, QuakeEvent};
pub use ingest::{ingest_collection, FeedSource, IngestError, IngestReport, IngestResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::marker::{Category, GeoPoint, MarkerId, MarkerRecord, PositionError};
pub use search::filter::{
    filter_markers, CategorySelector, FilterOutcome, FilterQuery, SearchPanel,
    VisibilityInstruction,
};
pub use service::map_session::MapSession;
pub use store::counter::{CategoryCounter, CategoryCounts};
pub use store::marker_store::{MarkerStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
