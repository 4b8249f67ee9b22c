//! Bulk ingestion of the seismic feed into the marker store.
//!
//! # Responsibility
//! - Fetch or read the feed, decode it, and map accepted events to markers.
//!
//! # Invariants
//! - Each accepted event becomes exactly one `disaster` marker.
//! - Adds run one at a time; a failing add aborts the rest of the batch and
//!   keeps everything added before it (partial success).

pub mod fetch;
pub mod usgs;

use self::usgs::{classify, FeatureCollection, FeatureVerdict, QUAKE_TITLE};
use crate::config::FeedConfig;
use crate::display::DisplaySync;
use crate::model::marker::CATEGORY_DISASTER;
use crate::store::marker_store::{MarkerStore, StoreError};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type IngestResult<T> = Result<T, IngestError>;

/// Where the feed document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// Query the configured FDSN endpoint.
    Remote,
    /// Read a previously saved GeoJSON document.
    File(PathBuf),
}

/// Ingestion failure.
#[derive(Debug)]
pub enum IngestError {
    Http(reqwest::Error),
    Status {
        status: u16,
        body: Option<String>,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode(serde_json::Error),
    /// A store add failed after `accepted` markers were already added.
    Store {
        accepted: usize,
        source: StoreError,
    },
}

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(err) => write!(f, "feed request failed: {err}"),
            Self::Status { status, .. } => write!(f, "feed responded with HTTP {status}"),
            Self::Io { path, source } => {
                write!(f, "failed to read feed file `{}`: {source}", path.display())
            }
            Self::Decode(err) => write!(f, "malformed feed document: {err}"),
            Self::Store { accepted, source } => {
                write!(f, "ingestion aborted after {accepted} markers: {source}")
            }
        }
    }
}

impl Error for IngestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::Status { .. } => None,
            Self::Io { source, .. } => Some(source),
            Self::Decode(err) => Some(err),
            Self::Store { source, .. } => Some(source),
        }
    }
}

impl From<reqwest::Error> for IngestError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Per-run ingestion tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub accepted: usize,
    pub malformed: usize,
    pub out_of_bounds: usize,
    pub excluded: usize,
}

impl IngestReport {
    pub fn skipped(&self) -> usize {
        self.malformed + self.out_of_bounds + self.excluded
    }
}

/// Adds every accepted feature of `collection` to `store`, in feed order.
///
/// # Errors
/// - `IngestError::Store` when an add is rejected; earlier adds are kept.
pub fn ingest_collection<D: DisplaySync + ?Sized>(
    store: &mut MarkerStore,
    display: &mut D,
    collection: &FeatureCollection,
    config: &FeedConfig,
) -> IngestResult<IngestReport> {
    let mut report = IngestReport::default();

    for feature in &collection.features {
        let event = match classify(feature, config) {
            FeatureVerdict::Accepted(event) => event,
            FeatureVerdict::Malformed => {
                report.malformed += 1;
                continue;
            }
            FeatureVerdict::OutOfBounds => {
                report.out_of_bounds += 1;
                continue;
            }
            FeatureVerdict::Excluded => {
                report.excluded += 1;
                continue;
            }
        };

        if let Err(source) = store.add_with_popup(
            display,
            CATEGORY_DISASTER,
            QUAKE_TITLE,
            event.description(),
            event.position,
            event.popup(),
        ) {
            warn!(
                "event=feed_ingest module=ingest status=error error_code=add_rejected accepted={}",
                report.accepted
            );
            return Err(IngestError::Store {
                accepted: report.accepted,
                source,
            });
        }
        report.accepted += 1;
    }

    Ok(report)
}
