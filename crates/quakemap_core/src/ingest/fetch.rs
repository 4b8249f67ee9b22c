//! Feed retrieval over HTTP or from disk.

use super::usgs::{parse_feed, FeatureCollection};
use super::{IngestError, IngestResult};
use crate::config::FeedConfig;
use log::{error, info};
use std::path::Path;
use std::time::Instant;

const USER_AGENT: &str = concat!("quakemap/", env!("CARGO_PKG_VERSION"));

/// Queries the configured FDSN endpoint and decodes the response.
///
/// # Errors
/// - `Http` for transport failures and timeouts.
/// - `Status` for non-2xx responses.
/// - `Decode` when the body is not a feed document.
pub async fn fetch_feed(config: &FeedConfig) -> IngestResult<FeatureCollection> {
    let started_at = Instant::now();
    info!("event=feed_fetch module=ingest status=start mode=remote");

    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(USER_AGENT)
        .build()?;
    let response = client
        .get(&config.endpoint)
        .query(&config.query_params())
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.ok();
        error!(
            "event=feed_fetch module=ingest status=error mode=remote duration_ms={} http_status={}",
            started_at.elapsed().as_millis(),
            status.as_u16()
        );
        return Err(IngestError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;
    let collection = parse_feed(&body)?;
    info!(
        "event=feed_fetch module=ingest status=ok mode=remote duration_ms={} features={}",
        started_at.elapsed().as_millis(),
        collection.features.len()
    );
    Ok(collection)
}

/// Reads and decodes a saved feed document.
pub fn load_feed_file(path: impl AsRef<Path>) -> IngestResult<FeatureCollection> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let collection = parse_feed(&body)?;
    info!(
        "event=feed_fetch module=ingest status=ok mode=file features={}",
        collection.features.len()
    );
    Ok(collection)
}
