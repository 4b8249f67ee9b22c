//! Map session use-case service.
//!
//! # Responsibility
//! - Populate the store from the feed once per session.
//! - Re-run filter/search on every selector or query change and apply the
//!   outcome to the display as a full resync.
//! - Focus a selected search result and close the result list.
//!
//! # Invariants
//! - Every filter pass sends exactly one show/hide per stored marker.
//! - The legend is re-rendered after every ingestion attempt, even failed ones.

use crate::config::{FeedConfig, MapViewConfig};
use crate::display::DisplaySync;
use crate::ingest::fetch::{fetch_feed, load_feed_file};
use crate::ingest::usgs::FeatureCollection;
use crate::ingest::{ingest_collection, FeedSource, IngestReport, IngestResult};
use crate::model::marker::{GeoPoint, MarkerId};
use crate::search::filter::{filter_markers, CategorySelector, FilterQuery, SearchPanel};
use crate::store::counter::CategoryCounts;
use crate::store::marker_store::{MarkerStore, StoreResult};
use log::{debug, error, info};
use std::time::Instant;

/// One application session: store, display, view settings and current input.
pub struct MapSession<D: DisplaySync> {
    store: MarkerStore,
    display: D,
    view: MapViewConfig,
    query: FilterQuery,
}

impl<D: DisplaySync> MapSession<D> {
    /// Creates an empty session rendering through `display`.
    pub fn new(display: D, view: MapViewConfig) -> Self {
        Self {
            store: MarkerStore::new(),
            display,
            view,
            query: FilterQuery::default(),
        }
    }

    pub fn store(&self) -> &MarkerStore {
        &self.store
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn view(&self) -> &MapViewConfig {
        &self.view
    }

    /// Current selector and query.
    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Adds one marker through the store.
    pub fn add_marker(
        &mut self,
        category: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        position: GeoPoint,
    ) -> StoreResult<MarkerId> {
        self.store
            .add(&mut self.display, category, title, description, position)
    }

    /// Loads the feed from `source` and ingests it.
    ///
    /// The single suspend point is the fetch; all adds run synchronously
    /// afterwards. Failures are logged and returned; markers added before a
    /// failure stay, and the legend always reflects the resulting store.
    pub async fn load_feed(
        &mut self,
        source: &FeedSource,
        config: &FeedConfig,
    ) -> IngestResult<IngestReport> {
        let started_at = Instant::now();
        let collection = match source {
            FeedSource::Remote => fetch_feed(config).await,
            FeedSource::File(path) => load_feed_file(path),
        };
        let result = collection.and_then(|collection| self.ingest(&collection, config));
        self.render_legend();

        match &result {
            Ok(report) => info!(
                "event=feed_load module=service status=ok duration_ms={} accepted={} skipped={}",
                started_at.elapsed().as_millis(),
                report.accepted,
                report.skipped()
            ),
            Err(err) => error!(
                "event=feed_load module=service status=error duration_ms={} markers={} error={}",
                started_at.elapsed().as_millis(),
                self.store.len(),
                err
            ),
        }
        result
    }

    /// Ingests an already decoded feed document without touching the legend.
    pub fn ingest(
        &mut self,
        collection: &FeatureCollection,
        config: &FeedConfig,
    ) -> IngestResult<IngestReport> {
        ingest_collection(&mut self.store, &mut self.display, collection, config)
    }

    /// Pushes current counts to the display legend.
    pub fn render_legend(&mut self) {
        let counts = self.store.counts();
        self.display.render_legend(&counts);
    }

    pub fn legend(&self) -> CategoryCounts {
        self.store.counts()
    }

    /// Category control changed.
    pub fn on_category_change(&mut self, value: &str) {
        self.query.selector = CategorySelector::parse(value);
        self.refresh();
    }

    /// Search input changed.
    pub fn on_query_change(&mut self, value: &str) {
        self.query.text = value.to_string();
        self.refresh();
    }

    /// Replaces selector and query in one step, then resyncs.
    pub fn apply_query(&mut self, query: FilterQuery) {
        self.query = query;
        self.refresh();
    }

    /// Re-runs the filter with the current input and applies it.
    pub fn refresh(&mut self) {
        let outcome = filter_markers(&self.store, &self.query);

        for instruction in &outcome.visibility {
            let Some(record) = self.store.get(instruction.id) else {
                continue;
            };
            if instruction.show {
                self.display.show(record.visual());
            } else {
                self.display.hide(record.visual());
            }
        }

        match &outcome.search {
            SearchPanel::Hidden => self.display.hide_result_list(),
            SearchPanel::Shown(entries) => self.display.render_result_list(entries),
        }
    }

    /// User picked a result entry: focus its marker and close the list.
    ///
    /// Returns `false` for an unknown id, leaving the display untouched.
    pub fn select_result(&mut self, id: MarkerId) -> bool {
        let Some(record) = self.store.get(id) else {
            debug!(
                "event=result_select module=service status=error id={} error_code=unknown_marker",
                id.index()
            );
            return false;
        };
        self.display.focus(record.visual(), self.view.focus_zoom);
        self.display.hide_result_list();
        true
    }
}
