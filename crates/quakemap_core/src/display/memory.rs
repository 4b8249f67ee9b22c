//! In-memory display surface.
//!
//! Records every visual, the current view, the open popup, the result list
//! and the legend so callers without a real map (CLI, tests) can observe
//! exactly what a renderer would have been told.

use super::{DisplaySync, MarkerStyle, Popup, ResultEntry, VisualHandle};
use crate::config::MapViewConfig;
use crate::model::marker::GeoPoint;
use crate::store::counter::CategoryCounts;
use log::warn;

/// Snapshot of one attached visual.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualState {
    pub position: GeoPoint,
    pub style: MarkerStyle,
    pub popup: Popup,
    pub shown: bool,
}

/// One rendered result list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub visual_id: u64,
    pub label: String,
}

/// Display implementation that keeps all state in memory.
#[derive(Debug)]
pub struct InMemoryDisplay {
    visuals: Vec<VisualState>,
    center: GeoPoint,
    zoom: u8,
    open_popup: Option<u64>,
    result_list: Vec<ResultLine>,
    result_list_shown: bool,
    legend: Option<CategoryCounts>,
}

impl InMemoryDisplay {
    pub fn new(view: &MapViewConfig) -> Self {
        Self {
            visuals: Vec::new(),
            center: view.center,
            zoom: view.zoom,
            open_popup: None,
            result_list: Vec::new(),
            result_list_shown: false,
            legend: None,
        }
    }

    pub fn visual(&self, visual: &VisualHandle) -> Option<&VisualState> {
        self.visuals.get(slot(visual))
    }

    pub fn visuals(&self) -> &[VisualState] {
        &self.visuals
    }

    pub fn shown_count(&self) -> usize {
        self.visuals.iter().filter(|state| state.shown).count()
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Raw id of the visual whose popup is open.
    pub fn open_popup(&self) -> Option<u64> {
        self.open_popup
    }

    /// Current result rows; `None` while the panel is hidden.
    pub fn result_list(&self) -> Option<&[ResultLine]> {
        self.result_list_shown.then_some(self.result_list.as_slice())
    }

    pub fn legend(&self) -> Option<&CategoryCounts> {
        self.legend.as_ref()
    }

    fn state_mut(&mut self, visual: &VisualHandle) -> Option<&mut VisualState> {
        let state = self.visuals.get_mut(slot(visual));
        if state.is_none() {
            warn!(
                "event=display_lookup module=display status=error visual_id={} error_code=unknown_visual",
                visual.raw()
            );
        }
        state
    }
}

impl Default for InMemoryDisplay {
    fn default() -> Self {
        Self::new(&MapViewConfig::default())
    }
}

impl DisplaySync for InMemoryDisplay {
    fn attach(&mut self, position: GeoPoint, style: MarkerStyle, popup: Popup) -> VisualHandle {
        let raw = self.visuals.len() as u64;
        self.visuals.push(VisualState {
            position,
            style,
            popup,
            shown: true,
        });
        VisualHandle::new(raw)
    }

    fn show(&mut self, visual: &VisualHandle) {
        if let Some(state) = self.state_mut(visual) {
            state.shown = true;
        }
    }

    fn hide(&mut self, visual: &VisualHandle) {
        if let Some(state) = self.state_mut(visual) {
            state.shown = false;
        }
    }

    fn focus(&mut self, visual: &VisualHandle, zoom: u8) {
        let Some(position) = self.state_mut(visual).map(|state| state.position) else {
            return;
        };
        self.center = position;
        self.zoom = zoom;
        self.open_popup = Some(visual.raw());
    }

    fn render_result_list(&mut self, entries: &[ResultEntry<'_>]) {
        self.result_list = entries
            .iter()
            .map(|entry| ResultLine {
                visual_id: entry.visual.raw(),
                label: entry.label(),
            })
            .collect();
        self.result_list_shown = true;
    }

    fn hide_result_list(&mut self) {
        self.result_list.clear();
        self.result_list_shown = false;
    }

    fn render_legend(&mut self, counts: &CategoryCounts) {
        self.legend = Some(counts.clone());
    }
}

fn slot(visual: &VisualHandle) -> usize {
    usize::try_from(visual.raw()).unwrap_or(usize::MAX)
}
