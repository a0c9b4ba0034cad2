use std::sync::{Arc, Mutex};

use serde::Serialize;
use utoipa::ToSchema;

use crate::orbit::{GeodeticSample, OrbitalStats, TrackSet};

/// `Loading` until the first successful position sample; `Ready` forever
/// after, since failed refreshes keep the last good value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DashboardMode {
    Loading,
    Ready,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardStatus {
    pub mode: DashboardMode,
    pub position: Option<GeodeticSample>,
    pub track: TrackSet,
    pub stats: Option<OrbitalStats>,
}

impl DashboardStatus {
    fn new() -> Self {
        Self {
            mode: DashboardMode::Loading,
            position: None,
            track: TrackSet::default(),
            stats: None,
        }
    }
}

/// Shared display state. One writer per field group (position poller, track
/// sampler), any number of snapshot readers; every publish replaces its
/// field group whole under a single lock acquisition.
#[derive(Clone)]
pub struct SharedStatus {
    inner: Arc<Mutex<DashboardStatus>>,
}

impl SharedStatus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(DashboardStatus::new())),
        }
    }

    pub fn snapshot(&self) -> DashboardStatus {
        self.inner.lock().unwrap().clone()
    }

    pub fn publish_position(&self, sample: GeodeticSample) {
        let mut locked = self.inner.lock().unwrap();
        locked.position = Some(sample);
        locked.mode = DashboardMode::Ready;
    }

    pub fn publish_track(&self, track: TrackSet, stats: OrbitalStats) {
        let mut locked = self.inner.lock().unwrap();
        locked.track = track;
        locked.stats = Some(stats);
    }
}

impl Default for SharedStatus {
    fn default() -> Self {
        Self::new()
    }
}
