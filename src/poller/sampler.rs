use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::orbit::{build_track_set, OrbitalStats, Propagator};
use crate::state::SharedStatus;

struct WorkerHandle {
    stop_tx: oneshot::Sender<()>,
    join: JoinHandle<()>,
}

/// Regenerates the predicted path pair (dense orbit path plus decimated
/// ground track) and the element-set stats, publishing both as one
/// replacement. A failed cycle leaves the previous track on display.
pub struct TrackSampler {
    worker: Option<WorkerHandle>,
}

impl TrackSampler {
    pub fn start(
        propagator: Arc<Propagator>,
        line1: String,
        line2: String,
        shared: SharedStatus,
        period: Duration,
    ) -> Self {
        let (stop_tx, stop_rx) = oneshot::channel();
        let join = tokio::spawn(sample_loop(propagator, line1, line2, shared, period, stop_rx));
        Self {
            worker: Some(WorkerHandle { stop_tx, join }),
        }
    }

    pub async fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop_tx.send(());
            let _ = worker.join.await;
        }
    }
}

async fn sample_loop(
    propagator: Arc<Propagator>,
    line1: String,
    line2: String,
    shared: SharedStatus,
    period: Duration,
    mut stop_rx: oneshot::Receiver<()>,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        let stopped = tokio::select! {
            _ = ticker.tick() => false,
            _ = &mut stop_rx => true,
        };
        if stopped {
            log::info!("track sampler stopped");
            return;
        }

        let stats = match OrbitalStats::from_tle_lines(&line1, &line2) {
            Ok(stats) => stats,
            Err(e) => {
                log::warn!("element set stats failed, keeping last track: {}", e);
                continue;
            }
        };

        match build_track_set(&propagator, stats.period_minutes, Utc::now()) {
            Ok(track) => shared.publish_track(track, stats),
            Err(e) => log::warn!("track sweep failed, keeping last track: {}", e),
        }
    }
}
