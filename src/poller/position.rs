use std::time::Duration;

use chrono::Utc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::poller::source::PositionSource;
use crate::state::SharedStatus;

struct WorkerHandle {
    stop_tx: oneshot::Sender<()>,
    join: JoinHandle<()>,
}

/// Repeatedly fetches the current sub-satellite point and publishes it.
/// Failures are logged and the previous sample stays on display; the next
/// tick is the retry.
pub struct PositionPoller {
    worker: Option<WorkerHandle>,
}

impl PositionPoller {
    pub fn start(source: PositionSource, shared: SharedStatus, period: Duration) -> Self {
        let (stop_tx, stop_rx) = oneshot::channel();
        let join = tokio::spawn(poll_loop(source, shared, period, stop_rx));
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

async fn poll_loop(
    source: PositionSource,
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
            log::info!("position poller stopped");
            return;
        }

        match source.fetch(Utc::now()).await {
            Ok(sample) => shared.publish_position(sample),
            Err(e) => log::warn!("position poll failed, keeping last sample: {}", e),
        }
    }
}
