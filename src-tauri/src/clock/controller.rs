use std::sync::Arc;

use log::{info, warn};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{self, Duration, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use crate::events::{EventSink, WidgetEvent};

use super::ClockState;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

struct TickerTask {
    handle: JoinHandle<()>,
    cancel: CancellationToken,
}

/// Owns the 1-second ticker that drives the widget's face. Each tick
/// independently samples the wall clock; there is no catch-up after a stall.
pub struct ClockController {
    state: Arc<Mutex<ClockState>>,
    sink: Arc<dyn EventSink>,
    ticker: Mutex<Option<TickerTask>>,
}

impl ClockController {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ClockState::default())),
            sink,
            ticker: Mutex::new(None),
        }
    }

    pub async fn get_state(&self) -> ClockState {
        self.state.lock().await.clone()
    }

    pub async fn start(&self) {
        let mut ticker_guard = self.ticker.lock().await;
        if let Some(task) = ticker_guard.take() {
            task.cancel.cancel();
            task.handle.abort();
        }

        let state = self.state.clone();
        let sink = self.sink.clone();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(TICK_INTERVAL);
            // A stalled runtime drops ticks instead of replaying them.
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let snapshot = ClockState::now();
                        {
                            let mut guard = state.lock().await;
                            *guard = snapshot.clone();
                        }
                        if let Err(err) = sink.emit(WidgetEvent::ClockTick(snapshot)) {
                            warn!("clock tick emit failed: {err}");
                        }
                    }
                    _ = token.cancelled() => {
                        info!("clock ticker shutting down");
                        break;
                    }
                }
            }
        });

        *ticker_guard = Some(TickerTask { handle, cancel });
    }

    #[allow(dead_code)]
    pub async fn stop(&self) {
        if let Some(task) = self.ticker.lock().await.take() {
            task.cancel.cancel();
            task.handle.abort();
        }
    }
}
