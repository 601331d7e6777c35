use std::sync::Arc;

use log::{info, warn};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{self, Duration, Instant},
};

use crate::events::{
    CloseButtonEvent, EventSink, RequiredTapsEvent, VisibilityEvent, WidgetEvent,
};
use crate::settings::{DismissAction, GestureSettings};

use super::state::{InteractionState, DEFAULT_REQUIRED_TAPS, FOCUSED_REQUIRED_TAPS};
use super::taps::TapTracker;

/// Delays driving the deferred interaction work.
#[derive(Debug, Clone, Copy)]
pub struct InteractionTimings {
    /// Wait after focus gain before lowering the tap requirement, so the
    /// click that activated the app does not count toward the gesture.
    pub activation_settle: Duration,
    /// How long a dismissed widget stays hidden or mirrored.
    pub restore_delay: Duration,
    /// Maximum spacing between taps of one run.
    pub multi_tap_window: Duration,
}

impl InteractionTimings {
    pub fn from_env() -> Self {
        let debug_mode = std::env::var("FLOATCLOCK_DEBUG")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            activation_settle: Duration::from_millis(200),
            restore_delay: if debug_mode {
                Duration::from_secs(6)
            } else {
                Duration::from_secs(60)
            },
            multi_tap_window: Duration::from_millis(400),
        }
    }
}

/// Hover, focus and gesture state machine for the widget.
///
/// All deferred work (activation settle, hide restore, mirror restore) is a
/// one-shot task whose handle stays with the controller, so a re-trigger can
/// abort and re-arm it instead of stacking callbacks.
pub struct InteractionController {
    state: Arc<Mutex<InteractionState>>,
    taps: Mutex<TapTracker>,
    sink: Arc<dyn EventSink>,
    gesture: GestureSettings,
    timings: InteractionTimings,
    settle: Mutex<Option<JoinHandle<()>>>,
    hide_restore: Mutex<Option<JoinHandle<()>>>,
    mirror_restore: Mutex<Option<JoinHandle<()>>>,
}

impl InteractionController {
    pub fn new(
        sink: Arc<dyn EventSink>,
        gesture: GestureSettings,
        timings: InteractionTimings,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(InteractionState::new())),
            taps: Mutex::new(TapTracker::new(timings.multi_tap_window)),
            sink,
            gesture,
            timings,
            settle: Mutex::new(None),
            hide_restore: Mutex::new(None),
            mirror_restore: Mutex::new(None),
        }
    }

    pub async fn get_state(&self) -> InteractionState {
        self.state.lock().await.clone()
    }

    /// The tracking layer reported the pointer entering the widget bounds.
    pub async fn pointer_entered(&self) {
        let mut state = self.state.lock().await;
        if state.hovered {
            return;
        }
        state.hovered = true;
        self.emit_close_button(&state);
    }

    /// The tracking layer reported the pointer leaving the widget bounds.
    pub async fn pointer_exited(&self) {
        let mut state = self.state.lock().await;
        if !state.hovered {
            return;
        }
        state.hovered = false;
        self.emit_close_button(&state);
    }

    /// Focus gained: after the settle delay, two taps suffice.
    pub async fn app_activated(&self) {
        let mut settle = self.settle.lock().await;
        if let Some(handle) = settle.take() {
            handle.abort();
        }

        let state = self.state.clone();
        let sink = self.sink.clone();
        let delay = self.timings.activation_settle;

        *settle = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            let mut guard = state.lock().await;
            guard.required_taps = FOCUSED_REQUIRED_TAPS;
            let _ = sink.emit(WidgetEvent::RequiredTaps(RequiredTapsEvent {
                required_taps: guard.required_taps,
            }));
        }));
    }

    /// Focus lost: the next gesture's first tap will go to activation again,
    /// so require three taps immediately and drop any pending settle.
    pub async fn app_resigned(&self) {
        if let Some(handle) = self.settle.lock().await.take() {
            handle.abort();
        }
        let mut state = self.state.lock().await;
        state.required_taps = DEFAULT_REQUIRED_TAPS;
        let _ = self.sink.emit(WidgetEvent::RequiredTaps(RequiredTapsEvent {
            required_taps: state.required_taps,
        }));
    }

    /// Records one physical tap; fires the dismiss gesture when the run
    /// reaches the current required count.
    pub async fn register_tap(&self) {
        let required = self.state.lock().await.required_taps;
        let run = self.taps.lock().await.record(Instant::now());
        if run < required {
            return;
        }
        self.taps.lock().await.reset();
        info!("dismiss gesture recognized ({required} taps)");

        match self.gesture.dismiss {
            DismissAction::Hide => self.trigger_hide().await,
            DismissAction::Mirror => self.trigger_mirror().await,
        }
    }

    async fn trigger_hide(&self) {
        {
            let mut state = self.state.lock().await;
            state.hidden = true;
            self.emit_visibility(&state);
        }

        // A re-trigger replaces the pending restore, so the 60s window
        // always counts from the latest gesture.
        let mut pending = self.hide_restore.lock().await;
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let state = self.state.clone();
        let sink = self.sink.clone();
        let delay = self.timings.restore_delay;

        *pending = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            let mut guard = state.lock().await;
            guard.hidden = false;
            let _ = sink.emit(WidgetEvent::Visibility(VisibilityEvent { hidden: false }));
        }));
    }

    async fn trigger_mirror(&self) {
        if self.gesture.legacy_double_restore {
            self.trigger_mirror_legacy().await;
            return;
        }

        {
            let mut state = self.state.lock().await;
            if !state.mirrored {
                state.mirrored = true;
                self.emit_mirror();
            }
            // Already mirrored: keep the position, only extend the window.
        }

        let mut pending = self.mirror_restore.lock().await;
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let state = self.state.clone();
        let sink = self.sink.clone();
        let delay = self.timings.restore_delay;

        *pending = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            let mut guard = state.lock().await;
            guard.mirrored = false;
            let _ = sink.emit(WidgetEvent::MirrorRequested);
        }));
    }

    /// Original behavior: every trigger mirrors and arms its own restore, so
    /// rapid re-triggers stack extra moves.
    async fn trigger_mirror_legacy(&self) {
        {
            let mut state = self.state.lock().await;
            state.mirrored = !state.mirrored;
        }
        self.emit_mirror();

        let state = self.state.clone();
        let sink = self.sink.clone();
        let delay = self.timings.restore_delay;

        tokio::spawn(async move {
            time::sleep(delay).await;
            let mut guard = state.lock().await;
            guard.mirrored = !guard.mirrored;
            let _ = sink.emit(WidgetEvent::MirrorRequested);
        });
    }

    fn emit_close_button(&self, state: &InteractionState) {
        if let Err(err) = self.sink.emit(WidgetEvent::CloseButton(CloseButtonEvent {
            visible: state.close_button_visible(),
        })) {
            warn!("close-button emit failed: {err}");
        }
    }

    fn emit_visibility(&self, state: &InteractionState) {
        if let Err(err) = self.sink.emit(WidgetEvent::Visibility(VisibilityEvent {
            hidden: state.hidden,
        })) {
            warn!("widget-visibility emit failed: {err}");
        }
    }

    fn emit_mirror(&self) {
        if let Err(err) = self.sink.emit(WidgetEvent::MirrorRequested) {
            warn!("mirror-requested emit failed: {err}");
        }
    }
}
