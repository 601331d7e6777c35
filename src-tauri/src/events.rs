//! Typed events carried between the widget's components.
//!
//! The tracking layer, the clock and the window owner never hold references
//! to each other; everything crosses this seam as a named channel with a
//! typed payload, delivered through the Tauri event system (or a recording
//! sink in tests).

use anyhow::Result;
use serde::Serialize;
use tauri::{AppHandle, Emitter};

use crate::clock::ClockState;

/// Channel for every clock sample (once per second).
pub const CLOCK_TICK: &str = "clock-tick";
/// Channel for close-affordance visibility changes.
pub const CLOSE_BUTTON: &str = "close-button";
/// Channel for hide/restore of the widget content.
pub const WIDGET_VISIBILITY: &str = "widget-visibility";
/// Channel for changes to the gesture's required tap count.
pub const REQUIRED_TAPS: &str = "required-taps";
/// Channel asking the window owner to flip the window vertically.
pub const MIRROR_REQUESTED: &str = "mirror-requested";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseButtonEvent {
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityEvent {
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredTapsEvent {
    pub required_taps: u32,
}

/// Mirror requests carry no payload beyond the event identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MirrorRequestedEvent {}

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    ClockTick(ClockState),
    CloseButton(CloseButtonEvent),
    Visibility(VisibilityEvent),
    RequiredTaps(RequiredTapsEvent),
    MirrorRequested,
}

impl WidgetEvent {
    pub fn channel(&self) -> &'static str {
        match self {
            WidgetEvent::ClockTick(_) => CLOCK_TICK,
            WidgetEvent::CloseButton(_) => CLOSE_BUTTON,
            WidgetEvent::Visibility(_) => WIDGET_VISIBILITY,
            WidgetEvent::RequiredTaps(_) => REQUIRED_TAPS,
            WidgetEvent::MirrorRequested => MIRROR_REQUESTED,
        }
    }
}

/// Where controllers publish their events. Fire-and-forget: failures are
/// logged by callers, never propagated.
pub trait EventSink: Send + Sync + 'static {
    fn emit(&self, event: WidgetEvent) -> Result<()>;
}

impl EventSink for AppHandle {
    fn emit(&self, event: WidgetEvent) -> Result<()> {
        let channel = event.channel();
        let result = match event {
            WidgetEvent::ClockTick(payload) => Emitter::emit(self, channel, payload),
            WidgetEvent::CloseButton(payload) => Emitter::emit(self, channel, payload),
            WidgetEvent::Visibility(payload) => Emitter::emit(self, channel, payload),
            WidgetEvent::RequiredTaps(payload) => Emitter::emit(self, channel, payload),
            WidgetEvent::MirrorRequested => Emitter::emit(self, channel, MirrorRequestedEvent {}),
        };
        result.map_err(|err| anyhow::anyhow!("failed to emit {channel}: {err}"))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use anyhow::Result;

    use super::{EventSink, WidgetEvent};

    /// Captures everything a controller emits so tests can assert on it.
    #[derive(Default)]
    pub struct RecordingSink {
        events: Mutex<Vec<WidgetEvent>>,
    }

    impl RecordingSink {
        pub fn events(&self) -> Vec<WidgetEvent> {
            self.events.lock().unwrap().clone()
        }

        pub fn count(&self, predicate: impl Fn(&WidgetEvent) -> bool) -> usize {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter(|event| predicate(event))
                .count()
        }
    }

    impl EventSink for RecordingSink {
        fn emit(&self, event: WidgetEvent) -> Result<()> {
            self.events.lock().unwrap().push(event);
            Ok(())
        }
    }

    /// Gives spawned one-shots a chance to observe newly advanced time.
    pub async fn run_pending() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }
}
