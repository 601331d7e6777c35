use serde::{Deserialize, Serialize};

/// Tap count while another app holds focus: the first physical tap only
/// activates the widget, so a recognized double tap needs three taps.
pub const DEFAULT_REQUIRED_TAPS: u32 = 3;
/// Tap count once the widget has focus.
pub const FOCUSED_REQUIRED_TAPS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionState {
    pub hovered: bool,
    pub required_taps: u32,
    pub hidden: bool,
    pub mirrored: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            hovered: false,
            required_taps: DEFAULT_REQUIRED_TAPS,
            hidden: false,
            mirrored: false,
        }
    }
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The close affordance tracks hover state directly.
    pub fn close_button_visible(&self) -> bool {
        self.hovered
    }
}
