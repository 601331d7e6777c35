//! Frame math for the floating window.
//!
//! Frames use logical pixels with a bottom-left origin, the platform screen
//! coordinate convention. `shell` converts to the toolkit's top-left origin
//! at the window boundary, so placement and mirroring stay pure math here.

use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: f64 = 100.0;
pub const DEFAULT_HEIGHT: f64 = 150.0;
/// Inset from the primary screen's top-right corner on first launch.
pub const INITIAL_MARGIN: f64 = 60.0;

/// Logical size of a screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Used when no display information is available at all.
    pub const FALLBACK: Frame = Frame {
        x: 0.0,
        y: 0.0,
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
    };

    /// Reflects the frame across the screen's horizontal midline.
    pub fn mirrored_vertically(&self, screen_height: f64) -> Frame {
        Frame {
            y: screen_height - self.y - self.height,
            ..*self
        }
    }

    /// Y of the top edge in the toolkit's top-left coordinate space.
    pub fn top_left_y(&self, screen_height: f64) -> f64 {
        screen_height - self.y - self.height
    }

    pub fn from_top_left(
        x: f64,
        top_y: f64,
        width: f64,
        height: f64,
        screen_height: f64,
    ) -> Frame {
        Frame {
            x,
            y: screen_height - top_y - height,
            width,
            height,
        }
    }
}

/// First-launch placement: anchored at the primary screen's top-right corner,
/// inset by `INITIAL_MARGIN` on both axes.
pub fn default_frame(screen: Option<ScreenSize>) -> Frame {
    let Some(screen) = screen else {
        return Frame::FALLBACK;
    };

    Frame {
        x: screen.width - DEFAULT_WIDTH - INITIAL_MARGIN,
        y: screen.height - DEFAULT_HEIGHT - INITIAL_MARGIN,
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_placement_anchors_top_right() {
        let frame = default_frame(Some(ScreenSize {
            width: 1920.0,
            height: 1080.0,
        }));
        assert_eq!(frame.x, 1760.0);
        assert_eq!(frame.y, 870.0);
        assert_eq!(frame.width, 100.0);
        assert_eq!(frame.height, 150.0);
    }

    #[test]
    fn missing_display_info_falls_back() {
        assert_eq!(default_frame(None), Frame::FALLBACK);
    }

    #[test]
    fn mirror_reflects_across_the_midline() {
        let frame = Frame {
            x: 1760.0,
            y: 870.0,
            width: 100.0,
            height: 150.0,
        };
        let mirrored = frame.mirrored_vertically(1080.0);
        assert_eq!(mirrored.y, 60.0);
        assert_eq!(mirrored.x, frame.x);
    }

    #[test]
    fn mirror_is_involutive() {
        let frame = Frame {
            x: 320.0,
            y: 412.5,
            width: 100.0,
            height: 150.0,
        };
        assert_eq!(frame.mirrored_vertically(900.0).mirrored_vertically(900.0), frame);
    }

    #[test]
    fn top_left_conversion_round_trips() {
        let frame = Frame {
            x: 1760.0,
            y: 870.0,
            width: 100.0,
            height: 150.0,
        };
        let top_y = frame.top_left_y(1080.0);
        assert_eq!(top_y, 60.0);
        assert_eq!(
            Frame::from_top_left(frame.x, top_y, frame.width, frame.height, 1080.0),
            frame
        );
    }
}
