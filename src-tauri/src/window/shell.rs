use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use tauri::{AppHandle, LogicalPosition, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::settings::SettingsStore;

use super::geometry::{self, Frame, ScreenSize};

/// Fixed identifier the frame autosave is keyed by.
pub const WINDOW_LABEL: &str = "floating-window";

fn primary_screen(app: &AppHandle) -> Option<ScreenSize> {
    let monitor = app.primary_monitor().ok().flatten()?;
    let scale = monitor.scale_factor();
    let size = monitor.size();
    Some(ScreenSize {
        width: size.width as f64 / scale,
        height: size.height as f64 / scale,
    })
}

fn monitor_height(window: &WebviewWindow) -> Result<f64> {
    let monitor = window
        .current_monitor()
        .context("failed to query the current monitor")?
        .ok_or_else(|| anyhow!("window is not on any monitor"))?;
    Ok(monitor.size().height as f64 / monitor.scale_factor())
}

fn current_frame(window: &WebviewWindow, screen_height: f64) -> Result<Frame> {
    let scale = window
        .scale_factor()
        .context("failed to query the window scale factor")?;
    let position = window
        .outer_position()
        .context("failed to query the window position")?
        .to_logical::<f64>(scale);
    let size = window
        .outer_size()
        .context("failed to query the window size")?
        .to_logical::<f64>(scale);
    Ok(Frame::from_top_left(
        position.x,
        position.y,
        size.width,
        size.height,
        screen_height,
    ))
}

/// Builds the borderless floating widget window at its saved frame, or the
/// default top-right placement when none was saved.
pub fn create_widget_window(app: &AppHandle, settings: &SettingsStore) -> Result<WebviewWindow> {
    let screen = primary_screen(app);
    if screen.is_none() {
        warn!("no display information available; using the fallback frame");
    }

    let frame = settings
        .frame(WINDOW_LABEL)
        .unwrap_or_else(|| geometry::default_frame(screen));
    // Without display info the fallback frame pins to the top edge.
    let screen_height = screen.map(|screen| screen.height).unwrap_or(frame.height);

    let window = WebviewWindowBuilder::new(app, WINDOW_LABEL, WebviewUrl::App("index.html".into()))
        .title("floatclock")
        .inner_size(frame.width, frame.height)
        .position(frame.x, frame.top_left_y(screen_height))
        .resizable(true)
        .decorations(false)
        .transparent(true)
        .shadow(false)
        .always_on_top(true)
        .visible_on_all_workspaces(true)
        .skip_taskbar(true)
        .build()
        .context("failed to build the widget window")?;

    info!(
        "widget window created at ({}, {}) {}x{}",
        frame.x, frame.y, frame.width, frame.height
    );
    Ok(window)
}

/// Reflects the live window across its screen's horizontal midline.
pub fn mirror_window(window: &WebviewWindow) -> Result<()> {
    let screen_height = monitor_height(window)?;
    let frame = current_frame(window, screen_height)?;
    let mirrored = frame.mirrored_vertically(screen_height);

    window
        .set_position(LogicalPosition::new(
            mirrored.x,
            mirrored.top_left_y(screen_height),
        ))
        .context("failed to move the window")?;

    info!("mirrored window from y={} to y={}", frame.y, mirrored.y);
    Ok(())
}

/// Saves the window's frame under the autosave key.
pub fn persist_frame(window: &WebviewWindow, settings: &SettingsStore) -> Result<()> {
    let screen_height = monitor_height(window)?;
    let frame = current_frame(window, screen_height)?;
    settings.update_frame(WINDOW_LABEL, frame)
}
