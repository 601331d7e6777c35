use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::PathBuf, sync::RwLock};

use crate::window::geometry::Frame;

/// What the multi-tap dismiss gesture does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DismissAction {
    /// Collapse the widget content; restore after the delay.
    Hide,
    /// Flip the window across the screen midline; flip back after the delay.
    Mirror,
}

impl Default for DismissAction {
    fn default() -> Self {
        DismissAction::Hide
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GestureSettings {
    pub dismiss: DismissAction,
    /// Opt back in to the original behavior where every mirror trigger arms
    /// its own restore, even while one is already pending.
    pub legacy_double_restore: bool,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            dismiss: DismissAction::default(),
            legacy_double_restore: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UserSettings {
    gesture: GestureSettings,
    /// Saved window frames keyed by window label.
    frames: HashMap<String, Frame>,
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn gesture(&self) -> GestureSettings {
        self.data.read().unwrap().gesture.clone()
    }

    pub fn frame(&self, name: &str) -> Option<Frame> {
        self.data.read().unwrap().frames.get(name).copied()
    }

    pub fn update_frame(&self, name: &str, frame: Frame) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        guard.frames.insert(name.to_string(), frame);
        self.persist(&guard)
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("floatclock-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn round_trips_a_saved_frame() {
        let path = temp_path("frame");
        let _ = fs::remove_file(&path);

        let store = SettingsStore::new(path.clone()).unwrap();
        assert!(store.frame("floating-window").is_none());

        let frame = Frame {
            x: 1760.0,
            y: 870.0,
            width: 100.0,
            height: 150.0,
        };
        store.update_frame("floating-window", frame).unwrap();

        let reopened = SettingsStore::new(path.clone()).unwrap();
        assert_eq!(reopened.frame("floating-window"), Some(frame));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn defaults_when_file_is_missing() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        let store = SettingsStore::new(path).unwrap();
        let gesture = store.gesture();
        assert_eq!(gesture.dismiss, DismissAction::Hide);
        assert!(!gesture.legacy_double_restore);
    }

    #[test]
    fn defaults_when_file_is_corrupt() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json at all").unwrap();

        let store = SettingsStore::new(path.clone()).unwrap();
        assert_eq!(store.gesture().dismiss, DismissAction::Hide);
        assert!(store.frame("floating-window").is_none());

        let _ = fs::remove_file(&path);
    }
}
