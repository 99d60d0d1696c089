use serde::{Deserialize, Serialize};

use crate::color::OverlayColor;
use crate::options::{FilmOverlayOptions, MASTER_DISABLED_KEY};
use crate::overlay::SettingsControl;
use crate::strategies::{SAFE_FRAME_PERCENT_MAX, SAFE_FRAME_PERCENT_MIN};

fn default_master_tint() -> OverlayColor {
    OverlayColor::HALF_WHITE
}

fn default_safe_frame_percent() -> f32 {
    90.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SafeFrameSetting {
    pub key: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_safe_frame_percent")]
    pub size_percent: f32,
}

/// Persistable snapshot of the overlay options state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlaySettings {
    #[serde(default)]
    pub master_overlay: Option<String>,
    #[serde(default = "default_master_tint")]
    pub master_tint: OverlayColor,
    #[serde(default)]
    pub safe_frames: Vec<SafeFrameSetting>,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            master_overlay: None,
            master_tint: default_master_tint(),
            safe_frames: Vec::new(),
        }
    }
}

impl FilmOverlayOptions {
    /// Snapshots selection, tint and safe-frame state. Takes `&mut self`
    /// because percentages are only reachable through the mutable settings
    /// control the overlays expose to the menu.
    pub fn capture_settings(&mut self) -> OverlaySettings {
        let master_overlay = self.current_master_key().map(str::to_string);
        let master_tint = self.master_tint();

        let mut safe_frames = Vec::new();
        for (key, overlay) in self.toggleable_entries_mut() {
            let enabled = overlay.is_enabled();
            if let Some(SettingsControl::SizePercent(value)) = overlay.settings_control() {
                safe_frames.push(SafeFrameSetting {
                    key: key.to_string(),
                    enabled,
                    size_percent: *value,
                });
            }
        }

        OverlaySettings {
            master_overlay,
            master_tint,
            safe_frames,
        }
    }

    /// Restores a snapshot. Keys that no longer exist are ignored and
    /// persisted percentages are clamped back into the editable range.
    pub fn apply_settings(&mut self, settings: &OverlaySettings) {
        self.set_master_tint(settings.master_tint);
        match settings.master_overlay.as_deref() {
            Some(key) => self.select_master(key),
            None => self.select_master(MASTER_DISABLED_KEY),
        }

        for frame in &settings.safe_frames {
            let clamped = frame
                .size_percent
                .clamp(SAFE_FRAME_PERCENT_MIN, SAFE_FRAME_PERCENT_MAX);
            for (key, overlay) in self.toggleable_entries_mut() {
                if key != frame.key {
                    continue;
                }
                overlay.set_enabled(frame.enabled);
                if let Some(SettingsControl::SizePercent(value)) = overlay.settings_control() {
                    *value = clamped;
                }
            }
        }
    }
}
