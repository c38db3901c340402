//! Player tuning and drawing preferences
//!
//! Persisted in LocalStorage as JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Motion ===
    /// Pixels moved per frame (also the stopping distance)
    pub speed_modifier: f32,
    /// Player circle radius
    pub player_radius: f32,

    // === Drawing ===
    /// Fill and stroke color (any CSS color)
    pub color: String,
    /// Outline and pointer line width
    pub line_width: f32,
    /// Opacity of the circle fill (0.0 - 1.0)
    pub fill_alpha: f32,

    // === Diagnostics ===
    /// Periodically log frames per second
    pub log_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed_modifier: SPEED_MODIFIER,
            player_radius: PLAYER_RADIUS,
            color: DEFAULT_COLOR.to_string(),
            line_width: LINE_WIDTH,
            fill_alpha: FILL_ALPHA,
            log_fps: false,
        }
    }
}

impl Settings {
    /// Replace out-of-range values with defaults (radius and speed stay positive)
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.speed_modifier.is_finite() && self.speed_modifier > 0.0) {
            self.speed_modifier = defaults.speed_modifier;
        }
        if !(self.player_radius.is_finite() && self.player_radius > 0.0) {
            self.player_radius = defaults.player_radius;
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            self.line_width = defaults.line_width;
        }
        if !(0.0..=1.0).contains(&self.fill_alpha) {
            self.fill_alpha = defaults.fill_alpha;
        }
        if self.color.trim().is_empty() {
            self.color = defaults.color;
        }
        self
    }

    /// Logger threshold: diagnostics need debug records to reach the console
    pub fn log_level(&self) -> log::Level {
        if self.log_fps {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "seek_canvas_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<Settings>(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings.sanitized();
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
