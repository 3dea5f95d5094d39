//! Player preferences
//!
//! Read from an inline JSON block in the host page
//! (`<script id="settings" type="application/json">`). Missing fields fall
//! back to defaults; nothing is written back.

use serde::{Deserialize, Serialize};

/// Particle budget when effects are enabled
pub const DEFAULT_MAX_PARTICLES: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Effects ===
    /// Coin burst on catch
    pub particles: bool,
    /// Live particle cap
    pub particle_budget: usize,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
    /// Mute when the tab is hidden
    pub mute_on_blur: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particles: true,
            particle_budget: DEFAULT_MAX_PARTICLES,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.5,
            muted: false,
            mute_on_blur: true,
        }
    }
}

impl Settings {
    /// Parse settings JSON, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Clamp volumes into range
    pub fn sanitized(mut self) -> Self {
        self.master_volume = clamp_volume(self.master_volume);
        self.sfx_volume = clamp_volume(self.sfx_volume);
        self.music_volume = clamp_volume(self.music_volume);
        self
    }

    /// Effective particle cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.particle_budget
        }
    }

    /// Element id of the inline settings block
    pub const ELEMENT_ID: &'static str = "settings";

    /// Load settings from the host page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) if !json.trim().is_empty() => {
                log::info!("Loaded settings from page");
                Self::from_json(&json)
            }
            _ => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

fn clamp_volume(vol: f32) -> f32 {
    if vol.is_nan() { 0.0 } else { vol.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "muted": true }"#);
        assert!(settings.muted);
        assert_eq!(settings.master_volume, Settings::default().master_volume);
        assert_eq!(settings.max_particles(), DEFAULT_MAX_PARTICLES);
    }

    #[test]
    fn test_volumes_are_clamped() {
        let settings = Settings::from_json(r#"{ "master_volume": 3.0, "sfx_volume": -1.0 }"#);
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn test_particles_disabled() {
        let settings = Settings::from_json(r#"{ "particles": false, "particle_budget": 500 }"#);
        assert_eq!(settings.max_particles(), 0);
    }
}
