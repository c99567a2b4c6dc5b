//! Starfield settings and preferences
//!
//! Stored as JSON; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_PIXEL_SIZE, PIXEL_SIZE};
use crate::sim::{FieldConfig, SignalBoard};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Stars per field for this preset
    pub fn star_count(&self) -> usize {
        match self {
            QualityPreset::Low => 20,
            QualityPreset::Medium => 40,
            QualityPreset::High => 80,
        }
    }
}

/// Starfield settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Quality preset (drives star count)
    pub quality: QualityPreset,
    /// Grid cell size in pixels
    pub pixel_size: u32,
    /// Explicit star count, overrides the preset
    pub star_count: Option<usize>,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,

    // === Accessibility ===
    /// Reduced motion (stars hold their brightness)
    pub reduced_motion: bool,

    // === Audio ===
    /// Signal board sound volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            pixel_size: PIXEL_SIZE,
            star_count: None,
            seed: None,
            reduced_motion: false,
            sfx_volume: 1.0,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(|s| s.sanitized())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp values into their usable ranges
    pub fn sanitized(mut self) -> Self {
        self.pixel_size = self.pixel_size.clamp(1, MAX_PIXEL_SIZE);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        if self.star_count == Some(0) {
            self.star_count = None;
        }
        self
    }

    /// Effective star count
    pub fn star_count(&self) -> usize {
        self.star_count.unwrap_or_else(|| self.quality.star_count())
    }

    /// Field configuration for these settings
    pub fn field_config(&self) -> FieldConfig {
        FieldConfig {
            cell_size: self.pixel_size.clamp(1, MAX_PIXEL_SIZE),
            star_count: self.star_count(),
            twinkle: !self.reduced_motion,
        }
    }

    /// Signal board that plays its cues at `sfx_volume`
    pub fn signal_board(&self) -> SignalBoard {
        SignalBoard::with_volume(self.sfx_volume)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
