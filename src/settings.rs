//! Tuning knobs for a session
//!
//! Stored as JSON; anything missing from the file falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{EXPLOSION_RADIUS, SIM_DT};

/// Errors reading or validating a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("time scale must be positive, got {0}")]
    InvalidTimeScale(f32),
    #[error("explosion radius must not be negative, got {0}")]
    InvalidExplosionRadius(f32),
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Debug multiplier on the simulation step; changes pacing, not physics
    pub time_scale: f32,
    /// Blast radius for banana explosions
    pub explosion_radius: f32,
    /// Fixed seed for reproducible matches (random when absent)
    pub seed: Option<u64>,
    /// Give up on a throw that has not landed after this many ticks
    pub max_ticks_per_throw: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            explosion_radius: EXPLOSION_RADIUS,
            seed: None,
            max_ticks_per_throw: 5000,
        }
    }
}

impl Settings {
    /// Simulated seconds per tick
    pub fn step_dt(&self) -> f32 {
        SIM_DT * self.time_scale
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.time_scale.is_nan() || self.time_scale <= 0.0 {
            return Err(SettingsError::InvalidTimeScale(self.time_scale));
        }
        if self.explosion_radius.is_nan() || self.explosion_radius < 0.0 {
            return Err(SettingsError::InvalidExplosionRadius(self.explosion_radius));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
