use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::board::Orientation;
use crate::error::ConfigError;

pub const DRAG_THRESHOLD_MIN_PIXELS: f32 = 2.0;
pub const DRAG_THRESHOLD_SQUARE_WIDTH_FRACTION: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub drag_threshold_min_px: f32,
    pub drag_threshold_fraction: f32, // of the square width
    pub orientation: Orientation,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            drag_threshold_min_px: DRAG_THRESHOLD_MIN_PIXELS,
            drag_threshold_fraction: DRAG_THRESHOLD_SQUARE_WIDTH_FRACTION,
            orientation: Orientation::White,
        }
    }
}

impl InteractionConfig {
    /// Pointer travel (px) beyond which a press becomes a drag.
    pub fn drag_threshold(&self, square_width: f32) -> f32 {
        self.drag_threshold_min_px.max(self.drag_threshold_fraction * square_width)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("drag_threshold_min_px", self.drag_threshold_min_px),
            ("drag_threshold_fraction", self.drag_threshold_fraction),
        ] {
            if !value.is_finite() || value < 0.0 { return Err(ConfigError::InvalidThreshold { field, value }); }
        }
        Ok(())
    }

    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::Io { path: path.as_ref().display().to_string(), source })?;
        Self::from_json(&text)
    }
}
