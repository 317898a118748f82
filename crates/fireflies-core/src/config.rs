//! Startup configuration for the scene.
//!
//! Values are fixed once the scene is built; nothing here is reconfigurable at
//! runtime. Front-ends start from [`SceneConfig::default`] and may override a
//! few fields (the native binary reads them from the environment).

use crate::constants::*;
use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("firefly count must be at least 1")]
    NoFireflies,
    #[error("firefly count {count} exceeds the maximum of {max}")]
    TooManyFireflies { count: usize, max: usize },
    #[error("boundary half extent must be positive and finite, got {0}")]
    InvalidHalfExtent(f32),
    #[error("firefly speed must be non-negative and finite, got {0}")]
    InvalidSpeed(f32),
    #[error("spawn height range {start}..{end} must be non-empty and inside the boundary")]
    InvalidSpawnHeight { start: f32, end: f32 },
    #[error("invalid value {value:?} for {key}")]
    InvalidOverride { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub firefly_count: usize,
    pub half_extent: f32,
    pub light_height: f32,
    pub max_speed: f32,
    pub spawn_height: Range<f32>,
    /// Seed for the firefly RNG; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            firefly_count: FIREFLY_COUNT,
            half_extent: BOUNDARY_HALF_EXTENT,
            light_height: LIGHT_HEIGHT,
            max_speed: FIREFLY_MAX_SPEED,
            spawn_height: FIREFLY_SPAWN_Y_MIN..FIREFLY_SPAWN_Y_MAX,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.firefly_count == 0 {
            return Err(ConfigError::NoFireflies);
        }
        if self.firefly_count > MAX_FIREFLIES {
            return Err(ConfigError::TooManyFireflies {
                count: self.firefly_count,
                max: MAX_FIREFLIES,
            });
        }
        if !(self.half_extent.is_finite() && self.half_extent > 0.0) {
            return Err(ConfigError::InvalidHalfExtent(self.half_extent));
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(ConfigError::InvalidSpeed(self.max_speed));
        }
        let (start, end) = (self.spawn_height.start, self.spawn_height.end);
        if !(start < end && start >= -self.half_extent && end <= self.half_extent) {
            return Err(ConfigError::InvalidSpawnHeight { start, end });
        }
        Ok(())
    }

    /// Apply a `key=value` style override. Unknown keys are ignored so callers
    /// can pass a whole environment through.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidOverride {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "FIREFLIES_COUNT" => {
                self.firefly_count = value.trim().parse().map_err(|_| invalid())?;
            }
            "FIREFLIES_SEED" => {
                self.seed = Some(value.trim().parse().map_err(|_| invalid())?);
            }
            _ => {}
        }
        Ok(())
    }
}
