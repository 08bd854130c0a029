//! Editor configuration.
//!
//! Hosts may pass a JSON object; every field is optional and falls back to
//! the stock widget behaviour.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wg_core::{
    DEFAULT_FONT_SIZE, DRAG_ANCHOR, FONT_SIZE_STEP, MIN_FONT_SIZE, Position, SPAWN_POSITION,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EditorConfig {
    pub initial_font_size: u32,
    pub font_step: u32,
    pub min_font_size: u32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub drag_anchor_x: f32,
    pub drag_anchor_y: f32,
    /// Maximum undo depth. `None` keeps every snapshot.
    pub history_limit: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed editor config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("fontStep must be greater than zero")]
    ZeroFontStep,
    #[error("initialFontSize {initial} is below minFontSize {min}")]
    InitialBelowMin { initial: u32, min: u32 },
    #[error("initialFontSize {initial} is not a whole number of {step}px steps above minFontSize {min}")]
    MisalignedStep { initial: u32, min: u32, step: u32 },
    #[error("historyLimit must be at least 1")]
    ZeroHistoryLimit,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_font_size: DEFAULT_FONT_SIZE,
            font_step: FONT_SIZE_STEP,
            min_font_size: MIN_FONT_SIZE,
            spawn_x: SPAWN_POSITION.x,
            spawn_y: SPAWN_POSITION.y,
            drag_anchor_x: DRAG_ANCHOR.x,
            drag_anchor_y: DRAG_ANCHOR.y,
            history_limit: None,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that shrinking can never take a tag below the floor.
    ///
    /// Shrink fires while `size > min`, so every reachable size has to sit
    /// on the `min + k * step` grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font_step == 0 {
            return Err(ConfigError::ZeroFontStep);
        }
        if self.initial_font_size < self.min_font_size {
            return Err(ConfigError::InitialBelowMin {
                initial: self.initial_font_size,
                min: self.min_font_size,
            });
        }
        if (self.initial_font_size - self.min_font_size) % self.font_step != 0 {
            return Err(ConfigError::MisalignedStep {
                initial: self.initial_font_size,
                min: self.min_font_size,
                step: self.font_step,
            });
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        Ok(())
    }

    pub fn spawn_position(&self) -> Position {
        Position::new(self.spawn_x, self.spawn_y)
    }

    pub fn drag_anchor(&self) -> Position {
        Position::new(self.drag_anchor_x, self.drag_anchor_y)
    }
}
