//! MazeConfig - sizes, animation timing and palette
//!
//! The canvas page owns drawing, but the engine owns the numbers both sides
//! must agree on (cell size for input hit-testing, min/max maze size, delay
//! between solver steps). Loaded from JSON, camelCase keys like the rest of
//! the JS boundary.

use serde::{Deserialize, Serialize};

use crate::core::MazeError;

pub const DEFAULT_CELL_SIZE: f64 = 30.0;
pub const MIN_MAZE_SIZE: u32 = 5;
pub const MAX_MAZE_SIZE: u32 = 50;
pub const DEFAULT_MAZE_SIZE: u32 = 15;
pub const DEFAULT_DELAY_MS: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MazeConfig {
    pub cell_size: f64,
    /// 60% of the cell
    pub player_size: f64,
    /// 15% of the cell
    pub dot_radius: f64,
    pub min_size: u32,
    pub max_size: u32,
    pub default_size: u32,
    /// Pause between solver steps, in milliseconds.
    pub delay_ms: u32,
    pub colors: Palette,
}

/// CSS colors for the canvas renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub player: String,
    pub start: String,
    pub end: String,
    pub explored: String,
    pub grid: String,
    pub path_dot: String,
    pub background: String,
    pub border: String,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            player_size: DEFAULT_CELL_SIZE * 0.6,
            dot_radius: DEFAULT_CELL_SIZE * 0.15,
            min_size: MIN_MAZE_SIZE,
            max_size: MAX_MAZE_SIZE,
            default_size: DEFAULT_MAZE_SIZE,
            delay_ms: DEFAULT_DELAY_MS,
            colors: Palette::default(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: "#ef4444".to_string(),
            start: "#ffffff".to_string(),
            end: "#ffffff".to_string(),
            explored: "#10b981".to_string(),
            grid: "#94a3b8".to_string(),
            path_dot: "#000000".to_string(),
            background: "#ffffff".to_string(),
            border: "#334155".to_string(),
        }
    }
}

impl MazeConfig {
    pub fn from_json(json: &str) -> Result<Self, MazeError> {
        let config: MazeConfig =
            serde_json::from_str(json).map_err(|e| MazeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        if self.min_size == 0 {
            return Err(MazeError::Config("minSize must be at least 1".to_string()));
        }
        if self.min_size > self.max_size {
            return Err(MazeError::Config(format!(
                "minSize ({}) exceeds maxSize ({})",
                self.min_size, self.max_size
            )));
        }
        if !(self.min_size..=self.max_size).contains(&self.default_size) {
            return Err(MazeError::Config(format!(
                "defaultSize ({}) outside [{}, {}]",
                self.default_size, self.min_size, self.max_size
            )));
        }
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return Err(MazeError::Config("cellSize must be positive".to_string()));
        }
        Ok(())
    }

    /// Requested side length forced into `[min_size, max_size]`.
    #[inline]
    pub fn clamp_size(&self, size: u32) -> u32 {
        size.clamp(self.min_size, self.max_size)
    }

    /// Canvas side in pixels for a square maze of `size` cells.
    #[inline]
    pub fn canvas_extent(&self, size: u32) -> f64 {
        size as f64 * self.cell_size
    }
}
