//! Configuration for the sectionizer and the sketch surface.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```json
//! { "drawing": { "width": 1024, "eraser_multiplier": 4.0 } }
//! ```

use crate::color::{HexColor, PRESET_COLORS};
use crate::sections::HeaderRule;
use crate::tools::BRUSH_SIZES;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Default eraser width relative to the pen at the same brush size.
pub const DEFAULT_ERASER_MULTIPLIER: f64 = 3.0;

/// Largest accepted canvas side in pixels.
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Sketch surface settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingConfig {
    /// Backing buffer width in pixels.
    pub width: u32,
    /// Backing buffer height in pixels.
    pub height: u32,
    /// Fill color after mount and clear; also the eraser paint.
    pub background: HexColor,
    /// Pen color selected on mount.
    pub default_color: HexColor,
    /// Brush size selected on mount.
    pub default_brush_size: u32,
    /// Eraser stroke width as a multiple of the brush size.
    pub eraser_multiplier: f64,
    /// Cache an export whenever a stroke ends.
    pub autosave_on_stroke_end: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: HexColor::white(),
            default_color: PRESET_COLORS[0],
            default_brush_size: BRUSH_SIZES[1],
            eraser_multiplier: DEFAULT_ERASER_MULTIPLIER,
            autosave_on_stroke_end: true,
        }
    }
}

impl DrawingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_CANVAS_SIDE || self.height > MAX_CANVAS_SIDE {
            return Err(ConfigError::Invalid(format!(
                "canvas size {}x{} exceeds the {MAX_CANVAS_SIDE}px limit per side",
                self.width, self.height
            )));
        }
        if self.default_brush_size == 0 {
            return Err(ConfigError::Invalid("default_brush_size must be at least 1".into()));
        }
        if !self.eraser_multiplier.is_finite() || self.eraser_multiplier <= 1.0 {
            return Err(ConfigError::Invalid(format!(
                "eraser_multiplier must be greater than 1, got {}",
                self.eraser_multiplier
            )));
        }
        Ok(())
    }
}

/// Sectionizer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionizerConfig {
    /// Header rules in the order they are tried.
    pub precedence: Vec<HeaderRule>,
}

impl Default for SectionizerConfig {
    fn default() -> Self {
        Self {
            precedence: HeaderRule::DEFAULT_PRECEDENCE.to_vec(),
        }
    }
}

impl SectionizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precedence.is_empty() {
            return Err(ConfigError::Invalid("precedence must name at least one rule".into()));
        }
        let mut seen = HashSet::new();
        for rule in &self.precedence {
            if !seen.insert(rule) {
                return Err(ConfigError::Invalid(format!("duplicate rule in precedence: {rule:?}")));
            }
        }
        Ok(())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeaeConfig {
    pub drawing: DrawingConfig,
    pub sectionizer: SectionizerConfig,
}

impl IdeaeConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.drawing.validate()?;
        self.sectionizer.validate()
    }
}
