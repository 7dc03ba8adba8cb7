//! Sketch toolbar state: active tool, pen color and brush size.

use crate::color::{HexColor, PRESET_COLORS};
use crate::config::{DEFAULT_ERASER_MULTIPLIER, DrawingConfig};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Brush sizes offered by the size picker.
pub const BRUSH_SIZES: [u32; 5] = [2, 4, 8, 12, 20];

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Pen,
    Eraser,
}

/// Resolved paint for the next rasterized segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePaint {
    pub color: Color,
    /// Full stroke width in buffer pixels.
    pub width: f64,
}

/// Toolbar selections. Changes apply to the next rasterized segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Toolbar {
    tool: ToolKind,
    color: HexColor,
    brush_size: u32,
    eraser_multiplier: f64,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            color: PRESET_COLORS[0],
            brush_size: BRUSH_SIZES[1],
            eraser_multiplier: DEFAULT_ERASER_MULTIPLIER,
        }
    }
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toolbar for a freshly mounted surface. An eraser multiplier that
    /// would not widen the eraser is replaced by the default.
    pub fn from_config(config: &DrawingConfig) -> Self {
        let eraser_multiplier = if config.eraser_multiplier.is_finite() && config.eraser_multiplier > 1.0 {
            config.eraser_multiplier
        } else {
            log::warn!(
                "Eraser multiplier {} must exceed 1, using {DEFAULT_ERASER_MULTIPLIER}",
                config.eraser_multiplier
            );
            DEFAULT_ERASER_MULTIPLIER
        };
        Self {
            tool: ToolKind::Pen,
            color: config.default_color,
            brush_size: config.default_brush_size.max(1),
            eraser_multiplier,
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    /// Selected pen color. Kept while the eraser is active.
    pub fn color(&self) -> HexColor {
        self.color
    }

    pub fn set_color(&mut self, color: HexColor) {
        self.color = color;
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    /// Set the brush size; zero is raised to 1.
    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_size = size.max(1);
    }

    pub fn eraser_multiplier(&self) -> f64 {
        self.eraser_multiplier
    }

    /// Stroke width the current tool rasterizes at.
    pub fn effective_width(&self) -> f64 {
        let size = f64::from(self.brush_size);
        match self.tool {
            ToolKind::Pen => size,
            ToolKind::Eraser => size * self.eraser_multiplier,
        }
    }

    /// Paint for the current tool; the eraser paints `background`.
    pub fn paint(&self, background: HexColor) -> StrokePaint {
        let color = match self.tool {
            ToolKind::Pen => self.color,
            ToolKind::Eraser => background,
        };
        StrokePaint {
            color: color.into(),
            width: self.effective_width(),
        }
    }
}
