//! Sketch replay scripts.
//!
//! A script is a JSON array mixing raw host input events with toolbar
//! commands, replayed in order against a [`DrawingSurface`]:
//!
//! ```json
//! [
//!   { "type": "set_color", "color": "#ef4444" },
//!   { "type": "mouse_down", "position": { "x": 10, "y": 10 } },
//!   { "type": "mouse_move", "position": { "x": 80, "y": 40 } },
//!   { "type": "mouse_up" }
//! ]
//! ```

use ideae_core::color::HexColor;
use ideae_core::input::RawPointerInput;
use ideae_core::tools::ToolKind;
use ideae_render::DrawingSurface;
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Toolbar and layout actions a script can interleave with input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceCommand {
    SetTool { tool: ToolKind },
    SetColor { color: HexColor },
    SetBrushSize { size: u32 },
    SetDisplayRect { rect: Rect },
    Clear,
}

/// One replayable step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SketchStep {
    Input(RawPointerInput),
    Command(SurfaceCommand),
}

impl SketchStep {
    pub fn apply(&self, surface: &mut DrawingSurface) {
        match self {
            SketchStep::Input(input) => surface.handle_raw(input),
            SketchStep::Command(command) => match command {
                SurfaceCommand::SetTool { tool } => surface.set_tool(*tool),
                SurfaceCommand::SetColor { color } => surface.set_color(*color),
                SurfaceCommand::SetBrushSize { size } => surface.set_brush_size(*size),
                SurfaceCommand::SetDisplayRect { rect } => surface.set_display_rect(*rect),
                SurfaceCommand::Clear => surface.clear(),
            },
        }
    }
}

/// Parse a script from JSON.
pub fn parse_script(json: &str) -> Result<Vec<SketchStep>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Replay `steps` in order.
pub fn replay(surface: &mut DrawingSurface, steps: &[SketchStep]) {
    for step in steps {
        step.apply(surface);
    }
    log::debug!("Replayed {} sketch steps", steps.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideae_core::config::DrawingConfig;
    use kurbo::Point;

    #[test]
    fn test_parse_mixed_steps() {
        let steps = parse_script(
            r##"[
                {"type": "set_tool", "tool": "eraser"},
                {"type": "set_color", "color": "#ff0000"},
                {"type": "touch_start", "touches": [{"x": 1.0, "y": 2.0}]},
                {"type": "clear"},
                {"type": "set_display_rect", "rect": {"x0": 0.0, "y0": 0.0, "x1": 10.0, "y1": 10.0}}
            ]"##,
        )
        .unwrap();

        assert_eq!(
            steps,
            vec![
                SketchStep::Command(SurfaceCommand::SetTool { tool: ToolKind::Eraser }),
                SketchStep::Command(SurfaceCommand::SetColor {
                    color: HexColor::new(255, 0, 0)
                }),
                SketchStep::Input(RawPointerInput::TouchStart {
                    touches: vec![Point::new(1.0, 2.0)]
                }),
                SketchStep::Command(SurfaceCommand::Clear),
                SketchStep::Command(SurfaceCommand::SetDisplayRect {
                    rect: Rect::new(0.0, 0.0, 10.0, 10.0)
                }),
            ]
        );
    }

    #[test]
    fn test_unknown_step_rejected() {
        assert!(parse_script(r#"[{"type": "undo"}]"#).is_err());
    }

    #[test]
    fn test_replay_draws() {
        let mut surface = DrawingSurface::new(&DrawingConfig {
            width: 50,
            height: 50,
            ..DrawingConfig::default()
        })
        .unwrap();
        let steps = parse_script(
            r##"[
                {"type": "set_color", "color": "#ff0000"},
                {"type": "mouse_down", "position": {"x": 5.0, "y": 25.0}},
                {"type": "mouse_move", "position": {"x": 45.0, "y": 25.0}},
                {"type": "mouse_up"}
            ]"##,
        )
        .unwrap();

        replay(&mut surface, &steps);

        assert!(!surface.is_drawing());
        assert_eq!(surface.buffer().pixel(25, 25), Some([255, 0, 0, 255]));
    }
}
