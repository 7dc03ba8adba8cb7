//! Pointer input normalization for mouse and touch events.
//!
//! Hosts deliver mouse and touch events with different shapes: touches come
//! as lists that may be empty on release. Everything is reduced to a single
//! [`PointerEvent`] so the stroke state machine never looks at where an event
//! came from.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// Lifecycle phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Leave,
}

/// Unified pointer event in client coordinates.
///
/// `position` is `None` when the host had no usable coordinate for the event,
/// e.g. a touch end whose touch list is already empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Option<Point>,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, position: Option<Point>) -> Self {
        Self { phase, position }
    }

    pub fn down(position: Point) -> Self {
        Self::new(PointerPhase::Down, Some(position))
    }

    pub fn moved(position: Point) -> Self {
        Self::new(PointerPhase::Move, Some(position))
    }

    pub fn up() -> Self {
        Self::new(PointerPhase::Up, None)
    }

    pub fn leave() -> Self {
        Self::new(PointerPhase::Leave, None)
    }

    /// Position if present and finite.
    pub fn valid_position(&self) -> Option<Point> {
        self.position.filter(|p| p.x.is_finite() && p.y.is_finite())
    }
}

/// Native input as delivered by the host, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawPointerInput {
    MouseDown {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    MouseMove {
        position: Point,
    },
    MouseUp {
        #[serde(default)]
        position: Option<Point>,
        #[serde(default)]
        button: MouseButton,
    },
    MouseLeave,
    TouchStart {
        #[serde(default)]
        touches: Vec<Point>,
    },
    TouchMove {
        #[serde(default)]
        touches: Vec<Point>,
    },
    TouchEnd {
        #[serde(default)]
        touches: Vec<Point>,
    },
    TouchCancel,
}

impl RawPointerInput {
    /// Reduce to a [`PointerEvent`]. Returns `None` for input that never
    /// affects drawing (non-primary mouse buttons).
    ///
    /// Only the first touch point is followed; further touches are ignored.
    pub fn normalize(&self) -> Option<PointerEvent> {
        let event = match self {
            RawPointerInput::MouseDown { position, button } => {
                if *button != MouseButton::Left {
                    return None;
                }
                PointerEvent::down(*position)
            }
            RawPointerInput::MouseMove { position } => PointerEvent::moved(*position),
            RawPointerInput::MouseUp { position, button } => {
                if *button != MouseButton::Left {
                    return None;
                }
                PointerEvent::new(PointerPhase::Up, *position)
            }
            RawPointerInput::MouseLeave => PointerEvent::leave(),
            RawPointerInput::TouchStart { touches } => {
                PointerEvent::new(PointerPhase::Down, touches.first().copied())
            }
            RawPointerInput::TouchMove { touches } => {
                PointerEvent::new(PointerPhase::Move, touches.first().copied())
            }
            RawPointerInput::TouchEnd { touches } => {
                PointerEvent::new(PointerPhase::Up, touches.first().copied())
            }
            RawPointerInput::TouchCancel => PointerEvent::leave(),
        };
        Some(event)
    }
}
