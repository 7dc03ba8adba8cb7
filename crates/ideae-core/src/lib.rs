//! Ideae Core Library
//!
//! Platform-agnostic core of the Ideae creative assistant: structuring of
//! generated suggestions into idea sections, API payload shapes, and the
//! input/tool/viewport model behind the sketch surface.

pub mod api;
pub mod color;
pub mod config;
pub mod input;
pub mod sections;
pub mod tools;
pub mod viewport;

pub use api::{ApiError, Category, GenerationResult, IdeaCreate, IdeaKind, MediaKind};
pub use color::{ColorError, HexColor};
pub use config::{ConfigError, DrawingConfig, IdeaeConfig, SectionizerConfig};
pub use input::{MouseButton, PointerEvent, PointerPhase, RawPointerInput};
pub use sections::{HeaderRule, Section, SectionPreview, Sectionizer};
pub use tools::{StrokePaint, ToolKind, Toolbar};
pub use viewport::CanvasViewport;
