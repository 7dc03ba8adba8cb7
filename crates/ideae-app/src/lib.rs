//! Ideae Application
//!
//! Command-line shell over the core and render crates: sectionizes generated
//! suggestions and replays sketch scripts into note payloads.

mod app;
mod cli;
mod script;

pub use app::{AppError, SectionsReport, load_config, read_input, sections_report, sketch_idea};
pub use cli::{Cli, Command};
pub use script::{SketchStep, SurfaceCommand, parse_script, replay};
