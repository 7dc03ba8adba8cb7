//! Command implementations behind the `ideae` binary.

use crate::script::{parse_script, replay};
use ideae_core::api::{ApiError, GenerationResult, IdeaCreate};
use ideae_core::config::{ConfigError, DrawingConfig, IdeaeConfig};
use ideae_core::sections::{Section, SectionPreview, Sectionizer};
use ideae_render::{DrawingSurface, ExportError};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Sectionized view of one suggestion, as printed by `ideae sections`.
#[derive(Debug, Serialize)]
pub struct SectionsReport {
    pub label: String,
    pub sections: Vec<Section>,
}

/// Sectionize `input`: a generation-result JSON object, or plain text.
pub fn sections_report(input: &str, sectionizer: &Sectionizer) -> SectionsReport {
    let sections = match serde_json::from_str::<GenerationResult>(input) {
        Ok(result) => {
            log::info!("Sectionizing suggestion {} ({})", result.id, result.category);
            result.sections_with(sectionizer)
        }
        Err(_) => sectionizer.parse(input),
    };
    SectionsReport {
        label: SectionPreview::new(&sections).count_label(),
        sections,
    }
}

/// Replay a sketch script and wrap the export in a note-creation payload.
pub fn sketch_idea(script: &str, config: &DrawingConfig, title: &str) -> Result<IdeaCreate, AppError> {
    let steps = parse_script(script)?;
    let mut surface = DrawingSurface::new(config)?;
    replay(&mut surface, &steps);

    let image = surface.export()?;
    log::info!("Sketch exported ({} chars)", image.len());
    Ok(IdeaCreate::sketch(title, image)?.with_tags(["sketch"]))
}

/// Load the config at `path`, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<IdeaeConfig, AppError> {
    match path {
        Some(path) => Ok(IdeaeConfig::load(path)?),
        None => Ok(IdeaeConfig::default()),
    }
}

/// Read a file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&PathBuf>) -> Result<String, AppError> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
