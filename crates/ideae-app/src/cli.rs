//! Command-line interface.

use crate::app::{AppError, load_config, read_input, sections_report, sketch_idea};
use clap::{Parser, Subcommand};
use ideae_core::sections::Sectionizer;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ideae", version, about = "Ideae suggestion and sketch tools")]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split a generated suggestion into idea sections
    Sections {
        /// Generation result JSON or plain text; stdin when omitted or `-`
        file: Option<PathBuf>,
    },
    /// Replay a sketch script and print the note payload
    Sketch {
        /// JSON array of input events and toolbar commands
        script: PathBuf,
        /// Note title
        #[arg(long, default_value = "Sketch")]
        title: String,
    },
}

impl Cli {
    /// Run the selected command, returning what should be printed.
    pub fn run(&self) -> Result<String, AppError> {
        let config = load_config(self.config.as_deref())?;
        match &self.command {
            Command::Sections { file } => {
                let input = read_input(file.as_ref())?;
                let sectionizer = Sectionizer::from_config(&config.sectionizer);
                Ok(serde_json::to_string_pretty(&sections_report(&input, &sectionizer))?)
            }
            Command::Sketch { script, title } => {
                let script = read_input(Some(script))?;
                let idea = sketch_idea(&script, &config.drawing, title)?;
                Ok(serde_json::to_string_pretty(&idea)?)
            }
        }
    }
}
