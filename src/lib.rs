#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the summarize binary and tests)
pub use app::App;
pub use config::PERSISTENCE;
pub use errors::{PipelineError, RenderError};
pub use models::{LabelOrder, PipelineReport, run_pipeline, run_pipeline_bytes};

#[cfg(not(target_arch = "wasm32"))]
pub use models::run_pipeline_file;

// CLI argument parsing
use {clap::Parser, std::path::PathBuf};

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Trade-history CSV to load on start-up
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Order of the date labels (overrides the saved preference)
    #[arg(long, value_enum)]
    pub order: Option<LabelOrder>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
