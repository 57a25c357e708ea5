//! CLI interface for the resume scorer

use crate::config::{BackendKind, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md"];

#[derive(Parser)]
#[command(name = "resume-scorer")]
#[command(about = "Score a resume and get prioritized feedback")]
#[command(long_about = "Extract text from a resume (PDF, Word, text or Markdown) and score it for content, structure and optimization using keyword heuristics or a remote AI analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume
    Analyze {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Analysis backend: heuristic or remote
        #[arg(short, long)]
        backend: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include insights and advice examples
        #[arg(short, long)]
        detailed: bool,

        /// API key for the remote backend (overrides the environment)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "engine.backend")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    format.parse()
}

/// Parse and validate backend name
pub fn parse_backend(backend: &str) -> Result<BackendKind, String> {
    backend.parse()
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
