//! Resume scorer library

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod scoring;

pub use config::Config;
pub use error::{Result, ResumeScorerError};
pub use scoring::analysis::Analysis;
pub use scoring::engine::ScoringEngine;
