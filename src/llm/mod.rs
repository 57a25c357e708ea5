//! Remote model integration

pub mod analyzer;
pub mod client;
pub mod prompts;

pub use analyzer::RemoteAnalyzer;
