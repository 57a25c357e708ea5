//! Error handling for the resume scorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Word extraction error: {0}")]
    DocxExtraction(String),

    #[error("Empty document: {0}")]
    EmptyDocument(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Remote analysis error: {0}")]
    RemoteAnalysis(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeScorerError>;

/// Convert anyhow errors raised by the HTTP client
impl From<anyhow::Error> for ResumeScorerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeScorerError::RemoteAnalysis(err.to_string())
    }
}
