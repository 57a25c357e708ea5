//! Report wrapper around an analysis

use crate::scoring::analysis::{rating_label, Analysis};
use crate::scoring::catalog::CATALOG_VERSION;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub analysis: Analysis,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub source_file: String,
    pub backend: String,
    pub processing_time_ms: u64,
    pub version: String,
    pub catalog_version: String,
}

impl Report {
    pub fn new(
        analysis: Analysis,
        source_file: &str,
        backend: &str,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            analysis,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                source_file: source_file.to_string(),
                backend: backend.to_string(),
                processing_time_ms,
                version: env!("CARGO_PKG_VERSION").to_string(),
                catalog_version: CATALOG_VERSION.to_string(),
            },
        }
    }

    pub fn rating(&self) -> &'static str {
        rating_label(self.analysis.score.overall)
    }
}
