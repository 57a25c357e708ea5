//! Interchangeable analysis backends

use crate::config::{BackendKind, Config};
use crate::error::{Result, ResumeScorerError};
use crate::llm::analyzer::REMOTE_FAILURE_MESSAGE;
use crate::llm::RemoteAnalyzer;
use crate::scoring::analysis::Analysis;
use crate::scoring::engine::ScoringEngine;
use log::{error, info};
use std::future::Future;

pub trait ResumeAnalyzer {
    fn analyze(&self, text: &str) -> impl Future<Output = Result<Analysis>> + Send;
    fn name(&self) -> &str;
}

/// Local keyword scoring
#[derive(Default)]
pub struct HeuristicAnalyzer {
    engine: ScoringEngine,
}

impl HeuristicAnalyzer {
    pub fn new(engine: ScoringEngine) -> Self {
        Self { engine }
    }
}

impl ResumeAnalyzer for HeuristicAnalyzer {
    async fn analyze(&self, text: &str) -> Result<Analysis> {
        Ok(self.engine.analyze(text))
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

impl ResumeAnalyzer for RemoteAnalyzer {
    async fn analyze(&self, text: &str) -> Result<Analysis> {
        RemoteAnalyzer::analyze(self, text).await
    }

    fn name(&self) -> &str {
        "remote"
    }
}

pub enum Backend {
    Heuristic(HeuristicAnalyzer),
    Remote(RemoteAnalyzer),
}

impl Backend {
    /// Build the backend selected in `config`. `api_key` overrides the
    /// configured environment variable for the remote backend.
    pub fn from_config(config: &Config, api_key: Option<String>) -> Result<Self> {
        match config.engine.backend {
            BackendKind::Heuristic => {
                let engine = match config.engine.reference_year {
                    Some(year) => ScoringEngine::with_reference_year(year),
                    None => ScoringEngine::new(),
                };
                info!(
                    "Using heuristic backend (reference year {})",
                    engine.reference_year()
                );
                Ok(Backend::Heuristic(HeuristicAnalyzer::new(engine)))
            }
            BackendKind::Remote => {
                let key = api_key
                    .filter(|key| !key.trim().is_empty())
                    .or_else(|| config.remote_api_key())
                    .ok_or_else(|| {
                        error!(
                            "Remote backend requires an API key: set {} or pass --api-key",
                            config.remote.api_key_env
                        );
                        ResumeScorerError::RemoteAnalysis(REMOTE_FAILURE_MESSAGE.to_string())
                    })?;
                let analyzer = RemoteAnalyzer::new(&config.remote, key)?;
                info!("Using remote backend ({})", analyzer.model());
                Ok(Backend::Remote(analyzer))
            }
        }
    }
}

impl ResumeAnalyzer for Backend {
    async fn analyze(&self, text: &str) -> Result<Analysis> {
        match self {
            Backend::Heuristic(analyzer) => analyzer.analyze(text).await,
            Backend::Remote(analyzer) => ResumeAnalyzer::analyze(analyzer, text).await,
        }
    }

    fn name(&self) -> &str {
        match self {
            Backend::Heuristic(analyzer) => analyzer.name(),
            Backend::Remote(analyzer) => analyzer.name(),
        }
    }
}
