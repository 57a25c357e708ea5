//! Remote analyzer backed by a hosted chat-completion model

use crate::config::RemoteConfig;
use crate::error::{Result, ResumeScorerError};
use crate::llm::client::ChatClient;
use crate::llm::prompts::PromptTemplates;
use crate::scoring::analysis::Analysis;
use log::{debug, error, info};
use serde_json::Value;
use std::time::Instant;

/// Message surfaced to the user for every remote failure
pub const REMOTE_FAILURE_MESSAGE: &str = "Failed to analyze resume with AI. Please try again.";

const REQUIRED_FIELDS: &[&str] = &[
    "score",
    "advice",
    "insights",
    "strengths",
    "criticalIssues",
    "industryMatch",
];

const REQUIRED_SCORE_FIELDS: &[&str] = &["overall", "content", "structure", "optimization"];

pub struct RemoteAnalyzer {
    client: ChatClient,
    prompts: PromptTemplates,
}

impl RemoteAnalyzer {
    pub fn new(config: &RemoteConfig, api_key: String) -> Result<Self> {
        let client = ChatClient::new(config, api_key).map_err(|e| {
            error!("Remote analyzer setup failed: {:#}", e);
            remote_failure()
        })?;

        Ok(Self {
            client,
            prompts: PromptTemplates::default(),
        })
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Score a resume through the remote model
    pub async fn analyze(&self, text: &str) -> Result<Analysis> {
        let start = Instant::now();
        let prompt = self.prompts.render_analysis(text);

        let reply = self
            .client
            .complete(&self.prompts.system, &prompt)
            .await
            .map_err(|e| {
                error!("Remote analysis request failed: {:#}", e);
                remote_failure()
            })?;

        debug!(
            "Received {} characters from {}",
            reply.len(),
            self.client.model()
        );

        let analysis = parse_response(&reply).map_err(|e| {
            error!("Remote analysis response rejected: {}", e);
            remote_failure()
        })?;

        info!(
            "Remote analysis completed in {}ms (overall {})",
            start.elapsed().as_millis(),
            analysis.score.overall
        );
        Ok(analysis)
    }
}

fn remote_failure() -> ResumeScorerError {
    ResumeScorerError::RemoteAnalysis(REMOTE_FAILURE_MESSAGE.to_string())
}

/// Slice from the first `{` to the last `}` of a model reply
pub fn extract_json_object(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&reply[start..=end])
}

/// Check the shape of a decoded reply before typed deserialization
pub fn validate_analysis(value: &Value) -> Result<()> {
    let object = value.as_object().ok_or_else(|| {
        ResumeScorerError::RemoteAnalysis("response is not a JSON object".to_string())
    })?;

    for field in REQUIRED_FIELDS {
        if !object.contains_key(*field) {
            return Err(ResumeScorerError::RemoteAnalysis(format!(
                "missing field '{}'",
                field
            )));
        }
    }

    let score = object["score"].as_object().ok_or_else(|| {
        ResumeScorerError::RemoteAnalysis("'score' is not an object".to_string())
    })?;
    for field in REQUIRED_SCORE_FIELDS {
        if !score.contains_key(*field) {
            return Err(ResumeScorerError::RemoteAnalysis(format!(
                "missing field 'score.{}'",
                field
            )));
        }
    }

    Ok(())
}

/// Extract, validate and decode an analysis from raw model output
pub fn parse_response(reply: &str) -> Result<Analysis> {
    let json = extract_json_object(reply).ok_or_else(|| {
        ResumeScorerError::RemoteAnalysis("no JSON object in response".to_string())
    })?;

    let value: Value = serde_json::from_str(json)?;
    validate_analysis(&value)?;

    Ok(serde_json::from_value(value)?)
}
