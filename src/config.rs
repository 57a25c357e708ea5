//! Configuration management for the resume scorer

use crate::error::{Result, ResumeScorerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub engine: EngineConfig,
    pub remote: RemoteConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub backend: BackendKind,
    /// Overrides the calendar year used for experience and recency checks
    pub reference_year: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Heuristic,
    Remote,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineConfig {
                backend: BackendKind::Heuristic,
                reference_year: None,
            },
            remote: RemoteConfig {
                endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
                model: "gpt-4o-mini".to_string(),
                temperature: 0.3,
                max_tokens: 2500,
                timeout_secs: 60,
                api_key_env: "OPENAI_API_KEY".to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load an explicit configuration file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResumeScorerError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            ResumeScorerError::Configuration(format!("Failed to parse config: {}", e))
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeScorerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-scorer")
            .join("config.toml")
    }

    /// Update one setting addressed by a dotted key such as `remote.model`
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "engine.backend" => self.engine.backend = parse_value(key, value)?,
            "engine.reference_year" => {
                self.engine.reference_year = match value {
                    "" | "none" | "auto" => None,
                    year => Some(parse_value(key, year)?),
                }
            }
            "remote.endpoint" => self.remote.endpoint = value.to_string(),
            "remote.model" => self.remote.model = value.to_string(),
            "remote.temperature" => self.remote.temperature = parse_value(key, value)?,
            "remote.max_tokens" => self.remote.max_tokens = parse_value(key, value)?,
            "remote.timeout_secs" => self.remote.timeout_secs = parse_value(key, value)?,
            "remote.api_key_env" => self.remote.api_key_env = value.to_string(),
            "output.format" => self.output.format = parse_value(key, value)?,
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            _ => {
                return Err(ResumeScorerError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }

    /// API key for the remote analyzer, read from the configured variable
    pub fn remote_api_key(&self) -> Option<String> {
        std::env::var(&self.remote.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|e| {
        ResumeScorerError::Configuration(format!("Invalid value '{}' for {}: {}", value, key, e))
    })
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "heuristic" | "local" => Ok(BackendKind::Heuristic),
            "remote" | "ai" | "gpt" => Ok(BackendKind::Remote),
            _ => Err(format!(
                "Invalid backend: {}. Supported: heuristic, remote",
                s
            )),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Heuristic => f.write_str("heuristic"),
            BackendKind::Remote => f.write_str("remote"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid output format: {}. Supported: console, json, markdown",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.engine.backend, BackendKind::Heuristic);
        assert!(config.engine.reference_year.is_none());
        assert_eq!(config.remote.model, "gpt-4o-mini");
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.engine.reference_year = Some(2024);
        config.engine.backend = BackendKind::Remote;
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("backend = \"remote\""));

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.engine.reference_year, Some(2024));
        assert_eq!(loaded.engine.backend, BackendKind::Remote);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ResumeScorerError::Configuration(_))));
    }

    #[test]
    fn test_set_values() {
        let mut config = Config::default();
        config.set("engine.backend", "remote").unwrap();
        config.set("engine.reference_year", "2023").unwrap();
        config.set("output.format", "md").unwrap();
        config.set("remote.max_tokens", "1000").unwrap();
        assert_eq!(config.engine.backend, BackendKind::Remote);
        assert_eq!(config.engine.reference_year, Some(2023));
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert_eq!(config.remote.max_tokens, 1000);

        config.set("engine.reference_year", "auto").unwrap();
        assert!(config.engine.reference_year.is_none());
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set("engine.colour", "blue").is_err());
        assert!(config.set("remote.temperature", "warm").is_err());
        assert!(config.set("output.detailed", "maybe").is_err());
    }
}
