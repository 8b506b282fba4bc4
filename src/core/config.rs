//! Configuration management for Delver
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/delver/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{DelverError, Result};

/// Main configuration for Delver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Chat API configuration
    pub openai: OpenAiConfig,
    /// Agent configuration
    pub agent: AgentConfig,
    /// Research tool configuration
    #[serde(default)]
    pub tools: ToolsConfig,
    /// Output file configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// OpenAI-compatible chat API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// Base URL of the API (default: https://api.openai.com/v1)
    pub api_base: String,
    /// Model used for tool calling and the final answer
    /// Default: gpt-4o-mini
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// API key, taken from the environment. Never written to the config file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

/// Agent behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Maximum reasoning/tool steps before the loop stops
    /// Default: 10
    pub max_steps: usize,
    /// Whether to show debug output
    pub debug: bool,
}

/// Research tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Maximum web search results returned per query
    pub search_results: usize,
    /// Maximum encyclopedia pages returned per lookup
    pub wiki_results: usize,
    /// Maximum characters of encyclopedia extract per page
    pub wiki_excerpt_chars: usize,
}

/// Output file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory research notes are written under
    pub dir: String,
    /// File name within the directory
    pub file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai: OpenAiConfig::default(),
            agent: AgentConfig::default(),
            tools: ToolsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: env::var("DELVER_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            timeout_secs: 120,
            api_key: None,
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_steps: env::var("DELVER_MAX_STEPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            debug: env::var("DELVER_DEBUG")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            search_results: 5,
            wiki_results: 1,
            wiki_excerpt_chars: 100,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: env::var("DELVER_OUTPUT_DIR").unwrap_or_else(|_| "outputs".to_string()),
            file: "research_output.txt".to_string(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("delver")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Load .env before anything reads the environment
        let _ = dotenvy::dotenv();

        let mut config = Self::load_from_file().unwrap_or_default();

        // The key is never persisted, so fill it from the environment
        // regardless of where the rest of the config came from
        if config.openai.api_key.is_none() {
            config.openai.api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        }

        config
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(DelverError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| DelverError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| DelverError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Get the API key, failing if credentials are absent
    pub fn require_api_key(&self) -> Result<&str> {
        self.openai
            .api_key
            .as_deref()
            .ok_or(DelverError::MissingApiKey)
    }

    /// Full path of the research output file
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output.dir).join(&self.output.file)
    }
}
