use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Summary shape and input rules
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Remote summarization API settings
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Requested summary length
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    // @returns: Sentences kept by the extractive summarizer
    pub fn sentence_count(&self) -> usize {
        match self {
            Self::Short => 2,
            Self::Medium => 4,
            Self::Long => 6,
        }
    }

    // @returns: (max_length, min_length) in tokens for the remote model
    pub fn remote_bounds(&self) -> (u32, u32) {
        match self {
            Self::Short => (50, 10),
            Self::Medium => (100, 30),
            Self::Long => (150, 50),
        }
    }
}

impl std::fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for SummaryLength {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            _ => Err(anyhow!("Invalid summary length: {}", s)),
        }
    }
}

/// Rhetorical framing of the summary
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryStyle {
    #[default]
    Default,
    KeyPoints,
    Conclusion,
}

impl SummaryStyle {
    // @returns: Label prepended to extractive summaries
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::KeyPoints => "Key points: ",
            Self::Conclusion => "Main conclusion: ",
        }
    }
}

impl std::fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::KeyPoints => "key-points",
            Self::Conclusion => "conclusion",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for SummaryStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "key-points" | "keypoints" => Ok(Self::KeyPoints),
            "conclusion" => Ok(Self::Conclusion),
            _ => Err(anyhow!("Invalid summary style: {}", s)),
        }
    }
}

/// Summary settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SummaryConfig {
    /// Requested length
    #[serde(default)]
    pub length: SummaryLength,

    /// Requested style
    #[serde(default)]
    pub style: SummaryStyle,

    /// Minimum number of characters accepted for summarization
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            length: SummaryLength::default(),
            style: SummaryStyle::default(),
            min_chars: default_min_chars(),
        }
    }
}

/// Remote inference API configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RemoteConfig {
    // @field: Whether to call the remote API at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    // @field: Model name
    #[serde(default = "default_huggingface_model")]
    pub model: String,

    // @field: API token
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "default_huggingface_endpoint")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: Retry count for failed requests
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    // @field: Backoff base for retries (in milliseconds)
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: default_huggingface_model(),
            api_key: String::new(),
            endpoint: default_huggingface_endpoint(),
            timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

impl RemoteConfig {
    /// Whether the remote API can be called with this configuration
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Upper bound accepted for `remote.retry_count`
pub const MAX_RETRY_COUNT: u32 = 10;

fn default_min_chars() -> usize {
    200
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    0 // A single attempt; the extractive fallback covers failures
}

fn default_retry_backoff_ms() -> u64 {
    1000 // 1 second base backoff time, doubled on each retry
}

fn default_true() -> bool {
    true
}

fn default_huggingface_endpoint() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_huggingface_model() -> String {
    "facebook/bart-large-cnn".to_string()
}

/// Values given on the command line that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    // @field: API token, ignored when blank
    pub api_key: Option<String>,
    // @field: Remote model name
    pub model: Option<String>,
    // @field: Remote timeout in seconds
    pub timeout_secs: Option<u64>,
    // @field: Log level
    pub log_level: Option<LogLevel>,
}

impl Config {
    /// Load the configuration file, writing a default one first if it is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {:?}", path))?;

            let reader = BufReader::new(file);
            return serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {:?}", path));
        }

        warn!("Config file not found at {:?}, creating default config.", path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {:?}", path))?;

        Ok(config)
    }

    /// Apply command line overrides on top of the loaded values
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(token) = overrides.api_key.as_deref().filter(|t| !t.trim().is_empty()) {
            self.remote.api_key = token.to_string();
        }

        if let Some(model) = &overrides.model {
            self.remote.model = model.clone();
        }

        if let Some(timeout) = overrides.timeout_secs {
            self.remote.timeout_secs = timeout;
        }

        if let Some(log_level) = &overrides.log_level {
            self.log_level = log_level.clone();
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.summary.min_chars == 0 {
            return Err(anyhow!("Minimum input length must be greater than zero"));
        }

        if self.remote.enabled {
            Url::parse(&self.remote.endpoint)
                .map_err(|e| anyhow!("Invalid remote endpoint '{}': {}", self.remote.endpoint, e))?;

            if self.remote.model.trim().is_empty() {
                return Err(anyhow!("Remote model name cannot be empty"));
            }

            if self.remote.timeout_secs == 0 {
                return Err(anyhow!("Remote timeout must be greater than zero"));
            }

            if self.remote.retry_count > MAX_RETRY_COUNT {
                return Err(anyhow!(
                    "Remote retry count must be at most {} (got {})",
                    MAX_RETRY_COUNT,
                    self.remote.retry_count
                ));
            }
        }

        Ok(())
    }
}
