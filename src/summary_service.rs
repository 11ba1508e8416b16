/*!
 * Summary orchestration.
 *
 * The service validates input, asks the remote provider for an abstractive
 * summary under a timeout, and falls back to the local extractive summarizer
 * when the provider fails, times out, or returns nothing.
 */

use log::{debug, info, warn};
use std::fmt;
use std::time::{Duration, Instant};

use crate::app_config::{SummaryConfig, SummaryLength, SummaryStyle};
use crate::errors::{ProviderError, SummaryError};
use crate::providers::Provider;
use crate::summarizer;

/// Where a summary came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarySource {
    /// Generated by the remote inference API
    Remote,
    /// Selected locally by the extractive summarizer
    Extractive,
}

impl fmt::Display for SummarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Extractive => write!(f, "extractive"),
        }
    }
}

/// Progress stages reported while a summary is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStage {
    Analyzing,
    Generating,
    Fallback,
}

impl SummaryStage {
    // @returns: Human readable status line
    pub fn message(&self) -> &'static str {
        match self {
            Self::Analyzing => "Analyzing text...",
            Self::Generating => "Generating summary...",
            Self::Fallback => "API busy, using fallback...",
        }
    }
}

/// Result of one summarization request
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    /// The summary text
    pub text: String,
    /// Which path produced it
    pub source: SummarySource,
    /// Wall time spent, including any failed remote attempt
    pub processing_time: Duration,
    /// Why the remote path was abandoned, if it was tried
    pub fallback_reason: Option<String>,
}

/// Summarizes text with a remote provider and an extractive fallback
#[derive(Debug)]
pub struct SummaryService<P: Provider> {
    // @field: Summary settings
    config: SummaryConfig,
    // @field: Remote provider, absent in offline mode
    provider: Option<P>,
    // @field: Deadline for the remote call
    timeout: Duration,
}

impl<P: Provider> SummaryService<P> {
    /// Create a service that tries `provider` before falling back
    pub fn new(config: SummaryConfig, provider: Option<P>, timeout: Duration) -> Self {
        Self {
            config,
            provider,
            timeout,
        }
    }

    /// Create a service that only uses the extractive summarizer
    pub fn offline(config: SummaryConfig) -> Self {
        Self::new(config, None, Duration::ZERO)
    }

    /// Whether a remote provider is configured
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Trim the input and check it is long enough to summarize
    pub fn validate_input<'a>(&self, text: &'a str) -> Result<&'a str, SummaryError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SummaryError::EmptyInput);
        }

        let actual = trimmed.chars().count();
        if actual < self.config.min_chars {
            return Err(SummaryError::InputTooShort {
                required: self.config.min_chars,
                actual,
            });
        }

        Ok(trimmed)
    }

    /// Summarize, preferring the remote provider
    pub async fn summarize(&self, text: &str, length: SummaryLength, style: SummaryStyle) -> Result<SummaryOutcome, SummaryError> {
        self.summarize_with_progress(text, length, style, |_| {}).await
    }

    /// Summarize, reporting each stage to `on_stage`
    pub async fn summarize_with_progress<F>(
        &self,
        text: &str,
        length: SummaryLength,
        style: SummaryStyle,
        on_stage: F,
    ) -> Result<SummaryOutcome, SummaryError>
    where
        F: Fn(SummaryStage) + Send + Sync,
    {
        let text = self.validate_input(text)?;
        let start_time = Instant::now();
        on_stage(SummaryStage::Analyzing);

        let Some(provider) = &self.provider else {
            debug!("No remote provider configured, using extractive summarizer");
            return Ok(self.extractive_outcome(text, length, style, start_time, None));
        };

        on_stage(SummaryStage::Generating);
        info!("Starting summarization...");

        match self.summarize_remote(provider, text, length).await {
            Ok(summary) => Ok(SummaryOutcome {
                text: summary,
                source: SummarySource::Remote,
                processing_time: start_time.elapsed(),
                fallback_reason: None,
            }),
            Err(e) => {
                warn!("Summarization error: {}. Using extractive fallback", e);
                on_stage(SummaryStage::Fallback);
                Ok(self.extractive_outcome(text, length, style, start_time, Some(e.to_string())))
            }
        }
    }

    /// Summarize without touching the remote provider
    pub fn summarize_offline(&self, text: &str, length: SummaryLength, style: SummaryStyle) -> Result<SummaryOutcome, SummaryError> {
        let text = self.validate_input(text)?;
        Ok(self.extractive_outcome(text, length, style, Instant::now(), None))
    }

    /// Ask the remote provider for a trivial summary to confirm it answers
    pub async fn check_connection(&self) -> Result<(), ProviderError> {
        let Some(provider) = &self.provider else {
            return Err(ProviderError::AuthenticationError("No API token configured".to_string()));
        };

        tokio::time::timeout(self.timeout, provider.test_connection())
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout))?
    }

    async fn summarize_remote(&self, provider: &P, text: &str, length: SummaryLength) -> Result<String, ProviderError> {
        let request = provider.build_request(text, length);

        let response = tokio::time::timeout(self.timeout, provider.complete(request))
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout))??;

        let summary = P::extract_text(&response);
        if summary.trim().is_empty() {
            return Err(ProviderError::ParseError("Empty summary returned".to_string()));
        }

        debug!("Summary generated successfully: {}", summary);
        Ok(summary)
    }

    fn extractive_outcome(
        &self,
        text: &str,
        length: SummaryLength,
        style: SummaryStyle,
        start_time: Instant,
        fallback_reason: Option<String>,
    ) -> SummaryOutcome {
        let summary = summarizer::extract(text, length.sentence_count(), style.prefix());
        debug!("Extractive summary kept {} sentences", summary.sentence_count());
        SummaryOutcome {
            text: summary.to_string(),
            source: SummarySource::Extractive,
            processing_time: start_time.elapsed(),
            fallback_reason,
        }
    }
}
