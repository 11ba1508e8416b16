use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Duration;

use crate::app_config::{Config, SummaryLength, SummaryStyle};
use crate::file_utils::FileManager;
use crate::providers::huggingface::HuggingFace;
use crate::samples::Sample;
use crate::statistics::SummaryStats;
use crate::summary_service::{SummaryOutcome, SummaryService, SummarySource};

// @module: Application controller for summarization runs

/// Extension of summaries saved next to their input
pub const SUMMARY_EXTENSION: &str = "txt";

/// Where the text to summarize comes from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// A text file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
    /// One of the bundled sample articles
    Sample(Sample),
}

/// Per-run options, overriding the configuration
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    // @field: Input text source
    pub input: InputSource,
    // @field: Length override
    pub length: Option<SummaryLength>,
    // @field: Style override
    pub style: Option<SummaryStyle>,
    // @field: Skip the remote API
    pub offline: bool,
    // @field: Where to save the summary, besides stdout
    pub output: Option<PathBuf>,
    // @field: Save as `<stem>.summary.txt` next to the input file when no output is given
    pub save_next_to_input: bool,
    // @field: Show a spinner while working
    pub show_progress: bool,
}

impl SummarizeOptions {
    /// Options that read `input` with the configured length and style
    pub fn new(input: InputSource) -> Self {
        Self {
            input,
            length: None,
            style: None,
            offline: false,
            output: None,
            save_next_to_input: false,
            show_progress: false,
        }
    }

    /// Where the summary should be saved, if anywhere
    pub fn output_path(&self) -> Result<Option<PathBuf>> {
        if let Some(output) = &self.output {
            return Ok(Some(output.clone()));
        }
        if !self.save_next_to_input {
            return Ok(None);
        }

        match &self.input {
            InputSource::File(path) => Ok(Some(FileManager::generate_output_path(path, SUMMARY_EXTENSION))),
            InputSource::Stdin => Err(anyhow!("Cannot save next to stdin input; give an explicit output path")),
            InputSource::Sample(sample) => Err(anyhow!(
                "Cannot save next to the {} sample; give an explicit output path",
                sample
            )),
        }
    }
}

/// The result of a run, ready for display
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The summary and where it came from
    pub outcome: SummaryOutcome,
    /// Statistics comparing summary and original
    pub stats: SummaryStats,
}

/// Main application controller for summarization
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Read the text to summarize
    pub fn load_input(&self, input: &InputSource) -> Result<String> {
        match input {
            InputSource::File(path) => {
                if !FileManager::file_exists(path) {
                    return Err(anyhow!("Input file does not exist: {:?}", path));
                }
                FileManager::read_to_string(path)
            }
            InputSource::Stdin => FileManager::read_input(crate::file_utils::STDIN_PATH),
            InputSource::Sample(sample) => Ok(sample.text().to_string()),
        }
    }

    /// Build the summary service, with the remote provider unless offline
    pub fn build_service(&self, offline: bool) -> SummaryService<HuggingFace> {
        let remote = &self.config.remote;
        let provider = if offline {
            None
        } else if !remote.is_usable() {
            warn!("No API token configured for the remote summarizer, using extractive summarizer");
            None
        } else {
            Some(HuggingFace::from_config(remote))
        };

        SummaryService::new(
            self.config.summary.clone(),
            provider,
            Duration::from_secs(remote.timeout_secs),
        )
    }

    /// Check that the remote summarizer answers with the current configuration
    pub async fn check_connection(&self) -> Result<()> {
        let service = self.build_service(false);
        service.check_connection().await
            .context("Remote summarizer is not reachable")?;
        info!("Remote summarizer {} is reachable", self.config.remote.model);
        Ok(())
    }

    /// Summarize the input and return the report without printing it
    pub async fn summarize(&self, options: &SummarizeOptions) -> Result<RunReport> {
        let text = self.load_input(&options.input)?;
        let length = options.length.unwrap_or(self.config.summary.length);
        let style = options.style.unwrap_or(self.config.summary.style);
        debug!("Summarizing with length={} style={}", length, style);

        let service = self.build_service(options.offline);
        let spinner = Self::create_spinner(options.show_progress);

        let result = service
            .summarize_with_progress(&text, length, style, |stage| spinner.set_message(stage.message()))
            .await;
        spinner.finish_and_clear();

        let outcome = result?;

        let stats = SummaryStats::compute(text.trim(), &outcome.text, outcome.processing_time);
        Ok(RunReport { outcome, stats })
    }

    /// Run the summarization workflow and print the result to stdout
    pub async fn run(&self, options: SummarizeOptions) -> Result<RunReport> {
        let output_path = options.output_path()?;
        let report = self.summarize(&options).await?;

        println!("{}", Self::render_report(&report));

        if let Some(output) = &output_path {
            FileManager::write_to_file(output, &report.outcome.text)?;
            info!("Summary saved to {:?}", output);
        }

        info!(
            "Summary completed in {} ({})",
            Self::format_duration(report.outcome.processing_time),
            report.outcome.source
        );

        Ok(report)
    }

    /// Text shown to the user for a finished run
    pub fn render_report(report: &RunReport) -> String {
        let label = match report.outcome.source {
            SummarySource::Remote => "Summary",
            SummarySource::Extractive => "Summary (extractive fallback)",
        };
        format!("{}:\n{}\n\n{}", label, report.outcome.text, report.stats)
    }

    fn create_spinner(visible: bool) -> ProgressBar {
        if !visible {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message("Processing...");
        spinner
    }

    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
