// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use brevity::app_config::{self, Config, ConfigOverrides, SummaryLength, SummaryStyle};
use brevity::app_controller::{Controller, InputSource, SummarizeOptions};
use brevity::file_utils::STDIN_PATH;
use brevity::samples::Sample;

/// CLI Wrapper for SummaryLength to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSummaryLength {
    Short,
    Medium,
    Long,
}

impl From<CliSummaryLength> for SummaryLength {
    fn from(cli_length: CliSummaryLength) -> Self {
        match cli_length {
            CliSummaryLength::Short => SummaryLength::Short,
            CliSummaryLength::Medium => SummaryLength::Medium,
            CliSummaryLength::Long => SummaryLength::Long,
        }
    }
}

/// CLI Wrapper for SummaryStyle to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSummaryStyle {
    Default,
    KeyPoints,
    Conclusion,
}

impl From<CliSummaryStyle> for SummaryStyle {
    fn from(cli_style: CliSummaryStyle) -> Self {
        match cli_style {
            CliSummaryStyle::Default => SummaryStyle::Default,
            CliSummaryStyle::KeyPoints => SummaryStyle::KeyPoints,
            CliSummaryStyle::Conclusion => SummaryStyle::Conclusion,
        }
    }
}

/// CLI Wrapper for Sample to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSample {
    News,
    Research,
    Blog,
}

impl From<CliSample> for Sample {
    fn from(cli_sample: CliSample) -> Self {
        match cli_sample {
            CliSample::News => Sample::News,
            CliSample::Research => Sample::Research,
            CliSample::Blog => Sample::Blog,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a text file, stdin or a sample article (default command)
    Summarize(SummarizeArgs),

    /// Generate shell completions for brevity
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
struct SummarizeArgs {
    /// Text file to summarize, or '-' for stdin (default: stdin)
    #[arg(value_name = "INPUT", conflicts_with = "sample")]
    input_path: Option<PathBuf>,

    /// Summary length
    #[arg(short, long, value_enum)]
    length: Option<CliSummaryLength>,

    /// Summary style
    #[arg(short, long, value_enum)]
    style: Option<CliSummaryStyle>,

    /// Summarize a bundled sample article instead of INPUT
    #[arg(long, value_enum)]
    sample: Option<CliSample>,

    /// Skip the remote API and use the extractive summarizer only
    #[arg(long)]
    offline: bool,

    /// Also write the summary to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save the summary next to INPUT as <stem>.summary.txt
    #[arg(long, conflicts_with = "output")]
    save: bool,

    /// Check that the remote summarization API answers, then exit
    #[arg(long, conflicts_with = "offline")]
    check: bool,

    /// HuggingFace API token
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Model name to use for remote summarization
    #[arg(short, long)]
    model: Option<String>,

    /// Remote request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Disable the progress spinner
    #[arg(long)]
    no_progress: bool,
}

/// brevity - Text summarization with an extractive fallback
///
/// Summarizes articles with the HuggingFace inference API and falls back to a
/// local extractive summarizer when the API is unavailable.
#[derive(Parser, Debug)]
#[command(name = "brevity")]
#[command(version)]
#[command(about = "AI-powered text summarization tool")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "brevity condenses articles into short summaries using the HuggingFace \
inference API, with a local extractive summarizer as fallback.

EXAMPLES:
    brevity article.txt                          # Summarize using default config
    cat article.txt | brevity                    # Summarize stdin
    brevity -l short -s key-points article.txt   # Short summary framed as key points
    brevity --sample research --offline          # Extractive summary of a sample article
    brevity -o summary.txt article.txt           # Also save the summary to a file
    brevity --save article.txt                   # Save as article.summary.txt
    brevity --check                              # Test the remote API connection
    brevity completions bash > brevity.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically. The API token can also be given through the
    HF_API_TOKEN environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    summarize: SummarizeArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and emoji for log level
    fn decoration_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌"),
            Level::Warn => ("\x1B[1;33m", "🚧"),
            Level::Info => ("\x1B[1;32m", ""),
            Level::Debug => ("\x1B[1;36m", "🔍"),
            Level::Trace => ("\x1B[1;35m", "📋"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, emoji) = Self::decoration_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Trace is the ceiling; the effective level is applied with set_max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "brevity", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Summarize(args)) => run_summarize(args).await,
        None => run_summarize(cli.summarize).await,
    }
}

async fn run_summarize(options: SummarizeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    let config = load_config(&options)?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config)?;

    if options.check {
        return controller.check_connection().await;
    }

    let input = match (&options.sample, &options.input_path) {
        (Some(sample), _) => InputSource::Sample(sample.clone().into()),
        (None, Some(path)) if path != Path::new(STDIN_PATH) => InputSource::File(path.clone()),
        (None, _) => InputSource::Stdin,
    };

    let summarize_options = SummarizeOptions {
        input,
        length: options.length.map(Into::into),
        style: options.style.map(Into::into),
        offline: options.offline,
        output: options.output,
        save_next_to_input: options.save,
        show_progress: !options.no_progress && std::io::stderr().is_terminal(),
    };

    controller.run(summarize_options).await?;
    Ok(())
}

/// Load or create the configuration file, then apply command line overrides
fn load_config(options: &SummarizeArgs) -> Result<Config> {
    let mut config = Config::load_or_create(&options.config_path)?;

    config.apply_overrides(&ConfigOverrides {
        api_key: options.api_token.clone(),
        model: options.model.clone(),
        timeout_secs: options.timeout,
        log_level: options.log_level.clone().map(Into::into),
    });

    config.validate()
        .context("Configuration validation failed")?;

    Ok(config)
}
