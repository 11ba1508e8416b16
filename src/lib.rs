/*!
 * # brevity - Text summarization with an extractive fallback
 *
 * A Rust library for condensing articles into short summaries.
 *
 * ## Features
 *
 * - Abstractive summaries from the HuggingFace inference API
 * - Local extractive summarizer used when the API fails or times out
 * - Short / medium / long summaries and key-point or conclusion framing
 * - Compression ratio and reading time statistics
 * - Bundled sample articles
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `summarizer`: Pure extractive summarizer:
 *   - `summarizer::tokenizer`: Sentence and word segmentation
 *   - `summarizer::scoring`: Word-frequency sentence scoring
 *   - `summarizer::extractive`: Sentence selection and rendering
 * - `summary_service`: Remote call with timeout and extractive fallback
 * - `providers`: Client implementations for summarization backends:
 *   - `providers::huggingface`: HuggingFace inference API client
 *   - `providers::mock`: Mock provider for tests
 * - `statistics`: Summary statistics
 * - `samples`: Bundled sample articles
 * - `file_utils`: File system and stdin operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod providers;
pub mod samples;
pub mod statistics;
pub mod summarizer;
pub mod summary_service;

// Re-export main types for easier usage
pub use app_config::{Config, SummaryLength, SummaryStyle};
pub use errors::{AppError, ProviderError, SummaryError};
pub use statistics::SummaryStats;
pub use summarizer::summarize;
pub use summary_service::{SummaryOutcome, SummaryService, SummarySource};
