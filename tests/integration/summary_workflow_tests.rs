/*!
 * Integration tests for the summarization workflow
 */

use anyhow::Result;
use std::time::Duration;
use brevity::app_config::{Config, SummaryConfig, SummaryLength, SummaryStyle};
use brevity::app_controller::{Controller, InputSource, SummarizeOptions};
use brevity::file_utils::FileManager;
use brevity::providers::huggingface::HuggingFace;
use brevity::samples::Sample;
use brevity::summarizer;
use brevity::summary_service::{SummaryService, SummarySource};
use crate::common;

/// Test a file summarized without an API token
#[test]
fn test_controller_withFileInputAndNoToken_shouldUseExtractiveSummary() -> Result<()> {
    common::init_logging();
    let controller = Controller::new_for_test()?;
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_article(temp_dir.path(), "article.txt")?;

    let mut options = SummarizeOptions::new(InputSource::File(path));
    options.length = Some(SummaryLength::Short);
    options.style = Some(SummaryStyle::KeyPoints);

    let report = tokio_test::block_on(controller.summarize(&options))?;

    assert_eq!(report.outcome.source, SummarySource::Extractive);
    assert_eq!(report.outcome.text, summarizer::summarize(common::ARTICLE, 2, "Key points: "));
    assert_eq!(common::summary_sentences(&report.outcome.text, "Key points: ").len(), 2);
    assert!(report.stats.compression_ratio > 0);
    assert_eq!(report.stats.original_chars, common::ARTICLE.chars().count());
    Ok(())
}

/// Test summarizing a bundled sample in offline mode
#[tokio::test]
async fn test_controller_withSampleInput_shouldSummarizeOffline() -> Result<()> {
    let mut config = Config::default();
    config.remote.api_key = "hf_unused".to_string();
    let controller = Controller::with_config(config)?;

    let mut options = SummarizeOptions::new(InputSource::Sample(Sample::Research));
    options.offline = true;

    let report = controller.summarize(&options).await?;
    assert_eq!(report.outcome.source, SummarySource::Extractive);
    assert!(report.outcome.fallback_reason.is_none());
    assert_eq!(common::summary_sentences(&report.outcome.text, "").len(), 4);
    Ok(())
}

/// Test that short input is rejected before summarizing
#[tokio::test]
async fn test_controller_withShortInput_shouldFail() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "short.txt", "Too short to summarize.")?;

    let result = controller.summarize(&SummarizeOptions::new(InputSource::File(path))).await;
    let error = result.expect_err("short input should be rejected");
    assert!(error.to_string().contains("at least 200 characters"));
    Ok(())
}

/// Test that a missing input file is reported
#[tokio::test]
async fn test_controller_withMissingFile_shouldFail() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let temp_dir = common::create_temp_dir()?;

    let options = SummarizeOptions::new(InputSource::File(temp_dir.path().join("nope.txt")));
    assert!(controller.summarize(&options).await.is_err());
    Ok(())
}

/// Test that run writes the summary to the requested output file
#[tokio::test]
async fn test_controller_run_withOutputPath_shouldSaveSummary() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_article(temp_dir.path(), "article.txt")?;
    let output = temp_dir.path().join("out").join("summary.txt");

    let mut options = SummarizeOptions::new(InputSource::File(input));
    options.output = Some(output.clone());

    let report = controller.run(options).await?;
    assert_eq!(FileManager::read_to_string(&output)?, report.outcome.text);
    Ok(())
}

/// Test that run saves next to the input when asked to
#[tokio::test]
async fn test_controller_run_withSaveNextToInput_shouldWriteSummaryFile() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_article(temp_dir.path(), "article.txt")?;

    let mut options = SummarizeOptions::new(InputSource::File(input));
    options.save_next_to_input = true;

    let report = controller.run(options).await?;
    let saved = temp_dir.path().join("article.summary.txt");
    assert_eq!(FileManager::read_to_string(&saved)?, report.outcome.text);
    Ok(())
}

/// Test that saving next to a sample fails before any summary is produced
#[tokio::test]
async fn test_controller_run_withSaveNextToSample_shouldFail() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let mut options = SummarizeOptions::new(InputSource::Sample(Sample::Blog));
    options.save_next_to_input = true;

    let error = controller.run(options).await.unwrap_err();
    assert!(error.to_string().contains("explicit output path"));
    Ok(())
}

/// Test that an unreachable API falls back to the extractive summary
#[tokio::test]
async fn test_service_withUnreachableEndpoint_shouldFallBack() -> Result<()> {
    common::init_logging();
    let provider = HuggingFace::new("hf_test", "http://127.0.0.1:9", "facebook/bart-large-cnn");
    let service = SummaryService::new(SummaryConfig::default(), Some(provider), Duration::from_secs(5));

    let outcome = service.summarize(common::ARTICLE, SummaryLength::Medium, SummaryStyle::Conclusion).await?;
    assert_eq!(outcome.source, SummarySource::Extractive);
    assert!(outcome.fallback_reason.is_some());
    assert!(outcome.text.starts_with("Main conclusion: "));
    Ok(())
}
