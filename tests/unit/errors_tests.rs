/*!
 * Tests for error types and conversions
 */

use std::time::Duration;
use brevity::errors::{AppError, ProviderError, SummaryError};

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 503,
        message: "Model is loading".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("503"));
    assert!(display.contains("Model is loading"));
}

#[test]
fn test_providerError_timeout_shouldShowDurationWithUnit() {
    let display = ProviderError::Timeout(Duration::from_secs(30)).to_string();
    assert_eq!(display, "API request timeout after 30s");

    // Sub-second deadlines must not render as zero
    let display = ProviderError::Timeout(Duration::from_millis(200)).to_string();
    assert_eq!(display, "API request timeout after 200ms");
}

#[test]
fn test_summaryError_inputTooShort_shouldMentionRequiredLength() {
    let error = SummaryError::InputTooShort { required: 200, actual: 42 };
    let display = error.to_string();
    assert!(display.contains("at least 200 characters"));
    assert!(display.contains("42"));
}

#[test]
fn test_appError_fromProviderError_shouldWrapCorrectly() {
    let app_error: AppError = ProviderError::RequestFailed("boom".to_string()).into();
    assert!(app_error.to_string().contains("Provider error"));
    assert!(app_error.to_string().contains("boom"));
}

#[test]
fn test_appError_fromSummaryError_shouldWrapCorrectly() {
    let app_error: AppError = SummaryError::EmptyInput.into();
    let display = app_error.to_string();
    assert!(display.contains("Summary error"));
    assert!(display.contains("empty"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromAnyhowError_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("Something went wrong").into();
    let display = format!("{}", app_error);
    assert!(display.contains("Unknown error"));
    assert!(display.contains("Something went wrong"));
}
