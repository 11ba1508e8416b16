/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use brevity::app_config::{
    Config, ConfigOverrides, LogLevel, RemoteConfig, SummaryLength, SummaryStyle, MAX_RETRY_COUNT,
};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.summary.length, SummaryLength::Medium);
    assert_eq!(config.summary.style, SummaryStyle::Default);
    assert_eq!(config.summary.min_chars, 200);

    assert!(config.remote.enabled);
    assert_eq!(config.remote.model, "facebook/bart-large-cnn");
    assert_eq!(config.remote.endpoint, "https://api-inference.huggingface.co");
    assert_eq!(config.remote.timeout_secs, 30);
    assert_eq!(config.remote.retry_count, 0);
    assert!(config.remote.api_key.is_empty());

    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.remote.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());

    // Endpoint is irrelevant once the remote API is disabled
    config.remote.enabled = false;
    assert!(config.validate().is_ok());
    config.remote.enabled = true;
    config.remote.endpoint = "https://api-inference.huggingface.co".to_string();

    config.remote.timeout_secs = 0;
    assert!(config.validate().is_err());
    config.remote.timeout_secs = 30;

    config.remote.model = "  ".to_string();
    assert!(config.validate().is_err());
    config.remote.model = "facebook/bart-large-cnn".to_string();

    config.summary.min_chars = 0;
    assert!(config.validate().is_err());
}

/// Test that the retry count is bounded so the backoff cannot grow without limit
#[test]
fn test_config_validation_withExcessiveRetryCount_shouldFail() {
    let mut config = Config::default();
    config.remote.retry_count = MAX_RETRY_COUNT;
    assert!(config.validate().is_ok());

    config.remote.retry_count = 65;
    let error = config.validate().unwrap_err();
    assert!(error.to_string().contains("retry count"));

    // A disabled remote never retries, so the count is not checked
    config.remote.enabled = false;
    assert!(config.validate().is_ok());
}

/// Test that a partial JSON file is completed with defaults
#[test]
fn test_config_fromPartialJson_shouldFillDefaults() {
    let json = r#"{
        "summary": { "length": "short", "style": "key-points" },
        "remote": { "api_key": "hf_secret" },
        "log_level": "debug"
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.summary.length, SummaryLength::Short);
    assert_eq!(config.summary.style, SummaryStyle::KeyPoints);
    assert_eq!(config.summary.min_chars, 200);
    assert_eq!(config.remote.api_key, "hf_secret");
    assert_eq!(config.remote.timeout_secs, 30);
    assert_eq!(config.log_level, LogLevel::Debug);
}

/// Test that the default config survives a save and load cycle
#[test]
fn test_config_serialization_shouldUseLowercaseNames() {
    let mut config = Config::default();
    config.summary.style = SummaryStyle::Conclusion;
    config.summary.length = SummaryLength::Long;

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""style":"conclusion""#));
    assert!(json.contains(r#""length":"long""#));

    let empty: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.remote.model, RemoteConfig::default().model);
}

/// Test log level mapping
#[test]
fn test_logLevel_toLevelFilter_shouldMapEachLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}

/// Test that a missing config file is created with defaults
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path)?;
    assert!(path.exists());
    assert_eq!(config.remote.model, "facebook/bart-large-cnn");

    // The written file loads back to the same values
    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded.summary.min_chars, config.summary.min_chars);
    assert_eq!(reloaded.remote.endpoint, config.remote.endpoint);
    Ok(())
}

/// Test that an existing file is read rather than replaced
#[test]
fn test_load_or_create_withExistingFile_shouldKeepItsValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"remote": {"api_key": "hf_file", "model": "file/model", "timeout_secs": 12}}"#,
    )?;

    let config = Config::load_or_create(&path)?;
    assert_eq!(config.remote.api_key, "hf_file");
    assert_eq!(config.remote.model, "file/model");
    assert_eq!(config.remote.timeout_secs, 12);
    Ok(())
}

/// Test that a malformed file is reported instead of overwritten
#[test]
fn test_load_or_create_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    let error = Config::load_or_create(&path).unwrap_err();
    assert!(error.to_string().contains("Failed to parse config file"));
    assert_eq!(std::fs::read_to_string(&path)?, "{ not json");
    Ok(())
}

/// Test that command line values win over file values, and absent ones leave them alone
#[test]
fn test_apply_overrides_shouldReplaceOnlyGivenValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"remote": {"api_key": "hf_file", "model": "file/model", "timeout_secs": 12}, "log_level": "warn"}"#,
    )?;
    let mut config = Config::load_or_create(&path)?;

    config.apply_overrides(&ConfigOverrides {
        api_key: Some("hf_cli".to_string()),
        model: None,
        timeout_secs: Some(5),
        log_level: Some(LogLevel::Trace),
    });

    assert_eq!(config.remote.api_key, "hf_cli");
    assert_eq!(config.remote.model, "file/model");
    assert_eq!(config.remote.timeout_secs, 5);
    assert_eq!(config.log_level, LogLevel::Trace);

    config.apply_overrides(&ConfigOverrides {
        model: Some("cli/model".to_string()),
        ..ConfigOverrides::default()
    });
    assert_eq!(config.remote.model, "cli/model");
    assert_eq!(config.remote.api_key, "hf_cli");
    assert_eq!(config.remote.timeout_secs, 5);
    Ok(())
}

/// Test that a blank token, such as an empty environment variable, keeps the file token
#[test]
fn test_apply_overrides_withBlankToken_shouldKeepConfiguredToken() {
    let mut config = Config::default();
    config.remote.api_key = "hf_file".to_string();

    config.apply_overrides(&ConfigOverrides {
        api_key: Some("  ".to_string()),
        ..ConfigOverrides::default()
    });
    assert_eq!(config.remote.api_key, "hf_file");
}
