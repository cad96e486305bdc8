/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use legiscribe::app_config::{Config, LogLevel};
use legiscribe::errors::AppError;
use legiscribe::export::ExportFormat;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.srt.ttl_secs, 3.0);
    assert_eq!(config.vtt.ttl_secs, 3.0);
    assert!(config.vtt.numbered);
    assert_eq!(config.formats, ExportFormat::ALL.to_vec());
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withBadValues_shouldReturnConfigError() {
    let mut config = Config::default();
    config.srt.ttl_secs = 0.0;
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    let mut config = Config::default();
    config.vtt.ttl_secs = f64::NAN;
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    let mut config = Config::default();
    config.formats.clear();
    assert!(matches!(config.validate(), Err(AppError::Config(_))));
}

/// Test that partial config files fill in defaults
#[test]
fn test_load_or_default_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"srt": {"ttl_secs": 4.5}, "formats": ["srt", "chapters.txt"], "log_level": "debug"}"#,
    )?;

    let config = Config::load_or_default(&path)?;
    assert_eq!(config.srt.ttl_secs, 4.5);
    assert_eq!(config.vtt.ttl_secs, 3.0);
    assert_eq!(config.formats, vec![ExportFormat::Srt, ExportFormat::ChaptersTxt]);
    assert_eq!(config.log_level, LogLevel::Debug);

    let options = config.export_options();
    assert_eq!(options.srt_ttl, 4.5);
    assert!(options.vtt_numbered);
    Ok(())
}

/// Test that a missing config file yields defaults
#[test]
fn test_load_or_default_withMissingFile_shouldUseDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config::load_or_default(temp_dir.path().join("absent.json"))?;
    assert_eq!(config, Config::default());
    Ok(())
}

/// Test that a broken config file is an error
#[test]
fn test_load_or_default_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ nope")?;
    assert!(Config::load_or_default(&path).is_err());
    Ok(())
}

/// Test configuration serialization
#[test]
fn test_config_serialization_withDefaultConfig_shouldRoundTrip() -> Result<()> {
    let config = Config::default();
    let serialized = serde_json::to_string_pretty(&config)?;
    assert!(serialized.contains("\"chapters.vtt\""));

    let deserialized: Config = serde_json::from_str(&serialized)?;
    assert_eq!(deserialized, config);
    Ok(())
}
