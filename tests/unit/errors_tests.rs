/*!
 * Tests for error types and conversions
 */

use legiscribe::errors::{AppError, CaptionError};

#[test]
fn test_captionError_schema_shouldDisplayPathAndMessage() {
    let error = CaptionError::schema("$[0][2].time", "expected number, found string");
    let display = format!("{}", error);
    assert!(display.contains("Schema error"));
    assert!(display.contains("$[0][2].time"));
    assert!(display.contains("expected number"));
}

#[test]
fn test_captionError_malformed_shouldDisplayIndex() {
    let error = CaptionError::malformed(17, "meta event is missing \"title\"");
    let display = format!("{}", error);
    assert!(display.contains("#17"));
    assert!(display.contains("title"));
}

#[test]
fn test_captionError_fromJsonError_shouldWrapCorrectly() {
    let json_error = serde_json::from_str::<serde_json::Value>("[[").unwrap_err();
    let error: CaptionError = json_error.into();
    assert!(format!("{}", error).contains("Invalid caption JSON"));
}

#[test]
fn test_appError_fromCaptionError_shouldWrapCorrectly() {
    let app_error: AppError = CaptionError::schema("$", "expected array, found object").into();
    let display = format!("{}", app_error);
    assert!(display.contains("Caption error"));
    assert!(display.contains("expected array"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("Permission denied"));
}

#[test]
fn test_appError_fromAnyhow_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(ref message) if message == "something odd"));
}
