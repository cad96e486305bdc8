/*!
 * Integration tests for single-file caption conversion
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use legiscribe::app_config::Config;
use legiscribe::app_controller::{ConversionOutcome, Controller};
use legiscribe::errors::{AppError, CaptionError};
use legiscribe::export::ExportFormat;
use legiscribe::file_utils::FileManager;
use crate::common;

/// Test that a conversion writes all six files with the expected suffixes
#[test]
fn test_run_withMeetingCaptions_shouldWriteEveryFormat() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_meeting_captions(temp_dir.path(), "oakland_2206.json")?;
    let prefix = FileManager::output_prefix(&input, None, None);

    let controller = Controller::with_config(Config::default())?;
    let outcome = controller.run(&input, &prefix, false)?;

    let written = match outcome {
        ConversionOutcome::Written(paths) => paths,
        other => panic!("expected files to be written, got {:?}", other),
    };
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "oakland_2206.json",
            "oakland_2206.srt",
            "oakland_2206.vtt",
            "oakland_2206.chapters.vtt",
            "oakland_2206.chapters.txt",
            "oakland_2206.txt",
        ]
    );
    assert!(written.iter().all(|p| p.parent() == Some(temp_dir.path().join("captions").as_path())));

    let srt = fs::read_to_string(ExportFormat::Srt.output_path(&prefix))?;
    assert!(srt.starts_with("1\n00:00:05,200 --> 00:00:08,200\nGood morning\n\n"));

    let chapters = fs::read_to_string(ExportFormat::ChaptersTxt.output_path(&prefix))?;
    assert_eq!(chapters, "00:00:00,000 Call to Order\n00:01:00,000 Roll\n");

    // The input file is left alone
    assert_eq!(fs::read_to_string(&input)?, common::MEETING_JSON);
    Ok(())
}

/// Test that a malformed payload writes nothing
#[test]
fn test_run_withMissingType_shouldWriteNoFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(
        temp_dir.path(),
        "broken.json",
        r#"[[{"type": "text", "time": 1.0, "text": "ok"}, {"time": 2.0, "text": "no type"}]]"#,
    )?;
    let out_dir = temp_dir.path().join("out");
    let prefix = FileManager::output_prefix(&input, Some(&out_dir), None);

    let controller = Controller::with_config(Config::default())?;
    let error = controller.run(&input, &prefix, false).unwrap_err();

    let app_error = error.downcast_ref::<AppError>().expect("typed conversion error");
    assert!(matches!(app_error, AppError::Caption(CaptionError::Schema { .. })));
    assert!(!out_dir.exists());
    Ok(())
}

/// Test that existing outputs are kept unless forced
#[test]
fn test_run_withExistingOutputs_shouldSkipUnlessForced() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_meeting_captions(temp_dir.path(), "clip.json")?;
    let prefix = temp_dir.path().join("out").join("clip");
    FileManager::write_to_file(ExportFormat::Srt.output_path(&prefix), "stale")?;

    let controller = Controller::with_config(Config::default())?;

    let outcome = controller.run(&input, &prefix, false)?;
    assert_eq!(outcome, ConversionOutcome::Skipped(vec![ExportFormat::Srt.output_path(&prefix)]));
    assert_eq!(fs::read_to_string(ExportFormat::Srt.output_path(&prefix))?, "stale");

    let outcome = controller.run(&input, &prefix, true)?;
    assert!(matches!(outcome, ConversionOutcome::Written(ref paths) if paths.len() == 6));
    assert_ne!(fs::read_to_string(ExportFormat::Srt.output_path(&prefix))?, "stale");
    Ok(())
}

/// Test that a prefix pointing at the input is refused
#[test]
fn test_run_withPrefixOverInput_shouldRefuse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_meeting_captions(temp_dir.path(), "clip.json")?;
    let prefix = temp_dir.path().join("clip");

    let controller = Controller::with_config(Config::default())?;
    assert!(controller.run(&input, &prefix, true).is_err());
    assert_eq!(fs::read_to_string(&input)?, common::MEETING_JSON);
    Ok(())
}

/// Test that a prefix reaching the input through `..` is refused
#[test]
fn test_run_withParentDirPrefixOverInput_shouldRefuse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_meeting_captions(temp_dir.path(), "clip.json")?;
    FileManager::ensure_dir(temp_dir.path().join("sub"))?;

    let controller = Controller::with_config(Config::default())?;

    let prefix = temp_dir.path().join("sub").join("..").join("clip");
    assert!(controller.run(&input, &prefix, true).is_err());

    // `missing` does not exist yet and would be created by the write
    let prefix = temp_dir.path().join("missing").join("..").join("clip");
    assert!(controller.run(&input, &prefix, true).is_err());

    assert_eq!(fs::read_to_string(&input)?, common::MEETING_JSON);
    assert!(!temp_dir.path().join("missing").exists());
    Ok(())
}

// Restores the working directory when dropped
struct CurrentDirGuard(PathBuf);

impl CurrentDirGuard {
    fn enter(dir: &Path) -> Result<Self> {
        let previous = std::env::current_dir()?;
        std::env::set_current_dir(dir)?;
        Ok(Self(previous))
    }
}

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

/// Test that a `./`-relative prefix over a relative input is refused
#[test]
fn test_run_withDotRelativePrefixOverInput_shouldRefuse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(
        temp_dir.path(),
        "clip.json",
        r#"[[{"type": "text", "time": 1.0, "text": "a", "speaker": "x"}]]"#,
    )?;

    let result = {
        let _cwd = CurrentDirGuard::enter(temp_dir.path())?;
        let input = Path::new("clip.json");
        let prefix = FileManager::output_prefix(input, Some(Path::new(".")), None);
        assert_eq!(prefix, PathBuf::from("./clip"));

        let controller = Controller::with_config(Config::default())?;
        controller.run(input, &prefix, true)
    };

    assert!(result.is_err());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("clip.json"))?,
        r#"[[{"type": "text", "time": 1.0, "text": "a", "speaker": "x"}]]"#
    );
    assert_eq!(common::count_files(temp_dir.path()), 1);
    Ok(())
}

/// Test that only configured formats are written
#[test]
fn test_run_withFormatSubset_shouldWriteOnlyThose() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_meeting_captions(temp_dir.path(), "clip.json")?;
    let out_dir = temp_dir.path().join("subset");
    let prefix = FileManager::output_prefix(&input, Some(&out_dir), Some("meeting"));

    let mut config = Config::default();
    config.formats = vec![ExportFormat::Vtt, ExportFormat::VttChapters];
    config.vtt.numbered = false;
    let controller = Controller::with_config(config)?;
    controller.run(&input, &prefix, false)?;

    assert_eq!(common::count_files(&out_dir), 2);
    let vtt = fs::read_to_string(out_dir.join("meeting.vtt"))?;
    assert!(vtt.starts_with("WEBVTT\n\n00:00:05.200 --> 00:00:08.200\n"));
    assert!(out_dir.join("meeting.chapters.vtt").exists());
    Ok(())
}

/// Test that an invalid configuration is rejected up front
#[test]
fn test_with_config_withZeroTtl_shouldFail() {
    let mut config = Config::default();
    config.srt.ttl_secs = 0.0;
    assert!(Controller::with_config(config).is_err());
}

/// Test in-memory conversion without touching the file system
#[test]
fn test_convert_str_withNonJson_shouldReturnJsonError() {
    let controller = Controller::with_config(Config::default()).unwrap();
    assert!(matches!(
        controller.convert_str("<html>502 Bad Gateway</html>"),
        Err(AppError::Caption(CaptionError::Json(_)))
    ));
}
