/*!
 * Exporters for a normalized `CaptionSet`.
 *
 * Every exporter is plain string templating over the set and the cues or
 * chapters derived from it:
 * - `subrip`: grouped `.srt` cues
 * - `webvtt`: `.vtt` cues and `.chapters.vtt` chapter tracks
 * - `plain`: `.chapters.txt` and the `.txt` transcript
 *
 * JSON output is the normalized event list itself. It carries only the
 * fields `CaptionEvent` knows (`type`, `time`, `text`, plus `title` and `guid`
 * on meta events) as a flat array. Other keys present in the Granicus payload,
 * such as speaker tags, are not written back.
 */

pub mod plain;
pub mod subrip;
pub mod webvtt;

use anyhow::{Result, Context, anyhow};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::captions::CaptionSet;
use crate::cues::DEFAULT_TTL_SECS;

/// Output files produced for one recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "srt")]
    Srt,
    #[serde(rename = "vtt")]
    Vtt,
    #[serde(rename = "chapters.vtt")]
    VttChapters,
    #[serde(rename = "chapters.txt")]
    ChaptersTxt,
    #[serde(rename = "txt")]
    Transcript,
}

impl ExportFormat {
    /// Every format, in the order files are written
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::Json,
        ExportFormat::Srt,
        ExportFormat::Vtt,
        ExportFormat::VttChapters,
        ExportFormat::ChaptersTxt,
        ExportFormat::Transcript,
    ];

    // @returns: File suffix appended to the output prefix
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::VttChapters => "chapters.vtt",
            Self::ChaptersTxt => "chapters.txt",
            Self::Transcript => "txt",
        }
    }

    /// Path of this format's file for `prefix`, e.g. `out/clip` -> `out/clip.chapters.vtt`
    pub fn output_path<P: AsRef<Path>>(&self, prefix: P) -> PathBuf {
        let mut path = prefix.as_ref().as_os_str().to_os_string();
        path.push(".");
        path.push(self.suffix());
        PathBuf::from(path)
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().trim_start_matches('.').to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.suffix() == wanted)
            .ok_or_else(|| anyhow!("Invalid export format: {}", s))
    }
}

/// Knobs for cue timing and layout
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// On-screen time of an SRT group
    pub srt_ttl: f64,
    /// On-screen time of each VTT cue
    pub vtt_ttl: f64,
    /// Whether VTT cues get numeric identifiers
    pub vtt_numbered: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            srt_ttl: DEFAULT_TTL_SECS,
            vtt_ttl: DEFAULT_TTL_SECS,
            vtt_numbered: true,
        }
    }
}

/// Render one format to a string
pub fn render(set: &CaptionSet, format: ExportFormat, options: &ExportOptions) -> Result<String> {
    let rendered = match format {
        ExportFormat::Json => {
            info!("Exporting JSON...");
            serde_json::to_string(set.events()).context("Failed to serialize caption events")?
        }
        ExportFormat::Srt => {
            info!("Exporting SRT...");
            subrip::render_srt(&set.srt_cues(options.srt_ttl))
        }
        ExportFormat::Vtt => {
            info!("Exporting WebVTT...");
            webvtt::render_vtt(&set.vtt_cues(options.vtt_ttl), options.vtt_numbered)
        }
        ExportFormat::VttChapters => {
            info!("Exporting chapters.vtt...");
            webvtt::render_vtt_chapters(&set.chapters())
        }
        ExportFormat::ChaptersTxt => {
            info!("Exporting chapters.txt...");
            plain::render_chapters_txt(&set.chapters())
        }
        ExportFormat::Transcript => {
            info!("Exporting text transcription...");
            plain::render_transcript(set.events())
        }
    };

    Ok(rendered)
}

/// Render several formats up front so nothing is written if one fails
pub fn render_all(
    set: &CaptionSet,
    formats: &[ExportFormat],
    options: &ExportOptions,
) -> Result<Vec<(ExportFormat, String)>> {
    formats
        .iter()
        .map(|format| render(set, *format, options).map(|content| (*format, content)))
        .collect()
}
