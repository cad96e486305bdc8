/*!
 * WebVTT rendering for caption cues and chapter tracks.
 */

use std::fmt::Write;

use crate::chapters::Chapter;
use crate::cues::Cue;
use crate::timecode::{VTT_SEPARATOR, format_timecode};

// @const: File signature followed by the mandatory blank line
const WEBVTT_HEADER: &str = "WEBVTT\n\n";

/// Render cues as a WebVTT file, optionally with 1-based cue identifiers.
///
/// A cue without lines keeps its timing line and gets an empty payload.
pub fn render_vtt(cues: &[Cue], numbered: bool) -> String {
    let mut output = String::from(WEBVTT_HEADER);

    for (idx, cue) in cues.iter().enumerate() {
        if numbered {
            let _ = writeln!(output, "{}", idx + 1);
        }
        let _ = writeln!(
            output,
            "{} --> {}",
            format_timecode(cue.start, VTT_SEPARATOR),
            format_timecode(cue.end, VTT_SEPARATOR)
        );
        for line in &cue.lines {
            let _ = writeln!(output, "{}", line);
        }
        output.push('\n');
    }

    output
}

/// Render chapters as a WebVTT chapter track.
///
/// Chapter identifiers start at 0.
pub fn render_vtt_chapters(chapters: &[Chapter]) -> String {
    let mut output = String::from(WEBVTT_HEADER);

    for (idx, chapter) in chapters.iter().enumerate() {
        let _ = write!(
            output,
            "{}\n{} --> {}\n{}\n\n",
            idx,
            format_timecode(chapter.start, VTT_SEPARATOR),
            format_timecode(chapter.end, VTT_SEPARATOR),
            chapter.title
        );
    }

    output
}
