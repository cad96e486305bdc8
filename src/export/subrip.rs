/*!
 * SubRip (`.srt`) rendering.
 */

use std::fmt::Write;

use crate::cues::Cue;
use crate::timecode::{SRT_SEPARATOR, format_timecode};

/// Render cues as numbered SubRip blocks separated by blank lines
pub fn render_srt(cues: &[Cue]) -> String {
    let mut output = String::new();

    for (idx, cue) in cues.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = write!(
            output,
            "{}\n{} --> {}\n{}\n\n",
            idx + 1,
            format_timecode(cue.start, SRT_SEPARATOR),
            format_timecode(cue.end, SRT_SEPARATOR),
            cue.text()
        );
    }

    output
}
