/*!
 * Plain-text outputs: `chapters.txt` for muxers and a readable transcript.
 */

use std::fmt::Write;

use crate::captions::CaptionEvent;
use crate::captions::normalizer::collapse_title;
use crate::chapters::Chapter;
use crate::timecode::{SRT_SEPARATOR, VTT_SEPARATOR, format_timecode};

/// One `HH:MM:SS,mmm Title` line per chapter, the layout MP4Box `-chap` reads
pub fn render_chapters_txt(chapters: &[Chapter]) -> String {
    let mut output = String::new();

    for chapter in chapters {
        let _ = writeln!(output, "{} {}", format_timecode(chapter.start, SRT_SEPARATOR), chapter.title);
    }

    output
}

/// Timestamped transcript of every event.
///
/// Meta events expand to three lines (title, text, GUID) so agenda markers
/// stand out in the running text.
pub fn render_transcript(events: &[CaptionEvent]) -> String {
    let mut output = String::new();

    for event in events {
        let stamp = format_timecode(event.time(), VTT_SEPARATOR);
        match event {
            CaptionEvent::Meta { text, title, guid, .. } => {
                let _ = writeln!(output, "{} {}", stamp, collapse_title(title));
                let _ = writeln!(output, "{} {}", stamp, text);
                let _ = writeln!(output, "{} GUID:{}", stamp, guid);
            }
            CaptionEvent::Text { text, .. } => {
                let _ = writeln!(output, "{} {}", stamp, text);
            }
        }
    }

    output
}
