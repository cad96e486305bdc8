/*!
 * Chapter extraction from meta events.
 *
 * Each meta event opens a chapter that runs until the next meta event. The
 * last chapter runs to the final event of the whole recording, not to the
 * last marker, so the tail of the meeting stays navigable.
 */

use log::debug;

use crate::captions::CaptionEvent;
use crate::captions::normalizer::collapse_title;

/// A named, navigable time range
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub start: f64,
    pub end: f64,
    pub title: String,
}

/// Derive ordered chapters from the meta events of a caption stream
pub fn extract_chapters(events: &[CaptionEvent]) -> Vec<Chapter> {
    let markers: Vec<(f64, String)> = events
        .iter()
        .filter_map(|event| match event {
            CaptionEvent::Meta { time, title, .. } => Some((*time, collapse_title(title))),
            CaptionEvent::Text { .. } => None,
        })
        .collect();

    let recording_end = events.last().map(CaptionEvent::time).unwrap_or_default();

    let chapters: Vec<Chapter> = markers
        .iter()
        .enumerate()
        .map(|(idx, (start, title))| {
            let end = match markers.get(idx + 1) {
                Some((next_start, _)) => *next_start,
                None => recording_end.max(*start),
            };
            Chapter {
                start: *start,
                end,
                title: title.clone(),
            }
        })
        .collect();

    debug!("Extracted {} chapters", chapters.len());
    chapters
}
