/*!
 * Cue coalescing for SubRip and WebVTT output.
 *
 * Granicus text events are fragments with a start time and no duration.
 * WebVTT can show overlapping cues, so every fragment gets its own cue.
 * SubRip shows one cue at a time, so fragments are grouped: a group opens at
 * its first fragment and absorbs every following fragment that arrives within
 * `ttl` seconds of that opening time.
 *
 * Every text event takes part in the timing, blank or not. Blank lines never
 * reach a payload because a blank line ends an SRT or VTT cue block, so a
 * blank event can open or extend a group without adding a line. A group that
 * ends up with no lines is not emitted.
 */

use log::debug;

use crate::captions::CaptionEvent;

/// Default on-screen time for a cue in seconds
pub const DEFAULT_TTL_SECS: f64 = 3.0;

/// A timed block of caption lines
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    // @field: Start in seconds
    pub start: f64,

    // @field: End in seconds
    pub end: f64,

    // @field: Lines shown together
    pub lines: Vec<String>,
}

impl Cue {
    /// Lines joined for a cue payload
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// SubRip group still accepting fragments
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCue {
    start: f64,
    lines: Vec<String>,
}

impl PendingCue {
    fn open(time: f64, text: &str) -> Self {
        PendingCue {
            start: time,
            lines: payload_lines(text),
        }
    }

    // None when every fragment in the group was blank
    fn finish(self, ttl: f64) -> Option<Cue> {
        if self.lines.is_empty() {
            return None;
        }
        Some(Cue {
            start: self.start,
            end: self.start + ttl,
            lines: self.lines,
        })
    }
}

/// Fold one fragment into the pending SubRip group.
///
/// Returns the new pending group and, when the fragment lands more than
/// `ttl` seconds after the group opened, the finished previous group.
/// A blank fragment still opens or extends a group but adds no line.
pub fn fold_srt_fragment(
    pending: Option<PendingCue>,
    time: f64,
    text: &str,
    ttl: f64,
) -> (Option<PendingCue>, Option<Cue>) {
    match pending {
        None => (Some(PendingCue::open(time, text)), None),
        Some(group) if time - group.start > ttl => {
            (Some(PendingCue::open(time, text)), group.finish(ttl))
        }
        Some(mut group) => {
            group.lines.extend(payload_lines(text));
            (Some(group), None)
        }
    }
}

/// Group text fragments into non-overlapping SubRip cues of length `ttl`
pub fn coalesce_srt(events: &[CaptionEvent], ttl: f64) -> Vec<Cue> {
    let mut cues = Vec::new();
    let mut pending = None;

    for (time, text) in fragments(events) {
        let (next, finished) = fold_srt_fragment(pending, time, text, ttl);
        pending = next;
        cues.extend(finished);
    }

    // The last group has no later fragment to close it
    cues.extend(pending.and_then(|group| group.finish(ttl)));

    debug!("Coalesced {} SRT cues (ttl {}s)", cues.len(), ttl);
    cues
}

/// One cue of length `ttl` per text fragment, blank fragments included
pub fn coalesce_vtt(events: &[CaptionEvent], ttl: f64) -> Vec<Cue> {
    let cues: Vec<Cue> = fragments(events)
        .map(|(time, text)| Cue {
            start: time,
            end: time + ttl,
            lines: payload_lines(text),
        })
        .collect();

    debug!("Built {} VTT cues (ttl {}s)", cues.len(), ttl);
    cues
}

fn fragments(events: &[CaptionEvent]) -> impl Iterator<Item = (f64, &str)> {
    events.iter().filter_map(|event| match event {
        CaptionEvent::Text { time, text } => Some((*time, text.as_str())),
        CaptionEvent::Meta { .. } => None,
    })
}

// Non-blank lines of a fragment
fn payload_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}
