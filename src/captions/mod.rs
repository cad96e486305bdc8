/*!
 * Caption model for Granicus closed-caption payloads.
 *
 * A Granicus payload is a flat, time-ordered list of events. Text events are
 * caption fragments; meta events mark agenda items and become chapters.
 *
 * - `validator`: schema checks on the decoded JSON value
 * - `normalizer`: cue payload escaping and title cleanup
 */

pub mod normalizer;
pub mod validator;

use log::info;
use serde::Serialize;
use serde_json::Value;

use crate::chapters::{self, Chapter};
use crate::cues::{self, Cue};
use crate::errors::CaptionError;

/// One entry of the caption stream
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CaptionEvent {
    /// Spoken caption fragment
    Text {
        time: f64,
        text: String,
    },
    /// Agenda marker that opens a chapter
    Meta {
        time: f64,
        text: String,
        title: String,
        guid: String,
    },
}

impl CaptionEvent {
    /// Offset of the event in seconds
    pub fn time(&self) -> f64 {
        match self {
            Self::Text { time, .. } | Self::Meta { time, .. } => *time,
        }
    }

    /// Free text carried by the event
    pub fn text(&self) -> &str {
        match self {
            Self::Text { text, .. } | Self::Meta { text, .. } => text,
        }
    }

    // @transforms: Escapes text and title in place
    fn normalize(&mut self) {
        match self {
            Self::Text { text, .. } => {
                *text = normalizer::escape_cue_text(text);
            }
            Self::Meta { text, title, .. } => {
                *text = normalizer::escape_cue_text(text);
                *title = normalizer::escape_cue_text(title);
            }
        }
    }
}

/// Validated and normalized caption events of one recording
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptionSet {
    events: Vec<CaptionEvent>,
}

impl CaptionSet {
    /// Decode, validate and normalize a raw payload string
    pub fn from_json_str(raw: &str) -> Result<Self, CaptionError> {
        let payload: Value = serde_json::from_str(raw)?;
        Self::from_value(&payload)
    }

    /// Validate and normalize an already decoded payload
    pub fn from_value(payload: &Value) -> Result<Self, CaptionError> {
        info!("Validating JSON...");
        let events = validator::validate_payload(payload)?;
        Ok(Self::from_events(events))
    }

    /// Build a set from events, escaping their free text
    pub fn from_events(mut events: Vec<CaptionEvent>) -> Self {
        for event in events.iter_mut() {
            event.normalize();
        }
        CaptionSet { events }
    }

    /// Events in input order
    pub fn events(&self) -> &[CaptionEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Time of the final event, the end of the recording as far as captions know
    pub fn last_time(&self) -> Option<f64> {
        self.events.last().map(CaptionEvent::time)
    }

    /// Grouped, non-overlapping cues for SubRip
    pub fn srt_cues(&self, ttl: f64) -> Vec<Cue> {
        cues::coalesce_srt(&self.events, ttl)
    }

    /// One fixed-length cue per fragment for WebVTT
    pub fn vtt_cues(&self, ttl: f64) -> Vec<Cue> {
        cues::coalesce_vtt(&self.events, ttl)
    }

    /// Chapters derived from meta events
    pub fn chapters(&self) -> Vec<Chapter> {
        chapters::extract_chapters(&self.events)
    }
}
