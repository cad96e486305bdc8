/*!
 * # legiscribe - Granicus caption converter
 *
 * A Rust library for turning Granicus closed-caption JSON into standard
 * subtitle and chapter files.
 *
 * ## Features
 *
 * - Schema validation of the Granicus `[[event, ...]]` payload
 * - WebVTT cue escaping of caption text
 * - SubRip output with fragments grouped into non-overlapping cues
 * - WebVTT output with one fixed-length cue per fragment
 * - Chapter markers from agenda (meta) events, as WebVTT or `chapters.txt`
 * - Plain-text transcripts with agenda markers and GUIDs
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `captions`: Caption events, validation and normalization
 * - `timecode`: `HH:MM:SS,mmm` formatting shared by every output
 * - `cues`: SubRip and WebVTT cue coalescing
 * - `chapters`: Chapter boundaries from meta events
 * - `export`: Output formats and rendering
 * - `app_config`: Configuration management
 * - `app_controller`: File and folder conversion
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod captions;
pub mod chapters;
pub mod cues;
pub mod errors;
pub mod export;
pub mod file_utils;
pub mod timecode;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use captions::{CaptionEvent, CaptionSet};
pub use chapters::Chapter;
pub use cues::Cue;
pub use errors::{AppError, CaptionError};
pub use export::{ExportFormat, ExportOptions};
pub use timecode::format_timecode;
