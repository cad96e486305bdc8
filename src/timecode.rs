/*!
 * Timecode formatting shared by every exporter.
 *
 * All exported timestamps go through `format_timecode` so that the same
 * instant renders identically in SRT, WebVTT, chapter and transcript output.
 */

use anyhow::{Result, Context, anyhow};

/// Millisecond separator used by SubRip (`00:00:01,500`)
pub const SRT_SEPARATOR: char = ',';

/// Millisecond separator used by WebVTT (`00:00:01.500`)
pub const VTT_SEPARATOR: char = '.';

/// Format seconds as `HH:MM:SS<sep>mmm`.
///
/// Hours are at least two digits wide and grow as needed. The value is
/// rounded to the nearest millisecond first, so `59.9996` becomes
/// `00:01:00.000` rather than carrying a four-digit millisecond field.
/// Callers must pass a non-negative, finite value.
pub fn format_timecode(seconds: f64, separator: char) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;

    format!("{:02}:{:02}:{:02}{}{:03}", hours, minutes, secs, separator, millis)
}

/// Parse a `HH:MM:SS,mmm` or `HH:MM:SS.mmm` timecode back to seconds
pub fn parse_timecode(timecode: &str) -> Result<f64> {
    let parts: Vec<&str> = timecode.trim().split(&[':', ',', '.'][..]).collect();

    if parts.len() != 4 {
        return Err(anyhow!("Invalid timecode format: {}", timecode));
    }

    let hours: u64 = parts[0].parse().context("Failed to parse hours")?;
    let minutes: u64 = parts[1].parse().context("Failed to parse minutes")?;
    let seconds: u64 = parts[2].parse().context("Failed to parse seconds")?;
    let millis: u64 = parts[3].parse().context("Failed to parse milliseconds")?;

    if minutes >= 60 || seconds >= 60 || millis >= 1000 || parts[3].len() != 3 {
        return Err(anyhow!("Invalid time components in timecode: {}", timecode));
    }

    let total_ms = hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis;
    Ok(total_ms as f64 / 1000.0)
}
