//! Timecode rendering for the two subtitle export formats.
//!
//! Both functions truncate the fractional remainder rather than rounding,
//! so a cue ending at 1.9996s renders as 1.999 / 1.99 and never spills
//! into the next whole second.

/// Clamp of the shared input contract: negative and non-finite values
/// behave as zero.
fn clamp_seconds(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

/// Render seconds as `HH:MM:SS,mmm` (time-coded export format).
///
/// Hours grow unbounded but are padded to at least two digits;
/// milliseconds are truncated, not rounded.
pub fn subtitle_time(seconds: f64) -> String {
    let s = clamp_seconds(seconds);
    let hours = (s / 3600.0).floor() as u64;
    let minutes = ((s % 3600.0) / 60.0).floor() as u64;
    let secs = (s % 60.0).floor() as u64;
    let millis = ((s - s.floor()) * 1000.0).floor() as u64;
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}

/// Render seconds as `H:MM:SS.cc` (styled export format).
///
/// Hours are unpadded; the fractional part is truncated to centiseconds.
pub fn styled_time(seconds: f64) -> String {
    let s = clamp_seconds(seconds);
    let hours = (s / 3600.0).floor() as u64;
    let minutes = ((s % 3600.0) / 60.0).floor() as u64;
    let secs = (s % 60.0).floor() as u64;
    let centis = ((s - s.floor()) * 100.0).floor() as u64;
    format!("{hours}:{minutes:02}:{secs:02}.{centis:02}")
}
