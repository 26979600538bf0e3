//! Duration formatting for user-facing output.
//!
//! Converts minute counts into the phrasing used across reports and status
//! messages: plain minutes below one hour, hours plus a minute remainder
//! above it.
//!
//! ## Format Specification
//!
//! - below 60 minutes → `"{rounded} minute(s)"`
//! - 60 minutes and up → `"{hours} hour(s)"`, with
//!   `" and {remainder} minute(s)"` appended when the remainder is non-zero
//!
//! Negative input is passed through the minutes branch unclamped
//! (`"-5 minute(s)"`); callers that want a floor apply it before formatting.
//! This mirrors how the compliance engine treats negative durations:
//! propagate, never reject.

/// Formats a fractional minute count as a human-readable duration.
///
/// # Examples
///
/// ```
/// use washlog::libs::formatter::format_minutes;
///
/// assert_eq!(format_minutes(45.0), "45 minute(s)");
/// assert_eq!(format_minutes(90.0), "1 hour(s) and 30 minute(s)");
/// assert_eq!(format_minutes(120.0), "2 hour(s)");
/// ```
pub fn format_minutes(minutes: f64) -> String {
    if minutes < 60.0 {
        return format!("{} minute(s)", minutes.round() as i64);
    }

    let hours = (minutes / 60.0).floor() as i64;
    let remainder = minutes.round() as i64 % 60;

    if remainder == 0 {
        format!("{} hour(s)", hours)
    } else {
        format!("{} hour(s) and {} minute(s)", hours, remainder)
    }
}
