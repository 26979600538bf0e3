//! Time-compliance engine for department task durations.
//!
//! This module is the computational core of washlog: it converts observed
//! `(start, end)` interval samples for a department into a compliance signal
//! that the report views can render directly.
//!
//! ## Compliance Formula
//!
//! ```text
//! Deviation % = (Average Actual Time - Standard Time) / Standard Time * 100
//!
//! Where:
//! - Average Actual Time = mean of (end - start) across paired samples
//! - Standard Time       = configured expected duration for the department
//! ```
//!
//! ## Classification Thresholds
//!
//! - deviation above 20% → `Critical` (red)
//! - deviation above 10% → `Warning` (yellow)
//! - everything else, including faster-than-standard → `Normal` (green)
//!
//! Classification is applied to the same 2-decimal-rounded percentage that
//! is reported, so the displayed number and the displayed status can never
//! disagree at a boundary value.
//!
//! All functions here are pure and total: degenerate input (no samples,
//! zero or negative standard, mismatched sequence lengths) produces a
//! defined neutral result instead of an error.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deviation percentage above which a department is flagged as `Warning`.
pub const WARNING_THRESHOLD: f64 = 10.0;

/// Deviation percentage above which a department is flagged as `Critical`.
pub const CRITICAL_THRESHOLD: f64 = 20.0;

/// Compliance level for a department's average task duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    /// Average is within 10% of the standard (or below it).
    Normal,
    /// Average exceeds the standard by more than 10%, up to 20%.
    Warning,
    /// Average exceeds the standard by more than 20%.
    Critical,
}

/// Display color associated with a compliance status, consumed by the
/// presentation layer when rendering badges and table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Green,
    Yellow,
    Red,
}

impl ComplianceStatus {
    /// Returns the 1:1 display color for this status.
    pub fn color(&self) -> StatusColor {
        match self {
            ComplianceStatus::Normal => StatusColor::Green,
            ComplianceStatus::Warning => StatusColor::Yellow,
            ComplianceStatus::Critical => StatusColor::Red,
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::Normal => write!(f, "normal"),
            ComplianceStatus::Warning => write!(f, "warning"),
            ComplianceStatus::Critical => write!(f, "critical"),
        }
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusColor::Green => write!(f, "green"),
            StatusColor::Yellow => write!(f, "yellow"),
            StatusColor::Red => write!(f, "red"),
        }
    }
}

/// Result of assessing a department's observed durations against its
/// configured standard.
///
/// A `ComplianceReport` is a pure value computed fresh on every call; the
/// engine never stores or mutates one after returning it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Mean actual duration across samples, rounded to the nearest minute.
    pub average_minutes: i64,
    /// The configured standard duration, echoed unchanged from the input.
    pub standard_minutes: i64,
    /// Percentage deviation from the standard, rounded to 2 decimal places.
    /// Defined as `0.0` when the standard is not positive or when there are
    /// no samples.
    pub deviation_percent: f64,
    /// Compliance classification derived from `deviation_percent`.
    pub status: ComplianceStatus,
    /// Display color, always matching `status`.
    pub color: StatusColor,
}

impl ComplianceReport {
    /// The neutral "no data yet" report: zero average, zero deviation,
    /// `Normal`/`Green`, with the standard echoed through. Never reported
    /// as warning or critical, even for a zero or negative standard.
    fn neutral(standard_minutes: i64) -> Self {
        Self {
            average_minutes: 0,
            standard_minutes,
            deviation_percent: 0.0,
            status: ComplianceStatus::Normal,
            color: StatusColor::Green,
        }
    }
}

/// Assess observed task intervals against a department's standard duration.
///
/// `starts` and `ends` are paired by index; the number of samples used is
/// `min(starts.len(), ends.len())` and unmatched trailing entries in the
/// longer slice are ignored. Per-sample durations are kept as fractional
/// minutes and are not validated: an interval with `end < start` yields a
/// negative duration that flows into the average unchanged.
///
/// This function never fails. Empty input produces the neutral report, and
/// a non-positive `standard_minutes` pins the deviation at `0.0` instead of
/// dividing by zero.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use washlog::libs::compliance::{assess, ComplianceStatus};
///
/// let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let starts = vec![day.and_hms_opt(9, 0, 0).unwrap()];
/// let ends = vec![day.and_hms_opt(9, 45, 0).unwrap()];
///
/// let report = assess(&starts, &ends, 30);
/// assert_eq!(report.average_minutes, 45);
/// assert_eq!(report.status, ComplianceStatus::Critical);
/// ```
pub fn assess(starts: &[NaiveDateTime], ends: &[NaiveDateTime], standard_minutes: i64) -> ComplianceReport {
    if starts.is_empty() || ends.is_empty() {
        return ComplianceReport::neutral(standard_minutes);
    }

    let paired = starts.len().min(ends.len());
    let mut total_minutes = 0.0;
    for i in 0..paired {
        total_minutes += minutes_between(starts[i], ends[i]);
    }
    let average = total_minutes / paired as f64;

    let deviation = if standard_minutes > 0 {
        round2((average - standard_minutes as f64) / standard_minutes as f64 * 100.0)
    } else {
        0.0
    };

    // Classify on the rounded value that gets reported.
    let status = classify(deviation);

    ComplianceReport {
        average_minutes: average.round() as i64,
        standard_minutes,
        deviation_percent: deviation,
        status,
        color: status.color(),
    }
}

/// Maps a deviation percentage onto a compliance status.
pub fn classify(deviation_percent: f64) -> ComplianceStatus {
    if deviation_percent > CRITICAL_THRESHOLD {
        ComplianceStatus::Critical
    } else if deviation_percent > WARNING_THRESHOLD {
        ComplianceStatus::Warning
    } else {
        ComplianceStatus::Normal
    }
}

/// Minutes left before an in-progress task exceeds its standard duration.
///
/// Measured against the supplied `now` rather than a direct clock read, so
/// callers (and tests) control the reference time; production call sites
/// pass `Local::now().naive_local()`. Floors at zero once the standard has
/// been used up.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use washlog::libs::compliance::remaining_minutes;
///
/// let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let start = day.and_hms_opt(9, 0, 0).unwrap();
/// let now = day.and_hms_opt(9, 20, 0).unwrap();
///
/// assert_eq!(remaining_minutes(start, 60, now), 40.0);
/// assert_eq!(remaining_minutes(start, 10, now), 0.0);
/// ```
pub fn remaining_minutes(start: NaiveDateTime, standard_minutes: i64, now: NaiveDateTime) -> f64 {
    let elapsed = minutes_between(start, now);
    (standard_minutes as f64 - elapsed).max(0.0)
}

/// Signed fractional minutes from `start` to `end`.
fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_milliseconds() as f64 / 60_000.0
}

/// Rounds to 2 decimal places, matching the precision of the reported
/// deviation percentage.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
