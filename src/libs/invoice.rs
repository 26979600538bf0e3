//! Invoice numbering and billing arithmetic.
//!
//! Invoice numbers carry the issuing period as a `YYYYMM` prefix followed
//! by a 4-digit sequence (`"2024010008"`). The sequence is derived from the
//! previous number's last four characters with a permissive parse-or-zero
//! policy, so a malformed predecessor restarts the sequence at 1 instead of
//! failing.
//!
//! The reference date is an injected parameter rather than a system-clock
//! read; command call sites pass `Local::now().date_naive()`.
//!
//! Known gap, preserved deliberately: the previous number's embedded period
//! is not compared against `today`, so the first invoice after a month
//! rollover continues the old sequence instead of restarting at 0001.
//! Resetting at a period boundary is the caller's responsibility.

use chrono::{Datelike, NaiveDate};

/// Suffix appended to an invoice number to mark it as returned/replaced.
const RETURN_SUFFIX: char = 'W';

/// Generates the next invoice number for the current period.
///
/// With no prior number the sequence starts at 1. Otherwise the last four
/// characters of `last` are parsed as the sequence (non-numeric or shorter
/// suffixes parse to 0), incremented, and re-padded to four digits.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use washlog::libs::invoice::next_invoice_number;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert_eq!(next_invoice_number(today, None), "2024010001");
/// assert_eq!(next_invoice_number(today, Some("2024010007")), "2024010008");
/// ```
pub fn next_invoice_number(today: NaiveDate, last: Option<&str>) -> String {
    let prefix = format!("{}{:02}", today.year(), today.month());

    let sequence = match last {
        None => 1,
        Some(number) => last_four(number).parse::<u32>().unwrap_or(0) + 1,
    };

    format!("{}{:04}", prefix, sequence)
}

/// Derives the return code that marks an invoice as returned/replaced.
///
/// Pure suffixing; applying it to a code that already ends in the return
/// suffix is out of scope for callers.
pub fn return_code(original: &str) -> String {
    format!("{}{}", original, RETURN_SUFFIX)
}

/// Whether a stored invoice number is a return code.
pub fn is_return_code(number: &str) -> bool {
    number.ends_with(RETURN_SUFFIX)
}

/// Tax amount for a subtotal at the given percentage rate.
pub fn calculate_tax(subtotal: f64, rate: f64) -> f64 {
    subtotal * rate / 100.0
}

/// Invoice total: subtotal minus discount plus tax.
pub fn calculate_total(subtotal: f64, tax: f64, discount: f64) -> f64 {
    subtotal - discount + tax
}

/// Last four characters of a string (the whole string when shorter),
/// counted in characters rather than bytes.
fn last_four(s: &str) -> String {
    let count = s.chars().count();
    s.chars().skip(count.saturating_sub(4)).collect()
}
