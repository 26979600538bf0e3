//! Privacy masking for customer phone numbers and names.
//!
//! These helpers produce the partially hidden forms shown in shared views
//! (cashier screens, exported reports) where the full customer identity
//! should not appear.
//!
//! ## Fail-Open Policy
//!
//! Phone masking only applies to well-formed Saudi mobile numbers: exactly
//! 10 digits after stripping separators, starting with `05`. Anything else
//! is returned unchanged rather than rejected. The masked form keeps the
//! first 3 and last 2 digits visible.
//!
//! Name masking is Unicode-aware; the customer base writes names in Arabic
//! and character-level slicing must not split multi-byte text.

/// Separator inserted in place of the hidden middle digits.
const PHONE_MASK: &str = " .. .. .. ";

/// Masks the middle five digits of a Saudi mobile number.
///
/// Input that is not a valid Saudi mobile number passes through unchanged,
/// original formatting included.
///
/// # Examples
///
/// ```
/// use washlog::libs::mask::mask_phone;
///
/// assert_eq!(mask_phone("0541234567"), "054 .. .. .. 67");
/// assert_eq!(mask_phone("123"), "123");
/// ```
pub fn mask_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 10 || !digits.starts_with("05") {
        return phone.to_string();
    }

    format!("{}{}{}", &digits[..3], PHONE_MASK, &digits[8..])
}

/// Whether the input is a valid Saudi mobile number: 10 digits starting
/// with `05` after stripping non-digit characters.
pub fn is_valid_saudi_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.len() == 10 && digits.starts_with("05")
}

/// Masks a customer name down to the first token and the tail of the last.
///
/// Splits on whitespace. Single-token names pass through unmasked; empty
/// input yields an empty string. For multi-token names the result is
/// `"{first} ... {last 3 chars of the final token}"`, or the whole final
/// token when it has fewer than 3 characters.
///
/// # Examples
///
/// ```
/// use washlog::libs::mask::mask_name;
///
/// assert_eq!(mask_name("محمد أحمد العلي"), "محمد ... علي");
/// assert_eq!(mask_name("Ali"), "Ali");
/// assert_eq!(mask_name(""), "");
/// ```
pub fn mask_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();

    match parts.len() {
        0 => String::new(),
        1 => parts[0].to_string(),
        _ => {
            let first = parts[0];
            let last = parts[parts.len() - 1];
            let tail = last_chars(last, 3);
            format!("{} ... {}", first, tail)
        }
    }
}

/// Last `n` characters of a string, or the whole string when shorter.
fn last_chars(s: &str, n: usize) -> String {
    let count = s.chars().count();
    s.chars().skip(count.saturating_sub(n)).collect()
}
