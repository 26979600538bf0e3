#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use washlog::libs::invoice::{
        calculate_tax, calculate_total, is_return_code, next_invoice_number, return_code,
    };

    fn jan_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_first_invoice_starts_sequence_at_one() {
        assert_eq!(next_invoice_number(jan_2024(), None), "2024010001");
    }

    #[test]
    fn test_increments_last_four_digits() {
        assert_eq!(next_invoice_number(jan_2024(), Some("2024010007")), "2024010008");
    }

    #[test]
    fn test_sequence_repads_with_leading_zeros() {
        assert_eq!(next_invoice_number(jan_2024(), Some("2024010099")), "2024010100");
    }

    #[test]
    fn test_month_is_zero_padded() {
        let sep = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(next_invoice_number(sep, None), "2025090001");
    }

    #[test]
    fn test_non_numeric_suffix_parses_to_zero() {
        // Parse-or-zero policy: a malformed predecessor restarts at 1.
        assert_eq!(next_invoice_number(jan_2024(), Some("INV-ABCD")), "2024010001");
    }

    #[test]
    fn test_short_previous_number_parses_whole_string() {
        assert_eq!(next_invoice_number(jan_2024(), Some("42")), "2024010043");
    }

    #[test]
    fn test_no_rollover_check_across_periods() {
        // The embedded period of the previous number is not compared against
        // today; the sequence continues after a month boundary.
        let feb = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(next_invoice_number(feb, Some("2024010007")), "2024020008");
    }

    #[test]
    fn test_return_code_appends_suffix() {
        assert_eq!(return_code("INV-001"), "INV-001W");
        assert_eq!(return_code("2024010008"), "2024010008W");
    }

    #[test]
    fn test_is_return_code() {
        assert!(is_return_code("2024010008W"));
        assert!(!is_return_code("2024010008"));
    }

    #[test]
    fn test_tax_and_total_arithmetic() {
        assert_eq!(calculate_tax(200.0, 15.0), 30.0);
        assert_eq!(calculate_total(200.0, 30.0, 20.0), 210.0);
        assert_eq!(calculate_total(200.0, 30.0, 0.0), 230.0);
    }
}
