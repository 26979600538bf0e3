#[cfg(test)]
mod tests {
    use washlog::libs::formatter::format_minutes;

    #[test]
    fn test_format_minutes_under_an_hour() {
        assert_eq!(format_minutes(45.0), "45 minute(s)");
        assert_eq!(format_minutes(0.0), "0 minute(s)");
        assert_eq!(format_minutes(1.0), "1 minute(s)");
    }

    #[test]
    fn test_format_minutes_rounds_fractional_input() {
        assert_eq!(format_minutes(44.4), "44 minute(s)");
        assert_eq!(format_minutes(44.6), "45 minute(s)");
        // 59.6 is still under the hour threshold but rounds up to 60.
        assert_eq!(format_minutes(59.6), "60 minute(s)");
    }

    #[test]
    fn test_format_minutes_exact_hours() {
        assert_eq!(format_minutes(60.0), "1 hour(s)");
        assert_eq!(format_minutes(120.0), "2 hour(s)");
    }

    #[test]
    fn test_format_minutes_hours_and_remainder() {
        assert_eq!(format_minutes(90.0), "1 hour(s) and 30 minute(s)");
        assert_eq!(format_minutes(61.0), "1 hour(s) and 1 minute(s)");
        assert_eq!(format_minutes(125.5), "2 hour(s) and 6 minute(s)");
    }

    #[test]
    fn test_format_minutes_negative_passthrough() {
        // Negative input is not clamped; callers floor it when they need to.
        assert_eq!(format_minutes(-5.0), "-5 minute(s)");
    }
}
