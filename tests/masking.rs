#[cfg(test)]
mod tests {
    use washlog::libs::mask::{is_valid_saudi_phone, mask_name, mask_phone};

    #[test]
    fn test_mask_phone_hides_middle_digits() {
        assert_eq!(mask_phone("0541234567"), "054 .. .. .. 67");
    }

    #[test]
    fn test_mask_phone_strips_separators_before_checking() {
        assert_eq!(mask_phone("054-123-4567"), "054 .. .. .. 67");
        assert_eq!(mask_phone("054 123 4567"), "054 .. .. .. 67");
    }

    #[test]
    fn test_mask_phone_fails_open_on_short_input() {
        assert_eq!(mask_phone("123"), "123");
        assert_eq!(mask_phone(""), "");
    }

    #[test]
    fn test_mask_phone_fails_open_on_wrong_prefix() {
        // 10 digits but not a Saudi mobile prefix: returned untouched,
        // original formatting included.
        assert_eq!(mask_phone("0112345678"), "0112345678");
        assert_eq!(mask_phone("011-234-5678"), "011-234-5678");
    }

    #[test]
    fn test_is_valid_saudi_phone() {
        assert!(is_valid_saudi_phone("0541234567"));
        assert!(is_valid_saudi_phone("054-123-4567"));
        assert!(!is_valid_saudi_phone("0112345678"));
        assert!(!is_valid_saudi_phone("05412345"));
        assert!(!is_valid_saudi_phone(""));
    }

    #[test]
    fn test_mask_name_arabic() {
        assert_eq!(mask_name("محمد أحمد العلي"), "محمد ... علي");
    }

    #[test]
    fn test_mask_name_single_token_passes_through() {
        assert_eq!(mask_name("Ali"), "Ali");
    }

    #[test]
    fn test_mask_name_empty_input() {
        assert_eq!(mask_name(""), "");
        assert_eq!(mask_name("   "), "");
    }

    #[test]
    fn test_mask_name_two_tokens() {
        assert_eq!(mask_name("Sara Almutairi"), "Sara ... iri");
    }

    #[test]
    fn test_mask_name_short_final_token_kept_whole() {
        assert_eq!(mask_name("Omar Al"), "Omar ... Al");
    }

    #[test]
    fn test_mask_name_collapses_extra_whitespace() {
        assert_eq!(mask_name("  Omar   Alqahtani  "), "Omar ... ani");
    }
}
