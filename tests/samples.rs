#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;
    use washlog::libs::samples::{load_samples, SamplesError};

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_samples_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "samples.json",
            r#"[
                {
                    "department": "Ironing",
                    "samples": [
                        { "start": "2025-03-10T09:00:00", "end": "2025-03-10T09:45:00" },
                        { "start": "2025-03-10T10:00:00", "end": "2025-03-10T10:30:00" }
                    ]
                },
                { "department": "Dry Cleaning", "samples": [] }
            ]"#,
        );

        let entries = load_samples(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].department, "Ironing");
        assert_eq!(entries[0].samples.len(), 2);
        assert_eq!(
            entries[0].samples[0].start,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(9, 0, 0).unwrap()
        );
        assert!(entries[1].samples.is_empty());
    }

    #[test]
    fn test_series_splits_pairs_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "samples.json",
            r#"[
                {
                    "department": "Washing",
                    "samples": [
                        { "start": "2025-03-10T09:00:00", "end": "2025-03-10T09:40:00" }
                    ]
                }
            ]"#,
        );

        let entries = load_samples(&path).unwrap();
        let (starts, ends) = entries[0].series();
        assert_eq!(starts.len(), 1);
        assert_eq!(ends.len(), 1);
        assert!(ends[0] > starts[0]);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_samples(&path).unwrap_err();
        assert!(matches!(err, SamplesError::Read { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "samples.json", "{ not json ]");
        let err = load_samples(&path).unwrap_err();
        assert!(matches!(err, SamplesError::Parse { .. }));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "broken.json", "[");
        let err = load_samples(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
