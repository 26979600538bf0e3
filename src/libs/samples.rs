//! Samples input file: observed task intervals grouped by department.
//!
//! The report command consumes a JSON file with one entry per department,
//! each holding the `(start, end)` pairs observed inside whatever reporting
//! window the caller chose. The engine itself makes no assumption about the
//! window; collecting and filtering samples stays with the data source.
//!
//! ## File Format
//!
//! ```json
//! [
//!   {
//!     "department": "Ironing",
//!     "samples": [
//!       { "start": "2025-03-10T09:00:00", "end": "2025-03-10T09:45:00" }
//!     ]
//!   }
//! ]
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// One observed work interval for a department task.
///
/// `end >= start` is expected but not enforced; a reversed interval flows
/// into the compliance average as a negative duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSample {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// All samples observed for a single department within the caller's
/// reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSamples {
    pub department: String,
    pub samples: Vec<TimeSample>,
}

impl DepartmentSamples {
    /// Splits the paired samples into the start/end sequences consumed by
    /// the compliance engine.
    pub fn series(&self) -> (Vec<NaiveDateTime>, Vec<NaiveDateTime>) {
        let starts = self.samples.iter().map(|s| s.start).collect();
        let ends = self.samples.iter().map(|s| s.end).collect();
        (starts, ends)
    }
}

/// Errors raised while loading a samples file.
#[derive(Debug, Error)]
pub enum SamplesError {
    #[error("failed to read samples file '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse samples file '{path}'")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads department samples from a JSON file.
pub fn load_samples(path: &Path) -> Result<Vec<DepartmentSamples>, SamplesError> {
    let contents = fs::read_to_string(path).map_err(|source| SamplesError::Read {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| SamplesError::Parse {
        path: path.display().to_string(),
        source,
    })
}
