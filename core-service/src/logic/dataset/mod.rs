//! Dataset Module - Labelled Training Data
//!
//! Builds the synthetic training set consumed by the external trainer and
//! owns its on-disk format. Column names and order are a compatibility
//! contract: the five features in layout order, then `risk_score`.

pub mod builder;
pub mod reader;
pub mod record;
pub mod writer;


use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::logic::features::{FEATURE_COUNT, FEATURE_LAYOUT, TARGET_COLUMN};

pub use builder::{build, feature_matrix, targets};
pub use reader::read_dataset;
pub use record::PatientRecord;
pub use writer::write_dataset;

/// Features plus label
pub const COLUMN_COUNT: usize = FEATURE_COUNT + 1;

// ============================================================================
// FORMAT
// ============================================================================

/// Supported dataset file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    /// Header row + one comma-separated row per patient (default)
    #[default]
    Csv,
    /// One JSON object per line
    Jsonl,
}

impl DatasetFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetFormat::Csv => "csv",
            DatasetFormat::Jsonl => "jsonl",
        }
    }

    /// `.jsonl` / `.json` → Jsonl, anything else → Csv
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("json") => {
                DatasetFormat::Jsonl
            }
            _ => DatasetFormat::Csv,
        }
    }
}

/// `heart_rate,oxygen_level,temperature,blood_pressure,respiratory_rate,risk_score`
pub fn csv_header() -> String {
    let mut columns: Vec<&str> = FEATURE_LAYOUT.to_vec();
    columns.push(TARGET_COLUMN);
    columns.join(",")
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected header: expected {expected:?}, found {found:?}")]
    Header { expected: String, found: String },

    #[error("Malformed row at line {line}: {reason}")]
    Row { line: usize, reason: String },
}
