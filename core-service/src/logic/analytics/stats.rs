//! Descriptive statistics over a dataset
//!
//! Conventions follow the usual dataframe `describe()` output: sample
//! standard deviation (n - 1), linearly interpolated quartiles, NaN where a
//! statistic is undefined (empty column, single row, zero variance).

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::logic::dataset::{csv_header, PatientRecord, COLUMN_COUNT};

// ============================================================================
// COLUMN SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

/// All six columns (features then label) as one n x 6 matrix
pub fn dataset_matrix(records: &[PatientRecord]) -> Array2<f64> {
    Array2::from_shape_fn((records.len(), COLUMN_COUNT), |(i, j)| records[i].to_row()[j])
}

pub fn column_names() -> Vec<String> {
    csv_header().split(',').map(str::to_string).collect()
}

/// `describe()` for every column, in file order
pub fn summarize(records: &[PatientRecord]) -> Vec<ColumnSummary> {
    let matrix = dataset_matrix(records);
    column_names()
        .into_iter()
        .zip(matrix.columns())
        .map(|(name, col)| summarize_column(&name, col))
        .collect()
}

pub fn summarize_column(name: &str, values: ArrayView1<f64>) -> ColumnSummary {
    let mut sorted: Vec<f64> = values.iter().copied().collect();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let mean = if count > 0 {
        sorted.iter().sum::<f64>() / count as f64
    } else {
        f64::NAN
    };

    ColumnSummary {
        column: name.to_string(),
        count,
        mean,
        std: sample_std(&sorted, mean),
        min: sorted.first().copied().unwrap_or(f64::NAN),
        p25: quantile(&sorted, 0.25),
        p50: quantile(&sorted, 0.50),
        p75: quantile(&sorted, 0.75),
        max: sorted.last().copied().unwrap_or(f64::NAN),
    }
}

fn sample_std(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Linear-interpolated quantile of an ascending slice
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }

    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

// ============================================================================
// CORRELATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major, `columns.len()` squared
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }
}

/// Pairwise Pearson correlation of all six columns
pub fn correlation_matrix(records: &[PatientRecord]) -> CorrelationMatrix {
    let matrix = dataset_matrix(records);
    let n = matrix.ncols();

    let values = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| pearson(matrix.column(i), matrix.column(j)))
                .collect()
        })
        .collect();

    CorrelationMatrix {
        columns: column_names(),
        values,
    }
}

/// Pearson r; NaN when either side has fewer than two values or no variance
pub fn pearson(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    if a.len() != b.len() || a.len() < 2 {
        return f64::NAN;
    }

    let (Some(mean_a), Some(mean_b)) = (a.mean(), b.mean()) else {
        return f64::NAN;
    };

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    if var_a == 0.0 || var_b == 0.0 {
        return f64::NAN;
    }
    (cov / (var_a.sqrt() * var_b.sqrt())).clamp(-1.0, 1.0)
}
