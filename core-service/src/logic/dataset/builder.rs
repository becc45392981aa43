//! Dataset Builder
//!
//! Uniform synthetic vitals labelled with the ground-truth scorer. Output
//! depends only on `(n_patients, seed)`.

use ndarray::{Array1, Array2};

use super::record::PatientRecord;
use crate::logic::features::FEATURE_COUNT;
use crate::logic::risk::score_vitals;
use crate::logic::vitals::{uniform_batch, VitalSigns};

/// Generate `n_patients` labelled rows from `seed`
pub fn build(n_patients: usize, seed: u64) -> Vec<PatientRecord> {
    let records: Vec<PatientRecord> = uniform_batch(n_patients, seed)
        .into_iter()
        .map(|row| {
            let vitals = VitalSigns::from_array(row);
            PatientRecord::from_vitals(&vitals, score_vitals(&vitals))
        })
        .collect();

    log::debug!("Built dataset: {} records (seed {})", records.len(), seed);
    records
}

/// n x 5 feature matrix in layout order
pub fn feature_matrix(records: &[PatientRecord]) -> Array2<f64> {
    let rows: Vec<[f64; FEATURE_COUNT]> = records.iter().map(PatientRecord::features).collect();
    Array2::from_shape_fn((rows.len(), FEATURE_COUNT), |(i, j)| rows[i][j])
}

/// Label column
pub fn targets(records: &[PatientRecord]) -> Array1<f64> {
    records.iter().map(|r| r.risk_score).collect()
}
