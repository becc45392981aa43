//! Pipeline Commands - API for presentation code
//!
//! Free functions over one process-wide predictor. Generation and scoring
//! never fail; anything touching the model returns `PredictorError` once
//! the artifact has failed to load.

use std::path::Path;
use std::time::Duration;

use once_cell::sync::OnceCell;

use super::engine_status::PipelineStatus;
use crate::constants::APP_VERSION;
use crate::logic::config::PipelineConfig;
use crate::logic::dataset::{self, DatasetError, DatasetFormat, PatientRecord};
use crate::logic::features::LayoutInfo;
use crate::logic::model::{FeatureImportance, ModelInfo, PredictorError, RiskPredictor};
use crate::logic::risk::{self, RiskAssessment, RiskStatus};
use crate::logic::vitals::{self, RiskLevel, VitalSnapshot};

// ============================================================================
// SHARED PREDICTOR
// ============================================================================

static PREDICTOR: OnceCell<RiskPredictor> = OnceCell::new();

/// Point the shared predictor at `config`'s artifact.
/// Returns false if a predictor was already in place (first one wins).
pub fn init(config: &PipelineConfig) -> bool {
    init_with_predictor(RiskPredictor::from_config(config))
}

/// Install a ready-made predictor, e.g. one built with `from_regressor`
pub fn init_with_predictor(predictor: RiskPredictor) -> bool {
    match PREDICTOR.set(predictor) {
        Ok(()) => true,
        Err(_) => {
            log::warn!("Predictor already initialized, keeping the existing one");
            false
        }
    }
}

/// Shared predictor; configured from the environment if `init` was never called
pub fn predictor() -> &'static RiskPredictor {
    PREDICTOR.get_or_init(|| RiskPredictor::from_config(&PipelineConfig::from_env()))
}

// ============================================================================
// GENERATION
// ============================================================================

/// One fresh snapshot stamped now
pub fn snapshot(risk_level: RiskLevel, patient_id: u64) -> VitalSnapshot {
    vitals::snapshot(&mut rand::thread_rng(), risk_level, patient_id)
}

/// `n` snapshots for the default patient, `interval` apart, ending now
pub fn series(n: usize, interval: Duration, risk_level: RiskLevel) -> Vec<VitalSnapshot> {
    vitals::series(&mut rand::thread_rng(), n, interval, risk_level)
}

// ============================================================================
// SCORING
// ============================================================================

pub fn predict(
    heart_rate: f64,
    oxygen_level: f64,
    temperature: f64,
    blood_pressure: f64,
    respiratory_rate: f64,
) -> Result<RiskAssessment, PredictorError> {
    predictor().predict(
        heart_rate,
        oxygen_level,
        temperature,
        blood_pressure,
        respiratory_rate,
    )
}

pub fn classify(score: f64) -> RiskStatus {
    risk::classify(score)
}

// ============================================================================
// DATASET
// ============================================================================

pub fn build(n_patients: usize, seed: u64) -> Vec<PatientRecord> {
    dataset::build(n_patients, seed)
}

pub fn export_dataset(
    path: &Path,
    records: &[PatientRecord],
    format: DatasetFormat,
) -> Result<usize, DatasetError> {
    dataset::write_dataset(path, records, format)
}

pub fn load_dataset(path: &Path, format: DatasetFormat) -> Result<Vec<PatientRecord>, DatasetError> {
    dataset::read_dataset(path, format)
}

// ============================================================================
// MODEL INSIGHTS
// ============================================================================

pub fn get_feature_importances() -> Result<Vec<FeatureImportance>, PredictorError> {
    predictor().feature_importances()
}

pub fn get_model_info() -> Result<ModelInfo, PredictorError> {
    predictor().model_info()
}

/// Layout and predictor state; does not trigger a model load
pub fn get_pipeline_status() -> PipelineStatus {
    let layout = LayoutInfo::current();
    let model = PREDICTOR.get().map(RiskPredictor::status);

    PipelineStatus {
        app_version: APP_VERSION.to_string(),
        feature_version: layout.version,
        layout_hash: layout.hash,
        feature_count: layout.feature_count,
        feature_names: layout.feature_names,
        model,
    }
}
