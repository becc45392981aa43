//! Inference Engine - cached model + risk prediction
//!
//! The model artifact is loaded lazily on first use, exactly once, and the
//! outcome is kept for the life of the predictor. A failed load is fatal:
//! it is reported to every caller and never retried.
//!
//! Inputs are not range-checked; only the output score is clamped.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use super::artifact::load_model;
use super::regressor::{FeatureImportance, ModelInfo, Regressor};
use crate::logic::config::PipelineConfig;
use crate::logic::features::{FeatureVector, FEATURE_COUNT, FEATURE_LAYOUT};
use crate::logic::risk::{assess, RiskAssessment};
use crate::logic::vitals::VitalSigns;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictorError {
    #[error("Model artifact {path} unavailable: {reason}")]
    ModelUnavailable { path: String, reason: String },
}

// ============================================================================
// STATUS
// ============================================================================

/// Engine status for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorStatus {
    pub model_loaded: bool,
    pub model_path: String,
    pub model_type: Option<String>,
    pub inference_count: u64,
    pub avg_latency_us: f64,
}

// ============================================================================
// PREDICTOR
// ============================================================================

type ModelSlot = Result<Box<dyn Regressor>, PredictorError>;

pub struct RiskPredictor {
    model_path: PathBuf,
    expected_sha256: Option<String>,
    model: OnceCell<ModelSlot>,
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
}

impl RiskPredictor {
    /// Predictor that will load `model_path` on first use
    pub fn new(model_path: impl Into<PathBuf>, expected_sha256: Option<String>) -> Self {
        Self {
            model_path: model_path.into(),
            expected_sha256,
            model: OnceCell::new(),
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.model_path.clone(), config.model_sha256.clone())
    }

    /// Predictor around an in-memory model; nothing is read from disk
    pub fn from_regressor(model: impl Regressor + 'static) -> Self {
        let slot: ModelSlot = Ok(Box::new(model));
        Self {
            model_path: PathBuf::from("<memory>"),
            expected_sha256: None,
            model: OnceCell::with_value(slot),
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        }
    }

    /// The cached model, loading it on first call
    pub fn model(&self) -> Result<&dyn Regressor, PredictorError> {
        match self.model.get_or_init(|| self.load()) {
            Ok(model) => Ok(model.as_ref()),
            Err(e) => Err(e.clone()),
        }
    }

    fn load(&self) -> ModelSlot {
        match load_model(&self.model_path, self.expected_sha256.as_deref()) {
            Ok(model) => Ok(Box::new(model)),
            Err(e) => {
                log::error!("Model load failed, predictions unavailable: {}", e);
                Err(PredictorError::ModelUnavailable {
                    path: self.model_path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.model.get(), Some(Ok(_)))
    }

    // ------------------------------------------------------------------------
    // PREDICTION
    // ------------------------------------------------------------------------

    pub fn predict(
        &self,
        heart_rate: f64,
        oxygen_level: f64,
        temperature: f64,
        blood_pressure: f64,
        respiratory_rate: f64,
    ) -> Result<RiskAssessment, PredictorError> {
        self.predict_vitals(&VitalSigns::new(
            heart_rate,
            oxygen_level,
            temperature,
            blood_pressure,
            respiratory_rate,
        ))
    }

    pub fn predict_vitals(&self, vitals: &VitalSigns) -> Result<RiskAssessment, PredictorError> {
        let model = self.model()?;
        let start_time = Instant::now();

        let features = FeatureVector::from_vitals(vitals);
        let raw = model.predict(features.as_array());
        let assessment = assess(clamp_score(raw));

        let elapsed = start_time.elapsed().as_micros() as u64;
        self.latency_sum_us.fetch_add(elapsed, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);

        log::debug!(
            "Prediction raw={:.4} score={:.4} status={} features={}",
            raw,
            assessment.risk_score,
            assessment.status,
            features.to_log_entry()
        );

        Ok(assessment)
    }

    // ------------------------------------------------------------------------
    // INTROSPECTION (display only)
    // ------------------------------------------------------------------------

    /// Importances normalized to sum 1, sorted descending
    pub fn feature_importances(&self) -> Result<Vec<FeatureImportance>, PredictorError> {
        let model = self.model()?;
        Ok(normalize_importances(model.feature_importances()))
    }

    pub fn model_info(&self) -> Result<ModelInfo, PredictorError> {
        let model = self.model()?;
        Ok(ModelInfo::from_regressor(model))
    }

    pub fn status(&self) -> PredictorStatus {
        let model_type = match self.model.get() {
            Some(Ok(model)) => Some(model.model_type().to_string()),
            _ => None,
        };

        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        let avg = if count > 0 { sum as f64 / count as f64 } else { 0.0 };

        PredictorStatus {
            model_loaded: model_type.is_some(),
            model_path: self.model_path.display().to_string(),
            model_type,
            inference_count: count,
            avg_latency_us: avg,
        }
    }
}

impl std::fmt::Debug for RiskPredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskPredictor")
            .field("model_path", &self.model_path)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Clamp a raw model output into [0, 1]; NaN is scored as 1.0
pub fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        log::warn!("Model returned NaN, scoring as 1.0");
        return 1.0;
    }
    raw.clamp(0.0, 1.0)
}

/// Pair raw importances with layout names, normalize, sort descending.
/// Non-finite or negative weights count as zero; all-zero becomes uniform.
pub fn normalize_importances(raw: [f64; FEATURE_COUNT]) -> Vec<FeatureImportance> {
    let weights = raw.map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 });
    let total: f64 = weights.iter().sum();

    let mut rows: Vec<FeatureImportance> = FEATURE_LAYOUT
        .iter()
        .zip(weights.iter())
        .map(|(name, w)| FeatureImportance {
            feature: name.to_string(),
            importance: if total > 0.0 { w / total } else { 1.0 / FEATURE_COUNT as f64 },
        })
        .collect();

    rows.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::model::artifact::save_model;
    use crate::logic::model::forest::{RegressionTree, TreeEnsemble, TreeNode};
    use crate::logic::model::regressor::Hyperparameters;
    use crate::logic::risk::RiskStatus;
    use std::sync::Arc;
    use tempfile::tempdir;

    /// Always returns the same raw value
    struct Fixed(f64);

    impl Regressor for Fixed {
        fn predict(&self, _features: &[f64; FEATURE_COUNT]) -> f64 {
            self.0
        }

        fn feature_importances(&self) -> [f64; FEATURE_COUNT] {
            [0.1, 0.4, 0.0, 0.3, 0.2]
        }

        fn hyperparameters(&self) -> Hyperparameters {
            Hyperparameters {
                n_estimators: 1,
                max_depth: None,
                random_state: None,
            }
        }

        fn model_type(&self) -> &str {
            "Fixed"
        }
    }

    fn forest() -> TreeEnsemble {
        TreeEnsemble::new(
            "RandomForestRegressor",
            Hyperparameters {
                n_estimators: 2,
                max_depth: Some(8),
                random_state: Some(42),
            },
            [0.35, 0.40, 0.05, 0.10, 0.10],
            vec![
                RegressionTree::stump(1, 90.0, 0.8, 0.1),
                RegressionTree::stump(0, 110.0, 0.1, 0.7),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_output_is_clamped() {
        let high = RiskPredictor::from_regressor(Fixed(1.7));
        let a = high.predict(75.0, 97.0, 36.8, 120.0, 16.0).unwrap();
        assert_eq!(a.risk_score, 1.0);
        assert_eq!(a.status, RiskStatus::Critical);

        let low = RiskPredictor::from_regressor(Fixed(-0.3));
        let a = low.predict(75.0, 97.0, 36.8, 120.0, 16.0).unwrap();
        assert_eq!(a.risk_score, 0.0);
        assert_eq!(a.status, RiskStatus::Safe);

        let nan = RiskPredictor::from_regressor(Fixed(f64::NAN));
        let a = nan.predict(75.0, 97.0, 36.8, 120.0, 16.0).unwrap();
        assert_eq!(a.risk_score, 1.0);
        assert_eq!(a.status, RiskStatus::Critical);
    }

    #[test]
    fn test_unvalidated_cyclic_forest_scores_critical() {
        let cyclic = RegressionTree {
            nodes: vec![
                TreeNode::Split { feature: 1, threshold: 200.0, left: 1, right: 1 },
                TreeNode::Split { feature: 0, threshold: 500.0, left: 0, right: 0 },
            ],
        };
        let model = TreeEnsemble {
            model_type: "RandomForestRegressor".to_string(),
            hyperparameters: Hyperparameters {
                n_estimators: 1,
                max_depth: None,
                random_state: None,
            },
            feature_importances: [0.2; FEATURE_COUNT],
            trees: vec![cyclic],
        };

        let p = RiskPredictor::from_regressor(model);
        let a = p.predict(75.0, 97.0, 36.8, 120.0, 16.0).unwrap();
        assert_eq!(a.risk_score, 1.0);
        assert_eq!(a.status, RiskStatus::Critical);
    }

    #[test]
    fn test_status_follows_thresholds() {
        let p = RiskPredictor::from_regressor(Fixed(0.5));
        let a = p.predict(75.0, 97.0, 36.8, 120.0, 16.0).unwrap();
        assert_eq!(a.status, RiskStatus::Warning);
    }

    #[test]
    fn test_inputs_are_not_range_checked() {
        let p = RiskPredictor::from_regressor(forest());
        let a = p.predict(-50.0, 300.0, 0.0, 1e6, -1.0).unwrap();
        assert!((0.0..=1.0).contains(&a.risk_score));
    }

    #[test]
    fn test_importances_normalized_and_sorted() {
        let p = RiskPredictor::from_regressor(Fixed(0.0));
        let rows = p.feature_importances().unwrap();

        assert_eq!(rows.len(), FEATURE_COUNT);
        assert_eq!(rows[0].feature, "oxygen_level");
        assert_eq!(rows[4].feature, "temperature");
        let total: f64 = rows.iter().map(|r| r.importance).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(rows.windows(2).all(|w| w[0].importance >= w[1].importance));
    }

    #[test]
    fn test_all_zero_importances_become_uniform() {
        let rows = normalize_importances([0.0; FEATURE_COUNT]);
        assert!(rows.iter().all(|r| (r.importance - 0.2).abs() < 1e-12));
        // ties keep layout order
        assert_eq!(rows[0].feature, "heart_rate");
    }

    #[test]
    fn test_model_info() {
        let p = RiskPredictor::from_regressor(forest());
        let info = p.model_info().unwrap();

        assert_eq!(info.model_type, "RandomForestRegressor");
        assert_eq!(info.n_estimators, 2);
        assert_eq!(info.max_depth, Some(8));
        assert_eq!(info.random_state, Some(42));
    }

    #[test]
    fn test_loads_artifact_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        let checksum = save_model(&forest(), &path).unwrap();

        let p = RiskPredictor::new(&path, Some(checksum));
        assert!(!p.is_loaded());

        // oxygen 85 -> 0.8, heart rate 120 -> 0.7
        let a = p.predict(120.0, 85.0, 36.8, 120.0, 16.0).unwrap();
        assert!((a.risk_score - 0.75).abs() < 1e-12);
        assert_eq!(a.status, RiskStatus::Critical);

        let status = p.status();
        assert!(status.model_loaded);
        assert_eq!(status.inference_count, 1);
        assert_eq!(status.model_type.as_deref(), Some("RandomForestRegressor"));
    }

    #[test]
    fn test_load_failure_is_cached() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        let p = RiskPredictor::new(&path, None);

        let first = p.predict(75.0, 97.0, 36.8, 120.0, 16.0).unwrap_err();
        assert!(matches!(first, PredictorError::ModelUnavailable { .. }));

        // a valid artifact appearing later is not picked up
        save_model(&forest(), &path).unwrap();
        let second = p.model_info().unwrap_err();
        assert_eq!(first, second);
        assert!(!p.status().model_loaded);
        assert_eq!(p.status().inference_count, 0);
    }

    #[test]
    fn test_checksum_mismatch_is_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        save_model(&forest(), &path).unwrap();

        let p = RiskPredictor::new(&path, Some("ab".repeat(32)));
        assert!(p.feature_importances().is_err());
    }

    #[test]
    fn test_concurrent_first_access() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        save_model(&forest(), &path).unwrap();

        let p = Arc::new(RiskPredictor::new(&path, None));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let p = Arc::clone(&p);
                std::thread::spawn(move || p.predict(80.0, 95.0, 36.8, 120.0, 16.0).unwrap())
            })
            .collect();

        let results: Vec<RiskAssessment> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(p.status().inference_count, 8);
    }
}
