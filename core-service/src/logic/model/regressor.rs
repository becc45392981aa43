//! Regressor Capability
//!
//! The predictor only depends on this trait. Any model that maps the five
//! vitals to a scalar and can describe itself is substitutable: tree
//! ensembles, boosted trees, linear models, test doubles.

use serde::{Deserialize, Serialize};

use crate::logic::features::FEATURE_COUNT;

// ============================================================================
// REGRESSOR TRAIT
// ============================================================================

pub trait Regressor: Send + Sync {
    /// Raw estimate for one feature vector (layout order). May leave [0, 1].
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64;

    /// Relative importances aligned to `FEATURE_LAYOUT`
    fn feature_importances(&self) -> [f64; FEATURE_COUNT];

    fn hyperparameters(&self) -> Hyperparameters;

    /// Human-readable model family, e.g. "RandomForestRegressor"
    fn model_type(&self) -> &str;
}

// ============================================================================
// INTROSPECTION TYPES
// ============================================================================

/// Training-time settings, reported for display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hyperparameters {
    /// Ensemble size
    pub n_estimators: u32,
    /// Depth bound; `None` = unlimited
    pub max_depth: Option<u32>,
    /// Training seed
    pub random_state: Option<u64>,
}

/// Model metadata for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(rename = "type")]
    pub model_type: String,
    pub n_estimators: u32,
    pub max_depth: Option<u32>,
    pub random_state: Option<u64>,
}

impl ModelInfo {
    pub fn from_regressor(model: &dyn Regressor) -> Self {
        let params = model.hyperparameters();
        Self {
            model_type: model.model_type().to_string(),
            n_estimators: params.n_estimators,
            max_depth: params.max_depth,
            random_state: params.random_state,
        }
    }
}

/// One row of the importance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}
