//! Model Module - Predictive Model Adapter
//!
//! Wraps a pre-trained regressor behind a lazily loaded, shared predictor.
//! Training happens elsewhere; this module only loads, validates and
//! queries the serialized artifact.

pub mod artifact;
pub mod forest;
pub mod inference;
pub mod regressor;

// Re-export common types
pub use artifact::{load_model, save_model, sha256_hex, ModelArtifact, ModelError};
pub use forest::{RegressionTree, TreeEnsemble, TreeError, TreeNode};
pub use inference::{PredictorError, PredictorStatus, RiskPredictor};
pub use regressor::{FeatureImportance, Hyperparameters, ModelInfo, Regressor};
