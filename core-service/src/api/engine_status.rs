use serde::{Deserialize, Serialize};

use crate::logic::model::PredictorStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineStatus {
    pub app_version: String,

    pub feature_version: u8,
    pub layout_hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,

    /// None until the shared predictor exists
    pub model: Option<PredictorStatus>,
}
