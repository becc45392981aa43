//! Pipeline configuration
//!
//! One struct gathering every tunable the pipeline reads. Defaults and
//! environment variable names live in `crate::constants`.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::logic::dataset::DatasetFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Serialized model artifact
    pub model_path: PathBuf,

    /// Pinned SHA-256 of the artifact (hex), if any
    pub model_sha256: Option<String>,

    /// Where the generated dataset is written
    pub dataset_path: PathBuf,

    /// Patients in the generated dataset
    pub dataset_size: usize,

    /// Dataset seed
    pub dataset_seed: u64,

    /// Live monitor window length
    pub buffer_size: usize,

    /// Time between live ticks
    pub refresh_interval: Duration,

    /// Ticks per tier run by the driver
    pub sim_ticks: usize,
}

impl PipelineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            model_path: constants::get_model_path(),
            model_sha256: constants::get_model_checksum(),
            dataset_path: constants::get_dataset_path(),
            dataset_size: constants::get_dataset_size(),
            dataset_seed: constants::get_dataset_seed(),
            buffer_size: constants::get_buffer_size(),
            refresh_interval: Duration::from_secs(constants::get_refresh_interval_secs()),
            sim_ticks: constants::get_sim_ticks(),
        }
    }

    /// Format implied by the dataset file extension
    pub fn dataset_format(&self) -> DatasetFormat {
        DatasetFormat::from_path(&self.dataset_path)
    }
}

impl Default for PipelineConfig {
    /// Built-in defaults, ignoring the environment
    fn default() -> Self {
        let data_dir = constants::get_data_dir();
        Self {
            model_path: data_dir.join("models").join(constants::DEFAULT_MODEL_FILE),
            model_sha256: None,
            dataset_path: data_dir.join("data").join(constants::DEFAULT_DATASET_FILE),
            dataset_size: constants::DEFAULT_DATASET_SIZE,
            dataset_seed: constants::DEFAULT_DATASET_SEED,
            buffer_size: constants::DEFAULT_BUFFER_SIZE,
            refresh_interval: Duration::from_secs(constants::DEFAULT_REFRESH_INTERVAL_SECS),
            sim_ticks: constants::DEFAULT_SIM_TICKS,
        }
    }
}
