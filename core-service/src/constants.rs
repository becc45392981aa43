//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Every value can be overridden from the environment (or a `.env` file
//! loaded by the binary).

use std::path::PathBuf;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "ICU Monitor";

/// Directory name under the platform data dir
pub const APP_DIR_NAME: &str = "icu-monitor";

/// Default model artifact file name
pub const DEFAULT_MODEL_FILE: &str = "icu_risk_model.json";

/// Default dataset file name
pub const DEFAULT_DATASET_FILE: &str = "icu_patient_data.csv";

/// Default number of patients in the generated dataset
pub const DEFAULT_DATASET_SIZE: usize = 500;

/// Default dataset seed
pub const DEFAULT_DATASET_SEED: u64 = 42;

/// Rolling window kept by the live monitor (~2 min at 2 s intervals)
pub const DEFAULT_BUFFER_SIZE: usize = 60;

/// Seconds between live simulation ticks
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 2;

/// Ticks per risk tier run by the driver binary
pub const DEFAULT_SIM_TICKS: usize = 10;

/// Patient id used when the caller does not name one
pub const DEFAULT_PATIENT_ID: u64 = 1;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Base directory for models and datasets
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Get model artifact path from environment or use default
pub fn get_model_path() -> PathBuf {
    std::env::var("ICU_MODEL_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| get_data_dir().join("models").join(DEFAULT_MODEL_FILE))
}

/// Expected SHA-256 of the model artifact (hex), if pinned
pub fn get_model_checksum() -> Option<String> {
    std::env::var("ICU_MODEL_SHA256")
        .ok()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

/// Get dataset path from environment or use default
pub fn get_dataset_path() -> PathBuf {
    std::env::var("ICU_DATASET_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| get_data_dir().join("data").join(DEFAULT_DATASET_FILE))
}

/// Get dataset size from environment or use default
pub fn get_dataset_size() -> usize {
    std::env::var("ICU_DATASET_SIZE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DATASET_SIZE)
}

/// Get dataset seed from environment or use default
pub fn get_dataset_seed() -> u64 {
    std::env::var("ICU_DATASET_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DATASET_SEED)
}

/// Get live buffer size from environment or use default
pub fn get_buffer_size() -> usize {
    std::env::var("ICU_BUFFER_SIZE")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|&n: &usize| n > 0)
        .unwrap_or(DEFAULT_BUFFER_SIZE)
}

/// Get refresh interval from environment or use default
pub fn get_refresh_interval_secs() -> u64 {
    std::env::var("ICU_REFRESH_INTERVAL_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS)
}

/// Get simulation tick count from environment or use default
pub fn get_sim_ticks() -> usize {
    std::env::var("ICU_SIM_TICKS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SIM_TICKS)
}
