//! Model Artifact - load / save / verify
//!
//! JSON envelope around a [`TreeEnsemble`] carrying the feature layout it was
//! trained against. Produced by the external training step; this crate only
//! reads it (and writes it for fixtures).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::forest::{TreeEnsemble, TreeError};
use crate::logic::features::{layout_hash, validate_layout, LayoutMismatchError, FEATURE_VERSION};

/// Current artifact envelope version
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error(transparent)]
    LayoutMismatch(#[from] LayoutMismatchError),

    #[error("Unsupported artifact format v{0} (expected v{})", ARTIFACT_FORMAT_VERSION)]
    UnsupportedFormat(u32),

    #[error("Invalid model: {0}")]
    Invalid(#[from] TreeError),
}

// ============================================================================
// ENVELOPE
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub feature_version: u8,
    pub layout_hash: u32,
    pub model: TreeEnsemble,
}

impl ModelArtifact {
    /// Wrap a model with the current layout metadata
    pub fn new(model: TreeEnsemble) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            model,
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ModelError::UnsupportedFormat(self.format_version));
        }
        validate_layout(self.feature_version, self.layout_hash)?;
        Ok(self.model.validate()?)
    }
}

// ============================================================================
// CHECKSUM
// ============================================================================

/// Hex SHA-256 of raw artifact bytes
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

pub fn verify_checksum(bytes: &[u8], expected: &str) -> Result<(), ModelError> {
    let actual = sha256_hex(bytes);
    let expected = expected.trim().to_lowercase();

    if actual != expected {
        return Err(ModelError::ChecksumMismatch { expected, actual });
    }
    Ok(())
}

// ============================================================================
// LOAD / SAVE
// ============================================================================

/// Load and validate a model artifact, optionally pinning its SHA-256
pub fn load_model(path: &Path, expected_sha256: Option<&str>) -> Result<TreeEnsemble, ModelError> {
    log::info!("Loading model artifact from: {}", path.display());

    if !path.exists() {
        return Err(ModelError::NotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    load_model_from_bytes(&bytes, expected_sha256)
}

pub fn load_model_from_bytes(
    bytes: &[u8],
    expected_sha256: Option<&str>,
) -> Result<TreeEnsemble, ModelError> {
    if let Some(expected) = expected_sha256 {
        verify_checksum(bytes, expected)?;
    }

    let artifact: ModelArtifact = serde_json::from_slice(bytes)?;
    artifact.validate()?;

    log::info!(
        "Model loaded: {} ({} trees, {} bytes)",
        artifact.model.model_type,
        artifact.model.trees.len(),
        bytes.len()
    );

    Ok(artifact.model)
}

/// Write a model artifact; returns the SHA-256 of what was written
pub fn save_model(model: &TreeEnsemble, path: &Path) -> Result<String, ModelError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let artifact = ModelArtifact::new(model.clone());
    artifact.validate()?;

    let json = serde_json::to_vec_pretty(&artifact)?;
    fs::write(path, &json)?;
    Ok(sha256_hex(&json))
}
