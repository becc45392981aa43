//! Risk Scoring Rules & Thresholds
//!
//! Constants for the ground-truth labeling formula and the status bands.
//! No scoring logic here.
//!
//! The weighted-sum formula is a hand-tuned heuristic, not a clinically
//! validated score. Existing datasets and trained models depend on these
//! exact values.

use serde::{Deserialize, Serialize};

// ============================================================================
// IDEAL CENTRES
// ============================================================================

pub const HEART_RATE_CENTER: f64 = 75.0;
/// Oxygen is penalized one-sided: only values below this count
pub const OXYGEN_LEVEL_CEILING: f64 = 100.0;
pub const TEMPERATURE_CENTER: f64 = 36.8;
pub const BLOOD_PRESSURE_CENTER: f64 = 120.0;
pub const RESPIRATORY_RATE_CENTER: f64 = 16.0;

// ============================================================================
// NORMALIZATION SCALES
// ============================================================================

pub const HEART_RATE_SCALE: f64 = 85.0;
pub const OXYGEN_LEVEL_SCALE: f64 = 20.0;
pub const TEMPERATURE_SCALE: f64 = 5.2;
pub const BLOOD_PRESSURE_SCALE: f64 = 100.0;
pub const RESPIRATORY_RATE_SCALE: f64 = 24.0;

// ============================================================================
// WEIGHTS (sum to 1.0)
// ============================================================================

pub const HEART_RATE_WEIGHT: f64 = 0.25;
pub const OXYGEN_LEVEL_WEIGHT: f64 = 0.30;
pub const TEMPERATURE_WEIGHT: f64 = 0.15;
pub const BLOOD_PRESSURE_WEIGHT: f64 = 0.15;
pub const RESPIRATORY_RATE_WEIGHT: f64 = 0.15;

// ============================================================================
// STATUS THRESHOLDS
// ============================================================================

/// Below this score = SAFE
pub const WARNING_THRESHOLD: f64 = 0.35;

/// At or above this score = CRITICAL
pub const CRITICAL_THRESHOLD: f64 = 0.65;

/// Status bands (configurable copy of the constants above)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Lower edge of WARNING (inclusive)
    pub warning_min: f64,
    /// Lower edge of CRITICAL (inclusive)
    pub critical_min: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            warning_min: WARNING_THRESHOLD,
            critical_min: CRITICAL_THRESHOLD,
        }
    }
}
