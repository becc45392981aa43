//! Vital Profiles & Bounds
//!
//! Distribution parameters per simulation tier, absolute physiological
//! bounds, and the uniform operating ranges used for dataset construction.
//! Constants only - no sampling logic.

use std::ops::Range;

use super::types::RiskLevel;

// ============================================================================
// DISTRIBUTIONS
// ============================================================================

/// Mean / standard deviation of a normal distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    pub mean: f64,
    pub std_dev: f64,
}

const fn gaussian(mean: f64, std_dev: f64) -> Gaussian {
    Gaussian { mean, std_dev }
}

/// One tier's distribution for each vital
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalProfile {
    pub heart_rate: Gaussian,
    pub oxygen_level: Gaussian,
    pub temperature: Gaussian,
    pub blood_pressure: Gaussian,
    pub respiratory_rate: Gaussian,
}

/// Clustered in the clinically normal band
pub const NORMAL_PROFILE: VitalProfile = VitalProfile {
    heart_rate: gaussian(75.0, 5.0),
    oxygen_level: gaussian(97.0, 1.0),
    temperature: gaussian(36.8, 0.3),
    blood_pressure: gaussian(120.0, 8.0),
    respiratory_rate: gaussian(16.0, 2.0),
};

pub const WARNING_PROFILE: VitalProfile = VitalProfile {
    heart_rate: gaussian(100.0, 10.0),
    oxygen_level: gaussian(93.0, 2.0),
    temperature: gaussian(37.8, 0.4),
    blood_pressure: gaussian(145.0, 10.0),
    respiratory_rate: gaussian(22.0, 3.0),
};

/// Clustered far outside the normal band
pub const CRITICAL_PROFILE: VitalProfile = VitalProfile {
    heart_rate: gaussian(130.0, 15.0),
    oxygen_level: gaussian(88.0, 3.0),
    temperature: gaussian(39.0, 0.6),
    blood_pressure: gaussian(170.0, 15.0),
    respiratory_rate: gaussian(30.0, 4.0),
};

impl VitalProfile {
    pub fn for_level(level: RiskLevel) -> &'static VitalProfile {
        match level {
            RiskLevel::Normal => &NORMAL_PROFILE,
            RiskLevel::Warning => &WARNING_PROFILE,
            RiskLevel::Critical => &CRITICAL_PROFILE,
        }
    }
}

// ============================================================================
// ABSOLUTE BOUNDS
// ============================================================================

/// Inclusive clamp range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Bound {
    /// Clamp into the bound; NaN maps to `min`
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const HEART_RATE_BOUND: Bound = Bound { min: 40.0, max: 200.0 };
pub const OXYGEN_LEVEL_BOUND: Bound = Bound { min: 70.0, max: 100.0 };
pub const TEMPERATURE_BOUND: Bound = Bound { min: 34.0, max: 42.0 };
pub const BLOOD_PRESSURE_BOUND: Bound = Bound { min: 60.0, max: 200.0 };
pub const RESPIRATORY_RATE_BOUND: Bound = Bound { min: 8.0, max: 45.0 };

/// Bounds in feature layout order
pub const VITAL_BOUNDS: [Bound; 5] = [
    HEART_RATE_BOUND,
    OXYGEN_LEVEL_BOUND,
    TEMPERATURE_BOUND,
    BLOOD_PRESSURE_BOUND,
    RESPIRATORY_RATE_BOUND,
];

// ============================================================================
// UNIFORM OPERATING RANGES (dataset construction)
// ============================================================================

/// Operating ranges in feature layout order; wider than the normal band
pub const OPERATING_RANGES: [Range<f64>; 5] = [
    50.0..160.0,
    80.0..100.0,
    35.0..42.0,
    80.0..180.0,
    10.0..40.0,
];
