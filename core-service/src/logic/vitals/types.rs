//! Vital Types
//!
//! Core data structures for vital signs. No generation logic here.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// VITAL SIGNS
// ============================================================================

/// The five measured physiological signals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// bpm
    pub heart_rate: f64,
    /// Peripheral oxygen saturation (%)
    pub oxygen_level: f64,
    /// °C
    pub temperature: f64,
    /// Systolic, mmHg
    pub blood_pressure: f64,
    /// breaths/min
    pub respiratory_rate: f64,
}

impl VitalSigns {
    pub fn new(
        heart_rate: f64,
        oxygen_level: f64,
        temperature: f64,
        blood_pressure: f64,
        respiratory_rate: f64,
    ) -> Self {
        Self {
            heart_rate,
            oxygen_level,
            temperature,
            blood_pressure,
            respiratory_rate,
        }
    }

    /// Values in feature layout order
    pub fn to_array(&self) -> [f64; 5] {
        [
            self.heart_rate,
            self.oxygen_level,
            self.temperature,
            self.blood_pressure,
            self.respiratory_rate,
        ]
    }

    pub fn from_array(values: [f64; 5]) -> Self {
        Self::new(values[0], values[1], values[2], values[3], values[4])
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// One instantaneous reading of all five vitals for a patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSnapshot {
    pub patient_id: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub vitals: VitalSigns,
}

// ============================================================================
// RISK LEVEL (simulation tier)
// ============================================================================

/// Qualitative tier selecting the distribution a snapshot is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Normal,
    Warning,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Normal, RiskLevel::Warning, RiskLevel::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Normal => "normal",
            RiskLevel::Warning => "warning",
            RiskLevel::Critical => "critical",
        }
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Normal
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(RiskLevel::Normal),
            "warning" => Ok(RiskLevel::Warning),
            "critical" => Ok(RiskLevel::Critical),
            _ => Err(VitalsError::UnknownRiskLevel(s.to_string())),
        }
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VitalsError {
    #[error("unknown risk level '{0}' (expected normal, warning or critical)")]
    UnknownRiskLevel(String),
}
