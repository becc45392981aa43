//! Risk Types
//!
//! Core types for risk assessment. Data structures only.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK STATUS
// ============================================================================

/// Categorical risk tier derived from a risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskStatus {
    /// Vitals within acceptable range
    Safe,
    /// Some vitals outside normal range, monitor closely
    Warning,
    /// Immediate intervention required
    Critical,
}

impl RiskStatus {
    pub const ALL: [RiskStatus; 3] = [RiskStatus::Safe, RiskStatus::Warning, RiskStatus::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Safe => "SAFE",
            RiskStatus::Warning => "WARNING",
            RiskStatus::Critical => "CRITICAL",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskStatus::Safe => 0,
            RiskStatus::Warning => 1,
            RiskStatus::Critical => 2,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskStatus::Safe => "#4caf50",     // Green
            RiskStatus::Warning => "#ff9800",  // Orange
            RiskStatus::Critical => "#f44336", // Red
        }
    }

    pub fn advisory(&self) -> &'static str {
        match self {
            RiskStatus::Safe => "Patient vitals within acceptable range.",
            RiskStatus::Warning => {
                "Some vitals are outside normal range. Close monitoring advised."
            }
            RiskStatus::Critical => {
                "Critical condition detected. Immediate medical intervention required."
            }
        }
    }
}

impl std::fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK ASSESSMENT
// ============================================================================

/// Score plus status, recomputed on every observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 0.0 - 1.0, higher = worse
    pub risk_score: f64,
    pub status: RiskStatus,
}

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// How a ground-truth score was computed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Normalized deviation per vital, in feature layout order
    pub deviations: [f64; 5],
    /// `deviation * weight` per vital
    pub contributions: [f64; 5],
    /// Weighted sum before clamping
    pub raw_score: f64,
    /// Clamped to [0, 1]
    pub final_score: f64,
}
