//! Risk Classifier
//!
//! Score → status only. Each band includes its lower edge.

use super::rules::RiskThresholds;
use super::types::{RiskAssessment, RiskStatus};

/// SAFE below 0.35, WARNING below 0.65, CRITICAL otherwise
pub fn classify(score: f64) -> RiskStatus {
    classify_with_thresholds(score, &RiskThresholds::default())
}

/// Classification with custom bands. NaN falls through to CRITICAL.
pub fn classify_with_thresholds(score: f64, thresholds: &RiskThresholds) -> RiskStatus {
    if score < thresholds.warning_min {
        RiskStatus::Safe
    } else if score < thresholds.critical_min {
        RiskStatus::Warning
    } else {
        RiskStatus::Critical
    }
}

/// Bundle a score with its status
pub fn assess(score: f64) -> RiskAssessment {
    RiskAssessment {
        risk_score: score,
        status: classify(score),
    }
}
