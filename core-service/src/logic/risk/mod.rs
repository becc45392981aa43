//! Risk Module - Ground-Truth Scoring & Classification
//!
//! Structure:
//! - `types` - RiskStatus, RiskAssessment, ScoreBreakdown
//! - `rules` - formula constants and status thresholds
//! - `scorer` - labeling function
//! - `classifier` - score → status

pub mod types;
pub mod rules;
pub mod scorer;
pub mod classifier;

pub use classifier::{assess, classify, classify_with_thresholds};
pub use rules::{RiskThresholds, CRITICAL_THRESHOLD, WARNING_THRESHOLD};
pub use scorer::{score, score_breakdown, score_vitals};
pub use types::{RiskAssessment, RiskStatus, ScoreBreakdown};
