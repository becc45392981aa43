//! Analytics Module - Dataset statistics and model evaluation
//!
//! Numbers behind the analytics and model-insight views: per-column
//! summaries, the correlation matrix, how the labels fall into status
//! bands, and how well the loaded model fits a dataset.

pub mod evaluation;
pub mod stats;


use serde::{Deserialize, Serialize};

use crate::logic::dataset::PatientRecord;
use crate::logic::risk::{classify, RiskStatus};

pub use evaluation::{evaluate, evaluate_predictor, ModelEvaluation};
pub use stats::{correlation_matrix, pearson, quantile, summarize, ColumnSummary, CorrelationMatrix};

// ============================================================================
// STATUS DISTRIBUTION
// ============================================================================

/// Records per status band of their ground-truth score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDistribution {
    pub safe: usize,
    pub warning: usize,
    pub critical: usize,
}

impl StatusDistribution {
    pub fn record(&mut self, status: RiskStatus) {
        match status {
            RiskStatus::Safe => self.safe += 1,
            RiskStatus::Warning => self.warning += 1,
            RiskStatus::Critical => self.critical += 1,
        }
    }

    pub fn count(&self, status: RiskStatus) -> usize {
        match status {
            RiskStatus::Safe => self.safe,
            RiskStatus::Warning => self.warning,
            RiskStatus::Critical => self.critical,
        }
    }

    pub fn total(&self) -> usize {
        self.safe + self.warning + self.critical
    }

    /// Share of `status`; 0.0 when empty
    pub fn fraction(&self, status: RiskStatus) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(status) as f64 / total as f64
    }
}

pub fn status_distribution(records: &[PatientRecord]) -> StatusDistribution {
    let mut dist = StatusDistribution::default();
    for record in records {
        dist.record(classify(record.risk_score));
    }
    dist
}
