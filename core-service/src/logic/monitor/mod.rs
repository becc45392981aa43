//! Monitor Module - Live patient monitoring
//!
//! Each tick draws a fresh snapshot for the session's patient at the
//! selected risk tier, runs it through the predictor and records the
//! result in a rolling window.

pub mod buffer;


use parking_lot::RwLock;
use rand::Rng;

use crate::logic::analytics::StatusDistribution;
use crate::logic::model::{PredictorError, RiskPredictor};
use crate::logic::vitals::{snapshot, RiskLevel};

pub use buffer::{BufferStatus, LiveBuffer, MonitorEntry};

pub struct MonitorSession {
    patient_id: u64,
    risk_level: RwLock<RiskLevel>,
    buffer: LiveBuffer,
}

impl MonitorSession {
    pub fn new(patient_id: u64, risk_level: RiskLevel, capacity: usize) -> Self {
        Self {
            patient_id,
            risk_level: RwLock::new(risk_level),
            buffer: LiveBuffer::new(capacity),
        }
    }

    pub fn patient_id(&self) -> u64 {
        self.patient_id
    }

    pub fn risk_level(&self) -> RiskLevel {
        *self.risk_level.read()
    }

    /// Takes effect from the next tick; the window is kept
    pub fn set_risk_level(&self, level: RiskLevel) {
        let mut current = self.risk_level.write();
        if *current != level {
            log::info!("Patient {}: risk tier {} -> {}", self.patient_id, *current, level);
            *current = level;
        }
    }

    /// Generate, assess and record one observation
    pub fn tick(
        &self,
        rng: &mut impl Rng,
        predictor: &RiskPredictor,
    ) -> Result<MonitorEntry, PredictorError> {
        let snapshot = snapshot(rng, self.risk_level(), self.patient_id);
        let assessment = predictor.predict_vitals(&snapshot.vitals)?;

        let entry = MonitorEntry { snapshot, assessment };
        self.buffer.push(entry.clone());
        Ok(entry)
    }

    pub fn buffer(&self) -> &LiveBuffer {
        &self.buffer
    }

    /// Status counts over the current window
    pub fn window_distribution(&self) -> StatusDistribution {
        let mut dist = StatusDistribution::default();
        for entry in self.buffer.entries() {
            dist.record(entry.assessment.status);
        }
        dist
    }
}
