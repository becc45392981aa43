use serde::{Deserialize, Serialize};

use crate::logic::features::FEATURE_COUNT;
use crate::logic::vitals::VitalSigns;

/// One labelled training row: five vitals plus the ground-truth score.
///
/// Field order is the on-disk column order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PatientRecord {
    // ✅ Features (layout order)
    pub heart_rate: f64,
    pub oxygen_level: f64,
    pub temperature: f64,
    pub blood_pressure: f64,
    pub respiratory_rate: f64,

    // ✅ Label
    pub risk_score: f64,
}

impl PatientRecord {
    pub fn from_vitals(vitals: &VitalSigns, risk_score: f64) -> Self {
        Self {
            heart_rate: vitals.heart_rate,
            oxygen_level: vitals.oxygen_level,
            temperature: vitals.temperature,
            blood_pressure: vitals.blood_pressure,
            respiratory_rate: vitals.respiratory_rate,
            risk_score,
        }
    }

    pub fn vitals(&self) -> VitalSigns {
        VitalSigns::new(
            self.heart_rate,
            self.oxygen_level,
            self.temperature,
            self.blood_pressure,
            self.respiratory_rate,
        )
    }

    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        self.vitals().to_array()
    }

    /// Features followed by the label, in column order
    pub fn to_row(&self) -> [f64; FEATURE_COUNT + 1] {
        [
            self.heart_rate,
            self.oxygen_level,
            self.temperature,
            self.blood_pressure,
            self.respiratory_rate,
            self.risk_score,
        ]
    }

    pub fn from_row(row: [f64; FEATURE_COUNT + 1]) -> Self {
        Self {
            heart_rate: row[0],
            oxygen_level: row[1],
            temperature: row[2],
            blood_pressure: row[3],
            respiratory_rate: row[4],
            risk_score: row[5],
        }
    }
}
