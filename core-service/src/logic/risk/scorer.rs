//! Risk Scorer
//!
//! Deterministic ground-truth labeling function used to build the training
//! dataset. No randomness, no learned parameters.

use super::rules::*;
use super::types::ScoreBreakdown;
use crate::logic::vitals::VitalSigns;

const WEIGHTS: [f64; 5] = [
    HEART_RATE_WEIGHT,
    OXYGEN_LEVEL_WEIGHT,
    TEMPERATURE_WEIGHT,
    BLOOD_PRESSURE_WEIGHT,
    RESPIRATORY_RATE_WEIGHT,
];

/// Risk score in [0, 1] from the five vitals
pub fn score(
    heart_rate: f64,
    oxygen_level: f64,
    temperature: f64,
    blood_pressure: f64,
    respiratory_rate: f64,
) -> f64 {
    score_vitals(&VitalSigns::new(
        heart_rate,
        oxygen_level,
        temperature,
        blood_pressure,
        respiratory_rate,
    ))
}

pub fn score_vitals(vitals: &VitalSigns) -> f64 {
    score_breakdown(vitals).final_score
}

/// Per-vital deviation terms. Oxygen is one-sided and not clamped per term,
/// so a reading above 100 % yields a negative term.
pub fn deviations(vitals: &VitalSigns) -> [f64; 5] {
    [
        (vitals.heart_rate - HEART_RATE_CENTER).abs() / HEART_RATE_SCALE,
        (OXYGEN_LEVEL_CEILING - vitals.oxygen_level) / OXYGEN_LEVEL_SCALE,
        (vitals.temperature - TEMPERATURE_CENTER).abs() / TEMPERATURE_SCALE,
        (vitals.blood_pressure - BLOOD_PRESSURE_CENTER).abs() / BLOOD_PRESSURE_SCALE,
        (vitals.respiratory_rate - RESPIRATORY_RATE_CENTER).abs() / RESPIRATORY_RATE_SCALE,
    ]
}

pub fn score_breakdown(vitals: &VitalSigns) -> ScoreBreakdown {
    let deviations = deviations(vitals);

    let mut contributions = [0.0f64; 5];
    for (i, d) in deviations.iter().enumerate() {
        contributions[i] = WEIGHTS[i] * d;
    }

    // Summed in layout order
    let raw_score = contributions[0]
        + contributions[1]
        + contributions[2]
        + contributions[3]
        + contributions[4];

    ScoreBreakdown {
        deviations,
        contributions,
        raw_score,
        final_score: raw_score.clamp(0.0, 1.0),
    }
}
