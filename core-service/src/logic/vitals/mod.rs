//! Vitals Module - Synthetic Vital Sign Generation
//!
//! `types` holds the data, `profiles` the per-tier constants, `generator`
//! the sampling functions.

pub mod types;
pub mod profiles;
pub mod generator;

#[cfg(test)]
mod tests;

pub use generator::{
    sample_vitals, series, series_ending_at, series_for_patient, snapshot, snapshot_at,
    uniform_batch, uniform_batch_with,
};
pub use profiles::{Bound, VitalProfile, OPERATING_RANGES, VITAL_BOUNDS};
pub use types::{RiskLevel, VitalSigns, VitalSnapshot, VitalsError};
