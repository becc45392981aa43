//! Vital Generator
//!
//! Draws synthetic vitals. Every function takes its random source as an
//! argument: pass `rand::thread_rng()` for live simulation, a seeded
//! `StdRng` when the output must be reproducible.
//!
//! Snapshots in a series are drawn independently; there is no temporal
//! autocorrelation between consecutive readings.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::profiles::{Gaussian, VitalProfile, OPERATING_RANGES, VITAL_BOUNDS};
use super::types::{RiskLevel, VitalSigns, VitalSnapshot};
use crate::constants::DEFAULT_PATIENT_ID;
use crate::logic::features::FEATURE_COUNT;

// ============================================================================
// SAMPLING
// ============================================================================

/// Standard normal via Box-Muller
fn standard_normal(rng: &mut impl Rng) -> f64 {
    // gen() is in [0, 1); flip it so ln() never sees zero
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen::<f64>();
    let r = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * std::f64::consts::PI * u2;
    r * theta.cos()
}

fn sample(dist: Gaussian, rng: &mut impl Rng) -> f64 {
    dist.mean + dist.std_dev * standard_normal(rng)
}

/// Draw the five vitals for a tier and clamp each to its absolute bound
pub fn sample_vitals(rng: &mut impl Rng, risk_level: RiskLevel) -> VitalSigns {
    let profile = VitalProfile::for_level(risk_level);

    let raw = [
        sample(profile.heart_rate, rng),
        sample(profile.oxygen_level, rng),
        sample(profile.temperature, rng),
        sample(profile.blood_pressure, rng),
        sample(profile.respiratory_rate, rng),
    ];

    let mut clamped = [0.0f64; FEATURE_COUNT];
    for (i, value) in raw.iter().enumerate() {
        clamped[i] = VITAL_BOUNDS[i].clamp(*value);
    }

    VitalSigns::from_array(clamped)
}

// ============================================================================
// SNAPSHOTS
// ============================================================================

/// Generate a single snapshot stamped with the current time
pub fn snapshot(rng: &mut impl Rng, risk_level: RiskLevel, patient_id: u64) -> VitalSnapshot {
    snapshot_at(rng, risk_level, patient_id, Utc::now())
}

/// Generate a single snapshot with an explicit timestamp
pub fn snapshot_at(
    rng: &mut impl Rng,
    risk_level: RiskLevel,
    patient_id: u64,
    timestamp: DateTime<Utc>,
) -> VitalSnapshot {
    VitalSnapshot {
        patient_id,
        timestamp,
        vitals: sample_vitals(rng, risk_level),
    }
}

// ============================================================================
// TIME SERIES
// ============================================================================

/// `n` snapshots for the default patient, the last one `interval` before now
pub fn series(
    rng: &mut impl Rng,
    n: usize,
    interval: Duration,
    risk_level: RiskLevel,
) -> Vec<VitalSnapshot> {
    series_for_patient(rng, DEFAULT_PATIENT_ID, n, interval, risk_level)
}

pub fn series_for_patient(
    rng: &mut impl Rng,
    patient_id: u64,
    n: usize,
    interval: Duration,
    risk_level: RiskLevel,
) -> Vec<VitalSnapshot> {
    series_ending_at(rng, patient_id, n, interval, risk_level, Utc::now())
}

/// Snapshot `i` (0-based) is stamped `end - (n - i) * interval`.
///
/// Spacing is exact to the nanosecond; a zero interval becomes 1 ns so
/// timestamps stay strictly increasing. If the first timestamp would fall
/// before the earliest representable instant, the spacing is shrunk to fit.
pub fn series_ending_at(
    rng: &mut impl Rng,
    patient_id: u64,
    n: usize,
    interval: Duration,
    risk_level: RiskLevel,
    end: DateTime<Utc>,
) -> Vec<VitalSnapshot> {
    if n == 0 {
        return Vec::new();
    }

    let count = n as i128;
    let mut step_ns = (interval.as_nanos() as i128).max(1);

    let span_ns = nanos_of(end.signed_duration_since(DateTime::<Utc>::MIN_UTC));
    if step_ns.saturating_mul(count) > span_ns {
        let fitted = (span_ns / count).max(1);
        log::warn!(
            "Series of {} x {:?} ending {} leaves the time range, spacing reduced to {} ns",
            n,
            interval,
            end,
            fitted
        );
        step_ns = fitted;
    }

    (0..n)
        .map(|i| {
            let steps_back = (n - i) as i128;
            let timestamp = before(end, step_ns * steps_back).unwrap_or(DateTime::<Utc>::MIN_UTC);
            snapshot_at(rng, risk_level, patient_id, timestamp)
        })
        .collect()
}

const NANOS_PER_SEC: i128 = 1_000_000_000;

fn nanos_of(delta: chrono::Duration) -> i128 {
    delta.num_seconds() as i128 * NANOS_PER_SEC + delta.subsec_nanos() as i128
}

/// `end` minus `ns` nanoseconds, None when out of range
fn before(end: DateTime<Utc>, ns: i128) -> Option<DateTime<Utc>> {
    let secs = i64::try_from(ns / NANOS_PER_SEC).ok()?;
    let nanos = (ns % NANOS_PER_SEC) as i64;
    let delta = chrono::Duration::try_seconds(secs)?
        .checked_add(&chrono::Duration::nanoseconds(nanos))?;
    end.checked_sub_signed(delta)
}

// ============================================================================
// UNIFORM BATCH (dataset construction)
// ============================================================================

/// Seeded uniform draws over each vital's full operating range.
///
/// Same `(n, seed)` always yields the same rows.
pub fn uniform_batch(n: usize, seed: u64) -> Vec<[f64; FEATURE_COUNT]> {
    let mut rng = StdRng::seed_from_u64(seed);
    uniform_batch_with(&mut rng, n)
}

/// Draws column by column: every heart rate first, then every oxygen level...
pub fn uniform_batch_with(rng: &mut impl Rng, n: usize) -> Vec<[f64; FEATURE_COUNT]> {
    let mut rows = vec![[0.0f64; FEATURE_COUNT]; n];

    for (col, range) in OPERATING_RANGES.iter().enumerate() {
        for row in rows.iter_mut() {
            row[col] = rng.gen_range(range.clone());
        }
    }

    rows
}
