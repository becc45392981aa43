use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::generator::{
    sample_vitals, series, series_ending_at, snapshot, snapshot_at, uniform_batch,
};
use super::profiles::{OPERATING_RANGES, VITAL_BOUNDS};
use super::types::RiskLevel;

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_snapshot_respects_bounds_for_every_tier() {
    let mut rng = StdRng::seed_from_u64(7);

    for level in RiskLevel::ALL {
        for _ in 0..10_000 {
            let vitals = sample_vitals(&mut rng, level).to_array();
            for (value, bound) in vitals.iter().zip(VITAL_BOUNDS.iter()) {
                assert!(
                    bound.contains(*value),
                    "{} draw {} outside [{}, {}]",
                    level,
                    value,
                    bound.min,
                    bound.max
                );
            }
        }
    }
}

#[test]
fn test_snapshot_carries_patient_and_time() {
    let mut rng = StdRng::seed_from_u64(1);
    let snap = snapshot_at(&mut rng, RiskLevel::Warning, 42, fixed_time());

    assert_eq!(snap.patient_id, 42);
    assert_eq!(snap.timestamp, fixed_time());

    let before = Utc::now();
    let live = snapshot(&mut rng, RiskLevel::Normal, 3);
    assert!(live.timestamp >= before);
}

#[test]
fn test_seeded_snapshots_reproducible() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);

    for level in RiskLevel::ALL {
        assert_eq!(sample_vitals(&mut a, level), sample_vitals(&mut b, level));
    }
}

#[test]
fn test_critical_heart_rate_centred_near_130() {
    let mut rng = StdRng::seed_from_u64(2024);
    let n = 5_000;

    let mean = (0..n)
        .map(|_| sample_vitals(&mut rng, RiskLevel::Critical).heart_rate)
        .sum::<f64>()
        / n as f64;

    assert!((mean - 130.0).abs() < 2.0, "mean heart rate {}", mean);
}

#[test]
fn test_normal_tier_clusters_in_normal_band() {
    let mut rng = StdRng::seed_from_u64(5);
    let n = 2_000;

    let in_band = (0..n)
        .map(|_| sample_vitals(&mut rng, RiskLevel::Normal))
        .filter(|v| (60.0..=90.0).contains(&v.heart_rate) && v.oxygen_level >= 94.0)
        .count();

    assert!(in_band as f64 / n as f64 > 0.95);
}

#[test]
fn test_series_timestamps_strictly_increasing() {
    let mut rng = StdRng::seed_from_u64(11);
    let end = fixed_time();
    let points = series_ending_at(
        &mut rng,
        9,
        60,
        Duration::from_secs(2),
        RiskLevel::Normal,
        end,
    );

    assert_eq!(points.len(), 60);
    assert_eq!(points[0].timestamp, end - chrono::Duration::seconds(120));
    assert_eq!(points[59].timestamp, end - chrono::Duration::seconds(2));

    for pair in points.windows(2) {
        assert_eq!(pair[1].timestamp - pair[0].timestamp, chrono::Duration::seconds(2));
        assert_eq!(pair[0].patient_id, 9);
    }
}

#[test]
fn test_series_zero_interval_still_increasing() {
    let mut rng = StdRng::seed_from_u64(12);
    let points = series_ending_at(
        &mut rng,
        1,
        5,
        Duration::ZERO,
        RiskLevel::Warning,
        fixed_time(),
    );

    for pair in points.windows(2) {
        assert!(pair[1].timestamp > pair[0].timestamp);
    }
}

fn gaps(points: &[crate::logic::vitals::VitalSnapshot]) -> Vec<chrono::Duration> {
    points
        .windows(2)
        .map(|pair| pair[1].timestamp - pair[0].timestamp)
        .collect()
}

#[test]
fn test_series_sub_millisecond_interval() {
    let mut rng = StdRng::seed_from_u64(21);
    let end = fixed_time();
    let points = series_ending_at(
        &mut rng,
        1,
        3,
        Duration::from_micros(500),
        RiskLevel::Normal,
        end,
    );

    assert!(gaps(&points).iter().all(|g| *g == chrono::Duration::microseconds(500)));
    assert_eq!(points[2].timestamp, end - chrono::Duration::microseconds(500));
}

#[test]
fn test_series_fractional_millisecond_interval() {
    let mut rng = StdRng::seed_from_u64(22);

    let points = series_ending_at(
        &mut rng,
        1,
        3,
        Duration::from_micros(2_500),
        RiskLevel::Normal,
        fixed_time(),
    );
    assert!(gaps(&points).iter().all(|g| *g == chrono::Duration::microseconds(2_500)));

    let points = series_ending_at(
        &mut rng,
        1,
        3,
        Duration::from_micros(1_999_900),
        RiskLevel::Normal,
        fixed_time(),
    );
    assert!(gaps(&points).iter().all(|g| *g == chrono::Duration::microseconds(1_999_900)));
}

#[test]
fn test_series_zero_interval_spaced_one_nanosecond() {
    let mut rng = StdRng::seed_from_u64(23);
    let points = series_ending_at(&mut rng, 1, 4, Duration::ZERO, RiskLevel::Normal, fixed_time());

    assert!(gaps(&points).iter().all(|g| *g == chrono::Duration::nanoseconds(1)));
}

#[test]
fn test_series_huge_interval_stays_increasing() {
    let mut rng = StdRng::seed_from_u64(24);
    let end = fixed_time();
    let points = series_ending_at(
        &mut rng,
        1,
        3,
        Duration::from_secs(u64::MAX / 4),
        RiskLevel::Critical,
        end,
    );

    assert_eq!(points.len(), 3);
    for pair in points.windows(2) {
        assert!(pair[1].timestamp > pair[0].timestamp);
    }
    assert!(points[0].timestamp >= DateTime::<Utc>::MIN_UTC);
    assert!(points[2].timestamp < end);
}

#[test]
fn test_series_default_patient_and_empty() {
    let mut rng = StdRng::seed_from_u64(13);

    let points = series(&mut rng, 3, Duration::from_secs(1), RiskLevel::Critical);
    assert!(points.iter().all(|p| p.patient_id == 1));
    assert!(points.last().unwrap().timestamp < Utc::now());

    assert!(series(&mut rng, 0, Duration::from_secs(1), RiskLevel::Normal).is_empty());
}

#[test]
fn test_uniform_batch_deterministic_and_in_range() {
    let first = uniform_batch(200, 42);
    let second = uniform_batch(200, 42);
    assert_eq!(first, second);

    let other = uniform_batch(200, 43);
    assert_ne!(first, other);

    for row in &first {
        for (value, range) in row.iter().zip(OPERATING_RANGES.iter()) {
            assert!(range.contains(value));
        }
    }
}

#[test]
fn test_uniform_batch_prefix_differs_from_shorter_batch() {
    // Column-wise draws: the second column of a 10-row batch starts after
    // ten heart rates, so a 5-row batch is not simply a prefix.
    let short = uniform_batch(5, 42);
    let long = uniform_batch(10, 42);

    assert_eq!(short[0][0], long[0][0]);
    assert_ne!(short[0][1], long[0][1]);
}
