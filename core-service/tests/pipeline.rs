//! End-to-end checks across generator, scorer, dataset, model and api

use std::collections::HashSet;
use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

use icu_risk_core::api;
use icu_risk_core::logic::dataset::{self, DatasetFormat};
use icu_risk_core::logic::features::{FEATURE_COUNT, FEATURE_LAYOUT};
use icu_risk_core::logic::model::{
    save_model, Hyperparameters, Regressor, RegressionTree, RiskPredictor, TreeEnsemble,
};
use icu_risk_core::logic::risk::{classify, score, RiskStatus};
use icu_risk_core::logic::vitals::{snapshot, RiskLevel};

/// Small forest splitting on oxygen, heart rate and temperature
fn forest() -> TreeEnsemble {
    TreeEnsemble::new(
        "RandomForestRegressor",
        Hyperparameters {
            n_estimators: 3,
            max_depth: Some(8),
            random_state: Some(42),
        },
        [0.30, 0.45, 0.15, 0.05, 0.05],
        vec![
            RegressionTree::stump(1, 92.0, 0.75, 0.15),
            RegressionTree::stump(0, 105.0, 0.2, 0.7),
            RegressionTree::stump(2, 38.0, 0.25, 0.8),
        ],
    )
    .unwrap()
}

/// Raw output far outside [0, 1]
struct Wild;

impl Regressor for Wild {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        features.iter().sum::<f64>() * 10.0 - 2000.0
    }

    fn feature_importances(&self) -> [f64; FEATURE_COUNT] {
        [3.0, 1.0, 1.0, 0.0, 5.0]
    }

    fn hyperparameters(&self) -> Hyperparameters {
        Hyperparameters {
            n_estimators: 1,
            max_depth: None,
            random_state: None,
        }
    }

    fn model_type(&self) -> &str {
        "Wild"
    }
}

fn shared_api() {
    // every test in this binary shares one predictor
    api::init_with_predictor(RiskPredictor::from_regressor(forest()));
}

#[test]
fn test_score_reference_points() {
    assert!((score(75.0, 97.0, 36.8, 120.0, 16.0) - 0.045).abs() < 1e-12);
    assert_eq!(score(75.0, 100.0, 36.8, 120.0, 16.0), 0.0);
    assert_eq!(score(200.0, 70.0, 42.0, 200.0, 45.0), 1.0);
}

#[test]
fn test_classify_band_edges() {
    assert_eq!(classify(0.34), RiskStatus::Safe);
    assert_eq!(classify(0.35), RiskStatus::Warning);
    assert_eq!(classify(0.649999), RiskStatus::Warning);
    assert_eq!(classify(0.65), RiskStatus::Critical);
}

#[test]
fn test_critical_tier_scores_high() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = 2000;
    let mut elevated = 0;
    let mut hr_sum = 0.0;

    for _ in 0..n {
        let s = snapshot(&mut rng, RiskLevel::Critical, 1);
        hr_sum += s.vitals.heart_rate;
        let v = s.vitals;
        let status = classify(score(
            v.heart_rate,
            v.oxygen_level,
            v.temperature,
            v.blood_pressure,
            v.respiratory_rate,
        ));
        if status != RiskStatus::Safe {
            elevated += 1;
        }
    }

    assert!((hr_sum / n as f64 - 130.0).abs() < 2.0);
    assert!(elevated as f64 / n as f64 >= 0.95, "elevated: {}", elevated);
}

#[test]
fn test_dataset_build_and_files_are_reproducible() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv");

    let first = api::build(100, 42);
    let second = api::build(100, 42);
    assert_eq!(first, second);

    api::export_dataset(&a, &first, DatasetFormat::Csv).unwrap();
    api::export_dataset(&b, &second, DatasetFormat::Csv).unwrap();
    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());

    let header = std::fs::read_to_string(&a).unwrap();
    assert!(header.starts_with(
        "heart_rate,oxygen_level,temperature,blood_pressure,respiratory_rate,risk_score\n"
    ));

    assert_eq!(api::load_dataset(&a, DatasetFormat::Csv).unwrap(), first);
}

#[test]
fn test_saved_artifact_end_to_end() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("models").join("icu_risk_model.json");
    let checksum = save_model(&forest(), &path).unwrap();

    let predictor = RiskPredictor::new(&path, Some(checksum));
    let records = dataset::build(50, 7);

    for r in &records {
        let a = predictor.predict_vitals(&r.vitals()).unwrap();
        assert!((0.0..=1.0).contains(&a.risk_score));
        assert_eq!(a.status, classify(a.risk_score));
    }
    assert_eq!(predictor.status().inference_count, 50);
    assert_eq!(predictor.model_info().unwrap().n_estimators, 3);
}

#[test]
fn test_api_surface() {
    shared_api();

    let a = api::predict(130.0, 85.0, 39.5, 170.0, 30.0).unwrap();
    assert_eq!(a.status, RiskStatus::Critical);

    let info = api::get_model_info().unwrap();
    assert_eq!(info.model_type, "RandomForestRegressor");
    assert_eq!(info.max_depth, Some(8));

    let rows = api::get_feature_importances().unwrap();
    assert_eq!(rows[0].feature, "oxygen_level");

    let series = api::series(5, Duration::from_secs(2), RiskLevel::Warning);
    assert_eq!(series.len(), 5);
    assert!(series.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    assert_eq!(api::snapshot(RiskLevel::Normal, 9).patient_id, 9);

    let status = api::get_pipeline_status();
    assert_eq!(status.feature_count, 5);
    assert!(status.model.unwrap().model_loaded);

    // v1 exposes the same functions
    assert_eq!(api::v1::classify(0.5), RiskStatus::Warning);
}

#[test]
fn test_importances_cover_layout() {
    let predictor = RiskPredictor::from_regressor(Wild);
    let rows = predictor.feature_importances().unwrap();

    let total: f64 = rows.iter().map(|r| r.importance).sum();
    assert!((total - 1.0).abs() < 1e-6);

    let names: HashSet<&str> = rows.iter().map(|r| r.feature.as_str()).collect();
    assert_eq!(names.len(), FEATURE_COUNT);
    assert!(FEATURE_LAYOUT.iter().all(|n| names.contains(n)));
    assert_eq!(rows[0].feature, "respiratory_rate");
}

#[test]
fn test_extreme_inputs_stay_in_unit_interval() {
    let wild = RiskPredictor::from_regressor(Wild);
    let extremes = [
        [f64::MAX; FEATURE_COUNT],
        [f64::MIN; FEATURE_COUNT],
        [f64::MAX, f64::MIN, f64::MAX, f64::MIN, f64::MAX],
        [f64::MIN, f64::MAX, f64::MIN, f64::MAX, f64::MIN],
        [f64::MIN_POSITIVE, -f64::MIN_POSITIVE, 0.0, -0.0, f64::EPSILON],
    ];

    for [hr, o2, t, bp, rr] in extremes {
        let a = wild.predict(hr, o2, t, bp, rr).unwrap();
        assert!((0.0..=1.0).contains(&a.risk_score), "{:?}", a);
        assert_eq!(a.status, classify(a.risk_score));

        let s = score(hr, o2, t, bp, rr);
        assert!((0.0..=1.0).contains(&s), "score {} for {:?}", s, [hr, o2, t, bp, rr]);
    }

    // infinities cancel inside the sum; NaN raw output scores 1.0
    let a = wild
        .predict(f64::INFINITY, f64::NEG_INFINITY, 36.8, 120.0, 16.0)
        .unwrap();
    assert_eq!(a.risk_score, 1.0);
    assert_eq!(a.status, RiskStatus::Critical);
}

proptest! {
    #[test]
    fn prop_predict_stays_in_unit_interval(
        hr in proptest::num::f64::NORMAL,
        o2 in proptest::num::f64::NORMAL,
        t in proptest::num::f64::NORMAL,
        bp in proptest::num::f64::NORMAL,
        rr in proptest::num::f64::NORMAL,
    ) {
        let wild = RiskPredictor::from_regressor(Wild);
        let a = wild.predict(hr, o2, t, bp, rr).unwrap();
        prop_assert!((0.0..=1.0).contains(&a.risk_score));
        prop_assert_eq!(a.status, classify(a.risk_score));

        let s = score(hr, o2, t, bp, rr);
        prop_assert!((0.0..=1.0).contains(&s));
    }
}
