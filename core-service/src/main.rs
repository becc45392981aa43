//! ICU Monitor - simulation driver
//!
//! Builds and writes the training dataset, loads the pre-trained model and
//! runs a short live simulation per risk tier. Training is out of scope.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use icu_risk_core::api;
use icu_risk_core::constants::{APP_NAME, APP_VERSION, DEFAULT_PATIENT_ID};
use icu_risk_core::logic::analytics::{self, evaluate_predictor};
use icu_risk_core::logic::config::PipelineConfig;
use icu_risk_core::logic::monitor::MonitorSession;
use icu_risk_core::logic::risk::RiskStatus;
use icu_risk_core::logic::vitals::RiskLevel;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    let config = PipelineConfig::from_env();
    log::debug!("Config: {:?}", config);

    // --- Dataset ---
    let records = api::build(config.dataset_size, config.dataset_seed);
    api::export_dataset(&config.dataset_path, &records, config.dataset_format())
        .with_context(|| format!("writing dataset to {}", config.dataset_path.display()))?;

    for col in analytics::summarize(&records) {
        log::info!(
            "{:<17} mean={:>8.3} std={:>7.3} min={:>8.3} p50={:>8.3} max={:>8.3}",
            col.column,
            col.mean,
            col.std,
            col.min,
            col.p50,
            col.max
        );
    }

    let dist = analytics::status_distribution(&records);
    for status in RiskStatus::ALL {
        log::info!(
            "{:<8} {:>5} ({:.1}%)",
            status.as_str(),
            dist.count(status),
            dist.fraction(status) * 100.0
        );
    }

    // --- Model ---
    api::init(&config);
    let info = api::get_model_info().context("loading risk model")?;
    log::info!(
        "Model: {} (n_estimators={}, max_depth={:?}, random_state={:?})",
        info.model_type,
        info.n_estimators,
        info.max_depth,
        info.random_state
    );

    for row in api::get_feature_importances()? {
        log::info!("  {:<17} {:.3}", row.feature, row.importance);
    }

    let eval = evaluate_predictor(api::predictor(), &records)?;
    log::info!("Fit on generated dataset: R2={:.3} MAE={:.4}", eval.r2, eval.mae);

    // --- Live simulation ---
    let mut rng = StdRng::from_entropy();
    let session = MonitorSession::new(DEFAULT_PATIENT_ID, RiskLevel::Normal, config.buffer_size);

    for level in RiskLevel::ALL {
        session.set_risk_level(level);

        for _ in 0..config.sim_ticks {
            let entry = session.tick(&mut rng, api::predictor())?;
            let v = entry.snapshot.vitals;
            log::info!(
                "[{}] HR={:.0} SpO2={:.1} T={:.1} BP={:.0} RR={:.0} -> {:.3} {}",
                level,
                v.heart_rate,
                v.oxygen_level,
                v.temperature,
                v.blood_pressure,
                v.respiratory_rate,
                entry.assessment.risk_score,
                entry.assessment.status
            );

            if entry.assessment.status == RiskStatus::Critical {
                log::warn!("{}", entry.assessment.status.advisory());
            }

            std::thread::sleep(config.refresh_interval);
        }
    }

    let window = session.window_distribution();
    log::info!(
        "Window ({} readings): {} safe, {} warning, {} critical",
        window.total(),
        window.safe,
        window.warning,
        window.critical
    );

    let status = api::get_pipeline_status();
    if let Some(model) = status.model {
        log::info!(
            "{} predictions, avg latency {:.1} us",
            model.inference_count,
            model.avg_latency_us
        );
    }

    Ok(())
}
