//! Model evaluation against a labelled dataset (display only)

use serde::{Deserialize, Serialize};

use crate::logic::dataset::PatientRecord;
use crate::logic::model::{PredictorError, Regressor, RiskPredictor};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelEvaluation {
    pub samples: usize,
    /// Coefficient of determination of the raw model output
    pub r2: f64,
    pub mae: f64,
    pub rmse: f64,
}

/// Score raw (unclamped) predictions against each record's label
pub fn evaluate(model: &dyn Regressor, records: &[PatientRecord]) -> ModelEvaluation {
    let n = records.len();
    if n == 0 {
        return ModelEvaluation {
            samples: 0,
            r2: f64::NAN,
            mae: f64::NAN,
            rmse: f64::NAN,
        };
    }

    let mean = records.iter().map(|r| r.risk_score).sum::<f64>() / n as f64;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    let mut abs_err = 0.0;
    for record in records {
        let err = record.risk_score - model.predict(&record.features());
        ss_res += err * err;
        abs_err += err.abs();
        ss_tot += (record.risk_score - mean).powi(2);
    }

    // constant labels: perfect fit scores 1, anything else 0
    let r2 = if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else if ss_res == 0.0 {
        1.0
    } else {
        0.0
    };

    ModelEvaluation {
        samples: n,
        r2,
        mae: abs_err / n as f64,
        rmse: (ss_res / n as f64).sqrt(),
    }
}

/// Evaluate the predictor's cached model (loading it if needed)
pub fn evaluate_predictor(
    predictor: &RiskPredictor,
    records: &[PatientRecord],
) -> Result<ModelEvaluation, PredictorError> {
    let model = predictor.model()?;
    Ok(evaluate(model, records))
}
