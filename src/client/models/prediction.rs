use serde::{Deserialize, Serialize};

/// Fallback shown when the server rejects a request without saying why.
pub const REJECTED_FALLBACK: &str = "Prediction failed";

/// Fixed line for every transport-level failure; the underlying error never
/// reaches the user.
pub const UNREACHABLE_MESSAGE: &str = "Could not reach the server. Please try again later.";

/// Form payload for the prediction endpoint. The numeric fields travel as the
/// raw text the user typed; the server owns numeric validation.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub company: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub volume: String,
}

/// JSON reply from `/predict`. `success` gates which of the other fields is
/// meaningful.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub predicted_close: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What a finished submission means for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Predicted { company: String, predicted_close: f64 },
    Rejected { error: String },
    Unreachable,
}

impl PredictionOutcome {
    /// Folds the service result into the three render branches.
    pub fn from_result(result: anyhow::Result<PredictResponse>) -> Self {
        match result {
            Ok(response) => Self::from_response(response),
            Err(_) => PredictionOutcome::Unreachable,
        }
    }

    fn from_response(response: PredictResponse) -> Self {
        if response.success {
            // A success reply missing its payload is malformed; there is
            // nothing meaningful to render, so it lands in the generic branch.
            match (response.company, response.predicted_close) {
                (Some(company), Some(predicted_close)) => PredictionOutcome::Predicted {
                    company,
                    predicted_close,
                },
                _ => PredictionOutcome::Unreachable,
            }
        } else {
            PredictionOutcome::Rejected {
                error: response.error.unwrap_or_else(|| REJECTED_FALLBACK.to_string()),
            }
        }
    }
}
