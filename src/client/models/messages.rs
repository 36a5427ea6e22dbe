use crate::client::models::company::Company;
use crate::client::models::prediction::PredictionOutcome;

#[derive(Debug, Clone)]
pub enum Message {
    None,
    // Form field edits
    CompanySelected(Company),
    OpenChanged(String),
    HighChanged(String),
    LowChanged(String),
    VolumeChanged(String),
    // Submission lifecycle
    SubmitPrediction,
    PredictionCompleted(PredictionOutcome),
    // Log bar
    ClearLog,
}
