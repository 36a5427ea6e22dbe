use anyhow::Context;
use log::{debug, info};
use reqwest::Client;

use crate::client::models::prediction::{PredictRequest, PredictResponse};

/// Thin HTTP client for the prediction endpoint. The `reqwest::Client` keeps
/// its connection pool for the lifetime of the app, so one service instance
/// is shared by every submission.
pub struct PredictionService {
    client: Client,
}

impl PredictionService {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// POST the URL-encoded form payload and decode the JSON reply.
    ///
    /// Any transport-level problem (unreachable host, non-2xx status, body
    /// that is not the expected JSON) comes back as an error; the caller
    /// folds all of those into the one generic failure branch.
    pub async fn predict(
        &self,
        endpoint: &str,
        request: &PredictRequest,
    ) -> anyhow::Result<PredictResponse> {
        info!("POST {} (company: {})", endpoint, request.company);
        let response = self
            .client
            .post(endpoint)
            .form(request)
            .send()
            .await
            .with_context(|| format!("request to {} failed", endpoint))?;
        let status = response.status();
        let parsed = response
            .error_for_status()
            .with_context(|| format!("prediction endpoint returned {}", status))?
            .json::<PredictResponse>()
            .await
            .context("prediction reply was not valid JSON")?;
        debug!("prediction reply: success={}", parsed.success);
        Ok(parsed)
    }
}

impl Default for PredictionService {
    fn default() -> Self {
        Self::new()
    }
}
