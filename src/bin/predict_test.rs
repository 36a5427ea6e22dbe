use stockteller::client::models::prediction::{PredictRequest, PredictionOutcome};
use stockteller::client::services::prediction_service::PredictionService;
use stockteller::config::ClientConfig;

/// Terminal probe for a running prediction server: sends one request and
/// prints the outcome. Usage: predict_test [company] [open high low volume]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let cfg = ClientConfig::from_env();
    let endpoint = cfg.predict_url();
    println!("Using endpoint {}", endpoint);

    let mut args = std::env::args().skip(1);
    let company = args.next().unwrap_or_else(|| "Apple".to_string());
    let open = args.next().unwrap_or_else(|| "229.52".to_string());
    let high = args.next().unwrap_or_else(|| "233.13".to_string());
    let low = args.next().unwrap_or_else(|| "228.60".to_string());
    let volume = args.next().unwrap_or_else(|| "38328800".to_string());

    let request = PredictRequest {
        company,
        open,
        high,
        low,
        volume,
    };
    println!("REQUEST -> {}", serde_json::to_string(&request)?);

    let svc = PredictionService::new();
    let result = svc.predict(&endpoint, &request).await;
    match PredictionOutcome::from_result(result) {
        PredictionOutcome::Predicted {
            company,
            predicted_close,
        } => println!("PREDICTED -> {} closes at ${:.2}", company, predicted_close),
        PredictionOutcome::Rejected { error } => println!("REJECTED -> {}", error),
        PredictionOutcome::Unreachable => println!("UNREACHABLE -> no usable response"),
    }

    Ok(())
}
