use std::env;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_host: String,
    pub server_port: u16,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            server_host: env::var("PREDICT_SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("PREDICT_SERVER_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(5000),
        }
    }

    /// Full URL of the prediction endpoint.
    pub fn predict_url(&self) -> String {
        format!("http://{}:{}/predict", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-wide, so the assertions share one test fn instead
    // of racing each other under the parallel test runner.
    #[test]
    fn config_reads_env_with_defaults() {
        std::env::remove_var("PREDICT_SERVER_HOST");
        std::env::remove_var("PREDICT_SERVER_PORT");
        let cfg = ClientConfig::from_env();
        assert_eq!(cfg.server_host, "127.0.0.1");
        assert_eq!(cfg.server_port, 5000);
        assert_eq!(cfg.predict_url(), "http://127.0.0.1:5000/predict");

        std::env::set_var("PREDICT_SERVER_HOST", "predict.internal");
        std::env::set_var("PREDICT_SERVER_PORT", "8080");
        let cfg = ClientConfig::from_env();
        assert_eq!(cfg.predict_url(), "http://predict.internal:8080/predict");

        // unparseable port falls back to the default
        std::env::set_var("PREDICT_SERVER_PORT", "not-a-port");
        let cfg = ClientConfig::from_env();
        assert_eq!(cfg.server_port, 5000);

        std::env::remove_var("PREDICT_SERVER_HOST");
        std::env::remove_var("PREDICT_SERVER_PORT");
    }
}
