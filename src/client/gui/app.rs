use iced::{Application, Command, Element, Theme};
use std::sync::Arc;

use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::models::app_state::PredictorAppState;
use crate::client::models::messages::Message;
use crate::client::models::prediction::{PredictRequest, PredictionOutcome};
use crate::client::services::prediction_service::PredictionService;
use crate::config::ClientConfig;

/// How long a completion notice stays in the log bar.
const LOG_BAR_LINGER_MS: u64 = 2500;

pub struct PredictorApp {
    pub state: PredictorAppState,
    pub prediction_service: Arc<PredictionService>,
}

impl Application for PredictorApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let app = PredictorApp {
            state: PredictorAppState::default(),
            prediction_service: Arc::new(PredictionService::new()),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "StockTeller".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::SubmitPrediction => {
                let Some(company) = self.state.selected_company else {
                    return Command::none();
                };
                let cfg = ClientConfig::from_env();
                let endpoint = cfg.predict_url();
                let request = PredictRequest {
                    company: company.to_string(),
                    open: self.state.open_input.clone(),
                    high: self.state.high_input.clone(),
                    low: self.state.low_input.clone(),
                    volume: self.state.volume_input.clone(),
                };
                self.state.loading = true;
                self.state.logger.push(LogMessage {
                    level: LogLevel::Info,
                    message: format!("Requesting prediction for {}...", company),
                });
                let svc = self.prediction_service.clone();
                let cmd = Command::perform(
                    async move {
                        let result = svc.predict(&endpoint, &request).await;
                        PredictionOutcome::from_result(result)
                    },
                    Message::PredictionCompleted,
                );
                // The inputs clear as soon as the request is on the wire; the
                // reply fills the result panel whenever it lands. The status
                // line is not part of the form and stays.
                self.state.reset_inputs();
                return cmd;
            }
            Message::PredictionCompleted(outcome) => {
                self.state.loading = false;
                let log = match &outcome {
                    PredictionOutcome::Predicted { company, .. } => LogMessage {
                        level: LogLevel::Success,
                        message: format!("Prediction ready for {}", company),
                    },
                    PredictionOutcome::Rejected { error } => LogMessage {
                        level: LogLevel::Error,
                        message: format!("Server rejected the request: {}", error),
                    },
                    PredictionOutcome::Unreachable => LogMessage {
                        level: LogLevel::Error,
                        message: "Could not reach the prediction server".to_string(),
                    },
                };
                self.state.logger.push(log);
                // A later response overwrites an earlier one; whichever
                // submission finishes last owns the panel.
                self.state.prediction = Some(outcome);
                return Command::perform(
                    async {
                        tokio::time::sleep(tokio::time::Duration::from_millis(LOG_BAR_LINGER_MS))
                            .await;
                        Message::ClearLog
                    },
                    |msg| msg,
                );
            }
            _ => {}
        }
        self.state.update(message)
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::prediction::view(&self.state)
    }
}
