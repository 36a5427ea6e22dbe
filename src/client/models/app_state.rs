use crate::client::gui::views::logger::LogMessage;
use crate::client::models::company::Company;
use crate::client::models::messages::Message;
use crate::client::models::prediction::PredictionOutcome;
use iced::Command;

/// Text of the pick list entry that means "no real selection yet".
pub const COMPANY_PLACEHOLDER: &str = "Select a company";

#[derive(Debug, Clone, Default)]
pub struct PredictorAppState {
    pub selected_company: Option<Company>,
    /// Mirrors the dropdown into a readable line. Written by selection
    /// changes only; a form reset leaves it alone.
    pub status_line: String,
    pub open_input: String,
    pub high_input: String,
    pub low_input: String,
    pub volume_input: String,
    pub loading: bool,
    pub prediction: Option<PredictionOutcome>,
    pub logger: Vec<LogMessage>,
}

impl PredictorAppState {
    /// Handles the synchronous state edits. Submission and completion live in
    /// the app update loop because they dispatch commands.
    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::CompanySelected(company) => {
                self.selected_company = Some(company);
                self.status_line = status_line_for(self.selected_company);
            }
            Message::OpenChanged(value) => self.open_input = value,
            Message::HighChanged(value) => self.high_input = value,
            Message::LowChanged(value) => self.low_input = value,
            Message::VolumeChanged(value) => self.volume_input = value,
            Message::ClearLog => self.logger.clear(),
            _ => {}
        }
        Command::none()
    }

    /// A payload needs a company; the numeric fields may be anything.
    pub fn submit_enabled(&self) -> bool {
        self.selected_company.is_some()
    }

    /// Puts every input back to its default. The status line survives, so the
    /// last selection stays readable next to an emptied form.
    pub fn reset_inputs(&mut self) {
        self.selected_company = None;
        self.open_input.clear();
        self.high_input.clear();
        self.low_input.clear();
        self.volume_input.clear();
    }
}

/// The placeholder selection maps to an empty line, anything else to
/// `Selected Company: {label}`.
pub fn status_line_for(selection: Option<Company>) -> String {
    match selection {
        Some(company) => format!("Selected Company: {}", company),
        None => String::new(),
    }
}
