use iced::widget::{Container, Row, Text};
use iced::{Element, Font, Length};

use crate::client::models::messages::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn emoji(&self) -> &'static str {
        match self.level {
            LogLevel::Success => "✅",
            LogLevel::Error => "❌",
            LogLevel::Info => "ℹ️",
        }
    }

    pub fn color(&self) -> iced::Color {
        match self.level {
            LogLevel::Success => iced::Color::from_rgb(0.1, 0.6, 0.35),
            LogLevel::Error => iced::Color::from_rgb(0.8, 0.2, 0.2),
            LogLevel::Info => iced::Color::from_rgb(0.15, 0.45, 0.75),
        }
    }
}

/// Renders the newest entry as a colored bar across the top of the screen.
pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    if let Some(log) = messages.last() {
        let bg_color = log.color();
        Container::new(
            Row::new()
                .spacing(10)
                .push(
                    Text::new(log.emoji())
                        .font(Font::with_name("Segoe UI Emoji"))
                        .size(18)
                        .style(iced::Color::WHITE),
                )
                .push(Text::new(&log.message).size(16).style(iced::Color::WHITE)),
        )
        .padding([10, 14])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            move |_: &iced::Theme| iced::widget::container::Appearance {
                background: Some(iced::Background::Color(bg_color)),
                text_color: Some(iced::Color::WHITE),
                border: iced::Border {
                    radius: 6.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        )))
        .into()
    } else {
        iced::widget::Space::new(Length::Fill, Length::Fixed(0.0)).into()
    }
}
