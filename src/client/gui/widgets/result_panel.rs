use iced::widget::{Column, Text};
use iced::{Color, Element, Font};

use crate::client::models::messages::Message;
use crate::client::models::prediction::{PredictionOutcome, UNREACHABLE_MESSAGE};

const HEADING_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const PRICE_COLOR: Color = Color::from_rgb(0.15, 0.75, 0.45);
const ERROR_COLOR: Color = Color::from_rgb(0.95, 0.3, 0.3);

/// Fixed-point, exactly two decimals, literal `$`, no separators.
pub fn format_close_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Renders one finished submission into the panel under the form.
pub fn view(outcome: &PredictionOutcome) -> Element<'_, Message> {
    match outcome {
        PredictionOutcome::Predicted {
            company,
            predicted_close,
        } => Column::new()
            .spacing(8)
            .push(
                Text::new(format!("{} Stock Price Prediction", company))
                    .size(24)
                    .font(HEADING_FONT),
            )
            .push(
                Text::new(format!(
                    "Predicted Close Price: {}",
                    format_close_price(*predicted_close)
                ))
                .size(16)
                .style(PRICE_COLOR),
            )
            .into(),
        PredictionOutcome::Rejected { error } => Text::new(format!("Error: {}", error))
            .size(16)
            .style(ERROR_COLOR)
            .into(),
        PredictionOutcome::Unreachable => Text::new(format!("Error: {}", UNREACHABLE_MESSAGE))
            .size(16)
            .style(ERROR_COLOR)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_keeps_exactly_two_decimals() {
        assert_eq!(format_close_price(123.4), "$123.40");
        assert_eq!(format_close_price(123.0), "$123.00");
        assert_eq!(format_close_price(0.5), "$0.50");
    }

    #[test]
    fn price_rounds_fixed_point() {
        assert_eq!(format_close_price(123.456), "$123.46");
        assert_eq!(format_close_price(99.999), "$100.00");
    }

    #[test]
    fn price_has_no_separators_or_exponent() {
        assert_eq!(format_close_price(1234567.891), "$1234567.89");
    }
}
