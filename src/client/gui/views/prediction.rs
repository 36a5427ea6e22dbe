use iced::widget::{Button, Column, Container, PickList, Row, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::logger::logger_view;
use crate::client::gui::widgets::result_panel;
use crate::client::models::app_state::{PredictorAppState, COMPANY_PLACEHOLDER};
use crate::client::models::company::Company;
use crate::client::models::messages::Message;

// Dark charcoal palette with a market-green accent
const BG_MAIN: Color = Color::from_rgb(0.09, 0.10, 0.12);
const CARD_BG: Color = Color::from_rgb(0.14, 0.15, 0.18);
const INPUT_BG: Color = Color::from_rgb(0.10, 0.11, 0.14);
const ACCENT_COLOR: Color = Color::from_rgb(0.15, 0.75, 0.45);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.65, 0.68, 0.72);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 3.0),
            blur_radius: 10.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        },
    }
}

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.28, 0.30, 0.34),
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// One labeled numeric field of the form.
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
    submit: Message,
) -> Element<'a, Message> {
    Column::new()
        .spacing(6)
        .width(Length::Fill)
        .push(Text::new(label).size(13).style(TEXT_SECONDARY))
        .push(
            Container::new(
                TextInput::new(placeholder, value)
                    .on_input(on_input)
                    .on_submit(submit)
                    .width(Length::Fill)
                    .padding(10)
                    .size(14),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        )
        .into()
}

pub fn view(state: &PredictorAppState) -> Element<Message> {
    let submit_enabled = state.submit_enabled();
    // Pressing Enter in a field submits, same as the button
    let enter_submit = if submit_enabled {
        Message::SubmitPrediction
    } else {
        Message::None
    };

    let logger_bar = if state.logger.is_empty() {
        Container::new(Space::new(Length::Fill, Length::Fixed(0.0))).width(Length::Fill)
    } else {
        Container::new(logger_view(&state.logger))
            .width(Length::Fill)
            .padding([8, 12, 0, 12])
    };

    let title = Text::new("StockTeller")
        .size(36)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);
    let subtitle = Text::new("Stock Close Price Prediction")
        .size(15)
        .style(TEXT_SECONDARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let company_field = Column::new()
        .spacing(6)
        .push(Text::new("Company").size(13).style(TEXT_SECONDARY))
        .push(
            Container::new(
                PickList::new(
                    Company::all(),
                    state.selected_company,
                    Message::CompanySelected,
                )
                .placeholder(COMPANY_PLACEHOLDER)
                .width(Length::Fill)
                .padding(10),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    // The mirror of the dropdown; empty until something real is picked
    let status_line: Element<Message> = if state.status_line.is_empty() {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    } else {
        Text::new(&state.status_line)
            .size(14)
            .style(ACCENT_COLOR)
            .into()
    };

    let price_row = Row::new()
        .spacing(16)
        .push(labeled_input(
            "Open",
            "e.g. 229.52",
            &state.open_input,
            Message::OpenChanged,
            enter_submit.clone(),
        ))
        .push(labeled_input(
            "High",
            "e.g. 233.13",
            &state.high_input,
            Message::HighChanged,
            enter_submit.clone(),
        ));

    let volume_row = Row::new()
        .spacing(16)
        .push(labeled_input(
            "Low",
            "e.g. 228.60",
            &state.low_input,
            Message::LowChanged,
            enter_submit.clone(),
        ))
        .push(labeled_input(
            "Volume",
            "e.g. 38328800",
            &state.volume_input,
            Message::VolumeChanged,
            enter_submit,
        ));

    let submit_button = if submit_enabled {
        Button::new(
            Container::new(
                Text::new("Predict Close Price")
                    .font(BOLD_FONT)
                    .size(16)
                    .style(TEXT_PRIMARY),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::SubmitPrediction)
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding(14)
    } else {
        Button::new(
            Container::new(
                Text::new("Predict Close Price")
                    .size(16)
                    .style(TEXT_SECONDARY),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding(14)
    };

    let loading_element: Element<Message> = if state.loading {
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(
                Text::new("Waiting for the prediction server...")
                    .size(13)
                    .style(TEXT_SECONDARY),
            )
            .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    let result_element: Element<Message> = match &state.prediction {
        Some(outcome) => Container::new(result_panel::view(outcome))
            .width(Length::Fill)
            .padding([12, 0, 0, 0])
            .into(),
        None => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
    };

    let card_content = Column::new()
        .width(Length::Fixed(460.0))
        .spacing(18)
        .padding(28)
        .push(
            Column::new()
                .spacing(6)
                .align_items(Alignment::Center)
                .width(Length::Fill)
                .push(title)
                .push(subtitle),
        )
        .push(company_field)
        .push(status_line)
        .push(price_row)
        .push(volume_row)
        .push(submit_button)
        .push(loading_element)
        .push(result_element);

    let card = Container::new(card_content)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let main_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(logger_bar)
        .push(
            Container::new(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x()
                .center_y(),
        );

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
