//! Labeled form fields

use iced::widget::{row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Width of the label column, so stacked fields line up
pub const LABEL_WIDTH: f32 = 150.0;

/// Helper to create a labeled text input that calculates on Enter
pub fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(12).width(Length::Fixed(LABEL_WIDTH)),
        text_input(placeholder, value)
            .on_input(on_change)
            .on_submit(Message::Calculate)
            .width(Length::Fill)
            .padding(6)
            .size(12),
    ]
    .align_y(Alignment::Center)
    .into()
}
