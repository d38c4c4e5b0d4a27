//! Grading scale section
//!
//! Scale picker, the custom scale field (Custom only), and the
//! Calculate / Reset buttons.

use iced::widget::{button, column, pick_list, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use cgpa_core::{CgpaForm, GradingScale};

use crate::Message;
use super::shared::fields::{labeled_input, LABEL_WIDTH};

/// Render the scale picker and action buttons
pub fn view(form: &CgpaForm) -> Element<'_, Message> {
    let picker = row![
        text("Grading scale:").size(12).width(Length::Fixed(LABEL_WIDTH)),
        pick_list(
            &GradingScale::ALL[..],
            Some(form.scale()),
            Message::ScaleSelected
        )
        .placeholder("Select Grading Scale")
        .width(Length::Fill)
        .text_size(12),
    ]
    .align_y(Alignment::Center);

    let custom: Element<'_, Message> = if form.scale().is_custom() {
        labeled_input(
            "Custom scale:",
            "Enter custom scale (e.g., 5.0)",
            form.custom_scale(),
            Message::CustomScaleChanged,
        )
    } else {
        Space::new().height(0).into()
    };

    let actions = row![
        button(text("Calculate CGPA").size(13).width(Length::Fill).center())
            .on_press(Message::Calculate)
            .padding(Padding::from([8, 12]))
            .width(Length::Fill)
            .style(button::primary),
        button(text("Reset").size(13).width(Length::Fill).center())
            .on_press(Message::Reset)
            .padding(Padding::from([8, 12]))
            .width(Length::Fill)
            .style(button::secondary),
    ]
    .spacing(8);

    column![picker, custom, Space::new().height(4), actions]
        .spacing(6)
        .into()
}
