//! Results Panel
//!
//! Shows CGPA and percentage once the form holds a result. Empty otherwise;
//! errors go to the status bar.

use iced::widget::{column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use cgpa_core::CalculationResult;

use crate::Message;

/// Render the results card, or nothing when there is no current result
pub fn view_results_panel(result: Option<&CalculationResult>) -> Element<'_, Message> {
    let Some(result) = result else {
        return Space::new().height(0).into();
    };

    let card = column![
        text("Your Results").size(20),
        Space::new().height(8),
        row![
            view_figure("CGPA", result.cgpa.to_string()),
            view_figure("Percentage", format!("{}%", result.percentage)),
        ]
        .spacing(16),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill);

    column![
        Space::new().height(12),
        container(card)
            .padding(16)
            .width(Length::Fill)
            .style(container::rounded_box),
    ]
    .into()
}

fn view_figure(label: &'static str, value: String) -> Element<'static, Message> {
    column![text(label).size(14), text(value).size(34)]
        .spacing(4)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
}
