//! Toolbar component
//!
//! Contains the settings dropdown, the page header (title and description)
//! and the explanatory footer.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the page header with title and description
pub fn view_header() -> Element<'static, Message> {
    column![
        text("SGPA to CGPA & Percentage Calculator").size(26),
        text("Easily calculate your CGPA and percentage using either method.")
            .size(13)
            .color([0.5, 0.5, 0.5]),
    ]
    .spacing(4)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

/// Render the toolbar with the settings dropdown button
pub fn view_toolbar(settings_menu_open: bool) -> Element<'static, Message> {
    // Settings button with dropdown indicator
    let settings_button_text = if settings_menu_open { "Settings ▲" } else { "Settings ▼" };
    let settings_button = button(text(settings_button_text).size(11))
        .on_press(Message::ToggleSettingsMenu)
        .padding(Padding::from([4, 8]))
        .style(if settings_menu_open { button::primary } else { button::secondary });

    row![Space::new().width(Length::Fill), settings_button]
        .padding(Padding::from([4, 0]))
        .align_y(Alignment::Center)
        .into()
}

/// Render the settings dropdown menu
pub fn view_settings_menu(dark_mode: bool) -> Element<'static, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    let dropdown_content = column![
        button(text(theme_label).size(10))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 12]))
            .width(Length::Fill)
            .style(button::secondary),
    ]
    .spacing(2)
    .width(Length::Fixed(130.0));

    row![
        Space::new().width(Length::Fill),
        container(dropdown_content)
            .padding(4)
            .style(container::bordered_box),
    ]
    .into()
}

/// Render the explanatory footer
pub fn view_footer() -> Element<'static, Message> {
    column![
        text(
            "CGPA is calculated by taking the average of all SGPAs. \
             The percentage is then derived based on the selected grading scale."
        )
        .size(11)
        .color([0.5, 0.5, 0.5]),
        text("Disclaimer: Please confirm the calculation method with your institution for accuracy.")
            .size(11)
            .color([0.5, 0.5, 0.5]),
    ]
    .spacing(6)
    .into()
}
