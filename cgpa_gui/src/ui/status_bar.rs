//! Status Bar (Bottom)
//!
//! Displays the latest form notification:
//! - Calculation succeeded / reset (neutral)
//! - Validation failure (red)
//!
//! Cleared as soon as the user edits an input.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::{Message, StatusLine};

/// Render the status bar
pub fn view_status_bar(status: &StatusLine) -> Element<'_, Message> {
    let message: Element<'_, Message> = match &status.0 {
        Some(s) if s.is_error => text(&s.text).size(11).color([0.8, 0.2, 0.2]).into(),
        Some(s) => text(&s.text).size(11).color([0.2, 0.6, 0.3]).into(),
        None => text("Ready").size(11).color([0.5, 0.5, 0.5]).into(),
    };

    row![
        message,
        Space::new().width(Length::Fill),
        text(format!("v{}", env!("CARGO_PKG_VERSION"))).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
