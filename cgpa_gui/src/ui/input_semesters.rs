//! Input view for Method 1: one SGPA per semester
//!
//! Displays:
//! - One text field per semester entry
//! - A remove button on entries the form allows to be removed
//! - An "Add Semester" button

use iced::widget::{button, column, row, text, text_input, Column, Space};
use iced::{Alignment, Length, Padding};

use cgpa_core::SemesterList;

use crate::Message;

/// Render the per-semester editor
pub fn view(semesters: &SemesterList) -> Column<'_, Message> {
    let mut entry_rows: Column<'_, Message> = column![].spacing(6);

    for (i, sgpa) in semesters.entries().iter().enumerate() {
        let input = text_input(&format!("SGPA for Semester {}", i + 1), sgpa)
            .on_input(move |s| Message::SemesterChanged(i, s))
            .on_submit(Message::Calculate)
            .width(Length::Fill)
            .padding(6)
            .size(12);

        // Only entries past the first two get a delete button
        let remove: iced::Element<'_, Message> = if semesters.is_removable(i) {
            button(text("Remove").size(11))
                .on_press(Message::RemoveSemester(i))
                .padding(Padding::from([4, 8]))
                .style(button::danger)
                .into()
        } else {
            Space::new().width(Length::Fixed(64.0)).into()
        };

        entry_rows = entry_rows.push(row![input, remove].spacing(6).align_y(Alignment::Center));
    }

    column![
        text("Please enter your SGPA for each semester.")
            .size(12)
            .color([0.5, 0.5, 0.5]),
        Space::new().height(4),
        entry_rows,
        Space::new().height(4),
        button(text("+ Add Semester").size(12))
            .on_press(Message::AddSemester)
            .padding(Padding::from([6, 12])),
    ]
    .spacing(6)
}
