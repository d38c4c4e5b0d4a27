//! Input view for Method 2: total SGPA and number of semesters

use iced::widget::{column, text, Column, Space};

use cgpa_core::{AggregateField, AggregateInput};

use crate::Message;
use super::shared::fields::labeled_input;

/// Render the aggregate editor
pub fn view(aggregate: &AggregateInput) -> Column<'_, Message> {
    column![
        text("Enter the total sum of all your SGPAs and the total number of semesters.")
            .size(12)
            .color([0.5, 0.5, 0.5]),
        Space::new().height(4),
        labeled_input(
            "Total SGPA:",
            "Total SGPA",
            &aggregate.total_sgpa,
            |s| Message::AggregateChanged(AggregateField::TotalSgpa, s),
        ),
        labeled_input(
            "Number of Semesters:",
            "Number of Semesters",
            &aggregate.semester_count,
            |s| Message::AggregateChanged(AggregateField::SemesterCount, s),
        ),
    ]
    .spacing(6)
}
