//! Input Panel
//!
//! Method tabs on top, then dispatches to the editor for the active method:
//! - PerSemester -> input_semesters
//! - Aggregate -> input_aggregate
//!
//! Both editors read straight from the form, so switching tabs never loses text.

use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Element, Length, Padding};

use cgpa_core::{CgpaForm, InputMethod};

use crate::Message;
use super::{input_aggregate, input_semesters};

/// Render the method tabs and the active method's editor
pub fn view_input_panel(form: &CgpaForm) -> Element<'_, Message> {
    let editor: Column<'_, Message> = match form.method() {
        InputMethod::PerSemester => input_semesters::view(form.semesters()),
        InputMethod::Aggregate => input_aggregate::view(form.aggregate()),
    };

    column![
        view_tabs(form.method()),
        container(editor.padding(8))
            .width(Length::Fill)
            .style(container::bordered_box)
            .padding(5),
    ]
    .spacing(8)
    .into()
}

/// One button per input method; the active one is highlighted
fn view_tabs(active: InputMethod) -> Element<'static, Message> {
    let mut tabs: Row<'static, Message> = row![].spacing(4);

    for method in InputMethod::ALL {
        tabs = tabs.push(
            button(text(method.display_name()).size(12).width(Length::Fill).center())
                .on_press(Message::MethodSelected(method))
                .padding(Padding::from([6, 12]))
                .width(Length::Fill)
                .style(if method == active { button::primary } else { button::secondary }),
        );
    }

    tabs.into()
}
