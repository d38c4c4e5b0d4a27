//! # SGPA2CGPA GUI Application
//!
//! Single-page form for converting semester SGPAs into a CGPA and percentage.
//! Built with the Iced framework for cross-platform support (Windows, macOS,
//! Linux, WASM).
//!
//! All calculator state lives in one [`CgpaForm`]; this crate only maps
//! widget events onto form operations and shows the form's notifications in
//! the status bar.

mod ui;

use iced::widget::{column, container, rule, scrollable, Space};
use iced::{Element, Length, Task, Theme};

use cgpa_core::{AggregateField, CgpaForm, FormEvent, FormObserver, GradingScale, InputMethod};

/// Session settings toggled from the settings menu. Not persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppSettings {
    pub dark_mode: bool,
}

/// Latest notification shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

/// Status bar contents. Receives form notifications.
#[derive(Debug, Clone, Default)]
pub struct StatusLine(pub Option<Status>);

impl StatusLine {
    pub fn clear(&mut self) {
        self.0 = None;
    }
}

impl FormObserver for StatusLine {
    fn notify(&mut self, event: &FormEvent) {
        self.0 = Some(Status {
            text: event.message(),
            is_error: event.is_error(),
        });
    }
}

/// Application state
#[derive(Debug, Default)]
pub struct App {
    pub form: CgpaForm,
    pub status: StatusLine,
    pub settings: AppSettings,
    pub settings_menu_open: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Method tabs
    MethodSelected(InputMethod),

    // Per-semester entries
    SemesterChanged(usize, String),
    AddSemester,
    RemoveSemester(usize),

    // Aggregate fields
    AggregateChanged(AggregateField, String),

    // Grading scale
    ScaleSelected(GradingScale),
    CustomScaleChanged(String),

    // Actions
    Calculate,
    Reset,

    // Settings
    ToggleSettingsMenu,
    ToggleDarkMode,
}

impl App {
    fn new() -> Self {
        App::default()
    }

    fn title(&self) -> String {
        "SGPA to CGPA Calculator".to_string()
    }

    fn theme(&self) -> Theme {
        if self.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MethodSelected(method) => {
                self.form.set_method(method);
                self.status.clear();
            }
            Message::SemesterChanged(index, text) => {
                self.form.update_semester_entry(index, text);
                self.status.clear();
            }
            Message::AddSemester => {
                self.form.add_semester_entry();
                self.status.clear();
            }
            Message::RemoveSemester(index) => {
                self.form.remove_semester_entry(index);
                self.status.clear();
            }
            Message::AggregateChanged(field, text) => {
                self.form.set_aggregate_field(field, text);
                self.status.clear();
            }
            Message::ScaleSelected(scale) => {
                self.form.set_scale(scale);
                self.status.clear();
            }
            Message::CustomScaleChanged(text) => {
                self.form.set_custom_scale(text);
                self.status.clear();
            }
            Message::Calculate => {
                // Success is kept on the form; both outcomes reach the status line
                if let Err(err) = self.form.calculate_notify(&mut self.status) {
                    tracing::debug!(code = err.error_code(), "calculation rejected");
                }
            }
            Message::Reset => {
                self.form.reset_notify(&mut self.status);
            }
            Message::ToggleSettingsMenu => {
                self.settings_menu_open = !self.settings_menu_open;
            }
            Message::ToggleDarkMode => {
                self.settings.dark_mode = !self.settings.dark_mode;
                self.settings_menu_open = false;
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let settings_menu: Element<'_, Message> = if self.settings_menu_open {
            ui::toolbar::view_settings_menu(self.settings.dark_mode)
        } else {
            Space::new().height(0).into()
        };

        let content = column![
            ui::toolbar::view_toolbar(self.settings_menu_open),
            settings_menu,
            ui::toolbar::view_header(),
            Space::new().height(12),
            ui::input_panel::view_input_panel(&self.form),
            Space::new().height(12),
            ui::input_scale::view(&self.form),
            ui::results_panel::view_results_panel(self.form.result()),
            Space::new().height(12),
            ui::toolbar::view_footer(),
            rule::horizontal(1),
            ui::status_bar::view_status_bar(&self.status),
        ]
        .spacing(6)
        .padding(16)
        .max_width(720);

        container(scrollable(content))
            .center_x(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

fn main() -> iced::Result {
    init_logging();
    tracing::debug!("starting GUI");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size((760.0, 820.0))
        .run()
}
