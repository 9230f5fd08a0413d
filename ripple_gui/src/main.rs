//! # Carbon Ripples GUI
//!
//! Desktop front-end for the emissions measurement form, built with Iced.
//! All form behaviour lives in [`ripple_core::MeasurementForm`]; this crate
//! only renders it and turns widget events into controller calls.

mod ui;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use iced::widget::{column, container, scrollable, stack, Space};
use iced::{Element, Length, Subscription, Task};
use tracing_subscriber::EnvFilter;

use ripple_core::notification::NotificationTicket;
use ripple_core::{Decision, Field, FieldEdit, FormConfig, FormError, Industry, MeasurementForm, Scope};

/// How often an open notification checks its deadline
const NOTIFICATION_POLL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "ripple_gui", version, about = "Carbon Ripples emissions measurement form")]
struct Args {
    /// JSON file with form settings
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum Message {
    IndustrySelected(Industry),
    ScopeToggled(Scope),
    /// Text typed into a free-entry field
    InputChanged(Field, String),
    /// Option picked in a dropdown
    ChoiceSelected(FieldEdit),
    Save,
    Reset,
    ConfirmAccepted,
    ConfirmDeclined,
    NotificationClosed(NotificationTicket),
    Tick(Instant),
}

pub struct App {
    pub form: MeasurementForm,
    /// Last rejected action, shown next to the form buttons
    pub error: Option<String>,
}

impl App {
    fn boot(config: FormConfig) -> (Self, Task<Message>) {
        let app = App {
            form: MeasurementForm::new(config),
            error: None,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.form.industry() {
            Some(industry) => format!("Carbon Ripples - {}", industry),
            None => "Carbon Ripples".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let result = match message {
            Message::IndustrySelected(industry) => self.form.select_industry(industry).map(drop),
            Message::ScopeToggled(scope) => self.form.toggle_scope(scope).map(drop),
            Message::InputChanged(field, raw) => match FieldEdit::input(field, raw) {
                Some(edit) => self.form.edit(edit),
                None => {
                    tracing::warn!(%field, "text entered for a choice field");
                    Ok(())
                }
            },
            Message::ChoiceSelected(edit) => self.form.edit(edit),
            Message::Save => self.form.save(Instant::now()).map(drop),
            Message::Reset => self.form.request_reset().map(drop),
            Message::ConfirmAccepted => self.form.resolve(Decision::Accept).map(drop),
            Message::ConfirmDeclined => self.form.resolve(Decision::Decline).map(drop),
            Message::NotificationClosed(ticket) => {
                self.form.dismiss_notification(ticket);
                Ok(())
            }
            Message::Tick(now) => {
                self.form.tick(now);
                return Task::none();
            }
        };

        self.report(result);
        Task::none()
    }

    fn report(&mut self, result: Result<(), FormError>) {
        match result {
            Ok(()) => self.error = None,
            Err(e) => {
                tracing::warn!(code = e.error_code(), "{}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let layout = self.form.layout();

        let mut form = column![
            ui::industry_selection::view(self.form.industry()),
            ui::scope_selection::view(self.form.scopes()),
        ]
        .spacing(24);

        if layout.scope_warning {
            form = form.push(ui::scope_selection::view_warning());
        }
        form = form.push(ui::common_section::view(&layout, self.form.data()));
        if let Some(industry_section) = ui::industry_section::view(&layout, self.form.data()) {
            form = form.push(industry_section);
        }
        form = form.push(ui::actions::view(self.error.as_deref()));

        let page = column![
            ui::shell::view_header(),
            Space::new().height(24),
            ui::shell::view_card(form.into()),
            Space::new().height(32),
            ui::shell::view_footer(),
        ]
        .padding(24)
        .max_width(960.0);

        let base = container(scrollable(
            container(page).width(Length::Fill).center_x(Length::Fill),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(ui::shell::page_background);

        let mut layers = stack![base];
        if let Some(notification) = self.form.notification() {
            layers = layers.push(ui::notification::view(notification));
        }
        if let Some(confirmation) = self.form.pending() {
            layers = layers
                .push(ui::modal::view_backdrop())
                .push(ui::modal::view_confirmation(confirmation));
        }
        layers.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.form.notification().is_some() {
            iced::time::every(NOTIFICATION_POLL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = match FormConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}; using default settings", e);
            FormConfig::default()
        }
    };

    iced::application(move || App::boot(config.clone()), App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .window_size((1024.0, 900.0))
        .run()
}
