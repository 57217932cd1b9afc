//! Application state for the TUI
//!
//! The App wraps a [`ReviewSession`] with the bits only the terminal needs:
//! the open dialog and a one-line status message.

use crate::config::Settings;
use crate::models::MonthPeriod;
use crate::review::{Command, ReviewOutcome, ReviewSession, Transition};
use crate::services::Classification;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Quitting would drop at least one selection
    ConfirmQuit,
}

/// Main application state
pub struct App<'a> {
    pub session: ReviewSession<'a>,

    /// Month under review
    pub period: MonthPeriod,

    /// Whether the event loop should stop
    pub should_quit: bool,

    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,

    pub currency_symbol: String,
}

impl<'a> App<'a> {
    pub fn new(
        classification: &'a Classification,
        period: MonthPeriod,
        settings: &Settings,
    ) -> Self {
        let session = ReviewSession::new(classification, settings.max_menu_depth)
            .with_description_width(settings.description_width);

        Self {
            session,
            period,
            should_quit: false,
            active_dialog: ActiveDialog::None,
            status_message: None,
            currency_symbol: settings.currency_symbol.clone(),
        }
    }

    /// Forward a command to the session and reflect the result
    pub fn dispatch(&mut self, command: Command) -> Transition {
        let transition = self.session.dispatch(command);

        match transition {
            Transition::Rejected(reason) => self.set_status(reason.to_string()),
            Transition::Terminated(_) => {
                self.clear_status();
                self.should_quit = true;
            }
            _ => self.clear_status(),
        }
        transition
    }

    /// Quit, asking first if selections would be thrown away
    pub fn request_quit(&mut self) {
        if self.session.stack().is_at_root() && self.session.selections().selected_count() > 0 {
            self.open_dialog(ActiveDialog::ConfirmQuit);
        } else {
            self.dispatch(Command::Quit);
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Final decisions; a loop that stopped without a decision counts as a quit
    pub fn outcome(&self) -> ReviewOutcome {
        self.session.outcome().unwrap_or(ReviewOutcome::Cancelled)
    }
}
