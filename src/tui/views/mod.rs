//! TUI Views module

pub mod menu;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::ReviewLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = ReviewLayout::new(frame.area());

    menu::render(frame, app, layout.menus);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::ConfirmQuit => {
            dialogs::confirm::render(frame, app.session.selections().selected_count())
        }
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Money, MonthPeriod, Transaction};
    use crate::review::Command;
    use crate::rules::RuleSet;
    use crate::services::classify;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_cascade() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        let classification = classify(
            vec![Transaction::new(day, "Coffee Shop", Money::from_cents(450))],
            &RuleSet::default(),
        );
        let mut app = App::new(
            &classification,
            MonthPeriod::new(2025, 1).unwrap(),
            &Settings::default(),
        );
        app.dispatch(Command::Down);
        app.dispatch(Command::Down);
        app.dispatch(Command::Activate);
        app.dispatch(Command::Toggle);

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Main Menu"));
        assert!(text.contains("[x] 2025-01-09, Coffee Shop"));
        assert!(text.contains("January 2025"));
        assert!(text.contains("Depth 2/4"));
        assert!(text.contains("1 selected"));
    }
}
