//! Event handler for the TUI
//!
//! Turns key presses into review commands, or routes them to the open
//! dialog.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::review::Command;

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        // the next draw picks up the new size
        Event::Resize(_, _) => Ok(()),
    }
}

/// Map a key to a review command
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::Down),
        KeyCode::Enter => Some(Command::Activate),
        KeyCode::Char(' ') => Some(Command::Toggle),
        KeyCode::Esc | KeyCode::Backspace => Some(Command::Back),
        KeyCode::Char('d') => Some(Command::Done),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    if key.code == KeyCode::Char('?') {
        app.open_dialog(ActiveDialog::Help);
        return Ok(());
    }

    match key_to_command(key) {
        Some(Command::Quit) => app.request_quit(),
        Some(command) => {
            app.dispatch(command);
        }
        None => {}
    }
    Ok(())
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::ConfirmQuit => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.close_dialog();
                app.dispatch(Command::Quit);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
            }
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Money, MonthPeriod, Transaction};
    use crate::review::ReviewOutcome;
    use crate::rules::RuleSet;
    use crate::services::{classify, Classification};
    use chrono::NaiveDate;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn classification() -> Classification {
        let day = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        classify(
            vec![Transaction::new(day, "Coffee Shop", Money::from_cents(450))],
            &RuleSet::default(),
        )
    }

    #[test]
    fn test_key_mapping() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(key_to_command(key(KeyCode::Char('j'))), Some(Command::Down));
        assert_eq!(key_to_command(key(KeyCode::Enter)), Some(Command::Activate));
        assert_eq!(key_to_command(key(KeyCode::Backspace)), Some(Command::Back));
        assert_eq!(key_to_command(key(KeyCode::Char('x'))), None);
        assert_eq!(
            key_to_command(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_select_and_finish_with_keys() {
        let c = classification();
        let mut app = App::new(&c, MonthPeriod::new(2025, 1).unwrap(), &Settings::default());

        for code in [
            KeyCode::Down,
            KeyCode::Char('j'),
            KeyCode::Enter,
            KeyCode::Char(' '),
            KeyCode::Char('d'),
        ] {
            press(&mut app, code);
        }

        assert!(app.should_quit);
        assert!(app.outcome().is_confirmed());
        assert_eq!(app.session.selected_total(), Money::from_cents(450));
    }

    #[test]
    fn test_confirm_dialog_flow() {
        let c = classification();
        let mut app = App::new(&c, MonthPeriod::new(2025, 1).unwrap(), &Settings::default());

        for code in [KeyCode::Down, KeyCode::Down, KeyCode::Enter, KeyCode::Char(' '), KeyCode::Esc] {
            press(&mut app, code);
        }

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmQuit);

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
        assert_eq!(app.outcome(), ReviewOutcome::Cancelled);
    }

    #[test]
    fn test_help_dialog_swallows_keys() {
        let c = classification();
        let mut app = App::new(&c, MonthPeriod::new(2025, 1).unwrap(), &Settings::default());

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);

        press(&mut app, KeyCode::Char('d'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
    }
}
