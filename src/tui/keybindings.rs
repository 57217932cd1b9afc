//! Keybinding definitions
//!
//! Single table of shortcuts, used by the help dialog.

use crossterm::event::KeyCode;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// Keys that trigger the action
    pub keys: &'static [KeyCode],
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Moving through and acting on menus
    Menu,
    /// Leaving the review
    Session,
    /// The quit confirmation dialog
    Dialog,
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    Keybinding {
        keys: &[KeyCode::Up, KeyCode::Char('k')],
        description: "Move up",
        context: KeyContext::Menu,
    },
    Keybinding {
        keys: &[KeyCode::Down, KeyCode::Char('j')],
        description: "Move down",
        context: KeyContext::Menu,
    },
    Keybinding {
        keys: &[KeyCode::Enter],
        description: "Open submenu, toggle item or finish",
        context: KeyContext::Menu,
    },
    Keybinding {
        keys: &[KeyCode::Char(' ')],
        description: "Toggle unknown item",
        context: KeyContext::Menu,
    },
    Keybinding {
        keys: &[KeyCode::Esc, KeyCode::Backspace],
        description: "Back to previous menu",
        context: KeyContext::Menu,
    },
    Keybinding {
        keys: &[KeyCode::Char('d')],
        description: "Done: confirm selections",
        context: KeyContext::Session,
    },
    Keybinding {
        keys: &[KeyCode::Char('q')],
        description: "Quit from main menu, discarding selections",
        context: KeyContext::Session,
    },
    Keybinding {
        keys: &[KeyCode::Char('?')],
        description: "Show/hide help",
        context: KeyContext::Session,
    },
    Keybinding {
        keys: &[KeyCode::Char('y')],
        description: "Confirm",
        context: KeyContext::Dialog,
    },
    Keybinding {
        keys: &[KeyCode::Char('n'), KeyCode::Esc],
        description: "Cancel",
        context: KeyContext::Dialog,
    },
];

/// Keybindings for a context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

fn format_key(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        other => format!("{:?}", other),
    }
}

/// Format a keybinding's keys for display, e.g. "↑/k"
pub fn format_keybinding(kb: &Keybinding) -> String {
    kb.keys.iter().map(format_key).collect::<Vec<_>>().join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keybinding() {
        let up = get_keybindings(KeyContext::Menu)[0];
        assert_eq!(format_keybinding(up), "↑/k");

        let toggle = KEYBINDINGS
            .iter()
            .find(|kb| kb.description.starts_with("Toggle"))
            .unwrap();
        assert_eq!(format_keybinding(toggle), "Space");
    }

    #[test]
    fn test_every_context_has_bindings() {
        for context in [KeyContext::Menu, KeyContext::Session, KeyContext::Dialog] {
            assert!(!get_keybindings(context).is_empty());
        }
    }
}
