//! Terminal User Interface module
//!
//! Interactive review of one month using ratatui. Each open menu is drawn as
//! a box cascading from the one it was opened from.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

pub mod views;

pub mod dialogs;

pub mod layout;

pub mod keybindings;

pub use app::App;
pub use terminal::run_review;
