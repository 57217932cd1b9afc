//! Interactive review of classified transactions
//!
//! A review walks a [`MenuTree`] through a bounded [`NavigationStack`] and
//! collects per-item [`Selections`] for the unknown partition.

pub mod menu;
pub mod selection;
pub mod session;
pub mod stack;

pub use menu::{Entry, ItemRef, Menu, MenuId, MenuTree};
pub use selection::Selections;
pub use session::{
    Command, EntryKind, EntryView, FrameView, Rejection, ReviewOutcome, ReviewSession,
    SessionEnd, SessionState, Transition,
};
pub use stack::{Frame, NavigationStack, StackLimit, DEFAULT_MAX_DEPTH};
