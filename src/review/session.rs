//! Interactive review session
//!
//! The session owns the navigation stack and the selection state for the
//! unknown partition. Every input goes through [`ReviewSession::dispatch`],
//! which applies at most one transition and reports what happened.
//!
//! The classified partitions are borrowed immutably for the whole session,
//! so nothing the user does here can change them; decisions only reach the
//! joint partition later, through the reconciler.

use std::fmt;

use crate::display::format_transaction_line;
use crate::models::{ItemId, Money, Tag, Transaction};
use crate::services::Classification;

use super::menu::{Entry, ItemRef, MenuId, MenuTree};
use super::selection::Selections;
use super::stack::{NavigationStack, StackLimit};

/// Discrete inputs understood by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Focus the previous entry of the top frame
    Up,
    /// Focus the next entry of the top frame
    Down,
    /// Open, toggle or finish depending on the focused entry
    Activate,
    /// Toggle the focused unknown item
    Toggle,
    /// Close the top frame
    Back,
    /// Confirm the selections and end the session
    Done,
    /// Leave without confirming; only accepted at the root
    Quit,
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Confirmed,
    Cancelled,
}

/// Coarse session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Root,
    InSubmenu(usize),
    Terminated(SessionEnd),
}

/// Why a command was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MaxDepth,
    AtRoot,
    NotASubmenu,
    NotSelectable,
    NothingFocused,
    QuitOutsideRoot,
    SessionOver,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::MaxDepth => "menu depth limit reached",
            Self::AtRoot => "already at the main menu",
            Self::NotASubmenu => "entry is not a submenu",
            Self::NotSelectable => "entry cannot be selected",
            Self::NothingFocused => "no entry focused",
            Self::QuitOutsideRoot => "quit is only available from the main menu",
            Self::SessionOver => "review already finished",
        };
        write!(f, "{}", reason)
    }
}

/// Result of dispatching one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    CursorMoved(usize),
    Opened { depth: usize },
    Closed { depth: usize },
    Toggled { id: ItemId, selected: bool },
    Terminated(SessionEnd),
    Rejected(Rejection),
}

impl Transition {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Final decisions handed to the reconciler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// `done` fired; selections as they stood at that moment
    Confirmed(Selections),
    /// Quit at the root; every selection is discarded
    Cancelled,
}

impl ReviewOutcome {
    /// Selections the reconciler should apply
    pub fn into_selections(self) -> Selections {
        match self {
            Self::Confirmed(selections) => selections,
            Self::Cancelled => Selections::none(),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }
}

/// How an entry should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Submenu,
    ReadOnly,
    Checkbox { checked: bool },
    Action,
}

/// Renderable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub label: String,
    pub kind: EntryKind,
}

/// Renderable frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    pub title: String,
    pub entries: Vec<EntryView>,
    pub cursor: usize,
    /// Zero-based position in the stack
    pub level: usize,
}

/// State of one review
pub struct ReviewSession<'a> {
    classification: &'a Classification,
    tree: MenuTree,
    stack: NavigationStack,
    selections: Selections,
    end: Option<SessionEnd>,
    description_width: usize,
}

impl<'a> ReviewSession<'a> {
    /// Open a session on the standard review menu
    pub fn new(classification: &'a Classification, max_depth: usize) -> Self {
        Self::with_tree(classification, MenuTree::for_review(classification), max_depth)
    }

    /// Open a session on a custom menu tree
    pub fn with_tree(
        classification: &'a Classification,
        tree: MenuTree,
        max_depth: usize,
    ) -> Self {
        Self {
            classification,
            tree,
            stack: NavigationStack::new(MenuId::ROOT, max_depth),
            selections: Selections::cleared(classification.unknown.len()),
            end: None,
            description_width: 30,
        }
    }

    /// Width used for the description column of item labels
    pub fn with_description_width(mut self, width: usize) -> Self {
        self.description_width = width;
        self
    }

    pub fn state(&self) -> SessionState {
        match self.end {
            Some(end) => SessionState::Terminated(end),
            None if self.stack.is_at_root() => SessionState::Root,
            None => SessionState::InSubmenu(self.stack.depth()),
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.end.is_some()
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selections.is_selected(id)
    }

    /// Sum of the currently checked unknown items
    pub fn selected_total(&self) -> Money {
        self.selections
            .selected_ids()
            .filter_map(|id| self.classification.unknown.get(id))
            .map(|t| t.amount)
            .sum()
    }

    /// Total the report would show if the session were confirmed now
    pub fn projected_total(&self) -> Money {
        self.classification.joint.total() + self.selected_total()
    }

    /// Decisions once the session has ended
    pub fn outcome(&self) -> Option<ReviewOutcome> {
        self.end.map(|end| match end {
            SessionEnd::Confirmed => ReviewOutcome::Confirmed(self.selections.clone()),
            SessionEnd::Cancelled => ReviewOutcome::Cancelled,
        })
    }

    /// Apply one command
    pub fn dispatch(&mut self, command: Command) -> Transition {
        let transition = match command {
            Command::Up => self.move_cursor(-1),
            Command::Down => self.move_cursor(1),
            Command::Activate => self.activate(),
            Command::Toggle => self.toggle_focused(),
            Command::Back => self.back(),
            Command::Done => self.done(),
            Command::Quit => self.quit(),
        };

        if let Transition::Rejected(reason) = transition {
            log::debug!("{:?} rejected: {}", command, reason);
        }
        transition
    }

    /// Open the submenu at `entry` of the top frame
    pub fn open(&mut self, entry: usize) -> Transition {
        if self.end.is_some() {
            return Transition::Rejected(Rejection::SessionOver);
        }

        let top = *self.stack.top();
        let menu = match self.tree.entry(top.menu, entry) {
            Some(Entry::Submenu { menu, .. }) => *menu,
            Some(_) => return Transition::Rejected(Rejection::NotASubmenu),
            None => return Transition::Rejected(Rejection::NothingFocused),
        };

        match self.stack.push(menu) {
            Ok(depth) => {
                self.stack.top_mut().cursor = 0;
                Transition::Opened { depth }
            }
            Err(_) => Transition::Rejected(Rejection::MaxDepth),
        }
    }

    /// Close the top frame
    pub fn back(&mut self) -> Transition {
        if self.end.is_some() {
            return Transition::Rejected(Rejection::SessionOver);
        }
        match self.stack.pop() {
            Ok(_) => Transition::Closed {
                depth: self.stack.depth(),
            },
            Err(StackLimit::AtRoot) | Err(StackLimit::Full) => {
                Transition::Rejected(Rejection::AtRoot)
            }
        }
    }

    /// Flip the selected flag of an unknown item
    pub fn toggle(&mut self, id: ItemId) -> Transition {
        if self.end.is_some() {
            return Transition::Rejected(Rejection::SessionOver);
        }
        match self.selections.toggle(id) {
            Some(selected) => Transition::Toggled { id, selected },
            None => Transition::Rejected(Rejection::NotSelectable),
        }
    }

    /// End the session, keeping the selections
    pub fn done(&mut self) -> Transition {
        if self.end.is_some() {
            return Transition::Rejected(Rejection::SessionOver);
        }
        self.end = Some(SessionEnd::Confirmed);
        log::debug!(
            "Review confirmed with {} of {} unknown items selected",
            self.selections.selected_count(),
            self.selections.len()
        );
        Transition::Terminated(SessionEnd::Confirmed)
    }

    /// End the session from the root, discarding the selections
    pub fn quit(&mut self) -> Transition {
        if self.end.is_some() {
            return Transition::Rejected(Rejection::SessionOver);
        }
        if !self.stack.is_at_root() {
            return Transition::Rejected(Rejection::QuitOutsideRoot);
        }
        self.end = Some(SessionEnd::Cancelled);
        Transition::Terminated(SessionEnd::Cancelled)
    }

    fn move_cursor(&mut self, delta: isize) -> Transition {
        if self.end.is_some() {
            return Transition::Rejected(Rejection::SessionOver);
        }
        let count = self
            .tree
            .get(self.stack.top().menu)
            .map(|menu| menu.entries.len())
            .unwrap_or(0);
        if count == 0 {
            return Transition::Rejected(Rejection::NothingFocused);
        }

        let frame = self.stack.top_mut();
        frame.cursor = if delta < 0 {
            frame.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            (frame.cursor + delta as usize).min(count - 1)
        };
        Transition::CursorMoved(frame.cursor)
    }

    fn focused_entry(&self) -> Option<&Entry> {
        let top = self.stack.top();
        self.tree.entry(top.menu, top.cursor)
    }

    fn activate(&mut self) -> Transition {
        if self.end.is_some() {
            return Transition::Rejected(Rejection::SessionOver);
        }
        let cursor = self.stack.top().cursor;
        match self.focused_entry().cloned() {
            Some(Entry::Submenu { .. }) => self.open(cursor),
            Some(Entry::Item(ItemRef::Selectable(id))) => self.toggle(id),
            Some(Entry::Item(ItemRef::ReadOnly { .. })) => {
                Transition::Rejected(Rejection::NotSelectable)
            }
            Some(Entry::Done { .. }) => self.done(),
            None => Transition::Rejected(Rejection::NothingFocused),
        }
    }

    fn toggle_focused(&mut self) -> Transition {
        if self.end.is_some() {
            return Transition::Rejected(Rejection::SessionOver);
        }
        match self.focused_entry().cloned() {
            Some(Entry::Item(ItemRef::Selectable(id))) => self.toggle(id),
            Some(_) => Transition::Rejected(Rejection::NotSelectable),
            None => Transition::Rejected(Rejection::NothingFocused),
        }
    }

    fn transaction(&self, item: ItemRef) -> Option<&'a Transaction> {
        let classification = self.classification;
        match item {
            ItemRef::Selectable(id) => classification.unknown.get(id),
            ItemRef::ReadOnly { tag, index } => match tag {
                Tag::Joint => classification.joint.as_slice().get(index),
                Tag::Personal => classification.personal.as_slice().get(index),
                Tag::Unknown => classification.unknown.as_slice().get(index),
            },
        }
    }

    fn entry_view(&self, entry: &Entry) -> EntryView {
        match entry {
            Entry::Submenu { title, .. } => EntryView {
                label: format!("{}...", title),
                kind: EntryKind::Submenu,
            },
            Entry::Done { label } => EntryView {
                label: label.clone(),
                kind: EntryKind::Action,
            },
            Entry::Item(item) => {
                let label = self
                    .transaction(*item)
                    .map(|t| format_transaction_line(t, self.description_width))
                    .unwrap_or_else(|| "(missing transaction)".to_string());
                let kind = match item {
                    ItemRef::Selectable(id) => EntryKind::Checkbox {
                        checked: self.selections.is_selected(*id),
                    },
                    ItemRef::ReadOnly { .. } => EntryKind::ReadOnly,
                };
                EntryView { label, kind }
            }
        }
    }

    /// Renderable content of every open frame, root first
    pub fn frame_views(&self) -> Vec<FrameView> {
        self.stack
            .frames()
            .iter()
            .enumerate()
            .filter_map(|(level, frame)| {
                let menu = self.tree.get(frame.menu)?;
                Some(FrameView {
                    title: menu.title.clone(),
                    entries: menu.entries.iter().map(|e| self.entry_view(e)).collect(),
                    cursor: frame.cursor,
                    level,
                })
            })
            .collect()
    }

    /// Renderable content of the interactive frame
    pub fn current_frame(&self) -> Option<FrameView> {
        self.frame_views().pop()
    }
}
