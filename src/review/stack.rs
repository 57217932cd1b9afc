//! Bounded navigation stack
//!
//! The stack is the complete navigable state of a review: one frame per open
//! menu, root at the bottom. Only the top frame is interactive.

use super::menu::MenuId;

/// Default maximum number of stacked frames
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// One open menu and the entry focused within it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub menu: MenuId,
    pub cursor: usize,
}

impl Frame {
    pub fn new(menu: MenuId) -> Self {
        Self { menu, cursor: 0 }
    }
}

/// Why a push or pop did not happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackLimit {
    /// Stack already holds `max_depth` frames
    Full,
    /// Only the root frame is left
    AtRoot,
}

/// Stack of open frames, never empty, never deeper than `max_depth`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    frames: Vec<Frame>,
    max_depth: usize,
}

impl NavigationStack {
    /// Start with the root frame; `max_depth` is raised to at least 1
    pub fn new(root: MenuId, max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        let mut frames = Vec::with_capacity(max_depth);
        frames.push(Frame::new(root));
        Self { frames, max_depth }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn is_at_root(&self) -> bool {
        self.frames.len() == 1
    }

    pub fn is_full(&self) -> bool {
        self.frames.len() >= self.max_depth
    }

    /// Open a menu on top of the stack
    pub fn push(&mut self, menu: MenuId) -> Result<usize, StackLimit> {
        if self.is_full() {
            return Err(StackLimit::Full);
        }
        self.frames.push(Frame::new(menu));
        Ok(self.depth())
    }

    /// Close the top frame; the root frame can't be closed
    pub fn pop(&mut self) -> Result<Frame, StackLimit> {
        if self.is_at_root() {
            return Err(StackLimit::AtRoot);
        }
        self.frames.pop().ok_or(StackLimit::AtRoot)
    }

    pub fn top(&self) -> &Frame {
        // frames always holds at least the root
        &self.frames[self.frames.len() - 1]
    }

    pub fn top_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// All frames, root first
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}
