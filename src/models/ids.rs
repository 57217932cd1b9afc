//! Stable identifiers for reviewable items
//!
//! An unknown transaction is identified by its position in the unknown
//! partition. The position is fixed when the classifier builds the partition
//! and never changes afterwards, so two transactions that render identically
//! still have distinct ids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a transaction within the unknown partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(usize);

impl ItemId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Index into the unknown partition
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

impl From<usize> for ItemId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_index() {
        let id = ItemId::new(3);
        assert_eq!(id.index(), 3);
        assert_eq!(id.to_string(), "item-3");
        assert_eq!(ItemId::from(3), id);
    }

    #[test]
    fn test_ordering_follows_position() {
        assert!(ItemId::new(1) < ItemId::new(2));
    }
}
