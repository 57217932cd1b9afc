//! Per-item selection state for unknown transactions

use std::collections::BTreeMap;

use crate::models::ItemId;

/// Selected flags keyed by [`ItemId`]; a missing id counts as not selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    flags: BTreeMap<ItemId, bool>,
}

impl Selections {
    /// No item selected
    pub fn none() -> Self {
        Self::default()
    }

    /// One cleared flag per id in `0..count`
    pub fn cleared(count: usize) -> Self {
        Self {
            flags: (0..count).map(|i| (ItemId::new(i), false)).collect(),
        }
    }

    pub fn set(&mut self, id: ItemId, selected: bool) {
        self.flags.insert(id, selected);
    }

    /// Flip a known id and return its new state; unknown ids are left alone
    pub fn toggle(&mut self, id: ItemId) -> Option<bool> {
        let flag = self.flags.get_mut(&id)?;
        *flag = !*flag;
        Some(*flag)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.flags.contains_key(&id)
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.flags.get(&id).copied().unwrap_or(false)
    }

    /// Selected ids in ascending order
    pub fn selected_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.flags
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(id, _)| *id)
    }

    pub fn selected_count(&self) -> usize {
        self.flags.values().filter(|s| **s).count()
    }

    /// Every id with its flag, in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, bool)> + '_ {
        self.flags.iter().map(|(id, selected)| (*id, *selected))
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl FromIterator<(ItemId, bool)> for Selections {
    fn from_iter<I: IntoIterator<Item = (ItemId, bool)>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}
