//! Menu tree presented during review
//!
//! Menus live in a flat arena and refer to their submenus by [`MenuId`], so
//! a navigation frame only has to remember which menu it shows.

use std::fmt;

use crate::models::{ItemId, Tag};
use crate::services::Classification;

/// Title of the root menu
pub const ROOT_TITLE: &str = "Main Menu";
pub const PERSONAL_TITLE: &str = "Personal";
pub const JOINT_TITLE: &str = "Joint Reimbursable";
pub const UNKNOWN_TITLE: &str = "Unknown Transactions. Select items that are joint reimbursable.";
pub const DONE_LABEL: &str = "Done";

/// Index of a menu in a [`MenuTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuId(usize);

impl MenuId {
    pub const ROOT: MenuId = MenuId(0);
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "menu-{}", self.0)
    }
}

/// A leaf pointing at one classified transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRef {
    /// Joint or personal transaction, listed for audit only
    ReadOnly { tag: Tag, index: usize },
    /// Unknown transaction carrying a checkbox
    Selectable(ItemId),
}

/// One line of a menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Submenu { title: String, menu: MenuId },
    Item(ItemRef),
    Done { label: String },
}

impl Entry {
    pub fn is_submenu(&self) -> bool {
        matches!(self, Self::Submenu { .. })
    }
}

/// A titled, ordered list of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub title: String,
    pub entries: Vec<Entry>,
}

/// Arena of menus; the first one is the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    menus: Vec<Menu>,
}

impl MenuTree {
    /// Create a tree holding only an empty root menu
    pub fn new(root_title: impl Into<String>) -> Self {
        Self {
            menus: vec![Menu {
                title: root_title.into(),
                entries: Vec::new(),
            }],
        }
    }

    /// The standard review tree: Personal, Joint and Unknown submenus plus Done
    pub fn for_review(classification: &Classification) -> Self {
        let mut tree = Self::new(ROOT_TITLE);

        let personal = tree.add_submenu(MenuId::ROOT, PERSONAL_TITLE);
        for index in 0..classification.personal.len() {
            tree.push_entry(
                personal,
                Entry::Item(ItemRef::ReadOnly {
                    tag: Tag::Personal,
                    index,
                }),
            );
        }

        let joint = tree.add_submenu(MenuId::ROOT, JOINT_TITLE);
        for index in 0..classification.joint.len() {
            tree.push_entry(
                joint,
                Entry::Item(ItemRef::ReadOnly {
                    tag: Tag::Joint,
                    index,
                }),
            );
        }

        let unknown = tree.add_submenu(MenuId::ROOT, UNKNOWN_TITLE);
        for (id, _) in classification.unknown.items() {
            tree.push_entry(unknown, Entry::Item(ItemRef::Selectable(id)));
        }

        tree.push_entry(
            MenuId::ROOT,
            Entry::Done {
                label: DONE_LABEL.to_string(),
            },
        );

        tree
    }

    /// Append a new submenu to `parent` and return its id
    pub fn add_submenu(&mut self, parent: MenuId, title: impl Into<String>) -> MenuId {
        let title = title.into();
        let id = MenuId(self.menus.len());
        self.menus.push(Menu {
            title: title.clone(),
            entries: Vec::new(),
        });
        self.push_entry(parent, Entry::Submenu { title, menu: id });
        id
    }

    /// Append an entry to a menu; ids come from this tree so they are valid
    pub fn push_entry(&mut self, menu: MenuId, entry: Entry) {
        if let Some(menu) = self.menus.get_mut(menu.0) {
            menu.entries.push(entry);
        }
    }

    pub fn get(&self, id: MenuId) -> Option<&Menu> {
        self.menus.get(id.0)
    }

    pub fn root(&self) -> &Menu {
        &self.menus[0]
    }

    /// Entry at `index` within menu `id`
    pub fn entry(&self, id: MenuId, index: usize) -> Option<&Entry> {
        self.get(id).and_then(|menu| menu.entries.get(index))
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}
