#![forbid(unsafe_code)]

//! Menu nodes: one rendered popup panel each.
//!
//! Nodes are owned by the controller's open-menu registry. Links between
//! nodes are ids, not references: `parent` points upward for traversal only,
//! `active_child` names the single submenu this node currently has open.

use std::fmt;
use std::rc::Rc;

use cascade_core::geometry::{Point, Rect};
use cascade_layout::Placement;

use crate::entry::MenuEntry;
use crate::host::MountedPanel;
use crate::panel::Panel;

/// Identifier of an open menu node. Never reused within one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(pub u64);

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "menu#{}", self.0)
    }
}

/// Back-reference from a rendered row to its entry: which node, which index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryRef {
    pub menu: MenuId,
    pub index: usize,
}

impl EntryRef {
    #[must_use]
    pub const fn new(menu: MenuId, index: usize) -> Self {
        Self { menu, index }
    }
}

/// What a node was anchored to when it opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Explicit point (root menus).
    Point(Point),
    /// Rectangle of the row that spawned it (submenus).
    Rect(Rect),
}

/// One open popup panel.
#[derive(Debug)]
pub struct MenuNode {
    pub(crate) id: MenuId,
    pub(crate) entries: Rc<[MenuEntry]>,
    pub(crate) parent: Option<MenuId>,
    pub(crate) active_child: Option<MenuId>,
    pub(crate) origin: Origin,
    pub(crate) panel: Panel,
    pub(crate) mounted: MountedPanel,
    pub(crate) placement: Placement,
}

impl MenuNode {
    #[must_use]
    pub fn id(&self) -> MenuId {
        self.id
    }

    /// Entries this node was built from.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    /// Node that spawned this one; `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<MenuId> {
        self.parent
    }

    /// Currently open submenu, if any.
    #[must_use]
    pub fn active_child(&self) -> Option<MenuId> {
        self.active_child
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Constructed element tree.
    #[must_use]
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Host elements backing the panel.
    #[must_use]
    pub fn mounted(&self) -> &MountedPanel {
        &self.mounted
    }

    /// Where the placement engine put the panel.
    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }
}
