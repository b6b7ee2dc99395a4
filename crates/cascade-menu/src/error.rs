#![forbid(unsafe_code)]

//! Errors from controller operations.
//!
//! Operations against nodes that are no longer open are not errors: event
//! callbacks routinely arrive after a panel was detached, so those calls are
//! silent no-ops. These variants cover requests that could never succeed.

use std::fmt;

use crate::node::MenuId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// The node has fewer entries than the requested index.
    EntryOutOfRange {
        menu: MenuId,
        index: usize,
        len: usize,
    },
    /// A submenu was requested for an action or divider entry.
    NotASubmenu { menu: MenuId, index: usize },
    /// A submenu was requested for a disabled entry.
    DisabledEntry { menu: MenuId, index: usize },
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntryOutOfRange { menu, index, len } => {
                write!(f, "{menu} has {len} entries, no entry {index}")
            }
            Self::NotASubmenu { menu, index } => {
                write!(f, "entry {index} of {menu} is not a submenu")
            }
            Self::DisabledEntry { menu, index } => {
                write!(f, "entry {index} of {menu} is disabled")
            }
        }
    }
}

impl std::error::Error for MenuError {}
