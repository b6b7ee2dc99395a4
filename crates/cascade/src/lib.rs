#![forbid(unsafe_code)]

//! Cascade public facade crate.
//!
//! Re-exports the menu controller, entry types, geometry, placement, and
//! styling from the internal crates, plus a prelude for everyday use.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use cascade_core::event::{Button, Modifiers, PointerEvent, PointerEventKind};
pub use cascade_core::geometry::{Point, Rect, Size};

// --- Layout re-exports -----------------------------------------------------

pub use cascade_layout::{Anchor, Edge, Overflow, Placement, place, place_with_report};

// --- Style re-exports ------------------------------------------------------

pub use cascade_style::{Part, StyleOverrides, StyleSheet};

// --- Menu re-exports -------------------------------------------------------

pub use cascade_menu::{
    EntryDescriptor, EntryError, EntryRef, GeometryOracle, HeadlessHost, MenuConfig,
    MenuController, MenuEntry, MenuError, MenuHost, MenuId, MountedPanel, Panel, TimerToken,
    Visibility,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for cascade menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied entry list failed validation.
    Entry(EntryError),
    /// A controller operation could not be carried out.
    Menu(MenuError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry(err) => write!(f, "invalid menu entry: {err}"),
            Self::Menu(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Entry(err) => Some(err),
            Self::Menu(err) => Some(err),
        }
    }
}

impl From<EntryError> for Error {
    fn from(err: EntryError) -> Self {
        Self::Entry(err)
    }
}

impl From<MenuError> for Error {
    fn from(err: MenuError) -> Self {
        Self::Menu(err)
    }
}

/// Standard result type for cascade APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        EntryDescriptor, EntryRef, Error, HeadlessHost, MenuConfig, MenuController, MenuEntry,
        MenuHost, MenuId, Point, PointerEvent, Rect, Result, StyleSheet,
    };

    pub use crate::{core, layout, menu, style};
}

pub use cascade_core as core;
pub use cascade_layout as layout;
pub use cascade_menu as menu;
pub use cascade_style as style;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::{EntryError, MenuError};

    fn open_from_config(menus: &mut MenuController) -> Result<MenuId> {
        let entries = vec![
            EntryDescriptor::new().label("Rename").action(|_| {}),
            EntryDescriptor::new().label("Broken"),
        ];
        Ok(menus.open_descriptors(entries, Point::new(0, 0))?)
    }

    #[test]
    fn entry_errors_convert() {
        let mut menus = MenuController::new(HeadlessHost::new(640, 480));
        let err = open_from_config(&mut menus).expect_err("second entry is empty");
        assert!(matches!(err, Error::Entry(EntryError::Empty { .. })));
        assert_eq!(
            err.to_string(),
            "invalid menu entry: menu entry 1 sets none of action, children, or divider"
        );
        assert!(!menus.is_open());
    }

    #[test]
    fn menu_errors_convert() {
        let mut menus = MenuController::new(HeadlessHost::new(640, 480));
        let root = menus.open(vec![MenuEntry::action("Only", |_| {})], Point::new(0, 0));
        let err: Error = menus
            .spawn_submenu(root, 0, Rect::new(0, 0, 1, 1))
            .expect_err("not a submenu")
            .into();
        assert_eq!(err, Error::Menu(MenuError::NotASubmenu { menu: root, index: 0 }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
