#![forbid(unsafe_code)]

//! Element tree for one menu panel.
//!
//! [`Panel::build`] turns entries into one child element per entry, in
//! order: dividers become non-interactive separators, actions and submenus
//! become rows carrying their label, enabled flag, and an [`EntryRef`] back
//! to the entry and its owning node. Building is pure; placing and attaching
//! the panel is the controller's job.

use cascade_style::{Part, StyleOverrides, StyleSheet};

use crate::entry::MenuEntry;
use crate::node::{EntryRef, MenuId};

/// Whether a row runs an action or opens a submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Action,
    Submenu,
}

/// An interactive row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub enabled: bool,
    pub kind: RowKind,
    pub entry: EntryRef,
    pub style: StyleOverrides,
}

/// A child element of a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelChild {
    Row(Row),
    Divider { style: StyleOverrides },
}

impl PanelChild {
    /// The row, unless this is a divider.
    #[must_use]
    pub fn as_row(&self) -> Option<&Row> {
        match self {
            Self::Row(row) => Some(row),
            Self::Divider { .. } => None,
        }
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Row(_))
    }

    #[must_use]
    pub fn style(&self) -> &StyleOverrides {
        match self {
            Self::Row(row) => &row.style,
            Self::Divider { style } => style,
        }
    }
}

/// A constructed, not yet attached, panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    owner: MenuId,
    style: StyleOverrides,
    children: Vec<PanelChild>,
}

impl Panel {
    /// Build the element tree for `entries`, owned by node `owner`.
    #[must_use]
    pub fn build(owner: MenuId, entries: &[MenuEntry], styles: &StyleSheet) -> Self {
        let children = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| build_child(owner, index, entry, styles))
            .collect();
        Self {
            owner,
            style: styles.get_or_default(Part::Panel),
            children,
        }
    }

    #[must_use]
    pub fn owner(&self) -> MenuId {
        self.owner
    }

    /// Overrides for the panel element.
    #[must_use]
    pub fn style(&self) -> &StyleOverrides {
        &self.style
    }

    /// One child per entry, in entry order.
    #[must_use]
    pub fn children(&self) -> &[PanelChild] {
        &self.children
    }

    /// Iterate the interactive rows.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.children.iter().filter_map(PanelChild::as_row)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

fn build_child(owner: MenuId, index: usize, entry: &MenuEntry, styles: &StyleSheet) -> PanelChild {
    let (label, enabled, kind) = match entry {
        MenuEntry::Divider => {
            return PanelChild::Divider {
                style: styles.get_or_default(Part::Divider),
            };
        }
        MenuEntry::Action { label, enabled, .. } => (label, *enabled, RowKind::Action),
        MenuEntry::Submenu { label, enabled, .. } => (label, *enabled, RowKind::Submenu),
    };
    PanelChild::Row(Row {
        label: label.clone(),
        enabled,
        kind,
        entry: EntryRef::new(owner, index),
        style: styles.resolve_row(enabled),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::MenuController;

    fn noop(_: &mut MenuController) {}

    #[test]
    fn one_child_per_entry_in_order() {
        let entries = vec![
            MenuEntry::action("Undo", noop),
            MenuEntry::divider(),
            MenuEntry::submenu("Recent", vec![MenuEntry::action("a.txt", noop)]),
            MenuEntry::action("Redo", noop).enabled(false),
        ];
        let panel = Panel::build(MenuId(7), &entries, &StyleSheet::new());

        assert_eq!(panel.len(), 4);
        assert_eq!(panel.owner(), MenuId(7));
        assert!(!panel.children()[1].is_interactive());

        let rows: Vec<_> = panel.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].label, "Undo");
        assert_eq!(rows[0].kind, RowKind::Action);
        assert_eq!(rows[0].entry, EntryRef::new(MenuId(7), 0));
        assert_eq!(rows[1].kind, RowKind::Submenu);
        assert_eq!(rows[1].entry.index, 2);
        assert!(!rows[2].enabled);
        assert_eq!(rows[2].entry.index, 3);
    }

    #[test]
    fn styles_are_applied_per_part() {
        let styles = StyleSheet::new()
            .with(Part::Panel, StyleOverrides::new().set("background", "#111"))
            .with(Part::Row, StyleOverrides::new().set("padding", "2px"))
            .with(Part::RowDisabled, StyleOverrides::new().set("opacity", "0.5"));
        let entries = vec![
            MenuEntry::action("On", noop),
            MenuEntry::divider(),
            MenuEntry::action("Off", noop).enabled(false),
        ];
        let panel = Panel::build(MenuId(1), &entries, &styles);

        assert_eq!(panel.style().get("background"), Some("#111"));
        assert_eq!(panel.children()[0].style().get("opacity"), None);
        assert_eq!(panel.children()[0].style().get("padding"), Some("2px"));
        assert!(panel.children()[1].style().is_empty());
        assert_eq!(panel.children()[2].style().get("opacity"), Some("0.5"));
    }

    #[test]
    fn empty_entries_build_empty_panel() {
        let panel = Panel::build(MenuId(0), &[], &StyleSheet::new());
        assert!(panel.is_empty());
        assert_eq!(panel.rows().count(), 0);
    }
}
