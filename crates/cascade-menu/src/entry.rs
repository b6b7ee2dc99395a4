#![forbid(unsafe_code)]

//! Menu entries: the caller's description of each row.
//!
//! An entry is exactly one of an action, a nested submenu, or a divider.
//! [`MenuEntry`] encodes that as a tagged enum; [`EntryDescriptor`] mirrors
//! the loosely-typed caller schema (`label`, `action`, `children`, `divider`,
//! `enabled`, all optional) and is validated into a `MenuEntry` with
//! [`TryFrom`], rejecting entries that set none or several of the three
//! kinds.
//!
//! # Example
//!
//! ```
//! use cascade_menu::entry::MenuEntry;
//!
//! let entries = vec![
//!     MenuEntry::action("Copy", |_menus| {}),
//!     MenuEntry::divider(),
//!     MenuEntry::submenu("Share", vec![MenuEntry::action("Email", |_| {})]),
//!     MenuEntry::action("Delete", |_| {}).enabled(false),
//! ];
//! assert!(entries[2].is_submenu());
//! assert!(!entries[3].is_enabled());
//! ```

use std::fmt;
use std::rc::Rc;

use crate::controller::MenuController;

/// Callback run when an action entry is clicked.
///
/// The callback receives the controller after every menu has been closed, so
/// it may open a new menu.
pub type ActionFn = Rc<dyn Fn(&mut MenuController)>;

/// One row of a menu.
#[derive(Clone)]
pub enum MenuEntry {
    /// A clickable action.
    Action {
        label: String,
        action: ActionFn,
        enabled: bool,
    },
    /// A nested menu, opened on hover or click.
    Submenu {
        label: String,
        children: Rc<[MenuEntry]>,
        enabled: bool,
    },
    /// A non-interactive separator.
    Divider,
}

impl MenuEntry {
    /// Create an enabled action entry.
    pub fn action(label: impl Into<String>, action: impl Fn(&mut MenuController) + 'static) -> Self {
        Self::Action {
            label: label.into(),
            action: Rc::new(action),
            enabled: true,
        }
    }

    /// Create an enabled submenu entry.
    pub fn submenu(label: impl Into<String>, children: impl Into<Rc<[MenuEntry]>>) -> Self {
        Self::Submenu {
            label: label.into(),
            children: children.into(),
            enabled: true,
        }
    }

    /// Create a divider.
    #[must_use]
    pub const fn divider() -> Self {
        Self::Divider
    }

    /// Builder: set the enabled flag. Dividers ignore it.
    #[must_use]
    pub fn enabled(mut self, value: bool) -> Self {
        match &mut self {
            Self::Action { enabled, .. } | Self::Submenu { enabled, .. } => *enabled = value,
            Self::Divider => {}
        }
        self
    }

    /// Row label; `None` for dividers.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Action { label, .. } | Self::Submenu { label, .. } => Some(label),
            Self::Divider => None,
        }
    }

    /// Whether the entry reacts to clicks and hovers. Dividers never do.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Action { enabled, .. } | Self::Submenu { enabled, .. } => *enabled,
            Self::Divider => false,
        }
    }

    #[must_use]
    pub fn is_divider(&self) -> bool {
        matches!(self, Self::Divider)
    }

    #[must_use]
    pub fn is_submenu(&self) -> bool {
        matches!(self, Self::Submenu { .. })
    }

    /// Children of a submenu entry.
    #[must_use]
    pub fn children(&self) -> Option<&Rc<[MenuEntry]>> {
        match self {
            Self::Submenu { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Callback of an action entry.
    #[must_use]
    pub fn action_fn(&self) -> Option<&ActionFn> {
        match self {
            Self::Action { action, .. } => Some(action),
            _ => None,
        }
    }

    /// Validate a list of descriptors.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = EntryDescriptor>,
    ) -> Result<Vec<MenuEntry>, EntryError> {
        convert_list(descriptors, &EntryPath::root())
    }
}

impl fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action { label, enabled, .. } => f
                .debug_struct("Action")
                .field("label", label)
                .field("enabled", enabled)
                .finish_non_exhaustive(),
            Self::Submenu {
                label,
                children,
                enabled,
            } => f
                .debug_struct("Submenu")
                .field("label", label)
                .field("children", children)
                .field("enabled", enabled)
                .finish(),
            Self::Divider => f.write_str("Divider"),
        }
    }
}

/// Untyped entry as a caller might assemble it from configuration.
///
/// Exactly one of `action`, `children`, and `divider` must be set.
#[derive(Clone, Default)]
pub struct EntryDescriptor {
    pub label: Option<String>,
    pub action: Option<ActionFn>,
    pub children: Option<Vec<EntryDescriptor>>,
    pub divider: bool,
    pub enabled: Option<bool>,
}

impl EntryDescriptor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: impl Fn(&mut MenuController) + 'static) -> Self {
        self.action = Some(Rc::new(action));
        self
    }

    #[must_use]
    pub fn children(mut self, children: Vec<EntryDescriptor>) -> Self {
        self.children = Some(children);
        self
    }

    #[must_use]
    pub fn divider(mut self) -> Self {
        self.divider = true;
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

impl fmt::Debug for EntryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryDescriptor")
            .field("label", &self.label)
            .field("action", &self.action.as_ref().map(|_| "<fn>"))
            .field("children", &self.children)
            .field("divider", &self.divider)
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl TryFrom<EntryDescriptor> for MenuEntry {
    type Error = EntryError;

    fn try_from(descriptor: EntryDescriptor) -> Result<Self, Self::Error> {
        convert(descriptor, &EntryPath::root().child(0))
    }
}

fn convert_list(
    descriptors: impl IntoIterator<Item = EntryDescriptor>,
    parent: &EntryPath,
) -> Result<Vec<MenuEntry>, EntryError> {
    descriptors
        .into_iter()
        .enumerate()
        .map(|(i, d)| convert(d, &parent.child(i)))
        .collect()
}

fn convert(d: EntryDescriptor, path: &EntryPath) -> Result<MenuEntry, EntryError> {
    let mut kinds = Vec::new();
    if d.divider {
        kinds.push("divider");
    }
    if d.action.is_some() {
        kinds.push("action");
    }
    if d.children.is_some() {
        kinds.push("children");
    }
    if kinds.is_empty() {
        return Err(EntryError::Empty { path: path.clone() });
    }
    if kinds.len() > 1 {
        return Err(EntryError::Ambiguous {
            path: path.clone(),
            kinds,
        });
    }

    if d.divider {
        return Ok(MenuEntry::Divider);
    }
    let Some(label) = d.label else {
        return Err(EntryError::MissingLabel { path: path.clone() });
    };
    let enabled = d.enabled.unwrap_or(true);

    match (d.action, d.children) {
        (Some(action), None) => Ok(MenuEntry::Action {
            label,
            action,
            enabled,
        }),
        (None, Some(children)) => Ok(MenuEntry::Submenu {
            label,
            children: convert_list(children, path)?.into(),
            enabled,
        }),
        _ => Err(EntryError::Empty { path: path.clone() }),
    }
}

/// Position of an entry inside nested descriptor lists, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryPath(Vec<usize>);

impl EntryPath {
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

/// A descriptor that cannot become a [`MenuEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// None of `action`, `children`, `divider` was set.
    Empty { path: EntryPath },
    /// More than one of them was set.
    Ambiguous {
        path: EntryPath,
        kinds: Vec<&'static str>,
    },
    /// An action or submenu without a label.
    MissingLabel { path: EntryPath },
}

impl EntryError {
    /// Path of the offending entry.
    #[must_use]
    pub fn path(&self) -> &EntryPath {
        match self {
            Self::Empty { path } | Self::Ambiguous { path, .. } | Self::MissingLabel { path } => {
                path
            }
        }
    }
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { path } => write!(
                f,
                "menu entry {path} sets none of action, children, or divider"
            ),
            Self::Ambiguous { path, kinds } => write!(
                f,
                "menu entry {path} sets more than one of action, children, divider: {}",
                kinds.join(", ")
            ),
            Self::MissingLabel { path } => write!(f, "menu entry {path} has no label"),
        }
    }
}

impl std::error::Error for EntryError {}
