#![forbid(unsafe_code)]

//! StyleSheet registry keyed by menu part.
//!
//! # Example
//! ```
//! use cascade_style::{Part, StyleOverrides, StyleSheet};
//!
//! let mut sheet = StyleSheet::new();
//! sheet.define(Part::Row, StyleOverrides::new().set("padding", "4px 12px"));
//! sheet.define(Part::RowDisabled, StyleOverrides::new().set("opacity", "0.5"));
//!
//! let disabled = sheet.resolve_row(false);
//! assert_eq!(disabled.get("padding"), Some("4px 12px"));
//! assert_eq!(disabled.get("opacity"), Some("0.5"));
//! assert!(sheet.get(Part::Divider).is_none());
//! ```

use crate::style::StyleOverrides;
use std::collections::HashMap;

/// A stylable part of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Part {
    /// The popup panel itself.
    Panel,
    /// An action or submenu row.
    Row,
    /// Extra overrides layered over `Row` for disabled rows.
    RowDisabled,
    /// A divider between rows.
    Divider,
}

impl Part {
    /// All parts, in declaration order.
    pub const ALL: [Part; 4] = [Part::Panel, Part::Row, Part::RowDisabled, Part::Divider];

    /// Stable lowercase name (`panel`, `row`, `row-disabled`, `divider`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Panel => "panel",
            Self::Row => "row",
            Self::RowDisabled => "row-disabled",
            Self::Divider => "divider",
        }
    }

    /// Look a part up by its [`name`](Part::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|part| part.name() == name)
    }
}

/// Per-part style overrides supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StyleSheet {
    parts: HashMap<Part, StyleOverrides>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`define`](StyleSheet::define).
    #[must_use]
    pub fn with(mut self, part: Part, style: StyleOverrides) -> Self {
        self.define(part, style);
        self
    }

    /// Define the overrides for a part, replacing any previous definition.
    pub fn define(&mut self, part: Part, style: StyleOverrides) {
        self.parts.insert(part, style);
    }

    /// Remove a part's overrides, returning them if they existed.
    pub fn remove(&mut self, part: Part) -> Option<StyleOverrides> {
        self.parts.remove(&part)
    }

    /// Overrides for a part, if defined.
    #[must_use]
    pub fn get(&self, part: Part) -> Option<&StyleOverrides> {
        self.parts.get(&part)
    }

    /// Overrides for a part, empty if undefined.
    #[must_use]
    pub fn get_or_default(&self, part: Part) -> StyleOverrides {
        self.get(part).cloned().unwrap_or_default()
    }

    /// Check if a part has overrides.
    #[must_use]
    pub fn contains(&self, part: Part) -> bool {
        self.parts.contains_key(&part)
    }

    /// Number of defined parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if no part is styled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Overrides for a row: `Row`, with `RowDisabled` on top when disabled.
    #[must_use]
    pub fn resolve_row(&self, enabled: bool) -> StyleOverrides {
        let base = self.get_or_default(Part::Row);
        match (enabled, self.get(Part::RowDisabled)) {
            (false, Some(disabled)) => base.merge(disabled),
            _ => base,
        }
    }

    /// Extend this stylesheet with parts from another; `other` wins.
    pub fn extend(&mut self, other: &StyleSheet) {
        for (part, style) in &other.parts {
            self.parts.insert(*part, style.clone());
        }
    }
}
