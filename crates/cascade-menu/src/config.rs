#![forbid(unsafe_code)]

//! Controller configuration.

use std::time::Duration;

use cascade_style::StyleSheet;

/// Delay between hovering a submenu row and the submenu opening.
pub const DEFAULT_HOVER_DELAY: Duration = Duration::from_millis(600);

/// Menu controller configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuConfig {
    /// Hover-to-open delay for submenus (default: 600ms).
    #[cfg_attr(feature = "serde", serde(rename = "hover_delay_ms", with = "duration_ms"))]
    pub hover_delay: Duration,
    /// Per-part style overrides (default: none).
    pub styles: StyleSheet,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            hover_delay: DEFAULT_HOVER_DELAY,
            styles: StyleSheet::new(),
        }
    }
}

impl MenuConfig {
    /// Set the hover-to-open delay.
    #[must_use]
    pub fn hover_delay(mut self, delay: Duration) -> Self {
        self.hover_delay = delay;
        self
    }

    /// Set the hover-to-open delay in milliseconds.
    #[must_use]
    pub fn hover_delay_ms(self, ms: u64) -> Self {
        self.hover_delay(Duration::from_millis(ms))
    }

    /// Set the stylesheet.
    #[must_use]
    pub fn styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }
}

#[cfg(feature = "serde")]
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
