#![forbid(unsafe_code)]

//! Style overrides for menu parts.
//!
//! Styling is owned by the host: this crate only carries property/value
//! pairs from the caller to each constructed element, verbatim. A
//! [`StyleSheet`] maps each [`Part`] of a menu to its [`StyleOverrides`];
//! parts without an entry receive none.

pub mod style;
pub mod stylesheet;

pub use style::StyleOverrides;
pub use stylesheet::{Part, StyleSheet};
