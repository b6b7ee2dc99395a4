#![forbid(unsafe_code)]

//! Layout primitives for popup menus.
//!
//! - [`place`] - choose the top-left corner of a panel so it overflows the
//!   viewport as little as a single correction allows
//! - [`Anchor`] - where a panel wants to appear (a point, or the right edge
//!   of a triggering rectangle)
//! - [`Overflow`] - how far a rectangle extends past each viewport edge
//!
//! ```
//! use cascade_layout::{Anchor, Point, Rect, Size, place};
//!
//! let viewport = Rect::from_size(1920, 1080);
//! let origin = place(Size::new(200, 100), Anchor::Point(Point::new(1900, 10)), viewport);
//! assert_eq!(origin, Point::new(1720, 10));
//! ```

pub mod placement;

pub use cascade_core::geometry::{Point, Rect, Size};
pub use placement::{Anchor, Edge, Overflow, Placement, place, place_with_report};
