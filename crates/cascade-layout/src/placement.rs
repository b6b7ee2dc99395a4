#![forbid(unsafe_code)]

//! Overflow-minimizing panel placement.
//!
//! # Algorithm
//!
//! 1. Put the panel's top-left corner at the anchor: the point itself, or the
//!    top-right corner of a triggering rectangle.
//! 2. Measure the overflow past each viewport edge, clamped at zero.
//! 3. Pick the edge with the smallest nonzero overflow (ties resolved in the
//!    order top, right, bottom, left) and shift the panel back inside along
//!    that axis by exactly the overflow.
//!
//! # Invariants
//!
//! 1. At most one axis is corrected per call.
//! 2. A panel that fits at its anchor is returned unchanged.
//! 3. Degenerate sizes and viewports are clamped, never rejected.
//!
//! # Failure Modes
//!
//! - A panel overflowing on several edges keeps the overflow on the edges that
//!   were not chosen; the host clips it.
//! - A panel larger than the viewport on both axes cannot be made to fit.

use cascade_core::geometry::{Point, Rect, Size};

/// Where a panel wants to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Explicit point, used for root menus.
    Point(Point),
    /// Triggering rectangle, used for submenus. The panel opens at its
    /// top-right corner.
    Rect(Rect),
}

impl Anchor {
    /// Top-left corner the panel takes before any correction.
    #[inline]
    #[must_use]
    pub const fn tentative_origin(&self) -> Point {
        match self {
            Self::Point(point) => *point,
            Self::Rect(rect) => rect.top_right(),
        }
    }
}

impl From<Point> for Anchor {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<Rect> for Anchor {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

/// A viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// Tie-break order for equal overflows.
    pub const PRIORITY: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Offset that moves a panel back inside across this edge by `amount`.
    #[inline]
    #[must_use]
    pub const fn correction(self, amount: i32) -> (i32, i32) {
        match self {
            Self::Top => (0, amount),
            Self::Right => (-amount, 0),
            Self::Bottom => (0, -amount),
            Self::Left => (amount, 0),
        }
    }
}

/// How far a rectangle extends past each viewport edge. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Overflow {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Overflow {
    /// Measure `panel` against `viewport`.
    #[must_use]
    pub fn compute(panel: Rect, viewport: Rect) -> Self {
        Self {
            top: viewport.top().saturating_sub(panel.top()).max(0),
            right: panel.right().saturating_sub(viewport.right()).max(0),
            bottom: panel.bottom().saturating_sub(viewport.bottom()).max(0),
            left: viewport.left().saturating_sub(panel.left()).max(0),
        }
    }

    /// Overflow on one edge.
    #[inline]
    #[must_use]
    pub const fn get(&self, edge: Edge) -> i32 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Whether the rectangle fits entirely.
    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.top == 0 && self.right == 0 && self.bottom == 0 && self.left == 0
    }

    /// Edge with the smallest nonzero overflow, with its amount.
    ///
    /// Equal amounts resolve in [`Edge::PRIORITY`] order.
    #[must_use]
    pub fn smallest_nonzero(&self) -> Option<(Edge, i32)> {
        let mut best: Option<(Edge, i32)> = None;
        for edge in Edge::PRIORITY {
            let amount = self.get(edge);
            if amount == 0 {
                continue;
            }
            match best {
                Some((_, current)) if current <= amount => {}
                _ => best = Some((edge, amount)),
            }
        }
        best
    }
}

/// Full result of a placement query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Final top-left corner.
    pub origin: Point,
    /// Top-left corner before correction.
    pub tentative: Point,
    /// Overflow measured at the tentative position.
    pub overflow: Overflow,
    /// Edge that was corrected, if any.
    pub flipped: Option<Edge>,
}

impl Placement {
    /// Final panel rectangle for a panel of `size`.
    #[must_use]
    pub fn rect(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.origin, size.clamped())
    }
}

/// Compute the top-left corner for a panel of `size`.
#[must_use]
pub fn place(size: Size, anchor: Anchor, viewport: Rect) -> Point {
    place_with_report(size, anchor, viewport).origin
}

/// Like [`place`], but also report the overflow and the corrected edge.
#[must_use]
pub fn place_with_report(size: Size, anchor: Anchor, viewport: Rect) -> Placement {
    let size = size.clamped();
    let viewport = viewport.clamped();
    let tentative = anchor.tentative_origin();
    let overflow = Overflow::compute(Rect::from_origin_size(tentative, size), viewport);

    let (origin, flipped) = match overflow.smallest_nonzero() {
        Some((edge, amount)) => {
            let (dx, dy) = edge.correction(amount);
            (tentative.offset(dx, dy), Some(edge))
        }
        None => (tentative, None),
    };

    Placement {
        origin,
        tentative,
        overflow,
        flipped,
    }
}
