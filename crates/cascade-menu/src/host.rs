#![forbid(unsafe_code)]

//! Seams to the host rendering layer.
//!
//! The host owns real elements and their layout. The menu system only asks
//! it to attach a [`Panel`] at a position, to detach it again, and to report
//! the current geometry of elements and of the viewport.

use cascade_core::geometry::{Point, Rect};

use crate::panel::Panel;

/// Opaque handle to a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Whether an attached panel is shown.
///
/// Hidden panels still take part in layout so they can be measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// Elements created for an attached panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedPanel {
    /// The panel element.
    pub panel: ElementId,
    /// One element per panel child, in child order.
    pub children: Vec<ElementId>,
}

impl MountedPanel {
    /// Element of the child at `index`.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<ElementId> {
        self.children.get(index).copied()
    }
}

/// Pure geometry queries. No state changes.
pub trait GeometryOracle {
    /// Current viewport-space bounds of an element, or `None` if the element
    /// is no longer attached.
    fn bounding_rect(&self, element: ElementId) -> Option<Rect>;

    /// Viewport bounds: origin at (0, 0), extent of the visible area.
    fn viewport_bounds(&self) -> Rect;
}

/// A rendering layer that can attach and detach menu panels.
pub trait MenuHost: GeometryOracle {
    /// Attach `panel` with its top-left corner at `origin`.
    fn attach(&mut self, panel: &Panel, origin: Point, visibility: Visibility) -> MountedPanel;

    /// Remove a previously attached panel and all its children.
    fn detach(&mut self, mounted: &MountedPanel);
}
