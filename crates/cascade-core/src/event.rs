#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! Hosts translate their native pointer input into [`PointerEvent`] and feed
//! it to the menu controller. Only the pointer is modelled; keyboard and touch
//! navigation are out of scope.
//!
//! # Design Notes
//!
//! - Coordinates are viewport-relative, matching [`Rect`](crate::geometry::Rect)
//! - `Modifiers` use bitflags for easy combination
//! - `Left` means the pointer left the host surface entirely

use bitflags::bitflags;
#[cfg(all(feature = "crossterm", not(target_arch = "wasm32")))]
use crossterm::event as cte;

use crate::geometry::Point;

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// Pointer position in viewport coordinates.
    pub position: Point,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    /// Primary-button press at `(x, y)`.
    #[must_use]
    pub const fn down(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Down(Button::Primary), x, y)
    }

    /// Primary-button release at `(x, y)`.
    #[must_use]
    pub const fn up(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Up(Button::Primary), x, y)
    }

    /// Pointer motion to `(x, y)`.
    #[must_use]
    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Moved, x, y)
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Convert a crossterm mouse event. Cell coordinates map 1:1.
    ///
    /// Scroll and drag events have no menu meaning and yield `None`.
    #[cfg(all(feature = "crossterm", not(target_arch = "wasm32")))]
    #[must_use]
    pub fn from_crossterm(event: cte::MouseEvent) -> Option<Self> {
        let kind = match event.kind {
            cte::MouseEventKind::Down(button) => PointerEventKind::Down(map_button(button)),
            cte::MouseEventKind::Up(button) => PointerEventKind::Up(map_button(button)),
            cte::MouseEventKind::Moved => PointerEventKind::Moved,
            _ => return None,
        };
        Some(
            Self::new(kind, i32::from(event.column), i32::from(event.row))
                .with_modifiers(map_modifiers(event.modifiers)),
        )
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed down.
    Down(Button),

    /// Button released.
    Up(Button),

    /// Pointer moved.
    Moved,

    /// Pointer left the host surface.
    Left,
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Primary (usually left) button.
    Primary,

    /// Secondary (usually right) button.
    Secondary,

    /// Middle button (scroll wheel click).
    Middle,
}

#[cfg(all(feature = "crossterm", not(target_arch = "wasm32")))]
fn map_button(button: cte::MouseButton) -> Button {
    match button {
        cte::MouseButton::Left => Button::Primary,
        cte::MouseButton::Right => Button::Secondary,
        cte::MouseButton::Middle => Button::Middle,
    }
}

#[cfg(all(feature = "crossterm", not(target_arch = "wasm32")))]
fn map_modifiers(modifiers: cte::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if modifiers.contains(cte::KeyModifiers::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if modifiers.contains(cte::KeyModifiers::ALT) {
        out |= Modifiers::ALT;
    }
    if modifiers.contains(cte::KeyModifiers::CONTROL) {
        out |= Modifiers::CTRL;
    }
    if modifiers.contains(cte::KeyModifiers::SUPER) {
        out |= Modifiers::SUPER;
    }
    out
}
