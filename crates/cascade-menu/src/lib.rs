#![forbid(unsafe_code)]

//! Cascading popup menus.
//!
//! A [`MenuController`] opens a root menu at a point, opens submenus beside
//! their rows (on click, or after the pointer rests on the row for the hover
//! delay), keeps every panel inside the viewport, and tears the whole tree
//! down on an action click or a click outside every panel.
//!
//! Rendering is left to a [`MenuHost`]; [`HeadlessHost`] is an in-memory one.
//!
//! ```
//! use cascade_core::geometry::Point;
//! use cascade_menu::{EntryRef, HeadlessHost, MenuController, MenuEntry};
//!
//! let host = HeadlessHost::new(1920, 1080);
//! let mut menus = MenuController::new(host.clone());
//! let root = menus.open(
//!     vec![
//!         MenuEntry::action("Copy", |_| {}),
//!         MenuEntry::submenu("Share", vec![MenuEntry::action("Mail", |_| {})]),
//!     ],
//!     Point::new(40, 40),
//! );
//!
//! menus.click_entry(EntryRef::new(root, 1)).unwrap();
//! assert_eq!(menus.chain_depth(), 2);
//!
//! menus.pointer_down(Point::new(1800, 1000));
//! assert!(!menus.is_open());
//! assert!(host.visible_panels().is_empty());
//! ```

pub mod config;
pub mod controller;
pub mod entry;
pub mod error;
pub mod headless;
pub mod host;
pub mod hover;
pub mod node;
pub mod panel;

pub use config::{DEFAULT_HOVER_DELAY, MenuConfig};
pub use controller::MenuController;
pub use entry::{ActionFn, EntryDescriptor, EntryError, EntryPath, MenuEntry};
pub use error::MenuError;
pub use headless::{DEFAULT_HISTORY_LIMIT, HeadlessHost, HeadlessMetrics, HostEvent};
pub use host::{ElementId, GeometryOracle, MenuHost, MountedPanel, Visibility};
pub use hover::{HoverTimer, PendingHover, TimerToken};
pub use node::{EntryRef, MenuId, MenuNode, Origin};
pub use panel::{Panel, PanelChild, Row, RowKind};
