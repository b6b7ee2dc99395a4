#![forbid(unsafe_code)]

//! Menu tree controller.
//!
//! Owns every open [`MenuNode`], the single pending hover timer, and the
//! host the panels are attached to. All state changes go through here, one
//! user action at a time, on the UI thread.
//!
//! # Invariants
//!
//! 1. At most one root menu is open.
//! 2. The registry is a single chain: `registry[0]` is the root and each
//!    node's `active_child` is the next node in the registry. No node has
//!    more than one open submenu.
//! 3. Closing a node closes its open descendants first, deepest first.
//! 4. After [`close_all`](MenuController::close_all) the registry is empty
//!    and no hover task is pending.
//! 5. A hover task never outlives the node whose row scheduled it.
//!
//! # Event routing
//!
//! - Pointer down inside an open panel closes that panel's descendants; down
//!   anywhere else closes everything.
//! - Releasing the primary button over a row clicks it: actions close the
//!   whole tree and then run, submenus open immediately.
//! - Moving onto a submenu row schedules it to open after the hover delay;
//!   moving off any row cancels the pending open. When the delay elapses the
//!   pointer must still be over the row.

use std::fmt;
use std::rc::Rc;
use std::time::Instant;

use cascade_core::event::{Button, PointerEvent, PointerEventKind};
use cascade_core::geometry::{Point, Rect, Size};
use cascade_core::{debug, trace, warn};
use cascade_layout::{Anchor, Placement, place_with_report};

use crate::config::MenuConfig;
use crate::entry::{EntryDescriptor, EntryError, MenuEntry};
use crate::error::MenuError;
use crate::host::{MenuHost, Visibility};
use crate::hover::{HoverTimer, PendingHover, TimerToken};
use crate::node::{EntryRef, MenuId, MenuNode, Origin};
use crate::panel::Panel;

/// What clicking an entry should do, resolved before any state changes.
enum ClickAction {
    Run(Rc<dyn Fn(&mut MenuController)>),
    OpenSubmenu,
    Ignore,
}

/// Owner of the open-menu tree.
pub struct MenuController {
    host: Box<dyn MenuHost>,
    config: MenuConfig,
    /// Open nodes, root first, in `active_child` order.
    registry: Vec<MenuNode>,
    root: Option<MenuId>,
    hover: HoverTimer,
    /// Row under the pointer, as tracked by [`handle_event`](Self::handle_event).
    hovered: Option<EntryRef>,
    /// Last known pointer position.
    pointer: Option<Point>,
    next_id: u64,
}

impl MenuController {
    /// Create a controller with the default configuration.
    pub fn new(host: impl MenuHost + 'static) -> Self {
        Self::with_config(host, MenuConfig::default())
    }

    /// Create a controller with a custom configuration.
    pub fn with_config(host: impl MenuHost + 'static, config: MenuConfig) -> Self {
        Self {
            host: Box::new(host),
            config,
            registry: Vec::new(),
            root: None,
            hover: HoverTimer::new(),
            hovered: None,
            pointer: None,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Mutable configuration. Changes apply to menus opened afterwards.
    pub fn config_mut(&mut self) -> &mut MenuConfig {
        &mut self.config
    }

    // --- Queries -----------------------------------------------------------

    /// Whether any menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.registry.is_empty()
    }

    /// The open root menu.
    #[must_use]
    pub fn root(&self) -> Option<MenuId> {
        self.root
    }

    /// Open nodes, root first.
    #[must_use]
    pub fn nodes(&self) -> &[MenuNode] {
        &self.registry
    }

    /// Ids of open nodes, root first.
    #[must_use]
    pub fn registry(&self) -> Vec<MenuId> {
        self.registry.iter().map(|n| n.id).collect()
    }

    #[must_use]
    pub fn node(&self, id: MenuId) -> Option<&MenuNode> {
        self.registry.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: MenuId) -> bool {
        self.node(id).is_some()
    }

    /// Number of open nodes.
    #[must_use]
    pub fn chain_depth(&self) -> usize {
        self.registry.len()
    }

    /// The deepest open node.
    #[must_use]
    pub fn deepest(&self) -> Option<MenuId> {
        self.registry.last().map(|n| n.id)
    }

    /// The pending hover task, if any.
    #[must_use]
    pub fn pending_hover(&self) -> Option<&PendingHover> {
        self.hover.pending()
    }

    /// When the event loop next needs to call [`tick`](Self::tick).
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.hover.deadline()
    }

    /// Row under the pointer, as tracked from pointer events.
    #[must_use]
    pub fn hovered(&self) -> Option<EntryRef> {
        self.hovered
    }

    /// Current bounds of a node's panel.
    #[must_use]
    pub fn panel_rect(&self, id: MenuId) -> Option<Rect> {
        let node = self.node(id)?;
        self.host.bounding_rect(node.mounted.panel)
    }

    /// Current bounds of the row for `target`.
    #[must_use]
    pub fn row_rect(&self, target: EntryRef) -> Option<Rect> {
        let node = self.node(target.menu)?;
        let element = node.mounted.child(target.index)?;
        self.host.bounding_rect(element)
    }

    /// Deepest open panel containing `point`.
    #[must_use]
    pub fn panel_at(&self, point: Point) -> Option<MenuId> {
        self.registry
            .iter()
            .rev()
            .find(|node| {
                self.host
                    .bounding_rect(node.mounted.panel)
                    .is_some_and(|r| r.contains(point))
            })
            .map(|node| node.id)
    }

    /// Row at `point`. Only the topmost panel under the point is considered;
    /// dividers and panel padding hit nothing.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<EntryRef> {
        let id = self.panel_at(point)?;
        let node = self.node(id)?;
        node.panel
            .children()
            .iter()
            .enumerate()
            .filter(|(_, child)| child.is_interactive())
            .find_map(|(index, _)| {
                let element = node.mounted.child(index)?;
                self.host
                    .bounding_rect(element)
                    .filter(|r| r.contains(point))
                    .map(|_| EntryRef::new(id, index))
            })
    }

    // --- Lifecycle ---------------------------------------------------------

    /// Open a root menu at `point`, closing any open menu tree first.
    pub fn open(&mut self, entries: impl Into<Rc<[MenuEntry]>>, point: Point) -> MenuId {
        if self.root.is_some() {
            self.close_all();
        }
        let id = self.mount(entries.into(), None, Origin::Point(point), Anchor::Point(point));
        self.root = Some(id);
        id
    }

    /// Validate descriptors and open them as a root menu.
    pub fn open_descriptors(
        &mut self,
        descriptors: impl IntoIterator<Item = EntryDescriptor>,
        point: Point,
    ) -> Result<MenuId, EntryError> {
        let entries = MenuEntry::from_descriptors(descriptors)?;
        Ok(self.open(entries, point))
    }

    /// Close every open menu and cancel any pending hover. Idempotent.
    pub fn close_all(&mut self) {
        if self.hover.cancel().is_some() {
            trace!("hover open cancelled by close_all");
        }
        self.hovered = None;
        let closed = self.registry.len();
        while let Some(node) = self.registry.pop() {
            self.host.detach(&node.mounted);
        }
        self.root = None;
        if closed > 0 {
            debug!(closed, "all menus closed");
        }
    }

    /// Close the open descendants of `id`, deepest first, leaving `id` open.
    ///
    /// No-op if `id` is not open or has no open submenu.
    pub fn close_descendants(&mut self, id: MenuId) {
        let mut chain = Vec::new();
        let mut next = self.node(id).and_then(|n| n.active_child);
        while let Some(child) = next {
            chain.push(child);
            next = self.node(child).and_then(|n| n.active_child);
        }
        if chain.is_empty() {
            return;
        }

        for child in chain.into_iter().rev() {
            if let Some(node) = self.take_node(child) {
                self.detach_node(node);
            }
        }
        if let Some(node) = self.node_mut(id) {
            node.active_child = None;
        }
        debug!(menu = %id, "descendants closed");
    }

    /// Open the submenu of entry `index` of `parent`, anchored to `anchor`.
    ///
    /// Any submenu `parent` already has open is closed first. Returns
    /// `Ok(None)` if `parent` is no longer open.
    pub fn spawn_submenu(
        &mut self,
        parent: MenuId,
        index: usize,
        anchor: Rect,
    ) -> Result<Option<MenuId>, MenuError> {
        let Some(node) = self.node(parent) else {
            return Ok(None);
        };
        let children = match node.entries.get(index) {
            None => {
                return Err(MenuError::EntryOutOfRange {
                    menu: parent,
                    index,
                    len: node.entries.len(),
                });
            }
            Some(MenuEntry::Submenu {
                children,
                enabled: true,
                ..
            }) => Rc::clone(children),
            Some(MenuEntry::Submenu { .. }) => {
                return Err(MenuError::DisabledEntry {
                    menu: parent,
                    index,
                });
            }
            Some(_) => {
                return Err(MenuError::NotASubmenu {
                    menu: parent,
                    index,
                });
            }
        };

        self.close_descendants(parent);
        let child = self.mount(
            children,
            Some(parent),
            Origin::Rect(anchor),
            Anchor::Rect(anchor),
        );
        if let Some(node) = self.node_mut(parent) {
            node.active_child = Some(child);
        }
        debug!(parent = %parent, menu = %child, index, "submenu spawned");
        Ok(Some(child))
    }

    // --- Routing -----------------------------------------------------------

    /// Pointer pressed at `point`.
    ///
    /// Inside an open panel only that panel's submenus close; outside every
    /// panel the whole tree closes.
    pub fn pointer_down(&mut self, point: Point) {
        self.pointer = Some(point);
        match self.panel_at(point) {
            Some(id) => self.close_descendants(id),
            None => self.close_all(),
        }
    }

    /// Record the pointer position without any hover tracking.
    pub fn pointer_moved(&mut self, point: Point) {
        self.pointer = Some(point);
    }

    /// Click the entry at `target`.
    ///
    /// Disabled entries and dividers do nothing. An action closes every menu
    /// and then runs its callback, so the callback may open a new menu. A
    /// submenu opens immediately. Stale targets are ignored.
    pub fn click_entry(&mut self, target: EntryRef) -> Result<(), MenuError> {
        let Some(node) = self.node(target.menu) else {
            return Ok(());
        };
        let action = match node.entries.get(target.index) {
            None => {
                return Err(MenuError::EntryOutOfRange {
                    menu: target.menu,
                    index: target.index,
                    len: node.entries.len(),
                });
            }
            Some(entry) if !entry.is_enabled() => ClickAction::Ignore,
            Some(MenuEntry::Action { action, .. }) => ClickAction::Run(Rc::clone(action)),
            Some(MenuEntry::Submenu { .. }) => ClickAction::OpenSubmenu,
            Some(MenuEntry::Divider) => ClickAction::Ignore,
        };

        match action {
            ClickAction::Run(callback) => {
                debug!(menu = %target.menu, index = target.index, "action clicked");
                self.close_all();
                callback(self);
            }
            ClickAction::OpenSubmenu => {
                self.hover.cancel();
                if let Some(anchor) = self.row_rect(target) {
                    self.spawn_submenu(target.menu, target.index, anchor)?;
                }
            }
            ClickAction::Ignore => {}
        }
        Ok(())
    }

    /// The pointer started hovering `target`.
    ///
    /// Cancels any pending hover and, for an enabled submenu row, schedules
    /// it to open after the configured delay.
    pub fn hover_start(&mut self, target: EntryRef, now: Instant) -> Option<TimerToken> {
        self.hover.cancel();
        let entry = self.node(target.menu)?.entry(target.index)?;
        if !entry.is_submenu() || !entry.is_enabled() {
            return None;
        }
        let token = self.hover.start(target, now, self.config.hover_delay);
        if self.hover.deadline().is_none() {
            trace!(menu = %target.menu, index = target.index, "hover delay out of range, row opens on click only");
        } else {
            trace!(menu = %target.menu, index = target.index, "hover open scheduled");
        }
        Some(token)
    }

    /// The pointer stopped hovering `target`. Cancels any pending hover.
    pub fn hover_end(&mut self, target: EntryRef) {
        if self.hover.cancel().is_some() {
            trace!(menu = %target.menu, index = target.index, "hover open cancelled");
        }
        if self.hovered == Some(target) {
            self.hovered = None;
        }
    }

    /// Fire the pending hover if it is due. Returns whether a submenu opened.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hover.take_due(now) {
            Some(target) => self.fire_hover_target(target),
            None => false,
        }
    }

    /// Fire the hover task for `token`, if it is still pending.
    ///
    /// For hosts that schedule their own timer from the token returned by
    /// [`hover_start`](Self::hover_start). Returns whether a submenu opened.
    pub fn fire_hover(&mut self, token: TimerToken) -> bool {
        match self.hover.take_token(token) {
            Some(target) => self.fire_hover_target(target),
            None => false,
        }
    }

    /// Route a pointer event. Returns whether it landed on an open panel.
    pub fn handle_event(&mut self, event: PointerEvent, now: Instant) -> bool {
        let position = event.position;
        if event.kind == PointerEventKind::Left {
            self.pointer = None;
            if let Some(previous) = self.hovered.take() {
                self.hover_end(previous);
            }
            return false;
        }

        let over_panel = self.panel_at(position).is_some();
        match event.kind {
            PointerEventKind::Moved => {
                self.pointer = Some(position);
                self.track_hover(position, now);
            }
            PointerEventKind::Down(_) => self.pointer_down(position),
            PointerEventKind::Up(Button::Primary) => {
                self.pointer = Some(position);
                if let Some(target) = self.hit_test(position) {
                    if let Err(err) = self.click_entry(target) {
                        warn!(%err, "click routing failed");
                    }
                }
            }
            PointerEventKind::Up(_) | PointerEventKind::Left => {}
        }
        over_panel
    }

    // --- Internals ---------------------------------------------------------

    fn track_hover(&mut self, position: Point, now: Instant) {
        let hit = self.hit_test(position);
        if hit == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            self.hover_end(previous);
        }
        if let Some(next) = hit {
            self.hovered = Some(next);
            self.hover_start(next, now);
        }
    }

    fn fire_hover_target(&mut self, target: EntryRef) -> bool {
        trace!(menu = %target.menu, index = target.index, "hover open fired");
        let Some(row) = self.row_rect(target) else {
            return false;
        };
        if !self.pointer.is_some_and(|p| row.contains(p)) {
            trace!(menu = %target.menu, index = target.index, "pointer left row before hover fired");
            return false;
        }
        match self.spawn_submenu(target.menu, target.index, row) {
            Ok(opened) => opened.is_some(),
            Err(err) => {
                warn!(%err, "hover open failed");
                false
            }
        }
    }

    fn allocate_id(&mut self) -> MenuId {
        self.next_id += 1;
        MenuId(self.next_id)
    }

    /// Build, place, and attach a node, then register it.
    fn mount(
        &mut self,
        entries: Rc<[MenuEntry]>,
        parent: Option<MenuId>,
        origin: Origin,
        anchor: Anchor,
    ) -> MenuId {
        let id = self.allocate_id();
        let panel = Panel::build(id, &entries, &self.config.styles);
        let placement = self.place_panel(&panel, anchor);
        let mounted = self
            .host
            .attach(&panel, placement.origin, Visibility::Visible);
        debug!(
            menu = %id,
            entries = entries.len(),
            x = placement.origin.x,
            y = placement.origin.y,
            "menu opened"
        );
        self.registry.push(MenuNode {
            id,
            entries,
            parent,
            active_child: None,
            origin,
            panel,
            mounted,
            placement,
        });
        id
    }

    /// Measure a hidden probe of `panel`, then place the real one.
    fn place_panel(&mut self, panel: &Panel, anchor: Anchor) -> Placement {
        let probe = self
            .host
            .attach(panel, anchor.tentative_origin(), Visibility::Hidden);
        let size = self
            .host
            .bounding_rect(probe.panel)
            .map_or(Size::ZERO, |r| r.size());
        self.host.detach(&probe);

        let placement = place_with_report(size, anchor, self.host.viewport_bounds());
        if let Some(edge) = placement.flipped {
            trace!(?edge, overflow = placement.overflow.get(edge), "panel pulled inside viewport");
        }
        placement
    }

    fn node_mut(&mut self, id: MenuId) -> Option<&mut MenuNode> {
        self.registry.iter_mut().find(|n| n.id == id)
    }

    fn take_node(&mut self, id: MenuId) -> Option<MenuNode> {
        let pos = self.registry.iter().position(|n| n.id == id)?;
        Some(self.registry.remove(pos))
    }

    fn detach_node(&mut self, node: MenuNode) {
        if self.hover.cancel_for(node.id) {
            trace!(menu = %node.id, "hover open cancelled with its menu");
        }
        if self.hovered.is_some_and(|h| h.menu == node.id) {
            self.hovered = None;
        }
        self.host.detach(&node.mounted);
    }
}

impl fmt::Debug for MenuController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuController")
            .field("config", &self.config)
            .field("registry", &self.registry())
            .field("root", &self.root)
            .field("hover", &self.hover)
            .field("hovered", &self.hovered)
            .field("pointer", &self.pointer)
            .finish_non_exhaustive()
    }
}

impl Drop for MenuController {
    fn drop(&mut self) {
        self.close_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessHost;
    use std::cell::Cell;
    use std::time::Duration;

    fn noop(_: &mut MenuController) {}

    fn controller() -> (MenuController, HeadlessHost) {
        let host = HeadlessHost::new(1920, 1080);
        (MenuController::new(host.clone()), host)
    }

    fn nested() -> Vec<MenuEntry> {
        vec![
            MenuEntry::action("Open", noop),
            MenuEntry::submenu(
                "More",
                vec![
                    MenuEntry::action("Inner", noop),
                    MenuEntry::submenu("Deeper", vec![MenuEntry::action("Leaf", noop)]),
                ],
            ),
        ]
    }

    #[test]
    fn open_places_and_registers_root() {
        let (mut menus, host) = controller();
        let root = menus.open(nested(), Point::new(100, 100));
        assert_eq!(menus.root(), Some(root));
        assert_eq!(menus.registry(), vec![root]);
        assert_eq!(host.visible_panels().len(), 1);
        assert_eq!(host.hidden_count(), 0);
        assert_eq!(
            menus.panel_rect(root).map(|r| r.origin()),
            Some(Point::new(100, 100))
        );
    }

    #[test]
    fn spawn_replaces_active_child() {
        let (mut menus, host) = controller();
        let root = menus.open(nested(), Point::new(0, 0));
        let row = menus.row_rect(EntryRef::new(root, 1)).expect("row");
        let first = menus
            .spawn_submenu(root, 1, row)
            .expect("submenu")
            .expect("root open");
        let second = menus
            .spawn_submenu(root, 1, row)
            .expect("submenu")
            .expect("root open");
        assert_ne!(first, second);
        assert!(!menus.contains(first));
        assert_eq!(menus.registry(), vec![root, second]);
        assert_eq!(host.visible_panels().len(), 2);
    }

    #[test]
    fn spawn_rejects_non_submenus() {
        let (mut menus, _host) = controller();
        let root = menus.open(nested(), Point::new(0, 0));
        let anchor = Rect::new(0, 0, 10, 10);
        assert_eq!(
            menus.spawn_submenu(root, 0, anchor),
            Err(MenuError::NotASubmenu {
                menu: root,
                index: 0
            })
        );
        assert_eq!(
            menus.spawn_submenu(root, 9, anchor),
            Err(MenuError::EntryOutOfRange {
                menu: root,
                index: 9,
                len: 2
            })
        );
        assert_eq!(menus.spawn_submenu(MenuId(999), 1, anchor), Ok(None));
        assert_eq!(menus.chain_depth(), 1);
    }

    #[test]
    fn click_submenu_cancels_pending_hover() {
        let (mut menus, _host) = controller();
        let root = menus.open(nested(), Point::new(0, 0));
        let t0 = Instant::now();
        menus.hover_start(EntryRef::new(root, 1), t0);
        assert!(menus.pending_hover().is_some());
        menus
            .click_entry(EntryRef::new(root, 1))
            .expect("click submenu");
        assert!(menus.pending_hover().is_none());
        assert_eq!(menus.chain_depth(), 2);
    }

    #[test]
    fn hover_on_action_row_schedules_nothing() {
        let (mut menus, _host) = controller();
        let root = menus.open(nested(), Point::new(0, 0));
        assert!(
            menus
                .hover_start(EntryRef::new(root, 0), Instant::now())
                .is_none()
        );
        assert!(menus.next_deadline().is_none());
    }

    #[test]
    fn hover_fires_only_with_pointer_on_row() {
        let (mut menus, _host) = controller();
        let root = menus.open(nested(), Point::new(0, 0));
        let target = EntryRef::new(root, 1);
        let row = menus.row_rect(target).expect("row");
        let t0 = Instant::now();

        menus.pointer_moved(Point::new(row.x + 1, row.y + 1));
        let token = menus.hover_start(target, t0).expect("scheduled");
        menus.pointer_moved(Point::new(1500, 900));
        assert!(!menus.fire_hover(token));
        assert_eq!(menus.chain_depth(), 1);

        menus.pointer_moved(Point::new(row.x + 1, row.y + 1));
        menus.hover_start(target, t0);
        assert!(!menus.tick(t0 + Duration::from_millis(100)));
        assert!(menus.tick(t0 + Duration::from_millis(600)));
        assert_eq!(menus.chain_depth(), 2);
    }

    #[test]
    fn action_callback_can_open_new_menu() {
        let (mut menus, host) = controller();
        let reopened = Rc::new(Cell::new(None));
        let slot = Rc::clone(&reopened);
        let entries = vec![MenuEntry::action("Again", move |menus: &mut MenuController| {
            let id = menus.open(vec![MenuEntry::action("Fresh", noop)], Point::new(50, 50));
            slot.set(Some(id));
        })];
        let root = menus.open(entries, Point::new(10, 10));
        menus.click_entry(EntryRef::new(root, 0)).expect("click");

        let fresh = reopened.get().expect("callback ran");
        assert_eq!(menus.registry(), vec![fresh]);
        assert_eq!(host.visible_panels().len(), 1);
    }

    #[test]
    fn drop_detaches_everything() {
        let (mut menus, host) = controller();
        let root = menus.open(nested(), Point::new(0, 0));
        menus.click_entry(EntryRef::new(root, 1)).expect("click");
        assert_eq!(host.attached_count(), 2);
        drop(menus);
        assert_eq!(host.attached_count(), 0);
    }
}
