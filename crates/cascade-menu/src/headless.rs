#![forbid(unsafe_code)]

//! In-memory host with a fixed layout model.
//!
//! Rows and dividers have fixed heights; a panel is as wide as its widest
//! label (measured in display columns) plus padding, with a floor. Recent
//! attaches and detaches are recorded so tests can check that probe panels
//! are discarded and that no panel outlives its node. The record is bounded
//! (see [`HeadlessHost::with_history_limit`]); the oldest events drop first.
//!
//! `HeadlessHost` is a cheap handle: clones share the same state, so a test
//! can keep one clone while the controller owns another.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use cascade_core::geometry::{Point, Rect, Size};
use unicode_width::UnicodeWidthStr;

use crate::host::{ElementId, GeometryOracle, MenuHost, MountedPanel, Visibility};
use crate::node::MenuId;
use crate::panel::{Panel, PanelChild, RowKind};

/// Events kept by [`HeadlessHost::history`] unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Layout constants for [`HeadlessHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessMetrics {
    pub row_height: i32,
    pub divider_height: i32,
    /// Width of one display column.
    pub column_width: i32,
    pub padding_x: i32,
    pub padding_y: i32,
    /// Extra width reserved on submenu rows for the arrow.
    pub arrow_width: i32,
    pub min_width: i32,
}

impl Default for HeadlessMetrics {
    fn default() -> Self {
        Self {
            row_height: 24,
            divider_height: 9,
            column_width: 8,
            padding_x: 12,
            padding_y: 4,
            arrow_width: 16,
            min_width: 120,
        }
    }
}

/// Something that happened to the headless page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Attached {
        panel: ElementId,
        owner: MenuId,
        rect: Rect,
        visibility: Visibility,
    },
    Detached {
        panel: ElementId,
        owner: MenuId,
    },
}

#[derive(Debug)]
struct AttachedPanel {
    mounted: MountedPanel,
    owner: MenuId,
    rect: Rect,
    visibility: Visibility,
}

#[derive(Debug)]
struct HeadlessState {
    viewport: Size,
    metrics: HeadlessMetrics,
    next_element: u64,
    rects: HashMap<ElementId, Rect>,
    panels: Vec<AttachedPanel>,
    history: VecDeque<HostEvent>,
    history_limit: usize,
}

impl HeadlessState {
    fn record(&mut self, event: HostEvent) {
        if self.history_limit == 0 {
            return;
        }
        while self.history.len() >= self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(event);
    }

    fn allocate(&mut self, rect: Rect) -> ElementId {
        let id = ElementId(self.next_element);
        self.next_element += 1;
        self.rects.insert(id, rect);
        id
    }
}

/// Deterministic host for tests and layout-free embedding.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessHost {
    /// Create a host with a `width` x `height` viewport.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            state: Rc::new(RefCell::new(HeadlessState {
                viewport: Size::new(width, height),
                metrics: HeadlessMetrics::default(),
                next_element: 1,
                rects: HashMap::new(),
                panels: Vec::new(),
                history: VecDeque::new(),
                history_limit: DEFAULT_HISTORY_LIMIT,
            })),
        }
    }

    /// Replace the layout constants.
    #[must_use]
    pub fn with_metrics(self, metrics: HeadlessMetrics) -> Self {
        self.state.borrow_mut().metrics = metrics;
        self
    }

    /// Keep at most `limit` events in [`history`](Self::history). Zero
    /// disables recording.
    #[must_use]
    pub fn with_history_limit(self, limit: usize) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.history_limit = limit;
            while state.history.len() > limit {
                state.history.pop_front();
            }
        }
        self
    }

    /// Resize the viewport. Attached panels keep their positions.
    pub fn set_viewport(&self, width: i32, height: i32) {
        self.state.borrow_mut().viewport = Size::new(width, height);
    }

    /// Size the panel would take when attached.
    #[must_use]
    pub fn measure(&self, panel: &Panel) -> Size {
        measure(panel, &self.state.borrow().metrics)
    }

    /// Visible panels as `(owner, rect)`, in attach order.
    #[must_use]
    pub fn visible_panels(&self) -> Vec<(MenuId, Rect)> {
        self.state
            .borrow()
            .panels
            .iter()
            .filter(|p| p.visibility == Visibility::Visible)
            .map(|p| (p.owner, p.rect))
            .collect()
    }

    /// Number of attached panels, hidden ones included.
    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.state.borrow().panels.len()
    }

    /// Number of attached hidden panels.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.state
            .borrow()
            .panels
            .iter()
            .filter(|p| p.visibility == Visibility::Hidden)
            .count()
    }

    /// Number of live elements (panels and their children).
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.state.borrow().rects.len()
    }

    /// Recent attaches and detaches, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<HostEvent> {
        self.state.borrow().history.iter().cloned().collect()
    }

    pub fn clear_history(&self) {
        self.state.borrow_mut().history.clear();
    }
}

impl GeometryOracle for HeadlessHost {
    fn bounding_rect(&self, element: ElementId) -> Option<Rect> {
        self.state.borrow().rects.get(&element).copied()
    }

    fn viewport_bounds(&self) -> Rect {
        let viewport = self.state.borrow().viewport;
        Rect::from_size(viewport.width, viewport.height)
    }
}

impl MenuHost for HeadlessHost {
    fn attach(&mut self, panel: &Panel, origin: Point, visibility: Visibility) -> MountedPanel {
        let mut state = self.state.borrow_mut();
        let metrics = state.metrics;
        let size = measure(panel, &metrics);
        let rect = Rect::from_origin_size(origin, size);
        let panel_id = state.allocate(rect);

        let mut y = origin.y + metrics.padding_y;
        let mut children = Vec::with_capacity(panel.len());
        for child in panel.children() {
            let height = match child {
                PanelChild::Row(_) => metrics.row_height,
                PanelChild::Divider { .. } => metrics.divider_height,
            };
            children.push(state.allocate(Rect::new(origin.x, y, size.width, height)));
            y += height;
        }

        let mounted = MountedPanel {
            panel: panel_id,
            children,
        };
        state.panels.push(AttachedPanel {
            mounted: mounted.clone(),
            owner: panel.owner(),
            rect,
            visibility,
        });
        state.record(HostEvent::Attached {
            panel: panel_id,
            owner: panel.owner(),
            rect,
            visibility,
        });
        mounted
    }

    fn detach(&mut self, mounted: &MountedPanel) {
        let mut state = self.state.borrow_mut();
        let Some(pos) = state
            .panels
            .iter()
            .position(|p| p.mounted.panel == mounted.panel)
        else {
            return;
        };
        let removed = state.panels.remove(pos);
        state.rects.remove(&removed.mounted.panel);
        for child in &removed.mounted.children {
            state.rects.remove(child);
        }
        state.record(HostEvent::Detached {
            panel: removed.mounted.panel,
            owner: removed.owner,
        });
    }
}

fn measure(panel: &Panel, metrics: &HeadlessMetrics) -> Size {
    let mut content_width = 0;
    let mut height = metrics.padding_y * 2;
    for child in panel.children() {
        match child {
            PanelChild::Row(row) => {
                let columns = i32::try_from(row.label.width()).unwrap_or(i32::MAX);
                let mut width = columns.saturating_mul(metrics.column_width);
                if row.kind == RowKind::Submenu {
                    width = width.saturating_add(metrics.arrow_width);
                }
                content_width = content_width.max(width);
                height += metrics.row_height;
            }
            PanelChild::Divider { .. } => height += metrics.divider_height,
        }
    }
    let width = content_width
        .saturating_add(metrics.padding_x * 2)
        .max(metrics.min_width);
    Size::new(width, height)
}
