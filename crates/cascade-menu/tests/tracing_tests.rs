//! Log output of the controller, captured with a tracing layer.

#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};

use cascade_core::geometry::Point;
use cascade_menu::{EntryRef, HeadlessHost, MenuController, MenuEntry};
use tracing::field::{Field, Visit};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Default, Clone)]
struct MessageLog {
    messages: Arc<Mutex<Vec<String>>>,
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }
}

impl<S> Layer<S> for MessageLog
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            self.messages.lock().unwrap().push(message);
        }
    }
}

fn capture() -> (tracing::subscriber::DefaultGuard, Arc<Mutex<Vec<String>>>) {
    let log = MessageLog::default();
    let messages = Arc::clone(&log.messages);
    let guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(log));
    tracing::callsite::rebuild_interest_cache();
    (guard, messages)
}

fn noop(_: &mut MenuController) {}

#[test]
fn lifecycle_is_logged() {
    let (_guard, messages) = capture();
    let host = HeadlessHost::new(1920, 1080);
    let mut menus = MenuController::new(host);

    let root = menus.open(
        vec![MenuEntry::submenu("More", vec![MenuEntry::action("Inner", noop)])],
        Point::new(10, 10),
    );
    menus.click_entry(EntryRef::new(root, 0)).unwrap();
    menus.close_descendants(root);
    menus.close_all();

    let messages = messages.lock().unwrap();
    let opened = messages.iter().filter(|m| *m == "menu opened").count();
    assert_eq!(opened, 2, "{messages:?}");
    assert!(messages.iter().any(|m| m == "descendants closed"));
    assert!(messages.iter().any(|m| m == "all menus closed"));
}

#[test]
fn viewport_correction_is_logged() {
    let (_guard, messages) = capture();
    let host = HeadlessHost::new(800, 600);
    let mut menus = MenuController::new(host);
    menus.open(vec![MenuEntry::action("Edge", noop)], Point::new(790, 10));

    let messages = messages.lock().unwrap();
    assert!(
        messages.iter().any(|m| m == "panel pulled inside viewport"),
        "{messages:?}"
    );
}
