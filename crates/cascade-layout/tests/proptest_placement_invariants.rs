//! Property-based invariant tests for the placement engine.
//!
//! 1. A panel that fits at its anchor is never moved.
//! 2. At most one axis changes, by exactly the chosen edge's overflow.
//! 3. The corrected edge no longer overflows.
//! 4. A panel no larger than the viewport that overflows on exactly one edge
//!    ends up fully inside.
//! 5. No panics on extreme inputs.

use cascade_layout::{Anchor, Edge, Overflow, Point, Rect, Size, place, place_with_report};
use proptest::prelude::*;

fn viewport_strategy() -> impl Strategy<Value = Rect> {
    (1i32..=4000, 1i32..=3000).prop_map(|(w, h)| Rect::from_size(w, h))
}

fn size_strategy() -> impl Strategy<Value = Size> {
    (0i32..=2000, 0i32..=2000).prop_map(|(w, h)| Size::new(w, h))
}

fn scale(extent: i32, fraction: f64) -> i32 {
    (f64::from(extent) * fraction).floor() as i32
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (-1000i32..=5000, -1000i32..=5000).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn fitting_panel_is_untouched(viewport in viewport_strategy(), fx in 0.0f64..=1.0, fy in 0.0f64..=1.0, fw in 0.0f64..=1.0, fh in 0.0f64..=1.0) {
        let size = Size::new(scale(viewport.width, fw), scale(viewport.height, fh));
        let anchor = Point::new(
            scale(viewport.width - size.width, fx),
            scale(viewport.height - size.height, fy),
        );
        prop_assert!(Overflow::compute(Rect::from_origin_size(anchor, size), viewport).is_none());
        prop_assert_eq!(place(size, Anchor::Point(anchor), viewport), anchor);
    }

    #[test]
    fn single_axis_correction(viewport in viewport_strategy(), size in size_strategy(), anchor in point_strategy()) {
        let p = place_with_report(size, Anchor::Point(anchor), viewport);
        let dx = p.origin.x - p.tentative.x;
        let dy = p.origin.y - p.tentative.y;
        prop_assert!(dx == 0 || dy == 0);
        match p.flipped {
            None => {
                prop_assert!(p.overflow.is_none());
                prop_assert_eq!((dx, dy), (0, 0));
            }
            Some(edge) => {
                let amount = p.overflow.get(edge);
                prop_assert!(amount > 0);
                prop_assert_eq!(edge.correction(amount), (dx, dy));
            }
        }
    }

    #[test]
    fn corrected_edge_no_longer_overflows(viewport in viewport_strategy(), size in size_strategy(), anchor in point_strategy()) {
        let p = place_with_report(size, Anchor::Point(anchor), viewport);
        if let Some(edge) = p.flipped {
            let after = Overflow::compute(p.rect(size), viewport);
            prop_assert_eq!(after.get(edge), 0);
        }
    }

    #[test]
    fn one_edge_overflow_ends_inside(viewport in viewport_strategy(), fw in 0.0f64..=1.0, fh in 0.0f64..=1.0, fy in 0.0f64..=1.0, past in 1i32..=500) {
        // Panel fits vertically and pokes out past the right edge only.
        let size = Size::new(scale(viewport.width, fw).max(1), scale(viewport.height, fh));
        let anchor = Point::new(
            viewport.width - size.width + past,
            scale(viewport.height - size.height, fy),
        );
        let before = Overflow::compute(Rect::from_origin_size(anchor, size), viewport);
        let edges = Edge::PRIORITY.iter().filter(|e| before.get(**e) > 0).count();
        prop_assert_eq!(edges, 1);
        let p = place_with_report(size, Anchor::Point(anchor), viewport);
        prop_assert_eq!(p.flipped, Some(Edge::Right));
        prop_assert!(Overflow::compute(p.rect(size), viewport).is_none());
    }

    #[test]
    fn extreme_inputs_do_not_panic(w in any::<i32>(), h in any::<i32>(), x in any::<i32>(), y in any::<i32>()) {
        let _ = place_with_report(Size::new(w, h), Anchor::Point(Point::new(x, y)), Rect::from_size(1920, 1080));
        let _ = place(Size::new(w, h), Anchor::Rect(Rect::new(x, y, w, h)), Rect::new(x, y, 1920, 1080));
    }
}
