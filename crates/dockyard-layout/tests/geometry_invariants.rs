//! Property-based invariant tests for the strip geometry.
//!
//! 1. Strip and corner rectangles never overlap.
//! 2. An opposing portion pair always leaves the minimum interior.
//! 3. calculate_tabs is idempotent.
//! 4. A strip transform followed by its inverse restores the rectangle.
//! 5. Hit testing the center of a tab's bounds finds that tab.
//! 6. A pane moved between auto-hide edges keeps hittable tabs.

use dockyard_core::{DockConfig, DockState, Edge, EdgePortions, MonospaceStyle, Point, Rect, Size};
use dockyard_layout::{DockPanel, PortionModel, StripTransform};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn panel(host: Size, right_to_left: bool) -> DockPanel {
    let mut config = DockConfig::default();
    config.right_to_left = right_to_left;
    let mut panel = DockPanel::new(config, Box::new(MonospaceStyle::default()));
    panel.set_host_size(host);
    panel
}

/// Put one pane with a single tab on every edge whose bit is set.
fn populate(panel: &mut DockPanel, edges: u8) {
    for (bit, edge) in Edge::ALL.into_iter().enumerate() {
        if edges & (1 << bit) != 0 {
            let pane = panel.add_pane(edge.auto_hide_state());
            panel.add_content(pane, format!("{:?}", edge)).unwrap();
        }
    }
}

fn portion() -> impl Strategy<Value = f64> {
    prop_oneof![0.01f64..0.99, 1.0f64..3000.0]
}

fn edge() -> impl Strategy<Value = Edge> {
    prop_oneof![
        Just(Edge::Top),
        Just(Edge::Bottom),
        Just(Edge::Left),
        Just(Edge::Right),
    ]
}

fn tab_texts() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-zA-Z ]{0,12}", 1..=4)
}

fn center(rect: Rect) -> Point {
    Point::new(rect.x + rect.width / 2, rect.y + rect.height / 2)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Strips and corners never overlap
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn strips_never_overlap(
        width in 60i32..2000,
        height in 60i32..2000,
        edges in 0u8..16,
        right_to_left in any::<bool>(),
    ) {
        let mut panel = panel(Size::new(width, height), right_to_left);
        populate(&mut panel, edges);

        let mut rects: Vec<Rect> = Edge::ALL
            .into_iter()
            .map(|e| panel.strip_rectangle(e))
            .collect();
        rects.extend(panel.corner_rectangles());
        let rects: Vec<Rect> = rects.into_iter().filter(|r| !r.is_empty()).collect();

        let host = Rect::from_size(Size::new(width, height));
        for (i, a) in rects.iter().enumerate() {
            prop_assert_eq!(host.intersection(a), *a, "{:?} leaves the host", a);
            for b in &rects[i + 1..] {
                prop_assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Portion pairs leave the minimum interior
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn portion_pair_fits_extent(
        extent in 24i32..5000,
        first in portion(),
        second in portion(),
        vertical in any::<bool>(),
    ) {
        let mut model = PortionModel::new(EdgePortions::default(), 24);
        let (a, b) = if vertical { (Edge::Left, Edge::Right) } else { (Edge::Top, Edge::Bottom) };
        model.set_portion(a, first).unwrap();
        model.set_portion(b, second).unwrap();

        let (x, y) = model.resolve_pair(vertical, extent);
        prop_assert!(x >= 0 && y >= 0);
        prop_assert!(x + y <= extent - 24, "{} + {} > {} - 24", x, y, extent);

        if model.portion(a) < 1.0 && model.portion(b) < 1.0 {
            prop_assert!(model.portion(a) + model.portion(b) <= 1.0 + 1e-9);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. calculate_tabs is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn calculate_tabs_idempotent(edge in edge(), texts in tab_texts()) {
        let mut panel = panel(Size::new(1024, 768), false);
        let pane = panel.add_pane(edge.auto_hide_state());
        for text in &texts {
            panel.add_content(pane, text.clone()).unwrap();
        }

        panel.calculate_tabs(edge);
        let first = panel.tabs_on(edge);
        panel.calculate_tabs(edge);
        prop_assert_eq!(panel.tabs_on(edge), first);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Transform round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn transform_round_trip(
        edge in edge(),
        strip_x in 0i32..200,
        strip_y in 0i32..200,
        thickness in 10i32..40,
        length in 50i32..2000,
        offset in 0i32..50,
        width in 1i32..50,
        right_to_left in any::<bool>(),
    ) {
        let strip = Rect::new(strip_x, strip_y, length, thickness);
        let rect = Rect::new(strip_x + offset, strip_y + 1, width, thickness - 1);
        let transform = StripTransform::for_edge(edge, strip, right_to_left);

        let back = transform.inverse_rect(transform.transform_rect(rect));
        prop_assert!((back.x - rect.x).abs() <= 1);
        prop_assert!((back.y - rect.y).abs() <= 1);
        prop_assert_eq!((back.width, back.height), (rect.width, rect.height));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Hit test at the center of a tab's bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hit_test_finds_tab_at_bounds_center(
        edge in edge(),
        texts in tab_texts(),
        others in 0u8..16,
        width in 600i32..1600,
        height in 600i32..1600,
        right_to_left in any::<bool>(),
    ) {
        let mut panel = panel(Size::new(width, height), right_to_left);
        populate(&mut panel, others);
        let pane = panel.add_pane(edge.auto_hide_state());
        let mut contents = Vec::new();
        for text in &texts {
            contents.push(panel.add_content(pane, text.clone()).unwrap());
        }

        for content in contents {
            let bounds = panel.tab_bounds(content);
            prop_assert!(!bounds.is_empty());
            prop_assert_eq!(panel.hit_test(center(bounds)), Some(content));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Moving a pane between auto-hide edges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edge_changes_keep_tabs_hittable(
        start in edge(),
        moves in proptest::collection::vec(edge(), 1..6),
        texts in tab_texts(),
        others in 0u8..16,
        right_to_left in any::<bool>(),
    ) {
        let mut panel = panel(Size::new(1024, 768), right_to_left);
        populate(&mut panel, others);
        let pane = panel.add_pane(start.auto_hide_state());
        let mut contents = Vec::new();
        for text in &texts {
            contents.push(panel.add_content(pane, text.clone()).unwrap());
        }

        for target in moves {
            panel.set_dock_state(pane, target.auto_hide_state()).unwrap();
            prop_assert!(!panel.strip_rectangle(target).is_empty());
            for &content in &contents {
                let tab = panel.tab(content);
                prop_assert_eq!(tab.map(|t| t.edge), Some(target));
                let bounds = panel.tab_bounds(content);
                prop_assert!(!bounds.is_empty(), "{:?} lost its tab on {:?}", content, target);
                prop_assert_eq!(panel.hit_test(center(bounds)), Some(content));
            }
        }
    }
}

#[test]
fn zero_panes_never_hit() {
    let panel = panel(Size::new(800, 600), false);
    assert!(Edge::ALL
        .into_iter()
        .all(|edge| panel.strip_rectangle(edge) == Rect::EMPTY));
    assert_eq!(panel.hit_test(Point::new(5, 5)), None);
    assert!(!DockState::Document.is_auto_hide());
}
