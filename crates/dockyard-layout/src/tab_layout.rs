use dockyard_core::{ContentId, Edge, Font, PaneId, Rect, StripMetrics, TabStyle};

use crate::pane::PaneSet;

/// Offset and width of one tab along its strip, in logical space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSlot {
    pub content: ContentId,
    pub pane: PaneId,
    pub tab_x: i32,
    pub tab_width: i32,
}

/// Strip thickness shared by all four edges.
pub fn strip_thickness(metrics: &StripMetrics, font: &Font) -> i32 {
    (metrics.image_gap_top + metrics.image_gap_bottom + metrics.image_height).max(font.line_height)
        + metrics.tab_gap_top
}

/// Icon width for a strip of the given thickness. The icon grows in whole
/// multiples of its base width once the strip leaves room for a taller icon.
pub fn image_width(metrics: &StripMetrics, strip_height: i32) -> i32 {
    let available = strip_height - metrics.image_gap_top - metrics.image_gap_bottom;
    if available > metrics.image_height && metrics.image_height > 0 {
        metrics.image_width * (available / metrics.image_height)
    } else {
        metrics.image_width
    }
}

/// Lay out the tabs of every visible pane on `edge` along `strip`.
///
/// Panes are visited in pane-set order and tabs in display order, so
/// repeated passes over unchanged state produce identical slots. An empty
/// strip lays out nothing.
pub fn layout_tabs(
    edge: Edge,
    strip: Rect,
    panes: &PaneSet,
    style: &dyn TabStyle,
    font: &Font,
    metrics: &StripMetrics,
) -> Vec<TabSlot> {
    let mut slots = Vec::new();
    if strip.is_empty() {
        return slots;
    }

    let image_width = image_width(metrics, strip.height);
    let fixed = image_width
        + metrics.image_gap_left
        + metrics.image_gap_right
        + metrics.text_gap_left
        + metrics.text_gap_right;

    let mut x = strip.x + metrics.tab_gap_left;
    for pane in panes.panes_on(edge) {
        for &content in pane.contents() {
            let width = fixed + style.measure_text(panes.tab_text(content), font);
            slots.push(TabSlot {
                content,
                pane: pane.id,
                tab_x: x,
                tab_width: width,
            });
            x += width;
        }
        x += metrics.tab_gap_between;
    }
    slots
}

/// Logical rectangle of a tab. The tab hugs the outer side of its strip and
/// leaves `tab_gap_top` free on the side facing the host interior.
pub fn tab_rectangle(edge: Edge, strip: Rect, slot: &TabSlot, metrics: &StripMetrics) -> Rect {
    if strip.is_empty() {
        return Rect::EMPTY;
    }
    let y = strip.y
        + match edge {
            Edge::Top | Edge::Right => 0,
            Edge::Bottom | Edge::Left => metrics.tab_gap_top,
        };
    let height = strip.height - metrics.tab_gap_top;
    if slot.tab_width <= 0 || height <= 0 {
        return Rect::EMPTY;
    }
    Rect::new(slot.tab_x, y, slot.tab_width, height)
}

/// Logical icon and text rectangles inside a tab rectangle.
pub fn tab_content_rects(tab: Rect, metrics: &StripMetrics) -> (Rect, Rect) {
    let image_height = tab.height - metrics.image_gap_top - metrics.image_gap_bottom;
    let image_width = image_width(metrics, tab.height);
    let image = Rect::new(
        tab.x + metrics.image_gap_left,
        tab.y + metrics.image_gap_top,
        image_width,
        image_height,
    );
    let lead = metrics.image_gap_left + image_width + metrics.image_gap_right + metrics.text_gap_left;
    let text = Rect::new(tab.x + lead, tab.y, tab.width - lead, tab.height);
    (image, text)
}
