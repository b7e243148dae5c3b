// Auto-hide strip engine: derived geometry for strips, corners and tabs,
// rebuilt lazily after every invalidation and shared by painting, hit
// testing and accessibility.

use std::cell::RefCell;
use std::collections::HashMap;

use dockyard_core::{ContentId, Edge, Font, PaneId, Path, Point, PointF, Rect, Size, StripMetrics, TabStyle};

use crate::pane::PaneSet;
use crate::partition::{partition, EdgePresence, Regions};
use crate::tab_layout::{layout_tabs, strip_thickness, tab_rectangle, TabSlot};
use crate::transform::StripTransform;

/// Geometry of one auto-hide tab, valid until the next invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabGeometry {
    pub content: ContentId,
    pub pane: PaneId,
    pub edge: Edge,
    pub tab_x: i32,
    pub tab_width: i32,
}

impl TabGeometry {
    fn slot(&self) -> TabSlot {
        TabSlot {
            content: self.content,
            pane: self.pane,
            tab_x: self.tab_x,
            tab_width: self.tab_width,
        }
    }
}

fn edge_index(edge: Edge) -> usize {
    match edge {
        Edge::Top => 0,
        Edge::Bottom => 1,
        Edge::Left => 2,
        Edge::Right => 3,
    }
}

// ──────────────────────────────────────────────
// GeometryCache
// ──────────────────────────────────────────────

/// Side table of derived geometry keyed by content id. Nothing here is
/// stored on panes or contents.
struct GeometryCache {
    dirty: bool,
    host: Size,
    regions: Regions,
    order: [Vec<ContentId>; 4],
    tabs: HashMap<ContentId, TabGeometry>,
    /// Logical outlines, built on first use.
    outlines: HashMap<ContentId, Path>,
}

impl GeometryCache {
    fn new() -> Self {
        Self {
            dirty: true,
            host: Size::default(),
            regions: Regions::default(),
            order: Default::default(),
            tabs: HashMap::new(),
            outlines: HashMap::new(),
        }
    }

    fn drop_edge(&mut self, edge: Edge) {
        for content in std::mem::take(&mut self.order[edge_index(edge)]) {
            // The content may already have been laid out on another edge.
            if self.tabs.get(&content).is_some_and(|tab| tab.edge == edge) {
                self.tabs.remove(&content);
                self.outlines.remove(&content);
            }
        }
    }

    fn store_edge(&mut self, edge: Edge, slots: Vec<TabSlot>) {
        self.drop_edge(edge);
        let order = &mut self.order[edge_index(edge)];
        for slot in slots {
            order.push(slot.content);
            self.tabs.insert(
                slot.content,
                TabGeometry {
                    content: slot.content,
                    pane: slot.pane,
                    edge,
                    tab_x: slot.tab_x,
                    tab_width: slot.tab_width,
                },
            );
        }
    }
}

// ──────────────────────────────────────────────
// AutoHideStrip
// ──────────────────────────────────────────────

pub struct AutoHideStrip {
    style: Box<dyn TabStyle>,
    metrics: StripMetrics,
    font: Font,
    cache: RefCell<GeometryCache>,
}

impl AutoHideStrip {
    pub fn new(style: Box<dyn TabStyle>, metrics: StripMetrics, font: Font) -> Self {
        Self {
            style,
            metrics,
            font,
            cache: RefCell::new(GeometryCache::new()),
        }
    }

    pub fn metrics(&self) -> &StripMetrics {
        &self.metrics
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn set_metrics(&mut self, metrics: StripMetrics) {
        self.metrics = metrics;
        self.invalidate();
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.invalidate();
    }

    pub fn set_style(&mut self, style: Box<dyn TabStyle>) {
        self.style = style;
        self.invalidate();
    }

    /// Mark all derived geometry stale. The next read rebuilds it.
    pub fn invalidate(&self) {
        self.cache.borrow_mut().dirty = true;
    }

    /// Drop the tab of a content that left its pane or was removed.
    pub fn forget_tab(&self, content: ContentId) {
        let mut cache = self.cache.borrow_mut();
        cache.tabs.remove(&content);
        cache.outlines.remove(&content);
        for order in cache.order.iter_mut() {
            order.retain(|c| *c != content);
        }
        cache.dirty = true;
    }

    pub fn measure_strip_thickness(&self) -> i32 {
        strip_thickness(&self.metrics, &self.font)
    }

    fn rebuild(&self, cache: &mut GeometryCache, panes: &PaneSet, host: Size) {
        let presence = EdgePresence::from_fn(|edge| panes.pane_count(edge) > 0);
        cache.host = host;
        cache.regions = partition(host, self.measure_strip_thickness(), presence);
        cache.order = Default::default();
        cache.tabs.clear();
        cache.outlines.clear();
        for edge in Edge::ALL {
            let slots = self.slots_for(edge, cache.regions.strip(edge), panes);
            cache.store_edge(edge, slots);
        }
        cache.dirty = false;
        log::trace!(
            "auto-hide geometry rebuilt for {}x{}: {} tabs",
            host.width,
            host.height,
            cache.tabs.len()
        );
    }

    fn slots_for(&self, edge: Edge, strip: Rect, panes: &PaneSet) -> Vec<TabSlot> {
        layout_tabs(edge, strip, panes, self.style.as_ref(), &self.font, &self.metrics)
    }

    /// Run `f` against up-to-date geometry.
    fn with_cache<R>(&self, panes: &PaneSet, host: Size, f: impl FnOnce(&mut GeometryCache) -> R) -> R {
        let mut cache = self.cache.borrow_mut();
        if cache.dirty || cache.host != host {
            self.rebuild(&mut cache, panes, host);
        }
        f(&mut cache)
    }

    /// Recompute `tab_x`/`tab_width` of every tab on `edge`.
    pub fn calculate_tabs(&self, panes: &PaneSet, host: Size, edge: Edge) {
        self.with_cache(panes, host, |cache| {
            let slots = self.slots_for(edge, cache.regions.strip(edge), panes);
            log::debug!("calculate_tabs {:?}: {} tabs", edge, slots.len());
            cache.store_edge(edge, slots);
        });
    }

    pub fn regions(&self, panes: &PaneSet, host: Size) -> Regions {
        self.with_cache(panes, host, |cache| cache.regions)
    }

    pub fn logical_strip_rectangle(&self, panes: &PaneSet, host: Size, edge: Edge) -> Rect {
        self.regions(panes, host).strip(edge)
    }

    pub fn strip_transform(&self, panes: &PaneSet, host: Size, edge: Edge, right_to_left: bool) -> StripTransform {
        let logical = self.logical_strip_rectangle(panes, host, edge);
        StripTransform::for_edge(edge, logical, right_to_left)
    }

    /// Client-space strip rectangle, or `Rect::EMPTY` when nothing is shown.
    pub fn strip_rectangle(&self, panes: &PaneSet, host: Size, edge: Edge, right_to_left: bool) -> Rect {
        let logical = self.logical_strip_rectangle(panes, host, edge);
        StripTransform::for_edge(edge, logical, right_to_left).transform_rect(logical)
    }

    pub fn corner_rectangles(&self, panes: &PaneSet, host: Size) -> [Rect; 4] {
        self.regions(panes, host).corners()
    }

    /// Non-empty corner and strip rectangles: the area the strips occupy.
    pub fn display_region(&self, panes: &PaneSet, host: Size, right_to_left: bool) -> Vec<Rect> {
        let mut region: Vec<Rect> = self
            .corner_rectangles(panes, host)
            .into_iter()
            .filter(|r| !r.is_empty())
            .collect();
        for edge in Edge::ALL {
            let strip = self.strip_rectangle(panes, host, edge, right_to_left);
            if !strip.is_empty() {
                region.push(strip);
            }
        }
        region
    }

    pub fn tab(&self, panes: &PaneSet, host: Size, content: ContentId) -> Option<TabGeometry> {
        self.with_cache(panes, host, |cache| cache.tabs.get(&content).copied())
    }

    /// Tabs on `edge` in layout order.
    pub fn tabs_on(&self, panes: &PaneSet, host: Size, edge: Edge) -> Vec<TabGeometry> {
        self.with_cache(panes, host, |cache| {
            cache.order[edge_index(edge)]
                .iter()
                .filter_map(|c| cache.tabs.get(c).copied())
                .collect()
        })
    }

    /// Tab rectangle, logical or carried into client space.
    pub fn tab_rectangle(
        &self,
        panes: &PaneSet,
        host: Size,
        content: ContentId,
        transformed: bool,
        right_to_left: bool,
    ) -> Rect {
        let (tab, strip) = match self.with_cache(panes, host, |cache| {
            cache
                .tabs
                .get(&content)
                .map(|tab| (*tab, cache.regions.strip(tab.edge)))
        }) {
            Some(found) => found,
            None => return Rect::EMPTY,
        };
        let logical = tab_rectangle(tab.edge, strip, &tab.slot(), &self.metrics);
        if !transformed {
            return logical;
        }
        StripTransform::for_edge(tab.edge, strip, right_to_left).transform_rect(logical)
    }

    fn logical_outline(&self, cache: &mut GeometryCache, content: ContentId) -> Option<Path> {
        if let Some(path) = cache.outlines.get(&content) {
            return Some(path.clone());
        }
        let tab = *cache.tabs.get(&content)?;
        let strip = cache.regions.strip(tab.edge);
        let rect = tab_rectangle(tab.edge, strip, &tab.slot(), &self.metrics);
        if rect.is_empty() {
            return None;
        }
        let path = self
            .style
            .build_outline(rect, tab.edge.tab_points_up(), self.metrics.curve_size);
        cache.outlines.insert(content, path.clone());
        Some(path)
    }

    /// Client-space outline of a tab. The same path backs painting, bounds
    /// and hit testing.
    pub fn tab_outline(&self, panes: &PaneSet, host: Size, content: ContentId, right_to_left: bool) -> Option<Path> {
        self.with_cache(panes, host, |cache| {
            let edge = cache.tabs.get(&content)?.edge;
            let path = self.logical_outline(cache, content)?;
            let transform =
                StripTransform::for_edge(edge, cache.regions.strip(edge), right_to_left);
            Some(transform.transform_path(&path))
        })
    }

    pub fn tab_bounds(&self, panes: &PaneSet, host: Size, content: ContentId, right_to_left: bool) -> Rect {
        self.tab_outline(panes, host, content, right_to_left)
            .map(|path| path.bounds())
            .unwrap_or(Rect::EMPTY)
    }

    /// Content whose tab outline contains `point`, checking strips left,
    /// right, top, bottom and tabs in layout order. First match wins.
    pub fn hit_test(&self, panes: &PaneSet, host: Size, point: Point, right_to_left: bool) -> Option<ContentId> {
        self.with_cache(panes, host, |cache| {
            for edge in Edge::HIT_TEST_ORDER {
                let logical_strip = cache.regions.strip(edge);
                if logical_strip.is_empty() {
                    continue;
                }
                let transform = StripTransform::for_edge(edge, logical_strip, right_to_left);
                if !transform.transform_rect(logical_strip).contains(point) {
                    continue;
                }

                // Test in logical space: the inverse transform takes the
                // point to where the untransformed outline lives.
                let logical_point = transform.inverse_point(PointF::from(point));
                let order = cache.order[edge_index(edge)].clone();
                for content in order {
                    if let Some(path) = self.logical_outline(cache, content) {
                        if path.contains(logical_point) {
                            return Some(content);
                        }
                    }
                }
            }
            None
        })
    }
}
