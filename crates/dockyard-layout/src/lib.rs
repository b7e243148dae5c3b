// Docking layout engine: auto-hide strips, docked window sizing, nested
// splitters and hit testing over a host rectangle.

pub mod accessibility;
pub mod nested;
pub mod paint;
pub mod pane;
pub mod partition;
pub mod portion;
pub mod strip;
pub mod tab_layout;
pub mod transform;

use std::collections::HashMap;

use dockyard_core::{
    ContentId, DockConfig, DockState, Edge, MonospaceStyle, MouseButton, Padding, PaneId, Path,
    Point, Rect, Result, Size, SplitDirection, TabStyle,
};

pub use nested::{NestedGeometry, NestedLayout, Splitter};
pub use pane::{Content, DockPane, PaneSet};
pub use partition::{partition, EdgePresence, Regions};
pub use portion::PortionModel;
pub use strip::{AutoHideStrip, TabGeometry};
pub use transform::{Matrix, StripTransform};

// ──────────────────────────────────────────────
// DockPanel
// ──────────────────────────────────────────────

/// The host docking-state container. It owns panes, portions and the strip
/// engine; every mutation goes through here so derived geometry is
/// invalidated before the next read.
pub struct DockPanel {
    panes: PaneSet,
    portions: PortionModel,
    strip: AutoHideStrip,
    windows: HashMap<DockState, NestedLayout>,
    splitter_size: i32,
    host: Size,
    screen_origin: Point,
    right_to_left: bool,
    show_auto_hide_content_on_hover: bool,
    active_auto_hide_content: Option<ContentId>,
}

impl DockPanel {
    pub fn new(config: DockConfig, style: Box<dyn TabStyle>) -> Self {
        Self {
            panes: PaneSet::new(),
            portions: PortionModel::new(config.portions, config.minimum_interior_size),
            strip: AutoHideStrip::new(style, config.metrics, config.font),
            windows: HashMap::new(),
            splitter_size: config.splitter_size,
            host: Size::default(),
            screen_origin: Point::default(),
            right_to_left: config.right_to_left,
            show_auto_hide_content_on_hover: config.show_auto_hide_content_on_hover,
            active_auto_hide_content: None,
        }
    }

    /// Panel configured from the user's config file, or defaults.
    pub fn from_user_config(style: Box<dyn TabStyle>) -> Self {
        Self::new(dockyard_core::config::load_config(), style)
    }

    pub fn with_host(host: Size) -> Self {
        let mut panel = Self::new(DockConfig::default(), Box::new(MonospaceStyle::default()));
        panel.host = host;
        panel
    }

    // ── host state ──

    pub fn host_size(&self) -> Size {
        self.host
    }

    pub fn set_host_size(&mut self, host: Size) {
        if self.host != host {
            self.host = host;
            self.strip.invalidate();
        }
    }

    pub fn set_screen_origin(&mut self, origin: Point) {
        self.screen_origin = origin;
    }

    pub fn right_to_left(&self) -> bool {
        self.right_to_left
    }

    pub fn set_right_to_left(&mut self, right_to_left: bool) {
        self.right_to_left = right_to_left;
    }

    pub fn set_show_auto_hide_content_on_hover(&mut self, enabled: bool) {
        self.show_auto_hide_content_on_hover = enabled;
    }

    pub fn strip(&self) -> &AutoHideStrip {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut AutoHideStrip {
        &mut self.strip
    }

    /// Start a layout pass: drop all derived geometry.
    pub fn invalidate(&self) {
        self.strip.invalidate();
    }

    // ── panes and contents ──

    pub fn panes(&self) -> &PaneSet {
        &self.panes
    }

    pub fn add_pane(&mut self, state: DockState) -> PaneId {
        let pane = self.panes.add_pane(state);
        self.attach_to_window(pane, state);
        self.strip.invalidate();
        pane
    }

    pub fn remove_pane(&mut self, pane: PaneId) -> Result<()> {
        let removed = self.panes.remove_pane(pane)?;
        for content in removed {
            self.strip.forget_tab(content);
            if self.active_auto_hide_content == Some(content) {
                self.active_auto_hide_content = None;
            }
        }
        self.detach_from_windows(pane);
        self.strip.invalidate();
        Ok(())
    }

    pub fn set_dock_state(&mut self, pane: PaneId, state: DockState) -> Result<()> {
        self.panes.set_dock_state(pane, state)?;
        let contents = self.panes.pane(pane).map(|p| p.contents().to_vec()).unwrap_or_default();
        for content in contents {
            self.strip.forget_tab(content);
        }
        self.detach_from_windows(pane);
        self.attach_to_window(pane, state);
        if !state.is_auto_hide() {
            self.deactivate_pane(pane);
        }
        self.strip.invalidate();
        Ok(())
    }

    pub fn set_hidden(&mut self, pane: PaneId, hidden: bool) -> Result<()> {
        self.panes.set_hidden(pane, hidden)?;
        if hidden {
            self.deactivate_pane(pane);
        }
        self.strip.invalidate();
        Ok(())
    }

    pub fn set_pane_index(&mut self, pane: PaneId, index: Option<usize>) -> Result<()> {
        self.panes.set_pane_index(pane, index)?;
        self.strip.invalidate();
        Ok(())
    }

    pub fn add_content(&mut self, pane: PaneId, tab_text: impl Into<String>) -> Result<ContentId> {
        let content = self.panes.add_content(pane, tab_text)?;
        self.strip.invalidate();
        Ok(content)
    }

    pub fn remove_content(&mut self, content: ContentId) -> Result<()> {
        self.panes.remove_content(content)?;
        self.strip.forget_tab(content);
        if self.active_auto_hide_content == Some(content) {
            self.active_auto_hide_content = None;
        }
        Ok(())
    }

    pub fn move_content(&mut self, content: ContentId, pane: PaneId) -> Result<()> {
        self.panes.move_content(content, pane)?;
        self.strip.forget_tab(content);
        if self.panes.edge_of(content).is_none() && self.active_auto_hide_content == Some(content) {
            self.active_auto_hide_content = None;
        }
        Ok(())
    }

    pub fn set_tab_text(&mut self, content: ContentId, tab_text: impl Into<String>) -> Result<()> {
        self.panes.set_tab_text(content, tab_text)?;
        self.strip.invalidate();
        Ok(())
    }

    fn deactivate_pane(&mut self, pane: PaneId) {
        if let Some(active) = self.active_auto_hide_content {
            if self.panes.pane_of(active) == Some(pane) {
                self.active_auto_hide_content = None;
            }
        }
    }

    // ── nested panes of docked windows ──

    fn attach_to_window(&mut self, pane: PaneId, state: DockState) {
        if !state.is_docked_window() {
            return;
        }
        // New panes stack along the window's long axis.
        let direction = match state {
            DockState::DockTop | DockState::DockBottom => SplitDirection::Horizontal,
            _ => SplitDirection::Vertical,
        };
        let splitter_size = self.splitter_size;
        let window = self
            .windows
            .entry(state)
            .or_insert_with(|| NestedLayout::new(splitter_size));
        match window.pane_ids().last().copied() {
            Some(last) => {
                window.split(last, pane, direction, 0.5, false);
            }
            None => {
                *window = NestedLayout::with_pane(pane, splitter_size);
            }
        }
    }

    fn detach_from_windows(&mut self, pane: PaneId) {
        for window in self.windows.values_mut() {
            if window.contains(pane) {
                window.remove(pane);
            }
        }
    }

    /// Nested layout of the docked window for `state`, if it holds panes.
    pub fn window_layout(&self, state: DockState) -> Option<&NestedLayout> {
        self.windows.get(&state).filter(|w| !w.pane_ids().is_empty())
    }

    pub fn window_layout_mut(&mut self, state: DockState) -> Option<&mut NestedLayout> {
        self.windows.get_mut(&state)
    }

    /// Pane and splitter rectangles inside the docked window for `state`.
    pub fn nested_geometry(&self, state: DockState) -> NestedGeometry {
        let bounds = self.dock_window_bounds(state);
        match self.window_layout(state) {
            Some(layout) if !bounds.is_empty() => layout.compute(bounds),
            _ => NestedGeometry::default(),
        }
    }

    // ── portions and docked windows ──

    pub fn portions(&self) -> &PortionModel {
        &self.portions
    }

    pub fn set_portion(&mut self, edge: Edge, value: f64) -> Result<()> {
        self.portions.set_portion(edge, value)?;
        self.strip.invalidate();
        Ok(())
    }

    /// Each edge with a visible auto-hide pane is padded by the strip thickness.
    pub fn dock_padding(&self) -> Padding {
        let h = self.measure_strip_thickness();
        let pad = |edge: Edge| if self.panes.pane_count(edge) > 0 { h } else { 0 };
        Padding {
            top: pad(Edge::Top),
            bottom: pad(Edge::Bottom),
            left: pad(Edge::Left),
            right: pad(Edge::Right),
        }
    }

    /// Host rectangle minus the strip padding.
    pub fn dock_area(&self) -> Rect {
        self.dock_padding().inset(Rect::from_size(self.host))
    }

    pub fn dock_window_size(&self, state: DockState) -> i32 {
        let area = self.dock_area();
        match state.docked_edge() {
            Some(edge) if edge.is_vertical() => self.portions.dock_window_size(state, area.width),
            Some(_) => self.portions.dock_window_size(state, area.height),
            None => 0,
        }
    }

    fn window_visible(&self, state: DockState) -> bool {
        self.panes.has_visible_pane(state)
    }

    /// Client rectangle of a docked window. Left and right windows span the
    /// dock area's height; top and bottom windows fit between them. The
    /// document window takes what remains.
    pub fn dock_window_bounds(&self, state: DockState) -> Rect {
        let area = self.dock_area();
        if state == DockState::Document {
            return self.document_bounds();
        }
        if !self.window_visible(state) {
            return Rect::EMPTY;
        }
        let size = self.dock_window_size(state);
        let (left, right) = self.side_window_widths();
        let rect = match state {
            DockState::DockLeft => Rect::new(area.x, area.y, size, area.height),
            DockState::DockRight => Rect::new(area.right() - size, area.y, size, area.height),
            DockState::DockTop => Rect::new(area.x + left, area.y, area.width - left - right, size),
            DockState::DockBottom => {
                Rect::new(area.x + left, area.bottom() - size, area.width - left - right, size)
            }
            _ => Rect::EMPTY,
        };
        if rect.is_empty() {
            Rect::EMPTY
        } else {
            rect
        }
    }

    fn side_window_widths(&self) -> (i32, i32) {
        let width = |state: DockState| {
            if self.window_visible(state) {
                self.dock_window_size(state)
            } else {
                0
            }
        };
        (width(DockState::DockLeft), width(DockState::DockRight))
    }

    /// The dock area minus every visible docked window.
    pub fn document_bounds(&self) -> Rect {
        let mut rect = self.dock_area();
        for state in [DockState::DockLeft, DockState::DockRight, DockState::DockTop, DockState::DockBottom] {
            if !self.window_visible(state) {
                continue;
            }
            let size = self.dock_window_size(state);
            match state {
                DockState::DockLeft => {
                    rect.x += size;
                    rect.width -= size;
                }
                DockState::DockRight => rect.width -= size,
                DockState::DockTop => {
                    rect.y += size;
                    rect.height -= size;
                }
                _ => rect.height -= size,
            }
        }
        rect
    }

    // ── auto-hide strip geometry ──

    pub fn measure_strip_thickness(&self) -> i32 {
        self.strip.measure_strip_thickness()
    }

    pub fn calculate_tabs(&self, edge: Edge) {
        self.strip.calculate_tabs(&self.panes, self.host, edge);
    }

    pub fn strip_rectangle(&self, edge: Edge) -> Rect {
        self.strip
            .strip_rectangle(&self.panes, self.host, edge, self.right_to_left)
    }

    pub fn logical_strip_rectangle(&self, edge: Edge) -> Rect {
        self.strip.logical_strip_rectangle(&self.panes, self.host, edge)
    }

    pub fn strip_transform(&self, edge: Edge) -> StripTransform {
        self.strip
            .strip_transform(&self.panes, self.host, edge, self.right_to_left)
    }

    pub fn corner_rectangles(&self) -> [Rect; 4] {
        self.strip.corner_rectangles(&self.panes, self.host)
    }

    pub fn display_region(&self) -> Vec<Rect> {
        self.strip
            .display_region(&self.panes, self.host, self.right_to_left)
    }

    pub fn tab(&self, content: ContentId) -> Option<TabGeometry> {
        self.strip.tab(&self.panes, self.host, content)
    }

    pub fn tabs_on(&self, edge: Edge) -> Vec<TabGeometry> {
        self.strip.tabs_on(&self.panes, self.host, edge)
    }

    pub fn tab_rectangle(&self, content: ContentId, transformed: bool) -> Rect {
        self.strip
            .tab_rectangle(&self.panes, self.host, content, transformed, self.right_to_left)
    }

    pub fn tab_outline(&self, content: ContentId) -> Option<Path> {
        self.strip
            .tab_outline(&self.panes, self.host, content, self.right_to_left)
    }

    pub fn tab_bounds(&self, content: ContentId) -> Rect {
        self.strip
            .tab_bounds(&self.panes, self.host, content, self.right_to_left)
    }

    pub fn hit_test(&self, point: Point) -> Option<ContentId> {
        self.strip
            .hit_test(&self.panes, self.host, point, self.right_to_left)
    }

    pub fn to_screen(&self, rect: Rect) -> Rect {
        rect.offset(self.screen_origin.x, self.screen_origin.y)
    }

    pub fn to_client(&self, point: Point) -> Point {
        Point::new(point.x - self.screen_origin.x, point.y - self.screen_origin.y)
    }

    // ── pointer input ──

    pub fn active_auto_hide_content(&self) -> Option<ContentId> {
        self.active_auto_hide_content
    }

    pub fn set_active_auto_hide_content(&mut self, content: Option<ContentId>) {
        if self.active_auto_hide_content != content {
            log::info!("active auto-hide content: {:?}", content);
            self.active_auto_hide_content = content;
        }
    }

    /// Left click on a strip activates the tab under the pointer.
    pub fn on_mouse_down(&mut self, point: Point, button: MouseButton) -> Option<ContentId> {
        if button != MouseButton::Left {
            return None;
        }
        let content = self.hit_test(point)?;
        self.set_active_auto_hide_content(Some(content));
        Some(content)
    }

    /// Hovering a tab shows its content when hover activation is enabled.
    pub fn on_mouse_hover(&mut self, point: Point) -> Option<ContentId> {
        if !self.show_auto_hide_content_on_hover {
            return None;
        }
        let content = self.hit_test(point)?;
        self.set_active_auto_hide_content(Some(content));
        Some(content)
    }
}
