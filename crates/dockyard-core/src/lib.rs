// Core types shared by the Dockyard crates: geometry, dock states, identity,
// and the capability traits the layout engine is driven through.

pub mod config;
pub mod error;
pub mod path;

pub use config::{DockConfig, EdgePortions, Font, StripMetrics};
pub use error::{DockError, Result};
pub use path::{OutlineBuilder, Path};

use unicode_width::UnicodeWidthStr;

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

/// Integer rectangle in client units. Width and height are never meant to be
/// negative; anything with a non-positive side counts as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// The "nothing here" sentinel used for strips and tabs that are not shown.
    pub const EMPTY: Rect = Rect::new(0, 0, 0, 0);

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> PointF {
        PointF::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        !self.is_empty()
            && point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        !self.intersection(other).is_empty()
    }

    pub fn intersection(&self, other: &Rect) -> Rect {
        if self.is_empty() || other.is_empty() {
            return Rect::EMPTY;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            Rect::EMPTY
        } else {
            Rect::new(x, y, right - x, bottom - y)
        }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        PointF::new(p.x as f32, p.y as f32)
    }
}

/// Float point used by the transform and path math.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ──────────────────────────────────────────────
// Identity
// ──────────────────────────────────────────────

pub type PaneId = u64;
pub type ContentId = u64;

// ──────────────────────────────────────────────
// Dock states and edges
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DockState {
    Unknown,
    Float,
    Document,
    DockTop,
    DockLeft,
    DockRight,
    DockBottom,
    DockTopAutoHide,
    DockLeftAutoHide,
    DockRightAutoHide,
    DockBottomAutoHide,
    Hidden,
}

impl DockState {
    pub fn is_auto_hide(self) -> bool {
        self.auto_hide_edge().is_some()
    }

    /// The strip edge for the four auto-hide states.
    pub fn auto_hide_edge(self) -> Option<Edge> {
        match self {
            DockState::DockTopAutoHide => Some(Edge::Top),
            DockState::DockBottomAutoHide => Some(Edge::Bottom),
            DockState::DockLeftAutoHide => Some(Edge::Left),
            DockState::DockRightAutoHide => Some(Edge::Right),
            _ => None,
        }
    }

    /// The edge of a docked (non auto-hide) tool window.
    pub fn docked_edge(self) -> Option<Edge> {
        match self {
            DockState::DockTop => Some(Edge::Top),
            DockState::DockBottom => Some(Edge::Bottom),
            DockState::DockLeft => Some(Edge::Left),
            DockState::DockRight => Some(Edge::Right),
            _ => None,
        }
    }

    /// States whose panes live in a docked window: the document area and
    /// the four docked edges.
    pub fn is_docked_window(self) -> bool {
        self == DockState::Document || self.docked_edge().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Top, bottom, left, right. Strip enumeration and painting use this order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Order in which strips are searched when resolving a point.
    pub const HIT_TEST_ORDER: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    pub fn auto_hide_state(self) -> DockState {
        match self {
            Edge::Top => DockState::DockTopAutoHide,
            Edge::Bottom => DockState::DockBottomAutoHide,
            Edge::Left => DockState::DockLeftAutoHide,
            Edge::Right => DockState::DockRightAutoHide,
        }
    }

    pub fn docked_state(self) -> DockState {
        match self {
            Edge::Top => DockState::DockTop,
            Edge::Bottom => DockState::DockBottom,
            Edge::Left => DockState::DockLeft,
            Edge::Right => DockState::DockRight,
        }
    }

    /// Left and right strips are laid out horizontally and rotated into place.
    pub fn is_vertical(self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }

    pub fn opposite(self) -> Edge {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }

    /// Tabs on these edges have their rounded corners on the logical top.
    pub fn tab_points_up(self) -> bool {
        matches!(self, Edge::Left | Edge::Bottom)
    }
}

// ──────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// ──────────────────────────────────────────────
// Layout types
// ──────────────────────────────────────────────

/// Space reserved along each host edge by the auto-hide strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Padding {
    pub fn get(&self, edge: Edge) -> i32 {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    /// `rect` shrunk by this padding.
    pub fn inset(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x + self.left,
            rect.y + self.top,
            rect.width - self.left - self.right,
            rect.height - self.top - self.bottom,
        )
    }
}

/// Orientation of a splitter between two nested panes.
/// `Horizontal` places the panes side by side, `Vertical` stacks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SplitDirection {
    Horizontal,
    Vertical,
}

// ──────────────────────────────────────────────
// Trait: TabStyle
// ──────────────────────────────────────────────

/// Theme capability injected into the layout engine. It measures tab text
/// and shapes tab outlines; everything else about a theme is opaque here.
pub trait TabStyle {
    fn measure_text(&self, text: &str, font: &Font) -> i32;

    fn build_outline(&self, rect: Rect, points_up: bool, curve_size: i32) -> Path {
        OutlineBuilder::rounded_tab(rect, points_up, curve_size)
    }
}

/// Measures text as display columns times a fixed advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceStyle {
    pub advance: f32,
}

impl MonospaceStyle {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl Default for MonospaceStyle {
    fn default() -> Self {
        Self { advance: 7.0 }
    }
}

impl TabStyle for MonospaceStyle {
    fn measure_text(&self, text: &str, _font: &Font) -> i32 {
        (text.width() as f32 * self.advance).ceil() as i32
    }
}

// ──────────────────────────────────────────────
// Trait: Renderer
// ──────────────────────────────────────────────

/// Paint roles handed to the renderer. The renderer owns the skin and
/// decides what each role looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleToken {
    StripBackground,
    TabFill,
    TabBorder,
    TabText,
}

/// The renderer draws whatever geometry the engine hands it.
/// Geometry arrives fully transformed into client space.
pub trait Renderer {
    fn begin_frame(&mut self, size: Size);
    fn fill_rect(&mut self, rect: Rect, token: StyleToken);
    fn fill_path(&mut self, path: &Path, token: StyleToken);
    fn stroke_path(&mut self, path: &Path, token: StyleToken);
    /// `rotated` is set for icons on left/right strips, which are turned 90°.
    fn draw_icon(&mut self, content: ContentId, rect: Rect, rotated: bool);
    fn draw_text(&mut self, text: &str, rect: Rect, vertical: bool, right_to_left: bool, token: StyleToken);
    fn end_frame(&mut self);
}
