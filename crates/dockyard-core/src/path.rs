// Tab outline geometry: closed polygons with flattened corner arcs.

use crate::{PointF, Rect};

/// Segments used to flatten one quarter-circle corner.
const ARC_SEGMENTS: usize = 8;

/// A closed polygon. The last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    points: Vec<PointF>,
}

impl Path {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: Vec<PointF>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[PointF] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.len() < 3
    }

    pub fn line_to(&mut self, point: PointF) {
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    /// Append a circular arc. Angles are in degrees, measured clockwise from
    /// the positive x axis (y grows downwards).
    pub fn arc_to(&mut self, center: PointF, radius: f32, start_deg: f32, sweep_deg: f32) {
        for i in 0..=ARC_SEGMENTS {
            let t = (start_deg + sweep_deg * i as f32 / ARC_SEGMENTS as f32).to_radians();
            self.line_to(PointF::new(
                center.x + radius * t.cos(),
                center.y + radius * t.sin(),
            ));
        }
    }

    /// Map every vertex through `f`. Used to carry logical outlines into
    /// client space.
    pub fn map_points(&self, f: impl Fn(PointF) -> PointF) -> Path {
        Path {
            points: self.points.iter().map(|p| f(*p)).collect(),
        }
    }

    /// Integer bounding box, snapped so that trigonometric noise on the arc
    /// vertices does not push an edge onto the neighbouring unit.
    pub fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::EMPTY;
        }
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        let left = snap(min_x);
        let top = snap(min_y);
        Rect::new(left, top, snap(max_x) - left, snap(max_y) - top)
    }

    /// Even-odd point containment.
    pub fn contains(&self, point: PointF) -> bool {
        if self.is_empty() {
            return false;
        }
        let mut inside = false;
        let n = self.points.len();
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > point.y) != (b.y > point.y) {
                let cross_x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if point.x < cross_x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

fn snap(v: f32) -> i32 {
    (v + 1e-3).floor() as i32
}

// ──────────────────────────────────────────────
// OutlineBuilder
// ──────────────────────────────────────────────

pub struct OutlineBuilder;

impl OutlineBuilder {
    /// Tab shape with two rounded corners and two square ones.
    ///
    /// `points_up` rounds the top pair; otherwise the bottom pair is rounded.
    /// `curve_size` is the diameter of the corner arcs.
    pub fn rounded_tab(rect: Rect, points_up: bool, curve_size: i32) -> Path {
        let mut path = Path::new();
        if rect.is_empty() {
            return path;
        }

        let left = rect.x as f32;
        let top = rect.y as f32;
        let right = rect.right() as f32;
        let bottom = rect.bottom() as f32;
        let r = (curve_size as f32 / 2.0)
            .min(rect.width as f32 / 2.0)
            .min(rect.height as f32 / 2.0)
            .max(0.0);

        if points_up {
            path.line_to(PointF::new(left, bottom));
            path.line_to(PointF::new(left, top + r));
            path.arc_to(PointF::new(left + r, top + r), r, 180.0, 90.0);
            path.line_to(PointF::new(right - r, top));
            path.arc_to(PointF::new(right - r, top + r), r, 270.0, 90.0);
            path.line_to(PointF::new(right, bottom));
        } else {
            path.line_to(PointF::new(right, top));
            path.line_to(PointF::new(right, bottom - r));
            path.arc_to(PointF::new(right - r, bottom - r), r, 0.0, 90.0);
            path.line_to(PointF::new(left + r, bottom));
            path.arc_to(PointF::new(left + r, bottom - r), r, 90.0, 90.0);
            path.line_to(PointF::new(left, top));
        }
        path
    }
}
