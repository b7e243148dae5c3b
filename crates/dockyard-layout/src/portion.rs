use dockyard_core::{DockError, DockState, Edge, EdgePortions, Result};

/// Size requests for the four docked edges.
///
/// A portion below 1 is a fraction of the available extent; 1 or more is an
/// absolute size. When both members of an opposing pair are fractional their
/// sum never exceeds 1: the last one written wins and the other shrinks.
#[derive(Debug, Clone)]
pub struct PortionModel {
    top: f64,
    bottom: f64,
    left: f64,
    right: f64,
    minimum_interior_size: i32,
    dirty: bool,
}

impl PortionModel {
    pub fn new(portions: EdgePortions, minimum_interior_size: i32) -> Self {
        Self {
            top: portions.top,
            bottom: portions.bottom,
            left: portions.left,
            right: portions.right,
            minimum_interior_size,
            dirty: true,
        }
    }

    pub fn portion(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    fn slot(&mut self, edge: Edge) -> &mut f64 {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
            Edge::Right => &mut self.right,
        }
    }

    pub fn minimum_interior_size(&self) -> i32 {
        self.minimum_interior_size
    }

    pub fn set_portion(&mut self, edge: Edge, value: f64) -> Result<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DockError::PortionOutOfRange { edge, value });
        }
        if value == self.portion(edge) {
            return Ok(());
        }

        *self.slot(edge) = value;

        let other = edge.opposite();
        let other_value = self.portion(other);
        if value < 1.0 && other_value < 1.0 && value + other_value > 1.0 {
            log::debug!(
                "portion {:?}={} forces {:?} from {} to {}",
                edge,
                value,
                other,
                other_value,
                1.0 - value
            );
            *self.slot(other) = 1.0 - value;
        }

        self.dirty = true;
        Ok(())
    }

    /// Resolve one edge's request against `extent` without pair adjustment.
    pub fn resolve_size(&self, edge: Edge, extent: i32) -> i32 {
        let portion = self.portion(edge);
        if portion < 1.0 {
            (portion * extent as f64).round() as i32
        } else {
            portion.round() as i32
        }
    }

    /// Resolve an opposing pair, left/right or top/bottom, so that at least
    /// `minimum_interior_size` remains between them. Each side is first
    /// raised to `minimum_interior_size`; the interior guarantee wins when
    /// the two cannot both fit. Returns the sizes in (left, right) or
    /// (top, bottom) order; the first one absorbs the odd unit of any excess.
    pub fn resolve_pair(&self, vertical_edges: bool, extent: i32) -> (i32, i32) {
        let (first_edge, second_edge) = if vertical_edges {
            (Edge::Left, Edge::Right)
        } else {
            (Edge::Top, Edge::Bottom)
        };
        let mut first = self.resolve_size(first_edge, extent).max(self.minimum_interior_size);
        let mut second = self.resolve_size(second_edge, extent).max(self.minimum_interior_size);

        let limit = (extent - self.minimum_interior_size).max(0);
        if first + second > limit {
            let excess = first + second - limit;
            second -= excess / 2;
            first -= excess - excess / 2;
            // A side pushed below zero hands its deficit to the other.
            if first < 0 {
                second += first;
                first = 0;
            }
            if second < 0 {
                first += second;
                second = 0;
            }
        }
        (first, second)
    }

    /// Width (left/right) or height (top/bottom) of a docked tool window.
    /// `extent` is the matching dimension of the dock area.
    pub fn dock_window_size(&self, state: DockState, extent: i32) -> i32 {
        let edge = match state.docked_edge() {
            Some(edge) => edge,
            None => return 0,
        };
        let (first, second) = self.resolve_pair(edge.is_vertical(), extent);
        match edge {
            Edge::Left | Edge::Top => first,
            Edge::Right | Edge::Bottom => second,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear and return the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl Default for PortionModel {
    fn default() -> Self {
        Self::new(EdgePortions::default(), 24)
    }
}
