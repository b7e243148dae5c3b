use dockyard_core::{Edge, Rect, Size};

/// Which auto-hide edges currently have at least one visible pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgePresence {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgePresence {
    pub fn get(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Edge) -> bool) -> Self {
        Self {
            top: f(Edge::Top),
            bottom: f(Edge::Bottom),
            left: f(Edge::Left),
            right: f(Edge::Right),
        }
    }

    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

/// Corner squares and logical strip rectangles for one host size.
///
/// Strip rectangles are logical: a left or right strip is stored as if it
/// ran horizontally from its visual origin, length along x and thickness
/// along y. `StripTransform` turns them into client space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Regions {
    pub top_left: Rect,
    pub top_right: Rect,
    pub bottom_left: Rect,
    pub bottom_right: Rect,
    pub top: Rect,
    pub bottom: Rect,
    pub left: Rect,
    pub right: Rect,
}

impl Regions {
    pub fn strip(&self, edge: Edge) -> Rect {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    pub fn corners(&self) -> [Rect; 4] {
        [self.top_left, self.top_right, self.bottom_left, self.bottom_right]
    }
}

/// Partition the host into corner squares and strip rectangles.
///
/// A corner exists only where both adjacent strips are present; each strip
/// spans its edge minus the corners on it. Pure: calling it twice with the
/// same input yields the same regions.
pub fn partition(host: Size, thickness: i32, presence: EdgePresence) -> Regions {
    let h = thickness;
    let corner = |a: bool, b: bool, x: i32, y: i32| {
        if a && b && h > 0 {
            Rect::new(x, y, h, h)
        } else {
            Rect::EMPTY
        }
    };

    let top_left = corner(presence.top, presence.left, 0, 0);
    let top_right = corner(presence.top, presence.right, host.width - h, 0);
    let bottom_left = corner(presence.bottom, presence.left, 0, host.height - h);
    let bottom_right = corner(presence.bottom, presence.right, host.width - h, host.height - h);

    let inset = |present: bool| if present { h } else { 0 };
    let horizontal_len = host.width - inset(presence.left) - inset(presence.right);
    let vertical_len = host.height - inset(presence.top) - inset(presence.bottom);

    let top = if presence.top {
        strip(inset(presence.left), 0, horizontal_len, h)
    } else {
        Rect::EMPTY
    };

    let bottom = if presence.bottom {
        let mut y = host.height - h;
        if presence.top && y < h {
            y = h;
        }
        strip(inset(presence.left), y, horizontal_len, h)
    } else {
        Rect::EMPTY
    };

    let left = if presence.left {
        strip(0, inset(presence.top), vertical_len, h)
    } else {
        Rect::EMPTY
    };

    let right = if presence.right {
        let mut x = host.width - h;
        if presence.left && x < h {
            x = h;
        }
        strip(x, inset(presence.top), vertical_len, h)
    } else {
        Rect::EMPTY
    };

    Regions {
        top_left,
        top_right,
        bottom_left,
        bottom_right,
        top,
        bottom,
        left,
        right,
    }
}

fn strip(x: i32, y: i32, length: i32, thickness: i32) -> Rect {
    if length <= 0 || thickness <= 0 {
        Rect::EMPTY
    } else {
        Rect::new(x, y, length, thickness)
    }
}
