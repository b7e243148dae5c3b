use dockyard_core::{PaneId, Point, Rect, SplitDirection};

// ──────────────────────────────────────────────
// Node: binary tree of nested panes
// ──────────────────────────────────────────────

#[derive(Debug, Clone)]
pub(crate) enum Node {
    Leaf(PaneId),
    Split {
        direction: SplitDirection,
        /// Share of the space (after the splitter) given to `first`.
        proportion: f64,
        first: Box<Node>,
        second: Box<Node>,
    },
}

/// A splitter's client rect and the path (false = first, true = second)
/// from the root to the split node that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Splitter {
    pub rect: Rect,
    pub direction: SplitDirection,
    pub path: Vec<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedGeometry {
    pub panes: Vec<(PaneId, Rect)>,
    pub splitters: Vec<Splitter>,
}

impl Node {
    pub(crate) fn contains(&self, pane: PaneId) -> bool {
        match self {
            Node::Leaf(id) => *id == pane,
            Node::Split { first, second, .. } => first.contains(pane) || second.contains(pane),
        }
    }

    pub(crate) fn pane_ids(&self, out: &mut Vec<PaneId>) {
        match self {
            Node::Leaf(id) => out.push(*id),
            Node::Split { first, second, .. } => {
                first.pane_ids(out);
                second.pane_ids(out);
            }
        }
    }

    fn compute(&self, rect: Rect, splitter_size: i32, path: &mut Vec<bool>, out: &mut NestedGeometry) {
        match self {
            Node::Leaf(id) => out.panes.push((*id, rect)),
            Node::Split {
                direction,
                proportion,
                first,
                second,
            } => {
                let (first_rect, splitter_rect, second_rect) =
                    split_rect(rect, *direction, *proportion, splitter_size);
                if !splitter_rect.is_empty() {
                    out.splitters.push(Splitter {
                        rect: splitter_rect,
                        direction: *direction,
                        path: path.clone(),
                    });
                }
                path.push(false);
                first.compute(first_rect, splitter_size, path, out);
                path.pop();
                path.push(true);
                second.compute(second_rect, splitter_size, path, out);
                path.pop();
            }
        }
    }

    /// Replace the leaf `target` with a split holding `target` and `new_pane`.
    fn split_pane(
        &mut self,
        target: PaneId,
        new_pane: PaneId,
        direction: SplitDirection,
        proportion: f64,
        insert_first: bool,
    ) -> bool {
        match self {
            Node::Leaf(id) if *id == target => {
                let (first, second) = if insert_first {
                    (Node::Leaf(new_pane), Node::Leaf(target))
                } else {
                    (Node::Leaf(target), Node::Leaf(new_pane))
                };
                *self = Node::Split {
                    direction,
                    proportion,
                    first: Box::new(first),
                    second: Box::new(second),
                };
                true
            }
            Node::Leaf(_) => false,
            Node::Split { first, second, .. } => {
                first.split_pane(target, new_pane, direction, proportion, insert_first)
                    || second.split_pane(target, new_pane, direction, proportion, insert_first)
            }
        }
    }

    /// Remove a pane. Returns:
    /// - Some(Some(node)) if the pane was found and a sibling takes this node's place
    /// - Some(None) if this node is the removed leaf
    /// - None if the pane is not in this subtree
    fn remove_pane(&mut self, target: PaneId) -> Option<Option<Node>> {
        match self {
            Node::Leaf(id) if *id == target => Some(None),
            Node::Leaf(_) => None,
            Node::Split { first, second, .. } => {
                if let Some(replacement) = first.remove_pane(target) {
                    return Some(Some(match replacement {
                        Some(node) => {
                            **first = node;
                            self.clone()
                        }
                        None => second.as_ref().clone(),
                    }));
                }
                if let Some(replacement) = second.remove_pane(target) {
                    return Some(Some(match replacement {
                        Some(node) => {
                            **second = node;
                            self.clone()
                        }
                        None => first.as_ref().clone(),
                    }));
                }
                None
            }
        }
    }

    /// Follow `path` to a split node and move its splitter to `position`.
    fn apply_drag(&mut self, rect: Rect, path: &[bool], position: Point, splitter_size: i32, min_size: i32) {
        if let Node::Split {
            direction,
            proportion,
            first,
            second,
        } = self
        {
            if path.is_empty() {
                let (offset, total) = match direction {
                    SplitDirection::Horizontal => (position.x - rect.x, rect.width),
                    SplitDirection::Vertical => (position.y - rect.y, rect.height),
                };
                let available = total - splitter_size;
                if available <= 0 {
                    return;
                }
                let lo = (min_size as f64 / available as f64).min(0.5);
                let raw = offset as f64 / available as f64;
                *proportion = raw.clamp(lo, 1.0 - lo);
            } else {
                let (first_rect, _, second_rect) =
                    split_rect(rect, *direction, *proportion, splitter_size);
                if !path[0] {
                    first.apply_drag(first_rect, &path[1..], position, splitter_size, min_size);
                } else {
                    second.apply_drag(second_rect, &path[1..], position, splitter_size, min_size);
                }
            }
        }
    }
}

/// Split `rect` into first child, splitter and second child.
pub(crate) fn split_rect(
    rect: Rect,
    direction: SplitDirection,
    proportion: f64,
    splitter_size: i32,
) -> (Rect, Rect, Rect) {
    match direction {
        SplitDirection::Horizontal => {
            let splitter = splitter_size.min(rect.width).max(0);
            let available = rect.width - splitter;
            let first_w = (available as f64 * proportion).round() as i32;
            (
                Rect::new(rect.x, rect.y, first_w, rect.height),
                Rect::new(rect.x + first_w, rect.y, splitter, rect.height),
                Rect::new(rect.x + first_w + splitter, rect.y, available - first_w, rect.height),
            )
        }
        SplitDirection::Vertical => {
            let splitter = splitter_size.min(rect.height).max(0);
            let available = rect.height - splitter;
            let first_h = (available as f64 * proportion).round() as i32;
            (
                Rect::new(rect.x, rect.y, rect.width, first_h),
                Rect::new(rect.x, rect.y + first_h, rect.width, splitter),
                Rect::new(rect.x, rect.y + first_h + splitter, rect.width, available - first_h),
            )
        }
    }
}

// ──────────────────────────────────────────────
// NestedLayout
// ──────────────────────────────────────────────

/// Smallest extent a nested pane can be dragged down to.
pub const MIN_PANE_SIZE: i32 = 24;

/// Panes nested inside one docked window, separated by draggable splitters.
pub struct NestedLayout {
    pub(crate) root: Option<Node>,
    splitter_size: i32,
    active_drag: Option<Vec<bool>>,
}

impl NestedLayout {
    pub fn new(splitter_size: i32) -> Self {
        Self {
            root: None,
            splitter_size,
            active_drag: None,
        }
    }

    pub fn with_pane(pane: PaneId, splitter_size: i32) -> Self {
        Self {
            root: Some(Node::Leaf(pane)),
            splitter_size,
            active_drag: None,
        }
    }

    pub fn contains(&self, pane: PaneId) -> bool {
        self.root.as_ref().is_some_and(|r| r.contains(pane))
    }

    pub fn pane_ids(&self) -> Vec<PaneId> {
        let mut ids = Vec::new();
        if let Some(ref root) = self.root {
            root.pane_ids(&mut ids);
        }
        ids
    }

    /// Nest `new_pane` next to `target`, giving the first child `proportion`
    /// of the space. An empty layout takes `new_pane` as its root.
    pub fn split(
        &mut self,
        target: PaneId,
        new_pane: PaneId,
        direction: SplitDirection,
        proportion: f64,
        insert_first: bool,
    ) -> bool {
        let proportion = proportion.clamp(0.0, 1.0);
        match self.root {
            Some(ref mut root) => root.split_pane(target, new_pane, direction, proportion, insert_first),
            None => {
                self.root = Some(Node::Leaf(new_pane));
                true
            }
        }
    }

    pub fn remove(&mut self, pane: PaneId) {
        if let Some(ref mut root) = self.root {
            match root.remove_pane(pane) {
                Some(Some(replacement)) => *root = replacement,
                Some(None) => self.root = None,
                None => {}
            }
        }
        self.active_drag = None;
    }

    pub fn compute(&self, rect: Rect) -> NestedGeometry {
        let mut out = NestedGeometry::default();
        if let Some(ref root) = self.root {
            let mut path = Vec::new();
            root.compute(rect, self.splitter_size, &mut path, &mut out);
        }
        out
    }

    pub fn splitter_at(&self, rect: Rect, point: Point) -> Option<Splitter> {
        self.compute(rect)
            .splitters
            .into_iter()
            .find(|s| s.rect.contains(point))
    }

    /// Start dragging the splitter under `point`. Returns whether one was hit.
    pub fn begin_drag(&mut self, rect: Rect, point: Point) -> bool {
        self.active_drag = self.splitter_at(rect, point).map(|s| s.path);
        self.active_drag.is_some()
    }

    pub fn drag_to(&mut self, rect: Rect, point: Point) {
        let path = match self.active_drag {
            Some(ref p) => p.clone(),
            None => return,
        };
        if let Some(ref mut root) = self.root {
            root.apply_drag(rect, &path, point, self.splitter_size, MIN_PANE_SIZE);
        }
    }

    pub fn end_drag(&mut self) {
        self.active_drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.active_drag.is_some()
    }
}
