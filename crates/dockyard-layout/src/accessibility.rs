// Accessibility tree over the auto-hide strips. Every view is a thin borrow
// of the panel and answers from the same geometry painting and hit testing
// use, in screen coordinates.

use dockyard_core::{ContentId, DockError, Edge, Point, Rect, Result};

use crate::DockPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Window,
    PageTabList,
    PageTab,
}

// ──────────────────────────────────────────────
// StripsAccessible
// ──────────────────────────────────────────────

/// Root of the strip tree: one child per edge, in top, bottom, left, right
/// order, present even when the strip is empty.
#[derive(Clone, Copy)]
pub struct StripsAccessible<'a> {
    panel: &'a DockPanel,
}

impl<'a> StripsAccessible<'a> {
    pub fn new(panel: &'a DockPanel) -> Self {
        Self { panel }
    }

    pub fn role(&self) -> Role {
        Role::Window
    }

    pub fn child_count(&self) -> usize {
        Edge::ALL.len()
    }

    pub fn child(&self, index: usize) -> Result<StripAccessible<'a>> {
        Edge::ALL
            .get(index)
            .map(|&edge| StripAccessible::new(self.panel, edge))
            .ok_or(DockError::IndexOutOfRange {
                index,
                len: Edge::ALL.len(),
            })
    }

    pub fn children(&self) -> impl Iterator<Item = StripAccessible<'a>> + '_ {
        Edge::ALL
            .into_iter()
            .map(move |edge| StripAccessible::new(self.panel, edge))
    }

    /// Strip whose screen rectangle contains `screen_point`.
    pub fn hit_test(&self, screen_point: Point) -> Option<StripAccessible<'a>> {
        self.children().find(|strip| strip.bounds().contains(screen_point))
    }
}

// ──────────────────────────────────────────────
// StripAccessible
// ──────────────────────────────────────────────

#[derive(Clone, Copy)]
pub struct StripAccessible<'a> {
    panel: &'a DockPanel,
    edge: Edge,
}

impl<'a> StripAccessible<'a> {
    fn new(panel: &'a DockPanel, edge: Edge) -> Self {
        Self { panel, edge }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn role(&self) -> Role {
        Role::PageTabList
    }

    pub fn bounds(&self) -> Rect {
        let rect = self.panel.strip_rectangle(self.edge);
        if rect.is_empty() {
            Rect::EMPTY
        } else {
            self.panel.to_screen(rect)
        }
    }

    fn tabs(&self) -> Vec<ContentId> {
        self.panel
            .tabs_on(self.edge)
            .into_iter()
            .map(|tab| tab.content)
            .collect()
    }

    pub fn child_count(&self) -> usize {
        self.tabs().len()
    }

    pub fn child(&self, index: usize) -> Result<TabAccessible<'a>> {
        let tabs = self.tabs();
        tabs.get(index)
            .map(|&content| TabAccessible {
                panel: self.panel,
                content,
            })
            .ok_or(DockError::IndexOutOfRange {
                index,
                len: tabs.len(),
            })
    }
}

// ──────────────────────────────────────────────
// TabAccessible
// ──────────────────────────────────────────────

#[derive(Clone, Copy)]
pub struct TabAccessible<'a> {
    panel: &'a DockPanel,
    content: ContentId,
}

impl<'a> TabAccessible<'a> {
    pub fn content(&self) -> ContentId {
        self.content
    }

    pub fn role(&self) -> Role {
        Role::PageTab
    }

    pub fn name(&self) -> &'a str {
        self.panel.panes().tab_text(self.content)
    }

    pub fn bounds(&self) -> Rect {
        let rect = self.panel.tab_bounds(self.content);
        if rect.is_empty() {
            Rect::EMPTY
        } else {
            self.panel.to_screen(rect)
        }
    }
}
