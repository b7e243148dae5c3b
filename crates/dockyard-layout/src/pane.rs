use std::collections::HashMap;

use dockyard_core::{ContentId, DockError, DockState, Edge, PaneId, Result};

// ──────────────────────────────────────────────
// DockPane / Content
// ──────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct DockPane {
    pub id: PaneId,
    pub dock_state: DockState,
    /// Hidden panes take no part in strip layout even in an auto-hide state.
    pub is_hidden: bool,
    contents: Vec<ContentId>,
}

impl DockPane {
    /// Displayed contents, in tab order.
    pub fn contents(&self) -> &[ContentId] {
        &self.contents
    }
}

#[derive(Debug, Clone)]
pub struct Content {
    pub id: ContentId,
    pub tab_text: String,
    pane: PaneId,
}

impl Content {
    pub fn pane(&self) -> PaneId {
        self.pane
    }
}

// ──────────────────────────────────────────────
// PaneSet
// ──────────────────────────────────────────────

/// Owns every pane and content of a dock panel. Pane order is insertion
/// order unless changed with `set_pane_index`; strips lay tabs out in it.
pub struct PaneSet {
    panes: Vec<DockPane>,
    contents: HashMap<ContentId, Content>,
    next_id: u64,
}

impl PaneSet {
    pub fn new() -> Self {
        Self {
            panes: Vec::new(),
            contents: HashMap::new(),
            next_id: 1,
        }
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add_pane(&mut self, dock_state: DockState) -> PaneId {
        let id = self.alloc_id();
        self.panes.push(DockPane {
            id,
            dock_state,
            is_hidden: false,
            contents: Vec::new(),
        });
        id
    }

    /// Remove a pane together with its contents. Returns the removed contents.
    pub fn remove_pane(&mut self, pane: PaneId) -> Result<Vec<ContentId>> {
        let index = self.index_of(pane)?;
        let removed = self.panes.remove(index);
        for content in &removed.contents {
            self.contents.remove(content);
        }
        Ok(removed.contents)
    }

    pub fn pane(&self, pane: PaneId) -> Option<&DockPane> {
        self.panes.iter().find(|p| p.id == pane)
    }

    fn pane_mut(&mut self, pane: PaneId) -> Result<&mut DockPane> {
        self.panes
            .iter_mut()
            .find(|p| p.id == pane)
            .ok_or(DockError::UnknownPane(pane))
    }

    fn index_of(&self, pane: PaneId) -> Result<usize> {
        self.panes
            .iter()
            .position(|p| p.id == pane)
            .ok_or(DockError::UnknownPane(pane))
    }

    pub fn panes(&self) -> &[DockPane] {
        &self.panes
    }

    pub fn set_dock_state(&mut self, pane: PaneId, dock_state: DockState) -> Result<()> {
        self.pane_mut(pane)?.dock_state = dock_state;
        Ok(())
    }

    pub fn set_hidden(&mut self, pane: PaneId, hidden: bool) -> Result<()> {
        self.pane_mut(pane)?.is_hidden = hidden;
        Ok(())
    }

    /// Move `pane` so it sits in front of the pane currently at `index`.
    /// `None` moves it to the end.
    pub fn set_pane_index(&mut self, pane: PaneId, index: Option<usize>) -> Result<()> {
        let old = self.index_of(pane)?;
        let len = self.panes.len();
        if let Some(index) = index {
            if index >= len {
                return Err(DockError::IndexOutOfRange { index, len });
            }
        }

        let target = index.unwrap_or(len - 1);
        if old == target {
            return Ok(());
        }

        let moved = self.panes.remove(old);
        match index {
            None => self.panes.push(moved),
            Some(index) if old < index => self.panes.insert(index - 1, moved),
            Some(index) => self.panes.insert(index, moved),
        }
        Ok(())
    }

    pub fn add_content(&mut self, pane: PaneId, tab_text: impl Into<String>) -> Result<ContentId> {
        self.index_of(pane)?;
        let id = self.alloc_id();
        self.pane_mut(pane)?.contents.push(id);
        self.contents.insert(
            id,
            Content {
                id,
                tab_text: tab_text.into(),
                pane,
            },
        );
        Ok(id)
    }

    pub fn remove_content(&mut self, content: ContentId) -> Result<()> {
        let owner = self.pane_of(content).ok_or(DockError::UnknownContent(content))?;
        self.pane_mut(owner)?.contents.retain(|c| *c != content);
        self.contents.remove(&content);
        Ok(())
    }

    /// Reassign a content to another pane, appending it to that pane's tabs.
    pub fn move_content(&mut self, content: ContentId, pane: PaneId) -> Result<()> {
        let owner = self.pane_of(content).ok_or(DockError::UnknownContent(content))?;
        self.index_of(pane)?;
        if owner == pane {
            return Ok(());
        }
        self.pane_mut(owner)?.contents.retain(|c| *c != content);
        self.pane_mut(pane)?.contents.push(content);
        if let Some(entry) = self.contents.get_mut(&content) {
            entry.pane = pane;
        }
        Ok(())
    }

    pub fn set_tab_text(&mut self, content: ContentId, tab_text: impl Into<String>) -> Result<()> {
        let entry = self
            .contents
            .get_mut(&content)
            .ok_or(DockError::UnknownContent(content))?;
        entry.tab_text = tab_text.into();
        Ok(())
    }

    pub fn content(&self, content: ContentId) -> Option<&Content> {
        self.contents.get(&content)
    }

    pub fn pane_of(&self, content: ContentId) -> Option<PaneId> {
        self.contents.get(&content).map(|c| c.pane)
    }

    pub fn tab_text(&self, content: ContentId) -> &str {
        self.contents
            .get(&content)
            .map(|c| c.tab_text.as_str())
            .unwrap_or("")
    }

    /// Visible panes auto-hidden on `edge`, in pane order.
    pub fn panes_on(&self, edge: Edge) -> impl Iterator<Item = &DockPane> {
        let state = edge.auto_hide_state();
        self.panes
            .iter()
            .filter(move |p| !p.is_hidden && p.dock_state == state)
    }

    pub fn pane_count(&self, edge: Edge) -> usize {
        self.panes_on(edge).count()
    }

    /// Whether any visible pane is in `state`. Used for docked window visibility.
    pub fn has_visible_pane(&self, state: DockState) -> bool {
        self.panes
            .iter()
            .any(|p| !p.is_hidden && p.dock_state == state && !p.contents.is_empty())
    }

    /// The auto-hide edge a content currently shows on, if any.
    pub fn edge_of(&self, content: ContentId) -> Option<Edge> {
        let pane = self.pane(self.pane_of(content)?)?;
        if pane.is_hidden {
            return None;
        }
        pane.dock_state.auto_hide_edge()
    }
}

impl Default for PaneSet {
    fn default() -> Self {
        Self::new()
    }
}
