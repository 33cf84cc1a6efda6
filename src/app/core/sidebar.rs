use crate::app::types::{Document, SidebarLink};

/// Sidebar list of links, one per section, plus the keyboard focus.
///
/// Focus is which link Enter or Space activates; it is independent of the
/// highlight, which follows the viewport.
#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    links: Vec<SidebarLink>,
    focused: usize,
}

impl SidebarState {
    pub fn from_document(doc: &Document) -> Self {
        let links = doc
            .sections
            .iter()
            .map(|s| SidebarLink::new(s.id.clone(), s.title.clone()))
            .collect();
        SidebarState { links, focused: 0 }
    }

    pub fn links(&self) -> &[SidebarLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_link(&self) -> Option<&SidebarLink> {
        self.links.get(self.focused)
    }

    pub fn link_at(&self, index: usize) -> Option<&SidebarLink> {
        self.links.get(index)
    }

    /// Moves focus to `index`, clamped to the last link.
    pub fn focus(&mut self, index: usize) {
        self.focused = index.min(self.links.len().saturating_sub(1));
    }

    pub fn focus_next(&mut self) {
        if self.links.is_empty() {
            return;
        }
        self.focused = (self.focused + 1) % self.links.len();
    }

    pub fn focus_prev(&mut self) {
        if self.links.is_empty() {
            return;
        }
        self.focused = self
            .focused
            .checked_sub(1)
            .unwrap_or(self.links.len() - 1);
    }

    /// Rebuilds the link list after a document change, keeping the focus
    /// in range.
    pub fn reload(&mut self, doc: &Document) {
        self.links = doc
            .sections
            .iter()
            .map(|s| SidebarLink::new(s.id.clone(), s.title.clone()))
            .collect();
        self.focused = self.focused.min(self.links.len().saturating_sub(1));
    }
}
