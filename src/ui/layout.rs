//! Screen layout shared by rendering and input handling.
//!
//! The mouse handlers and the scrollspy both need the same rectangles the
//! renderer draws into, so the split lives here and everyone computes it
//! from the current terminal area.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Sidebar column width including its borders.
pub const SIDEBAR_WIDTH: u16 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Header (3), main row (sidebar 24 + content), footer (3).
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);

        AppLayout {
            header: chunks[0],
            sidebar: main[0],
            content: main[1],
            footer: chunks[2],
        }
    }

    /// Sidebar area inside its borders; one link per row.
    pub fn sidebar_inner(&self) -> Rect {
        self.sidebar.inner(Margin::new(1, 1))
    }

    /// Content area inside its borders; the scroll viewport the spy
    /// measures against.
    pub fn content_inner(&self) -> Rect {
        self.content.inner(Margin::new(1, 1))
    }

    /// Screen rect of the link at `index`, `None` when it falls below the
    /// visible sidebar rows.
    pub fn link_area(&self, index: usize) -> Option<Rect> {
        let inner = self.sidebar_inner();
        if index >= usize::from(inner.height) {
            return None;
        }
        Some(Rect::new(
            inner.x,
            inner.y + index as u16,
            inner.width,
            1,
        ))
    }

    /// Link index under the given screen cell, if any.
    pub fn link_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.sidebar_inner();
        if column < inner.x
            || column >= inner.right()
            || row < inner.y
            || row >= inner.bottom()
        {
            return None;
        }
        Some(usize::from(row - inner.y))
    }

    pub fn in_content(&self, column: u16, row: u16) -> bool {
        let inner = self.content_inner();
        column >= inner.x && column < inner.right() && row >= inner.y && row < inner.bottom()
    }
}
