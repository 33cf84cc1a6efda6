//! Scroll state of the content pane.
//!
//! Tracks content height, viewport height, and the current offset while
//! providing bounded line/page navigation. The offset is fractional so the
//! smooth-scroll animator can glide between rows; rendering rounds it.

#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportState {
    offset: f32,
    content_height: u16,
    viewport_height: u16,
}

impl ViewportState {
    /// Current offset in fractional rows.
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Offset rounded to whole rows, as the renderer consumes it.
    pub fn row_offset(&self) -> u16 {
        self.offset.round().clamp(0.0, f32::from(u16::MAX)) as u16
    }

    pub const fn content_height(&self) -> u16 {
        self.content_height
    }

    pub const fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Maximum valid scroll offset.
    pub fn max_offset(&self) -> f32 {
        f32::from(self.content_height.saturating_sub(self.viewport_height))
    }

    /// Whether content exceeds the current viewport.
    pub fn is_scrollable(&self) -> bool {
        self.content_height > self.viewport_height && self.viewport_height > 0
    }

    /// Records the measured heights and clamps the offset into range.
    pub fn set_measurements(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.clamp_offset();
    }

    /// Moves the offset to an absolute position, clamped into range.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
        self.clamp_offset();
    }

    /// Scrolls by relative line count (`+` down, `-` up).
    pub fn scroll_lines(&mut self, delta: i16) {
        if delta == 0 || !self.is_scrollable() {
            return;
        }
        self.set_offset(self.offset + f32::from(delta));
    }

    /// Scrolls by viewport page increments.
    pub fn scroll_pages(&mut self, delta_pages: i16) {
        if delta_pages == 0 || self.viewport_height == 0 {
            return;
        }
        let delta = f32::from(self.viewport_height) * f32::from(delta_pages);
        self.set_offset(self.offset + delta);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0.0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::ViewportState;

    #[test]
    fn scrolling_clamps_to_bounds() {
        let mut viewport = ViewportState::default();
        viewport.set_measurements(20, 5);

        viewport.scroll_lines(3);
        assert_eq!(viewport.offset(), 3.0);

        viewport.scroll_lines(-10);
        assert_eq!(viewport.offset(), 0.0);

        viewport.scroll_to_bottom();
        assert_eq!(viewport.offset(), 15.0);
    }

    #[test]
    fn page_scrolling_uses_viewport_height() {
        let mut viewport = ViewportState::default();
        viewport.set_measurements(40, 4);

        viewport.scroll_pages(1);
        assert_eq!(viewport.offset(), 4.0);

        viewport.scroll_pages(2);
        assert_eq!(viewport.offset(), 12.0);

        viewport.scroll_pages(-1);
        assert_eq!(viewport.offset(), 8.0);
    }

    #[test]
    fn fractional_offset_rounds_for_rendering() {
        let mut viewport = ViewportState::default();
        viewport.set_measurements(30, 10);
        viewport.set_offset(5.4);
        assert_eq!(viewport.row_offset(), 5);
        viewport.set_offset(5.6);
        assert_eq!(viewport.row_offset(), 6);
    }

    #[test]
    fn shrinking_content_pulls_offset_back() {
        let mut viewport = ViewportState::default();
        viewport.set_measurements(50, 10);
        viewport.scroll_to_bottom();
        assert_eq!(viewport.offset(), 40.0);

        viewport.set_measurements(15, 10);
        assert_eq!(viewport.offset(), 5.0);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut viewport = ViewportState::default();
        viewport.set_measurements(4, 10);
        assert!(!viewport.is_scrollable());
        viewport.scroll_lines(3);
        assert_eq!(viewport.offset(), 0.0);
    }
}
