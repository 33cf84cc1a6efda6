use super::*;

impl App {
    /// Scroll the content by whole lines. Direct scrolling cancels any
    /// smooth glide in flight and queues a highlight refresh.
    pub fn scroll_by_lines(&mut self, delta: i16) {
        self.smooth.cancel();
        self.viewport.scroll_lines(delta);
        self.after_user_scroll();
    }

    /// Scroll the content by viewport pages.
    pub fn scroll_by_pages(&mut self, delta_pages: i16) {
        self.smooth.cancel();
        self.viewport.scroll_pages(delta_pages);
        self.after_user_scroll();
    }

    /// Jump to the top of the document.
    pub fn scroll_home(&mut self) {
        self.smooth.cancel();
        self.viewport.scroll_to_top();
        self.after_user_scroll();
    }

    /// Jump to the last viewport of the document.
    pub fn scroll_end(&mut self) {
        self.smooth.cancel();
        self.viewport.scroll_to_bottom();
        self.after_user_scroll();
    }

    fn after_user_scroll(&mut self) {
        if let Some(spy) = self.spy.as_mut() {
            spy.schedule_refresh();
        }
        self.request_frame();
    }
}
