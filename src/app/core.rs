use std::path::PathBuf;
use std::time::Instant;

use ratatui::layout::Rect;

use self::geometry::ContentLayout;
use self::scrollspy::{FrameRequest, FrameScheduler, Scrollspy};
use self::sidebar::SidebarState;
use self::smooth::SmoothScroll;
use self::viewport::ViewportState;
use crate::app::settings::Settings;
use crate::app::types::{Document, SidebarLink};
use crate::doc::loader::{self, DocError};

pub mod geometry;
pub mod ripple;
pub mod scrollspy;
pub mod sidebar;
pub mod smooth;
pub mod viewport;

mod navigation;

/// Top-level application state: the loaded document, scroll state, sidebar,
/// and the scrollspy that ties them together.
pub struct App {
    pub doc: Document,
    pub source: Option<PathBuf>,
    pub viewport: ViewportState,
    pub smooth: SmoothScroll,
    pub sidebar: SidebarState,
    pub spy: Option<Scrollspy>,
    pub settings: Settings,
    pub frames: FrameRequest,
    /// Timestamp of the frame being rendered, for ripple animation.
    pub frame_now: Instant,
    /// Transient one-line message for the footer.
    pub status: Option<String>,
    /// Reload automatically when the source file changes (fs-watch builds).
    pub watch: bool,
}

impl App {
    pub fn new(doc: Document, source: Option<PathBuf>, settings: Settings) -> Self {
        let frames = FrameRequest::new();
        let sidebar = SidebarState::from_document(&doc);
        let spy = Scrollspy::attach(Box::new(frames.clone()));
        App {
            doc,
            source,
            viewport: ViewportState::default(),
            smooth: SmoothScroll::default(),
            sidebar,
            spy: Some(spy),
            settings,
            frames,
            frame_now: Instant::now(),
            status: None,
            watch: false,
        }
    }

    /// Whether anything asked for a prompt redraw since the last frame.
    pub fn wants_frame(&self) -> bool {
        self.frames.is_requested()
    }

    pub fn request_frame(&self) {
        self.frames.request_frame();
    }

    /// Replaces the scrollspy with a freshly attached one. The new instance
    /// queues its own initial refresh.
    pub fn attach_scrollspy(&mut self) {
        self.spy = Some(Scrollspy::attach(Box::new(self.frames.clone())));
    }

    /// Stops tracking: the highlight disappears and scrolling no longer
    /// schedules refreshes. Live ripples vanish with the spy.
    pub fn detach_scrollspy(&mut self) {
        self.spy = None;
        self.request_frame();
    }

    /// Per-frame work, run once before each draw: advance the smooth
    /// scroll, recompute geometry at the new offset, and let the spy run
    /// any pending refresh against it.
    pub fn on_frame(&mut self, content: Rect, now: Instant) {
        self.frames.take();
        self.frame_now = now;

        if let Some(next) = self.smooth.tick(self.viewport.offset()) {
            self.viewport.set_offset(next);
            if let Some(spy) = self.spy.as_mut() {
                spy.schedule_refresh();
            }
        }

        let offset = i32::from(self.viewport.row_offset());
        let layout = ContentLayout::compute(content, &self.doc, offset);
        if let Some(layout) = &layout {
            self.viewport
                .set_measurements(layout.content_height(), layout.viewport_height());
        }
        if let Some(spy) = self.spy.as_mut() {
            spy.on_frame(layout.as_ref(), now);
            if spy.has_ripples() {
                self.frames.request_frame();
            }
        }
        if self.smooth.is_animating() {
            self.frames.request_frame();
        }
    }

    /// Immediate recomputation, used on terminal resize: geometry changed
    /// under us, so the highlight is corrected in the same pass rather than
    /// waiting for a scheduled frame.
    pub fn refresh_now(&mut self, content: Rect) {
        let offset = i32::from(self.viewport.row_offset());
        if let Some(layout) = ContentLayout::compute(content, &self.doc, offset) {
            self.viewport
                .set_measurements(layout.content_height(), layout.viewport_height());
            if let Some(spy) = self.spy.as_mut() {
                spy.refresh_active_link(&layout);
            }
        }
        self.request_frame();
    }

    /// Activates a sidebar link at the given row rect, from a pointer
    /// position or (for keyboard activation) from its center.
    pub fn activate_link(
        &mut self,
        link: &SidebarLink,
        link_area: Rect,
        pointer: Option<(u16, u16)>,
        content: Rect,
        now: Instant,
    ) {
        let offset = i32::from(self.viewport.row_offset());
        let layout = ContentLayout::compute(content, &self.doc, offset);
        if let Some(spy) = self.spy.as_mut() {
            spy.activate_link(link, link_area, pointer, layout.as_ref(), &mut self.smooth, now);
        }
        if !self.settings.smooth_scroll {
            if let Some(target) = self.smooth.target() {
                self.smooth.cancel();
                self.viewport.set_offset(target);
                if let Some(spy) = self.spy.as_mut() {
                    spy.schedule_refresh();
                }
            }
        }
    }

    /// Reloads the document from its source file, rebuilds the sidebar, and
    /// re-attaches the scrollspy. Returns `Ok(false)` when the app runs on
    /// the built-in sample and there is nothing to reload.
    pub fn reload(&mut self) -> Result<bool, DocError> {
        let Some(path) = self.source.clone() else {
            return Ok(false);
        };
        self.doc = loader::load_document(&path)?;
        self.sidebar.reload(&self.doc);
        self.smooth.cancel();
        self.attach_scrollspy();
        Ok(true)
    }
}
