//! Tracks which section sits closest to the viewport center and keeps the
//! sidebar highlight on its link.
//!
//! The highlight is derived state: every refresh rescans the live geometry
//! and replaces the single active id, so two links can never be active at
//! once and no per-link bookkeeping exists to drift. Scroll traffic is
//! coalesced through a pending flag so any number of scroll events between
//! two frames costs one recomputation.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use ratatui::layout::Rect;

use crate::app::core::geometry::{ContentLayout, SectionGeom};
use crate::app::core::ripple::{self, Ripple};
use crate::app::core::smooth::SmoothScroll;
use crate::app::types::{SectionId, SidebarLink};

/// Requests a redraw from whatever drives the frame loop.
pub trait FrameScheduler {
    fn request_frame(&self);
}

/// Shared redraw flag wired between the app and the event loop: the spy
/// raises it, the loop drains it once per frame.
#[derive(Clone, Debug, Default)]
pub struct FrameRequest(Rc<Cell<bool>>);

impl FrameRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_requested(&self) -> bool {
        self.0.get()
    }

    /// Clears the flag and reports whether it was raised.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

impl FrameScheduler for FrameRequest {
    fn request_frame(&self) {
        self.0.set(true);
    }
}

pub struct Scrollspy {
    active: Option<SectionId>,
    refresh_pending: bool,
    ripples: Vec<Ripple>,
    scheduler: Box<dyn FrameScheduler>,
}

impl Scrollspy {
    /// Starts tracking. An initial refresh is queued immediately so the
    /// highlight is correct on the first drawn frame, without waiting for
    /// the user to scroll.
    pub fn attach(scheduler: Box<dyn FrameScheduler>) -> Self {
        let spy = Scrollspy {
            active: None,
            refresh_pending: true,
            ripples: Vec::new(),
            scheduler,
        };
        spy.scheduler.request_frame();
        spy
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn is_refresh_pending(&self) -> bool {
        self.refresh_pending
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn has_ripples(&self) -> bool {
        !self.ripples.is_empty()
    }

    /// Queues a refresh for the next frame. Further calls before that frame
    /// runs are absorbed by the pending flag.
    pub fn schedule_refresh(&mut self) {
        if self.refresh_pending {
            return;
        }
        self.refresh_pending = true;
        self.scheduler.request_frame();
    }

    /// Rescans the geometry and moves the highlight to the section nearest
    /// the viewport center. With no sections the highlight stays put.
    pub fn refresh_active_link(&mut self, layout: &ContentLayout) {
        if let Some(geom) = locate_closest_section(layout) {
            self.active = Some(geom.id.clone());
        }
    }

    /// Per-frame work: runs a pending refresh once a usable layout exists
    /// and retires finished ripples. A `None` layout (degenerate viewport)
    /// leaves the refresh pending for a later frame.
    pub fn on_frame(&mut self, layout: Option<&ContentLayout>, now: Instant) {
        if self.refresh_pending {
            if let Some(layout) = layout {
                self.refresh_pending = false;
                self.refresh_active_link(layout);
            }
        }
        ripple::retire_expired(&mut self.ripples, now);
    }

    /// Activates `link`: the highlight moves to it at once, a ripple plays
    /// on its row, and if a matching section exists the view glides until
    /// that section's center meets the viewport center.
    ///
    /// The highlight moves even when no section matches the link; with
    /// nothing to scroll to, no later refresh fires to take it back.
    pub fn activate_link(
        &mut self,
        link: &SidebarLink,
        link_area: Rect,
        pointer: Option<(u16, u16)>,
        layout: Option<&ContentLayout>,
        smooth: &mut SmoothScroll,
        now: Instant,
    ) {
        self.active = Some(link.id.clone());
        if let Some(layout) = layout {
            if let Some(geom) = layout.section(&link.id) {
                smooth.scroll_to(layout.centered_offset(geom));
            }
        }
        self.ripples.push(Ripple::new(link_area, pointer, now));
        self.scheduler.request_frame();
    }
}

/// Section whose center is nearest the viewport center, scanning in
/// document order. Strict comparison keeps the first of an equidistant
/// pair. Sections entirely off screen still count; the nearest one wins
/// no matter how far away it is.
pub fn locate_closest_section(layout: &ContentLayout) -> Option<&SectionGeom> {
    let target = layout.viewport_center2();
    let mut best: Option<(&SectionGeom, i32)> = None;
    for geom in layout.sections() {
        let distance = (geom.center2() - target).abs();
        match best {
            Some((_, shortest)) if distance >= shortest => {}
            _ => best = Some((geom, distance)),
        }
    }
    best.map(|(geom, _)| geom)
}
