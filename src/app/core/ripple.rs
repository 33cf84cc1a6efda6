//! Click feedback on sidebar links.
//!
//! Activating a link spawns a ripple over its row: a disc that expands from
//! the click cell (or the row center for keyboard activation) and fades as
//! it grows, then removes itself after [`RIPPLE_MS`]. Several ripples may be
//! live at once when clicks land faster than they expire.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

/// Lifetime of one ripple.
pub const RIPPLE_MS: u64 = 700;

/// Final ripple diameter relative to the larger dimension of the link area.
const SIZE_FACTOR: f32 = 1.2;

/// Terminal cells are roughly twice as tall as wide; vertical distances are
/// doubled so the disc looks round on screen.
const CELL_ASPECT: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct Ripple {
    area: Rect,
    origin: (u16, u16),
    started: Instant,
}

impl Ripple {
    /// Spawns a ripple over `area`. A pointer position outside the area is
    /// clamped onto it; `None` (keyboard activation) starts from the center.
    pub fn new(area: Rect, pointer: Option<(u16, u16)>, now: Instant) -> Self {
        let origin = match pointer {
            Some((x, y)) => (
                x.clamp(area.x, area.right().saturating_sub(1).max(area.x)),
                y.clamp(area.y, area.bottom().saturating_sub(1).max(area.y)),
            ),
            None => (
                area.x + area.width / 2,
                area.y + area.height / 2,
            ),
        };
        Ripple {
            area,
            origin,
            started: now,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= Duration::from_millis(RIPPLE_MS)
    }

    /// Animation progress in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.started).as_secs_f32();
        (elapsed / (RIPPLE_MS as f32 / 1000.0)).clamp(0.0, 1.0)
    }

    /// Disc radius this frame, in horizontal cell units.
    pub fn radius(&self, now: Instant) -> f32 {
        let max_dim = f32::from(self.area.width.max(self.area.height));
        let full = max_dim * SIZE_FACTOR / 2.0;
        full * ease_out_quad(self.progress(now))
    }

    /// How strongly the ripple tints the cell at `(x, y)` this frame, in
    /// `0.0..=1.0`. `None` when the cell lies outside the disc or outside
    /// the link area.
    pub fn cell_intensity(&self, x: u16, y: u16, now: Instant) -> Option<f32> {
        if !contains(self.area, x, y) {
            return None;
        }
        let dx = f32::from(x) - f32::from(self.origin.0);
        let dy = (f32::from(y) - f32::from(self.origin.1)) * CELL_ASPECT;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist > self.radius(now) {
            return None;
        }
        Some(1.0 - self.progress(now))
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.right() && y >= area.y && y < area.bottom()
}

fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Drops every ripple whose lifetime has passed.
pub fn retire_expired(ripples: &mut Vec<Ripple>, now: Instant) {
    ripples.retain(|r| !r.is_expired(now));
}
