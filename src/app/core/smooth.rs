//! Smooth scroll animator with exponential ease-out.
//!
//! A target offset is set once; each frame the current offset moves a fixed
//! fraction of the remaining distance, so motion decelerates as it lands.
//! Direct user scrolling cancels the target instead of fighting it.

/// Fraction of the remaining distance covered per frame.
pub const DEFAULT_SPEED: f32 = 0.35;

/// Distances below this snap straight to the target.
const SNAP: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    target: Option<f32>,
    speed: f32,
}

impl SmoothScroll {
    pub fn new(speed: f32) -> Self {
        Self {
            target: None,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Begin gliding toward `offset`.
    pub fn scroll_to(&mut self, offset: f32) {
        self.target = Some(offset);
    }

    /// Drop the target, leaving the offset wherever it is now.
    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<f32> {
        self.target
    }

    /// Advance one frame from `current`. Returns the new offset while the
    /// animation is live, `None` once it has settled.
    pub fn tick(&mut self, current: f32) -> Option<f32> {
        let target = self.target?;
        let delta = target - current;
        if delta.abs() < SNAP {
            self.target = None;
            if delta == 0.0 {
                return None;
            }
            return Some(target);
        }
        Some(current + delta * self.speed)
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}
