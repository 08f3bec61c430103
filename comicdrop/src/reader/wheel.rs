//! Rate limiting for scroll-wheel zoom input.

use std::time::{Duration, Instant};

use super::ViewportTransform;

/// Minimum time between two flushes of buffered wheel deltas.
pub const FLUSH_INTERVAL: Duration = Duration::from_millis(15);

/// Buffers raw wheel deltas and applies them in bursts.
///
/// High-resolution wheels and trackpads can emit hundreds of events per
/// second; applying each one straight away forces a re-render per event.
/// Deltas are collected here and drained into the transform at most once per
/// [`FLUSH_INTERVAL`]. Each delta is still applied individually, in arrival
/// order, so the fine/notch classification in
/// [`ViewportTransform::wheel_zoom`] sees exactly the events the user made
/// and the converged scale matches immediate application.
#[derive(Debug, Default)]
pub struct WheelBuffer {
    pending: Vec<f32>,
    last_flush: Option<Instant>,
}

impl WheelBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, delta: f32) {
        if delta != 0.0 {
            self.pending.push(delta);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain buffered deltas into `transform` if the interval has elapsed.
    /// Returns whether anything was applied.
    pub fn flush_into(&mut self, transform: &mut ViewportTransform, now: Instant) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        if let Some(last) = self.last_flush {
            if now.duration_since(last) < FLUSH_INTERVAL {
                return false;
            }
        }
        for delta in self.pending.drain(..) {
            transform.wheel_zoom(delta);
        }
        self.last_flush = Some(now);
        true
    }
}
