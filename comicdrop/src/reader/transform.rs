//! Zoom and pan state for the page viewport.
//!
//! The transform is relative to the fitted baseline: a scale of `1.0` means
//! "page fitted to the window", not "natural pixel size". The renderer
//! multiplies this scale onto whatever fit factor the current window gives it,
//! so a reset always returns to a fully visible page regardless of window
//! shape.

use eframe::egui::Vec2;

/// Lower bound on the zoom scale.
pub const MIN_SCALE: f32 = 0.1;
/// Upper bound on the zoom scale.
pub const MAX_SCALE: f32 = 8.0;

/// Scroll deltas smaller than this (in points) are treated as smooth-wheel
/// or trackpad input and applied additively; larger deltas are discrete
/// wheel notches and applied multiplicatively.
const FINE_DELTA_LIMIT: f32 = 10.0;
/// Additive scale change per point of smooth scrolling.
const FINE_RATE: f32 = 0.01;
/// Multiplicative step per wheel notch, zooming in.
const NOTCH_IN: f32 = 1.05;
/// Multiplicative step per wheel notch, zooming out.
const NOTCH_OUT: f32 = 0.95;

/// Scales this close to `1.0` still count as "not zoomed in", so panning
/// stays disabled at the fitted baseline even after float round-trips.
const PAN_THRESHOLD: f32 = 1.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    scale: f32,
    offset: Vec2,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl ViewportTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Back to the fitted baseline, centred.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the viewport is zoomed in far enough for panning to make sense.
    pub fn is_zoomed_in(&self) -> bool {
        self.scale > PAN_THRESHOLD
    }

    fn apply_scale(&mut self, candidate: f32) {
        // Non-finite candidates (zero-size windows, broken input events)
        // leave the last valid scale in place.
        if candidate.is_finite() {
            self.scale = candidate.clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    /// Set the scale directly, e.g. from a slider.
    pub fn set_scale(&mut self, value: f32) {
        self.apply_scale(value);
    }

    /// Multiply the scale by a factor.
    pub fn zoom_by(&mut self, factor: f32) {
        self.apply_scale(self.scale * factor);
    }

    /// Apply a pinch gesture: scale by the ratio of the current finger
    /// distance to the previous one.
    pub fn pinch_zoom(&mut self, distance_ratio: f32) {
        self.zoom_by(distance_ratio);
    }

    /// Apply one scroll-wheel delta (egui convention: positive is towards
    /// the user's content, i.e. zoom in).
    pub fn wheel_zoom(&mut self, delta: f32) {
        if !delta.is_finite() || delta == 0.0 {
            return;
        }
        if delta.abs() < FINE_DELTA_LIMIT {
            self.apply_scale(self.scale + delta * FINE_RATE);
        } else if delta > 0.0 {
            self.apply_scale(self.scale * NOTCH_IN);
        } else {
            self.apply_scale(self.scale * NOTCH_OUT);
        }
    }

    /// Shift the pan offset. The offset is unconstrained here; callers decide
    /// when panning is allowed (see [`Self::is_zoomed_in`]).
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta.x.is_finite() && delta.y.is_finite() {
            self.offset += delta;
        }
    }

    /// Snap between the fitted baseline and an alternate fit ratio (the
    /// double-click gesture). Either way the pan offset is cleared.
    pub fn toggle_fit(&mut self, fit_ratio: f32) {
        if !fit_ratio.is_finite() {
            return;
        }
        if (self.scale - 1.0).abs() < 0.01 {
            self.apply_scale(fit_ratio);
        } else {
            self.scale = 1.0;
        }
        self.offset = Vec2::ZERO;
    }
}
