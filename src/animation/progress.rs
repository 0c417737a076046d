//! Progress primitives: the pure numeric functions every controller builds on.
//!
//! All functions are total. Non-finite input never escapes as `NaN`; degenerate intervals are
//! widened to [`MIN_RANGE_WIDTH`] instead of dividing by zero.

use crate::animation::ease::Ease;

/// Width substituted for a zero-width or inverted interval in [`range_progress`].
pub const MIN_RANGE_WIDTH: f64 = 1e-4;

/// Restrict `x` to `[0, 1]`. `NaN` maps to `0`.
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Smoothstep ease, `t² · (3 − 2t)`. Callers pass `t` already clamped.
pub fn ease_in_out(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation; `t` outside `[0, 1]` extrapolates.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Remap `value` from `[start, end]` to `[0, 1]`, clamped.
pub fn range_progress(value: f64, start: f64, end: f64) -> f64 {
    let width = end - start;
    let width = if width > MIN_RANGE_WIDTH {
        width
    } else {
        MIN_RANGE_WIDTH
    };
    clamp01((value - start) / width)
}

/// `ease_in_out(range_progress(value, start, end))`.
pub fn ease_range(value: f64, start: f64, end: f64) -> f64 {
    ease_in_out(range_progress(value, start, end))
}

/// Parse a textual numeric attribute into a clamped progress value.
///
/// Missing, unparsable or non-finite input yields `fallback` unchanged.
pub fn parse_progress_value(raw: Option<&str>, fallback: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(clamp01)
        .unwrap_or(fallback)
}

/// A sub-window of a progress scalar plus the ease applied inside it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubRange {
    /// Progress at which the window opens.
    pub start: f64,
    /// Progress at which the window closes.
    pub end: f64,
    /// Ease applied to the remapped value.
    #[serde(default)]
    pub ease: Ease,
}

impl SubRange {
    /// Window with the default smoothstep ease.
    pub const fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            ease: Ease::Smoothstep,
        }
    }

    /// Remap and ease `value` through this window.
    pub fn sample(self, value: f64) -> f64 {
        self.ease.apply(range_progress(value, self.start, self.end))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
