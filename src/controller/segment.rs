//! One drawable path and its dotted → drawing → complete state machine.

use crate::animation::progress::{clamp01, ease_in_out, parse_progress_value, range_progress};
use crate::foundation::core::{ElementId, css_number};
use crate::style::batch::{StyleBatch, props};

/// Opacity of a segment that has not started drawing.
pub const DOTTED_OPACITY: f64 = 0.22;
/// Opacity at the very start of drawing; rises by [`DRAW_OPACITY_SPAN`] to 1.
pub const DRAW_OPACITY_BASE: f64 = 0.25;
/// Opacity gained over the drawing window.
pub const DRAW_OPACITY_SPAN: f64 = 0.75;
/// Minimum `end - start`; `end` is pushed forward to honor it.
pub const MIN_WINDOW: f64 = 0.01;

/// Discrete draw state of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentState {
    /// Before its window: sparse dotted stroke at low opacity.
    Dotted,
    /// Inside its window: solid stroke being revealed.
    Drawing,
    /// At or past the end of its window: fully drawn.
    Complete,
}

/// Dash patterns precomputed from a path length.
#[derive(Clone, Debug, PartialEq)]
pub struct DashPatterns {
    /// Sparse dotted pattern, `"<dot> <gap>"`.
    pub dotted: String,
    /// Single continuous stroke, `"<length> <length>"`.
    pub solid: String,
}

impl DashPatterns {
    /// Derive both patterns for a path of `length`.
    ///
    /// `gap = max(length / 60, 14)`, `dot = max(gap · 0.35, 3)`.
    pub fn for_length(length: f64) -> Self {
        let gap = (length / 60.0).max(14.0);
        let dot = (gap * 0.35).max(3.0);
        let len = css_number(length);
        Self {
            dotted: format!("{} {}", css_number(dot), css_number(gap)),
            solid: format!("{len} {len}"),
        }
    }
}

/// State record for one animated path.
#[derive(Clone, Debug)]
pub struct Segment {
    id: ElementId,
    length: f64,
    start: f64,
    end: f64,
    state: SegmentState,
    patterns: DashPatterns,
    dash_offset: f64,
    opacity: f64,
}

impl Segment {
    /// Segment over `[start, end]`; thresholds are clamped and `end` is nudged past `start`.
    ///
    /// Both thresholds stay inside `[0, 1]`: a window that cannot open before 1 becomes
    /// `[1 - MIN_WINDOW, 1]`.
    pub fn new(id: ElementId, length: f64, start: f64, end: f64) -> Self {
        let length = if length.is_finite() {
            length.max(0.0)
        } else {
            0.0
        };
        let mut start = clamp01(start);
        let mut end = clamp01(end);
        if end <= start {
            end = start + MIN_WINDOW;
            if end > 1.0 {
                end = 1.0;
                start = 1.0 - MIN_WINDOW;
            }
        }
        Self {
            id,
            length,
            start,
            end,
            state: SegmentState::Dotted,
            patterns: DashPatterns::for_length(length),
            dash_offset: 0.0,
            opacity: DOTTED_OPACITY,
        }
    }

    /// Segment from textual threshold attributes (fallbacks 0 and 1).
    pub fn from_attributes(
        id: ElementId,
        length: f64,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Self {
        Self::new(
            id,
            length,
            parse_progress_value(start, 0.0),
            parse_progress_value(end, 1.0),
        )
    }

    /// Element id of the path.
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    /// Measured path length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Window `(start, end)` after normalization.
    pub fn window(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    /// Current state.
    pub fn state(&self) -> SegmentState {
        self.state
    }

    /// Last written dash offset.
    pub fn dash_offset(&self) -> f64 {
        self.dash_offset
    }

    /// Last written opacity.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Precomputed dash patterns.
    pub fn patterns(&self) -> &DashPatterns {
        &self.patterns
    }

    /// Initial visual state: dotted, low opacity, length published for the styling layer.
    pub fn setup(&mut self, out: &mut StyleBatch) {
        self.state = SegmentState::Dotted;
        self.dash_offset = 0.0;
        self.opacity = DOTTED_OPACITY;
        out.set_number(&self.id, props::PATH_LENGTH, self.length);
        out.set_text(&self.id, props::STROKE_DASHARRAY, self.patterns.dotted.clone());
        out.set_number(&self.id, props::STROKE_DASHOFFSET, 0.0);
        out.set_number(&self.id, props::OPACITY, DOTTED_OPACITY);
    }

    /// Advance the state machine to local `progress` and queue the resulting writes.
    pub fn advance(&mut self, progress: f64, out: &mut StyleBatch) -> SegmentState {
        let p = range_progress(progress, self.start, self.end);
        let next = if p <= 0.0 {
            SegmentState::Dotted
        } else if p >= 1.0 {
            SegmentState::Complete
        } else {
            SegmentState::Drawing
        };

        if next != self.state {
            tracing::debug!(
                segment = %self.id,
                from = ?self.state,
                to = ?next,
                "segment transition"
            );
        }

        match next {
            SegmentState::Dotted => {
                if self.state != SegmentState::Dotted {
                    self.dash_offset = 0.0;
                    self.opacity = DOTTED_OPACITY;
                    out.set_text(&self.id, props::STROKE_DASHARRAY, self.patterns.dotted.clone());
                    out.set_number(&self.id, props::STROKE_DASHOFFSET, 0.0);
                    out.set_number(&self.id, props::OPACITY, DOTTED_OPACITY);
                }
            }
            SegmentState::Drawing => {
                if self.state == SegmentState::Dotted {
                    out.set_text(&self.id, props::STROKE_DASHARRAY, self.patterns.solid.clone());
                }
                let eased = ease_in_out(p);
                self.dash_offset = (1.0 - eased) * self.length;
                self.opacity = DRAW_OPACITY_BASE + DRAW_OPACITY_SPAN * eased;
                out.set_number(&self.id, props::STROKE_DASHOFFSET, self.dash_offset);
                out.set_number(&self.id, props::OPACITY, self.opacity);
            }
            SegmentState::Complete => {
                if self.state != SegmentState::Complete {
                    if self.state == SegmentState::Dotted {
                        let solid = self.patterns.solid.clone();
                        out.set_text(&self.id, props::STROKE_DASHARRAY, solid);
                    }
                    self.write_complete(out);
                }
            }
        }
        self.state = next;
        next
    }

    /// Force the fully drawn state regardless of progress and stop any keyframe animation.
    pub fn complete(&mut self, out: &mut StyleBatch) {
        out.set_text(&self.id, props::ANIMATION, "none");
        out.set_text(&self.id, props::STROKE_DASHARRAY, self.patterns.solid.clone());
        self.write_complete(out);
        self.state = SegmentState::Complete;
    }

    fn write_complete(&mut self, out: &mut StyleBatch) {
        self.dash_offset = 0.0;
        self.opacity = 1.0;
        out.set_number(&self.id, props::STROKE_DASHOFFSET, 0.0);
        out.set_number(&self.id, props::OPACITY, 1.0);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/segment.rs"]
mod tests;
