//! Progress sources: scroll geometry in, normalized progress out.

use crate::animation::progress::clamp01;

/// Viewport and document geometry at one instant, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    /// Vertical scroll offset of the viewport's top edge.
    pub scroll_top: f64,
    /// Height of the viewport.
    pub viewport_height: f64,
    /// Total height of the document.
    pub document_height: f64,
}

impl ScrollMetrics {
    /// Largest reachable `scroll_top`; zero when the document does not overflow.
    pub fn max_scroll(self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Viewport bottom edge in document coordinates.
    pub fn viewport_bottom(self) -> f64 {
        self.scroll_top + self.viewport_height
    }
}

/// Vertical extent of an element in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementBox {
    /// Offset of the element's top edge from the document top.
    pub top: f64,
    /// Element height.
    pub height: f64,
}

impl ElementBox {
    /// Box from a top offset and a height.
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Bottom edge in document coordinates.
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// How far the viewport has travelled through `element`, in `[0, 1]`.
///
/// Elements taller than the viewport report the fraction of their internal scroll travel consumed;
/// shorter ones report the fraction of their height that has entered from the viewport bottom.
pub fn section_progress(metrics: ScrollMetrics, element: ElementBox) -> f64 {
    let vh = metrics.viewport_height;
    if element.height > vh {
        let travel = element.height - vh;
        return clamp01((metrics.scroll_top - element.top) / travel);
    }
    if element.height <= 0.0 {
        return if metrics.viewport_bottom() >= element.top {
            1.0
        } else {
            0.0
        };
    }
    clamp01((metrics.viewport_bottom() - element.top) / element.height)
}

/// Fraction of the document's scrollable height consumed; `1` when nothing can scroll.
pub fn global_progress(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.max_scroll();
    if scrollable <= 0.0 {
        return 1.0;
    }
    clamp01(metrics.scroll_top / scrollable)
}

/// Share of `element`'s height currently inside the viewport, in `[0, 1]`.
pub fn visible_ratio(metrics: ScrollMetrics, element: ElementBox) -> f64 {
    if element.height <= 0.0 {
        return 0.0;
    }
    let overlap =
        metrics.viewport_bottom().min(element.bottom()) - metrics.scroll_top.max(element.top);
    clamp01(overlap / element.height)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/scroll.rs"]
mod tests;
