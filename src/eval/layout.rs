use crate::eval::scroll::{ElementBox, ScrollMetrics};
use crate::foundation::core::ElementId;
use std::collections::BTreeMap;

/// Read-only view of page geometry consumed by controllers.
///
/// Implementations answer from whatever owns the real layout (a browser binding, a test fixture,
/// the [`StaticLayout`] built from a page description).
pub trait Layout {
    /// Current viewport and document geometry.
    fn metrics(&self) -> ScrollMetrics;
    /// Bounding box of `id`, or `None` when the element is absent.
    fn element_box(&self, id: &ElementId) -> Option<ElementBox>;
}

/// Layout with fixed element boxes and a movable viewport.
#[derive(Clone, Debug)]
pub struct StaticLayout {
    metrics: ScrollMetrics,
    boxes: BTreeMap<ElementId, ElementBox>,
}

impl StaticLayout {
    /// Layout with no elements, scrolled to `metrics.scroll_top` (clamped to the document).
    pub fn new(metrics: ScrollMetrics) -> Self {
        let mut out = Self {
            metrics,
            boxes: BTreeMap::new(),
        };
        out.scroll_to(metrics.scroll_top);
        out
    }

    /// Register (or replace) an element box.
    pub fn insert(&mut self, id: ElementId, element: ElementBox) {
        self.boxes.insert(id, element);
    }

    /// Move the viewport, clamping to `[0, max_scroll]` like a browser does.
    pub fn scroll_to(&mut self, scroll_top: f64) {
        let max = self.metrics.max_scroll();
        self.metrics.scroll_top = if scroll_top.is_nan() {
            0.0
        } else {
            scroll_top.clamp(0.0, max)
        };
    }

    /// Change the viewport height and re-clamp the scroll offset.
    pub fn resize(&mut self, viewport_height: f64) {
        self.metrics.viewport_height = viewport_height.max(0.0);
        self.scroll_to(self.metrics.scroll_top);
    }
}

impl Layout for StaticLayout {
    fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn element_box(&self, id: &ElementId) -> Option<ElementBox> {
        self.boxes.get(id).copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/layout.rs"]
mod tests;
