use crate::controller::{Controller, FrameCtx};
use crate::eval::scroll::{section_progress, visible_ratio};
use crate::foundation::core::ElementId;
use crate::style::batch::{StyleBatch, props};

/// Progress pair handed to a section effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionFrame {
    /// Section-local progress.
    pub local: f64,
    /// Page-global progress.
    pub global: f64,
}

impl SectionFrame {
    /// The fully progressed frame used by [`Controller::complete`].
    pub const DONE: Self = Self {
        local: 1.0,
        global: 1.0,
    };
}

/// Per-section callback deriving further sub-ranges from a [`SectionFrame`].
pub trait SectionEffect {
    /// Queue the writes for `frame`.
    fn apply(&mut self, frame: SectionFrame, out: &mut StyleBatch);
}

impl<F> SectionEffect for F
where
    F: FnMut(SectionFrame, &mut StyleBatch),
{
    fn apply(&mut self, frame: SectionFrame, out: &mut StyleBatch) {
        self(frame, out)
    }
}

/// Adds a class while enough of the section is on screen and removes it otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityToggle {
    class: String,
    threshold: f64,
    active: Option<bool>,
}

impl VisibilityToggle {
    /// Toggle `class` at `threshold` visible ratio.
    pub fn new(class: impl Into<String>, threshold: f64) -> Self {
        Self {
            class: class.into(),
            threshold,
            active: None,
        }
    }

    /// Whether the class is currently applied (`None` before the first update).
    pub fn is_active(&self) -> Option<bool> {
        self.active
    }

    pub(crate) fn update(&mut self, target: &ElementId, ratio: f64, out: &mut StyleBatch) {
        let active = ratio >= self.threshold;
        if self.active == Some(active) {
            return;
        }
        self.active = Some(active);
        out.set_class(target, &self.class, active);
    }
}

/// Publishes a section's local progress and forwards it to the section's effect.
pub struct SectionTracker {
    section: ElementId,
    effect: Option<Box<dyn SectionEffect>>,
    visibility: Option<VisibilityToggle>,
}

impl std::fmt::Debug for SectionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionTracker")
            .field("section", &self.section)
            .field("has_effect", &self.effect.is_some())
            .field("visibility", &self.visibility)
            .finish()
    }
}

impl SectionTracker {
    /// Tracker that only publishes local progress.
    pub fn new(section: ElementId) -> Self {
        Self {
            section,
            effect: None,
            visibility: None,
        }
    }

    /// Register the per-section effect.
    pub fn with_effect(mut self, effect: impl SectionEffect + 'static) -> Self {
        self.effect = Some(Box::new(effect));
        self
    }

    /// Register a visibility class toggle.
    pub fn with_visibility(mut self, toggle: VisibilityToggle) -> Self {
        self.visibility = Some(toggle);
        self
    }

    /// The visibility toggle, if any.
    pub fn visibility(&self) -> Option<&VisibilityToggle> {
        self.visibility.as_ref()
    }

    fn emit(&mut self, frame: SectionFrame, out: &mut StyleBatch) {
        out.set_number(&self.section, props::SECTION_PROGRESS, frame.local);
        if let Some(effect) = self.effect.as_mut() {
            effect.apply(frame, out);
        }
    }
}

impl Controller for SectionTracker {
    fn section(&self) -> &str {
        self.section.as_str()
    }

    fn update(&mut self, ctx: &FrameCtx<'_>, out: &mut StyleBatch) {
        let Some(element) = ctx.layout.element_box(&self.section) else {
            return;
        };
        let local = section_progress(ctx.metrics, element);
        self.emit(
            SectionFrame {
                local,
                global: ctx.global,
            },
            out,
        );
        if let Some(toggle) = self.visibility.as_mut() {
            toggle.update(&self.section, visible_ratio(ctx.metrics, element), out);
        }
    }

    fn complete(&mut self, out: &mut StyleBatch) {
        self.emit(SectionFrame::DONE, out);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/tracker.rs"]
mod tests;
