use crate::controller::segment::Segment;
use crate::controller::tracker::VisibilityToggle;
use crate::controller::{Controller, FrameCtx};
use crate::eval::scroll::{section_progress, visible_ratio};
use crate::foundation::core::ElementId;
use crate::style::batch::{StyleBatch, props};

/// Drives every drawable path inside one section from the section's local progress.
#[derive(Clone, Debug)]
pub struct IllustrationController {
    section: ElementId,
    segments: Vec<Segment>,
    visibility: Option<VisibilityToggle>,
}

impl IllustrationController {
    /// Controller for `section` owning `segments`.
    pub fn new(section: ElementId, segments: Vec<Segment>) -> Self {
        Self {
            section,
            segments,
            visibility: None,
        }
    }

    /// Register a visibility class toggle on the section element.
    pub fn with_visibility(mut self, toggle: VisibilityToggle) -> Self {
        self.visibility = Some(toggle);
        self
    }

    /// Owned segments, in document order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl Controller for IllustrationController {
    fn section(&self) -> &str {
        self.section.as_str()
    }

    fn setup(&mut self, out: &mut StyleBatch) {
        for seg in &mut self.segments {
            seg.setup(out);
        }
    }

    fn update(&mut self, ctx: &FrameCtx<'_>, out: &mut StyleBatch) {
        let Some(element) = ctx.layout.element_box(&self.section) else {
            return;
        };
        let local = section_progress(ctx.metrics, element);
        out.set_number(&self.section, props::SECTION_PROGRESS, local);
        for seg in &mut self.segments {
            seg.advance(local, out);
        }
        if let Some(toggle) = self.visibility.as_mut() {
            toggle.update(&self.section, visible_ratio(ctx.metrics, element), out);
        }
    }

    fn complete(&mut self, out: &mut StyleBatch) {
        out.set_number(&self.section, props::SECTION_PROGRESS, 1.0);
        for seg in &mut self.segments {
            seg.complete(out);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/illustration.rs"]
mod tests;
