use crate::controller::{Controller, FrameCtx};
use crate::foundation::core::ElementId;
use crate::style::batch::{StyleBatch, props};

/// Every controller created at startup, plus the page-wide elements driven alongside them.
///
/// Lives as long as the page view; there is no teardown.
#[derive(Default)]
pub struct ControllerRegistry {
    controllers: Vec<Box<dyn Controller>>,
    static_reveal: Vec<ElementId>,
}

impl std::fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sections: Vec<&str> = self.controllers.iter().map(|c| c.section()).collect();
        f.debug_struct("ControllerRegistry")
            .field("sections", &sections)
            .field("static_reveal", &self.static_reveal)
            .finish()
    }
}

impl ControllerRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a controller; passes visit controllers in registration order.
    pub fn register(&mut self, controller: impl Controller + 'static) {
        self.controllers.push(Box::new(controller));
    }

    /// Elements made visible (`animation: none`, `opacity: 1`) under reduced motion.
    pub fn set_static_reveal(&mut self, ids: Vec<ElementId>) {
        self.static_reveal = ids;
    }

    /// Number of registered controllers.
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Whether no controller was registered.
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Run every controller's construction-time writes.
    pub fn setup_all(&mut self, out: &mut StyleBatch) {
        for c in &mut self.controllers {
            c.setup(out);
        }
    }

    /// One full recomputation pass.
    pub fn update_all(&mut self, ctx: &FrameCtx<'_>, out: &mut StyleBatch) {
        out.set_number(&ElementId::root(), props::GLOBAL_PROGRESS, ctx.global);
        for c in &mut self.controllers {
            c.update(ctx, out);
        }
    }

    /// Drive everything to its final state.
    pub fn complete_all(&mut self, out: &mut StyleBatch) {
        out.set_number(&ElementId::root(), props::GLOBAL_PROGRESS, 1.0);
        for id in &self.static_reveal {
            out.set_text(id, props::ANIMATION, "none");
            out.set_number(id, props::OPACITY, 1.0);
        }
        for c in &mut self.controllers {
            c.complete(out);
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/registry.rs"]
mod tests;
