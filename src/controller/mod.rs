//! Animation controllers: stateful per-section objects that turn progress into style writes.

pub(crate) mod effects;
pub(crate) mod illustration;
pub(crate) mod segment;
pub(crate) mod tracker;

use crate::eval::layout::Layout;
use crate::eval::scroll::ScrollMetrics;
use crate::style::batch::StyleBatch;

/// Inputs shared by every controller during one pass.
#[derive(Clone, Copy)]
pub struct FrameCtx<'a> {
    /// Geometry source for element boxes.
    pub layout: &'a dyn Layout,
    /// Viewport/document geometry sampled once for the pass.
    pub metrics: ScrollMetrics,
    /// Page-global progress for the pass.
    pub global: f64,
}

/// The update/complete contract shared by all controllers.
///
/// A controller writes only to elements it owns, so passes never need to arbitrate between
/// controllers.
pub trait Controller {
    /// Id of the section element this controller owns (for diagnostics).
    fn section(&self) -> &str;

    /// Initial writes performed once when the controller is created.
    fn setup(&mut self, _out: &mut StyleBatch) {}

    /// Recompute from current geometry and queue the resulting writes.
    fn update(&mut self, ctx: &FrameCtx<'_>, out: &mut StyleBatch);

    /// Drive to the final visual state (reduced motion).
    fn complete(&mut self, out: &mut StyleBatch);
}
