//! Frame-coalescing update scheduler.
//!
//! Scroll and resize events only raise an intent; the next animation frame runs exactly one pass
//! over the registry and clears it. Under reduced motion the registry is completed once at start
//! and events are never observed.

use crate::controller::FrameCtx;
use crate::eval::layout::Layout;
use crate::eval::scroll::{ElementBox, ScrollMetrics, global_progress};
use crate::foundation::core::ElementId;
use crate::foundation::error::RevealResult;
use crate::registry::ControllerRegistry;
use crate::style::batch::{PassInfo, PassKind, StyleBatch};
use crate::style::sink::StyleSink;

/// Startup configuration threaded into the scheduler.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EngineOptions {
    /// The platform's reduced-motion preference, read once at startup.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Class added to the document root at startup so styles can opt into scripted animation.
    #[serde(default = "default_root_class")]
    pub root_class: Option<String>,
    /// Display frame interval used when simulating a frame clock.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: f64,
}

fn default_root_class() -> Option<String> {
    Some("has-js".to_owned())
}

fn default_frame_interval_ms() -> f64 {
    16.0
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            root_class: default_root_class(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

/// Event that invalidates the current progress values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// The viewport scrolled to `scroll_top`.
    Scroll {
        /// New scroll offset.
        scroll_top: f64,
    },
    /// The viewport was resized to `viewport_height`.
    Resize {
        /// New viewport height.
        viewport_height: f64,
    },
}

/// Outcome of [`UpdateScheduler::notify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    /// First event since the last pass; the caller must schedule an animation frame.
    Requested,
    /// A frame is already pending; the event was folded into it.
    Coalesced,
    /// Listeners are not installed (reduced motion).
    Ignored,
}

/// Whether the scheduler reacts to events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerMode {
    /// Listening; passes run on animation frames.
    Live,
    /// Completed once at startup; events are ignored.
    Static,
}

/// Counters exposed for diagnostics and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SchedulerStats {
    /// Events received.
    pub events: u64,
    /// Events folded into an already pending frame.
    pub coalesced: u64,
    /// Animation frames requested.
    pub frames_requested: u64,
    /// Passes handed to the sink (setup, initial, frame and completion passes).
    pub passes: u64,
}

/// Owns the registry and decides when it recomputes.
#[derive(Debug)]
pub struct UpdateScheduler {
    registry: ControllerRegistry,
    mode: SchedulerMode,
    pending: bool,
    next_pass: u64,
    batch: StyleBatch,
    stats: SchedulerStats,
}

impl UpdateScheduler {
    /// Start the engine: apply construction-time writes, then either complete everything (reduced
    /// motion) or run the immediate first computation.
    pub fn start<L, S>(
        registry: ControllerRegistry,
        options: &EngineOptions,
        layout: &L,
        sink: &mut S,
    ) -> RevealResult<Self>
    where
        L: Layout + ?Sized,
        S: StyleSink + ?Sized,
    {
        let mode = if options.reduced_motion {
            SchedulerMode::Static
        } else {
            SchedulerMode::Live
        };
        let mut sched = Self {
            registry,
            mode,
            pending: false,
            next_pass: 0,
            batch: StyleBatch::new(),
            stats: SchedulerStats::default(),
        };
        tracing::info!(
            controllers = sched.registry.len(),
            mode = ?mode,
            "starting scroll engine"
        );

        if let Some(class) = options.root_class.as_deref() {
            sched.batch.set_class(&ElementId::root(), class, true);
        }
        sched.registry.setup_all(&mut sched.batch);
        let global = global_progress(layout.metrics());
        sched.flush(PassKind::Setup, global, sink)?;

        match mode {
            SchedulerMode::Static => {
                sched.registry.complete_all(&mut sched.batch);
                sched.flush(PassKind::Complete, 1.0, sink)?;
            }
            SchedulerMode::Live => sched.run_pass(PassKind::Initial, layout, sink)?,
        }
        Ok(sched)
    }

    /// Record an invalidating event. At most one frame is ever pending.
    pub fn notify(&mut self, event: PageEvent) -> FrameRequest {
        if self.mode == SchedulerMode::Static {
            return FrameRequest::Ignored;
        }
        self.stats.events += 1;
        if self.pending {
            self.stats.coalesced += 1;
            tracing::trace!(?event, "coalesced into pending frame");
            return FrameRequest::Coalesced;
        }
        self.pending = true;
        self.stats.frames_requested += 1;
        FrameRequest::Requested
    }

    /// Animation-frame callback: runs one pass if an update is pending. Returns whether it ran.
    pub fn on_animation_frame<L, S>(&mut self, layout: &L, sink: &mut S) -> RevealResult<bool>
    where
        L: Layout + ?Sized,
        S: StyleSink + ?Sized,
    {
        if !self.pending {
            return Ok(false);
        }
        self.run_pass(PassKind::Frame, layout, sink)?;
        self.pending = false;
        Ok(true)
    }

    /// Whether a frame is pending.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Current mode.
    pub fn mode(&self) -> SchedulerMode {
        self.mode
    }

    /// Counters so far.
    pub fn stats(&self) -> SchedulerStats {
        self.stats
    }

    #[tracing::instrument(skip_all, fields(pass = self.next_pass, kind = ?kind))]
    fn run_pass<L, S>(&mut self, kind: PassKind, layout: &L, sink: &mut S) -> RevealResult<()>
    where
        L: Layout + ?Sized,
        S: StyleSink + ?Sized,
    {
        let metrics = layout.metrics();
        let global = global_progress(metrics);
        let ctx = FrameCtx {
            layout: &LayoutRef(layout),
            metrics,
            global,
        };
        self.registry.update_all(&ctx, &mut self.batch);
        tracing::debug!(global, writes = self.batch.len(), "pass computed");
        self.flush(kind, global, sink)
    }

    fn flush<S>(&mut self, kind: PassKind, global: f64, sink: &mut S) -> RevealResult<()>
    where
        S: StyleSink + ?Sized,
    {
        let info = PassInfo {
            index: self.next_pass,
            kind,
            global_progress: global,
        };
        let result = sink.apply(&info, &self.batch);
        self.batch.clear();
        self.next_pass += 1;
        self.stats.passes += 1;
        result
    }
}

/// Adapts a possibly unsized layout to `&dyn Layout`.
struct LayoutRef<'a, L: ?Sized>(&'a L);

impl<L: Layout + ?Sized> Layout for LayoutRef<'_, L> {
    fn metrics(&self) -> ScrollMetrics {
        self.0.metrics()
    }

    fn element_box(&self, id: &ElementId) -> Option<ElementBox> {
        self.0.element_box(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scheduler/frame.rs"]
mod tests;
