//! Scroll-linked animation engine.
//!
//! Turns raw scroll geometry into per-element progress values and style writes for line-drawing
//! reveals, vehicle sprites and progress-driven custom properties.
//!
//! # Pipeline overview
//!
//! 1. **Progress primitives**: clamp, ease, lerp and range remapping ([`clamp01`],
//!    [`ease_range`], ...).
//! 2. **Progress sources**: `ScrollMetrics + ElementBox -> progress` ([`section_progress`],
//!    [`global_progress`]).
//! 3. **Controllers**: stateful per-section objects that queue [`StyleWrite`]s into a
//!    [`StyleBatch`] ([`IllustrationController`], [`SectionTracker`]).
//! 4. **Scheduler**: coalesces scroll/resize events into at most one pass per animation frame
//!    and hands each pass's batch to a [`StyleSink`] ([`UpdateScheduler`]).
//!
//! Page geometry is read through the [`Layout`] trait and every output goes through a sink, so
//! the whole engine runs without a real display. [`build_page`] and [`ScrollSession`] wire a JSON
//! page description ([`PageDef`]) into that pipeline.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod controller;
mod eval;
mod foundation;
mod page;
mod registry;
mod scheduler;
mod session;
mod style;

pub use animation::ease::Ease;
pub use animation::progress::{
    MIN_RANGE_WIDTH, SubRange, clamp01, ease_in_out, ease_range, lerp, parse_progress_value,
    range_progress,
};
pub use controller::effects::{
    DEFAULT_WHEEL_MAX_DEG, HeroEffect, InfoBlockEffect, Leg, VehicleEffect,
};
pub use controller::illustration::IllustrationController;
pub use controller::segment::{
    DOTTED_OPACITY, DRAW_OPACITY_BASE, DRAW_OPACITY_SPAN, DashPatterns, MIN_WINDOW, Segment,
    SegmentState,
};
pub use controller::tracker::{SectionEffect, SectionFrame, SectionTracker, VisibilityToggle};
pub use controller::{Controller, FrameCtx};
pub use eval::layout::{Layout, StaticLayout};
pub use eval::scroll::{
    ElementBox, ScrollMetrics, global_progress, section_progress, visible_ratio,
};
pub use foundation::core::{BezPath, ElementId, Transform2D, Vec2, css_number};
pub use foundation::error::{RevealError, RevealResult};
pub use page::build::{ARCLEN_ACCURACY, BuiltPage, build_page, measure_path};
pub use page::model::{
    CableDef, DocumentDef, HeroDef, InfoDef, LegDef, PageDef, PathDef, SectionDef,
    SectionKindDef, Vec2Def, VehicleDef, ViewportDef, VisibilityDef,
};
pub use registry::ControllerRegistry;
pub use scheduler::frame::{
    EngineOptions, FrameRequest, PageEvent, SchedulerMode, SchedulerStats, UpdateScheduler,
};
pub use session::{ScriptEvent, ScrollSession};
pub use style::batch::{PassInfo, PassKind, StyleBatch, StyleValue, StyleWrite, props};
pub use style::sink::{ComputedStyles, InMemorySink, JsonLinesSink, StyleSink};
