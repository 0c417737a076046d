use crate::eval::layout::{Layout, StaticLayout};
use crate::foundation::error::{RevealError, RevealResult};
use crate::page::build::{BuiltPage, build_page};
use crate::page::model::PageDef;
use crate::scheduler::frame::{FrameRequest, PageEvent, SchedulerStats, UpdateScheduler};
use crate::style::sink::StyleSink;

/// A page event at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptEvent {
    /// Milliseconds since page load.
    pub at_ms: f64,
    /// The event.
    #[serde(flatten)]
    pub event: PageEvent,
}

/// A page view driven by a simulated display clock.
///
/// Events mutate the layout immediately and only request a frame; frames fire on
/// `frame_interval_ms` boundaries and run at most one pass each.
#[derive(Debug)]
pub struct ScrollSession {
    layout: StaticLayout,
    scheduler: UpdateScheduler,
    frame_interval_ms: f64,
}

impl ScrollSession {
    /// Build `page` and start its engine, emitting the startup passes into `sink`.
    pub fn start<S>(page: &PageDef, sink: &mut S) -> RevealResult<Self>
    where
        S: StyleSink + ?Sized,
    {
        let BuiltPage {
            layout,
            registry,
            options,
        } = build_page(page)?;
        let scheduler = UpdateScheduler::start(registry, &options, &layout, sink)?;
        Ok(Self {
            layout,
            scheduler,
            frame_interval_ms: options.frame_interval_ms,
        })
    }

    /// Apply `event` to the layout and notify the scheduler.
    pub fn dispatch(&mut self, event: PageEvent) -> FrameRequest {
        match event {
            PageEvent::Scroll { scroll_top } => self.layout.scroll_to(scroll_top),
            PageEvent::Resize { viewport_height } => self.layout.resize(viewport_height),
        }
        self.scheduler.notify(event)
    }

    /// Fire one animation frame.
    pub fn frame<S>(&mut self, sink: &mut S) -> RevealResult<bool>
    where
        S: StyleSink + ?Sized,
    {
        self.scheduler.on_animation_frame(&self.layout, sink)
    }

    /// Replay `script` against the frame clock, then fire a final frame.
    pub fn run<S>(&mut self, script: &[ScriptEvent], sink: &mut S) -> RevealResult<SchedulerStats>
    where
        S: StyleSink + ?Sized,
    {
        if script.iter().any(|e| !e.at_ms.is_finite()) {
            return Err(RevealError::validation("script event times must be finite"));
        }
        let mut events = script.to_vec();
        events.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));

        let interval = self.frame_interval_ms;
        let mut next_frame_ms = interval;
        for ev in &events {
            if ev.at_ms >= next_frame_ms {
                // Boundaries crossed without a pending update are no-ops; only the first matters.
                self.frame(sink)?;
                next_frame_ms = ((ev.at_ms / interval).floor() + 1.0) * interval;
            }
            self.dispatch(ev.event);
        }
        self.frame(sink)?;

        let stats = self.scheduler.stats();
        tracing::info!(
            events = stats.events,
            coalesced = stats.coalesced,
            passes = stats.passes,
            "script finished"
        );
        Ok(stats)
    }

    /// Current layout.
    pub fn layout(&self) -> &dyn Layout {
        &self.layout
    }

    /// The scheduler driving this session.
    pub fn scheduler(&self) -> &UpdateScheduler {
        &self.scheduler
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
