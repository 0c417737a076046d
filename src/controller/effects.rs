//! Built-in section effects: the hero intro, the vehicle scene and informational blocks.

use crate::animation::progress::{SubRange, lerp};
use crate::controller::tracker::{SectionEffect, SectionFrame};
use crate::foundation::core::{ElementId, Transform2D, Vec2};
use crate::style::batch::{StyleBatch, props};

/// Hero intro: content fade-in, illustration progress and two lanes, all from local progress.
#[derive(Clone, Debug)]
pub struct HeroEffect {
    target: ElementId,
    /// Content fade-in window.
    pub content: SubRange,
    /// Illustration window.
    pub animation: SubRange,
    /// Leading lane window.
    pub leading_lane: SubRange,
    /// Trailing lane window.
    pub trailing_lane: SubRange,
}

impl HeroEffect {
    /// Hero effect writing onto `target` with the default windows.
    pub fn new(target: ElementId) -> Self {
        Self {
            target,
            content: SubRange::new(0.08, 0.92),
            animation: SubRange::new(0.0, 1.0),
            leading_lane: SubRange::new(0.08, 0.85),
            trailing_lane: SubRange::new(0.3, 1.0),
        }
    }
}

impl SectionEffect for HeroEffect {
    fn apply(&mut self, frame: SectionFrame, out: &mut StyleBatch) {
        let t = &self.target;
        out.set_number(t, props::HERO_CONTENT, self.content.sample(frame.local));
        out.set_number(t, props::HERO_ANIMATION, self.animation.sample(frame.local));
        out.set_number(t, props::LANE_LEADING, self.leading_lane.sample(frame.local));
        out.set_number(t, props::LANE_TRAILING, self.trailing_lane.sample(frame.local));
    }
}

/// One straight move of the vehicle over a progress window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Leg {
    /// Progress window (and ease) of the move.
    pub window: SubRange,
    /// Offset at the start of the window.
    pub from: Vec2,
    /// Offset at the end of the window.
    pub to: Vec2,
}

impl Leg {
    fn distance(self) -> f64 {
        (self.to - self.from).hypot()
    }
}

/// Vehicle scene: the body translates along disjoint legs, wheels spin with distance travelled
/// and an optional cable is revealed while parked.
#[derive(Clone, Debug)]
pub struct VehicleEffect {
    body: ElementId,
    wheels: Vec<ElementId>,
    legs: Vec<Leg>,
    wheel_max_deg: f64,
    cable: Option<(ElementId, SubRange)>,
}

/// Wheel rotation after the full route.
pub const DEFAULT_WHEEL_MAX_DEG: f64 = 900.0;

impl VehicleEffect {
    /// Vehicle effect for `body` following `legs` (sorted by window start, non-overlapping).
    pub fn new(body: ElementId, legs: Vec<Leg>) -> Self {
        Self {
            body,
            wheels: Vec::new(),
            legs,
            wheel_max_deg: DEFAULT_WHEEL_MAX_DEG,
            cable: None,
        }
    }

    /// Wheels rotated with the travelled distance.
    pub fn with_wheels(mut self, wheels: Vec<ElementId>, max_deg: f64) -> Self {
        self.wheels = wheels;
        self.wheel_max_deg = max_deg;
        self
    }

    /// Cable element revealed over `window`.
    pub fn with_cable(mut self, cable: ElementId, window: SubRange) -> Self {
        self.cable = Some((cable, window));
        self
    }

    /// Body offset and travelled fraction of the whole route at `local` progress.
    pub fn pose(&self, local: f64) -> (Vec2, f64) {
        let Some(first) = self.legs.first() else {
            return (Vec2::ZERO, local);
        };
        let mut pos = first.from;
        let mut travelled = 0.0;
        for leg in &self.legs {
            if local < leg.window.start {
                break;
            }
            let t = leg.window.sample(local);
            pos = Vec2::new(lerp(leg.from.x, leg.to.x, t), lerp(leg.from.y, leg.to.y, t));
            travelled += leg.distance() * t;
        }
        let total: f64 = self.legs.iter().map(|l| l.distance()).sum();
        let fraction = if total > 0.0 { travelled / total } else { local };
        (pos, fraction)
    }
}

impl SectionEffect for VehicleEffect {
    fn apply(&mut self, frame: SectionFrame, out: &mut StyleBatch) {
        let (pos, fraction) = self.pose(frame.local);
        out.set_text(&self.body, props::TRANSFORM, Transform2D::translate(pos).to_css());

        let angle = lerp(0.0, self.wheel_max_deg, fraction);
        for wheel in &self.wheels {
            out.set_text(wheel, props::TRANSFORM, Transform2D::rotate_deg(angle).to_css());
        }

        if let Some((cable, window)) = &self.cable {
            out.set_number(cable, props::CABLE_PROGRESS, window.sample(frame.local));
        }
    }
}

/// Informational block: a single eased reveal.
#[derive(Clone, Debug)]
pub struct InfoBlockEffect {
    target: ElementId,
    reveal: SubRange,
}

impl InfoBlockEffect {
    /// Reveal `target` over `reveal`.
    pub fn new(target: ElementId, reveal: SubRange) -> Self {
        Self { target, reveal }
    }
}

impl SectionEffect for InfoBlockEffect {
    fn apply(&mut self, frame: SectionFrame, out: &mut StyleBatch) {
        out.set_number(&self.target, props::BLOCK_REVEAL, self.reveal.sample(frame.local));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/effects.rs"]
mod tests;
