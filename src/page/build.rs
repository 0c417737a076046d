use crate::animation::progress::SubRange;
use crate::controller::effects::{HeroEffect, InfoBlockEffect, Leg, VehicleEffect};
use crate::controller::illustration::IllustrationController;
use crate::controller::segment::Segment;
use crate::controller::tracker::{SectionTracker, VisibilityToggle};
use crate::eval::layout::StaticLayout;
use crate::eval::scroll::{ElementBox, ScrollMetrics};
use crate::foundation::core::{BezPath, Vec2};
use crate::foundation::error::{RevealError, RevealResult};
use crate::page::model::{PageDef, PathDef, SectionDef, SectionKindDef};
use crate::registry::ControllerRegistry;
use crate::scheduler::frame::EngineOptions;
use kurbo::ParamCurveArclen;

/// Arc-length accuracy used when measuring SVG path data.
pub const ARCLEN_ACCURACY: f64 = 1e-3;

/// A page description turned into live objects.
#[derive(Debug)]
pub struct BuiltPage {
    /// Geometry of every section, scrolled to the initial offset.
    pub layout: StaticLayout,
    /// All controllers, in section order.
    pub registry: ControllerRegistry,
    /// Engine options from the description.
    pub options: EngineOptions,
}

/// Total length of SVG path data `d`, the equivalent of `getTotalLength()`.
pub fn measure_path(d: &str) -> RevealResult<f64> {
    let path = BezPath::from_svg(d).map_err(|e| RevealError::path(format!("'{d}': {e}")))?;
    Ok(path
        .segments()
        .map(|seg| seg.arclen(ARCLEN_ACCURACY))
        .sum())
}

/// Validate `def` and build its layout and controller registry.
#[tracing::instrument(skip(def), fields(sections = def.sections.len()))]
pub fn build_page(def: &PageDef) -> RevealResult<BuiltPage> {
    def.validate()?;

    let mut layout = StaticLayout::new(ScrollMetrics {
        scroll_top: def.scroll_top,
        viewport_height: def.viewport.height,
        document_height: def.document.height,
    });
    let mut registry = ControllerRegistry::new();

    for section in &def.sections {
        layout.insert(section.id.clone(), ElementBox::new(section.top, section.height));
        build_section(section, &mut registry)?;
    }
    registry.set_static_reveal(def.static_reveal.clone());

    Ok(BuiltPage {
        layout,
        registry,
        options: def.options.clone(),
    })
}

fn build_section(section: &SectionDef, registry: &mut ControllerRegistry) -> RevealResult<()> {
    let id = section.id.clone();
    let tracker = match &section.kind {
        SectionKindDef::Illustration { paths } => {
            let segments = paths
                .iter()
                .map(build_segment)
                .collect::<RevealResult<Vec<_>>>()?;
            tracing::debug!(section = %id, segments = segments.len(), "illustration");
            let controller = IllustrationController::new(id, segments);
            registry.register(match visibility_toggle(section) {
                Some(toggle) => controller.with_visibility(toggle),
                None => controller,
            });
            return Ok(());
        }
        SectionKindDef::Hero(hero) => {
            let mut effect = HeroEffect::new(id.clone());
            effect.content = hero.content;
            effect.animation = hero.animation;
            effect.leading_lane = hero.leading_lane;
            effect.trailing_lane = hero.trailing_lane;
            SectionTracker::new(id).with_effect(effect)
        }
        SectionKindDef::Vehicle(v) => {
            let legs = v
                .legs
                .iter()
                .map(|leg| Leg {
                    window: SubRange {
                        start: leg.start,
                        end: leg.end,
                        ease: leg.ease,
                    },
                    from: Vec2::new(leg.from.x, leg.from.y),
                    to: Vec2::new(leg.to.x, leg.to.y),
                })
                .collect();
            let mut effect = VehicleEffect::new(v.body.clone(), legs)
                .with_wheels(v.wheels.clone(), v.wheel_max_deg);
            if let Some(cable) = &v.cable {
                effect = effect.with_cable(cable.id.clone(), cable.window);
            }
            SectionTracker::new(id).with_effect(effect)
        }
        SectionKindDef::Info(info) => {
            let effect = InfoBlockEffect::new(id.clone(), info.reveal);
            SectionTracker::new(id).with_effect(effect)
        }
    };

    registry.register(match visibility_toggle(section) {
        Some(toggle) => tracker.with_visibility(toggle),
        None => tracker,
    });
    Ok(())
}

fn visibility_toggle(section: &SectionDef) -> Option<VisibilityToggle> {
    section
        .visibility_class
        .as_ref()
        .map(|vis| VisibilityToggle::new(vis.class.clone(), vis.threshold))
}

fn build_segment(path: &PathDef) -> RevealResult<Segment> {
    let length = match (path.length, path.d.as_deref()) {
        (Some(length), _) => length,
        (None, Some(d)) => measure_path(d)?,
        (None, None) => {
            return Err(RevealError::validation(format!(
                "path '{}' needs `d` or `length`",
                path.id
            )));
        }
    };
    Ok(Segment::from_attributes(
        path.id.clone(),
        length,
        path.start.as_deref(),
        path.end.as_deref(),
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/page/build.rs"]
mod tests;
