//! Serde model of a page description: geometry, sections, their effects and engine options.

use crate::animation::ease::Ease;
use crate::animation::progress::SubRange;
use crate::foundation::core::ElementId;
use crate::foundation::error::{RevealError, RevealResult};
use crate::scheduler::frame::EngineOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Viewport geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewportDef {
    /// Viewport height in CSS pixels.
    pub height: f64,
}

/// Document geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DocumentDef {
    /// Total document height in CSS pixels.
    pub height: f64,
}

/// Page description consumed by [`crate::build_page`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDef {
    /// Viewport geometry at load.
    pub viewport: ViewportDef,
    /// Document geometry.
    pub document: DocumentDef,
    /// Scroll offset at load.
    #[serde(default)]
    pub scroll_top: f64,
    /// Engine options.
    #[serde(default)]
    pub options: EngineOptions,
    /// Tracked sections in document order.
    #[serde(default)]
    pub sections: Vec<SectionDef>,
    /// Elements forced visible under reduced motion.
    #[serde(default)]
    pub static_reveal: Vec<ElementId>,
}

/// One tracked container element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDef {
    /// Element id.
    pub id: ElementId,
    /// Top offset in document coordinates.
    pub top: f64,
    /// Height.
    pub height: f64,
    /// What the section animates.
    #[serde(flatten)]
    pub kind: SectionKindDef,
    /// Optional class toggled by visible ratio.
    #[serde(default)]
    pub visibility_class: Option<VisibilityDef>,
}

/// Section flavors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionKindDef {
    /// Line-drawing illustration.
    Illustration {
        /// Drawable paths.
        paths: Vec<PathDef>,
    },
    /// Hero intro.
    Hero(HeroDef),
    /// Vehicle scene.
    Vehicle(VehicleDef),
    /// Informational block.
    Info(InfoDef),
}

/// A drawable path and its raw threshold attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathDef {
    /// Element id.
    pub id: ElementId,
    /// SVG path data; measured when `length` is absent.
    #[serde(default)]
    pub d: Option<String>,
    /// Pre-measured length.
    #[serde(default)]
    pub length: Option<f64>,
    /// Start threshold attribute.
    #[serde(default, deserialize_with = "attr_value")]
    pub start: Option<String>,
    /// End threshold attribute.
    #[serde(default, deserialize_with = "attr_value")]
    pub end: Option<String>,
}

/// Attributes arrive as text in markup; JSON authors may also write plain numbers.
fn attr_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Num(f64),
    }

    Ok(Option::<Repr>::deserialize(deserializer)?.map(|r| match r {
        Repr::Text(s) => s,
        Repr::Num(v) => v.to_string(),
    }))
}

/// Hero windows over local progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroDef {
    /// Content fade-in.
    #[serde(default = "default_hero_content")]
    pub content: SubRange,
    /// Illustration progress.
    #[serde(default = "default_hero_animation")]
    pub animation: SubRange,
    /// Leading lane.
    #[serde(default = "default_leading_lane")]
    pub leading_lane: SubRange,
    /// Trailing lane.
    #[serde(default = "default_trailing_lane")]
    pub trailing_lane: SubRange,
}

fn default_hero_content() -> SubRange {
    SubRange::new(0.08, 0.92)
}

fn default_hero_animation() -> SubRange {
    SubRange::new(0.0, 1.0)
}

fn default_leading_lane() -> SubRange {
    SubRange::new(0.08, 0.85)
}

fn default_trailing_lane() -> SubRange {
    SubRange::new(0.3, 1.0)
}

/// Offset accepted as `[x, y]` or `{ "x": .., "y": .. }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vec2Def {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl<'de> Deserialize<'de> for Vec2Def {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 2]),
            Obj { x: f64, y: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y]) => Ok(Self { x, y }),
            Repr::Obj { x, y } => Ok(Self { x, y }),
        }
    }
}

/// One vehicle move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LegDef {
    /// Window start.
    pub start: f64,
    /// Window end.
    pub end: f64,
    /// Ease inside the window.
    #[serde(default)]
    pub ease: Ease,
    /// Offset at window start, `[x, y]` or `{x, y}`.
    pub from: Vec2Def,
    /// Offset at window end.
    pub to: Vec2Def,
}

/// Cable reveal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CableDef {
    /// Element id.
    pub id: ElementId,
    /// Reveal window.
    #[serde(default = "default_cable_window")]
    pub window: SubRange,
}

fn default_cable_window() -> SubRange {
    SubRange::new(0.45, 0.55)
}

/// Vehicle scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleDef {
    /// Body element translated along the legs.
    pub body: ElementId,
    /// Wheel elements.
    #[serde(default)]
    pub wheels: Vec<ElementId>,
    /// Disjoint moves, in progress order.
    #[serde(default)]
    pub legs: Vec<LegDef>,
    /// Wheel rotation after the whole route.
    #[serde(default = "default_wheel_max_deg")]
    pub wheel_max_deg: f64,
    /// Optional charging cable.
    #[serde(default)]
    pub cable: Option<CableDef>,
}

fn default_wheel_max_deg() -> f64 {
    crate::controller::effects::DEFAULT_WHEEL_MAX_DEG
}

/// Informational block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoDef {
    /// Reveal window.
    #[serde(default = "default_info_reveal")]
    pub reveal: SubRange,
}

fn default_info_reveal() -> SubRange {
    SubRange::new(0.0, 0.6)
}

/// Visibility class toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibilityDef {
    /// Class name.
    #[serde(default = "default_visibility_class")]
    pub class: String,
    /// Visible ratio at which the class is added.
    #[serde(default = "default_visibility_threshold")]
    pub threshold: f64,
}

fn default_visibility_class() -> String {
    "animate".to_owned()
}

fn default_visibility_threshold() -> f64 {
    0.35
}

impl PageDef {
    /// Parse a page description from JSON text.
    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a page description from a reader.
    pub fn from_reader(r: impl std::io::Read) -> RevealResult<Self> {
        Ok(serde_json::from_reader(r)?)
    }

    /// Structural checks that the engine itself never has to repeat.
    pub fn validate(&self) -> RevealResult<()> {
        if !(self.viewport.height.is_finite() && self.viewport.height > 0.0) {
            return Err(RevealError::validation("viewport height must be > 0"));
        }
        if !(self.document.height.is_finite() && self.document.height >= 0.0) {
            return Err(RevealError::validation("document height must be >= 0"));
        }
        if !self.scroll_top.is_finite() {
            return Err(RevealError::validation("scroll_top must be finite"));
        }
        if !(self.options.frame_interval_ms.is_finite() && self.options.frame_interval_ms > 0.0) {
            return Err(RevealError::validation("frame_interval_ms must be > 0"));
        }

        let mut ids = BTreeSet::new();
        let mut claim = |id: &ElementId| -> RevealResult<()> {
            if !ids.insert(id.clone()) {
                return Err(RevealError::validation(format!("duplicate element id '{id}'")));
            }
            Ok(())
        };

        for section in &self.sections {
            claim(&section.id)?;
            if !(section.top.is_finite() && section.height.is_finite() && section.height >= 0.0) {
                return Err(RevealError::validation(format!(
                    "section '{}' needs a finite top and a height >= 0",
                    section.id
                )));
            }
            if let Some(vis) = &section.visibility_class
                && !(0.0..=1.0).contains(&vis.threshold)
            {
                return Err(RevealError::validation(format!(
                    "section '{}' visibility threshold must be in [0, 1]",
                    section.id
                )));
            }
            match &section.kind {
                SectionKindDef::Illustration { paths } => {
                    for path in paths {
                        claim(&path.id)?;
                        if path.d.is_none() && path.length.is_none() {
                            return Err(RevealError::validation(format!(
                                "path '{}' needs `d` or `length`",
                                path.id
                            )));
                        }
                        if path.length.is_some_and(|l| !(l.is_finite() && l >= 0.0)) {
                            return Err(RevealError::validation(format!(
                                "path '{}' length must be >= 0",
                                path.id
                            )));
                        }
                    }
                }
                SectionKindDef::Vehicle(v) => {
                    claim(&v.body)?;
                    for w in &v.wheels {
                        claim(w)?;
                    }
                    if let Some(cable) = &v.cable {
                        claim(&cable.id)?;
                    }
                    if !v.wheel_max_deg.is_finite() {
                        return Err(RevealError::validation("wheel_max_deg must be finite"));
                    }
                    let mut prev_end = f64::NEG_INFINITY;
                    for leg in &v.legs {
                        let finite = leg.start.is_finite() && leg.end.is_finite();
                        if !finite || leg.end < leg.start {
                            return Err(RevealError::validation(format!(
                                "vehicle '{}' leg needs finite bounds with end >= start",
                                v.body
                            )));
                        }
                        if leg.start < prev_end {
                            return Err(RevealError::validation(format!(
                                "vehicle '{}' legs must be sorted and must not overlap",
                                v.body
                            )));
                        }
                        prev_end = leg.end;
                    }
                }
                SectionKindDef::Hero(_) | SectionKindDef::Info(_) => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/model.rs"]
mod tests;
