use crate::foundation::core::ElementId;
use std::borrow::Cow;

/// Style property names written by the engine.
pub mod props {
    /// SVG `stroke-dasharray`.
    pub const STROKE_DASHARRAY: &str = "stroke-dasharray";
    /// SVG `stroke-dashoffset`.
    pub const STROKE_DASHOFFSET: &str = "stroke-dashoffset";
    /// `opacity`.
    pub const OPACITY: &str = "opacity";
    /// `transform`.
    pub const TRANSFORM: &str = "transform";
    /// `animation` (only ever set to `none`).
    pub const ANIMATION: &str = "animation";
    /// Measured length of a drawable path.
    pub const PATH_LENGTH: &str = "--path-length";
    /// Section-local progress.
    pub const SECTION_PROGRESS: &str = "--section-progress";
    /// Page-global progress, written on the document root.
    pub const GLOBAL_PROGRESS: &str = "--global-progress";
    /// Hero content fade-in.
    pub const HERO_CONTENT: &str = "--hero-content";
    /// Hero illustration animation.
    pub const HERO_ANIMATION: &str = "--hero-animation";
    /// Hero leading lane.
    pub const LANE_LEADING: &str = "--lane-leading";
    /// Hero trailing lane.
    pub const LANE_TRAILING: &str = "--lane-trailing";
    /// Charging cable reveal in the vehicle scene.
    pub const CABLE_PROGRESS: &str = "--cable-progress";
    /// Informational block reveal.
    pub const BLOCK_REVEAL: &str = "--block-reveal";
}

/// Value of a single style property.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Unitless number (custom properties, opacity, dash offset).
    Number(f64),
    /// Preformatted text (dash patterns, transforms, keywords).
    Text(String),
}

impl StyleValue {
    /// The numeric payload, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// The text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

/// One pending mutation of an element's style.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StyleWrite {
    /// Set a property (standard or custom) on `target`.
    Property {
        /// Element written to.
        target: ElementId,
        /// Property name.
        name: Cow<'static, str>,
        /// New value.
        value: StyleValue,
    },
    /// Add or remove a class on `target`.
    Class {
        /// Element written to.
        target: ElementId,
        /// Class name.
        class: String,
        /// `true` adds, `false` removes.
        enabled: bool,
    },
}

impl StyleWrite {
    /// Element this write targets.
    pub fn target(&self) -> &ElementId {
        match self {
            Self::Property { target, .. } | Self::Class { target, .. } => target,
        }
    }
}

/// All writes computed during one pass, applied together by a sink.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleBatch {
    writes: Vec<StyleWrite>,
}

impl StyleBatch {
    /// Empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a numeric property.
    pub fn set_number(&mut self, target: &ElementId, name: &'static str, value: f64) {
        self.writes.push(StyleWrite::Property {
            target: target.clone(),
            name: Cow::Borrowed(name),
            value: StyleValue::Number(value),
        });
    }

    /// Queue a textual property.
    pub fn set_text(&mut self, target: &ElementId, name: &'static str, value: impl Into<String>) {
        self.writes.push(StyleWrite::Property {
            target: target.clone(),
            name: Cow::Borrowed(name),
            value: StyleValue::Text(value.into()),
        });
    }

    /// Queue a class toggle.
    pub fn set_class(&mut self, target: &ElementId, class: &str, enabled: bool) {
        self.writes.push(StyleWrite::Class {
            target: target.clone(),
            class: class.to_owned(),
            enabled,
        });
    }

    /// Queued writes, in the order they were computed.
    pub fn writes(&self) -> &[StyleWrite] {
        &self.writes
    }

    /// Number of queued writes.
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// Whether nothing was queued.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Drop all queued writes, keeping the allocation.
    pub fn clear(&mut self) {
        self.writes.clear();
    }

    /// Last value queued for `name` on `target`.
    pub fn last_value(&self, target: &ElementId, name: &str) -> Option<&StyleValue> {
        self.writes.iter().rev().find_map(|w| match w {
            StyleWrite::Property {
                target: t,
                name: n,
                value,
            } if t == target && n == name => Some(value),
            _ => None,
        })
    }

    /// Last numeric value queued for `name` on `target`.
    pub fn last_number(&self, target: &ElementId, name: &str) -> Option<f64> {
        self.last_value(target, name).and_then(StyleValue::as_number)
    }
}

/// Why a pass ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    /// Controller construction (initial dotted state, path lengths).
    Setup,
    /// The immediate first computation at startup.
    Initial,
    /// A coalesced animation-frame pass.
    Frame,
    /// The one-shot completion pass under reduced motion.
    Complete,
}

/// Metadata attached to every batch handed to a sink.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PassInfo {
    /// Monotonic pass counter, starting at 0.
    pub index: u64,
    /// Why the pass ran.
    pub kind: PassKind,
    /// Page-global progress seen by the pass.
    pub global_progress: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/style/batch.rs"]
mod tests;
