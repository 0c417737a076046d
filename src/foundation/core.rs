pub use kurbo::{BezPath, Vec2};

/// Identifier of a page element (the `id` attribute in markup).
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    /// The document root element (`<html>`), target of page-wide properties.
    pub const ROOT: &'static str = ":root";

    /// Build an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The document root.
    pub fn root() -> Self {
        Self(Self::ROOT.to_owned())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// 2D transform applied to an element: a translation followed by a rotation about its origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    /// Translation in CSS pixels.
    pub translate: Vec2,
    /// Clockwise rotation in degrees.
    pub rotation_deg: f64,
}

impl Transform2D {
    /// Pure translation.
    pub fn translate(v: Vec2) -> Self {
        Self {
            translate: v,
            rotation_deg: 0.0,
        }
    }

    /// Pure rotation.
    pub fn rotate_deg(deg: f64) -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_deg: deg,
        }
    }

    /// CSS `transform` value.
    pub fn to_css(self) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg)",
            css_number(self.translate.x),
            css_number(self.translate.y),
            css_number(self.rotation_deg)
        )
    }
}

/// Format a number for a style value: three decimals at most, no trailing zeros, no `-0`.
pub fn css_number(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
