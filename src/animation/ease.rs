use crate::animation::progress;

/// Easing functions used to soften normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    Linear,
    /// Cubic smoothstep, `t² · (3 − 2t)`.
    #[default]
    Smoothstep,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Cubic ease-out.
    OutCubic,
}

impl Ease {
    /// Apply this easing function to normalized progress `t`; input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = progress::clamp01(t);
        match self {
            Self::Linear => t,
            Self::Smoothstep => progress::ease_in_out(t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
