use crate::misc::smoothstep;

/// Easing applied within each half of a [`RadiusProfile`](super::RadiusProfile)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileCurve {
    Linear,
    #[default]
    Ease,
    Sharp,
}

impl ProfileCurve {
    /// Map `t` in [0, 1] onto [0, 1], fixing both end points
    pub fn evaluate(&self, t: f64) -> f64 {
        match self {
            ProfileCurve::Linear => t,
            ProfileCurve::Sharp => t * t,
            ProfileCurve::Ease => smoothstep(t),
        }
    }
}
