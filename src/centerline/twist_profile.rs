use crate::misc::{lerp, smoothstep};

/// Distribution of the twist angle along a strand
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TwistProfile {
    #[default]
    Linear,
    Ease,
    /// Zero at both ends, full twist at the middle
    Symmetric,
    /// Keyframes at t = 0, 1/3, 2/3 and 1, eased between neighbours
    Custom([f64; 4]),
}

impl TwistProfile {
    /// Fraction of the twist amount applied at `t`
    pub fn factor(&self, t: f64) -> f64 {
        let t = t.clamp(0., 1.);
        match self {
            TwistProfile::Linear => t,
            TwistProfile::Ease => smoothstep(t),
            TwistProfile::Symmetric => smoothstep(1. - (0.5 - t).abs() * 2.),
            TwistProfile::Custom(keys) => {
                let scaled = t * 3.;
                let segment = (scaled.floor() as usize).min(2);
                let local = scaled - segment as f64;
                lerp(keys[segment], keys[segment + 1], smoothstep(local))
            }
        }
    }

    /// Replace non-finite custom keyframes with zero
    pub fn sanitized(&self) -> Self {
        match self {
            TwistProfile::Custom(keys) => {
                TwistProfile::Custom(keys.map(|k| if k.is_finite() { k } else { 0. }))
            }
            other => *other,
        }
    }
}
