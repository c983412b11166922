pub mod profile_curve;
pub use profile_curve::*;

use crate::params::{WeaveParameters, MIN_RADIUS};

/// Three keyframe thickness curve along a strand.
///
/// The value is `start` at t = 0, `mid` at t = 0.5 and `end` at t = 1,
/// eased within each half by the selected [`ProfileCurve`].
///
/// # Example
/// ```
/// use loomwork::prelude::*;
/// use approx::assert_relative_eq;
///
/// let profile = RadiusProfile::new(0.1, 0.2, 0.1, ProfileCurve::Linear);
/// assert_relative_eq!(profile.radius_at(0.25), 0.15);
/// assert_relative_eq!(profile.radius_at(0.5), 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusProfile {
    start: f64,
    mid: f64,
    end: f64,
    curve: ProfileCurve,
}

impl RadiusProfile {
    /// Keyframes are floored at a small positive radius
    pub fn new(start: f64, mid: f64, end: f64, curve: ProfileCurve) -> Self {
        Self {
            start: start.max(MIN_RADIUS),
            mid: mid.max(MIN_RADIUS),
            end: end.max(MIN_RADIUS),
            curve,
        }
    }

    pub fn from_parameters(params: &WeaveParameters) -> Self {
        Self::new(
            params.radius_start,
            params.radius_mid,
            params.radius_end,
            params.profile_curve,
        )
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn mid(&self) -> f64 {
        self.mid
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn curve(&self) -> ProfileCurve {
        self.curve
    }

    /// Largest radius reached anywhere on the profile
    pub fn max_radius(&self) -> f64 {
        self.start.max(self.mid).max(self.end)
    }

    /// Radius at the normalized arclength parameter `t`
    pub fn radius_at(&self, t: f64) -> f64 {
        let t = t.clamp(0., 1.);
        if t <= 0.5 {
            let k = self.curve.evaluate(t * 2.);
            self.start + (self.mid - self.start) * k
        } else {
            let k = self.curve.evaluate((t - 0.5) * 2.);
            self.mid + (self.end - self.mid) * k
        }
    }
}
