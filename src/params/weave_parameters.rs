use crate::{centerline::TwistProfile, radius_profile::ProfileCurve};

use super::{AxisShape, RelaxationOptions};

/// Smallest accepted number of threads per axis
pub const MIN_THREAD_COUNT: usize = 2;
/// Smallest accepted grid spacing
pub const MIN_SPACING: f64 = 1e-3;
/// Floor for radius keyframes and cross-section dimensions
pub const MIN_RADIUS: f64 = 1e-4;
/// Smallest accepted number of centerline samples
pub const MIN_RESOLUTION: usize = 4;
/// Floor for the Gaussian contact falloff width
pub const MIN_CONTACT_SMOOTHNESS: f64 = 1e-4;

/// Full parameter set of a weave build.
/// A build is a pure function of this struct.
///
/// # Example
/// ```
/// use loomwork::prelude::*;
///
/// let params = WeaveParameters::default()
///     .with_thread_counts(4, 6)
///     .with_uniform_radius(0.1)
///     .with_twist(30., TwistProfile::Symmetric);
/// assert_eq!(params.thread_count_u, 4);
/// assert_eq!(params.radius_mid, 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaveParameters {
    /// Number of warp strands (rows)
    pub thread_count_u: usize,
    /// Number of weft strands (columns)
    pub thread_count_v: usize,
    /// Distance between neighbouring parallel strands
    pub spacing: f64,
    /// Amplitude of the crossing wave
    pub weave_height: f64,
    pub warp_shape: AxisShape,
    pub weft_shape: AxisShape,
    /// Radius at t = 0
    pub radius_start: f64,
    /// Radius at t = 0.5
    pub radius_mid: f64,
    /// Radius at t = 1
    pub radius_end: f64,
    pub profile_curve: ProfileCurve,
    /// Number of distinct crossing heights; 1 means plain over/under
    pub height_levels: usize,
    /// Peak extra elevation applied near crossings
    pub contact_offset: f64,
    /// Width of the Gaussian contact falloff
    pub contact_smoothness: f64,
    /// Extra clearance between strand surfaces
    pub collision_padding: f64,
    pub relaxation: RelaxationOptions,
    /// Twist in degrees at full profile factor
    pub twist_amount: f64,
    pub twist_profile: TwistProfile,
    /// Magnitude of the per-strand twist jitter in degrees
    pub twist_noise: f64,
    /// In-plane shear of the whole weave in degrees
    pub weave_angle: f64,
    /// Number of centerline segments per strand
    pub resolution: usize,
}

impl Default for WeaveParameters {
    fn default() -> Self {
        Self {
            thread_count_u: 8,
            thread_count_v: 8,
            spacing: 0.6,
            weave_height: 0.28,
            warp_shape: AxisShape::default(),
            weft_shape: AxisShape::default(),
            radius_start: 0.12,
            radius_mid: 0.12,
            radius_end: 0.12,
            profile_curve: ProfileCurve::Ease,
            height_levels: 1,
            contact_offset: 0.02,
            contact_smoothness: 0.15,
            collision_padding: 0.02,
            relaxation: RelaxationOptions::default(),
            twist_amount: 0.,
            twist_profile: TwistProfile::Linear,
            twist_noise: 0.,
            weave_angle: 0.,
            resolution: 48,
        }
    }
}

impl WeaveParameters {
    pub fn with_thread_counts(mut self, u: usize, v: usize) -> Self {
        self.thread_count_u = u;
        self.thread_count_v = v;
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_weave_height(mut self, weave_height: f64) -> Self {
        self.weave_height = weave_height;
        self
    }

    /// Use the same cross-section for warp and weft
    pub fn with_shape(mut self, shape: AxisShape) -> Self {
        self.warp_shape = shape;
        self.weft_shape = shape;
        self
    }

    pub fn with_warp_shape(mut self, shape: AxisShape) -> Self {
        self.warp_shape = shape;
        self
    }

    pub fn with_weft_shape(mut self, shape: AxisShape) -> Self {
        self.weft_shape = shape;
        self
    }

    pub fn with_radius(mut self, start: f64, mid: f64, end: f64) -> Self {
        self.radius_start = start;
        self.radius_mid = mid;
        self.radius_end = end;
        self
    }

    pub fn with_uniform_radius(self, radius: f64) -> Self {
        self.with_radius(radius, radius, radius)
    }

    pub fn with_profile_curve(mut self, curve: ProfileCurve) -> Self {
        self.profile_curve = curve;
        self
    }

    pub fn with_height_levels(mut self, levels: usize) -> Self {
        self.height_levels = levels;
        self
    }

    pub fn with_contact(mut self, offset: f64, smoothness: f64) -> Self {
        self.contact_offset = offset;
        self.contact_smoothness = smoothness;
        self
    }

    pub fn with_collision_padding(mut self, padding: f64) -> Self {
        self.collision_padding = padding;
        self
    }

    pub fn with_relaxation(mut self, relaxation: RelaxationOptions) -> Self {
        self.relaxation = relaxation;
        self
    }

    pub fn with_twist(mut self, amount: f64, profile: TwistProfile) -> Self {
        self.twist_amount = amount;
        self.twist_profile = profile;
        self
    }

    pub fn with_twist_noise(mut self, noise: f64) -> Self {
        self.twist_noise = noise;
        self
    }

    pub fn with_weave_angle(mut self, degrees: f64) -> Self {
        self.weave_angle = degrees;
        self
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Total number of strands, warp and weft
    pub fn total_strands(&self) -> usize {
        self.thread_count_u.max(MIN_THREAD_COUNT) + self.thread_count_v.max(MIN_THREAD_COUNT)
    }

    /// Return a copy with every out-of-range value clamped into its valid domain.
    /// Invalid parameters are corrected, never rejected.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let relaxation = RelaxationOptions {
            stiffness: finite_or(self.relaxation.stiffness, defaults.relaxation.stiffness)
                .clamp(0., 1.),
            bend_resistance: finite_or(
                self.relaxation.bend_resistance,
                defaults.relaxation.bend_resistance,
            )
            .clamp(0., 1.),
            iterations: self.relaxation.iterations,
        };

        Self {
            thread_count_u: self.thread_count_u.max(MIN_THREAD_COUNT),
            thread_count_v: self.thread_count_v.max(MIN_THREAD_COUNT),
            spacing: finite_or(self.spacing, defaults.spacing).max(MIN_SPACING),
            weave_height: finite_or(self.weave_height, defaults.weave_height).max(0.),
            warp_shape: sanitize_shape(&self.warp_shape),
            weft_shape: sanitize_shape(&self.weft_shape),
            radius_start: finite_or(self.radius_start, defaults.radius_start).max(MIN_RADIUS),
            radius_mid: finite_or(self.radius_mid, defaults.radius_mid).max(MIN_RADIUS),
            radius_end: finite_or(self.radius_end, defaults.radius_end).max(MIN_RADIUS),
            profile_curve: self.profile_curve,
            height_levels: self.height_levels.max(1),
            contact_offset: finite_or(self.contact_offset, defaults.contact_offset),
            contact_smoothness: finite_or(self.contact_smoothness, defaults.contact_smoothness)
                .max(MIN_CONTACT_SMOOTHNESS),
            collision_padding: finite_or(self.collision_padding, defaults.collision_padding)
                .max(0.),
            relaxation,
            twist_amount: finite_or(self.twist_amount, 0.),
            twist_profile: self.twist_profile.sanitized(),
            twist_noise: finite_or(self.twist_noise, 0.),
            weave_angle: finite_or(self.weave_angle, 0.),
            resolution: self.resolution.max(MIN_RESOLUTION),
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn sanitize_shape(shape: &AxisShape) -> AxisShape {
    let defaults = AxisShape::default();
    AxisShape {
        kind: shape.kind,
        width: finite_or(shape.width, defaults.width).max(MIN_RADIUS),
        height: finite_or(shape.height, defaults.height).max(MIN_RADIUS),
        wall_thickness: finite_or(shape.wall_thickness, defaults.wall_thickness).max(0.),
    }
}
