pub mod twist_profile;
pub use twist_profile::*;

use std::f64::consts::PI;

use nalgebra::{Point3, Rotation3, Vector3};

use crate::{
    misc::{hash_noise, lerp, smoothstep},
    params::{StrandAxis, WeaveGrid, WeaveParameters},
};

/// Ordered sample points of a strand's centerline, monotonic in t
#[derive(Debug, Clone, PartialEq)]
pub struct Centerline {
    points: Vec<Point3<f64>>,
}

impl Centerline {
    pub fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point3<f64>> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Builds unrelaxed centerlines for the strands of one weave.
///
/// Holds the grid constants shared by every strand of a build;
/// each call to [`CenterlineBuilder::build`] is independent.
#[derive(Debug, Clone)]
pub struct CenterlineBuilder<'a> {
    grid: &'a WeaveGrid,
    params: &'a WeaveParameters,
}

impl<'a> CenterlineBuilder<'a> {
    /// `params` are expected to be sanitized
    pub fn new(grid: &'a WeaveGrid, params: &'a WeaveParameters) -> Self {
        Self { grid, params }
    }

    /// Sample the centerline of the strand with the given global index
    pub fn build(&self, strand_index: usize) -> Centerline {
        let (axis, local_index) = self.grid.locate(strand_index);
        let resolution = self.params.resolution;
        let half = self.grid.swept_half(axis);
        let lateral = self.grid.lateral(axis, local_index);
        let shear = Rotation3::from_axis_angle(&Vector3::z_axis(), self.params.weave_angle.to_radians());

        let points = (0..=resolution)
            .map(|s| {
                let t = s as f64 / resolution as f64;
                let coord = lerp(-half, half, t);
                let z = self.elevation(axis, local_index, coord + half);

                let point = match axis {
                    StrandAxis::Warp => Point3::new(coord, lateral, z),
                    StrandAxis::Weft => Point3::new(lateral, coord, z),
                };

                let twist = Rotation3::from_axis_angle(
                    &Vector3::z_axis(),
                    self.twist_degrees(strand_index, t).to_radians(),
                );
                shear * (twist * point)
            })
            .collect();

        Centerline::new(points)
    }

    /// Twist angle in degrees at `t`, including the deterministic jitter
    pub fn twist_degrees(&self, strand_index: usize, t: f64) -> f64 {
        self.params.twist_amount * self.params.twist_profile.factor(t)
            + hash_noise(strand_index, t) * self.params.twist_noise
    }

    /// Elevation of a strand at `offset`, the distance from the first perpendicular strand
    fn elevation(&self, axis: StrandAxis, local_index: usize, offset: f64) -> f64 {
        let spacing = self.grid.spacing;
        let cross = offset / spacing;
        let phase = local_index as f64 * PI;
        let sign = axis.sign();

        let factor = height_factor(local_index, cross, self.params.height_levels);
        let base = sign * self.grid.weave_height * factor * (cross * PI + phase).cos();

        let nearest = cross.round();
        let distance = (cross - nearest) * spacing;
        let smoothness = self.params.contact_smoothness;
        let push = (-(distance * distance) / (2. * smoothness * smoothness)).exp()
            * self.params.contact_offset;
        let side = if (local_index as i64 + nearest as i64).rem_euclid(2) == 0 {
            sign
        } else {
            -sign
        };

        base + side * push
    }
}

/// Crossing height scale for multi-level weaves.
/// Levels cycle with `(strand + crossing) mod levels`, blended between neighbouring crossings.
pub fn height_factor(local_index: usize, cross: f64, levels: usize) -> f64 {
    if levels <= 1 {
        return 1.;
    }
    let base = cross.floor();
    let frac = cross - base;
    let base = base.max(0.) as usize;
    let level = |b: usize| ((local_index + b) % levels) as f64;
    let levels = levels as f64;
    let a = (level(base) + 1.) / levels;
    let b = (level(base + 1) + 1.) / levels;
    lerp(a, b, smoothstep(frac))
}
