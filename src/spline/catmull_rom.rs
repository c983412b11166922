use gauss_quad::GaussLegendre;
use itertools::Itertools;
use nalgebra::{Point3, Vector3};

/// Exponent applied to chord lengths, 0.5 for the centripetal parametrization
pub const CENTRIPETAL_ALPHA: f64 = 0.5;

/// Sub-intervals per segment of the arclength lookup table
const LENGTH_SUBDIVISIONS: usize = 8;
const GAUSS_DEGREE: usize = 8;
const MIN_KNOT_INTERVAL: f64 = 1e-4;

/// Cubic Hermite polynomial `c0 + c1 s + c2 s^2 + c3 s^3` on s ∈ [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
struct CubicSegment {
    c0: Vector3<f64>,
    c1: Vector3<f64>,
    c2: Vector3<f64>,
    c3: Vector3<f64>,
}

impl CubicSegment {
    /// Non-uniform Catmull-Rom segment between `x1` and `x2` with knot intervals `dt0..dt2`
    #[allow(clippy::too_many_arguments)]
    fn non_uniform(
        x0: &Vector3<f64>,
        x1: &Vector3<f64>,
        x2: &Vector3<f64>,
        x3: &Vector3<f64>,
        dt0: f64,
        dt1: f64,
        dt2: f64,
    ) -> Self {
        let t1 = ((x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1) * dt1;
        let t2 = ((x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2) * dt1;
        Self {
            c0: *x1,
            c1: t1,
            c2: x1 * -3. + x2 * 3. - t1 * 2. - t2,
            c3: x1 * 2. - x2 * 2. + t1 + t2,
        }
    }

    fn point(&self, s: f64) -> Vector3<f64> {
        self.c0 + (self.c1 + (self.c2 + self.c3 * s) * s) * s
    }

    fn derivative(&self, s: f64) -> Vector3<f64> {
        self.c1 + (self.c2 * 2. + self.c3 * (3. * s)) * s
    }
}

/// Centripetal Catmull-Rom spline through a sequence of points.
///
/// The centripetal parametrization keeps unevenly spaced samples from forming
/// loops or cusps. The end segments use phantom points mirrored through the
/// first and last samples. [`CatmullRom::point_at`] is parametrized by normalized arclength.
///
/// # Example
/// ```
/// use loomwork::prelude::*;
/// use nalgebra::Point3;
/// use approx::assert_relative_eq;
///
/// let points = vec![
///     Point3::new(0., 0., 0.),
///     Point3::new(1., 0., 0.),
///     Point3::new(3., 0., 0.),
/// ];
/// let spline = CatmullRom::try_new(&points).unwrap();
/// assert_relative_eq!(spline.length(), 3., epsilon = 1e-9);
/// assert_relative_eq!(spline.point_at(0.5), Point3::new(1.5, 0., 0.), epsilon = 1e-2);
/// ```
#[derive(Debug, Clone)]
pub struct CatmullRom {
    segments: Vec<CubicSegment>,
    /// (segment parameter, cumulative length) pairs, strictly increasing in the parameter
    table: Vec<(f64, f64)>,
}

impl CatmullRom {
    /// Fit the spline
    /// # Failures
    /// - if fewer than two points are given
    pub fn try_new(points: &[Point3<f64>]) -> anyhow::Result<Self> {
        anyhow::ensure!(
            points.len() >= 2,
            "Too few points for spline, got {}, expected at least 2",
            points.len()
        );

        let n = points.len();
        let first = points[0].coords * 2. - points[1].coords;
        let last = points[n - 1].coords * 2. - points[n - 2].coords;
        let padded: Vec<Vector3<f64>> = std::iter::once(first)
            .chain(points.iter().map(|p| p.coords))
            .chain(std::iter::once(last))
            .collect();

        let segments = padded
            .iter()
            .tuple_windows()
            .map(|(x0, x1, x2, x3)| {
                let mut dt0 = knot_interval(x0, x1);
                let mut dt1 = knot_interval(x1, x2);
                let mut dt2 = knot_interval(x2, x3);
                if dt1 < MIN_KNOT_INTERVAL {
                    dt1 = 1.;
                }
                if dt0 < MIN_KNOT_INTERVAL {
                    dt0 = dt1;
                }
                if dt2 < MIN_KNOT_INTERVAL {
                    dt2 = dt1;
                }
                CubicSegment::non_uniform(x0, x1, x2, x3, dt0, dt1, dt2)
            })
            .collect_vec();

        let table = arclength_table(&segments);
        Ok(Self { segments, table })
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Total arclength
    pub fn length(&self) -> f64 {
        self.table.last().map(|(_, l)| *l).unwrap_or(0.)
    }

    /// Point at the segment parameter `s` ∈ [0, segment_count]
    pub fn point_at_parameter(&self, s: f64) -> Point3<f64> {
        let (segment, local) = self.locate(s);
        Point3::from(segment.point(local))
    }

    /// First derivative at the segment parameter `s`
    pub fn derivative_at_parameter(&self, s: f64) -> Vector3<f64> {
        let (segment, local) = self.locate(s);
        segment.derivative(local)
    }

    /// Point at the normalized arclength `u` ∈ [0, 1]
    pub fn point_at(&self, u: f64) -> Point3<f64> {
        self.point_at_parameter(self.parameter_at(u))
    }

    /// Unit tangent at the normalized arclength `u`, `None` where the curve is stationary
    pub fn tangent_at(&self, u: f64) -> Option<Vector3<f64>> {
        self.derivative_at_parameter(self.parameter_at(u))
            .try_normalize(f64::EPSILON)
    }

    /// Segment parameter reached after walking the fraction `u` of the total length
    pub fn parameter_at(&self, u: f64) -> f64 {
        let target = u.clamp(0., 1.) * self.length();
        let i = self
            .table
            .partition_point(|(_, l)| *l < target)
            .clamp(1, self.table.len() - 1);
        let (s0, l0) = self.table[i - 1];
        let (s1, l1) = self.table[i];
        let span = l1 - l0;
        if span > 0. {
            s0 + (s1 - s0) * ((target - l0) / span).clamp(0., 1.)
        } else {
            s0
        }
    }

    fn locate(&self, s: f64) -> (&CubicSegment, f64) {
        let n = self.segments.len();
        let s = s.clamp(0., n as f64);
        let index = (s.floor() as usize).min(n - 1);
        (&self.segments[index], s - index as f64)
    }
}

fn knot_interval(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    (b - a).norm().powf(CENTRIPETAL_ALPHA)
}

/// Cumulative arclength at regular sub-intervals of every segment,
/// integrated by Gauss-Legendre quadrature
fn arclength_table(segments: &[CubicSegment]) -> Vec<(f64, f64)> {
    let gauss = GaussLegendre::new(GAUSS_DEGREE).expect("GAUSS_DEGREE is at least 2");
    let step = 1. / LENGTH_SUBDIVISIONS as f64;
    let mut table = vec![(0., 0.)];
    let mut total = 0.;
    for (index, segment) in segments.iter().enumerate() {
        for k in 0..LENGTH_SUBDIVISIONS {
            let a = k as f64 * step;
            let b = a + step;
            total += gauss.integrate(a, b, |s| segment.derivative(s).norm());
            table.push((index as f64 + b, total));
        }
    }
    table
}
