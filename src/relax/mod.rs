use itertools::Itertools;
use nalgebra::{center, Point3};

use crate::{centerline::Centerline, params::RelaxationOptions};

/// Low-pass curvature filter over a centerline.
///
/// Each sweep moves every interior point toward the midpoint of its neighbours
/// by `(1 - stiffness) * (1 - bend_resistance)` and springs it back toward its
/// rest position by `stiffness * 0.25`. Both end points stay pinned.
///
/// # Example
/// ```
/// use loomwork::prelude::*;
/// use nalgebra::Point3;
///
/// let line = Centerline::new(vec![
///     Point3::new(0., 0., 0.),
///     Point3::new(1., 0., 1.),
///     Point3::new(2., 0., 0.),
/// ]);
/// let relaxed = relax(&line, &RelaxationOptions::new(0., 0., 1));
/// assert_eq!(relaxed.points()[1], Point3::new(1., 0., 0.));
/// assert_eq!(relaxed.points()[0], line.points()[0]);
/// ```
pub fn relax(centerline: &Centerline, options: &RelaxationOptions) -> Centerline {
    let rest = centerline.points();
    if options.iterations == 0 || rest.len() < 3 {
        return centerline.clone();
    }

    let smoothing = options.smoothing();
    let spring_back = options.spring_back();
    let last = rest.len() - 1;

    let mut current = rest.to_vec();
    for _ in 0..options.iterations {
        let mut next = current.clone();
        current
            .iter()
            .tuple_windows()
            .enumerate()
            .for_each(|(i, (prev, point, following))| {
                let midpoint = center(prev, following);
                let smoothed: Point3<f64> = point + (midpoint - point) * smoothing;
                let rest_point = &rest[i + 1];
                next[i + 1] = smoothed + (rest_point - smoothed) * spring_back;
            });
        next[0] = rest[0];
        next[last] = rest[last];
        current = next;
    }

    Centerline::new(current)
}
