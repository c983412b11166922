use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use super::*;

fn arc(count: usize) -> Vec<Point3<f64>> {
    (0..count)
        .map(|i| {
            let a = std::f64::consts::FRAC_PI_2 * i as f64 / (count - 1) as f64;
            Point3::new(a.cos(), a.sin(), 0.)
        })
        .collect()
}

#[test]
fn rejects_single_point() {
    assert!(CatmullRom::try_new(&[Point3::origin()]).is_err());
    assert!(CatmullRom::try_new(&[]).is_err());
}

#[test]
fn interpolates_samples() {
    let points = arc(7);
    let spline = CatmullRom::try_new(&points).unwrap();
    assert_eq!(spline.segment_count(), points.len() - 1);
    for (i, p) in points.iter().enumerate() {
        assert_relative_eq!(spline.point_at_parameter(i as f64), *p, epsilon = 1e-12);
    }
}

#[test]
fn endpoints_by_arclength() {
    let points = arc(9);
    let spline = CatmullRom::try_new(&points).unwrap();
    assert_relative_eq!(spline.point_at(0.), points[0], epsilon = 1e-12);
    assert_relative_eq!(spline.point_at(1.), points[8], epsilon = 1e-12);
    // out of range parameters clamp
    assert_relative_eq!(spline.point_at(-1.), points[0], epsilon = 1e-12);
    assert_relative_eq!(spline.point_at(2.), points[8], epsilon = 1e-12);
}

#[test]
fn arclength_of_quarter_circle() {
    let spline = CatmullRom::try_new(&arc(17)).unwrap();
    assert_relative_eq!(
        spline.length(),
        std::f64::consts::FRAC_PI_2,
        epsilon = 1e-3
    );
}

#[test]
fn uniform_in_arclength() {
    // samples bunched at the start of a straight line
    let points = vec![
        Point3::new(0., 0., 0.),
        Point3::new(0.1, 0., 0.),
        Point3::new(0.2, 0., 0.),
        Point3::new(2., 0., 0.),
        Point3::new(4., 0., 0.),
    ];
    let spline = CatmullRom::try_new(&points).unwrap();
    assert_relative_eq!(spline.length(), 4., epsilon = 1e-6);
    for i in 0..=8 {
        let u = i as f64 / 8.;
        assert_relative_eq!(spline.point_at(u).x, 4. * u, epsilon = 2e-2);
    }
}

#[test]
fn coincident_samples_stay_finite() {
    let points = vec![
        Point3::new(0., 0., 0.),
        Point3::new(0., 0., 0.),
        Point3::new(1., 0., 0.),
        Point3::new(1., 0., 0.),
    ];
    let spline = CatmullRom::try_new(&points).unwrap();
    for i in 0..=10 {
        let p = spline.point_at(i as f64 / 10.);
        assert!(p.coords.iter().all(|c| c.is_finite()));
    }
}

#[test]
fn tangent_follows_direction() {
    let points = vec![
        Point3::new(0., 0., 0.),
        Point3::new(1., 0., 0.),
        Point3::new(2., 0., 0.),
    ];
    let spline = CatmullRom::try_new(&points).unwrap();
    let t = spline.tangent_at(0.5).unwrap();
    assert_relative_eq!(t, Vector3::x(), epsilon = 1e-9);
}

#[test]
fn frames_are_orthonormal() {
    let spline = CatmullRom::try_new(&arc(12)).unwrap();
    let frames = compute_sweep_frames(&spline, 24, &Vector3::z());
    assert_eq!(frames.len(), 24);
    for f in frames.iter() {
        assert_relative_eq!(f.tangent().norm(), 1., epsilon = 1e-9);
        assert_relative_eq!(f.normal().norm(), 1., epsilon = 1e-9);
        assert_relative_eq!(f.binormal().norm(), 1., epsilon = 1e-9);
        assert_relative_eq!(f.tangent().dot(f.normal()), 0., epsilon = 1e-9);
        assert_relative_eq!(f.normal().cross(f.binormal()), *f.tangent(), epsilon = 1e-9);
    }
}

#[test]
fn planar_path_keeps_binormal_up() {
    // a curve in the xy plane transports a horizontal normal without roll
    let spline = CatmullRom::try_new(&arc(12)).unwrap();
    let frames = compute_sweep_frames(&spline, 16, &Vector3::z());
    for f in frames.iter() {
        assert_relative_eq!(*f.binormal(), Vector3::z(), epsilon = 1e-6);
    }
}

#[test]
fn initial_normal_is_horizontal() {
    let points = vec![
        Point3::new(0., 0., 0.),
        Point3::new(1., 0., 0.3),
        Point3::new(2., 0., 0.),
    ];
    let spline = CatmullRom::try_new(&points).unwrap();
    let frames = compute_sweep_frames(&spline, 8, &Vector3::z());
    assert_relative_eq!(frames[0].normal().z, 0., epsilon = 1e-9);
    assert!(frames[0].binormal().z > 0.);
}

#[test]
fn vertical_path_falls_back() {
    let points = vec![Point3::new(0., 0., 0.), Point3::new(0., 0., 1.)];
    let spline = CatmullRom::try_new(&points).unwrap();
    let frames = compute_sweep_frames(&spline, 4, &Vector3::z());
    for f in frames.iter() {
        assert_relative_eq!(f.normal().norm(), 1., epsilon = 1e-9);
        assert_relative_eq!(f.tangent().dot(f.normal()), 0., epsilon = 1e-9);
    }
}

#[test]
fn matrix_maps_local_axes() {
    let frame = SweepFrame::new(
        Point3::new(1., 2., 3.),
        Vector3::y(),
        Vector3::z(),
        Vector3::x(),
    );
    let m = frame.matrix();
    assert_relative_eq!(m * Point3::origin(), Point3::new(1., 2., 3.));
    assert_relative_eq!(m * Vector3::x(), Vector3::z());
    assert_relative_eq!(m * Vector3::y(), Vector3::x());
    assert_relative_eq!(m * Vector3::z(), Vector3::y());
    assert_relative_eq!(frame.place(1., 0.), Point3::new(1., 2., 4.));
    assert_relative_eq!(frame.direct(0., 2.), Vector3::new(2., 0., 0.));
}
