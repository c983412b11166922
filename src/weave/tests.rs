use approx::assert_relative_eq;

use super::*;
use crate::{
    cross_section::ROUND_SEGMENTS,
    params::{AxisShape, RelaxationOptions, ShapeKind},
};

fn small() -> WeaveParameters {
    WeaveParameters::default()
        .with_thread_counts(4, 4)
        .with_spacing(0.6)
        .with_weave_height(0.28)
        .with_uniform_radius(0.12)
        .with_shape(AxisShape::new(ShapeKind::Tube, 0.24, 0.24))
        .with_resolution(20)
}

#[test]
fn strands_in_warp_then_weft_order() {
    let strands = generate_weave(&small().with_thread_counts(3, 5)).unwrap();
    assert_eq!(strands.len(), 8);
    for (i, s) in strands.iter().enumerate() {
        assert_eq!(s.strand_index(), i);
        assert_eq!(s.total_strands(), 8);
        assert_eq!(s.is_warp(), i < 3);
    }
}

#[test]
fn four_by_four_tube_weave() {
    let strands = generate_weave(&small()).unwrap();
    assert_eq!(strands.len(), 8);
    for s in strands.iter() {
        assert!(s.mesh().triangle_count() >= 20 * ROUND_SEGMENTS);
    }

    let bb = strands
        .iter()
        .filter_map(|s| s.mesh().bounding_box())
        .reduce(|a, b| a.union(&b))
        .unwrap();
    let bound = 3. * 0.6 / 2. + 0.12;
    assert_relative_eq!(bb.max().x, bound, epsilon = 0.02);
    assert_relative_eq!(bb.min().x, -bound, epsilon = 0.02);
    assert_relative_eq!(bb.max().y, bound, epsilon = 0.02);
    assert_relative_eq!(bb.min().y, -bound, epsilon = 0.02);
}

#[test]
fn single_level_alternates_by_parity() {
    // crossings land on samples 0, 10, 20 and 30
    let params = small().with_height_levels(1).with_resolution(30);
    let assembler = WeaveAssembler::new(&params);
    let peak = 0.28 + 0.02;

    for i in 0..4 {
        let warp = assembler.centerline(i);
        let weft = assembler.centerline(4 + i);
        for k in 0..4 {
            let parity = if (i + k) % 2 == 0 { 1. } else { -1. };
            assert_relative_eq!(warp.points()[k * 10].z, parity * peak, epsilon = 1e-9);
            assert_relative_eq!(weft.points()[k * 10].z, -parity * peak, epsilon = 1e-9);
        }
    }
}

#[test]
fn crossings_complement() {
    let assembler = WeaveAssembler::new(&small().with_resolution(30));
    // warp i meets weft k at sample 10k of the warp and sample 10i of the weft
    for i in 0..4 {
        for k in 0..4 {
            let warp = assembler.centerline(i).points()[k * 10];
            let weft = assembler.centerline(4 + k).points()[i * 10];
            assert_relative_eq!(warp.x, weft.x, epsilon = 1e-9);
            assert_relative_eq!(warp.y, weft.y, epsilon = 1e-9);
            assert!(warp.z * weft.z < 0.);
        }
    }
}

#[test]
fn spacing_raised_to_clearance() {
    let params = small()
        .with_spacing(0.01)
        .with_weave_height(0.01)
        .with_radius(0.2, 0.5, 0.2);
    let assembler = WeaveAssembler::new(&params);
    let clearance = 2. * 0.5 + params.collision_padding;
    assert!(assembler.grid().spacing >= clearance);
    assert!(assembler.grid().weave_height >= clearance);

    let strands = generate_weave(&params).unwrap();
    assert_eq!(strands.len(), 8);
}

#[test]
fn deterministic() {
    let params = small()
        .with_twist(45., crate::centerline::TwistProfile::Symmetric)
        .with_twist_noise(10.)
        .with_relaxation(RelaxationOptions::new(0.3, 0.2, 5));
    let a = generate_weave(&params).unwrap();
    let b = generate_weave(&params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn every_triangle_is_sound() {
    let params = small()
        .with_thread_counts(3, 3)
        .with_warp_shape(AxisShape::new(ShapeKind::Pipe, 0.24, 0.24))
        .with_weft_shape(AxisShape::new(ShapeKind::Rect, 0.3, 0.08))
        .with_radius(0.06, 0.14, 0.1)
        .with_height_levels(3)
        .with_weave_angle(15.)
        .with_relaxation(RelaxationOptions::new(0.2, 0.1, 4));
    let assembler = WeaveAssembler::new(&params);
    let strands = assembler.build().unwrap();
    for s in strands.iter() {
        let nominal = assembler.cross_section(s.axis()).nominal_radius();
        let mesh = s.mesh();
        assert!(!mesh.is_empty());
        assert!(mesh.has_consistent_attributes());
        for face in mesh.faces() {
            assert!(mesh.triangle_area(face) > 1e-7 * nominal * nominal);
        }
        for p in mesh.positions() {
            assert!(p.coords.iter().all(|c| c.is_finite()));
        }
    }
}

#[test]
fn shared_cross_sections() {
    let params = small().with_warp_shape(AxisShape::new(ShapeKind::Square, 0.2, 0.2));
    let assembler = WeaveAssembler::new(&params);
    assert_eq!(assembler.cross_section(StrandAxis::Warp).segments(), 4);
    assert_eq!(
        assembler.cross_section(StrandAxis::Weft).segments(),
        ROUND_SEGMENTS
    );
}
