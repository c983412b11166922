use approx::assert_relative_eq;
use nalgebra::{Point3, Vector2, Vector3};

use super::*;
use crate::{error::WeaveError, mesh::TriangleMesh, params::StrandAxis, strand::Strand};

fn triangle(z: [f64; 3]) -> TriangleMesh<f64> {
    TriangleMesh::try_new(
        vec![
            Point3::new(0., 0., z[0]),
            Point3::new(1., 0., z[1]),
            Point3::new(0., 1., z[2]),
        ],
        vec![Vector3::z(); 3],
        vec![Vector2::zeros(); 3],
        vec![[0, 1, 2]],
    )
    .unwrap()
}

fn strands() -> Vec<Strand> {
    vec![
        Strand::new(triangle([0., 0., 0.]), 0, 3, StrandAxis::Warp),
        Strand::new(triangle([1., 1., 1.]), 1, 3, StrandAxis::Weft),
        Strand::new(triangle([0., 0.5, 1.]), 2, 3, StrandAxis::Weft),
    ]
}

fn options(mode: ColorMode) -> ColorOptions {
    ColorOptions::default()
        .with_mode(mode)
        .with_colors(Color::new(1., 0., 0.), Color::new(0., 0., 1.))
        .with_gradient(Color::new(0., 0., 0.), Color::new(1., 1., 1.))
}

#[test]
fn parse_hex() {
    let c = Color::from_hex("#ff8000").unwrap();
    assert_relative_eq!(c.r, 1.);
    assert_relative_eq!(c.g, 128. / 255.);
    assert_relative_eq!(c.b, 0.);
    assert_eq!("00ff00".parse::<Color>().unwrap(), Color::new(0., 1., 0.));
    assert!(Color::from_hex("#fff").is_err());
    assert!(Color::from_hex("#gg0000").is_err());
}

#[test]
fn lerp_colors() {
    let a = Color::new(0., 0.5, 1.);
    let b = Color::new(1., 0.5, 0.);
    assert_eq!(a.lerp(&b, 0.5).to_array(), [0.5, 0.5, 0.5]);
}

#[test]
fn merge_concatenates_in_order() {
    let merged = merge_strands(&strands(), &options(ColorMode::Single)).unwrap();
    let mesh = merged.mesh();
    assert_eq!(mesh.vertex_count(), 9);
    let faces: Vec<[usize; 3]> = vec![[0, 1, 2], [3, 4, 5], [6, 7, 8]];
    assert_eq!(mesh.faces().to_vec(), faces);
    assert_eq!(merged.colors().len(), 9);
    assert!(merged.colors().iter().all(|c| *c == Color::new(1., 0., 0.)));
}

#[test]
fn two_color_by_axis() {
    let merged = merge_strands(&strands(), &options(ColorMode::TwoColor)).unwrap();
    let colors = merged.colors();
    assert!(colors[..3].iter().all(|c| *c == Color::new(1., 0., 0.)));
    assert!(colors[3..].iter().all(|c| *c == Color::new(0., 0., 1.)));
}

#[test]
fn height_gradient_spans_global_range() {
    let merged = merge_strands(&strands(), &options(ColorMode::HeightGradient)).unwrap();
    let colors = merged.colors();
    assert_relative_eq!(colors[0].r, 0.);
    assert_relative_eq!(colors[3].r, 1.);
    assert_relative_eq!(colors[7].r, 0.5);
}

#[test]
fn strand_gradient_by_index() {
    let merged = merge_strands(&strands(), &options(ColorMode::StrandGradient)).unwrap();
    let colors = merged.colors();
    assert_relative_eq!(colors[0].g, 0.);
    assert_relative_eq!(colors[4].g, 0.5);
    assert_relative_eq!(colors[8].g, 1.);
}

#[test]
fn flat_and_empty_height_ranges() {
    let flat = vec![Strand::new(triangle([2., 2., 2.]), 0, 1, StrandAxis::Warp)];
    let (min, max) = height_range(&flat);
    assert_relative_eq!(min, 2.);
    assert_relative_eq!(max, 2. + 1e-4);
    assert_eq!(height_range(&[]), (0., 1.));

    let merged = merge_strands(&flat, &options(ColorMode::StrandGradient)).unwrap();
    assert!(merged.colors().iter().all(|c| *c == Color::new(0., 0., 0.)));
}

#[test]
fn empty_input_merges_to_empty_mesh() {
    let merged = merge_strands(&[], &ColorOptions::default()).unwrap();
    assert!(merged.mesh().is_empty());
    assert!(merged.colors().is_empty());
}

#[test]
fn attribute_mismatch_is_reported() {
    let mut broken = triangle([0., 0., 0.]);
    broken.normals.pop();
    let strands = vec![
        Strand::new(triangle([0., 0., 0.]), 0, 2, StrandAxis::Warp),
        Strand::new(broken, 1, 2, StrandAxis::Weft),
    ];
    let err = merge_strands(&strands, &ColorOptions::default()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<WeaveError>(),
        Some(&WeaveError::AttributeMismatch {
            strand_index: 1,
            positions: 3,
            normals: 2,
            uvs: 3,
        })
    );
}
