use nalgebra::{Point3, Vector2, Vector3};

use super::*;
use crate::{
    color::{merge_strands, Color, ColorMode, ColorOptions},
    mesh::TriangleMesh,
    params::StrandAxis,
    strand::Strand,
};

fn quad() -> TriangleMesh<f64> {
    TriangleMesh::try_new(
        vec![
            Point3::new(0., 0., 0.),
            Point3::new(1., 0., 0.),
            Point3::new(1., 1., 0.),
            Point3::new(0., 1., 0.),
        ],
        vec![Vector3::z(); 4],
        vec![
            Vector2::new(0., 0.),
            Vector2::new(1., 0.),
            Vector2::new(1., 1.),
            Vector2::new(0., 1.),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    )
    .unwrap()
}

fn read_f32(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[test]
fn stl_layout() {
    let mut bytes: Vec<u8> = vec![];
    write_stl_binary(&quad(), &mut bytes).unwrap();
    assert_eq!(bytes.len(), STL_HEADER_SIZE + 4 + 2 * STL_TRIANGLE_SIZE);
    assert!(bytes.starts_with(b"binary STL"));

    let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
    assert_eq!(count, 2);

    // first record: normal then three vertices
    let record = STL_HEADER_SIZE + 4;
    assert_eq!(read_f32(&bytes, record), 0.);
    assert_eq!(read_f32(&bytes, record + 8), 1.);
    // second vertex of the first triangle is (1, 0, 0)
    assert_eq!(read_f32(&bytes, record + 24), 1.);
    assert_eq!(read_f32(&bytes, record + 28), 0.);
    // attribute byte count
    assert_eq!(&bytes[record + 48..record + 50], &[0, 0]);
}

#[test]
fn stl_of_degenerate_triangle_has_zero_normal() {
    let mesh = TriangleMesh::try_new(
        vec![Point3::origin(); 3],
        vec![Vector3::z(); 3],
        vec![Vector2::zeros(); 3],
        vec![[0, 1, 2]],
    )
    .unwrap();
    let mut bytes: Vec<u8> = vec![];
    write_stl_binary(&mesh, &mut bytes).unwrap();
    let record = STL_HEADER_SIZE + 4;
    assert_eq!(read_f32(&bytes, record + 8), 0.);
}

#[test]
fn obj_without_colors() {
    let mut bytes: Vec<u8> = vec![];
    write_obj(&quad(), None, "weave", &mut bytes).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "o weave");
    assert_eq!(lines[1], "v 0 0 0");
    assert_eq!(lines.iter().filter(|l| l.starts_with("v ")).count(), 4);
    assert_eq!(lines.iter().filter(|l| l.starts_with("vn ")).count(), 4);
    assert_eq!(lines.iter().filter(|l| l.starts_with("vt ")).count(), 4);
    assert!(lines.contains(&"vt 1 0"));
    assert!(lines.contains(&"f 1/1/1 2/2/2 3/3/3"));
    assert!(lines.contains(&"f 1/1/1 3/3/3 4/4/4"));
}

#[test]
fn obj_with_colors() {
    let strands = vec![Strand::new(quad(), 0, 1, StrandAxis::Warp)];
    let options = ColorOptions::default()
        .with_mode(ColorMode::Single)
        .with_colors(Color::new(1., 0.5, 0.), Color::new(0., 0., 0.));
    let merged = merge_strands(&strands, &options).unwrap();

    let mut bytes: Vec<u8> = vec![];
    merged.write_obj("weave", &mut bytes).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.lines().any(|l| l == "v 1 1 0 1 0.5 0"));
}

#[test]
fn obj_rejects_color_count_mismatch() {
    let colors = vec![Color::new(1., 1., 1.)];
    let mut bytes: Vec<u8> = vec![];
    assert!(write_obj(&quad(), Some(&colors), "weave", &mut bytes).is_err());
}

#[test]
fn weave_mesh_to_stl() {
    let strands = vec![
        Strand::new(quad(), 0, 2, StrandAxis::Warp),
        Strand::new(quad(), 1, 2, StrandAxis::Weft),
    ];
    let merged = merge_strands(&strands, &ColorOptions::default()).unwrap();
    let mut bytes: Vec<u8> = vec![];
    merged.write_stl(&mut bytes).unwrap();
    assert_eq!(bytes.len(), STL_HEADER_SIZE + 4 + 4 * STL_TRIANGLE_SIZE);
}
