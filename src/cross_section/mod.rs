pub mod contour;
pub use contour::*;

use nalgebra::{Point3, Vector2, Vector3};

use crate::{
    mesh::TriangleMesh,
    params::{AxisShape, ShapeKind, MIN_RADIUS},
};

/// Number of segments of round contours
pub const ROUND_SEGMENTS: usize = 32;
/// Largest inner radius of a pipe relative to its outer radius
pub const MAX_HOLE_RATIO: f64 = 0.95;

/// 2D profile swept along a strand.
///
/// The outer contour is counter-clockwise. A pipe also carries a hole contour,
/// stored in the same angular order as the outer one with normals facing the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSection {
    kind: ShapeKind,
    outer: Contour,
    hole: Option<Contour>,
    nominal_radius: f64,
}

impl CrossSection {
    pub fn new(shape: &AxisShape) -> Self {
        let width = shape.width.max(MIN_RADIUS);
        let height = shape.height.max(MIN_RADIUS);
        let extent = width.max(height);
        let nominal_radius = extent * 0.5;

        let (outer, hole) = match shape.kind {
            ShapeKind::Tube => (Contour::circle(nominal_radius, ROUND_SEGMENTS), None),
            ShapeKind::Pipe => {
                let inner = (nominal_radius - shape.wall_thickness.max(0.))
                    .min(nominal_radius * MAX_HOLE_RATIO)
                    .max(MIN_RADIUS);
                (
                    Contour::circle(nominal_radius, ROUND_SEGMENTS),
                    Some(Contour::circle(inner, ROUND_SEGMENTS).with_flipped_normals()),
                )
            }
            ShapeKind::Square => (Contour::rectangle(extent, extent), None),
            ShapeKind::Rect => (Contour::rectangle(width, height), None),
        };

        let outer = if outer.is_counter_clockwise() {
            outer
        } else {
            outer.reversed()
        };

        Self {
            kind: shape.kind,
            outer,
            hole,
            nominal_radius,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn outer(&self) -> &Contour {
        &self.outer
    }

    pub fn hole(&self) -> Option<&Contour> {
        self.hole.as_ref()
    }

    pub fn is_hollow(&self) -> bool {
        self.hole.is_some()
    }

    /// Half of the larger profile dimension, the reference scale of the radius profile
    pub fn nominal_radius(&self) -> f64 {
        self.nominal_radius
    }

    /// Number of segments of the outer contour
    pub fn segments(&self) -> usize {
        self.outer.len()
    }

    /// Loops to sweep along the strand, wound so that side faces point out of the solid.
    /// The hole is walked clockwise.
    pub fn side_loops(&self) -> Vec<Contour> {
        let mut loops = vec![self.outer.clone()];
        if let Some(hole) = &self.hole {
            loops.push(hole.reversed());
        }
        loops
    }

    /// Flat cap in contour space (z = 0) facing +z, with every uv's second component set to `t`.
    /// Solid profiles are fanned from the centre, pipes are stitched as an annulus.
    pub fn cap(&self, t: f64) -> TriangleMesh<f64> {
        let outer = self.outer.points();
        let n = outer.len();
        let vertex = |p: &ContourPoint| {
            (
                Point3::new(p.position.x, p.position.y, 0.),
                Vector3::z(),
                Vector2::new(p.u, t),
            )
        };

        let mut positions = vec![];
        let mut normals = vec![];
        let mut uvs = vec![];
        let mut faces = vec![];

        outer.iter().map(vertex).for_each(|(p, nrm, uv)| {
            positions.push(p);
            normals.push(nrm);
            uvs.push(uv);
        });

        match &self.hole {
            Some(hole) => {
                hole.points().iter().map(vertex).for_each(|(p, nrm, uv)| {
                    positions.push(p);
                    normals.push(nrm);
                    uvs.push(uv);
                });
                let m = hole.len();
                for k in 0..n {
                    let k1 = (k + 1) % n;
                    let i0 = n + k * m / n;
                    let i1 = n + k1 * m / n;
                    faces.push([k, k1, i1]);
                    if i0 != i1 {
                        faces.push([k, i1, i0]);
                    }
                }
            }
            None => {
                positions.push(Point3::origin());
                normals.push(Vector3::z());
                uvs.push(Vector2::new(0.5, t));
                let center = n;
                for k in 0..n {
                    faces.push([center, k, (k + 1) % n]);
                }
            }
        }

        TriangleMesh {
            positions,
            normals,
            uvs,
            faces,
        }
    }
}
