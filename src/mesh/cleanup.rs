use nalgebra::convert;

use crate::misc::FloatingPoint;

use super::TriangleMesh;

/// Default bound on the absolute value of any vertex coordinate
pub const DEFAULT_MAX_COORDINATE: f64 = 1e4;
/// Area tolerance relative to the squared nominal radius
pub const DEFAULT_AREA_FACTOR: f64 = 1e-7;

/// Thresholds for dropping broken triangles
#[derive(Clone, Debug, PartialEq)]
pub struct CleanupOptions<T: FloatingPoint> {
    /// Triangles with a coordinate beyond this bound are dropped
    pub max_coordinate: T,
    /// Triangles with an area at or below this value are dropped
    pub min_area: T,
}

impl<T: FloatingPoint> Default for CleanupOptions<T> {
    fn default() -> Self {
        Self {
            max_coordinate: convert(DEFAULT_MAX_COORDINATE),
            min_area: T::default_epsilon(),
        }
    }
}

impl<T: FloatingPoint> CleanupOptions<T> {
    /// Area tolerance scaled to a cross-section of the given radius
    pub fn for_radius(nominal_radius: T) -> Self {
        Self {
            min_area: nominal_radius * nominal_radius * convert(DEFAULT_AREA_FACTOR),
            ..Default::default()
        }
    }

    pub fn with_max_coordinate(mut self, max_coordinate: T) -> Self {
        self.max_coordinate = max_coordinate;
        self
    }
}

/// Number of triangles and vertices removed by [`TriangleMesh::clean`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub non_finite: usize,
    pub out_of_bounds: usize,
    pub degenerate: usize,
    pub unreferenced_vertices: usize,
}

impl CleanupReport {
    pub fn removed_triangles(&self) -> usize {
        self.non_finite + self.out_of_bounds + self.degenerate
    }
}

enum Rejection {
    NonFinite,
    OutOfBounds,
    Degenerate,
}

impl<T: FloatingPoint> TriangleMesh<T> {
    /// Drop non-finite, exploded and sliver triangles, remove the vertices
    /// no longer referenced and recompute the normals.
    pub fn clean(&self, options: &CleanupOptions<T>) -> (Self, CleanupReport) {
        let mut report = CleanupReport::default();

        let kept: Vec<_> = self
            .faces
            .iter()
            .filter(|face| match self.reject(face, options) {
                Some(Rejection::NonFinite) => {
                    report.non_finite += 1;
                    false
                }
                Some(Rejection::OutOfBounds) => {
                    report.out_of_bounds += 1;
                    false
                }
                Some(Rejection::Degenerate) => {
                    report.degenerate += 1;
                    false
                }
                None => true,
            })
            .copied()
            .collect();

        let mut remap = vec![None; self.positions.len()];
        let mut cleaned = Self::default();
        let faces: Vec<[usize; 3]> = kept
            .iter()
            .map(|face| {
                face.map(|i| {
                    *remap[i].get_or_insert_with(|| {
                        cleaned.positions.push(self.positions[i]);
                        cleaned.normals.push(self.normals[i]);
                        cleaned.uvs.push(self.uvs[i]);
                        cleaned.positions.len() - 1
                    })
                })
            })
            .collect();
        cleaned.faces = faces;
        report.unreferenced_vertices = self.positions.len() - cleaned.positions.len();

        cleaned.compute_vertex_normals();
        (cleaned, report)
    }

    fn reject(&self, face: &[usize; 3], options: &CleanupOptions<T>) -> Option<Rejection> {
        let corners = face.map(|i| self.positions[i]);
        if corners
            .iter()
            .any(|p| p.iter().any(|c| !c.is_finite_value()))
        {
            return Some(Rejection::NonFinite);
        }
        if corners
            .iter()
            .any(|p| p.iter().any(|c| c.abs() > options.max_coordinate))
        {
            return Some(Rejection::OutOfBounds);
        }
        if self.triangle_area(face) <= options.min_area {
            return Some(Rejection::Degenerate);
        }
        None
    }
}
