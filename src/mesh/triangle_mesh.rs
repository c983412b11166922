use nalgebra::{IsometryMatrix3, Point3, Vector2, Vector3};
use simba::scalar::SupersetOf;

use crate::{
    bounding_box::BoundingBox,
    misc::{FloatingPoint, Invertible, Transformable},
};

/// Indexed triangle mesh with per-vertex normals and texture coordinates.
///
/// Positions, normals and uvs are parallel arrays keyed by vertex index.
/// The second uv component of swept geometry is the normalized arclength parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleMesh<T: FloatingPoint> {
    pub(crate) positions: Vec<Point3<T>>,
    pub(crate) normals: Vec<Vector3<T>>,
    pub(crate) uvs: Vec<Vector2<T>>,
    pub(crate) faces: Vec<[usize; 3]>,
}

impl<T: FloatingPoint> Default for TriangleMesh<T> {
    fn default() -> Self {
        Self {
            positions: vec![],
            normals: vec![],
            uvs: vec![],
            faces: vec![],
        }
    }
}

impl<T: FloatingPoint> TriangleMesh<T> {
    /// Create a new mesh
    /// # Failures
    /// - if the attribute arrays differ in length
    /// - if a face refers to a vertex out of range
    pub fn try_new(
        positions: Vec<Point3<T>>,
        normals: Vec<Vector3<T>>,
        uvs: Vec<Vector2<T>>,
        faces: Vec<[usize; 3]>,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(
            normals.len() == positions.len(),
            "Invalid number of normals, got {}, expected {}",
            normals.len(),
            positions.len()
        );
        anyhow::ensure!(
            uvs.len() == positions.len(),
            "Invalid number of uvs, got {}, expected {}",
            uvs.len(),
            positions.len()
        );
        let n = positions.len();
        if let Some(face) = faces.iter().find(|f| f.iter().any(|i| *i >= n)) {
            anyhow::bail!("Face {:?} refers to a vertex out of range ({} vertices)", face, n);
        }
        Ok(Self {
            positions,
            normals,
            uvs,
            faces,
        })
    }

    pub fn positions(&self) -> &[Point3<T>] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vector3<T>] {
        &self.normals
    }

    pub fn uvs(&self) -> &[Vector2<T>] {
        &self.uvs
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Check that every vertex carries a position, a normal and a uv
    pub fn has_consistent_attributes(&self) -> bool {
        self.normals.len() == self.positions.len() && self.uvs.len() == self.positions.len()
    }

    pub fn triangles(&self) -> Vec<[Point3<T>; 3]> {
        self.faces
            .iter()
            .map(|[a, b, c]| [self.positions[*a], self.positions[*b], self.positions[*c]])
            .collect()
    }

    /// Unnormalized face normal; its length is twice the triangle area
    pub fn face_cross(&self, face: &[usize; 3]) -> Vector3<T> {
        let [a, b, c] = face;
        let ab = self.positions[*b] - self.positions[*a];
        let ac = self.positions[*c] - self.positions[*a];
        ab.cross(&ac)
    }

    pub fn triangle_area(&self, face: &[usize; 3]) -> T {
        self.face_cross(face).norm() * nalgebra::convert::<f64, T>(0.5)
    }

    pub fn area(&self) -> T {
        self.faces
            .iter()
            .map(|f| self.triangle_area(f))
            .fold(T::zero(), |a, b| a + b)
    }

    pub fn bounding_box(&self) -> Option<BoundingBox<T>> {
        BoundingBox::new_with_points(self.positions.iter())
    }

    /// Recompute normals as the area weighted average of the adjacent face normals.
    /// Vertices without a usable face keep their previous normal.
    pub fn compute_vertex_normals(&mut self) {
        let mut sums = vec![Vector3::<T>::zeros(); self.positions.len()];
        for face in self.faces.iter() {
            let n = self.face_cross(face);
            for i in face {
                sums[*i] += n;
            }
        }
        self.normals
            .iter_mut()
            .zip(sums)
            .for_each(|(normal, sum)| {
                if let Some(unit) = sum.try_normalize(T::default_epsilon()) {
                    *normal = unit;
                }
            });
    }

    /// Cast the mesh to another floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> TriangleMesh<F> {
        TriangleMesh {
            positions: self.positions.iter().map(|p| p.cast()).collect(),
            normals: self.normals.iter().map(|n| n.cast()).collect(),
            uvs: self.uvs.iter().map(|uv| uv.cast()).collect(),
            faces: self.faces.clone(),
        }
    }
}

impl<T: FloatingPoint> std::ops::Add<TriangleMesh<T>> for TriangleMesh<T> {
    type Output = TriangleMesh<T>;

    fn add(self, rhs: TriangleMesh<T>) -> Self::Output {
        let v0 = self.positions.len();
        let faces = [
            self.faces,
            rhs.faces
                .iter()
                .map(|[a, b, c]| [*a + v0, *b + v0, *c + v0])
                .collect(),
        ]
        .concat();
        Self::Output {
            positions: [self.positions, rhs.positions].concat(),
            normals: [self.normals, rhs.normals].concat(),
            uvs: [self.uvs, rhs.uvs].concat(),
            faces,
        }
    }
}

impl<T: FloatingPoint> std::iter::Sum for TriangleMesh<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

impl<T: FloatingPoint> Transformable<&IsometryMatrix3<T>> for TriangleMesh<T> {
    fn transform(&mut self, transform: &IsometryMatrix3<T>) {
        self.positions
            .iter_mut()
            .for_each(|p| *p = transform * *p);
        self.normals
            .iter_mut()
            .for_each(|n| *n = transform.rotation * *n);
    }
}

impl<T: FloatingPoint> Invertible for TriangleMesh<T> {
    /// Reverse the winding of every face and flip the normals
    fn invert(&mut self) {
        self.faces.iter_mut().for_each(|f| f.swap(1, 2));
        self.normals.iter_mut().for_each(|n| *n = -*n);
    }
}
