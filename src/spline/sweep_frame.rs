use nalgebra::{IsometryMatrix3, Matrix3, Point3, Rotation3, Translation3, Unit, Vector3};

use super::CatmullRom;

/// A parallel-transported frame at a point on a sweep path.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepFrame {
    position: Point3<f64>,
    tangent: Vector3<f64>,
    normal: Vector3<f64>,
    binormal: Vector3<f64>,
}

impl SweepFrame {
    pub fn new(
        position: Point3<f64>,
        tangent: Vector3<f64>,
        normal: Vector3<f64>,
        binormal: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            tangent,
            normal,
            binormal,
        }
    }

    pub fn position(&self) -> &Point3<f64> {
        &self.position
    }

    pub fn tangent(&self) -> &Vector3<f64> {
        &self.tangent
    }

    pub fn normal(&self) -> &Vector3<f64> {
        &self.normal
    }

    pub fn binormal(&self) -> &Vector3<f64> {
        &self.binormal
    }

    /// Place a 2D profile coordinate `(x, y)` on the plane of this frame
    pub fn place(&self, x: f64, y: f64) -> Point3<f64> {
        self.position + self.normal * x + self.binormal * y
    }

    /// Direction of a 2D profile vector in world space
    pub fn direct(&self, x: f64, y: f64) -> Vector3<f64> {
        self.normal * x + self.binormal * y
    }

    /// Isometry mapping the local x, y, z axes onto normal, binormal and tangent
    pub fn matrix(&self) -> IsometryMatrix3<f64> {
        let basis = Matrix3::from_columns(&[self.normal, self.binormal, self.tangent]);
        let rot = Rotation3::from_matrix_unchecked(basis);
        Translation3::from(self.position.coords) * rot
    }
}

/// Compute `count` frames uniformly spaced in arclength along the spline.
///
/// The first normal lies horizontal, perpendicular to `up` and the start tangent,
/// so flat profiles lie in the weave plane. Subsequent normals are carried along by
/// the minimal rotation between consecutive tangents.
pub fn compute_sweep_frames(
    spline: &CatmullRom,
    count: usize,
    up: &Vector3<f64>,
) -> Vec<SweepFrame> {
    let count = count.max(2);
    let last = (count - 1) as f64;

    let positions: Vec<_> = (0..count)
        .map(|i| spline.point_at(i as f64 / last))
        .collect();

    let mut tangents: Vec<Vector3<f64>> = Vec::with_capacity(count);
    for i in 0..count {
        let tangent = spline
            .tangent_at(i as f64 / last)
            .or_else(|| tangents.last().copied())
            .or_else(|| chord(&positions))
            .unwrap_or_else(Vector3::x);
        tangents.push(tangent);
    }

    let mut normals = Vec::with_capacity(count);
    normals.push(initial_normal(&tangents[0], up));

    for i in 1..count {
        let prev_normal = normals[i - 1];
        let v = tangents[i - 1].cross(&tangents[i]);
        let normal = match Unit::try_new(v, f64::EPSILON) {
            Some(axis) => {
                let theta = tangents[i - 1]
                    .dot(&tangents[i])
                    .clamp(-1., 1.)
                    .acos();
                Rotation3::from_axis_angle(&axis, theta) * prev_normal
            }
            None => prev_normal,
        };
        // re-orthogonalize against drift
        let normal = (normal - tangents[i] * tangents[i].dot(&normal))
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(|| initial_normal(&tangents[i], up));
        normals.push(normal);
    }

    positions
        .into_iter()
        .zip(tangents)
        .zip(normals)
        .map(|((position, tangent), normal)| {
            let binormal = tangent.cross(&normal).normalize();
            SweepFrame::new(position, tangent, normal, binormal)
        })
        .collect()
}

fn chord(positions: &[Point3<f64>]) -> Option<Vector3<f64>> {
    let first = positions.first()?;
    let last = positions.last()?;
    (last - first).try_normalize(f64::EPSILON)
}

/// A unit vector perpendicular to the tangent, preferring the horizontal direction `up × tangent`
fn initial_normal(tangent: &Vector3<f64>, up: &Vector3<f64>) -> Vector3<f64> {
    if let Some(n) = up.cross(tangent).try_normalize(1e-9) {
        return n;
    }

    let tx = tangent.x.abs();
    let ty = tangent.y.abs();
    let tz = tangent.z.abs();

    let mut min = f64::MAX;
    let mut axis = Vector3::z();
    if tx <= min {
        min = tx;
        axis = Vector3::x();
    }
    if ty <= min {
        min = ty;
        axis = Vector3::y();
    }
    if tz <= min {
        axis = Vector3::z();
    }

    let v = tangent.cross(&axis).normalize();
    tangent.cross(&v).normalize()
}
