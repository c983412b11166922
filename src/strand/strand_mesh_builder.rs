use nalgebra::{Point3, Vector2, Vector3};

use crate::{
    centerline::Centerline,
    cross_section::{Contour, CrossSection},
    mesh::{CleanupOptions, TriangleMesh},
    misc::{Invertible, Transformable},
    radius_profile::RadiusProfile,
    spline::{compute_sweep_frames, CatmullRom, SweepFrame},
};

/// Fewest longitudinal steps of a sweep
pub const MIN_SWEEP_STEPS: usize = 24;

/// Sweeps a cross-section along a centerline and shapes it with a radius profile.
///
/// The side surface is swept at the nominal radius of the cross-section, with every
/// ring scaled about the centerline by `radius_at(t) / nominal_radius`. For round
/// contours this pushes each vertex along its normal by `radius_at(t) - nominal_radius`.
/// Both ends are closed with caps scaled by the same ratio, so they meet the side rings.
#[derive(Debug, Clone, Copy)]
pub struct StrandMeshBuilder<'a> {
    cross_section: &'a CrossSection,
    profile: &'a RadiusProfile,
    resolution: usize,
}

impl<'a> StrandMeshBuilder<'a> {
    pub fn new(cross_section: &'a CrossSection, profile: &'a RadiusProfile, resolution: usize) -> Self {
        Self {
            cross_section,
            profile,
            resolution,
        }
    }

    /// Number of longitudinal steps, `max(24, resolution * 3)`
    pub fn steps(&self) -> usize {
        (self.resolution * 3).max(MIN_SWEEP_STEPS)
    }

    /// Build the cleaned mesh of one strand
    /// # Failures
    /// - if the centerline has fewer than two points
    pub fn build(&self, centerline: &Centerline) -> anyhow::Result<TriangleMesh<f64>> {
        let spline = CatmullRom::try_new(centerline.points())?;
        let frames = compute_sweep_frames(&spline, self.steps() + 1, &Vector3::z());

        let (first, last) = match (frames.first(), frames.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => anyhow::bail!("Sweep produced no frames"),
        };

        let sides = self
            .cross_section
            .side_loops()
            .iter()
            .map(|contour| self.sweep(contour, &frames))
            .sum::<TriangleMesh<f64>>();
        let start = self.cap(first, 0.).inverse();
        let end = self.cap(last, 1.);
        let merged = sides + start + end;

        let nominal = self.cross_section.nominal_radius();
        let (cleaned, report) = merged.clean(&CleanupOptions::for_radius(nominal));
        if report.removed_triangles() > 0 {
            log::trace!(
                "strand cleanup removed {} triangles ({} non-finite, {} out of bounds, {} degenerate)",
                report.removed_triangles(),
                report.non_finite,
                report.out_of_bounds,
                report.degenerate
            );
        }

        Ok(cleaned)
    }

    /// Side surface of one contour loop, one ring per frame
    fn sweep(&self, contour: &Contour, frames: &[SweepFrame]) -> TriangleMesh<f64> {
        let m = contour.len();
        let rings = frames.len();
        let last = (rings - 1).max(1) as f64;
        let nominal = self.cross_section.nominal_radius();

        let mut positions = Vec::with_capacity(rings * m);
        let mut normals = Vec::with_capacity(rings * m);
        let mut uvs = Vec::with_capacity(rings * m);

        for (i, frame) in frames.iter().enumerate() {
            let t = i as f64 / last;
            let scale = self.profile.radius_at(t) / nominal;
            for p in contour.points() {
                let position = p.position * scale;
                positions.push(frame.place(position.x, position.y));
                normals.push(frame.direct(p.normal.x, p.normal.y));
                uvs.push(Vector2::new(p.u, t));
            }
        }

        let mut faces = Vec::with_capacity((rings - 1) * m * 2);
        for i in 0..rings.saturating_sub(1) {
            for j in 0..m {
                let j1 = (j + 1) % m;
                let a = i * m + j;
                let b = i * m + j1;
                let c = (i + 1) * m + j;
                let d = (i + 1) * m + j1;
                faces.push([a, b, c]);
                faces.push([b, d, c]);
            }
        }

        TriangleMesh {
            positions,
            normals,
            uvs,
            faces,
        }
    }

    /// Cap at the end of the strand facing along the frame's tangent
    fn cap(&self, frame: &SweepFrame, t: f64) -> TriangleMesh<f64> {
        let scale = self.profile.radius_at(t) / self.cross_section.nominal_radius();
        let mut cap = self.cross_section.cap(t);
        cap.positions
            .iter_mut()
            .for_each(|p| *p = Point3::from(p.coords * scale));
        cap.transformed(&frame.matrix())
    }
}
