use crate::{error::WeaveError, mesh::TriangleMesh, strand::Strand};

use super::Color;

/// Width given to a height range whose bounds coincide
const FLAT_RANGE: f64 = 1e-4;

/// How vertex colors are derived from strand metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorMode {
    /// Every vertex uses the primary color
    #[default]
    Single,
    /// Warp strands use the primary color, weft strands the secondary
    TwoColor,
    /// Gradient over the height of the whole weave
    HeightGradient,
    /// Gradient over the strand index
    StrandGradient,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorOptions {
    pub mode: ColorMode,
    pub primary: Color,
    pub secondary: Color,
    pub gradient_start: Color,
    pub gradient_end: Color,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            mode: ColorMode::Single,
            primary: Color::from_rgb_u32(0xc8a27a),
            secondary: Color::from_rgb_u32(0x5b7c99),
            gradient_start: Color::from_rgb_u32(0x1f3b57),
            gradient_end: Color::from_rgb_u32(0xf2c14e),
        }
    }
}

impl ColorOptions {
    pub fn with_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_colors(mut self, primary: Color, secondary: Color) -> Self {
        self.primary = primary;
        self.secondary = secondary;
        self
    }

    pub fn with_gradient(mut self, start: Color, end: Color) -> Self {
        self.gradient_start = start;
        self.gradient_end = end;
        self
    }
}

/// Single renderable mesh of a whole weave with one color per vertex
#[derive(Debug, Clone, PartialEq)]
pub struct WeaveMesh {
    mesh: TriangleMesh<f64>,
    colors: Vec<Color>,
}

impl WeaveMesh {
    pub fn mesh(&self) -> &TriangleMesh<f64> {
        &self.mesh
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn into_parts(self) -> (TriangleMesh<f64>, Vec<Color>) {
        (self.mesh, self.colors)
    }
}

/// Range of z over every vertex of every strand.
/// A flat range is widened slightly and an empty input yields [0, 1].
pub fn height_range(strands: &[Strand]) -> (f64, f64) {
    let (min, max) = strands
        .iter()
        .flat_map(|s| s.mesh().positions().iter().map(|p| p.z))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), z| {
            (min.min(z), max.max(z))
        });

    if !min.is_finite() || !max.is_finite() {
        (0., 1.)
    } else if max == min {
        (min, min + FLAT_RANGE)
    } else {
        (min, max)
    }
}

/// Concatenate the strand meshes in order and paint them.
/// # Failures
/// - [`WeaveError::AttributeMismatch`] if a strand mesh lacks a normal or uv for some vertex
///
/// # Example
/// ```
/// use loomwork::prelude::*;
///
/// let params = WeaveParameters::default()
///     .with_thread_counts(2, 2)
///     .with_resolution(8);
/// let strands = generate_weave(&params).unwrap();
/// let options = ColorOptions::default().with_mode(ColorMode::TwoColor);
/// let merged = merge_strands(&strands, &options).unwrap();
/// assert_eq!(merged.colors().len(), merged.mesh().vertex_count());
/// ```
pub fn merge_strands(strands: &[Strand], options: &ColorOptions) -> anyhow::Result<WeaveMesh> {
    if let Some(broken) = strands
        .iter()
        .find(|s| !s.mesh().has_consistent_attributes())
    {
        let mesh = broken.mesh();
        return Err(WeaveError::AttributeMismatch {
            strand_index: broken.strand_index(),
            positions: mesh.positions().len(),
            normals: mesh.normals().len(),
            uvs: mesh.uvs().len(),
        }
        .into());
    }

    let (min_z, max_z) = height_range(strands);
    let last_index = strands.len().saturating_sub(1).max(1) as f64;

    let colors = strands
        .iter()
        .flat_map(|strand| {
            let strand_t = (strand.strand_index() as f64 / last_index).clamp(0., 1.) as f32;
            strand.mesh().positions().iter().map(move |p| match options.mode {
                ColorMode::Single => options.primary,
                ColorMode::TwoColor => {
                    if strand.is_warp() {
                        options.primary
                    } else {
                        options.secondary
                    }
                }
                ColorMode::HeightGradient => {
                    let t = ((p.z - min_z) / (max_z - min_z)).clamp(0., 1.) as f32;
                    options.gradient_start.lerp(&options.gradient_end, t)
                }
                ColorMode::StrandGradient => options
                    .gradient_start
                    .lerp(&options.gradient_end, strand_t),
            })
        })
        .collect::<Vec<_>>();

    let mesh = strands
        .iter()
        .map(|s| s.mesh().clone())
        .sum::<TriangleMesh<f64>>();

    log::debug!(
        "merged {} strands into {} vertices, {} triangles",
        strands.len(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(WeaveMesh { mesh, colors })
}
