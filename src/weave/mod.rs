use crate::{
    centerline::{Centerline, CenterlineBuilder},
    cross_section::CrossSection,
    params::{StrandAxis, WeaveGrid, WeaveParameters},
    radius_profile::RadiusProfile,
    relax::relax,
    strand::{Strand, StrandMeshBuilder},
};

/// Generate every strand of the weave, warp strands first, then weft strands.
///
/// Out of range parameters are clamped and spacing/height are raised to the
/// collision clearance, so any parameter set yields a renderable weave.
///
/// # Example
/// ```
/// use loomwork::prelude::*;
///
/// let params = WeaveParameters::default()
///     .with_thread_counts(3, 2)
///     .with_resolution(12);
/// let strands = generate_weave(&params).unwrap();
/// assert_eq!(strands.len(), 5);
/// assert!(strands[0].is_warp());
/// assert!(!strands[4].is_warp());
/// ```
pub fn generate_weave(params: &WeaveParameters) -> anyhow::Result<Vec<Strand>> {
    WeaveAssembler::new(params).build()
}

/// Shared state of one weave build.
///
/// Cross-sections are built once per axis and reused by every strand of that axis.
#[derive(Debug, Clone)]
pub struct WeaveAssembler {
    params: WeaveParameters,
    grid: WeaveGrid,
    warp_section: CrossSection,
    weft_section: CrossSection,
    profile: RadiusProfile,
}

impl WeaveAssembler {
    pub fn new(params: &WeaveParameters) -> Self {
        let params = params.sanitized();
        let grid = WeaveGrid::new(&params);
        Self {
            warp_section: CrossSection::new(&params.warp_shape),
            weft_section: CrossSection::new(&params.weft_shape),
            profile: RadiusProfile::from_parameters(&params),
            grid,
            params,
        }
    }

    /// Parameters after clamping
    pub fn params(&self) -> &WeaveParameters {
        &self.params
    }

    pub fn grid(&self) -> &WeaveGrid {
        &self.grid
    }

    pub fn profile(&self) -> &RadiusProfile {
        &self.profile
    }

    pub fn cross_section(&self, axis: StrandAxis) -> &CrossSection {
        match axis {
            StrandAxis::Warp => &self.warp_section,
            StrandAxis::Weft => &self.weft_section,
        }
    }

    /// Relaxed centerline of a strand
    pub fn centerline(&self, strand_index: usize) -> Centerline {
        let raw = CenterlineBuilder::new(&self.grid, &self.params).build(strand_index);
        relax(&raw, &self.params.relaxation)
    }

    pub fn build_strand(&self, strand_index: usize) -> anyhow::Result<Strand> {
        let (axis, _) = self.grid.locate(strand_index);
        let centerline = self.centerline(strand_index);
        let mesh = StrandMeshBuilder::new(
            self.cross_section(axis),
            &self.profile,
            self.params.resolution,
        )
        .build(&centerline)?;
        Ok(Strand::new(
            mesh,
            strand_index,
            self.grid.total_strands(),
            axis,
        ))
    }

    /// Build all strands in index order.
    /// A failure of any strand fails the whole build.
    pub fn build(&self) -> anyhow::Result<Vec<Strand>> {
        let total = self.grid.total_strands();
        log::debug!(
            "building weave {}x{} ({} strands, spacing {}, height {})",
            self.grid.thread_count_u,
            self.grid.thread_count_v,
            total,
            self.grid.spacing,
            self.grid.weave_height
        );

        #[cfg(feature = "parallel")]
        let strands = {
            use rayon::iter::{IntoParallelIterator, ParallelIterator};
            (0..total)
                .into_par_iter()
                .map(|i| self.build_strand(i))
                .collect::<anyhow::Result<Vec<_>>>()?
        };

        #[cfg(not(feature = "parallel"))]
        let strands = (0..total)
            .map(|i| self.build_strand(i))
            .collect::<anyhow::Result<Vec<_>>>()?;

        log::debug!(
            "built {} strands with {} triangles",
            strands.len(),
            strands
                .iter()
                .map(|s| s.mesh().triangle_count())
                .sum::<usize>()
        );

        Ok(strands)
    }
}

#[cfg(test)]
mod tests;
