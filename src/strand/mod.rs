pub mod strand_mesh_builder;
pub use strand_mesh_builder::*;

use crate::{mesh::TriangleMesh, params::StrandAxis};

/// One generated thread of the weave with its metadata.
///
/// `strand_index` runs over warp strands first, then weft strands.
#[derive(Clone, Debug, PartialEq)]
pub struct Strand {
    mesh: TriangleMesh<f64>,
    strand_index: usize,
    total_strands: usize,
    axis: StrandAxis,
}

impl Strand {
    pub fn new(
        mesh: TriangleMesh<f64>,
        strand_index: usize,
        total_strands: usize,
        axis: StrandAxis,
    ) -> Self {
        Self {
            mesh,
            strand_index,
            total_strands,
            axis,
        }
    }

    pub fn mesh(&self) -> &TriangleMesh<f64> {
        &self.mesh
    }

    pub fn into_mesh(self) -> TriangleMesh<f64> {
        self.mesh
    }

    pub fn strand_index(&self) -> usize {
        self.strand_index
    }

    pub fn total_strands(&self) -> usize {
        self.total_strands
    }

    pub fn axis(&self) -> StrandAxis {
        self.axis
    }

    pub fn is_warp(&self) -> bool {
        self.axis == StrandAxis::Warp
    }
}
