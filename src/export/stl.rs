use std::io::Write;

use anyhow::Context;
use nalgebra::Vector3;

use crate::{color::WeaveMesh, mesh::TriangleMesh};

/// Size of the binary STL header in bytes
pub const STL_HEADER_SIZE: usize = 80;
/// Size of one binary STL triangle record in bytes
pub const STL_TRIANGLE_SIZE: usize = 50;

const STL_HEADER_TEXT: &[u8] = b"binary STL exported by loomwork";

/// Write the mesh as binary STL.
///
/// Facet normals are computed from the winding; vertices are stored as `f32`.
/// # Failures
/// - if the mesh has more triangles than fit in a `u32`
/// - if the writer fails
pub fn write_stl_binary<W: Write>(mesh: &TriangleMesh<f64>, mut writer: W) -> anyhow::Result<()> {
    let count = u32::try_from(mesh.triangle_count())
        .context("Too many triangles for binary STL")?;

    let mut header = [b' '; STL_HEADER_SIZE];
    header[..STL_HEADER_TEXT.len()].copy_from_slice(STL_HEADER_TEXT);
    writer.write_all(&header).context("Failed to write STL header")?;
    writer.write_all(&count.to_le_bytes())?;

    let single = mesh.cast::<f32>();
    for face in mesh.faces() {
        let normal = mesh
            .face_cross(face)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::zeros)
            .cast::<f32>();
        let mut record = Vec::with_capacity(STL_TRIANGLE_SIZE);
        record.extend(normal.iter().flat_map(|c| c.to_le_bytes()));
        for index in face {
            let p = &single.positions()[*index];
            record.extend(p.coords.iter().flat_map(|c| c.to_le_bytes()));
        }
        record.extend(0u16.to_le_bytes());
        writer
            .write_all(&record)
            .context("Failed to write STL triangle")?;
    }

    writer.flush()?;
    Ok(())
}

impl WeaveMesh {
    /// Write the merged weave as binary STL, colors are dropped
    pub fn write_stl<W: Write>(&self, writer: W) -> anyhow::Result<()> {
        write_stl_binary(self.mesh(), writer)
    }
}
