use std::io::Write;

use anyhow::Context;

use crate::{
    color::{Color, WeaveMesh},
    mesh::TriangleMesh,
};

/// Write the mesh as Wavefront OBJ text.
///
/// Each vertex gets a `v` line (with `r g b` when colors are given), a `vn` and a `vt` line;
/// faces reference all three with the same 1-based index.
/// # Failures
/// - if `colors` does not hold one color per vertex
/// - if the writer fails
pub fn write_obj<W: Write>(
    mesh: &TriangleMesh<f64>,
    colors: Option<&[Color]>,
    name: &str,
    mut writer: W,
) -> anyhow::Result<()> {
    if let Some(colors) = colors {
        anyhow::ensure!(
            colors.len() == mesh.vertex_count(),
            "Invalid number of colors, got {}, expected {}",
            colors.len(),
            mesh.vertex_count()
        );
    }

    writeln!(writer, "o {}", name).context("Failed to write OBJ")?;

    for (i, p) in mesh.positions().iter().enumerate() {
        match colors.map(|c| c[i]) {
            Some(c) => writeln!(writer, "v {} {} {} {} {} {}", p.x, p.y, p.z, c.r, c.g, c.b)?,
            None => writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?,
        }
    }
    for n in mesh.normals() {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for uv in mesh.uvs() {
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }
    for [a, b, c] in mesh.faces() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    writer.flush()?;
    Ok(())
}

impl WeaveMesh {
    /// Write the merged weave with vertex colors as OBJ
    pub fn write_obj<W: Write>(&self, name: &str, writer: W) -> anyhow::Result<()> {
        write_obj(self.mesh(), Some(self.colors()), name, writer)
    }
}
