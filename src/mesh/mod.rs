pub mod cleanup;
pub mod triangle_mesh;

pub use cleanup::*;
pub use triangle_mesh::*;
