use thiserror::Error;

/// Failures that indicate a broken internal invariant rather than a bad parameter.
///
/// Returned inside `anyhow::Error`, recover it with `downcast_ref::<WeaveError>()`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WeaveError {
    /// A strand mesh does not carry a normal and a uv for every vertex
    #[error(
        "strand {strand_index} has inconsistent vertex attributes: {positions} positions, {normals} normals, {uvs} uvs"
    )]
    AttributeMismatch {
        strand_index: usize,
        positions: usize,
        normals: usize,
        uvs: usize,
    },
}
