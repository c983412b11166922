#![allow(clippy::needless_range_loop)]

mod bounding_box;
mod centerline;
mod color;
mod cross_section;
mod error;
mod export;
mod mesh;
mod misc;
mod params;
mod radius_profile;
mod rebuild;
mod relax;
mod spline;
mod strand;
mod weave;

pub mod prelude {
    pub use crate::bounding_box::*;
    pub use crate::centerline::*;
    pub use crate::color::*;
    pub use crate::cross_section::*;
    pub use crate::error::*;
    pub use crate::export::*;
    pub use crate::mesh::*;
    pub use crate::misc::*;
    pub use crate::params::*;
    pub use crate::radius_profile::*;
    pub use crate::rebuild::*;
    pub use crate::relax::*;
    pub use crate::spline::*;
    pub use crate::strand::*;
    pub use crate::weave::*;
}
