pub mod floating_point;
pub mod interpolation;
pub mod invertible;
pub mod noise;
pub mod transformable;

pub use floating_point::*;
pub use interpolation::*;
pub use invertible::*;
pub use noise::*;
pub use transformable::*;
