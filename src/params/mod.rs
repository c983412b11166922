pub mod axis_shape;
pub mod relaxation_options;
pub mod weave_grid;
pub mod weave_parameters;

pub use axis_shape::*;
pub use relaxation_options::*;
pub use weave_grid::*;
pub use weave_parameters::*;
