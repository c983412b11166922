pub mod obj;
pub mod stl;

pub use obj::*;
pub use stl::*;

#[cfg(test)]
mod tests;
