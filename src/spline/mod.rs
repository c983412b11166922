pub mod catmull_rom;
pub mod sweep_frame;

pub use catmull_rom::*;
pub use sweep_frame::*;

#[cfg(test)]
mod tests;
