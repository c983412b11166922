pub mod color_mode;
pub use color_mode::*;

use std::str::FromStr;

use anyhow::Context;

/// Linear RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Color from a packed `0xRRGGBB` value
    pub fn from_rgb_u32(rgb: u32) -> Self {
        let channel = |shift: u32| ((rgb >> shift) & 0xff) as f32 / 255.;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string
    /// # Failures
    /// - if the string is not six hexadecimal digits after the optional `#`
    pub fn from_hex(hex: &str) -> anyhow::Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        anyhow::ensure!(
            digits.len() == 6,
            "Invalid color {:?}, expected #rrggbb",
            hex
        );
        let rgb = u32::from_str_radix(digits, 16)
            .with_context(|| format!("Invalid color {:?}, expected #rrggbb", hex))?;
        Ok(Self::from_rgb_u32(rgb))
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests;
