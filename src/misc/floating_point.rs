use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the type of the field in nalgebra
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Returns true if the value is neither NaN nor infinite
    fn is_finite_value(&self) -> bool {
        self.to_f64().is_some_and(f64::is_finite)
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
