/// Controls for the centerline relaxation pass
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelaxationOptions {
    /// Pull back toward the rest shape, in [0, 1]
    pub stiffness: f64,
    /// Resistance against smoothing, in [0, 1]
    pub bend_resistance: f64,
    /// Number of smoothing sweeps; zero disables relaxation
    pub iterations: usize,
}

impl Default for RelaxationOptions {
    fn default() -> Self {
        Self {
            stiffness: 0.5,
            bend_resistance: 0.5,
            iterations: 0,
        }
    }
}

impl RelaxationOptions {
    pub fn new(stiffness: f64, bend_resistance: f64, iterations: usize) -> Self {
        Self {
            stiffness,
            bend_resistance,
            iterations,
        }
    }

    /// Fraction of the neighbour-midpoint delta applied per sweep
    pub fn smoothing(&self) -> f64 {
        (1. - self.stiffness) * (1. - self.bend_resistance)
    }

    /// Fraction of the offset from the rest position removed per sweep
    pub fn spring_back(&self) -> f64 {
        self.stiffness * 0.25
    }
}
