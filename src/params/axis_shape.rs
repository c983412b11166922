/// Cross-section shape of a strand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    /// Solid circular thread
    #[default]
    Tube,
    /// Hollow circular thread with a wall
    Pipe,
    /// Square cord, side = max(width, height)
    Square,
    /// Flat ribbon, width × height
    Rect,
}

/// Which family of the grid a strand belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrandAxis {
    /// Rows, swept along x
    Warp,
    /// Columns, swept along y
    Weft,
}

impl StrandAxis {
    /// Elevation sign of the axis; warp and weft crossings complement each other.
    pub fn sign(&self) -> f64 {
        match self {
            StrandAxis::Warp => 1.,
            StrandAxis::Weft => -1.,
        }
    }
}

/// Per-axis cross-section configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisShape {
    pub kind: ShapeKind,
    pub width: f64,
    pub height: f64,
    /// Only used by [`ShapeKind::Pipe`]
    pub wall_thickness: f64,
}

impl Default for AxisShape {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Tube,
            width: 0.24,
            height: 0.24,
            wall_thickness: 0.04,
        }
    }
}

impl AxisShape {
    pub fn new(kind: ShapeKind, width: f64, height: f64) -> Self {
        Self {
            kind,
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_wall_thickness(mut self, wall_thickness: f64) -> Self {
        self.wall_thickness = wall_thickness;
        self
    }
}
