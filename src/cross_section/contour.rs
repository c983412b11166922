use itertools::Itertools;
use nalgebra::{Point2, Vector2};

/// A vertex of a closed 2D contour with its outward surface normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourPoint {
    pub position: Point2<f64>,
    pub normal: Vector2<f64>,
    /// Fraction of the perimeter walked to reach this vertex
    pub u: f64,
}

/// Closed 2D loop, the last vertex connects back to the first
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    points: Vec<ContourPoint>,
}

impl Contour {
    /// Closed polygon through `positions` with normals given per vertex
    pub fn new(positions: Vec<Point2<f64>>, normals: Vec<Vector2<f64>>) -> Self {
        let lengths: Vec<f64> = positions
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| (b - a).norm())
            .collect();
        let perimeter: f64 = lengths.iter().sum();
        let mut walked = 0.;
        let points = positions
            .into_iter()
            .zip(normals)
            .zip(lengths)
            .map(|((position, normal), length)| {
                let u = if perimeter > 0. { walked / perimeter } else { 0. };
                walked += length;
                ContourPoint {
                    position,
                    normal,
                    u,
                }
            })
            .collect();
        Self { points }
    }

    /// Regular polygon approximating a circle, counter-clockwise from +x
    pub fn circle(radius: f64, segments: usize) -> Self {
        let (positions, normals) = (0..segments)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / segments as f64;
                let dir = Vector2::new(angle.cos(), angle.sin());
                (Point2::from(dir * radius), dir)
            })
            .unzip();
        Self::new(positions, normals)
    }

    /// Axis aligned rectangle centred on the origin, counter-clockwise.
    /// Corner normals bisect the adjacent edge normals.
    pub fn rectangle(width: f64, height: f64) -> Self {
        let (hw, hh) = (width * 0.5, height * 0.5);
        let positions = vec![
            Point2::new(hw, -hh),
            Point2::new(hw, hh),
            Point2::new(-hw, hh),
            Point2::new(-hw, -hh),
        ];
        let normals = vec![
            Vector2::new(1., -1.).normalize(),
            Vector2::new(1., 1.).normalize(),
            Vector2::new(-1., 1.).normalize(),
            Vector2::new(-1., -1.).normalize(),
        ];
        Self::new(positions, normals)
    }

    pub fn points(&self) -> &[ContourPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area, positive for counter-clockwise loops
    pub fn signed_area(&self) -> f64 {
        self.points
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| a.position.x * b.position.y - b.position.x * a.position.y)
            .sum::<f64>()
            * 0.5
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.
    }

    /// Same loop walked the other way round
    pub fn reversed(&self) -> Self {
        let positions = self.points.iter().rev().map(|p| p.position).collect();
        let normals = self.points.iter().rev().map(|p| p.normal).collect();
        Self::new(positions, normals)
    }

    /// Copy with every normal negated
    pub fn with_flipped_normals(&self) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| ContourPoint {
                    normal: -p.normal,
                    ..*p
                })
                .collect(),
        }
    }
}
