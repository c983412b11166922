use nalgebra::{Point3, Vector3};
use simba::scalar::SupersetOf;

use crate::misc::FloatingPoint;

/// An axis aligned bounding box in 3D space.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox<T: FloatingPoint> {
    min: Vector3<T>,
    max: Vector3<T>,
}

impl<T: FloatingPoint> BoundingBox<T> {
    /// Create a new bounding box from two corners in any order.
    pub fn new(min: Vector3<T>, max: Vector3<T>) -> Self {
        Self {
            min: min.inf(&max),
            max: max.sup(&min),
        }
    }

    /// Create a new bounding box from point iterator.
    /// Returns `None` if the iterator is empty.
    pub fn new_with_points<'a, I: IntoIterator<Item = &'a Point3<T>>>(iter: I) -> Option<Self>
    where
        T: 'a,
    {
        let mut iter = iter.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first.coords, first.coords), |(min, max), p| {
            (min.inf(&p.coords), max.sup(&p.coords))
        });
        Some(Self { min, max })
    }

    pub fn min(&self) -> &Vector3<T> {
        &self.min
    }

    pub fn max(&self) -> &Vector3<T> {
        &self.max
    }

    pub fn center(&self) -> Vector3<T> {
        (self.min + self.max) * nalgebra::convert::<f64, T>(0.5)
    }

    pub fn size(&self) -> Vector3<T> {
        self.max - self.min
    }

    /// Smallest box enclosing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Check if the point lies inside the box, expanded by `tolerance`.
    pub fn contains(&self, point: &Point3<T>, tolerance: T) -> bool {
        (0..3).all(|i| {
            point[i] >= self.min[i] - tolerance && point[i] <= self.max[i] + tolerance
        })
    }

    /// Cast the bounding box to another floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> BoundingBox<F> {
        BoundingBox {
            min: self.min.cast(),
            max: self.max.cast(),
        }
    }
}
