//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (AABB).
///
/// Used to report the physical extents of an extruded model.
///
/// # Example
///
/// ```
/// use relief_types::{Aabb, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(50.0, 50.0, 10.0),
/// );
/// assert_eq!(aabb.size().z, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create an AABB from minimum and maximum corners.
    ///
    /// The corners are reordered per axis if min > max.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create an empty (inverted) AABB.
    ///
    /// An empty AABB has min > max and is the identity for
    /// [`Aabb::expand`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Check whether this AABB is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grow the AABB to include a point.
    pub fn expand(&mut self, point: &Point3<f64>) {
        self.min = Point3::new(
            self.min.x.min(point.x),
            self.min.y.min(point.y),
            self.min.z.min(point.z),
        );
        self.max = Point3::new(
            self.max.x.max(point.x),
            self.max.y.max(point.y),
            self.max.z.max(point.z),
        );
    }

    /// Compute the AABB of a set of points.
    ///
    /// Returns an empty AABB for an empty set.
    #[must_use]
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand(point);
        }
        aabb
    }

    /// Get the size of the AABB along each axis.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Get the center of the AABB.
    ///
    /// Meaningless for an empty AABB.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        self.min + self.size() / 2.0
    }

    /// Check whether a point lies inside the AABB (inclusive).
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reorders_corners() {
        let aabb = Aabb::new(Point3::new(1.0, 0.0, 5.0), Point3::new(0.0, 2.0, 3.0));
        assert!((aabb.min.x - 0.0).abs() < f64::EPSILON);
        assert!((aabb.max.x - 1.0).abs() < f64::EPSILON);
        assert!((aabb.min.z - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_is_empty() {
        assert!(Aabb::empty().is_empty());
        assert!(!Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0)).is_empty());
    }

    #[test]
    fn expand_grows_box() {
        let mut aabb = Aabb::empty();
        aabb.expand(&Point3::new(1.0, 2.0, 3.0));
        aabb.expand(&Point3::new(-1.0, 0.0, 5.0));
        assert!((aabb.min.x - (-1.0)).abs() < f64::EPSILON);
        assert!((aabb.max.z - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_points_of_empty_set() {
        let aabb = Aabb::from_points(std::iter::empty());
        assert!(aabb.is_empty());
    }

    #[test]
    fn contains_boundary() {
        let aabb = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        assert!(aabb.contains(&Point3::new(1.0, 1.0, 1.0)));
        assert!(!aabb.contains(&Point3::new(1.0, 1.0, 1.1)));
    }

    #[test]
    fn center_and_size() {
        let aabb = Aabb::new(Point3::origin(), Point3::new(10.0, 4.0, 2.0));
        let c = aabb.center();
        assert!((c.x - 5.0).abs() < f64::EPSILON);
        assert!((c.y - 2.0).abs() < f64::EPSILON);
        assert!((aabb.size().x - 10.0).abs() < f64::EPSILON);
    }
}
