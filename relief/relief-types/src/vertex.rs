//! Vertex type.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vertex in 3D space.
///
/// A vertex has no identity beyond its position: two vertices at the
/// same coordinates are distinct entries in a mesh, and the extrusion
/// engine deliberately emits coincident vertices where cell footprints
/// touch.
///
/// # Example
///
/// ```
/// use relief_types::{Point3, Vertex};
///
/// let a = Vertex::new(Point3::new(1.0, 2.0, 3.0));
/// let b = Vertex::from_coords(1.0, 2.0, 3.0);
/// assert_eq!(a.position, b.position);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,
}

impl Vertex {
    /// Create a vertex from a position.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self { position }
    }

    /// Create a vertex from raw coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use relief_types::Vertex;
    ///
    /// let v = Vertex::from_coords(1.0, 2.0, 3.0);
    /// assert_eq!(v.position.y, 2.0);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vertex {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::from_coords(x, y, z)
    }
}
