//! Indexed triangle mesh.

use crate::{Aabb, Triangle, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Stores vertices and faces separately, with each face referencing
/// three vertices by index. This is the aggregate the extrusion engine
/// assembles and the STL writer consumes.
///
/// # Invariant
///
/// Every index in every face is less than `vertices.len()`. Meshes built
/// through the extrusion engine or the STL loader uphold this by
/// construction; code mutating the public fields directly is responsible
/// for keeping it.
///
/// Vertices are not deduplicated: faces of touching cells reference
/// their own copies of coincident positions.
///
/// # Example
///
/// ```
/// use relief_types::{IndexedMesh, Vertex};
///
/// let vertices = vec![
///     Vertex::from_coords(0.0, 0.0, 0.0),
///     Vertex::from_coords(1.0, 0.0, 0.0),
///     Vertex::from_coords(0.0, 1.0, 0.0),
/// ];
/// let mesh = IndexedMesh::from_parts(vertices, vec![[0, 1, 2]]);
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertex and face sequences.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the mesh has no geometry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Iterate over all faces as triangles with resolved positions.
    ///
    /// # Panics
    ///
    /// Panics if a face index is out of bounds, which violates the type's
    /// documented invariant.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| {
            Triangle::new(
                self.vertices[i0 as usize].position,
                self.vertices[i1 as usize].position,
                self.vertices[i2 as usize].position,
            )
        })
    }

    /// Compute the axis-aligned bounding box of all vertices.
    ///
    /// Returns an empty AABB for a mesh with no vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }

    /// Compute the signed volume of the mesh.
    ///
    /// Sums the signed volumes of the tetrahedra spanned by each face and
    /// the origin (divergence theorem). Positive for a closed mesh whose
    /// winding faces outward; only meaningful for closed meshes.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.triangles()
            .map(|t| {
                let a = t.v0.coords;
                let b = t.v1.coords;
                let c = t.v2.coords;
                a.dot(&b.cross(&c)) / 6.0
            })
            .sum()
    }

    /// Compute the absolute volume of the mesh.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    /// Compute the total surface area of the mesh.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|t| t.area()).sum()
    }
}
