//! Core geometry types for the relief extrusion toolchain.
//!
//! This crate provides the foundational types shared by the extrusion
//! engine, the STL exporter, and the command-line tool:
//!
//! - [`Vertex`] - A point in 3D space
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//! - [`Triangle`] - A concrete triangle with resolved vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`. The
//! extrusion engine and the CLI treat them as millimeters.
//!
//! # Coordinate System
//!
//! - X: column direction of the source bitmap (rightward)
//! - Y: row direction of the source bitmap (downward in image order)
//! - Z: extrusion direction (out of the bitmap plane)
//!
//! Facet normals are derived from face winding by the right-hand rule;
//! the mesh itself stores winding, never explicit normals.
//!
//! # Example
//!
//! ```
//! use relief_types::{IndexedMesh, Vertex};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.5, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod triangle;
mod vertex;

pub use bounds::Aabb;
pub use mesh::IndexedMesh;
pub use triangle::Triangle;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
