//! STL serialization for extruded relief models.
//!
//! This crate writes the meshes produced by the extrusion engine to STL
//! files, in binary or ASCII form, and reads them back. Reading exists
//! for round-trip verification and for inspecting generated files; the
//! primary direction is export.
//!
//! # Example
//!
//! ```no_run
//! use relief_io::{load_stl, save_stl};
//! use relief_types::IndexedMesh;
//!
//! let mesh = IndexedMesh::new();
//! save_stl(&mesh, "model.stl", true).unwrap();
//!
//! let reloaded = load_stl("model.stl").unwrap();
//! assert_eq!(reloaded.face_count(), mesh.face_count());
//! ```
//!
//! # Winding
//!
//! The writer preserves face winding exactly as stored in the mesh and
//! derives each facet normal from it; it never reorders or re-winds
//! faces. Consumers that infer solidity from winding see exactly what
//! the extrusion engine emitted.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{StlError, StlResult};
pub use stl::{load_stl, save_stl};
