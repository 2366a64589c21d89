//! STL (Stereolithography) reading and writing.
//!
//! Both binary and ASCII variants are supported. Binary files are an
//! 80-byte header, a little-endian `u32` facet count, then 50 bytes per
//! facet (normal, three vertices, attribute count). ASCII files are the
//! `solid` / `facet normal` / `outer loop` text form.
//!
//! Facet normals are derived from face winding at write time; stored
//! normals are ignored at read time, since each loaded facet carries its
//! winding anyway.

// f64 to f32 narrowing is the STL format's precision
#![allow(clippy::cast_possible_truncation)]

use std::fs;
use std::io::Write;
use std::path::Path;

use relief_types::{IndexedMesh, Triangle, Vertex};

use crate::error::{StlError, StlResult};

/// STL binary header size in bytes.
const HEADER_LEN: usize = 80;

/// Size of one facet record in binary STL.
const FACET_LEN: usize = 50;

/// Save a mesh to an STL file.
///
/// The mesh is serialized to memory first and written in a single call,
/// so a failed serialization leaves no partial file behind. An empty
/// mesh produces a valid zero-facet file rather than an error.
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `path` - Output file path
/// * `binary` - If true, write binary STL; if false, ASCII
///
/// # Errors
///
/// Returns [`StlError::Io`] if the destination cannot be written.
///
/// # Example
///
/// ```no_run
/// use relief_io::save_stl;
/// use relief_types::IndexedMesh;
///
/// let mesh = IndexedMesh::new();
/// save_stl(&mesh, "empty.stl", true).unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(mesh: &IndexedMesh, path: P, binary: bool) -> StlResult<()> {
    let mut buffer = Vec::new();
    if binary {
        write_binary(mesh, &mut buffer)?;
    } else {
        write_ascii(mesh, &mut buffer)?;
    }
    fs::write(path, buffer)?;
    Ok(())
}

/// Load a mesh from an STL file, auto-detecting the variant.
///
/// Every loaded facet becomes three fresh vertices and one face, so the
/// result satisfies the in-bounds face-index invariant by construction.
///
/// # Errors
///
/// Returns [`StlError::FileNotFound`] for a missing path,
/// [`StlError::TruncatedFacets`] for a binary body shorter than its
/// declared facet count, and [`StlError::InvalidContent`] for malformed
/// ASCII.
pub fn load_stl<P: AsRef<Path>>(path: P) -> StlResult<IndexedMesh> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StlError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StlError::Io(e)
        }
    })?;
    parse_stl(&bytes)
}

/// Parse STL content from a byte slice.
fn parse_stl(bytes: &[u8]) -> StlResult<IndexedMesh> {
    if is_ascii_stl(bytes) {
        parse_ascii(&String::from_utf8_lossy(bytes))
    } else {
        parse_binary(bytes)
    }
}

/// Detect the ASCII variant.
///
/// ASCII files start with "solid"; some binary files also do, but their
/// headers contain NUL padding that never appears in valid ASCII.
fn is_ascii_stl(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(HEADER_LEN)];
    let trimmed: &[u8] = {
        let start = head
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(0);
        &head[start..]
    };
    trimmed.starts_with(b"solid") && !head.contains(&0)
}

fn write_binary<W: Write>(mesh: &IndexedMesh, writer: &mut W) -> StlResult<()> {
    let mut header = [0_u8; HEADER_LEN];
    let tag = b"relief extruded model";
    header[..tag.len()].copy_from_slice(tag);
    writer.write_all(&header)?;

    let face_count = mesh.face_count() as u32;
    writer.write_all(&face_count.to_le_bytes())?;

    for tri in mesh.triangles() {
        for component in facet_normal(&tri) {
            writer.write_all(&component.to_le_bytes())?;
        }
        for point in [tri.v0, tri.v1, tri.v2] {
            write_f32_triple(writer, point.x, point.y, point.z)?;
        }
        writer.write_all(&0_u16.to_le_bytes())?;
    }

    Ok(())
}

fn write_ascii<W: Write>(mesh: &IndexedMesh, writer: &mut W) -> StlResult<()> {
    writeln!(writer, "solid relief")?;

    for tri in mesh.triangles() {
        let [nx, ny, nz] = facet_normal(&tri);
        writeln!(writer, "  facet normal {nx} {ny} {nz}")?;
        writeln!(writer, "    outer loop")?;
        for point in [tri.v0, tri.v1, tri.v2] {
            writeln!(
                writer,
                "      vertex {} {} {}",
                point.x as f32, point.y as f32, point.z as f32
            )?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid relief")?;

    Ok(())
}

/// Unit facet normal as f32 components; zero for degenerate facets.
fn facet_normal(tri: &Triangle) -> [f32; 3] {
    tri.normal()
        .map_or([0.0; 3], |n| [n.x as f32, n.y as f32, n.z as f32])
}

fn write_f32_triple<W: Write>(writer: &mut W, x: f64, y: f64, z: f64) -> StlResult<()> {
    writer.write_all(&(x as f32).to_le_bytes())?;
    writer.write_all(&(y as f32).to_le_bytes())?;
    writer.write_all(&(z as f32).to_le_bytes())?;
    Ok(())
}

fn parse_binary(bytes: &[u8]) -> StlResult<IndexedMesh> {
    if bytes.len() < HEADER_LEN + 4 {
        return Err(StlError::invalid_content(
            "binary STL shorter than its header",
        ));
    }

    let expected = u32::from_le_bytes([
        bytes[HEADER_LEN],
        bytes[HEADER_LEN + 1],
        bytes[HEADER_LEN + 2],
        bytes[HEADER_LEN + 3],
    ]);

    let body = &bytes[HEADER_LEN + 4..];
    let available = (body.len() / FACET_LEN) as u32;
    if available < expected {
        return Err(StlError::TruncatedFacets {
            expected,
            got: available,
        });
    }

    let mut mesh = IndexedMesh::with_capacity(expected as usize * 3, expected as usize);
    for facet in body.chunks_exact(FACET_LEN).take(expected as usize) {
        // Skip the 12-byte normal; winding carries the orientation.
        let base = mesh.vertices.len() as u32;
        for i in 0..3 {
            mesh.vertices.push(vertex_at(facet, 12 + i * 12));
        }
        mesh.faces.push([base, base + 1, base + 2]);
    }

    Ok(mesh)
}

/// Read one vertex (3 little-endian f32s) at `offset` in a facet record.
fn vertex_at(facet: &[u8], offset: usize) -> Vertex {
    let coord = |at: usize| {
        f64::from(f32::from_le_bytes([
            facet[at],
            facet[at + 1],
            facet[at + 2],
            facet[at + 3],
        ]))
    };
    Vertex::from_coords(coord(offset), coord(offset + 4), coord(offset + 8))
}

fn parse_ascii(text: &str) -> StlResult<IndexedMesh> {
    let mut mesh = IndexedMesh::new();
    let mut pending: Vec<Vertex> = Vec::with_capacity(3);

    for line in text.lines() {
        let mut words = line.split_whitespace();
        match words.next() {
            Some("vertex") => {
                let mut coord = || -> StlResult<f64> {
                    words
                        .next()
                        .ok_or_else(|| StlError::invalid_content("vertex missing a coordinate"))?
                        .parse()
                        .map_err(StlError::from)
                };
                let (x, y, z) = (coord()?, coord()?, coord()?);
                pending.push(Vertex::from_coords(x, y, z));
            }
            Some("endfacet") => {
                if pending.len() != 3 {
                    return Err(StlError::invalid_content(format!(
                        "facet has {} vertices, expected 3",
                        pending.len()
                    )));
                }
                let base = mesh.vertices.len() as u32;
                mesh.vertices.append(&mut pending);
                mesh.faces.push([base, base + 1, base + 2]);
            }
            Some("endsolid") => break,
            _ => {}
        }
    }

    Ok(mesh)
}
