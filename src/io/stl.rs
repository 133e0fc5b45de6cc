//! [STL](https://en.wikipedia.org/wiki/STL_(file_format)) export.
//!
//! Binary layout: an 80-byte free-form header, a little-endian `u32`
//! triangle count, then 50 bytes per triangle (f32 normal, three f32
//! vertices, a zeroed 2-byte attribute field). Facet normals are recomputed
//! from each triangle's own edge cross product rather than reused from
//! upstream state.

use crate::errors::StlError;
use crate::mesh::Mesh;
use std::fmt::Debug;
use std::io::Cursor;

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// The buffer is owned by the caller; nothing is written to disk, so
/// concurrent generations cannot race on a shared artifact path.
///
/// ## Errors
/// [`StlError::EmptyMesh`] if the mesh has no triangles: an empty artifact
/// points at an upstream defect, not at the request parameters.
pub fn to_stl_binary<S: Clone + Send + Sync + Debug>(mesh: &Mesh<S>) -> Result<Vec<u8>, StlError> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    if mesh.triangle_count() == 0 {
        return Err(StlError::EmptyMesh);
    }

    let mut triangles = Vec::with_capacity(mesh.triangle_count());
    #[allow(clippy::unnecessary_cast)]
    for index in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle_positions(index);
        let n = mesh.face_normal(index);
        triangles.push(Triangle {
            normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
            vertices: [
                Vertex::new([a.x as f32, a.y as f32, a.z as f32]),
                Vertex::new([b.x as f32, b.y as f32, b.z as f32]),
                Vertex::new([c.x as f32, c.y as f32, c.z as f32]),
            ],
        });
    }

    // Encode into an in-memory binary STL buffer
    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter()).map_err(|e| StlError::Io(e.to_string()))?;
    Ok(cursor.into_inner())
}

/// Export to ASCII STL
/// Convert this Mesh to an **ASCII STL** string with the given `name`.
pub fn to_stl_ascii<S: Clone + Send + Sync + Debug>(mesh: &Mesh<S>, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    for index in 0..mesh.triangle_count() {
        let n = mesh.face_normal(index);
        out.push_str(&format!(
            "  facet normal {:.6} {:.6} {:.6}\n",
            n.x, n.y, n.z
        ));
        out.push_str("    outer loop\n");
        for p in mesh.triangle_positions(index) {
            out.push_str(&format!(
                "      vertex {:.6} {:.6} {:.6}\n",
                p.x, p.y, p.z
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {name}\n"));
    out
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    pub fn to_stl_binary(&self) -> Result<Vec<u8>, StlError> {
        self::to_stl_binary(self)
    }
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
}
