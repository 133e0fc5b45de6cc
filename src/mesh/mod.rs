//! Indexed triangle mesh produced by the mesher.

use crate::errors::ValidationError;
use crate::float_types::parry3d::bounding_volume::Aabb;
use crate::float_types::parry3d::mass_properties::MassProperties;
use crate::float_types::Real;
use nalgebra::{partial_max, partial_min, Point3, Vector3};
use std::fmt::Debug;
use std::sync::OnceLock;

pub mod manifold;

/// A triangle mesh with a shared vertex buffer and indexed faces.
///
/// Faces are ordered vertex-index triples wound counterclockwise when seen
/// from outside the enclosed material, so the mesh carries a well-defined
/// enclosed volume. Once validation passes, every edge is shared by exactly
/// two faces.
#[derive(Clone, Debug)]
pub struct Mesh<S: Clone + Send + Sync + Debug> {
    /// Shared vertex positions.
    pub vertices: Vec<Point3<Real>>,

    /// Vertex-index triples, counterclockwise from outside.
    pub triangles: Vec<[u32; 3]>,

    /// Lazily calculated AABB that spans `vertices`.
    pub bounding_box: OnceLock<Aabb>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Returns a new empty Mesh
    pub fn new() -> Self {
        Mesh {
            vertices: Vec::new(),
            triangles: Vec::new(),
            bounding_box: OnceLock::new(),
            metadata: None,
        }
    }

    /// Build a Mesh from existing buffers.
    pub fn from_buffers(
        vertices: Vec<Point3<Real>>,
        triangles: Vec<[u32; 3]>,
        metadata: Option<S>,
    ) -> Self {
        Mesh {
            vertices,
            triangles,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// The three corner positions of triangle `index`.
    #[inline]
    pub fn triangle_positions(&self, index: usize) -> [Point3<Real>; 3] {
        let [a, b, c] = self.triangles[index];
        [
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        ]
    }

    /// Unit normal of triangle `index`, from its own edge cross product.
    /// Zero for a degenerate triangle.
    pub fn face_normal(&self, index: usize) -> Vector3<Real> {
        let [a, b, c] = self.triangle_positions(index);
        let cross = (b - a).cross(&(c - a));
        let norm = cross.norm();
        if norm > 0.0 { cross / norm } else { Vector3::zeros() }
    }

    /// Signed enclosed volume by the divergence theorem; positive when the
    /// winding is consistently outward.
    pub fn volume(&self) -> Real {
        let mut six_v = 0.0;
        for [a, b, c] in self
            .triangles
            .iter()
            .map(|&[a, b, c]| [a as usize, b as usize, c as usize])
        {
            let (pa, pb, pc) = (self.vertices[a], self.vertices[b], self.vertices[c]);
            six_v += pa.coords.dot(&pb.coords.cross(&pc.coords));
        }
        six_v / 6.0
    }

    /// Approximate mass and center of mass at the given uniform density,
    /// via parry's triangle-mesh mass properties.
    pub fn mass_properties(&self, density: Real) -> Result<(Real, Point3<Real>), ValidationError> {
        if self.triangles.is_empty() {
            return Err(ValidationError::TriMesh("mesh has no triangles".into()));
        }
        let mp = MassProperties::from_trimesh(density, &self.vertices, &self.triangles);
        Ok((mp.mass(), mp.local_com))
    }

    /// Returns a [`Aabb`] indicating the 3D bounds of all `vertices`.
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            // Track overall min/max in x, y, z among all vertices
            let mut min_x = Real::MAX;
            let mut min_y = Real::MAX;
            let mut min_z = Real::MAX;
            let mut max_x = -Real::MAX;
            let mut max_y = -Real::MAX;
            let mut max_z = -Real::MAX;

            for v in &self.vertices {
                min_x = *partial_min(&min_x, &v.x).unwrap();
                min_y = *partial_min(&min_y, &v.y).unwrap();
                min_z = *partial_min(&min_z, &v.z).unwrap();

                max_x = *partial_max(&max_x, &v.x).unwrap();
                max_y = *partial_max(&max_y, &v.y).unwrap();
                max_z = *partial_max(&max_z, &v.z).unwrap();
            }

            // If still uninitialized (e.g., no vertices), return a trivial AABB at origin
            if min_x > max_x {
                return Aabb::new(Point3::origin(), Point3::origin());
            }

            let mins = Point3::new(min_x, min_y, min_z);
            let maxs = Point3::new(max_x, max_y, max_z);
            Aabb::new(mins, maxs)
        })
    }

    /// Invalidates object's cached bounding box.
    pub fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }
}

impl<S: Clone + Send + Sync + Debug> Default for Mesh<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A unit tetrahedron with outward winding.
    fn tetrahedron() -> Mesh<()> {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let triangles = vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];
        Mesh::from_buffers(vertices, triangles, None)
    }

    #[test]
    fn tetrahedron_volume() {
        let mesh = tetrahedron();
        assert!((mesh.volume() - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn face_normal_is_unit_and_outward() {
        let mesh = tetrahedron();
        // Face [0, 2, 1] lies in z = 0 and faces -z.
        let n = mesh.face_normal(0);
        assert!((n.norm() - 1.0).abs() < 1e-12);
        assert!(n.z < 0.0);
    }

    #[test]
    fn bounding_box_spans_vertices() {
        let mesh = tetrahedron();
        let aabb = mesh.bounding_box();
        assert_eq!(aabb.mins, Point3::origin());
        assert_eq!(aabb.maxs, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn empty_mesh_has_trivial_bounds() {
        let mesh: Mesh<()> = Mesh::new();
        let aabb = mesh.bounding_box();
        assert_eq!(aabb.mins, aabb.maxs);
    }
}
