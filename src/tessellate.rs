//! Discretization of the shell into one watertight triangle mesh: outer
//! wall, inner wall, and the two annular caps joining them.

use crate::float_types::{Real, TAU, tolerance};
use crate::mesh::Mesh;
use crate::solid::SolidProfile;
use nalgebra::{Point2, Point3};
use std::fmt::Debug;

/// Tessellation resolution, trading fidelity for triangle count.
///
/// Accuracy and triangle count both grow roughly linearly per axis. The
/// resolution is part of the generation contract: identical parameters and
/// resolution produce byte-identical artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshResolution {
    /// Angle samples per ring.
    pub theta_segments: usize,
    /// Height slices between base and top.
    pub height_segments: usize,
}

impl MeshResolution {
    /// Create a resolution, clamping to the minimum sensible grid
    /// (8 angular samples, 1 height slice).
    pub fn new(theta_segments: usize, height_segments: usize) -> Self {
        MeshResolution {
            theta_segments: theta_segments.max(8),
            height_segments: height_segments.max(1),
        }
    }

    /// Fast preview quality.
    pub fn coarse() -> Self {
        MeshResolution::new(48, 24)
    }

    /// Print-ready quality.
    pub fn fine() -> Self {
        MeshResolution::new(192, 96)
    }
}

impl Default for MeshResolution {
    fn default() -> Self {
        MeshResolution::new(96, 48)
    }
}

#[inline]
fn is_degenerate(vertices: &[Point3<Real>], [a, b, c]: [u32; 3]) -> bool {
    let pa = vertices[a as usize];
    let pb = vertices[b as usize];
    let pc = vertices[c as usize];
    let area = 0.5 * (pb - pa).cross(&(pc - pa)).norm();
    !(area > tolerance())
}

/// Triangulate the shell bounded by the solid's outer surface and the
/// per-layer inner rings (untwisted section frame; the twist rotation is
/// applied here).
///
/// Winding is counterclockwise seen from outside the material: outward on
/// the outer wall, toward the axis on the cavity wall, -z on the base cap
/// and +z on the top cap. Near-zero-area triangles are dropped.
pub fn tessellate<S: Clone + Send + Sync + Debug>(
    solid: &SolidProfile,
    inner_rings: &[Vec<Point2<Real>>],
    resolution: &MeshResolution,
    metadata: Option<S>,
) -> Mesh<S> {
    let n_theta = resolution.theta_segments;
    let n_layers = solid.layers.len();
    debug_assert_eq!(inner_rings.len(), n_layers);

    // Vertex grid: all outer rings base→top, then all inner rings.
    let mut vertices = Vec::with_capacity(2 * n_layers * n_theta);
    for layer in &solid.layers {
        for i in 0..n_theta {
            vertices.push(layer.outer_point(TAU * i as Real / n_theta as Real));
        }
    }
    for (layer, ring) in solid.layers.iter().zip(inner_rings) {
        let (sin_phi, cos_phi) = layer.twist.sin_cos();
        for q in ring {
            vertices.push(Point3::new(
                q.x * cos_phi - q.y * sin_phi,
                q.x * sin_phi + q.y * cos_phi,
                layer.z,
            ));
        }
    }

    let inner_base = (n_layers * n_theta) as u32;
    let outer = |j: usize, i: usize| (j * n_theta + i) as u32;
    let inner = |j: usize, i: usize| inner_base + (j * n_theta + i) as u32;

    let mut triangles = Vec::with_capacity(4 * n_theta * n_layers);
    let mut emit = |tri: [u32; 3]| {
        if !is_degenerate(&vertices, tri) {
            triangles.push(tri);
        }
    };

    // Side walls, one quad split into two triangles per grid cell.
    for j in 0..n_layers - 1 {
        for i in 0..n_theta {
            let i1 = (i + 1) % n_theta;
            emit([outer(j, i), outer(j, i1), outer(j + 1, i1)]);
            emit([outer(j, i), outer(j + 1, i1), outer(j + 1, i)]);
            emit([inner(j, i), inner(j + 1, i1), inner(j, i1)]);
            emit([inner(j, i), inner(j + 1, i), inner(j + 1, i1)]);
        }
    }

    // Annular caps sealing the wall at base and top.
    let top = n_layers - 1;
    for i in 0..n_theta {
        let i1 = (i + 1) % n_theta;
        emit([outer(0, i1), outer(0, i), inner(0, i)]);
        emit([outer(0, i1), inner(0, i), inner(0, i1)]);
        emit([outer(top, i), outer(top, i1), inner(top, i1)]);
        emit([outer(top, i), inner(top, i1), inner(top, i)]);
    }

    Mesh::from_buffers(vertices, triangles, metadata)
}
