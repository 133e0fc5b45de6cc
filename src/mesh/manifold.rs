//! Watertightness check over the indexed edge graph.

use crate::mesh::Mesh;
use hashbrown::HashMap;
use std::fmt::Debug;

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Count mesh edges that are not shared by exactly two faces.
    ///
    /// ### Returns
    /// `(defective, total)` over the undirected edge set. Because faces
    /// share a vertex buffer, edges are keyed by index pair; no coordinate
    /// quantization is needed.
    pub fn edge_defects(&self) -> (usize, usize) {
        let mut edge_counts: HashMap<(u32, u32), u32> = HashMap::new();

        for &[a, b, c] in &self.triangles {
            for (i0, i1) in [(a, b), (b, c), (c, a)] {
                // Order the pair so both directions land on the same key
                let key = if i0 < i1 { (i0, i1) } else { (i1, i0) };
                *edge_counts.entry(key).or_insert(0) += 1;
            }
        }

        let defective = edge_counts.values().filter(|&&count| count != 2).count();
        (defective, edge_counts.len())
    }

    /// Checks if the Mesh object is manifold
    ///
    /// ### Returns
    /// Returns `true` if every edge appears exactly 2 times
    pub fn is_manifold(&self) -> bool {
        let (defective, _) = self.edge_defects();
        defective == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::Real;
    use nalgebra::Point3;

    #[test]
    fn closed_tetrahedron_is_manifold() {
        let vertices: Vec<Point3<Real>> = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let triangles = vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];
        let mesh: Mesh<()> = Mesh::from_buffers(vertices, triangles, None);
        assert!(mesh.is_manifold());
        assert_eq!(mesh.edge_defects(), (0, 6));
    }

    #[test]
    fn open_fan_is_not_manifold() {
        let vertices: Vec<Point3<Real>> = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        // Missing one face of the tetrahedron: three boundary edges.
        let triangles = vec![[0, 2, 1], [0, 1, 3], [0, 3, 2]];
        let mesh: Mesh<()> = Mesh::from_buffers(vertices, triangles, None);
        assert!(!mesh.is_manifold());
        let (defective, total) = mesh.edge_defects();
        assert_eq!(defective, 3);
        assert_eq!(total, 6);
    }
}
