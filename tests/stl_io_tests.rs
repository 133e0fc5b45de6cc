#![cfg(feature = "stl-io")]

use std::io::Cursor;
use twistshell::{Mesh, MeshResolution, Shape, ShapeParameters, StlError, generate};

fn vase_params() -> ShapeParameters {
    ShapeParameters {
        c4_base: 0.3,
        c4_top: 0.15,
        twist_linear: 1.0,
        perimeter_ratio: 1.4,
        ..ShapeParameters::cylinder(15.0, 300.0, 0.5)
    }
}

#[test]
fn binary_stl_has_header_count_and_fifty_byte_records() {
    let bytes = generate(&vase_params(), &MeshResolution::default()).unwrap();
    assert!(bytes.len() > 84);
    let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap()) as usize;
    assert_eq!(bytes.len(), 80 + 4 + 50 * count);
}

#[test]
fn round_trip_preserves_triangle_count_and_coordinates() {
    let resolution = MeshResolution::coarse();
    let shape = Shape::<()>::generate(&vase_params(), &resolution, None).unwrap();
    let bytes = shape.mesh.to_stl_binary().unwrap();

    let decoded = stl_io::read_stl(&mut Cursor::new(&bytes)).unwrap();
    assert_eq!(decoded.faces.len(), shape.mesh.triangle_count());

    for (index, face) in decoded.faces.iter().enumerate() {
        let ours = shape.mesh.triangle_positions(index);
        for corner in 0..3 {
            let decoded_v = decoded.vertices[face.vertices[corner]];
            let expected = ours[corner];
            // The artifact stores f32; compare against the same cast.
            assert_eq!(decoded_v[0], expected.x as f32);
            assert_eq!(decoded_v[1], expected.y as f32);
            assert_eq!(decoded_v[2], expected.z as f32);
        }
    }
}

#[test]
fn facet_normals_are_unit_and_recomputed_from_geometry() {
    let resolution = MeshResolution::coarse();
    let shape = Shape::<()>::generate(&vase_params(), &resolution, None).unwrap();
    let bytes = shape.mesh.to_stl_binary().unwrap();
    let decoded = stl_io::read_stl(&mut Cursor::new(&bytes)).unwrap();

    for (index, face) in decoded.faces.iter().enumerate() {
        let expected = shape.mesh.face_normal(index);
        let n = face.normal;
        let norm = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!((norm - 1.0).abs() < 1e-4);
        // Same orientation as the triangle's own edge cross product.
        let dot = n[0] as f64 * expected.x + n[1] as f64 * expected.y + n[2] as f64 * expected.z;
        assert!(dot > 0.99);
    }
}

#[test]
fn identical_requests_produce_byte_identical_artifacts() {
    let params = vase_params();
    let resolution = MeshResolution::default();
    let a = generate(&params, &resolution).unwrap();
    let b = generate(&params, &resolution).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_triangle_mesh_is_a_serialization_error() {
    let empty: Mesh<()> = Mesh::new();
    assert!(matches!(empty.to_stl_binary(), Err(StlError::EmptyMesh)));
}

#[test]
fn ascii_stl_lists_every_facet() {
    let shape = Shape::<()>::generate(&vase_params(), &MeshResolution::coarse(), None).unwrap();
    let stl = shape.mesh.to_stl_ascii("vase");
    assert!(stl.starts_with("solid vase\n"));
    assert!(stl.ends_with("endsolid vase\n"));
    assert_eq!(
        stl.matches("facet normal").count(),
        shape.mesh.triangle_count()
    );
}
