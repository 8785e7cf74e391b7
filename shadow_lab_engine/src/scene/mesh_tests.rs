/// Tests for Mesh, IndexList, validation and the floor primitive

use glam::Vec3;
use super::*;

fn triangle() -> Mesh {
    Mesh::new(
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        vec![[0.0, 0.0, 1.0]; 3],
        vec![0u32, 1, 2],
    )
}

// ============================================================================
// IndexList
// ============================================================================

#[test]
fn test_index_list_shapes_flatten_identically() {
    let flat = IndexList::from(vec![0u32, 1, 2, 2, 3, 0]);
    let triangles = IndexList::from(vec![[0u32, 1, 2], [2, 3, 0]]);

    assert_eq!(flat.as_slice(), triangles.as_slice());
    assert_eq!(triangles.len(), 6);
    assert!(!triangles.is_empty());
    assert!(IndexList::Triangles(Vec::new()).is_empty());
}

#[test]
fn test_mesh_new_accepts_triangles() {
    let mesh = Mesh::new(vec![[0.0; 3]; 4], Vec::new(), vec![[0u32, 1, 2], [2, 3, 0]]);
    assert_eq!(mesh.indices, vec![0, 1, 2, 2, 3, 0]);
    assert_eq!(mesh.triangle_count(), 2);
    assert!(!mesh.has_normals());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_accepts_well_formed_mesh() {
    assert!(triangle().validate().is_ok());
    assert!(Mesh::default().validate().is_ok());
}

#[test]
fn test_validate_rejects_out_of_range_index() {
    let mut mesh = triangle();
    mesh.indices[2] = 3;
    let err = mesh.validate().unwrap_err();
    assert!(format!("{}", err).contains("index 3"));
}

#[test]
fn test_validate_rejects_misaligned_normals() {
    let mut mesh = triangle();
    mesh.normals.pop();
    assert!(mesh.validate().is_err());
}

#[test]
fn test_validate_rejects_partial_triangle() {
    let mut mesh = triangle();
    mesh.indices.push(0);
    assert!(mesh.validate().is_err());
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn test_translated_moves_positions_only() {
    let mesh = triangle().translated(Vec3::new(0.0, 1.1, 0.0));
    assert_eq!(mesh.positions[1], [1.0, 1.1, 0.0]);
    assert_eq!(mesh.normals, triangle().normals);
    assert_eq!(mesh.indices, triangle().indices);
}

#[test]
fn test_floor_is_valid_slab() {
    let floor = Mesh::floor();
    assert_eq!(floor.vertex_count(), 8);
    assert_eq!(floor.triangle_count(), 12);
    assert!(floor.validate().is_ok());

    let top = floor.positions.iter().filter(|p| p[1] == 0.0).count();
    assert_eq!(top, 4);
}

#[test]
fn test_floor_corner_normal_from_ring_neighbors() {
    let floor = Mesh::floor();
    // vertex 1 = (10, 0, -10): prev (10, 0, 10), next (-10, 0, -10)
    let expected = Vec3::new(-20.0, 0.0, 0.0).cross(Vec3::new(0.0, 0.0, 20.0));
    assert_eq!(Vec3::from_array(floor.normals[1]), expected);
}
