//! Mesh aggregation - merges sub-meshes into one drawable mesh.
//!
//! Positions and normals are concatenated in order. Each sub-mesh's indices
//! are shifted by the number of vertices emitted before it, so sub-mesh *k*
//! only references its own vertex range in the merged buffers. For meshes
//! that reference all of their vertices this shift equals one past the
//! largest index emitted so far.

use crate::scene::mesh::{IndexList, Mesh};

/// Merge parallel lists of sub-mesh positions, indices and normals
///
/// `index_lists[k]` is rebased against `position_lists[k]`. Indices are not
/// validated; call `Mesh::validate()` on the result when the input is not
/// trusted. A rebased index that does not fit in `u32` becomes `u32::MAX`,
/// which `validate()` always rejects.
pub fn merge(position_lists: &[Vec<[f32; 3]>], index_lists: &[IndexList], normal_lists: &[Vec<[f32; 3]>]) -> Mesh {
    let positions = position_lists.concat();
    let normals = normal_lists.concat();

    let total_indices = index_lists.iter().map(IndexList::len).sum();
    let mut indices = Vec::with_capacity(total_indices);
    let mut base = 0u32;
    for (k, list) in index_lists.iter().enumerate() {
        indices.extend(list.as_slice().iter().map(|&index| index.checked_add(base).unwrap_or(u32::MAX)));
        let count = position_lists.get(k).map_or(0, |p| u32::try_from(p.len()).unwrap_or(u32::MAX));
        base = base.saturating_add(count);
    }

    Mesh { positions, normals, indices }
}

/// Merge complete meshes
pub fn merge_meshes(meshes: &[Mesh]) -> Mesh {
    let positions: Vec<Vec<[f32; 3]>> = meshes.iter().map(|m| m.positions.clone()).collect();
    let indices: Vec<IndexList> = meshes.iter().map(|m| IndexList::Flat(m.indices.clone())).collect();
    let normals: Vec<Vec<[f32; 3]>> = meshes.iter().map(|m| m.normals.clone()).collect();
    merge(&positions, &indices, &normals)
}

#[cfg(test)]
#[path = "mesh_aggregator_tests.rs"]
mod tests;
