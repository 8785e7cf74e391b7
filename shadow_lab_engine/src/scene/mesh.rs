//! Mesh geometry consumed by the shadow techniques.
//!
//! Positions and normals are `[f32; 3]` tuples, indices are `u32` triangle
//! corners. Meshes arrive already parsed; this module only validates and
//! reshapes them.

use glam::Vec3;
use crate::error::{Error, Result};
use crate::engine_warn;

/// Triangle indices in one of the two shapes parsers produce
///
/// Both shapes describe the same data; `as_slice()` exposes either as a
/// flat `u32` sequence without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexList {
    /// Flat sequence, three entries per triangle
    Flat(Vec<u32>),
    /// One entry per triangle
    Triangles(Vec<[u32; 3]>),
}

impl IndexList {
    /// Flat view of the indices
    pub fn as_slice(&self) -> &[u32] {
        match self {
            IndexList::Flat(indices) => indices,
            IndexList::Triangles(triangles) => bytemuck::cast_slice(triangles),
        }
    }

    /// Number of flat indices
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<u32>> for IndexList {
    fn from(indices: Vec<u32>) -> Self {
        IndexList::Flat(indices)
    }
}

impl From<Vec<[u32; 3]>> for IndexList {
    fn from(triangles: Vec<[u32; 3]>) -> Self {
        IndexList::Triangles(triangles)
    }
}

/// Indexed triangle mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    /// Index-aligned with `positions`, or empty
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new(positions: Vec<[f32; 3]>, normals: Vec<[f32; 3]>, indices: impl Into<IndexList>) -> Self {
        Self {
            positions,
            normals,
            indices: indices.into().as_slice().to_vec(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.indices.is_empty()
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Check that every index references a vertex and that normals, when
    /// present, are aligned with positions
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.positions.len();
        if self.has_normals() && self.normals.len() != vertex_count {
            engine_warn!("shadowlab::Mesh", "{} normals for {} positions", self.normals.len(), vertex_count);
            return Err(Error::InvalidResource(format!(
                "mesh has {} normals for {} positions",
                self.normals.len(),
                vertex_count
            )));
        }
        if self.indices.len() % 3 != 0 {
            return Err(Error::InvalidResource(format!(
                "mesh index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        if let Some((slot, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|(_, index)| **index as usize >= vertex_count)
        {
            engine_warn!("shadowlab::Mesh", "index {} at slot {} out of range", index, slot);
            return Err(Error::InvalidResource(format!(
                "index {} at slot {} out of range for {} vertices",
                index, slot, vertex_count
            )));
        }
        Ok(())
    }

    /// Copy of the mesh moved by `offset`
    pub fn translated(&self, offset: Vec3) -> Self {
        let positions = self
            .positions
            .iter()
            .map(|p| (Vec3::from_array(*p) + offset).to_array())
            .collect();
        Self {
            positions,
            normals: self.normals.clone(),
            indices: self.indices.clone(),
        }
    }

    /// Floor slab: a 20x20 box, 0.1 thick, top face at y = 0
    ///
    /// Normals are the cross product of the edges toward each vertex's
    /// neighbors in ring order, left unnormalized.
    pub fn floor() -> Self {
        let positions: Vec<[f32; 3]> = vec![
            [10.0, 0.0, 10.0], [10.0, 0.0, -10.0], [-10.0, 0.0, -10.0], [-10.0, 0.0, 10.0],
            [10.0, -0.1, 10.0], [10.0, -0.1, -10.0], [-10.0, -0.1, -10.0], [-10.0, -0.1, 10.0],
        ];
        let count = positions.len();
        let normals = (0..count)
            .map(|i| {
                let prev = Vec3::from_array(positions[(i + count - 1) % count]);
                let curr = Vec3::from_array(positions[i]);
                let next = Vec3::from_array(positions[(i + 1) % count]);
                (next - curr).cross(prev - curr).to_array()
            })
            .collect();
        let indices = vec![
            0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6, 0, 6, 1,
            1, 6, 7, 1, 7, 2, 7, 4, 3, 7, 3, 2, 4, 7, 6, 4, 6, 5,
        ];
        Self { positions, normals, indices }
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
