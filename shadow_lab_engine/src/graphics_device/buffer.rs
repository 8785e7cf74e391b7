/// Buffer trait and buffer descriptor

use crate::error::Result;

/// Buffer usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Vertex attribute buffer (positions, normals, quad corners)
    Vertex,
    /// Index buffer
    Index,
}

/// Element format of a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum BufferFormat {
    /// vec2 (8 bytes)
    R32G32_SFLOAT,
    /// vec3 (12 bytes)
    R32G32B32_SFLOAT,
    /// u32 index (4 bytes)
    R32_UINT,
}

impl BufferFormat {
    /// Size of one element in bytes
    pub fn element_size(&self) -> u64 {
        match self {
            BufferFormat::R32G32_SFLOAT => 8,
            BufferFormat::R32G32B32_SFLOAT => 12,
            BufferFormat::R32_UINT => 4,
        }
    }
}

/// Descriptor for creating a buffer
#[derive(Debug, Clone)]
pub struct BufferDesc {
    /// Size in bytes
    pub size: u64,
    /// Buffer usage
    pub usage: BufferUsage,
    /// Element format
    pub format: BufferFormat,
}

impl BufferDesc {
    /// Number of whole elements the buffer holds
    pub fn element_count(&self) -> u32 {
        (self.size / self.format.element_size()) as u32
    }
}

/// Buffer resource trait
///
/// Implemented by backend-specific buffer types.
/// The buffer is destroyed when its last reference is dropped.
pub trait Buffer: Send + Sync {
    /// Descriptor the buffer was created with
    fn desc(&self) -> &BufferDesc;

    /// Update buffer data
    ///
    /// # Arguments
    ///
    /// * `offset` - Offset into the buffer in bytes
    /// * `data` - Data to write
    fn update(&self, offset: u64, data: &[u8]) -> Result<()>;

    /// Number of elements (vertices or indices)
    fn element_count(&self) -> u32 {
        self.desc().element_count()
    }
}
