/// GPU copy of a scene mesh plus the camera/light references a technique
/// holds between `init` and `terminate`

use std::sync::Arc;
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, Buffer, BufferUsage, BufferFormat, Program};
use crate::scene::{Mesh, SharedCamera, SharedLight};
use crate::compositor::FrameSnapshot;

/// Vertex and index buffers of one mesh
pub struct GpuMesh {
    pub positions: Arc<dyn Buffer>,
    /// `None` when the mesh carries no normals
    pub normals: Option<Arc<dyn Buffer>>,
    pub indices: Arc<dyn Buffer>,
}

impl GpuMesh {
    /// Validate `mesh` and upload it
    pub fn upload(device: &mut dyn GraphicsDevice, mesh: &Mesh) -> Result<Self> {
        mesh.validate()?;

        let positions = device.create_buffer_init(
            BufferUsage::Vertex,
            BufferFormat::R32G32B32_SFLOAT,
            bytemuck::cast_slice(&mesh.positions),
        )?;
        let normals = if mesh.has_normals() {
            Some(device.create_buffer_init(
                BufferUsage::Vertex,
                BufferFormat::R32G32B32_SFLOAT,
                bytemuck::cast_slice(&mesh.normals),
            )?)
        } else {
            None
        };
        let indices = device.create_buffer_init(
            BufferUsage::Index,
            BufferFormat::R32_UINT,
            bytemuck::cast_slice(&mesh.indices),
        )?;

        Ok(Self { positions, normals, indices })
    }

    pub fn index_count(&self) -> u32 {
        self.indices.element_count()
    }

    /// Attach positions to `position` and, when present, normals to `normal`
    pub fn bind(&self, device: &mut dyn GraphicsDevice, program: &Arc<dyn Program>, with_normals: bool) -> Result<()> {
        device.set_attribute(program, "position", &self.positions)?;
        if with_normals {
            if let Some(normals) = &self.normals {
                device.set_attribute(program, "normal", normals)?;
            }
        }
        Ok(())
    }
}

/// Everything a technique holds while active
pub struct BoundScene {
    pub mesh: GpuMesh,
    pub camera: SharedCamera,
    /// Never empty
    pub lights: Vec<SharedLight>,
}

impl BoundScene {
    /// Upload `mesh` and keep the camera and light references
    ///
    /// Fails with `InitializationFailed` when `lights` is empty.
    pub fn bind(
        device: &mut dyn GraphicsDevice,
        technique: &str,
        mesh: &Mesh,
        camera: SharedCamera,
        lights: Vec<SharedLight>,
    ) -> Result<Self> {
        if lights.is_empty() {
            return Err(Error::InitializationFailed(format!("{}: at least one light is required", technique)));
        }
        let mesh = GpuMesh::upload(device, mesh)?;
        Ok(Self { mesh, camera, lights })
    }

    pub fn snapshot(&self) -> Result<FrameSnapshot> {
        FrameSnapshot::capture(&self.camera, &self.lights)
    }
}
