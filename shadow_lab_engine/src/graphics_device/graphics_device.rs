/// GraphicsDevice trait - factory and command interface for GPU resources

use std::sync::Arc;
use crate::error::Result;
use crate::graphics_device::{
    Buffer, BufferDesc, BufferFormat, BufferUsage,
    Texture, TextureDesc,
    Program, ProgramDesc, UniformValue,
    Framebuffer, FramebufferDesc,
    RenderState, ClearFlags,
};

/// Primitive topology for draw submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    Triangles,
    Lines,
    TriangleStrip,
}

/// Viewport rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Viewport anchored at the origin
    pub fn sized(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }
}

/// Device statistics, accumulated since creation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceStats {
    /// Number of draw calls
    pub draw_calls: u32,
    /// Number of primitives drawn
    pub primitives: u32,
    /// Number of uniform assignments
    pub uniform_uploads: u32,
    /// Number of framebuffer binds (including restores)
    pub framebuffer_binds: u32,
}

/// Graphics device trait
///
/// Central interface of the resource binding layer: creates programs,
/// buffers, textures and framebuffers, assigns uniforms and attributes by
/// name, and submits draws. Implemented by backend-specific devices and by
/// the mock device used in tests.
pub trait GraphicsDevice: Send + Sync {
    /// Compile and link a program from paired vertex/fragment sources
    fn create_program(&mut self, desc: ProgramDesc) -> Result<Arc<dyn Program>>;

    /// Create an uninitialized buffer
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>>;

    /// Create a 2D texture
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Create an offscreen framebuffer
    fn create_framebuffer(&mut self, desc: FramebufferDesc) -> Result<Arc<dyn Framebuffer>>;

    /// Bind a framebuffer, or the screen when `None`
    fn bind_framebuffer(&mut self, framebuffer: Option<&Arc<dyn Framebuffer>>) -> Result<()>;

    /// Currently bound framebuffer (`None` = screen)
    fn bound_framebuffer(&self) -> Option<Arc<dyn Framebuffer>>;

    /// Set the viewport
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Apply fixed-function state for subsequent draws
    fn set_render_state(&mut self, state: &RenderState) -> Result<()>;

    /// Clear attachments of the bound target
    fn clear(&mut self, flags: ClearFlags, color: [f32; 4]) -> Result<()>;

    /// Assign a uniform by name
    fn set_uniform(&mut self, program: &Arc<dyn Program>, name: &str, value: UniformValue) -> Result<()>;

    /// Attach a vertex buffer to a named attribute
    fn set_attribute(&mut self, program: &Arc<dyn Program>, name: &str, buffer: &Arc<dyn Buffer>) -> Result<()>;

    /// Draw indexed primitives into the bound target
    fn draw(&mut self, program: &Arc<dyn Program>, topology: PrimitiveTopology, indices: &Arc<dyn Buffer>) -> Result<()>;

    /// Get statistics about the device
    fn stats(&self) -> DeviceStats;

    /// Create a buffer sized for `data` and upload it
    fn create_buffer_init(&mut self, usage: BufferUsage, format: BufferFormat, data: &[u8]) -> Result<Arc<dyn Buffer>> {
        let buffer = self.create_buffer(BufferDesc {
            size: data.len() as u64,
            usage,
            format,
        })?;
        buffer.update(0, data)?;
        Ok(buffer)
    }
}
