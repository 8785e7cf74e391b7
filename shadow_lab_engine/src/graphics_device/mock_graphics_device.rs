/// Mock graphics device for unit tests (no GPU required)
///
/// Records every command as a string and keeps the last value assigned to
/// each `(program, uniform)` pair, so technique tests can check passes,
/// bindings and uploads without a backend.

use std::sync::{Arc, Mutex};
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::engine_bail;
use crate::graphics_device::{
    GraphicsDevice, Buffer, BufferDesc, BufferUsage, Texture, TextureDesc, TextureInfo,
    TextureUsage, Program, ProgramDesc, UniformValue, Framebuffer, FramebufferDesc,
    RenderState, ClearFlags, PrimitiveTopology, Viewport, DeviceStats,
};

/// Label recorded for draws and binds that target the screen
pub const SCREEN_TARGET: &str = "screen";

// ============================================================================
// Mock Buffer
// ============================================================================

pub struct MockBuffer {
    pub desc: BufferDesc,
    pub name: String,
    pub data: Mutex<Vec<u8>>,
}

impl MockBuffer {
    pub fn new(desc: BufferDesc, name: String) -> Self {
        let data = Mutex::new(vec![0u8; desc.size as usize]);
        Self { desc, name, data }
    }

    /// Copy of the buffer contents
    pub fn contents(&self) -> Vec<u8> {
        self.data.lock().unwrap().clone()
    }
}

impl Buffer for MockBuffer {
    fn desc(&self) -> &BufferDesc {
        &self.desc
    }

    fn update(&self, offset: u64, bytes: &[u8]) -> Result<()> {
        let end = offset + bytes.len() as u64;
        if end > self.desc.size {
            engine_bail!("shadowlab::mock",
                "buffer '{}' update out of range ({} > {})", self.name, end, self.desc.size);
        }
        let mut data = self.data.lock().unwrap();
        data[offset as usize..end as usize].copy_from_slice(bytes);
        Ok(())
    }
}

// ============================================================================
// Mock Texture
// ============================================================================

pub struct MockTexture {
    pub info: TextureInfo,
}

impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

// ============================================================================
// Mock Program
// ============================================================================

pub struct MockProgram {
    pub name: String,
    pub vertex_source: String,
    pub fragment_source: String,
}

impl Program for MockProgram {
    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Mock Framebuffer
// ============================================================================

pub struct MockFramebuffer {
    pub label: String,
    pub width: u32,
    pub height: u32,
    pub color: Option<Arc<dyn Texture>>,
    pub depth: bool,
    pub stencil: bool,
}

impl Framebuffer for MockFramebuffer {
    fn label(&self) -> &str {
        &self.label
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_attachment(&self) -> Option<&Arc<dyn Texture>> {
        self.color.as_ref()
    }

    fn has_depth(&self) -> bool {
        self.depth
    }

    fn has_stencil(&self) -> bool {
        self.stencil
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock device that tracks created resources and recorded commands
pub struct MockGraphicsDevice {
    /// Recorded commands, e.g. "draw:shadow_depth@shadow_map_0"
    pub commands: Vec<String>,
    /// Last value per (program, uniform)
    pub uniforms: FxHashMap<(String, String), UniformValue>,
    /// Buffer name per (program, attribute)
    pub attributes: FxHashMap<(String, String), String>,
    pub created_programs: Vec<String>,
    pub created_buffers: Vec<Arc<MockBuffer>>,
    pub created_textures: Vec<String>,
    pub created_framebuffers: Vec<String>,
    pub viewport: Option<Viewport>,
    pub render_state: Option<RenderState>,
    /// Make the next texture allocations fail with OutOfMemory
    pub fail_textures: bool,
    bound: Option<Arc<dyn Framebuffer>>,
    stats: DeviceStats,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            uniforms: FxHashMap::default(),
            attributes: FxHashMap::default(),
            created_programs: Vec::new(),
            created_buffers: Vec::new(),
            created_textures: Vec::new(),
            created_framebuffers: Vec::new(),
            viewport: None,
            render_state: None,
            fail_textures: false,
            bound: None,
            stats: DeviceStats::default(),
        }
    }

    /// Last value assigned to `program.name`
    pub fn uniform(&self, program: &str, name: &str) -> Option<&UniformValue> {
        self.uniforms.get(&(program.to_string(), name.to_string()))
    }

    /// Buffer name attached to `program.name`
    pub fn attribute(&self, program: &str, name: &str) -> Option<&str> {
        self.attributes
            .get(&(program.to_string(), name.to_string()))
            .map(|s| s.as_str())
    }

    /// Recorded draw commands only
    pub fn draws(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter(|c| c.starts_with("draw:"))
            .map(|c| c.as_str())
            .collect()
    }

    /// Forget recorded commands and stats, keep resources and uniforms
    pub fn clear_commands(&mut self) {
        self.commands.clear();
        self.stats = DeviceStats::default();
    }

    fn target_label(&self) -> String {
        self.bound
            .as_ref()
            .map(|fb| fb.label().to_string())
            .unwrap_or_else(|| SCREEN_TARGET.to_string())
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_program(&mut self, desc: ProgramDesc) -> Result<Arc<dyn Program>> {
        if desc.vertex_source.is_empty() || desc.fragment_source.is_empty() {
            engine_bail!("shadowlab::mock", "program '{}' has an empty shader stage", desc.name);
        }
        self.created_programs.push(desc.name.clone());
        self.commands.push(format!("create_program:{}", desc.name));
        Ok(Arc::new(MockProgram {
            name: desc.name,
            vertex_source: desc.vertex_source,
            fragment_source: desc.fragment_source,
        }))
    }

    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        let kind = match desc.usage {
            BufferUsage::Vertex => "vertex",
            BufferUsage::Index => "index",
        };
        let name = format!("{}_buffer_{}", kind, self.created_buffers.len());
        let buffer = Arc::new(MockBuffer::new(desc, name));
        self.created_buffers.push(buffer.clone());
        Ok(buffer)
    }

    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        if self.fail_textures {
            return Err(Error::OutOfMemory);
        }
        self.created_textures.push(desc.label.clone());
        Ok(Arc::new(MockTexture {
            info: TextureInfo {
                label: desc.label,
                width: desc.width,
                height: desc.height,
                format: desc.format,
                usage: desc.usage,
            },
        }))
    }

    fn create_framebuffer(&mut self, desc: FramebufferDesc) -> Result<Arc<dyn Framebuffer>> {
        if let Some(color) = &desc.color_attachment {
            let info = color.info();
            match info.usage {
                TextureUsage::RenderTarget | TextureUsage::SampledAndRenderTarget => {}
                _ => {
                    engine_bail!("shadowlab::mock",
                        "framebuffer '{}': texture '{}' cannot be rendered to ({:?})",
                        desc.label, info.label, info.usage);
                }
            }
            if info.width != desc.width || info.height != desc.height {
                engine_bail!("shadowlab::mock",
                    "framebuffer '{}': attachment size {}x{} differs from {}x{}",
                    desc.label, info.width, info.height, desc.width, desc.height);
            }
        }
        self.created_framebuffers.push(desc.label.clone());
        Ok(Arc::new(MockFramebuffer {
            label: desc.label,
            width: desc.width,
            height: desc.height,
            color: desc.color_attachment,
            depth: desc.depth,
            stencil: desc.stencil,
        }))
    }

    fn bind_framebuffer(&mut self, framebuffer: Option<&Arc<dyn Framebuffer>>) -> Result<()> {
        self.bound = framebuffer.cloned();
        self.stats.framebuffer_binds += 1;
        let label = self.target_label();
        self.commands.push(format!("bind_framebuffer:{}", label));
        Ok(())
    }

    fn bound_framebuffer(&self) -> Option<Arc<dyn Framebuffer>> {
        self.bound.clone()
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.viewport = Some(viewport);
        self.commands.push(format!(
            "set_viewport:{},{},{},{}",
            viewport.x, viewport.y, viewport.width, viewport.height
        ));
        Ok(())
    }

    fn set_render_state(&mut self, state: &RenderState) -> Result<()> {
        self.render_state = Some(*state);
        self.commands.push("set_render_state".to_string());
        Ok(())
    }

    fn clear(&mut self, flags: ClearFlags, _color: [f32; 4]) -> Result<()> {
        self.commands.push(format!("clear:{:?}@{}", flags, self.target_label()));
        Ok(())
    }

    fn set_uniform(&mut self, program: &Arc<dyn Program>, name: &str, value: UniformValue) -> Result<()> {
        self.stats.uniform_uploads += 1;
        self.commands.push(format!("uniform:{}:{}", program.name(), name));
        self.uniforms.insert((program.name().to_string(), name.to_string()), value);
        Ok(())
    }

    fn set_attribute(&mut self, program: &Arc<dyn Program>, name: &str, buffer: &Arc<dyn Buffer>) -> Result<()> {
        let buffer_name = self
            .created_buffers
            .iter()
            .find(|b| std::ptr::eq(Arc::as_ptr(b) as *const u8, Arc::as_ptr(buffer) as *const u8))
            .map(|b| b.name.clone())
            .unwrap_or_else(|| "external".to_string());
        self.commands.push(format!("attribute:{}:{}", program.name(), name));
        self.attributes.insert((program.name().to_string(), name.to_string()), buffer_name);
        Ok(())
    }

    fn draw(&mut self, program: &Arc<dyn Program>, topology: PrimitiveTopology, indices: &Arc<dyn Buffer>) -> Result<()> {
        let index_count = indices.element_count();
        self.stats.draw_calls += 1;
        self.stats.primitives += match topology {
            PrimitiveTopology::Triangles => index_count / 3,
            PrimitiveTopology::Lines => index_count / 2,
            PrimitiveTopology::TriangleStrip => index_count.saturating_sub(2),
        };
        self.commands.push(format!("draw:{}@{}", program.name(), self.target_label()));
        Ok(())
    }

    fn stats(&self) -> DeviceStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
