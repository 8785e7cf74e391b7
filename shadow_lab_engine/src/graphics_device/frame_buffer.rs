/// Framebuffer trait - offscreen render target with optional depth/stencil
///
/// A framebuffer groups a color texture with optional depth and stencil
/// storage. Draws issued while it is bound land in its attachments instead
/// of the screen.

use std::sync::Arc;
use crate::error::Result;
use crate::graphics_device::{GraphicsDevice, Texture};

/// Offscreen render target
///
/// Created via `GraphicsDevice::create_framebuffer()`.
pub trait Framebuffer: Send + Sync {
    /// Debug label
    fn label(&self) -> &str;

    /// Get the width in pixels
    fn width(&self) -> u32;

    /// Get the height in pixels
    fn height(&self) -> u32;

    /// Color attachment, sampled by later passes
    fn color_attachment(&self) -> Option<&Arc<dyn Texture>>;

    /// Whether a depth attachment exists
    fn has_depth(&self) -> bool;

    /// Whether a stencil attachment exists
    fn has_stencil(&self) -> bool;
}

/// Descriptor for creating a framebuffer
#[derive(Clone)]
pub struct FramebufferDesc {
    /// Debug label
    pub label: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Color attachment (must have render target usage)
    pub color_attachment: Option<Arc<dyn Texture>>,
    /// Allocate depth storage
    pub depth: bool,
    /// Allocate stencil storage
    pub stencil: bool,
}

/// Scoped framebuffer activation
///
/// Binds a framebuffer on `enter()` and restores whatever was bound before
/// when dropped, including on early returns and `?` propagation.
///
/// # Example
///
/// ```ignore
/// {
///     let mut scope = FramebufferScope::enter(device, &shadow_target)?;
///     scope.device().draw(&program, PrimitiveTopology::Triangles, &indices)?;
/// } // previous target bound again here
/// ```
pub struct FramebufferScope<'a> {
    device: &'a mut dyn GraphicsDevice,
    previous: Option<Arc<dyn Framebuffer>>,
}

impl<'a> FramebufferScope<'a> {
    /// Bind `framebuffer`, remembering the currently bound target
    pub fn enter(device: &'a mut dyn GraphicsDevice, framebuffer: &Arc<dyn Framebuffer>) -> Result<Self> {
        let previous = device.bound_framebuffer();
        device.bind_framebuffer(Some(framebuffer))?;
        Ok(Self { device, previous })
    }

    /// Device to issue commands against while the target is bound
    pub fn device(&mut self) -> &mut dyn GraphicsDevice {
        &mut *self.device
    }
}

impl Drop for FramebufferScope<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.device.bind_framebuffer(self.previous.as_ref()) {
            crate::engine_error!("shadowlab::FramebufferScope", "Failed to restore previous framebuffer: {}", err);
        }
    }
}

#[cfg(test)]
#[path = "frame_buffer_tests.rs"]
mod tests;
