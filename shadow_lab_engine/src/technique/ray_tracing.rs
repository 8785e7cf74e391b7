/// Ray tracing - full-screen quad, shadows computed in the fragment stage
///
/// All scene parameters are uploaded once at `init`; the pixel stage does
/// the ray/plane intersection and shadow test, so `update` has no host-side
/// work.

use std::sync::Arc;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::graphics_device::{GraphicsDevice, Buffer, BufferUsage, BufferFormat, Program};
use crate::scene::{Mesh, SharedCamera, SharedLight};
use crate::technique::{shaders, BoundScene, ShadowTechnique, TechniqueKind};
use crate::engine_debug;

/// Quad corners in clip space, triangle strip order
pub const FULL_SCREEN_QUAD: [[f32; 2]; 4] = [[-1.0, -1.0], [-1.0, 1.0], [1.0, -1.0], [1.0, 1.0]];

pub struct RayTracing {
    config: RenderConfig,
    program: Arc<dyn Program>,
    quad: Option<Arc<dyn Buffer>>,
    scene: Option<BoundScene>,
}

impl RayTracing {
    pub fn new(device: &mut dyn GraphicsDevice, config: &RenderConfig) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            program: device.create_program(shaders::ray_tracing())?,
            quad: None,
            scene: None,
        })
    }

    fn upload_parameters(&self, device: &mut dyn GraphicsDevice) -> Result<()> {
        let params = &self.config.ray_tracing;
        let program = &self.program;
        device.set_uniform(program, "plane_position", params.plane_position.into())?;
        device.set_uniform(program, "plane_normal", params.plane_normal.into())?;
        device.set_uniform(program, "light_intensity", params.light_intensity.into())?;
        device.set_uniform(program, "light_specular", params.light_specular.into())?;
        device.set_uniform(program, "light_position", params.light_position.into())?;
        device.set_uniform(program, "light_color", params.light_color.into())?;
        device.set_uniform(program, "ambient", params.ambient.into())?;
        device.set_uniform(program, "O", params.ray_origin.into())
    }
}

impl ShadowTechnique for RayTracing {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::RayTracing
    }

    fn init(
        &mut self,
        device: &mut dyn GraphicsDevice,
        mesh: &Mesh,
        camera: SharedCamera,
        lights: Vec<SharedLight>,
    ) -> Result<()> {
        self.terminate();
        let scene = BoundScene::bind(device, "ray tracing", mesh, camera, lights)?;

        let quad = device.create_buffer_init(
            BufferUsage::Vertex,
            BufferFormat::R32G32_SFLOAT,
            bytemuck::cast_slice(&FULL_SCREEN_QUAD),
        )?;
        device.set_attribute(&self.program, "a_position", &quad)?;
        self.upload_parameters(device)?;

        engine_debug!("shadowlab::RayTracing", "Initialized full-screen quad");
        self.quad = Some(quad);
        self.scene = Some(scene);
        Ok(())
    }

    fn update(&mut self, _device: &mut dyn GraphicsDevice) -> Result<()> {
        Ok(())
    }

    fn terminate(&mut self) {
        self.quad = None;
        if self.scene.take().is_some() {
            engine_debug!("shadowlab::RayTracing", "Terminated");
        }
    }

    fn is_active(&self) -> bool {
        self.scene.is_some()
    }
}

#[cfg(test)]
#[path = "ray_tracing_tests.rs"]
mod tests;
