/// No-shadow baseline - flat colored scene, single pass

use std::sync::Arc;
use glam::Mat4;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::graphics_device::{GraphicsDevice, Program, RenderState, PrimitiveTopology};
use crate::scene::{Mesh, SharedCamera, SharedLight};
use crate::technique::{shaders, BoundScene, ShadowTechnique, TechniqueKind};
use crate::{engine_debug, engine_trace};

pub struct NoShadow {
    config: RenderConfig,
    program: Arc<dyn Program>,
    projection: Mat4,
    scene: Option<BoundScene>,
}

impl NoShadow {
    pub fn new(device: &mut dyn GraphicsDevice, config: &RenderConfig) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            program: device.create_program(shaders::no_shadow())?,
            projection: config.scene_projection.matrix(),
            scene: None,
        })
    }
}

impl ShadowTechnique for NoShadow {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::NoShadow
    }

    fn init(
        &mut self,
        device: &mut dyn GraphicsDevice,
        mesh: &Mesh,
        camera: SharedCamera,
        lights: Vec<SharedLight>,
    ) -> Result<()> {
        self.terminate();
        let scene = BoundScene::bind(device, "no shadow", mesh, camera, lights)?;
        scene.mesh.bind(device, &self.program, false)?;
        engine_debug!("shadowlab::NoShadow", "Initialized with {} indices", scene.mesh.index_count());
        self.scene = Some(scene);
        Ok(())
    }

    fn update(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        let Some(scene) = &self.scene else {
            return Ok(());
        };
        let snapshot = scene.snapshot()?;
        engine_trace!("shadowlab::NoShadow", "Frame at zoom {}", snapshot.camera.zoom);

        device.set_render_state(&RenderState::scene())?;
        device.set_uniform(&self.program, "u_model", snapshot.model().into())?;
        device.set_uniform(&self.program, "u_view", snapshot.view(self.config.view_offset).into())?;
        device.set_uniform(&self.program, "u_projection", self.projection.into())?;
        device.set_uniform(&self.program, "u_color", self.config.default_color.into())?;
        device.draw(&self.program, PrimitiveTopology::Triangles, &scene.mesh.indices)
    }

    fn terminate(&mut self) {
        if self.scene.take().is_some() {
            engine_debug!("shadowlab::NoShadow", "Terminated");
        }
    }

    fn is_active(&self) -> bool {
        self.scene.is_some()
    }
}

#[cfg(test)]
#[path = "no_shadow_tests.rs"]
mod tests;
