/// Self-shadowing - single pass lit by the first light through the normal
/// matrix

use std::sync::Arc;
use glam::Mat4;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, Program, RenderState, PrimitiveTopology};
use crate::scene::{Mesh, SharedCamera, SharedLight};
use crate::compositor::{transforms, FrameSnapshot};
use crate::technique::{shaders, BoundScene, ShadowTechnique, TechniqueKind};
use crate::{engine_debug, engine_trace, engine_warn};

pub struct SelfShadow {
    config: RenderConfig,
    program: Arc<dyn Program>,
    projection: Mat4,
    scene: Option<BoundScene>,
}

impl SelfShadow {
    pub fn new(device: &mut dyn GraphicsDevice, config: &RenderConfig) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            program: device.create_program(shaders::self_shadow())?,
            projection: config.scene_projection.matrix(),
            scene: None,
        })
    }

    fn upload_light(&self, device: &mut dyn GraphicsDevice, snapshot: &FrameSnapshot) -> Result<()> {
        let light = snapshot
            .lights
            .first()
            .ok_or_else(|| Error::InitializationFailed("self shadow without lights".to_string()))?;
        device.set_uniform(&self.program, "u_light_intensity", light.intensity.into())?;
        device.set_uniform(&self.program, "u_light_position", light.position.into())
    }
}

/// Normal matrix for `view * model`, identity when it cannot be inverted
fn normal_or_identity(view: Mat4, model: Mat4) -> Mat4 {
    transforms::normal_matrix(view, model).unwrap_or_else(|| {
        engine_warn!("shadowlab::SelfShadow", "Singular model-view matrix, using identity normal matrix");
        Mat4::IDENTITY
    })
}

impl ShadowTechnique for SelfShadow {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::SelfShadow
    }

    fn init(
        &mut self,
        device: &mut dyn GraphicsDevice,
        mesh: &Mesh,
        camera: SharedCamera,
        lights: Vec<SharedLight>,
    ) -> Result<()> {
        self.terminate();
        let scene = BoundScene::bind(device, "self shadow", mesh, camera, lights)?;
        self.upload_light(device, &scene.snapshot()?)?;
        scene.mesh.bind(device, &self.program, true)?;
        engine_debug!("shadowlab::SelfShadow", "Initialized with {} indices", scene.mesh.index_count());
        self.scene = Some(scene);
        Ok(())
    }

    fn update(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        let Some(scene) = &self.scene else {
            return Ok(());
        };
        let snapshot = scene.snapshot()?;
        let model = snapshot.model();
        let view = snapshot.view(self.config.view_offset);
        let normal = normal_or_identity(view, model);
        engine_trace!("shadowlab::SelfShadow", "Frame at zoom {}", snapshot.camera.zoom);

        device.set_render_state(&RenderState::scene())?;
        device.set_uniform(&self.program, "u_normal", normal.into())?;
        self.upload_light(device, &snapshot)?;
        device.set_uniform(&self.program, "u_model", model.into())?;
        device.set_uniform(&self.program, "u_view", view.into())?;
        device.set_uniform(&self.program, "u_projection", self.projection.into())?;
        device.set_uniform(&self.program, "u_color", self.config.default_color.into())?;
        device.draw(&self.program, PrimitiveTopology::Triangles, &scene.mesh.indices)
    }

    fn terminate(&mut self) {
        if self.scene.take().is_some() {
            engine_debug!("shadowlab::SelfShadow", "Terminated");
        }
    }

    fn is_active(&self) -> bool {
        self.scene.is_some()
    }
}

#[cfg(test)]
#[path = "self_shadow_tests.rs"]
mod tests;
