/// Shadow mapping - one depth pass per light slot, then a lit pass
///
/// Each light slot renders the scene depth from the light into its own
/// RGBA32F target. The lit pass samples every slot's map through the bias
/// matrix. The shader declares a fixed number of slots; slots without a
/// light of their own reuse the first light and its map.

use std::sync::Arc;
use glam::{Mat4, Vec3};
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsDevice, Program, Texture, TextureDesc, TextureFormat, TextureUsage,
    Framebuffer, FramebufferDesc, FramebufferScope, RenderState, ClearFlags,
    PrimitiveTopology, Viewport,
};
use crate::scene::{Mesh, SharedCamera, SharedLight};
use crate::compositor::{transforms, FrameSnapshot};
use crate::technique::{shaders, BoundScene, ShadowTechnique, TechniqueKind};
use crate::{engine_debug, engine_trace};

/// Offscreen target holding one light's shadow map
pub struct ShadowTarget {
    pub texture: Arc<dyn Texture>,
    pub framebuffer: Arc<dyn Framebuffer>,
}

/// Matrices of one light slot's depth pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthMatrices {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

pub struct ShadowMap {
    config: RenderConfig,
    program: Arc<dyn Program>,
    depth_program: Arc<dyn Program>,
    lit_projection: Mat4,
    shadow_projection: Mat4,
    scene: Option<BoundScene>,
    targets: Vec<ShadowTarget>,
}

impl ShadowMap {
    /// Compile the lit and depth programs
    pub fn new(device: &mut dyn GraphicsDevice, config: &RenderConfig) -> Result<Self> {
        let program = device.create_program(shaders::shadow_map())?;
        let depth_program = device.create_program(shaders::shadow_depth())?;
        Ok(Self {
            config: config.clone(),
            program,
            depth_program,
            lit_projection: config.lit_projection.matrix(),
            shadow_projection: config.shadow_projection.matrix(),
            scene: None,
            targets: Vec::new(),
        })
    }

    /// Allocated shadow map targets, one per light up to the slot count
    pub fn targets(&self) -> &[ShadowTarget] {
        &self.targets
    }

    /// Depth pass matrices for a light at `light_position`
    pub fn depth_matrices(&self, light_position: Vec3) -> DepthMatrices {
        DepthMatrices {
            model: Mat4::IDENTITY,
            view: transforms::look_at(light_position, self.config.shadow_target, Vec3::Y),
            projection: self.shadow_projection,
        }
    }

    fn allocate_target(&self, device: &mut dyn GraphicsDevice, slot: usize) -> Result<ShadowTarget> {
        let label = format!("shadow_map_{}", slot);
        let (width, height) = (self.config.shadow_map_width, self.config.shadow_map_height);
        let texture = device.create_texture(TextureDesc {
            label: label.clone(),
            width,
            height,
            format: TextureFormat::R32G32B32A32_SFLOAT,
            usage: TextureUsage::SampledAndRenderTarget,
            data: None,
        })?;
        let framebuffer = device.create_framebuffer(FramebufferDesc {
            label,
            width,
            height,
            color_attachment: Some(texture.clone()),
            depth: true,
            stencil: false,
        })?;
        Ok(ShadowTarget { texture, framebuffer })
    }

    fn depth_pass(
        &self,
        device: &mut dyn GraphicsDevice,
        scene: &BoundScene,
        target: &ShadowTarget,
        matrices: &DepthMatrices,
    ) -> Result<()> {
        let mut scope = FramebufferScope::enter(device, &target.framebuffer)?;
        let device = scope.device();
        device.set_viewport(Viewport::sized(target.framebuffer.width(), target.framebuffer.height()))?;
        device.set_render_state(&RenderState::default())?;
        device.clear(ClearFlags::COLOR | ClearFlags::DEPTH, [1.0, 1.0, 1.0, 1.0])?;
        device.set_uniform(&self.depth_program, "u_projection", matrices.projection.into())?;
        device.set_uniform(&self.depth_program, "u_model", matrices.model.into())?;
        device.set_uniform(&self.depth_program, "u_view", matrices.view.into())?;
        device.draw(&self.depth_program, PrimitiveTopology::Triangles, &scene.mesh.indices)
    }

    fn lit_pass(
        &self,
        device: &mut dyn GraphicsDevice,
        scene: &BoundScene,
        snapshot: &FrameSnapshot,
    ) -> Result<()> {
        let program = &self.program;
        device.set_viewport(Viewport::sized(self.config.screen_width, self.config.screen_height))?;
        device.set_render_state(&RenderState::scene())?;
        device.set_uniform(program, "u_model", snapshot.model().into())?;
        device.set_uniform(program, "u_view", snapshot.view(self.config.view_offset).into())?;
        device.set_uniform(program, "u_projection", self.lit_projection.into())?;
        device.set_uniform(program, "u_bias_matrix", transforms::bias_matrix().into())?;
        device.set_uniform(program, "u_color", self.config.default_color.into())?;

        for slot in 0..self.config.shadow_light_slots {
            let n = slot + 1;
            let light = snapshot
                .light_or_first(slot)
                .ok_or_else(|| Error::InitializationFailed("shadow map without lights".to_string()))?;
            let target = self.target_or_first(slot)?;
            device.set_uniform(program, &format!("u_shadow_map_{}", n), target.texture.clone().into())?;
            device.set_uniform(program, &format!("u_light_intensity_{}", n), light.intensity.into())?;
            device.set_uniform(program, &format!("u_light_position_{}", n), light.position.into())?;
        }
        device.set_uniform(program, "u_light_number", (snapshot.lights.len() as f32).into())?;
        device.draw(program, PrimitiveTopology::Triangles, &scene.mesh.indices)
    }

    /// Corner view of the first shadow map, drawn after the lit pass
    fn preview_pass(&self, device: &mut dyn GraphicsDevice, scene: &BoundScene) -> Result<()> {
        device.set_viewport(Viewport::sized(self.config.preview_width, self.config.preview_height))?;
        device.draw(&self.depth_program, PrimitiveTopology::Triangles, &scene.mesh.indices)?;
        device.set_viewport(Viewport::sized(self.config.screen_width, self.config.screen_height))
    }

    fn target_or_first(&self, slot: usize) -> Result<&ShadowTarget> {
        self.targets
            .get(slot)
            .or_else(|| self.targets.first())
            .ok_or_else(|| Error::InvalidResource("no shadow map allocated".to_string()))
    }
}

impl ShadowTechnique for ShadowMap {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::ShadowMapping
    }

    fn init(
        &mut self,
        device: &mut dyn GraphicsDevice,
        mesh: &Mesh,
        camera: SharedCamera,
        lights: Vec<SharedLight>,
    ) -> Result<()> {
        self.terminate();
        let scene = BoundScene::bind(device, "shadow map", mesh, camera, lights)?;
        scene.mesh.bind(device, &self.program, true)?;
        scene.mesh.bind(device, &self.depth_program, false)?;

        let target_count = scene.lights.len().min(self.config.shadow_light_slots);
        let targets = (0..target_count)
            .map(|slot| self.allocate_target(device, slot))
            .collect::<Result<Vec<_>>>()?;

        engine_debug!("shadowlab::ShadowMap",
            "Initialized with {} light(s), {} shadow map(s) of {}x{}",
            scene.lights.len(), targets.len(),
            self.config.shadow_map_width, self.config.shadow_map_height);

        self.targets = targets;
        self.scene = Some(scene);
        Ok(())
    }

    fn update(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        let Some(scene) = &self.scene else {
            return Ok(());
        };
        let snapshot = scene.snapshot()?;

        for slot in 0..self.config.shadow_light_slots {
            let n = slot + 1;
            let light = snapshot
                .light_or_first(slot)
                .ok_or_else(|| Error::InitializationFailed("shadow map without lights".to_string()))?;
            let matrices = self.depth_matrices(light.position);
            device.set_uniform(&self.program, &format!("u_depth_model_{}", n), matrices.model.into())?;
            device.set_uniform(&self.program, &format!("u_depth_view_{}", n), matrices.view.into())?;
            device.set_uniform(&self.program, &format!("u_depth_projection_{}", n), matrices.projection.into())?;

            if let Some(target) = self.targets.get(slot) {
                engine_trace!("shadowlab::ShadowMap", "Depth pass for slot {} into '{}'", n, target.framebuffer.label());
                self.depth_pass(device, scene, target, &matrices)?;
            }
        }

        self.lit_pass(device, scene, &snapshot)?;
        if self.config.shadow_map_preview {
            self.preview_pass(device, scene)?;
        }
        Ok(())
    }

    fn terminate(&mut self) {
        if self.scene.take().is_some() {
            engine_debug!("shadowlab::ShadowMap", "Terminated");
        }
        self.targets.clear();
    }

    fn is_active(&self) -> bool {
        self.scene.is_some()
    }
}

#[cfg(test)]
#[path = "shadow_map_tests.rs"]
mod tests;
