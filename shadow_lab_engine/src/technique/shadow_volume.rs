/// Shadow volumes - stencil-counted shadows, three passes
///
/// 1. Scene rendered unlit into an offscreen color+depth+stencil target.
/// 2. Shadow volumes drawn with color and depth writes off: front faces
///    increment the stencil where the depth test passes, back faces
///    decrement it.
/// 3. Scene redrawn lit where the stencil equals zero.
///
/// The passes and their render states are modelled by `VolumePass`. Frames
/// currently only upload the matrices and the light; nothing is drawn.

use std::sync::Arc;
use glam::Mat4;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsDevice, Program, Framebuffer, FramebufferDesc, TextureDesc, TextureFormat,
    TextureUsage, RenderState, WriteMask, StencilState, StencilOp, CompareFunc, CullMode,
};
use crate::scene::{Mesh, SharedCamera, SharedLight};
use crate::technique::{shaders, BoundScene, ShadowTechnique, TechniqueKind};
use crate::{engine_debug, engine_trace};

/// One step of the stencil shadow algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumePass {
    /// Scene with lights off, fills depth
    SceneUnlit,
    /// Front faces of the volumes, stencil incremented on depth pass
    VolumeFrontFaces,
    /// Back faces of the volumes, stencil decremented on depth pass
    VolumeBackFaces,
    /// Scene lit where the stencil is zero
    SceneLit,
}

impl VolumePass {
    pub const FIRST: VolumePass = VolumePass::SceneUnlit;

    /// Following pass, `None` after the lit pass
    pub fn next(&self) -> Option<VolumePass> {
        match self {
            VolumePass::SceneUnlit => Some(VolumePass::VolumeFrontFaces),
            VolumePass::VolumeFrontFaces => Some(VolumePass::VolumeBackFaces),
            VolumePass::VolumeBackFaces => Some(VolumePass::SceneLit),
            VolumePass::SceneLit => None,
        }
    }

    /// Every pass of one frame, in order
    pub fn sequence() -> impl Iterator<Item = VolumePass> {
        std::iter::successors(Some(Self::FIRST), |pass| pass.next())
    }

    pub fn render_state(&self) -> RenderState {
        let volume = |cull, pass| RenderState {
            write_mask: WriteMask::STENCIL,
            depth_test: true,
            depth_compare: CompareFunc::Less,
            stencil: Some(StencilState {
                compare: CompareFunc::Always,
                reference: 0,
                fail: StencilOp::Keep,
                depth_fail: StencilOp::Keep,
                pass,
            }),
            cull,
            polygon_offset: None,
            blend: false,
        };

        match self {
            VolumePass::SceneUnlit => RenderState::default(),
            VolumePass::VolumeFrontFaces => volume(CullMode::Back, StencilOp::IncrementWrap),
            VolumePass::VolumeBackFaces => volume(CullMode::Front, StencilOp::DecrementWrap),
            VolumePass::SceneLit => RenderState {
                depth_compare: CompareFunc::LessOrEqual,
                stencil: Some(StencilState {
                    compare: CompareFunc::Equal,
                    reference: 0,
                    fail: StencilOp::Keep,
                    depth_fail: StencilOp::Keep,
                    pass: StencilOp::Keep,
                }),
                ..RenderState::default()
            },
        }
    }
}

pub struct ShadowVolume {
    config: RenderConfig,
    program: Arc<dyn Program>,
    projection: Mat4,
    scene: Option<BoundScene>,
    target: Option<Arc<dyn Framebuffer>>,
}

impl ShadowVolume {
    pub fn new(device: &mut dyn GraphicsDevice, config: &RenderConfig) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            program: device.create_program(shaders::shadow_volume())?,
            projection: config.scene_projection.matrix(),
            scene: None,
            target: None,
        })
    }

    /// Offscreen target of the unlit pass
    pub fn target(&self) -> Option<&Arc<dyn Framebuffer>> {
        self.target.as_ref()
    }
}

impl ShadowTechnique for ShadowVolume {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::ShadowVolume
    }

    fn init(
        &mut self,
        device: &mut dyn GraphicsDevice,
        mesh: &Mesh,
        camera: SharedCamera,
        lights: Vec<SharedLight>,
    ) -> Result<()> {
        self.terminate();
        let scene = BoundScene::bind(device, "shadow volume", mesh, camera, lights)?;
        scene.mesh.bind(device, &self.program, false)?;

        let (width, height) = (self.config.screen_width, self.config.screen_height);
        let color = device.create_texture(TextureDesc {
            label: "shadow_volume_scene".to_string(),
            width,
            height,
            format: TextureFormat::R8G8B8A8_UNORM,
            usage: TextureUsage::SampledAndRenderTarget,
            data: None,
        })?;
        let target = device.create_framebuffer(FramebufferDesc {
            label: "shadow_volume_scene".to_string(),
            width,
            height,
            color_attachment: Some(color),
            depth: true,
            stencil: true,
        })?;

        engine_debug!("shadowlab::ShadowVolume", "Initialized, stencil passes are not executed");
        self.target = Some(target);
        self.scene = Some(scene);
        Ok(())
    }

    // TODO: extrude silhouette edges away from the light into volume geometry
    // and run VolumePass::sequence() against the offscreen target.
    fn update(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        let Some(scene) = &self.scene else {
            return Ok(());
        };
        let snapshot = scene.snapshot()?;
        let light = snapshot
            .lights
            .first()
            .ok_or_else(|| Error::InitializationFailed("shadow volume without lights".to_string()))?;
        engine_trace!("shadowlab::ShadowVolume", "Frame at zoom {}", snapshot.camera.zoom);

        device.set_uniform(&self.program, "u_model", snapshot.model().into())?;
        device.set_uniform(&self.program, "u_view", snapshot.view(self.config.view_offset).into())?;
        device.set_uniform(&self.program, "u_projection", self.projection.into())?;
        device.set_uniform(&self.program, "u_light_color", light.color.into())?;
        device.set_uniform(&self.program, "u_light_position", light.position.into())
    }

    fn terminate(&mut self) {
        self.target = None;
        if self.scene.take().is_some() {
            engine_debug!("shadowlab::ShadowVolume", "Terminated");
        }
    }

    fn is_active(&self) -> bool {
        self.scene.is_some()
    }
}

#[cfg(test)]
#[path = "shadow_volume_tests.rs"]
mod tests;
