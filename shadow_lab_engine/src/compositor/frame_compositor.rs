/// FrameCompositor - owns the scene state and drives the active technique
///
/// Every technique is built once, up front, so switching techniques never
/// recompiles programs. Only one technique is active at a time; selecting a
/// new one terminates the previous one first.

use std::sync::{Arc, RwLock};
use glam::Vec3;
use rustc_hash::FxHashMap;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, ClearFlags};
use crate::scene::{merge_meshes, Camera, Light, Mesh, SharedCamera, SharedLight};
use crate::technique::{create_technique, ShadowTechnique, TechniqueKind};
use crate::{engine_debug, engine_info, engine_trace};

pub struct FrameCompositor {
    config: RenderConfig,
    techniques: FxHashMap<TechniqueKind, Box<dyn ShadowTechnique>>,
    active: Option<TechniqueKind>,
    camera: SharedCamera,
    lights: Vec<SharedLight>,
    scene: Mesh,
}

impl FrameCompositor {
    /// Build every technique on `device`, with a default camera, one
    /// default light and a floor-only scene
    pub fn new(device: &mut dyn GraphicsDevice, config: RenderConfig) -> Result<Self> {
        let mut techniques = FxHashMap::default();
        for kind in TechniqueKind::ALL {
            techniques.insert(kind, create_technique(kind, device, &config)?);
        }
        engine_debug!("shadowlab::Compositor", "Built {} techniques", techniques.len());

        Ok(Self {
            config,
            techniques,
            active: None,
            camera: Arc::new(RwLock::new(Camera::new())),
            lights: vec![Arc::new(RwLock::new(Light::new()))],
            scene: Mesh::floor(),
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Camera handle for the input layer
    pub fn camera(&self) -> SharedCamera {
        self.camera.clone()
    }

    pub fn lights(&self) -> &[SharedLight] {
        &self.lights
    }

    /// Merged scene geometry
    pub fn scene(&self) -> &Mesh {
        &self.scene
    }

    pub fn active_technique(&self) -> Option<TechniqueKind> {
        self.active
    }

    /// Add a light; takes effect at the next technique initialization
    pub fn add_light(&mut self, light: Light) -> SharedLight {
        let light = Arc::new(RwLock::new(light));
        self.lights.push(light.clone());
        light
    }

    /// Replace the scene with the floor followed by `meshes`, merged into
    /// one mesh, and re-initialize the active technique with it
    pub fn load_scene(&mut self, device: &mut dyn GraphicsDevice, meshes: &[Mesh]) -> Result<()> {
        let mut parts = Vec::with_capacity(meshes.len() + 1);
        parts.push(Mesh::floor());
        parts.extend_from_slice(meshes);
        let scene = merge_meshes(&parts);
        scene.validate()?;

        engine_info!("shadowlab::Compositor",
            "Scene loaded: {} object(s), {} vertices, {} triangles",
            meshes.len(), scene.vertex_count(), scene.triangle_count());
        self.scene = scene;

        match self.active {
            Some(kind) => self.select_technique(device, kind),
            None => Ok(()),
        }
    }

    /// Terminate the active technique and initialize `kind` with the scene
    pub fn select_technique(&mut self, device: &mut dyn GraphicsDevice, kind: TechniqueKind) -> Result<()> {
        if let Some(previous) = self.active.take() {
            if let Some(technique) = self.techniques.get_mut(&previous) {
                technique.terminate();
            }
        }

        let technique = self
            .techniques
            .get_mut(&kind)
            .ok_or_else(|| Error::InvalidResource(format!("technique '{}' not built", kind.name())))?;
        technique.init(device, &self.scene, self.camera.clone(), self.lights.clone())?;
        self.active = Some(kind);

        engine_info!("shadowlab::Compositor", "Technique selected: {}", kind.name());
        Ok(())
    }

    /// Clear the screen and let the active technique render
    pub fn render_frame(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        device.clear(ClearFlags::COLOR | ClearFlags::DEPTH, self.config.clear_color)?;
        let Some(kind) = self.active else {
            return Ok(());
        };
        engine_trace!("shadowlab::Compositor", "Frame with {}", kind.name());
        match self.techniques.get_mut(&kind) {
            Some(technique) => technique.update(device),
            None => Ok(()),
        }
    }

    /// Move the primary light by per-axis percentages of its intervals
    pub fn update_light_ratio(&self, percent: Vec3) -> Result<()> {
        let light = self
            .lights
            .first()
            .ok_or_else(|| Error::InvalidResource("no light to move".to_string()))?;
        let mut light = light
            .write()
            .map_err(|_| Error::BackendError("light lock poisoned".to_string()))?;
        light.set_lights_ratio(percent);
        engine_trace!("shadowlab::Compositor", "Primary light moved to {:?}", light.position());
        Ok(())
    }

    /// Terminate every technique
    pub fn shutdown(&mut self) {
        for technique in self.techniques.values_mut() {
            technique.terminate();
        }
        self.active = None;
        engine_debug!("shadowlab::Compositor", "Shut down");
    }
}

#[cfg(test)]
#[path = "frame_compositor_tests.rs"]
mod tests;
