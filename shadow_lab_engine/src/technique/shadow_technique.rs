/// ShadowTechnique trait - lifecycle shared by every shadow algorithm
///
/// A technique compiles its programs once at construction. `init` binds a
/// scene (geometry, camera, lights) and allocates per-scene GPU state,
/// `update` renders one frame, `terminate` releases the scene. A terminated
/// technique can be initialized again.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::graphics_device::GraphicsDevice;
use crate::scene::{Mesh, SharedCamera, SharedLight};
use crate::technique::{ShadowMap, RayTracing, NoShadow, SelfShadow, ShadowVolume};

/// Closed set of shadow algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechniqueKind {
    ShadowMapping,
    RayTracing,
    NoShadow,
    SelfShadow,
    /// Stencil state machine, passes not executed
    ShadowVolume,
}

impl TechniqueKind {
    pub const ALL: [TechniqueKind; 5] = [
        TechniqueKind::ShadowMapping,
        TechniqueKind::RayTracing,
        TechniqueKind::NoShadow,
        TechniqueKind::SelfShadow,
        TechniqueKind::ShadowVolume,
    ];

    /// Display name, as offered by the technique selector
    pub fn name(&self) -> &'static str {
        match self {
            TechniqueKind::ShadowMapping => "Shadow Mapping",
            TechniqueKind::RayTracing => "Ray Tracing",
            TechniqueKind::NoShadow => "No Shadow",
            TechniqueKind::SelfShadow => "Self Shadow",
            TechniqueKind::ShadowVolume => "Shadow Volume",
        }
    }
}

/// Shadow rendering technique
pub trait ShadowTechnique: Send + Sync {
    /// Which algorithm this is
    fn kind(&self) -> TechniqueKind;

    /// Upload `mesh`, keep the camera and light references and allocate
    /// per-scene resources. Re-initializing replaces the previous scene.
    ///
    /// Fails with `InitializationFailed` when `lights` is empty.
    fn init(
        &mut self,
        device: &mut dyn GraphicsDevice,
        mesh: &Mesh,
        camera: SharedCamera,
        lights: Vec<SharedLight>,
    ) -> Result<()>;

    /// Render one frame. Does nothing while inactive.
    fn update(&mut self, device: &mut dyn GraphicsDevice) -> Result<()>;

    /// Release geometry, camera and lights. Programs are kept.
    fn terminate(&mut self);

    /// Whether `init` succeeded and `terminate` has not been called since
    fn is_active(&self) -> bool;
}

/// Build the technique for `kind`, compiling its programs on `device`
pub fn create_technique(
    kind: TechniqueKind,
    device: &mut dyn GraphicsDevice,
    config: &RenderConfig,
) -> Result<Box<dyn ShadowTechnique>> {
    let technique: Box<dyn ShadowTechnique> = match kind {
        TechniqueKind::ShadowMapping => Box::new(ShadowMap::new(device, config)?),
        TechniqueKind::RayTracing => Box::new(RayTracing::new(device, config)?),
        TechniqueKind::NoShadow => Box::new(NoShadow::new(device, config)?),
        TechniqueKind::SelfShadow => Box::new(SelfShadow::new(device, config)?),
        TechniqueKind::ShadowVolume => Box::new(ShadowVolume::new(device, config)?),
    };
    Ok(technique)
}
