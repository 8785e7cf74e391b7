/// Shadow techniques - five interchangeable algorithms behind one trait

pub mod shadow_technique;
pub mod gpu_mesh;
pub mod shaders;
pub mod shadow_map;
pub mod ray_tracing;
pub mod no_shadow;
pub mod self_shadow;
pub mod shadow_volume;

pub use shadow_technique::{ShadowTechnique, TechniqueKind, create_technique};
pub use gpu_mesh::{GpuMesh, BoundScene};
pub use shadow_map::{ShadowMap, ShadowTarget, DepthMatrices};
pub use ray_tracing::RayTracing;
pub use no_shadow::NoShadow;
pub use self_shadow::SelfShadow;
pub use shadow_volume::{ShadowVolume, VolumePass};

#[cfg(test)]
#[path = "shadow_technique_tests.rs"]
mod tests;
