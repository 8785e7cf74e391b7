/*!
# Shadow Lab Engine

Shadow rendering core of an educational shadow visualization tool.

A scene (merged mesh, orbit camera, lights) is rendered by one of five
interchangeable shadow techniques sharing an init / update / terminate
lifecycle. Techniques talk to the GPU only through the `GraphicsDevice`
trait, so backends (OpenGL, Vulkan, etc.) plug in from outside the crate.

## Architecture

- **GraphicsDevice**: Factory and command trait for programs, buffers, textures and framebuffers
- **ShadowTechnique**: Lifecycle trait implemented by ShadowMap, RayTracing, NoShadow, SelfShadow and ShadowVolume
- **FrameCompositor**: Owns camera, lights and scene mesh, drives the active technique
- **Mesh aggregation**: Merges parsed sub-meshes into one drawable mesh
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod graphics_device;
pub mod scene;
pub mod technique;
pub mod compositor;

// Main shadowlab namespace module
pub mod shadowlab {
    // Error types
    pub use crate::error::{Error, Result};

    // Global logging facility
    pub use crate::engine::Engine;

    // Render configuration
    pub use crate::config::{RenderConfig, Projection, RayTracingParams};

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, FilteredLogger};
    }

    // Graphics device sub-module
    pub mod render {
        pub use crate::graphics_device::*;
    }

    // Scene data sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Shadow techniques sub-module
    pub mod technique {
        pub use crate::technique::*;
    }

    // Frame compositor sub-module
    pub mod compositor {
        pub use crate::compositor::*;
    }
}

// Re-export math library at crate root
pub use glam;
