/// Render configuration - every constant the techniques and compositor use
///
/// Built once and handed to the compositor and techniques at construction.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Vertical field of view in degrees
    Perspective { fov_y_degrees: f32, aspect: f32, near: f32, far: f32 },
    Orthographic { left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32 },
}

impl Projection {
    /// OpenGL clip-space matrix (depth in [-1, 1])
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Projection::Perspective { fov_y_degrees, aspect, near, far } => {
                Mat4::perspective_rh_gl(fov_y_degrees.to_radians(), aspect, near, far)
            }
            Projection::Orthographic { left, right, bottom, top, near, far } => {
                Mat4::orthographic_rh_gl(left, right, bottom, top, near, far)
            }
        }
    }
}

/// Analytic scene parameters of the ray tracing technique
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayTracingParams {
    pub plane_position: Vec3,
    pub plane_normal: Vec3,
    pub light_intensity: f32,
    /// (specular strength, shininess)
    pub light_specular: Vec2,
    pub light_position: Vec3,
    pub light_color: Vec3,
    pub ambient: f32,
    /// Ray origin
    pub ray_origin: Vec3,
}

impl Default for RayTracingParams {
    fn default() -> Self {
        Self {
            plane_position: Vec3::new(0.0, -0.5, 0.0),
            plane_normal: Vec3::Y,
            light_intensity: 1.0,
            light_specular: Vec2::new(1.0, 50.0),
            light_position: Vec3::new(5.0, 5.0, -10.0),
            light_color: Vec3::ONE,
            ambient: 0.05,
            ray_origin: Vec3::new(0.0, 0.0, -1.0),
        }
    }
}

/// Render configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Flat color of every object (RGBA)
    pub default_color: Vec4,
    /// Color the screen is cleared to each frame (RGBA)
    pub clear_color: [f32; 4],
    /// Screen resolution, restored after offscreen passes
    pub screen_width: u32,
    pub screen_height: u32,
    /// Shadow map resolution
    pub shadow_map_width: u32,
    pub shadow_map_height: u32,
    /// Light slots the shadow mapping shader declares
    pub shadow_light_slots: usize,
    /// Point the shadow-casting lights look at
    pub shadow_target: Vec3,
    /// Camera eye offset; z is replaced by the camera zoom
    pub view_offset: Vec3,
    /// Projection of the shadow mapping lit pass
    pub lit_projection: Projection,
    /// Projection of the single-pass techniques
    pub scene_projection: Projection,
    /// Projection of the shadow depth pass
    pub shadow_projection: Projection,
    /// Draw the first shadow map in a small corner viewport after the lit pass
    pub shadow_map_preview: bool,
    /// Corner viewport size for the preview
    pub preview_width: u32,
    pub preview_height: u32,
    /// Ray tracing scene
    pub ray_tracing: RayTracingParams,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_color: Vec4::new(0.7, 0.7, 0.7, 1.0),
            clear_color: [0.30, 0.30, 0.35, 1.00],
            screen_width: 1366,
            screen_height: 768,
            shadow_map_width: 1366,
            shadow_map_height: 768,
            shadow_light_slots: 2,
            shadow_target: Vec3::new(0.0, 2.0, 0.0),
            view_offset: Vec3::new(0.0, -4.0, 0.0),
            lit_projection: Projection::Perspective {
                fov_y_degrees: 60.0,
                aspect: 16.0 / 9.0,
                near: 0.1,
                far: 50.0,
            },
            scene_projection: Projection::Perspective {
                fov_y_degrees: 60.0,
                aspect: 4.0 / 3.0,
                near: 0.1,
                far: 100.0,
            },
            shadow_projection: Projection::Orthographic {
                left: -5.0,
                right: 5.0,
                bottom: -5.0,
                top: 5.0,
                near: 10.0,
                far: 50.0,
            },
            shadow_map_preview: false,
            preview_width: 228,
            preview_height: 128,
            ray_tracing: RayTracingParams::default(),
        }
    }
}
