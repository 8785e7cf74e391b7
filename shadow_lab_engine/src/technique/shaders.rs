/// GLSL sources of the shadow techniques, embedded at compile time

use crate::graphics_device::ProgramDesc;

pub const SHADOW_DEPTH_VERT: &str = include_str!("../../shaders/shadow_depth.vert");
pub const SHADOW_DEPTH_FRAG: &str = include_str!("../../shaders/shadow_depth.frag");
pub const SHADOW_MAP_VERT: &str = include_str!("../../shaders/shadow_map.vert");
pub const SHADOW_MAP_FRAG: &str = include_str!("../../shaders/shadow_map.frag");
pub const NO_SHADOW_VERT: &str = include_str!("../../shaders/no_shadow.vert");
pub const NO_SHADOW_FRAG: &str = include_str!("../../shaders/no_shadow.frag");
pub const SELF_SHADOW_VERT: &str = include_str!("../../shaders/self_shadow.vert");
pub const SELF_SHADOW_FRAG: &str = include_str!("../../shaders/self_shadow.frag");
pub const RAY_TRACING_VERT: &str = include_str!("../../shaders/ray_tracing.vert");
pub const RAY_TRACING_FRAG: &str = include_str!("../../shaders/ray_tracing.frag");
pub const SHADOW_VOLUME_VERT: &str = include_str!("../../shaders/shadow_volume.vert");
pub const SHADOW_VOLUME_FRAG: &str = include_str!("../../shaders/shadow_volume.frag");

pub fn shadow_depth() -> ProgramDesc {
    ProgramDesc::new("shadow_depth", SHADOW_DEPTH_VERT, SHADOW_DEPTH_FRAG)
}

pub fn shadow_map() -> ProgramDesc {
    ProgramDesc::new("shadow_map", SHADOW_MAP_VERT, SHADOW_MAP_FRAG)
}

pub fn no_shadow() -> ProgramDesc {
    ProgramDesc::new("no_shadow", NO_SHADOW_VERT, NO_SHADOW_FRAG)
}

pub fn self_shadow() -> ProgramDesc {
    ProgramDesc::new("self_shadow", SELF_SHADOW_VERT, SELF_SHADOW_FRAG)
}

pub fn ray_tracing() -> ProgramDesc {
    ProgramDesc::new("ray_tracing", RAY_TRACING_VERT, RAY_TRACING_FRAG)
}

pub fn shadow_volume() -> ProgramDesc {
    ProgramDesc::new("shadow_volume", SHADOW_VOLUME_VERT, SHADOW_VOLUME_FRAG)
}
