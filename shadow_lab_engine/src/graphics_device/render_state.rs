/// Fixed-function render state: write masks, depth test, stencil, culling

use bitflags::bitflags;

bitflags! {
    /// Which attachments a draw may write to
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WriteMask: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
        const STENCIL = 1 << 2;
    }
}

bitflags! {
    /// Attachments reset by `GraphicsDevice::clear()`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
        const STENCIL = 1 << 2;
    }
}

/// Comparison function for depth and stencil tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareFunc {
    Never,
    Less,
    LessOrEqual,
    Equal,
    NotEqual,
    Always,
}

/// Stencil buffer operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StencilOp {
    Keep,
    Zero,
    Replace,
    IncrementWrap,
    DecrementWrap,
}

/// Face culling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullMode {
    None,
    Front,
    Back,
}

/// Stencil test configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StencilState {
    pub compare: CompareFunc,
    pub reference: u32,
    /// Operation when the stencil test fails
    pub fail: StencilOp,
    /// Operation when the stencil test passes and the depth test fails
    pub depth_fail: StencilOp,
    /// Operation when both tests pass
    pub pass: StencilOp,
}

/// Complete render state applied before a draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub write_mask: WriteMask,
    pub depth_test: bool,
    pub depth_compare: CompareFunc,
    /// `None` disables the stencil test
    pub stencil: Option<StencilState>,
    pub cull: CullMode,
    /// Polygon offset (factor, units)
    pub polygon_offset: Option<(f32, f32)>,
    /// Alpha blending (src_alpha, one_minus_src_alpha)
    pub blend: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            write_mask: WriteMask::COLOR | WriteMask::DEPTH,
            depth_test: true,
            depth_compare: CompareFunc::Less,
            stencil: None,
            cull: CullMode::None,
            polygon_offset: None,
            blend: false,
        }
    }
}

impl RenderState {
    /// State used for regular scene rendering: depth tested, polygon
    /// offset (1, 1), alpha blended
    pub fn scene() -> Self {
        Self {
            polygon_offset: Some((1.0, 1.0)),
            blend: true,
            ..Self::default()
        }
    }
}
