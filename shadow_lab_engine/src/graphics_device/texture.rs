/// Texture trait, texture descriptor, and texture info

/// Texture format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    R8G8B8A8_UNORM,
    /// Four float channels, used for shadow maps
    R32G32B32A32_SFLOAT,
    D32_FLOAT,
    D24_UNORM_S8_UINT,
}

impl TextureFormat {
    /// Bytes per texel
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormat::R8G8B8A8_UNORM => 4,
            TextureFormat::R32G32B32A32_SFLOAT => 16,
            TextureFormat::D32_FLOAT => 4,
            TextureFormat::D24_UNORM_S8_UINT => 4,
        }
    }

    /// Whether this is a depth (or depth/stencil) format
    pub fn is_depth(&self) -> bool {
        matches!(self, TextureFormat::D32_FLOAT | TextureFormat::D24_UNORM_S8_UINT)
    }
}

/// Texture usage flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureUsage {
    /// Texture can be sampled in shaders
    Sampled,
    /// Texture can be used as render target
    RenderTarget,
    /// Texture can be used for both
    SampledAndRenderTarget,
    /// Texture can be used as depth/stencil attachment
    DepthStencil,
}

/// Descriptor for creating a texture
#[derive(Debug, Clone)]
pub struct TextureDesc {
    /// Debug label
    pub label: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TextureUsage,
    /// Optional initial data
    pub data: Option<Vec<u8>>,
}

impl TextureDesc {
    /// Size of the texel storage in bytes
    pub fn byte_size(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.format.bytes_per_pixel() as u64
    }
}

/// Read-only properties of a created texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    pub label: String,
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub usage: TextureUsage,
}

/// Texture resource trait
pub trait Texture: Send + Sync {
    /// Properties of the texture
    fn info(&self) -> &TextureInfo;
}
