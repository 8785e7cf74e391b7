/// Graphics device module - resource binding layer consumed by the techniques

pub mod graphics_device;
pub mod buffer;
pub mod texture;
pub mod program;
pub mod frame_buffer;
pub mod render_state;

pub use graphics_device::*;
pub use buffer::*;
pub use texture::*;
pub use program::*;
pub use frame_buffer::*;
pub use render_state::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
