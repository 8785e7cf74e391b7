/// Frame compositor - per-frame matrices, state snapshots and technique
/// orchestration

pub mod transforms;
pub mod frame_snapshot;
pub mod frame_compositor;

pub use frame_snapshot::{FrameSnapshot, CameraState, LightState};
pub use frame_compositor::FrameCompositor;
