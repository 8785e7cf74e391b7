/// Per-frame copy of camera and light state
///
/// Techniques take one snapshot at the start of `update` and compute every
/// matrix from it, so an input-layer mutation can never land between two
/// passes of the same frame.

use std::sync::RwLock;
use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use crate::scene::{Camera, Light, SharedCamera, SharedLight};
use crate::compositor::transforms;

/// Camera angles (degrees) and zoom at snapshot time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub zoom: f32,
}

impl From<&Camera> for CameraState {
    fn from(camera: &Camera) -> Self {
        Self {
            x: camera.x(),
            y: camera.y(),
            z: camera.z(),
            zoom: camera.zoom(),
        }
    }
}

/// Light values at snapshot time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    pub position: Vec3,
    pub intensity: Vec3,
    pub color: Vec3,
}

impl From<&Light> for LightState {
    fn from(light: &Light) -> Self {
        Self {
            position: light.position(),
            intensity: light.intensity(),
            color: light.color(),
        }
    }
}

/// Immutable camera and light state for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub camera: CameraState,
    pub lights: Vec<LightState>,
}

impl FrameSnapshot {
    /// Read-lock the camera and every light once and copy their values
    pub fn capture(camera: &SharedCamera, lights: &[SharedLight]) -> Result<Self> {
        let camera = read(camera, "camera", |c| CameraState::from(c))?;
        let lights = lights
            .iter()
            .map(|light| read(light, "light", |l| LightState::from(l)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { camera, lights })
    }

    /// Light in `slot`, falling back to the first light
    pub fn light_or_first(&self, slot: usize) -> Option<&LightState> {
        self.lights.get(slot).or_else(|| self.lights.first())
    }

    /// Model matrix from the camera angles
    pub fn model(&self) -> Mat4 {
        transforms::model_matrix(self.camera.x, self.camera.y, self.camera.z)
    }

    /// View matrix from the camera zoom
    pub fn view(&self, offset: Vec3) -> Mat4 {
        transforms::view_matrix(self.camera.zoom, offset)
    }
}

fn read<T, R>(lock: &RwLock<T>, what: &str, f: impl FnOnce(&T) -> R) -> Result<R> {
    let guard = lock
        .read()
        .map_err(|_| Error::BackendError(format!("{} lock poisoned", what)))?;
    Ok(f(&guard))
}

#[cfg(test)]
#[path = "frame_snapshot_tests.rs"]
mod tests;
