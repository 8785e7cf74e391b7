/// Orbit camera - rotation angles and zoom driven by the input layer
///
/// The camera computes nothing: techniques read its angles and zoom each
/// frame and build the model/view matrices themselves.

/// Default distance along the view axis
pub const DEFAULT_ZOOM: f32 = -10.0;

/// Zoom change per wheel notch
pub const ZOOM_STEP: f32 = 1.0;

/// Closest and farthest allowed zoom values
pub const ZOOM_RANGE: (f32, f32) = (-45.0, -1.0);

/// Rotation angles (degrees) around X/Y/Z and a zoom scalar
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    x: f32,
    y: f32,
    z: f32,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            zoom: DEFAULT_ZOOM,
        }
    }

    // ===== GETTERS =====

    /// Rotation around the X axis, in degrees
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Rotation around the Y axis, in degrees
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Rotation around the Z axis, in degrees
    pub fn z(&self) -> f32 {
        self.z
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    // ===== SETTERS =====
    //
    // Each setter returns whether the stored value changed, so the input
    // layer only requests a redraw when needed. Angles wrap to [0, 360).

    pub fn set_x(&mut self, degrees: f32) -> bool {
        Self::store(&mut self.x, wrap_degrees(degrees))
    }

    pub fn set_y(&mut self, degrees: f32) -> bool {
        Self::store(&mut self.y, wrap_degrees(degrees))
    }

    pub fn set_z(&mut self, degrees: f32) -> bool {
        Self::store(&mut self.z, wrap_degrees(degrees))
    }

    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        Self::store(&mut self.zoom, zoom.clamp(ZOOM_RANGE.0, ZOOM_RANGE.1))
    }

    /// Move one step toward the scene
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom + ZOOM_STEP)
    }

    /// Move one step away from the scene
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.zoom - ZOOM_STEP)
    }

    fn store(slot: &mut f32, value: f32) -> bool {
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }
}

fn wrap_degrees(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
