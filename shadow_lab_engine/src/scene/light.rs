/// Light - position bounded to per-axis intervals, shared color/intensity
///
/// Lights are owned by the compositor and shared with the techniques, which
/// only read them during `update`.

use glam::Vec3;

/// Kind of light source. Informational for the shadow techniques.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightType {
    Point,
    Directional,
    Spot,
    Line,
    Disc,
}

impl LightType {
    pub const ALL: [LightType; 5] = [
        LightType::Point,
        LightType::Directional,
        LightType::Spot,
        LightType::Line,
        LightType::Disc,
    ];

    /// Whether this kind of light is oriented
    pub fn has_direction(&self) -> bool {
        matches!(self, LightType::Directional | LightType::Line | LightType::Spot)
    }
}

/// Color presets offered by the light editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightColor {
    White,
    Red,
    Yellow,
    Blue,
}

impl LightColor {
    pub const ALL: [LightColor; 4] = [
        LightColor::White,
        LightColor::Red,
        LightColor::Yellow,
        LightColor::Blue,
    ];

    pub fn rgb(&self) -> Vec3 {
        match self {
            LightColor::White => Vec3::new(1.0, 1.0, 1.0),
            LightColor::Red => Vec3::new(1.0, 0.0, 0.0),
            LightColor::Yellow => Vec3::new(1.0, 1.0, 0.0),
            LightColor::Blue => Vec3::new(0.0, 0.0, 1.0),
        }
    }
}

/// Closed interval `[lower, upper]` on one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisInterval {
    pub lower: f32,
    pub upper: f32,
}

impl AxisInterval {
    pub const fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    /// Map a 0-100 percentage onto the interval
    ///
    /// Percentages outside 0-100 are clamped so the result stays in bounds.
    pub fn at_percent(&self, percent: f32) -> f32 {
        let percent = percent.clamp(0.0, 100.0);
        self.lower + (percent / 100.0) * (self.upper - self.lower)
    }

    pub fn midpoint(&self) -> f32 {
        self.at_percent(50.0)
    }
}

/// Per-axis bounds of a light position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightIntervals {
    pub x: AxisInterval,
    pub y: AxisInterval,
    pub z: AxisInterval,
}

impl Default for LightIntervals {
    fn default() -> Self {
        Self {
            x: AxisInterval::new(-20.0, 20.0),
            y: AxisInterval::new(2.0, 30.0),
            z: AxisInterval::new(-20.0, 20.0),
        }
    }
}

impl LightIntervals {
    /// Upper bound of every axis, the default light position
    pub fn upper(&self) -> Vec3 {
        Vec3::new(self.x.upper, self.y.upper, self.z.upper)
    }

    pub fn lower(&self) -> Vec3 {
        Vec3::new(self.x.lower, self.y.lower, self.z.lower)
    }
}

/// Scene light
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    intervals: LightIntervals,
    position: Vec3,
    /// Shared by color and intensity
    color: Vec3,
    light_type: LightType,
}

impl Default for Light {
    fn default() -> Self {
        Self::new()
    }
}

impl Light {
    /// White point light at the upper bound of the default intervals
    pub fn new() -> Self {
        Self::with_intervals(LightIntervals::default())
    }

    /// White point light at the upper bound of `intervals`
    pub fn with_intervals(intervals: LightIntervals) -> Self {
        Self {
            intervals,
            position: intervals.upper(),
            color: LightColor::White.rgb(),
            light_type: LightType::Point,
        }
    }

    /// Restore position, color and type defaults, keeping the intervals
    pub fn reset(&mut self) {
        *self = Self::with_intervals(self.intervals);
    }

    pub fn intervals(&self) -> &LightIntervals {
        &self.intervals
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Absolute position, not clamped to the intervals
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Same storage as `color()`
    pub fn intensity(&self) -> Vec3 {
        self.color
    }

    pub fn set_intensity(&mut self, intensity: Vec3) {
        self.color = intensity;
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    pub fn light_type(&self) -> LightType {
        self.light_type
    }

    pub fn set_light_type(&mut self, light_type: LightType) {
        self.light_type = light_type;
    }

    /// Position the light by a 0-100 percentage per axis
    ///
    /// `(0, 0, 0)` lands on the lower bounds, `(100, 100, 100)` on the
    /// upper bounds. Out-of-range percentages are clamped per axis.
    pub fn set_lights_ratio(&mut self, percent: Vec3) {
        self.position = Vec3::new(
            self.intervals.x.at_percent(percent.x),
            self.intervals.y.at_percent(percent.y),
            self.intervals.z.at_percent(percent.z),
        );
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
