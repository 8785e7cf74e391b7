/// Program trait, program descriptor and uniform values

use std::fmt;
use std::sync::Arc;
use glam::{Mat4, Vec2, Vec3, Vec4};
use crate::graphics_device::Texture;

/// Descriptor for compiling a GPU program from paired shader sources
#[derive(Debug, Clone)]
pub struct ProgramDesc {
    /// Program name, used for logging and diagnostics
    pub name: String,
    /// Vertex stage source
    pub vertex_source: String,
    /// Fragment stage source
    pub fragment_source: String,
}

impl ProgramDesc {
    pub fn new(name: &str, vertex_source: &str, fragment_source: &str) -> Self {
        Self {
            name: name.to_string(),
            vertex_source: vertex_source.to_string(),
            fragment_source: fragment_source.to_string(),
        }
    }
}

/// Linked GPU program (vertex + fragment stage)
///
/// Uniforms and attributes are assigned by name through the
/// `GraphicsDevice` that created the program.
pub trait Program: Send + Sync {
    /// Program name
    fn name(&self) -> &str;
}

/// Value assigned to a named uniform
#[derive(Clone)]
pub enum UniformValue {
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
    /// Sampler bound to a texture
    Texture(Arc<dyn Texture>),
}

impl UniformValue {
    pub fn as_float(&self) -> Option<f32> {
        match self {
            UniformValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vec3(&self) -> Option<Vec3> {
        match self {
            UniformValue::Vec3(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vec4(&self) -> Option<Vec4> {
        match self {
            UniformValue::Vec4(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_mat4(&self) -> Option<Mat4> {
        match self {
            UniformValue::Mat4(m) => Some(*m),
            _ => None,
        }
    }

    pub fn as_texture(&self) -> Option<&Arc<dyn Texture>> {
        match self {
            UniformValue::Texture(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Debug for UniformValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniformValue::Float(v) => write!(f, "Float({})", v),
            UniformValue::Vec2(v) => write!(f, "Vec2({:?})", v),
            UniformValue::Vec3(v) => write!(f, "Vec3({:?})", v),
            UniformValue::Vec4(v) => write!(f, "Vec4({:?})", v),
            UniformValue::Mat4(m) => write!(f, "Mat4({:?})", m),
            UniformValue::Texture(t) => write!(f, "Texture({})", t.info().label),
        }
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<Vec2> for UniformValue {
    fn from(value: Vec2) -> Self {
        UniformValue::Vec2(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        UniformValue::Vec3(value)
    }
}

impl From<Vec4> for UniformValue {
    fn from(value: Vec4) -> Self {
        UniformValue::Vec4(value)
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        UniformValue::Mat4(value)
    }
}

impl From<Arc<dyn Texture>> for UniformValue {
    fn from(value: Arc<dyn Texture>) -> Self {
        UniformValue::Texture(value)
    }
}
