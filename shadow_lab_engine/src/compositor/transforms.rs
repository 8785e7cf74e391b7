/// Matrix helpers shared by the shadow techniques
///
/// All matrices are column-major glam `Mat4` values in OpenGL clip-space
/// convention. Angles are degrees.

use glam::{Mat4, Vec3, Vec4};

/// Below this length a look-at axis is left unnormalized
const AXIS_EPSILON: f32 = 1e-12;

/// Below this absolute determinant a model-view matrix is treated as singular
const SINGULAR_EPSILON: f32 = 1e-8;

/// View matrix: translation by `offset` with z replaced by `zoom`
///
/// With the default offset this is `translate(0, -4, zoom)`.
pub fn view_matrix(zoom: f32, offset: Vec3) -> Mat4 {
    Mat4::from_translation(Vec3::new(offset.x, offset.y, zoom))
}

/// Model matrix: identity rotated about X, then Y, then Z
///
/// Each rotation is applied on top of the previous result, so the final
/// matrix is `Rz * Ry * Rx`.
pub fn model_matrix(x_degrees: f32, y_degrees: f32, z_degrees: f32) -> Mat4 {
    let mut model = Mat4::IDENTITY;
    model = Mat4::from_rotation_x(x_degrees.to_radians()) * model;
    model = Mat4::from_rotation_y(y_degrees.to_radians()) * model;
    model = Mat4::from_rotation_z(z_degrees.to_radians()) * model;
    model
}

/// Normalize `v`, or return it unchanged when its length is zero
pub fn normalize_or_keep(v: Vec3) -> Vec3 {
    let length = v.length();
    if length <= AXIS_EPSILON {
        return v;
    }
    v / length
}

/// Right-handed look-at view matrix from `eye` toward `center`
///
/// Degenerate input (eye == center, or up parallel to the view axis) keeps
/// the zero-length axis as is instead of producing NaNs.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    let z = normalize_or_keep(eye - center);
    let x = normalize_or_keep(up.cross(z));
    let y = normalize_or_keep(z.cross(x));

    Mat4::from_cols(
        Vec4::new(x.x, y.x, z.x, 0.0),
        Vec4::new(x.y, y.y, z.y, 0.0),
        Vec4::new(x.z, y.z, z.z, 0.0),
        Vec4::new(-x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0),
    )
}

/// Remap from clip space [-1, 1] to texture space [0, 1]
pub fn bias_matrix() -> Mat4 {
    Mat4::from_cols_array(&[
        0.5, 0.0, 0.0, 0.0,
        0.0, 0.5, 0.0, 0.0,
        0.0, 0.0, 0.5, 0.0,
        0.5, 0.5, 0.5, 1.0,
    ])
}

/// transpose(inverse(view * model)), or `None` when view * model is singular
pub fn normal_matrix(view: Mat4, model: Mat4) -> Option<Mat4> {
    let model_view = view * model;
    if model_view.determinant().abs() < SINGULAR_EPSILON {
        return None;
    }
    Some(model_view.inverse().transpose())
}

#[cfg(test)]
#[path = "transforms_tests.rs"]
mod tests;
