/// Tests for the matrix helpers

use glam::{Mat4, Vec3, Vec4};
use super::*;

fn assert_mat_near(a: Mat4, b: Mat4) {
    assert!(a.abs_diff_eq(b, 1e-5), "\n{:?}\n!=\n{:?}", a, b);
}

// ============================================================================
// View / Model
// ============================================================================

#[test]
fn test_view_matrix_translates_by_zoom() {
    let view = view_matrix(-10.0, Vec3::new(0.0, -4.0, 0.0));
    assert_eq!(view.w_axis, Vec4::new(0.0, -4.0, -10.0, 1.0));
    assert_eq!(view.transform_point3(Vec3::ZERO), Vec3::new(0.0, -4.0, -10.0));
}

#[test]
fn test_model_matrix_matches_x_then_y_then_z_reference() {
    let (x, y, z) = (30.0f32, 45.0f32, 60.0f32);
    let reference = Mat4::from_rotation_z(z.to_radians())
        * Mat4::from_rotation_y(y.to_radians())
        * Mat4::from_rotation_x(x.to_radians())
        * Mat4::IDENTITY;
    assert_eq!(model_matrix(x, y, z), reference);
}

#[test]
fn test_model_matrix_rotation_order_matters() {
    let xyz = model_matrix(90.0, 90.0, 0.0);
    let yx = Mat4::from_rotation_x(90f32.to_radians()) * Mat4::from_rotation_y(90f32.to_radians());
    assert!(!xyz.abs_diff_eq(yx, 1e-4));
}

#[test]
fn test_translation_and_rotation_do_not_commute() {
    let view = view_matrix(-10.0, Vec3::new(0.0, -4.0, 0.0));
    let model = model_matrix(0.0, 90.0, 0.0);
    assert!(!(view * model).abs_diff_eq(model * view, 1e-4));
}

#[test]
fn test_model_matrix_identity_at_zero() {
    assert_eq!(model_matrix(0.0, 0.0, 0.0), Mat4::IDENTITY);
}

// ============================================================================
// Look-at
// ============================================================================

#[test]
fn test_look_at_matches_glam() {
    let eye = Vec3::new(20.0, 30.0, 20.0);
    let center = Vec3::new(0.0, 2.0, 0.0);
    assert_mat_near(look_at(eye, center, Vec3::Y), Mat4::look_at_rh(eye, center, Vec3::Y));
}

#[test]
fn test_look_at_maps_eye_to_origin() {
    let eye = Vec3::new(3.0, 5.0, -2.0);
    let view = look_at(eye, Vec3::new(0.0, 2.0, 0.0), Vec3::Y);
    assert!(view.transform_point3(eye).abs_diff_eq(Vec3::ZERO, 1e-5));
}

#[test]
fn test_look_at_eye_equals_center_stays_finite() {
    let eye = Vec3::new(0.0, 2.0, 0.0);
    let view = look_at(eye, eye, Vec3::Y);
    assert!(view.is_finite());
    assert_eq!(view.z_axis.truncate(), Vec3::ZERO);
}

#[test]
fn test_look_at_up_parallel_to_axis_stays_finite() {
    let view = look_at(Vec3::new(0.0, 30.0, 0.0), Vec3::new(0.0, 2.0, 0.0), Vec3::Y);
    assert!(view.is_finite());
}

#[test]
fn test_normalize_or_keep() {
    assert_eq!(normalize_or_keep(Vec3::ZERO), Vec3::ZERO);
    assert!((normalize_or_keep(Vec3::new(3.0, 4.0, 0.0)).length() - 1.0).abs() < 1e-6);
}

// ============================================================================
// Bias / Normal
// ============================================================================

#[test]
fn test_bias_matrix_maps_clip_to_texture_space() {
    let bias = bias_matrix();
    assert_eq!(bias.transform_point3(Vec3::splat(-1.0)), Vec3::ZERO);
    assert_eq!(bias.transform_point3(Vec3::ONE), Vec3::ONE);
    assert_eq!(bias.w_axis, Vec4::new(0.5, 0.5, 0.5, 1.0));
}

#[test]
fn test_normal_matrix_of_rigid_transform_is_rotation() {
    let view = view_matrix(-10.0, Vec3::new(0.0, -4.0, 0.0));
    let model = model_matrix(10.0, 20.0, 30.0);
    let normal = normal_matrix(view, model).unwrap();

    let n = normal.transform_vector3(Vec3::Y);
    let expected = model.transform_vector3(Vec3::Y);
    assert!(n.abs_diff_eq(expected, 1e-5));
}

#[test]
fn test_normal_matrix_singular_is_none() {
    let model = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
    assert!(normal_matrix(Mat4::IDENTITY, model).is_none());
}
