/// Tests for the ray tracing technique

use std::sync::{Arc, RwLock};
use glam::{Vec2, Vec3};
use crate::graphics_device::mock_graphics_device::MockGraphicsDevice;
use crate::graphics_device::UniformValue;
use crate::scene::{Camera, Light};
use super::*;

fn init(device: &mut MockGraphicsDevice) -> RayTracing {
    let mut technique = RayTracing::new(device, &RenderConfig::default()).unwrap();
    let camera: SharedCamera = Arc::new(RwLock::new(Camera::new()));
    technique
        .init(device, &Mesh::floor(), camera, vec![Arc::new(RwLock::new(Light::new()))])
        .unwrap();
    technique
}

#[test]
fn test_init_uploads_scene_parameters() {
    let mut device = MockGraphicsDevice::new();
    let technique = init(&mut device);
    assert!(technique.is_active());

    let uniform = |name: &str| device.uniform("ray_tracing", name).cloned().unwrap();
    assert_eq!(uniform("plane_position").as_vec3(), Some(Vec3::new(0.0, -0.5, 0.0)));
    assert_eq!(uniform("plane_normal").as_vec3(), Some(Vec3::Y));
    assert_eq!(uniform("light_intensity").as_float(), Some(1.0));
    assert!(matches!(uniform("light_specular"), UniformValue::Vec2(v) if v == Vec2::new(1.0, 50.0)));
    assert_eq!(uniform("light_position").as_vec3(), Some(Vec3::new(5.0, 5.0, -10.0)));
    assert_eq!(uniform("light_color").as_vec3(), Some(Vec3::ONE));
    assert_eq!(uniform("ambient").as_float(), Some(0.05));
    assert_eq!(uniform("O").as_vec3(), Some(Vec3::new(0.0, 0.0, -1.0)));
}

#[test]
fn test_init_uploads_full_screen_quad() {
    let mut device = MockGraphicsDevice::new();
    let _technique = init(&mut device);

    let quad_name = device.attribute("ray_tracing", "a_position").unwrap().to_string();
    let quad = device.created_buffers.iter().find(|b| b.name == quad_name).unwrap();
    let corners: Vec<f32> = quad
        .contents()
        .chunks_exact(4)
        .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(corners, vec![-1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0]);
}

#[test]
fn test_update_has_no_host_work() {
    let mut device = MockGraphicsDevice::new();
    let mut technique = init(&mut device);
    device.clear_commands();

    technique.update(&mut device).unwrap();
    assert!(device.commands.is_empty());
}

#[test]
fn test_terminate_deactivates() {
    let mut device = MockGraphicsDevice::new();
    let mut technique = init(&mut device);
    technique.terminate();
    assert!(!technique.is_active());
    assert_eq!(technique.kind(), TechniqueKind::RayTracing);
}
