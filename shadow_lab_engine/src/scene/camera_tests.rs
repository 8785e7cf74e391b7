use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_camera_new() {
    let camera = Camera::new();
    assert_eq!(camera.x(), 0.0);
    assert_eq!(camera.y(), 0.0);
    assert_eq!(camera.z(), 0.0);
    assert_eq!(camera.zoom(), DEFAULT_ZOOM);
}

// ============================================================================
// Angles
// ============================================================================

#[test]
fn test_set_angles_report_change() {
    let mut camera = Camera::new();
    assert!(camera.set_x(30.0));
    assert!(!camera.set_x(30.0));
    assert!(camera.set_y(45.0));
    assert!(camera.set_z(90.0));

    assert_eq!(camera.x(), 30.0);
    assert_eq!(camera.y(), 45.0);
    assert_eq!(camera.z(), 90.0);
}

#[test]
fn test_angles_wrap() {
    let mut camera = Camera::new();
    camera.set_x(370.0);
    camera.set_y(-10.0);
    assert_eq!(camera.x(), 10.0);
    assert_eq!(camera.y(), 350.0);
}

// ============================================================================
// Zoom
// ============================================================================

#[test]
fn test_zoom_in_and_out() {
    let mut camera = Camera::new();
    assert!(camera.zoom_in());
    assert_eq!(camera.zoom(), DEFAULT_ZOOM + ZOOM_STEP);
    assert!(camera.zoom_out());
    assert!(camera.zoom_out());
    assert_eq!(camera.zoom(), DEFAULT_ZOOM - ZOOM_STEP);
}

#[test]
fn test_zoom_is_clamped() {
    let mut camera = Camera::new();
    camera.set_zoom(ZOOM_RANGE.1);
    assert!(!camera.zoom_in());
    assert_eq!(camera.zoom(), ZOOM_RANGE.1);

    camera.set_zoom(-1000.0);
    assert_eq!(camera.zoom(), ZOOM_RANGE.0);
}
