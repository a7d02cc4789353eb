// Host-side tests for the camera and orbit controls.

use glam::Vec3;
use snowfall_core::{Camera, OrbitControls, Spherical, CAMERA_START_EYE};
use std::f32::consts::{PI, TAU};

#[test]
fn spherical_round_trips_start_eye() {
    let s = Spherical::from_offset(CAMERA_START_EYE);
    let back = s.to_offset();
    assert!((back - CAMERA_START_EYE).length() < 1e-4);
}

#[test]
fn start_camera_looks_slightly_up_at_origin() {
    let cam = Camera::default();
    assert!((cam.fovy_radians - 60f32.to_radians()).abs() < 1e-6);
    assert_eq!((cam.znear, cam.zfar), (1.0, 1000.0));
    // Origin lands at the center of the view, in front of the camera
    let p = cam.view_matrix().transform_point3(Vec3::ZERO);
    assert!(p.x.abs() < 1e-4 && p.y.abs() < 1e-4);
    assert!(p.z < -24.0);
}

#[test]
fn viewport_updates_aspect_and_ignores_zero() {
    let mut cam = Camera::default();
    cam.set_viewport(1920, 1080);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    cam.set_viewport(0, 100);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
}

#[test]
fn auto_rotate_completes_orbit_in_thirty_seconds_at_60fps() {
    let mut cam = Camera::default();
    let mut orbit = OrbitControls::default();
    let start = Spherical::from_offset(cam.eye);
    for _ in 0..(30 * 60) {
        orbit.update(&mut cam);
    }
    let end = Spherical::from_offset(cam.eye);
    assert!((end.radius - start.radius).abs() < 1e-2, "radius drifted");
    assert!((end.phi - start.phi).abs() < 1e-3, "elevation drifted");
    let dtheta = (end.theta - start.theta).rem_euclid(TAU);
    assert!(dtheta < 1e-2 || dtheta > TAU - 1e-2, "not a full turn: {dtheta}");
}

#[test]
fn auto_rotate_pauses_while_dragging() {
    let mut cam = Camera::default();
    let mut orbit = OrbitControls::default();
    orbit.begin_drag();
    let before = cam.eye;
    orbit.update(&mut cam);
    assert!((cam.eye - before).length() < 1e-5);
    orbit.end_drag();
    orbit.update(&mut cam);
    assert!((cam.eye - before).length() > 1e-4);
}

#[test]
fn drag_rotates_by_full_turn_per_element_height() {
    let mut cam = Camera::default();
    let mut orbit = OrbitControls::default();
    orbit.auto_rotate = false;
    let start = Spherical::from_offset(cam.eye);
    orbit.begin_drag();
    // Quarter of the height horizontally => quarter turn left (theta decreases)
    orbit.drag_by(100.0, 0.0, 400.0);
    orbit.update(&mut cam);
    let end = Spherical::from_offset(cam.eye);
    let dtheta = (start.theta - end.theta).rem_euclid(TAU);
    assert!((dtheta - PI / 2.0).abs() < 1e-3, "dtheta={dtheta}");
}

#[test]
fn drag_without_begin_is_ignored() {
    let mut cam = Camera::default();
    let mut orbit = OrbitControls::default();
    orbit.auto_rotate = false;
    let before = cam.eye;
    orbit.drag_by(300.0, 300.0, 400.0);
    orbit.update(&mut cam);
    assert!((cam.eye - before).length() < 1e-4);
}

#[test]
fn polar_angle_is_clamped_off_the_poles() {
    let mut cam = Camera::default();
    let mut orbit = OrbitControls::default();
    orbit.auto_rotate = false;
    orbit.begin_drag();
    orbit.drag_by(0.0, 10_000.0, 100.0);
    orbit.update(&mut cam);
    let s = Spherical::from_offset(cam.eye - cam.target);
    // Dragging far downward parks the eye just off the top pole
    assert!(s.phi < 1e-2, "phi={}", s.phi);
    assert!(cam.eye.y > 0.0);
    assert!(cam.eye.x.is_finite() && cam.eye.y.is_finite() && cam.eye.z.is_finite());
    let r0 = CAMERA_START_EYE.length();
    assert!((s.radius - r0).abs() < 1e-3, "zoom is disabled; radius must hold");
}
