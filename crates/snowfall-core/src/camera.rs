//! Camera description and three.js-style orbit controls.
//!
//! These types avoid platform APIs; the web frontend feeds pointer deltas and
//! the canvas size in and reads matrices out.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_START_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

const POLAR_EPS: f32 = 1e-6;

/// Radius plus polar (`phi`, from +Y) and azimuth (`theta`, around +Y from +Z).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }
}

/// Orbit the camera eye around its target without damping or zoom.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    pub enable_zoom: bool,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    dragging: bool,
    delta_theta: f32,
    delta_phi: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            rotate_speed: ROTATE_SPEED,
            enable_zoom: false,
            min_polar_angle: 0.0,
            max_polar_angle: std::f32::consts::PI,
            dragging: false,
            delta_theta: 0.0,
            delta_phi: 0.0,
        }
    }
}

impl OrbitControls {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Queue a rotation from a pointer move of `(dx, dy)` pixels on an element
    /// `element_height` pixels tall. Ignored unless a drag is active.
    pub fn drag_by(&mut self, dx: f32, dy: f32, element_height: f32) {
        if !self.dragging || element_height <= 0.0 {
            return;
        }
        let full_turn = std::f32::consts::TAU * self.rotate_speed / element_height;
        self.rotate_left(full_turn * dx);
        self.rotate_up(full_turn * dy);
    }

    /// Per-frame auto-rotation angle, assuming ~60 updates per second.
    pub fn auto_rotation_angle(&self) -> f32 {
        std::f32::consts::TAU / 60.0 / 60.0 * self.auto_rotate_speed
    }

    fn rotate_left(&mut self, angle: f32) {
        self.delta_theta -= angle;
    }

    fn rotate_up(&mut self, angle: f32) {
        self.delta_phi -= angle;
    }

    /// Apply pending rotation (and auto-rotation) to the camera eye.
    pub fn update(&mut self, camera: &mut Camera) {
        let offset = camera.eye - camera.target;
        let mut s = Spherical::from_offset(offset);

        if self.auto_rotate && !self.dragging {
            self.rotate_left(self.auto_rotation_angle());
        }

        s.theta += self.delta_theta;
        s.phi += self.delta_phi;
        s.phi = s
            .phi
            .clamp(self.min_polar_angle, self.max_polar_angle)
            .clamp(POLAR_EPS, std::f32::consts::PI - POLAR_EPS);

        camera.eye = camera.target + s.to_offset();
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
    }
}
