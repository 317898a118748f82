//! Viewpoint shared by picking and rendering.
//!
//! The camera is plain data: front-ends update its aspect on resize, the
//! renderer reads its matrices, and the projector casts rays through it.

use crate::constants::*;
use crate::geometry::Ray;
use crate::pointer::PointerState;
use glam::{Mat4, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
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
            eye: CAMERA_EYE,
            target: CAMERA_TARGET,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
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

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Keep the projection in step with the viewport. Zero-sized viewports
    /// (minimized windows) leave the aspect untouched.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates.
    pub fn ray_through(&self, pointer: PointerState) -> Ray {
        // Unproject at mid depth; the far plane loses precision with a 1000:0.1 range.
        let inv = self.view_proj().inverse();
        let p_mid = inv * Vec4::new(pointer.x, pointer.y, 0.5, 1.0);
        let p1: Vec3 = p_mid.truncate() / p_mid.w;
        Ray::new(self.eye, p1 - self.eye)
    }
}
