use crate::constants::*;
use glam::Vec3;

/// Light source plus the point it aims at. The two move together whenever the
/// pointer lands on the ground plane.
#[derive(Clone, Debug, PartialEq)]
pub struct SpotlightRig {
    pub position: Vec3,
    pub target: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    /// Outer cone half-angle.
    pub angle: f32,
    pub penumbra: f32,
    pub range: f32,
    pub decay: f32,
    height: f32,
}

impl Default for SpotlightRig {
    fn default() -> Self {
        Self::new(LIGHT_HEIGHT)
    }
}

impl SpotlightRig {
    pub fn new(height: f32) -> Self {
        Self {
            position: Vec3::new(SPOT_DEFAULT_POSITION.x, height, SPOT_DEFAULT_POSITION.z),
            target: SPOT_DEFAULT_TARGET,
            color: SPOT_COLOR,
            intensity: SPOT_INTENSITY,
            angle: SPOT_ANGLE,
            penumbra: SPOT_PENUMBRA,
            range: SPOT_RANGE,
            decay: SPOT_DECAY,
            height,
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Hang the light `height` units above `point` and aim straight down at it.
    pub fn aim_at_ground(&mut self, point: Vec3) {
        self.position = Vec3::new(point.x, self.height, point.z);
        self.target = Vec3::new(point.x, 0.0, point.z);
    }

    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Cosines of the outer and inner cone edges; the shader fades between them.
    pub fn cone_cosines(&self) -> (f32, f32) {
        let outer = self.angle;
        let inner = self.angle * (1.0 - self.penumbra);
        (outer.cos(), inner.cos())
    }
}
