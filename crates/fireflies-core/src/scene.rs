//! Explicit scene context.
//!
//! Everything the pointer handler and the frame tick touch lives here and is
//! passed in by `&mut`. Front-ends own one `SceneContext`, feed it pointer
//! events as they arrive, and call [`SceneContext::tick`] once per frame
//! before rendering.

use crate::camera::Camera;
use crate::clock::FrameClock;
use crate::config::{ConfigError, SceneConfig};
use crate::constants::*;
use crate::firefly::FireflySwarm;
use crate::geometry::GroundPlane;
use crate::pointer::{PointerEvent, PointerState};
use crate::projector;
use crate::spotlight::SpotlightRig;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Square quad lying in the XZ plane.
    Plane,
    /// Axis-aligned box.
    Cuboid,
}

/// Static scene geometry: drawn every frame, never animated.
#[derive(Clone, Debug, PartialEq)]
pub struct Prop {
    pub shape: Shape,
    pub center: Vec3,
    pub size: f32,
    pub color: [f32; 3],
}

pub struct SceneContext {
    pub camera: Camera,
    pub ground: GroundPlane,
    pub spotlight: SpotlightRig,
    pub swarm: FireflySwarm,
    pub props: Vec<Prop>,
    pub pointer: Option<PointerState>,
    clock: FrameClock,
}

impl SceneContext {
    pub fn new(config: &SceneConfig) -> Result<Self, ConfigError> {
        let swarm = FireflySwarm::spawn(config)?;
        Ok(Self::with_swarm(swarm, config.light_height))
    }

    pub fn with_swarm(swarm: FireflySwarm, light_height: f32) -> Self {
        let props = vec![
            Prop {
                shape: Shape::Plane,
                center: Vec3::ZERO,
                size: GROUND_SIZE,
                color: GROUND_COLOR,
            },
            Prop {
                shape: Shape::Cuboid,
                center: CUBE_CENTER,
                size: CUBE_SIZE,
                color: CUBE_COLOR,
            },
        ];
        Self {
            camera: Camera::default(),
            ground: GroundPlane::default(),
            spotlight: SpotlightRig::new(light_height),
            swarm,
            props,
            pointer: None,
            clock: FrameClock::new(),
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        log::debug!("[scene] viewport {}x{}", width, height);
        self.camera.set_viewport(width, height);
    }

    /// Handle a host pointer move. Returns the ground hit, if any.
    pub fn on_pointer_move(&mut self, ev: PointerEvent) -> Option<Vec3> {
        let pointer = PointerState::from_event(ev)?;
        self.pointer = Some(pointer);
        projector::follow_pointer(&self.camera, &self.ground, &mut self.spotlight, pointer)
    }

    /// Per-frame update. Returns the seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        self.swarm.animate();
        self.clock.tick()
    }

    pub fn frames(&self) -> u64 {
        self.clock.frames()
    }
}
