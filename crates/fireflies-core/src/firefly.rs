use crate::config::{ConfigError, SceneConfig};
use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireflyColor {
    Red,
    Green,
    Blue,
}

impl FireflyColor {
    pub const ALL: [FireflyColor; 3] = [FireflyColor::Red, FireflyColor::Green, FireflyColor::Blue];

    pub fn rgb(self) -> [f32; 3] {
        match self {
            FireflyColor::Red => FIREFLY_PALETTE[0],
            FireflyColor::Green => FIREFLY_PALETTE[1],
            FireflyColor::Blue => FIREFLY_PALETTE[2],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Firefly {
    pub position: Vec3,
    /// Displacement per frame.
    pub velocity: Vec3,
    pub color: FireflyColor,
}

/// Visible sphere that mirrors a firefly's position; it holds no motion state
/// of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: Vec3,
    pub radius: f32,
}

/// Fixed set of fireflies and their markers, bouncing inside a cube of
/// half-extent `half_extent` centred on the origin.
#[derive(Clone, Debug)]
pub struct FireflySwarm {
    fireflies: Vec<Firefly>,
    markers: Vec<Marker>,
    half_extent: f32,
    seed: u64,
}

impl FireflySwarm {
    /// Scatter `config.firefly_count` fireflies with random positions,
    /// velocities and colors.
    pub fn spawn(config: &SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);
        let h = config.half_extent;
        let s = config.max_speed;
        let fireflies = (0..config.firefly_count)
            .map(|_| {
                let position = Vec3::new(
                    rng.gen_range(-h..h),
                    rng.gen_range(config.spawn_height.clone()),
                    rng.gen_range(-h..h),
                );
                let velocity = if s > 0.0 {
                    Vec3::new(rng.gen_range(-s..s), rng.gen_range(-s..s), rng.gen_range(-s..s))
                } else {
                    Vec3::ZERO
                };
                let color = *FireflyColor::ALL.choose(&mut rng).unwrap_or(&FireflyColor::Red);
                Firefly {
                    position,
                    velocity,
                    color,
                }
            })
            .collect::<Vec<_>>();
        log::info!(
            "[swarm] spawned {} fireflies (seed={}, half_extent={})",
            fireflies.len(),
            seed,
            h
        );
        Ok(Self::from_fireflies(fireflies, h).with_seed(seed))
    }

    /// Build a swarm from explicit fireflies; markers start on top of them.
    pub fn from_fireflies(fireflies: Vec<Firefly>, half_extent: f32) -> Self {
        let markers = fireflies
            .iter()
            .map(|f| Marker {
                position: f.position,
                radius: FIREFLY_MARKER_RADIUS,
            })
            .collect();
        Self {
            fireflies,
            markers,
            half_extent,
            seed: 0,
        }
    }

    fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn fireflies(&self) -> &[Firefly] {
        &self.fireflies
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.fireflies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fireflies.is_empty()
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Seed the swarm was spawned with (0 for hand-built swarms).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advance every firefly by one frame.
    ///
    /// The bounce is checked after the move and only flips velocity, so a
    /// firefly can sit up to one step outside the boundary for a frame before
    /// heading back in.
    pub fn animate(&mut self) {
        let h = self.half_extent;
        for (firefly, marker) in self.fireflies.iter_mut().zip(self.markers.iter_mut()) {
            firefly.position += firefly.velocity;
            marker.position = firefly.position;
            for axis in 0..3 {
                let p = firefly.position[axis];
                if p > h || p < -h {
                    firefly.velocity[axis] = -firefly.velocity[axis];
                }
            }
        }
    }
}
