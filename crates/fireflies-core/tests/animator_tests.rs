// Host-side tests for firefly spawning and the per-frame bounce update.

use fireflies_core::*;
use glam::Vec3;

fn single(position: Vec3, velocity: Vec3) -> FireflySwarm {
    FireflySwarm::from_fireflies(
        vec![Firefly {
            position,
            velocity,
            color: FireflyColor::Green,
        }],
        BOUNDARY_HALF_EXTENT,
    )
}

fn seeded(count: usize, seed: u64) -> FireflySwarm {
    let config = SceneConfig {
        firefly_count: count,
        seed: Some(seed),
        ..SceneConfig::default()
    };
    FireflySwarm::spawn(&config).expect("valid config")
}

#[test]
fn crossing_the_bound_flips_velocity_then_returns() {
    let mut swarm = single(Vec3::new(9.98, 5.0, 0.0), Vec3::new(0.05, 0.0, 0.0));

    swarm.animate();
    let f = &swarm.fireflies()[0];
    assert!((f.position.x - 10.03).abs() < 1e-5, "x = {}", f.position.x);
    assert_eq!(f.position.y, 5.0);
    assert_eq!(f.position.z, 0.0);
    assert_eq!(f.velocity, Vec3::new(-0.05, 0.0, 0.0));

    swarm.animate();
    let f = &swarm.fireflies()[0];
    assert!((f.position.x - 9.98).abs() < 1e-5, "x = {}", f.position.x);
    assert_eq!(f.position.y, 5.0);
    assert_eq!(f.velocity, Vec3::new(-0.05, 0.0, 0.0));
}

#[test]
fn bound_contact_with_outward_velocity_reflects() {
    let mut swarm = single(Vec3::new(10.0, 0.0, -10.0), Vec3::new(0.25, 0.0, -0.25));

    swarm.animate();
    let f = &swarm.fireflies()[0];
    assert_eq!(f.position, Vec3::new(10.25, 0.0, -10.25));
    assert_eq!(f.velocity, Vec3::new(-0.25, 0.0, 0.25));

    swarm.animate();
    swarm.animate();
    let f = &swarm.fireflies()[0];
    assert!(f.position.x < 10.0);
    assert!(f.position.z > -10.0);
    assert_eq!(f.velocity, Vec3::new(-0.25, 0.0, 0.25));
}

#[test]
fn position_is_not_clamped_after_reflection() {
    let mut swarm = single(Vec3::new(0.0, -9.9, 0.0), Vec3::new(0.0, -0.5, 0.0));
    swarm.animate();
    assert_eq!(swarm.fireflies()[0].position.y, -10.4);
    assert_eq!(swarm.markers()[0].position.y, -10.4);
}

#[test]
fn axes_bounce_independently() {
    let mut swarm = single(Vec3::new(9.9, 0.0, 0.0), Vec3::new(0.25, 0.125, -0.125));
    swarm.animate();
    let v = swarm.fireflies()[0].velocity;
    assert_eq!(v, Vec3::new(-0.25, 0.125, -0.125));
}

#[test]
fn markers_mirror_fireflies_exactly() {
    let mut swarm = seeded(FIREFLY_COUNT, 7);
    for (f, m) in swarm.fireflies().iter().zip(swarm.markers()) {
        assert_eq!(f.position, m.position);
    }
    for _ in 0..500 {
        swarm.animate();
        for (f, m) in swarm.fireflies().iter().zip(swarm.markers()) {
            assert_eq!(f.position.to_array(), m.position.to_array());
            assert_eq!(m.radius, FIREFLY_MARKER_RADIUS);
        }
    }
}

#[test]
fn fireflies_stay_inside_boundary_over_many_frames() {
    // One step of overshoot is allowed before the reflected velocity brings
    // the firefly back.
    let limit = BOUNDARY_HALF_EXTENT + FIREFLY_MAX_SPEED + 1e-4;
    for seed in [1_u64, 42, 9001] {
        let mut swarm = seeded(MAX_FIREFLIES, seed);
        for frame in 0..20_000 {
            swarm.animate();
            for f in swarm.fireflies() {
                assert!(
                    f.position.abs().max_element() <= limit,
                    "seed {seed} frame {frame}: {:?} escaped",
                    f.position
                );
            }
        }
    }
}

#[test]
fn spawn_respects_configured_ranges() {
    let swarm = seeded(MAX_FIREFLIES, 1234);
    assert_eq!(swarm.len(), MAX_FIREFLIES);
    assert_eq!(swarm.seed(), 1234);
    for f in swarm.fireflies() {
        assert!(f.position.x >= -BOUNDARY_HALF_EXTENT && f.position.x < BOUNDARY_HALF_EXTENT);
        assert!(f.position.z >= -BOUNDARY_HALF_EXTENT && f.position.z < BOUNDARY_HALF_EXTENT);
        assert!(f.position.y >= FIREFLY_SPAWN_Y_MIN && f.position.y < FIREFLY_SPAWN_Y_MAX);
        assert!(f.velocity.abs().max_element() <= FIREFLY_MAX_SPEED);
    }
}

#[test]
fn same_seed_spawns_same_swarm() {
    let a = seeded(12, 99);
    let b = seeded(12, 99);
    assert_eq!(a.fireflies(), b.fireflies());
    let c = seeded(12, 100);
    assert_ne!(a.fireflies(), c.fireflies());
}

#[test]
fn zero_speed_swarm_stays_put() {
    let config = SceneConfig {
        max_speed: 0.0,
        seed: Some(3),
        ..SceneConfig::default()
    };
    let mut swarm = FireflySwarm::spawn(&config).expect("valid config");
    let before = swarm.fireflies().to_vec();
    swarm.animate();
    assert_eq!(swarm.fireflies(), &before[..]);
}

#[test]
fn tick_runs_animator_once() {
    let swarm = single(Vec3::ZERO, Vec3::new(0.25, 0.0, 0.0));
    let mut ctx = SceneContext::with_swarm(swarm, LIGHT_HEIGHT);
    ctx.tick();
    ctx.tick();
    assert_eq!(ctx.swarm.fireflies()[0].position, Vec3::new(0.5, 0.0, 0.0));
    assert_eq!(ctx.frames(), 2);
}

#[test]
fn palette_colors_are_distinct() {
    let rgb: Vec<[f32; 3]> = FireflyColor::ALL.iter().map(|c| c.rgb()).collect();
    assert_eq!(rgb[0], [1.0, 0.0, 0.0]);
    assert_eq!(rgb[1], [0.0, 1.0, 0.0]);
    assert_eq!(rgb[2], [0.0, 0.0, 1.0]);
}
