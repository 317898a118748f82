use glam::Vec3;

// Shared scene tuning constants used by both web and native frontends.

// Scene layout
pub const GROUND_SIZE: f32 = 10.0; // edge length of the visible floor quad
pub const GROUND_COLOR: [f32; 3] = [0.133, 0.133, 0.133]; // 0x222222
pub const CUBE_SIZE: f32 = 1.0;
pub const CUBE_CENTER: Vec3 = Vec3::new(0.0, 0.5, 0.0); // resting on the floor
pub const CUBE_COLOR: [f32; 3] = [0.0, 1.0, 0.8]; // 0x00ffcc

// Spotlight rig
pub const LIGHT_HEIGHT: f32 = 5.0; // spotlight y above the ground plane
pub const SPOT_DEFAULT_POSITION: Vec3 = Vec3::new(0.0, LIGHT_HEIGHT, 0.0);
pub const SPOT_DEFAULT_TARGET: Vec3 = Vec3::ZERO;
pub const SPOT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const SPOT_INTENSITY: f32 = 6.0;
pub const SPOT_ANGLE: f32 = std::f32::consts::FRAC_PI_6; // outer cone half-angle
pub const SPOT_PENUMBRA: f32 = 0.1; // fraction of the cone that fades
pub const SPOT_RANGE: f32 = 30.0;
pub const SPOT_DECAY: f32 = 2.0;

// Firefly swarm
pub const FIREFLY_COUNT: usize = 10;
pub const MAX_FIREFLIES: usize = 32; // size of the shader's point light array
pub const BOUNDARY_HALF_EXTENT: f32 = 10.0; // fireflies bounce inside [-h, h]^3
pub const FIREFLY_MAX_SPEED: f32 = 0.05; // per axis, per frame
pub const FIREFLY_SPAWN_Y_MIN: f32 = 1.0;
pub const FIREFLY_SPAWN_Y_MAX: f32 = BOUNDARY_HALF_EXTENT;
pub const FIREFLY_INTENSITY: f32 = 3.0;
pub const FIREFLY_RANGE: f32 = 10.0;
pub const FIREFLY_MARKER_RADIUS: f32 = 0.1;

// Palette for the three firefly colors
pub const FIREFLY_PALETTE: [[f32; 3]; 3] = [
    [1.0, 0.0, 0.0], // red
    [0.0, 1.0, 0.0], // green
    [0.0, 0.0, 1.0], // blue
];

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(8.0, 6.0, 8.0);
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Rays closer than this to parallel with a plane count as a miss
pub const RAY_PARALLEL_EPSILON: f32 = 1e-6;

// Interval between frame statistics log lines
pub const FRAME_STATS_INTERVAL_SEC: f64 = 5.0;
