use fireflies_core::{SceneContext, Shape, MAX_FIREFLIES};

// Flat ambient term so unlit corners of the floor are not pure black
pub const AMBIENT: [f32; 3] = [0.02, 0.02, 0.025];
pub const FIREFLY_DECAY: f32 = 2.0;
// Props plus one marker per firefly
pub const INSTANCE_CAPACITY: usize = 8 + MAX_FIREFLIES;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightPacked {
    pub position_range: [f32; 4],
    pub color_intensity: [f32; 4],
    pub decay: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLightPacked {
    pub position_range: [f32; 4],
    pub direction_decay: [f32; 4],
    pub color_intensity: [f32; 4],
    /// x = cos(outer), y = cos(inner)
    pub cone: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub ambient: [f32; 4],
    pub spot: SpotLightPacked,
    pub points: [PointLightPacked; MAX_FIREFLIES],
    /// x = active point lights
    pub counts: [u32; 4],
}

/// Per-instance vertex data: `offset_scale.xyz` translates and `.w` scales a
/// unit mesh; `color.w` is 1 for unlit markers.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub offset_scale: [f32; 4],
    pub color: [f32; 4],
}

/// Which mesh a contiguous run of instances draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    Plane,
    Cuboid,
    Sphere,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawBatch {
    pub mesh: MeshKind,
    pub instances: std::ops::Range<u32>,
}

pub fn pack_scene_uniforms(scene: &SceneContext) -> SceneUniforms {
    let spot = &scene.spotlight;
    let dir = spot.direction();
    let (cos_outer, cos_inner) = spot.cone_cosines();
    let mut points = [PointLightPacked::default(); MAX_FIREFLIES];
    let fireflies = scene.swarm.fireflies();
    let count = fireflies.len().min(MAX_FIREFLIES);
    for (slot, f) in points.iter_mut().zip(fireflies) {
        let [r, g, b] = f.color.rgb();
        *slot = PointLightPacked {
            position_range: [
                f.position.x,
                f.position.y,
                f.position.z,
                fireflies_core::FIREFLY_RANGE,
            ],
            color_intensity: [r, g, b, fireflies_core::FIREFLY_INTENSITY],
            decay: [FIREFLY_DECAY, 0.0, 0.0, 0.0],
        };
    }
    let eye = scene.camera.eye;
    SceneUniforms {
        view_proj: scene.camera.view_proj().to_cols_array_2d(),
        camera_pos: [eye.x, eye.y, eye.z, 1.0],
        ambient: [AMBIENT[0], AMBIENT[1], AMBIENT[2], 0.0],
        spot: SpotLightPacked {
            position_range: [spot.position.x, spot.position.y, spot.position.z, spot.range],
            direction_decay: [dir.x, dir.y, dir.z, spot.decay],
            color_intensity: [spot.color[0], spot.color[1], spot.color[2], spot.intensity],
            cone: [cos_outer, cos_inner, 0.0, 0.0],
        },
        points,
        counts: [count as u32, 0, 0, 0],
    }
}

/// Instances in draw order plus the batches that consume them.
pub fn pack_instances(scene: &SceneContext) -> (Vec<InstanceData>, Vec<DrawBatch>) {
    let mut instances = Vec::with_capacity(scene.props.len() + scene.swarm.len());
    let mut batches = Vec::new();
    for prop in &scene.props {
        if instances.len() >= INSTANCE_CAPACITY {
            break;
        }
        let start = instances.len() as u32;
        instances.push(InstanceData {
            offset_scale: [prop.center.x, prop.center.y, prop.center.z, prop.size],
            color: [prop.color[0], prop.color[1], prop.color[2], 0.0],
        });
        let mesh = match prop.shape {
            Shape::Plane => MeshKind::Plane,
            Shape::Cuboid => MeshKind::Cuboid,
        };
        batches.push(DrawBatch {
            mesh,
            instances: start..start + 1,
        });
    }
    let start = instances.len() as u32;
    let room = INSTANCE_CAPACITY - instances.len();
    for (marker, firefly) in scene
        .swarm
        .markers()
        .iter()
        .zip(scene.swarm.fireflies())
        .take(room)
    {
        let [r, g, b] = firefly.color.rgb();
        instances.push(InstanceData {
            offset_scale: [
                marker.position.x,
                marker.position.y,
                marker.position.z,
                marker.radius,
            ],
            color: [r, g, b, 1.0],
        });
    }
    let end = instances.len() as u32;
    if end > start {
        batches.push(DrawBatch {
            mesh: MeshKind::Sphere,
            instances: start..end,
        });
    }
    (instances, batches)
}
