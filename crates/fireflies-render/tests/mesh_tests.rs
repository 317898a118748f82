// Host-side tests for mesh generation and GPU packing; no device required.

use fireflies_core::*;
use fireflies_render::mesh::{cuboid, plane, uv_sphere, MeshData};
use fireflies_render::uniforms::*;
use glam::Vec3;

fn assert_well_formed(mesh: &MeshData) {
    assert_eq!(mesh.indices.len() % 3, 0);
    for &i in &mesh.indices {
        assert!((i as usize) < mesh.vertices.len(), "index {i} out of range");
    }
    for v in &mesh.vertices {
        let n = Vec3::from(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-5, "normal {n:?} not unit length");
        let p = Vec3::from(v.position);
        assert!(p.abs().max_element() <= 1.0 + 1e-6);
    }
}

#[test]
fn plane_is_a_flat_unit_quad() {
    let mesh = plane();
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.index_count(), 6);
    for v in &mesh.vertices {
        assert_eq!(v.position[1], 0.0);
        assert_eq!(v.normal, [0.0, 1.0, 0.0]);
        assert_eq!(v.position[0].abs(), 0.5);
        assert_eq!(v.position[2].abs(), 0.5);
    }
}

#[test]
fn cuboid_faces_point_outward() {
    let mesh = cuboid();
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.index_count(), 36);
    for v in &mesh.vertices {
        let p = Vec3::from(v.position);
        let n = Vec3::from(v.normal);
        assert!((p.dot(n) - 0.5).abs() < 1e-6, "{p:?} not on face {n:?}");
        assert!(p.abs().max_element() <= 0.5 + 1e-6);
    }
}

#[test]
fn sphere_vertices_lie_on_unit_radius() {
    let mesh = uv_sphere(8, 6);
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertices.len(), 9 * 7);
    // Two pole rows contribute one triangle per quad, the rest two.
    assert_eq!(mesh.indices.len(), (8 * 2 + 8 * 4 * 2) * 3);
    for v in &mesh.vertices {
        assert!((Vec3::from(v.position).length() - 1.0).abs() < 1e-5);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gpu_structs_respect_uniform_alignment() {
    assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
    assert_eq!(std::mem::size_of::<PointLightPacked>() % 16, 0);
    assert_eq!(std::mem::size_of::<InstanceData>(), 32);
    assert!(INSTANCE_CAPACITY >= MAX_FIREFLIES + 2);
}

fn scene(count: usize) -> SceneContext {
    let config = SceneConfig {
        firefly_count: count,
        seed: Some(5),
        ..SceneConfig::default()
    };
    SceneContext::new(&config).expect("valid config")
}

#[test]
fn uniforms_carry_every_firefly_light() {
    let ctx = scene(FIREFLY_COUNT);
    let u = pack_scene_uniforms(&ctx);
    assert_eq!(u.counts[0] as usize, FIREFLY_COUNT);
    for (packed, f) in u.points.iter().zip(ctx.swarm.fireflies()) {
        assert_eq!(&packed.position_range[..3], &f.position.to_array()[..]);
        assert_eq!(packed.position_range[3], FIREFLY_RANGE);
        assert_eq!(&packed.color_intensity[..3], &f.color.rgb()[..]);
    }
    assert_eq!(u.points[FIREFLY_COUNT].color_intensity, [0.0; 4]);
}

#[test]
fn uniforms_follow_the_spotlight() {
    let mut ctx = scene(1);
    ctx.spotlight.aim_at_ground(Vec3::new(2.0, 0.0, -3.0));
    let u = pack_scene_uniforms(&ctx);
    assert_eq!(&u.spot.position_range[..3], &[2.0, LIGHT_HEIGHT, -3.0]);
    assert_eq!(&u.spot.direction_decay[..3], &[0.0, -1.0, 0.0]);
    assert!(u.spot.cone[0] < u.spot.cone[1]);
    assert_eq!(u.camera_pos, [CAMERA_EYE.x, CAMERA_EYE.y, CAMERA_EYE.z, 1.0]);
}

#[test]
fn instances_batch_props_then_markers() {
    let ctx = scene(4);
    let (instances, batches) = pack_instances(&ctx);
    assert_eq!(instances.len(), 2 + 4);
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].mesh, MeshKind::Plane);
    assert_eq!(batches[0].instances, 0..1);
    assert_eq!(batches[1].mesh, MeshKind::Cuboid);
    assert_eq!(batches[1].instances, 1..2);
    assert_eq!(batches[2].mesh, MeshKind::Sphere);
    assert_eq!(batches[2].instances, 2..6);

    assert_eq!(instances[0].offset_scale, [0.0, 0.0, 0.0, GROUND_SIZE]);
    assert_eq!(instances[1].offset_scale, [0.0, 0.5, 0.0, CUBE_SIZE]);
    assert_eq!(instances[0].color[3], 0.0);
    for (inst, marker) in instances[2..].iter().zip(ctx.swarm.markers()) {
        assert_eq!(&inst.offset_scale[..3], &marker.position.to_array()[..]);
        assert_eq!(inst.offset_scale[3], FIREFLY_MARKER_RADIUS);
        assert_eq!(inst.color[3], 1.0);
    }
}
