//! Pointer-to-world projection.
//!
//! A pointer move casts a ray from the camera through the pointer and, if it
//! lands on the ground plane, re-hangs the spotlight over the hit point. A miss
//! (pointer at or above the horizon) is routine and leaves the rig alone.

use crate::camera::Camera;
use crate::geometry::Plane;
use crate::pointer::PointerState;
use crate::spotlight::SpotlightRig;
use glam::Vec3;

/// Where the pointer ray meets `plane`, if anywhere.
pub fn project_pointer(camera: &Camera, plane: &Plane, pointer: PointerState) -> Option<Vec3> {
    camera.ray_through(pointer).intersect_plane(plane)
}

/// Project and move the rig. Returns the ground hit so callers can log or
/// react; `None` means nothing changed.
pub fn follow_pointer(
    camera: &Camera,
    plane: &Plane,
    rig: &mut SpotlightRig,
    pointer: PointerState,
) -> Option<Vec3> {
    match project_pointer(camera, plane, pointer) {
        Some(hit) => {
            rig.aim_at_ground(hit);
            log::trace!(
                "[pointer] ({:.3},{:.3}) -> ({:.2},{:.2},{:.2})",
                pointer.x,
                pointer.y,
                hit.x,
                hit.y,
                hit.z
            );
            Some(hit)
        }
        None => {
            log::trace!("[pointer] ({:.3},{:.3}) misses ground", pointer.x, pointer.y);
            None
        }
    }
}
