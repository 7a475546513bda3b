//! Camera modes for the court view.
//!
//! The view matrix is a pure function of the mode and the body poses, so
//! hosts never need per-frame closures to track a body.

use glam::{Mat4, Vec3};
use hecs::{Entity, World};

use crate::components::Body;

/// How the view matrix is derived each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Free,
    FollowBody(Entity),
}

/// Default courtside view, behind the free-throw line
pub fn free_view() -> Mat4 {
    Mat4::look_at_rh(
        Vec3::new(0.0, 9.0, 17.0),
        Vec3::new(0.0, 5.0, -20.0),
        Vec3::Y,
    )
}

/// Map a camera mode and the current body poses to a view matrix.
/// Falls back to the free view when the followed body is gone.
pub fn camera_view(mode: CameraMode, world: &World, free: Mat4) -> Mat4 {
    match mode {
        CameraMode::Free => free,
        CameraMode::FollowBody(entity) => match world.get::<&Body>(entity) {
            Ok(body) => {
                let eye = body.center + Vec3::new(0.0, 4.0, 10.0);
                Mat4::look_at_rh(eye, body.center, Vec3::Y)
            }
            Err(_) => free,
        },
    }
}
