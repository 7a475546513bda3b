use glam::{Mat4, Quat, Vec3};

use crate::render::{MaterialId, ShapeId};

/// Pose captured at the start of the latest simulation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseSnapshot {
    pub center: Vec3,
    pub rotation: Quat,
}

/// A movable rigid entity.
///
/// `previous` always holds the pose at the start of the most recent step and
/// `center`/`rotation` the pose after it; the renderable pose is a blend of
/// the two and never overwrites either.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub shape: ShapeId,
    pub material: MaterialId,
    pub size: Vec3,
    pub center: Vec3,
    pub rotation: Quat,
    pub linear_velocity: Vec3,
    pub angular_velocity: f32,
    pub spin_axis: Vec3,
    pub previous: PoseSnapshot,
}

/// Zero out non-finite components so a degenerate input cannot poison
/// every later interpolation
fn finite_or_zero(v: Vec3) -> Vec3 {
    Vec3::new(
        if v.x.is_finite() { v.x } else { 0.0 },
        if v.y.is_finite() { v.y } else { 0.0 },
        if v.z.is_finite() { v.z } else { 0.0 },
    )
}

impl Body {
    pub fn new(shape: ShapeId, material: MaterialId, size: Vec3) -> Self {
        Self {
            shape,
            material,
            size,
            center: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            linear_velocity: Vec3::ZERO,
            angular_velocity: 0.0,
            spin_axis: Vec3::X,
            previous: PoseSnapshot {
                center: Vec3::ZERO,
                rotation: Quat::IDENTITY,
            },
        }
    }

    /// Place the body and give it motion. Both shadow states start at the
    /// given pose so the first blended frame is well defined.
    pub fn emplace(
        mut self,
        center: Vec3,
        rotation: Quat,
        linear_velocity: Vec3,
        angular_velocity: f32,
        spin_axis: Vec3,
    ) -> Self {
        self.center = finite_or_zero(center);
        self.rotation = rotation;
        self.linear_velocity = finite_or_zero(linear_velocity);
        self.angular_velocity = if angular_velocity.is_finite() {
            angular_velocity
        } else {
            0.0
        };
        self.spin_axis = spin_axis.try_normalize().unwrap_or(Vec3::X);
        self.previous = PoseSnapshot {
            center: self.center,
            rotation: self.rotation,
        };
        self
    }

    /// One explicit Euler step; `previous` keeps the pose at the start of it
    pub fn advance(&mut self, dt: f32) {
        self.previous = PoseSnapshot {
            center: self.center,
            rotation: self.rotation,
        };
        self.center += self.linear_velocity * dt;
        if self.angular_velocity != 0.0 {
            let spin = Quat::from_axis_angle(self.spin_axis, self.angular_velocity * dt);
            self.rotation = (spin * self.rotation).normalize();
        }
    }

    /// Renderable pose blended between the last two discrete states.
    /// Pure: alpha 0 reproduces the previous pose, alpha 1 the current one.
    pub fn blended_pose(&self, alpha: f32) -> Mat4 {
        let center = self.previous.center.lerp(self.center, alpha);
        let rotation = self.previous.rotation.slerp(self.rotation, alpha);
        Mat4::from_translation(center) * Mat4::from_quat(rotation) * Mat4::from_scale(self.size)
    }

    /// Pose after the latest step, without interpolation
    pub fn current_pose(&self) -> Mat4 {
        Mat4::from_translation(self.center)
            * Mat4::from_quat(self.rotation)
            * Mat4::from_scale(self.size)
    }

    /// Bounding-sphere radius derived from the scale factor
    pub fn radius(&self) -> f32 {
        self.size.max_element()
    }
}

/// Marker for the player's ball
#[derive(Debug, Clone, Copy)]
pub struct BallTag;

/// Marker for pop-up targets
#[derive(Debug, Clone, Copy)]
pub struct TargetTag;

#[cfg(test)]
mod tests {
    use super::*;

    fn test_body() -> Body {
        Body::new(ShapeId(0), MaterialId(0), Vec3::ONE)
    }

    #[test]
    fn test_advance_keeps_previous_pose() {
        let mut body = test_body().emplace(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::IDENTITY,
            Vec3::new(10.0, 0.0, 0.0),
            0.0,
            Vec3::X,
        );
        body.advance(0.05);
        assert_eq!(body.previous.center, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(body.center, Vec3::new(1.5, 2.0, 3.0));
    }

    #[test]
    fn test_blend_alpha_zero_is_previous_pose() {
        let mut body = test_body().emplace(
            Vec3::new(0.0, 1.0, 0.0),
            Quat::IDENTITY,
            Vec3::new(4.0, 0.0, 0.0),
            0.0,
            Vec3::X,
        );
        body.advance(0.05);
        let pose = body.blended_pose(0.0);
        assert_eq!(pose.w_axis.truncate(), body.previous.center);
    }

    #[test]
    fn test_blend_lies_on_segment() {
        let mut body = test_body().emplace(
            Vec3::ZERO,
            Quat::IDENTITY,
            Vec3::new(2.0, 2.0, 0.0),
            0.0,
            Vec3::X,
        );
        body.advance(0.5);
        for alpha in [0.0, 0.25, 0.5, 0.75, 0.99] {
            let blended = body.blended_pose(alpha).w_axis.truncate();
            let expected = body.previous.center.lerp(body.center, alpha);
            assert!((blended - expected).length() < 1e-6);
        }
    }

    #[test]
    fn test_blend_does_not_mutate_states() {
        let mut body = test_body().emplace(
            Vec3::ZERO,
            Quat::IDENTITY,
            Vec3::new(1.0, 0.0, 0.0),
            0.5,
            Vec3::Y,
        );
        body.advance(0.05);
        let before = (body.previous, body.center, body.rotation);
        let _ = body.blended_pose(0.5);
        let _ = body.blended_pose(0.9);
        assert_eq!(before.0, body.previous);
        assert_eq!(before.1, body.center);
        assert_eq!(before.2, body.rotation);
    }

    #[test]
    fn test_emplace_zeroes_non_finite_velocity() {
        let body = test_body().emplace(
            Vec3::ZERO,
            Quat::IDENTITY,
            Vec3::new(f32::NAN, 3.0, f32::INFINITY),
            f32::NAN,
            Vec3::ZERO,
        );
        assert_eq!(body.linear_velocity, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(body.angular_velocity, 0.0);
        // Degenerate spin axis falls back to a unit axis
        assert!((body.spin_axis.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_spin_advances_rotation() {
        let mut body = test_body().emplace(
            Vec3::ZERO,
            Quat::IDENTITY,
            Vec3::ZERO,
            std::f32::consts::FRAC_PI_2,
            Vec3::Y,
        );
        body.advance(1.0);
        let expected = Quat::from_axis_angle(Vec3::Y, std::f32::consts::FRAC_PI_2);
        assert!(body.rotation.dot(expected).abs() > 0.999);
        assert_eq!(body.previous.rotation, Quat::IDENTITY);
    }
}
