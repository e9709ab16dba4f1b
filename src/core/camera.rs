//=========================================================================
// Orbit Camera
//=========================================================================
//
// Follows the player.
//
// Axis convention: y up, +z forward at yaw 0, +x to the right.
//
//=========================================================================

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::core::config::CameraConfig;

/// Third-person camera orbiting a target around the vertical axis.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Orbit angle around the y axis, radians in `[-PI, PI)`.
    yaw: f32,

    /// Point the camera looks at.
    target: Vec3,

    distance: f32,
    height: f32,
    sensitivity: f32,
}

impl OrbitCamera {
    pub fn new(config: &CameraConfig, target: Vec3) -> Self {
        Self {
            yaw: wrap_angle(config.initial_yaw),
            target,
            distance: config.distance,
            height: config.height,
            sensitivity: config.orbit_sensitivity,
        }
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = wrap_angle(yaw);
    }

    /// Rotates the orbit by a horizontal pointer delta (pixels).
    pub fn orbit(&mut self, pointer_dx: f32) {
        self.set_yaw(self.yaw + pointer_dx * self.sensitivity);
    }

    pub fn follow(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Vec3 {
        self.target - self.heading() * self.distance + Vec3::Y * self.height
    }

    /// Look direction, tilted down toward the target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye()).normalize_or_zero()
    }

    /// Horizontal right-hand axis.
    pub fn right(&self) -> Vec3 {
        Vec3::Y.cross(self.heading())
    }

    /// Horizontal unit vector the camera faces.
    fn heading(&self) -> Vec3 {
        let (sin, cos) = self.yaw.sin_cos();
        Vec3::new(sin, 0.0, cos)
    }
}

fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}
