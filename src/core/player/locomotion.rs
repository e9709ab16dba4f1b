//=========================================================================
// Locomotion
//=========================================================================
//
// Pure per-frame movement math. `Player::update` strings these together:
//
//   move input ─► camera projection ─► target velocity
//        └─► smoothing ─► gravity/jump ─► integrate ─► bounds/floor clamp
//
// Functions take plain values so each step is testable on its own.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Direction ===========================================================

/// Projects raw input `(x, _, z)` onto the camera's horizontal axes.
///
/// Vertical components of `forward` and `right` are discarded and both are
/// re-normalized. The result is unit length, or zero when the input (or the
/// projected sum) vanishes.
pub fn project_onto_camera(input: Vec3, forward: Vec3, right: Vec3) -> Vec3 {
    let flat_forward = flatten(forward);
    let flat_right = flatten(right);

    (flat_forward * input.z + flat_right * input.x).normalize_or_zero()
}

fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

//=== Horizontal velocity =================================================

/// Moves horizontal velocity toward `target` with exponential smoothing.
///
/// The blend factor is `acceleration * delta`, capped at 1 so large steps
/// land on the target instead of overshooting. With no target, speeds under
/// `stop_speed` snap to zero. The y component of `current` passes through.
pub fn smooth_horizontal(
    current: Vec3,
    target: Vec3,
    acceleration: f32,
    delta: f32,
    stop_speed: f32,
    max_speed: f32,
) -> Vec3 {
    let horizontal = Vec3::new(current.x, 0.0, current.z);
    let target = Vec3::new(target.x, 0.0, target.z);

    let blend = (acceleration * delta).clamp(0.0, 1.0);
    let mut next = horizontal + (target - horizontal) * blend;

    if target == Vec3::ZERO && next.length() < stop_speed {
        next = Vec3::ZERO;
    }
    next = next.clamp_length_max(max_speed);

    Vec3::new(next.x, current.y, next.z)
}

//=== Vertical velocity ===================================================

/// Whether a jump may start: near the floor and not already rising.
pub fn can_jump(y: f32, vertical_velocity: f32, floor: f32, tolerance: f32) -> bool {
    y <= floor + tolerance && vertical_velocity <= 0.0
}

//=== Clamping ============================================================

/// Keeps `position` inside the square `[-extent, extent]` on x and z.
///
/// At a wall the velocity component pointing further out is zeroed, so the
/// player slides along it. Returns the corrected `(position, velocity)`.
pub fn clamp_to_bounds(mut position: Vec3, mut velocity: Vec3, extent: f32) -> (Vec3, Vec3) {
    if position.x > extent {
        position.x = extent;
        velocity.x = velocity.x.min(0.0);
    } else if position.x < -extent {
        position.x = -extent;
        velocity.x = velocity.x.max(0.0);
    }

    if position.z > extent {
        position.z = extent;
        velocity.z = velocity.z.min(0.0);
    } else if position.z < -extent {
        position.z = -extent;
        velocity.z = velocity.z.max(0.0);
    }

    (position, velocity)
}

/// Stops the body at `floor`. Returns `true` if it was resting on it.
pub fn clamp_to_floor(position: &mut Vec3, velocity: &mut Vec3, floor: f32) -> bool {
    if position.y > floor {
        return false;
    }
    position.y = floor;
    if velocity.y < 0.0 {
        velocity.y = 0.0;
    }
    true
}

//=========================================================================
// Unit Tests
//=========================================================================
