//=========================================================================
// Capability Interfaces
//=========================================================================
//
// Contracts for the collaborators the game core drives but does not
// implement itself: a transform/body for the player, animation clips,
// audio tracks, static physics and the HUD.
//
// The core depends only on these traits, so gameplay logic runs against
// the in-crate implementations, a real engine binding, or test doubles.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use crate::core::hud::HudFrame;

//=== RigidBody ===========================================================

/// Kinematic body whose transform the game sets every frame.
pub trait RigidBody {
    fn set_position(&mut self, position: Vec3);

    fn position(&self) -> Vec3;

    /// Rotation around the vertical axis, radians.
    fn set_yaw(&mut self, yaw: f32);
}

//=== AnimationClip =======================================================

/// A looping animation owned by the character rig.
pub trait AnimationClip {
    /// Starts looping from the beginning.
    fn play_looping(&mut self);

    fn stop(&mut self);

    fn is_playing(&self) -> bool;
}

//=== AudioTrack ==========================================================

/// A decoded music track or sound effect.
pub trait AudioTrack {
    fn play(&mut self);

    fn stop(&mut self);

    fn is_playing(&self) -> bool;
}

//=== PhysicsWorld ========================================================

/// Axis-aligned box used for static bodies and trigger volumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Builds a box from two arbitrary corners.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self::new(center - half, center + half)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Scales the box about the origin, then moves it by `offset`.
    pub fn scaled_then_offset(&self, scale: f32, offset: Vec3) -> Self {
        Self::new(self.min * scale + offset, self.max * scale + offset)
    }
}

/// Bit mask selecting which body groups a raycast tests against.
pub type CollisionMask = u32;

/// Mask matching every group.
pub const MASK_ALL: CollisionMask = u32::MAX;

/// Ray query against static geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub max_distance: f32,
    pub mask: CollisionMask,
}

/// Closest intersection reported by a raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    pub distance: f32,
}

/// Static geometry the player can stand on.
pub trait PhysicsWorld {
    /// Registers an immovable (mass 0) body. Returns its handle.
    fn add_static_body(&mut self, name: &str, bounds: Aabb, group: CollisionMask) -> usize;

    /// Closest hit along the ray, if any. Bodies containing the ray
    /// origin are not reported.
    fn raycast(&self, ray: &Ray) -> Option<RayHit>;

    fn static_body_count(&self) -> usize;
}

//=== HudSink =============================================================

/// Read-only display surface fed once per frame.
pub trait HudSink {
    fn publish(&mut self, frame: &HudFrame);

    fn set_menu_visible(&mut self, visible: bool);
}

//=========================================================================
// Unit Tests
//=========================================================================
