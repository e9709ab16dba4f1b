//=========================================================================
// Static Physics
//=========================================================================
//
// Minimal in-crate physics: immovable boxes queried by raycast, and a
// kinematic body that just stores the transform it is given.
//
// The arena registers one box per terrain part; the player probes the
// ground beneath it with a downward ray.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::capabilities::{Aabb, CollisionMask, PhysicsWorld, Ray, RayHit, RigidBody};

//=== StaticWorld =========================================================

#[derive(Debug, Clone)]
struct StaticBody {
    name: String,
    bounds: Aabb,
    group: CollisionMask,
}

/// Collection of mass-0 boxes.
#[derive(Debug, Default)]
pub struct StaticWorld {
    bodies: Vec<StaticBody>,
}

impl StaticWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name and bounds of the body behind `handle`.
    pub fn body(&self, handle: usize) -> Option<(&str, Aabb)> {
        self.bodies.get(handle).map(|b| (b.name.as_str(), b.bounds))
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}

impl PhysicsWorld for StaticWorld {
    fn add_static_body(&mut self, name: &str, bounds: Aabb, group: CollisionMask) -> usize {
        debug!("Static body '{}' {:?}..{:?}", name, bounds.min, bounds.max);
        self.bodies.push(StaticBody {
            name: name.to_string(),
            bounds,
            group,
        });
        self.bodies.len() - 1
    }

    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        let direction = ray.direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return None;
        }

        let hit = self
            .bodies
            .iter()
            .filter(|body| body.group & ray.mask != 0)
            .filter_map(|body| slab_intersect(ray.origin, direction, &body.bounds))
            .filter(|&t| t <= ray.max_distance)
            .min_by(|a, b| a.total_cmp(b))
            .map(|distance| RayHit {
                point: ray.origin + direction * distance,
                distance,
            });

        trace!("raycast from {:?} -> {:?}", ray.origin, hit);
        hit
    }

    fn static_body_count(&self) -> usize {
        self.bodies.len()
    }
}

/// Entry distance of a ray into a box, slab method.
///
/// A ray starting strictly inside the box never enters it and misses.
/// Origins on a face still hit at `0.0`.
fn slab_intersect(origin: Vec3, direction: Vec3, bounds: &Aabb) -> Option<f32> {
    if origin.cmpgt(bounds.min).all() && origin.cmplt(bounds.max).all() {
        return None;
    }

    let mut t_min = 0.0_f32;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];
        let (lo, hi) = (bounds.min[axis], bounds.max[axis]);

        if d.abs() < f32::EPSILON {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let (mut t0, mut t1) = ((lo - o) * inv, (hi - o) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }

    Some(t_min)
}

//=== KinematicBody =======================================================

/// Body moved only by explicit transform writes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KinematicBody {
    position: Vec3,
    yaw: f32,
}

impl KinematicBody {
    pub fn new(position: Vec3) -> Self {
        Self { position, yaw: 0.0 }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }
}

impl RigidBody for KinematicBody {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
