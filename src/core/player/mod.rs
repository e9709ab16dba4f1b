//=========================================================================
// Player
//=========================================================================
//
// The controllable character: kinematic movement, endurance and the
// animation state shown on the rig.
//
// Architecture:
//   Player
//     ├─ body: Box<dyn RigidBody>   (receives position + yaw)
//     ├─ animator: Animator         (one looping clip at a time)
//     ├─ endurance: Endurance       (gates sprint)
//     └─ config: PlayerConfig
//
// Per frame (`update`):
//   1. raw move input from the snapshot
//   2. camera-relative direction
//   3. endurance / sprint decision
//   4. horizontal smoothing, jump, gravity
//   5. integrate, clamp to bounds and floor
//   6. animation state, push transform to the body
//
//=========================================================================

//=== Module Declarations =================================================

mod animation;
mod endurance;
pub mod locomotion;

//=== Public API ==========================================================

pub use animation::{select_state, AnimState, Animator};
pub use endurance::{Endurance, MAX_ENDURANCE};

//=== External Dependencies ===============================================

use glam::Vec3;
use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::assets::CharacterRig;
use crate::core::camera::OrbitCamera;
use crate::core::capabilities::{PhysicsWorld, Ray, RigidBody, MASK_ALL};
use crate::core::config::PlayerConfig;
use crate::core::input::{Control, InputSnapshot};

//=== Player ==============================================================

pub struct Player {
    position: Vec3,
    velocity: Vec3,

    /// Raw input, x and z in {-1, 0, 1}.
    move_input: Vec3,

    /// Camera-relative unit direction, or zero.
    move_direction: Vec3,

    yaw: f32,
    endurance: Endurance,
    sprinting: bool,
    grounded: bool,
    anim_state: AnimState,

    body: Box<dyn RigidBody>,
    animator: Animator,
    config: PlayerConfig,
}

impl Player {
    /// Places a new character at `spawn` with a full endurance meter.
    pub fn new(spawn: Vec3, rig: CharacterRig, config: PlayerConfig) -> Self {
        let CharacterRig { mut body, clips } = rig;
        body.set_position(spawn);

        let mut animator = Animator::new(clips);
        animator.apply(AnimState::Idle);

        Self {
            position: spawn,
            velocity: Vec3::ZERO,
            move_input: Vec3::ZERO,
            move_direction: Vec3::ZERO,
            yaw: 0.0,
            endurance: Endurance::full(),
            sprinting: false,
            grounded: false,
            anim_state: AnimState::Idle,
            body,
            animator,
            config,
        }
    }

    //--- Accessors --------------------------------------------------------

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn move_input(&self) -> Vec3 {
        self.move_input
    }

    pub fn move_direction(&self) -> Vec3 {
        self.move_direction
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn endurance(&self) -> &Endurance {
        &self.endurance
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    /// Whether the last update ended resting on the floor.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn anim_state(&self) -> AnimState {
        self.anim_state
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Horizontal speed, as shown on the HUD.
    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }

    //--- Mutation ---------------------------------------------------------

    /// Faces the character along `yaw` (radians around y).
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.body.set_yaw(yaw);
    }

    /// Puts the player back at `spawn`, at rest, with a full meter.
    pub fn reset(&mut self, spawn: Vec3) {
        self.position = spawn;
        self.velocity = Vec3::ZERO;
        self.move_input = Vec3::ZERO;
        self.move_direction = Vec3::ZERO;
        self.endurance = Endurance::full();
        self.sprinting = false;
        self.grounded = false;
        self.anim_state = AnimState::Idle;
        self.animator.apply(AnimState::Idle);
        self.body.set_position(spawn);
    }

    /// Stops every animation clip (leaving gameplay).
    pub fn halt_animation(&mut self) {
        self.animator.stop_all();
    }

    /// Height of the ground under the player.
    ///
    /// Casts down from the body centre; a miss yields the configured
    /// fallback height. Geometry the centre is already inside is passed
    /// through rather than climbed.
    pub fn probe_ground(&self, world: &dyn PhysicsWorld) -> f32 {
        let ray = Ray {
            origin: self.position + Vec3::Y * self.config.half_height,
            direction: Vec3::NEG_Y,
            max_distance: self.config.ground_probe_distance,
            mask: MASK_ALL,
        };
        world
            .raycast(&ray)
            .map_or(self.config.fallback_ground_height, |hit| hit.point.y)
    }

    /// Advances the player by `delta` seconds.
    ///
    /// `ground` is the terrain height below the player, usually from
    /// [`probe_ground`](Self::probe_ground).
    pub fn update(&mut self, input: &InputSnapshot, camera: &OrbitCamera, ground: f32, delta: f32) {
        let cfg = &self.config;

        // 1-2. direction
        let (x, z) = input.move_axes();
        self.move_input = Vec3::new(x, 0.0, z);
        self.move_direction = locomotion::project_onto_camera(self.move_input, camera.forward(), camera.right());

        // 3. sprint
        let sprint_held = input.is_held(Control::Sprint);
        let wants_sprint = sprint_held && self.move_input.z > 0.0;
        self.sprinting = self.endurance.update(
            wants_sprint,
            delta,
            cfg.endurance_drain_rate,
            cfg.endurance_regen_rate,
        );

        // 4. velocity
        let speed = if self.sprinting {
            cfg.run_speed * cfg.sprint_multiplier
        } else {
            cfg.run_speed
        };
        self.velocity = locomotion::smooth_horizontal(
            self.velocity,
            self.move_direction * speed,
            cfg.acceleration,
            delta,
            cfg.stop_speed,
            cfg.max_speed(),
        );

        let floor = ground + cfg.half_height;
        if input.triggered(Control::Jump)
            && locomotion::can_jump(self.position.y, self.velocity.y, floor, cfg.jump_tolerance)
        {
            debug!("Jump from y={:.2}", self.position.y);
            self.velocity.y = cfg.jump_impulse;
        }
        self.velocity.y -= cfg.gravity * delta;

        // 5. integrate and clamp
        let moved = self.position + self.velocity * delta;
        let (mut position, mut velocity) =
            locomotion::clamp_to_bounds(moved, self.velocity, cfg.world_half_extent);
        self.grounded = locomotion::clamp_to_floor(&mut position, &mut velocity, floor);
        self.position = position;
        self.velocity = velocity;

        // 6. presentation
        self.anim_state = select_state(
            self.move_input.length(),
            sprint_held,
            self.move_input.z,
            cfg.animation_threshold,
        );
        self.animator.apply(self.anim_state);
        self.body.set_position(self.position);
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("endurance", &self.endurance.value())
            .field("anim_state", &self.anim_state)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CameraConfig;
    use crate::core::physics::StaticWorld;
    use crate::core::capabilities::Aabb;
    use crate::core::test_support::{recording_rig, BodyLog};

    const DT: f32 = 1.0 / 60.0;
    const SPAWN: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    fn player() -> (Player, BodyLog) {
        let (rig, body_log, _clips) = recording_rig();
        (Player::new(SPAWN, rig, PlayerConfig::default()), body_log)
    }

    fn camera() -> OrbitCamera {
        OrbitCamera::new(&CameraConfig::default(), SPAWN)
    }

    fn run(player: &mut Player, input: &InputSnapshot, frames: usize) {
        let camera = camera();
        for _ in 0..frames {
            player.update(input, &camera, 0.0, DT);
        }
    }

    #[test]
    fn zero_input_from_rest_does_not_move() {
        let (mut player, _) = player();
        run(&mut player, &InputSnapshot::new(), 120);

        assert_eq!(player.position(), SPAWN);
        assert_eq!(player.velocity(), Vec3::ZERO);
        assert!(player.is_grounded());
        assert_eq!(player.anim_state(), AnimState::Idle);
    }

    #[test]
    fn forward_moves_along_camera_forward() {
        let (mut player, body) = player();
        let input = InputSnapshot::new().with_held(Control::MoveForward);
        run(&mut player, &input, 60);

        assert!(player.position().z > SPAWN.z + 5.0);
        assert!(player.position().x.abs() < 1e-4);
        assert_eq!(player.anim_state(), AnimState::Run);
        assert_eq!(body.last_position(), Some(player.position()));
    }

    #[test]
    fn run_speed_is_bounded() {
        let (mut player, _) = player();
        let input = InputSnapshot::new().with_held(Control::MoveForward).with_held(Control::StrafeRight);
        run(&mut player, &input, 120);

        let config = PlayerConfig::default();
        assert!(player.horizontal_speed() <= config.run_speed + 1e-3);
    }

    #[test]
    fn sprint_doubles_speed_and_drains_endurance() {
        let (mut player, _) = player();
        let input = InputSnapshot::new().with_held(Control::MoveForward).with_held(Control::Sprint);
        run(&mut player, &input, 60);

        assert!(player.is_sprinting());
        assert_eq!(player.anim_state(), AnimState::Fast);
        assert!(player.horizontal_speed() > PlayerConfig::default().run_speed);
        assert!(player.endurance().value() < MAX_ENDURANCE);
    }

    #[test]
    fn sprint_backward_does_not_sprint() {
        let (mut player, _) = player();
        let input = InputSnapshot::new().with_held(Control::MoveBackward).with_held(Control::Sprint);
        run(&mut player, &input, 10);

        assert!(!player.is_sprinting());
        assert_eq!(player.anim_state(), AnimState::Back);
        assert_eq!(player.endurance().value(), MAX_ENDURANCE);
    }

    #[test]
    fn exhausted_sprint_falls_back_to_run_speed() {
        let (mut player, _) = player();
        let input = InputSnapshot::new().with_held(Control::MoveForward).with_held(Control::Sprint);
        // 4s drains 100 at 25/s
        run(&mut player, &input, 5 * 60);

        assert!(player.endurance().value() < 1.0);
        // Animation still shows intent even when the meter is empty
        assert_eq!(player.anim_state(), AnimState::Fast);
    }

    #[test]
    fn position_stays_in_bounds() {
        let (mut player, _) = player();
        let input = InputSnapshot::new().with_held(Control::StrafeLeft).with_held(Control::Sprint);
        run(&mut player, &input, 600);

        let extent = PlayerConfig::default().world_half_extent;
        assert_eq!(player.position().x, -extent);
        assert!(player.velocity().x >= 0.0);
    }

    #[test]
    fn single_jump_per_ground_contact() {
        let (mut player, _) = player();
        let camera = camera();
        let jump = InputSnapshot::new().with_triggered(Control::Jump);
        let idle = InputSnapshot::new();

        player.update(&jump, &camera, 0.0, DT);
        assert!(player.velocity().y > 0.0);
        let peak_speed = player.velocity().y;

        // Mashing jump mid-air changes nothing
        for _ in 0..5 {
            player.update(&jump, &camera, 0.0, DT);
            assert!(player.velocity().y < peak_speed);
        }

        // Land, then jump again
        for _ in 0..120 {
            player.update(&idle, &camera, 0.0, DT);
        }
        assert!(player.is_grounded());
        player.update(&jump, &camera, 0.0, DT);
        assert!(player.velocity().y > 0.0);
    }

    #[test]
    fn floor_follows_ground_height() {
        let (mut player, _) = player();
        let camera = camera();
        for _ in 0..10 {
            player.update(&InputSnapshot::new(), &camera, 4.0, DT);
        }
        assert_eq!(player.position().y, 5.0);
    }

    #[test]
    fn probe_ground_hits_terrain_or_falls_back() {
        let (player, _) = player();
        let mut world = StaticWorld::new();
        assert_eq!(player.probe_ground(&world), 0.0);

        world.add_static_body(
            "slab",
            Aabb::new(Vec3::new(-10.0, -2.0, -10.0), Vec3::new(10.0, 0.5, 10.0)),
            1,
        );
        assert!((player.probe_ground(&world) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn probe_ground_ignores_tall_part_around_body() {
        let (mut player, _) = player();
        let mut world = StaticWorld::new();
        world.add_static_body(
            "slab",
            Aabb::new(Vec3::new(-10.0, -2.0, -10.0), Vec3::new(10.0, 0.0, 10.0)),
            1,
        );
        world.add_static_body(
            "pillar",
            Aabb::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 5.0, 1.0)),
            1,
        );

        let ground = player.probe_ground(&world);
        assert!(ground.abs() < 1e-5, "got ground {}", ground);

        let camera = camera();
        for _ in 0..30 {
            let ground = player.probe_ground(&world);
            player.update(&InputSnapshot::new(), &camera, ground, DT);
        }
        assert!(player.position().y < 1.0 + 1e-4);
    }

    #[test]
    fn set_yaw_reaches_body() {
        let (mut player, body) = player();
        player.set_yaw(1.25);
        assert_eq!(player.yaw(), 1.25);
        assert_eq!(body.last_yaw(), Some(1.25));
    }

    #[test]
    fn reset_restores_spawn_state() {
        let (mut player, _) = player();
        let input = InputSnapshot::new().with_held(Control::MoveForward).with_held(Control::Sprint);
        run(&mut player, &input, 30);

        player.reset(SPAWN);

        assert_eq!(player.position(), SPAWN);
        assert_eq!(player.velocity(), Vec3::ZERO);
        assert_eq!(player.endurance().value(), MAX_ENDURANCE);
        assert_eq!(player.anim_state(), AnimState::Idle);
        assert!(player.animator().is_playing(AnimState::Idle));
    }

    #[test]
    fn no_nan_under_extreme_steps() {
        let (mut player, _) = player();
        let camera = camera();
        let input = InputSnapshot::new().with_held(Control::MoveForward).with_triggered(Control::Jump);
        for delta in [1e-6, 0.5, 3.0] {
            player.update(&input, &camera, 0.0, delta);
            assert!(!player.position().is_nan());
            assert!(!player.velocity().is_nan());
        }
    }
}
