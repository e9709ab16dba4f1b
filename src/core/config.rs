//=========================================================================
// Game Configuration
//=========================================================================
//
// Tuning values for every gameplay component, grouped per component.
// Defaults reproduce the stock game feel; `with_*` setters validate
// their input and panic on nonsensical values, like the engine builder.
//
// Units: world units, seconds, radians.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use crate::core::capabilities::Aabb;
use crate::core::input::KeyBindings;

//=== PlayerConfig ========================================================

/// Locomotion, jump and endurance tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    // ------------------------------------------------------------------
    // Horizontal movement
    // ------------------------------------------------------------------
    /// Target speed when running (units/second).
    pub run_speed: f32,

    /// Target speed factor while sprinting.
    pub sprint_multiplier: f32,

    /// Rate at which velocity converges on its target (1/second).
    pub acceleration: f32,

    /// Below this horizontal speed, with no input, the player stops dead.
    pub stop_speed: f32,

    // ------------------------------------------------------------------
    // Vertical movement
    // ------------------------------------------------------------------
    /// Downward acceleration (units/second²).
    pub gravity: f32,

    /// Upward speed set by a jump (units/second).
    pub jump_impulse: f32,

    /// Height above the floor at which a falling player may still jump.
    pub jump_tolerance: f32,

    /// Distance from the body centre to its feet.
    pub half_height: f32,

    /// How far below the body the ground probe looks.
    pub ground_probe_distance: f32,

    // ------------------------------------------------------------------
    // World bounds
    // ------------------------------------------------------------------
    /// Horizontal position is kept in `[-extent, extent]` on x and z.
    pub world_half_extent: f32,

    /// Floor used when the ground probe hits nothing.
    pub fallback_ground_height: f32,

    // ------------------------------------------------------------------
    // Endurance
    // ------------------------------------------------------------------
    /// Endurance lost per second while sprinting.
    pub endurance_drain_rate: f32,

    /// Endurance recovered per second otherwise.
    pub endurance_regen_rate: f32,

    // ------------------------------------------------------------------
    // Animation
    // ------------------------------------------------------------------
    /// Minimum move-input magnitude that counts as moving.
    pub animation_threshold: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            run_speed: 25.0,
            sprint_multiplier: 2.0,
            acceleration: 10.0,
            stop_speed: 0.5,

            gravity: 100.0,
            jump_impulse: 50.0,
            jump_tolerance: 1.0,
            half_height: 1.0,
            ground_probe_distance: 50.0,

            world_half_extent: 30.0,
            fallback_ground_height: 0.0,

            endurance_drain_rate: 25.0,
            endurance_regen_rate: 10.0,

            animation_threshold: 0.1,
        }
    }
}

impl PlayerConfig {
    /// Top horizontal speed (sprinting).
    pub fn max_speed(&self) -> f32 {
        self.run_speed * self.sprint_multiplier
    }

    /// # Panics
    ///
    /// Panics if `speed <= 0.0`.
    pub fn with_run_speed(mut self, speed: f32) -> Self {
        assert!(speed > 0.0, "Run speed must be positive, got {}", speed);
        self.run_speed = speed;
        self
    }

    /// # Panics
    ///
    /// Panics if `rate <= 0.0`.
    pub fn with_acceleration(mut self, rate: f32) -> Self {
        assert!(rate > 0.0, "Acceleration must be positive, got {}", rate);
        self.acceleration = rate;
        self
    }

    /// # Panics
    ///
    /// Panics unless both rates are positive.
    pub fn with_endurance_rates(mut self, drain: f32, regen: f32) -> Self {
        assert!(drain > 0.0 && regen > 0.0, "Endurance rates must be positive");
        self.endurance_drain_rate = drain;
        self.endurance_regen_rate = regen;
        self
    }

    /// # Panics
    ///
    /// Panics if `extent <= 0.0`.
    pub fn with_world_half_extent(mut self, extent: f32) -> Self {
        assert!(extent > 0.0, "World extent must be positive, got {}", extent);
        self.world_half_extent = extent;
        self
    }
}

//=== CameraConfig ========================================================

/// Orbit camera following the player.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Yaw change per pixel of horizontal pointer movement.
    pub orbit_sensitivity: f32,

    pub initial_yaw: f32,

    /// Distance behind the target.
    pub distance: f32,

    /// Height above the target.
    pub height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            orbit_sensitivity: 0.005,
            initial_yaw: 0.0,
            distance: 10.0,
            height: 5.0,
        }
    }
}

//=== ArenaConfig =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ArenaConfig {
    /// Asset name of the terrain model.
    pub terrain_asset: String,

    pub position: Vec3,

    /// Uniform scale applied to the imported terrain.
    pub scale: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            terrain_asset: "models/terrain".to_string(),
            position: Vec3::ZERO,
            scale: 2.5,
        }
    }
}

//=== ZoneConfig ==========================================================

/// Start and finish trigger volumes for the lap timer.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneConfig {
    pub start: Aabb,
    pub finish: Aabb,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            start: Aabb::from_center_half_extents(
                Vec3::new(-20.0, 2.0, -25.0),
                Vec3::new(5.0, 3.0, 2.0),
            ),
            finish: Aabb::from_center_half_extents(
                Vec3::new(20.0, 2.0, 25.0),
                Vec3::new(5.0, 3.0, 2.0),
            ),
        }
    }
}

//=== GameConfig ==========================================================

/// Everything the game driver needs to build a session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub camera: CameraConfig,
    pub arena: ArenaConfig,
    pub zones: ZoneConfig,
    pub bindings: KeyBindings,

    /// Where the player appears at the start of each run.
    pub spawn: Vec3,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            camera: CameraConfig::default(),
            arena: ArenaConfig::default(),
            zones: ZoneConfig::default(),
            bindings: KeyBindings::default(),
            spawn: Vec3::new(-20.0, 1.0, -29.0),
        }
    }
}

impl GameConfig {
    pub fn with_player(mut self, player: PlayerConfig) -> Self {
        self.player = player;
        self
    }

    pub fn with_zones(mut self, zones: ZoneConfig) -> Self {
        self.zones = zones;
        self
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// # Panics
    ///
    /// Panics if the spawn point lies outside the world bounds.
    pub fn with_spawn(mut self, spawn: Vec3) -> Self {
        let extent = self.player.world_half_extent;
        assert!(
            spawn.x.abs() <= extent && spawn.z.abs() <= extent,
            "Spawn {:?} outside world bounds ±{}",
            spawn,
            extent
        );
        self.spawn = spawn;
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_tuning() {
        let config = PlayerConfig::default();
        assert_eq!(config.run_speed, 25.0);
        assert_eq!(config.gravity, 100.0);
        assert_eq!(config.jump_impulse, 50.0);
        assert_eq!(config.world_half_extent, 30.0);
        assert!(config.endurance_regen_rate < config.endurance_drain_rate);
        assert_eq!(config.max_speed(), 50.0);
    }

    #[test]
    fn default_spawn_is_outside_both_zones() {
        let config = GameConfig::default();
        assert!(!config.zones.start.contains(config.spawn));
        assert!(!config.zones.finish.contains(config.spawn));
    }

    #[test]
    fn setters_apply_values() {
        let config = PlayerConfig::default()
            .with_run_speed(10.0)
            .with_acceleration(4.0)
            .with_endurance_rates(30.0, 5.0)
            .with_world_half_extent(12.0);

        assert_eq!(config.run_speed, 10.0);
        assert_eq!(config.acceleration, 4.0);
        assert_eq!(config.endurance_drain_rate, 30.0);
        assert_eq!(config.endurance_regen_rate, 5.0);
        assert_eq!(config.world_half_extent, 12.0);
    }

    #[test]
    #[should_panic(expected = "Run speed must be positive")]
    fn zero_run_speed_panics() {
        PlayerConfig::default().with_run_speed(0.0);
    }

    #[test]
    #[should_panic(expected = "Endurance rates must be positive")]
    fn negative_regen_panics() {
        PlayerConfig::default().with_endurance_rates(10.0, -1.0);
    }

    #[test]
    #[should_panic(expected = "outside world bounds")]
    fn spawn_outside_bounds_panics() {
        GameConfig::default().with_spawn(Vec3::new(100.0, 1.0, 0.0));
    }
}
