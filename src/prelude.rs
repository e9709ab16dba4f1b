//=========================================================================
// Prelude
//=========================================================================
//
// Re-exports of the types most callers need.
//
// Usage:
//   use endurance_runner::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Engine, EngineBuilder};

// Game driver and configuration
pub use crate::core::config::{ArenaConfig, CameraConfig, GameConfig, PlayerConfig, ZoneConfig};
pub use crate::core::game::Game;
pub use crate::core::state::GameState;

// Input
pub use crate::core::input::{Control, InputSnapshot, KeyBindings, KeyCode};

// Assets and capabilities
pub use crate::core::assets::{AssetSource, BundledAssets};
pub use crate::core::capabilities::{AnimationClip, AudioTrack, HudSink, PhysicsWorld, RigidBody};
pub use crate::core::error::AssetLoadError;
