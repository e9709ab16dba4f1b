//=========================================================================
// Game Context
//=========================================================================
//
// Shared data container for the game's components.
//
// Contains the data more than one component reads or writes:
// - state: the single game-state machine
// - clock: session time used by the lap timer
// - sound: loaded music and effects
// - hud: display sink
// - config: active tuning
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::SessionClock;
use crate::core::audio::SoundManager;
use crate::core::capabilities::HudSink;
use crate::core::config::GameConfig;
use crate::core::state::GameStateMachine;

//=== GameContext =========================================================

/// Explicitly owned game-wide state.
///
/// Constructed once by the driver and passed by reference to whatever
/// needs it; components never reach it through a global.
pub struct GameContext {
    /// Current game phase. All phase changes go through here.
    pub state: GameStateMachine,

    /// Accumulated frame time.
    pub clock: SessionClock,

    /// Empty until startup loading succeeds.
    pub sound: SoundManager,

    pub hud: Box<dyn HudSink>,

    pub config: GameConfig,

    /// Debug overlay toggle.
    pub inspector: bool,
}

impl GameContext {
    pub fn new(config: GameConfig, hud: Box<dyn HudSink>) -> Self {
        Self {
            state: GameStateMachine::new(),
            clock: SessionClock::new(),
            sound: SoundManager::new(),
            hud,
            config,
            inspector: false,
        }
    }
}

impl std::fmt::Debug for GameContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameContext")
            .field("state", &self.state)
            .field("clock", &self.clock)
            .field("sound", &self.sound)
            .field("inspector", &self.inspector)
            .finish_non_exhaustive()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
