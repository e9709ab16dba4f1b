//=========================================================================
// Game Context
//=========================================================================
//
// Shared, explicitly owned state handed to the game's components.
//
// Architecture:
//   GameContext (owned by Game, passed by &mut)
//     ├─ state: GameStateMachine
//     ├─ clock: SessionClock
//     ├─ sound: SoundManager
//     ├─ hud: Box<dyn HudSink>
//     └─ config: GameConfig
//
// There is exactly one context per game and no global access path to it.
//
//=========================================================================

//=== Module Declarations =================================================

mod clock;
mod game_context;

//=== Public API ==========================================================

pub use clock::SessionClock;
pub use game_context::GameContext;
