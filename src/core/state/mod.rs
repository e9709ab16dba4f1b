//=========================================================================
// Game State
//=========================================================================
//
// Coarse game phases and the table of legal phase changes.
//
// Architecture:
//   GameStateMachine
//     ├─ current: GameState
//     └─ requests: RequestQueue (applied at frame boundary)
//
// Every change goes through `GameStateMachine::transition`, which checks
// the (from, to) pair against `TRANSITIONS`.
//
//=========================================================================

//=== Module Declarations =================================================

mod machine;
mod request_queue;

//=== Public API ==========================================================

pub use machine::GameStateMachine;
pub use request_queue::RequestQueue;

//=== GameState ===========================================================

/// Phase of the game, from boot to shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Nothing constructed yet.
    #[default]
    None,
    /// Context constructed, assets not requested yet.
    Init,
    /// Startup assets are loading.
    Loading,
    PreIntro,
    /// Main menu overlay is shown.
    Menu,
    StartIntro,
    Intro,
    /// Menu dismissed, session being reset.
    StartGame,
    NewLevel,
    /// Level built, first gameplay frame pending.
    LevelReady,
    /// Gameplay frames are running.
    Running,
    Pause,
    Lose,
    GameOver,
    /// Terminal state.
    End,
}

use GameState as S;

/// Allowed `(from, to)` pairs. Anything else is rejected.
pub const TRANSITIONS: &[(GameState, GameState)] = &[
    (S::None, S::Init),
    (S::Init, S::Loading),
    (S::Loading, S::PreIntro),
    (S::Loading, S::Menu),
    // failed startup falls back so it can be retried
    (S::Loading, S::Init),
    (S::PreIntro, S::Menu),
    (S::Menu, S::StartIntro),
    (S::Menu, S::StartGame),
    (S::Menu, S::End),
    (S::StartIntro, S::Intro),
    (S::Intro, S::StartGame),
    (S::StartGame, S::NewLevel),
    (S::StartGame, S::LevelReady),
    (S::NewLevel, S::LevelReady),
    (S::LevelReady, S::Running),
    (S::Running, S::Pause),
    (S::Running, S::Lose),
    (S::Running, S::GameOver),
    (S::Running, S::NewLevel),
    (S::Pause, S::Running),
    (S::Pause, S::GameOver),
    (S::Pause, S::Menu),
    (S::Lose, S::NewLevel),
    (S::Lose, S::GameOver),
    (S::GameOver, S::Menu),
    (S::GameOver, S::End),
];

impl GameState {
    /// Whether `self -> to` appears in the transition table.
    pub fn can_transition_to(self, to: GameState) -> bool {
        TRANSITIONS.iter().any(|&(from, target)| from == self && target == to)
    }

    /// States reachable in one step from `self`.
    pub fn successors(self) -> impl Iterator<Item = GameState> {
        TRANSITIONS
            .iter()
            .filter(move |(from, _)| *from == self)
            .map(|(_, to)| *to)
    }

    /// Whether gameplay (player, zones, timer) is simulated in this state.
    pub fn is_gameplay(self) -> bool {
        matches!(self, GameState::Running)
    }

    pub fn is_terminal(self) -> bool {
        self.successors().next().is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
