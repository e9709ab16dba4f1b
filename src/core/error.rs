//=========================================================================
// Error Types
//=========================================================================
//
// Errors surfaced by the game core. Per-frame logic has no failure paths
// (out-of-range values are clamped), so errors only arise at startup
// (asset loading), on state-machine misuse and in the windowing layer.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::state::GameState;

//=== AssetLoadError ======================================================

/// Failure to load one of the startup assets.
///
/// Startup is retryable: the game keeps the error, shows it on the HUD and
/// waits for a retry instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetLoadError {
    /// The asset source has no entry with that name.
    #[error("asset `{name}` not found")]
    NotFound { name: String },

    /// The asset exists but could not be decoded.
    #[error("asset `{name}` could not be decoded: {reason}")]
    Decode { name: String, reason: String },

    /// The asset decoded to nothing usable (e.g. a terrain without meshes).
    #[error("asset `{name}` is empty")]
    Empty { name: String },
}

impl AssetLoadError {
    /// Name of the asset that failed.
    pub fn asset_name(&self) -> &str {
        match self {
            Self::NotFound { name } | Self::Decode { name, .. } | Self::Empty { name } => name,
        }
    }
}

//=== TransitionError =====================================================

/// A game-state change that is not in the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("illegal game-state transition {from:?} -> {to:?}")]
    Illegal { from: GameState, to: GameState },
}

//=== PlatformError =======================================================

/// Windowing failures. These are fatal: without an event loop the game
/// cannot receive input.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Failed to create the event loop (OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    /// The event loop stopped with an error.
    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),
}

//=== EngineError =========================================================

/// Why [`Engine::run`](crate::Engine::run) stopped abnormally.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// The logic thread panicked; the payload message when it was a string.
    #[error("core thread panicked: {0}")]
    CoreThreadPanicked(String),
}

//=========================================================================
// Unit Tests
//=========================================================================
