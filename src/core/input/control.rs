//=========================================================================
// Controls & Key Bindings
//=========================================================================
//
// Game-level controls and the key → control table.
//
// Architecture:
//   KeyCode → HashMap → Control
//
// Several keys may drive the same control (W and ArrowUp both move
// forward, either Shift sprints). A key drives at most one control.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::event::KeyCode;

//=== Control =============================================================

/// High-level command the game reads from the input snapshot.
///
/// Movement and sprint are read level-triggered (held). The remaining
/// controls are read edge-triggered, firing on key release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    Sprint,
    Jump,

    /// Start the game from the menu, leave the game-over screen.
    Confirm,

    /// Toggle pause while running.
    Pause,

    /// Abandon the current run.
    Quit,

    /// Toggle the debug inspector overlay.
    ToggleInspector,

    /// Retry a failed startup.
    RetryLoad,
}

//=== KeyBindings =========================================================

/// Maps physical keys to controls.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Control>,
}

impl KeyBindings {
    /// Creates an empty table. See [`KeyBindings::default`] for the stock layout.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds `key` to `control`, replacing any previous binding of `key`.
    pub fn bind(&mut self, key: KeyCode, control: Control) -> &mut Self {
        if let Some(previous) = self.bindings.insert(key, control) {
            if previous != control {
                debug!("Rebound {:?} from {:?} to {:?}", key, previous, control);
            }
        }
        self
    }

    /// Removes the binding of `key`, returning the control it drove.
    pub fn unbind(&mut self, key: KeyCode) -> Option<Control> {
        self.bindings.remove(&key)
    }

    /// Returns the control bound to `key`.
    pub fn control_for(&self, key: KeyCode) -> Option<Control> {
        self.bindings.get(&key).copied()
    }

    /// Returns every key bound to `control`.
    pub fn keys_for(&self, control: Control) -> Vec<KeyCode> {
        self.bindings
            .iter()
            .filter(|(_, c)| **c == control)
            .map(|(k, _)| *k)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindings {
    /// WASD + arrows, Shift to sprint, Space to jump.
    fn default() -> Self {
        let mut table = Self::empty();
        table
            .bind(KeyCode::KeyW, Control::MoveForward)
            .bind(KeyCode::ArrowUp, Control::MoveForward)
            .bind(KeyCode::KeyS, Control::MoveBackward)
            .bind(KeyCode::ArrowDown, Control::MoveBackward)
            .bind(KeyCode::KeyA, Control::StrafeLeft)
            .bind(KeyCode::ArrowLeft, Control::StrafeLeft)
            .bind(KeyCode::KeyD, Control::StrafeRight)
            .bind(KeyCode::ArrowRight, Control::StrafeRight)
            .bind(KeyCode::ShiftLeft, Control::Sprint)
            .bind(KeyCode::ShiftRight, Control::Sprint)
            .bind(KeyCode::Space, Control::Jump)
            .bind(KeyCode::Enter, Control::Confirm)
            .bind(KeyCode::Escape, Control::Pause)
            .bind(KeyCode::KeyQ, Control::Quit)
            .bind(KeyCode::KeyI, Control::ToggleInspector)
            .bind(KeyCode::KeyR, Control::RetryLoad);
        table
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
