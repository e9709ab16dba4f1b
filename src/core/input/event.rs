//=========================================================================
// Input Event Types
//
// Portable representation of the keyboard and pointer events the game
// reacts to. The platform layer converts winit events into these before
// they cross the thread boundary.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (held keys + released-this-frame actions)
//         ↓
//    InputSnapshot (Controls, consumed by the game)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the produced character, so
/// `KeyW` is the same key on QWERTY and AZERTY layouts. The set covers the
/// keys the game binds plus the usual alphanumerics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Modifier Keys ----------------------------------------------------

    /// Left Shift, tracked as a regular held key (sprint).
    ShiftLeft,

    /// Right Shift.
    ShiftRight,

    ControlLeft,
    ControlRight,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,

    /// Fallback for keys the platform reports but the game does not map.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// # Equality & Hashing
///
/// Key events compare by type and key. `MouseMoved` events compare equal
/// regardless of coordinates so a frame buffer can coalesce them (last
/// position wins).
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Cursor moved to a new position (pixels, top-left origin).
    MouseMoved { x: f32, y: f32 },

    /// Unrecognized event, ignored by the tracker.
    Unidentified,
}

impl InputEvent {
    /// Returns the key carried by a key event.
    pub fn key(&self) -> Option<KeyCode> {
        match self {
            Self::KeyDown(key) | Self::KeyUp(key) => Some(*key),
            _ => None,
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown(a), KeyDown(b)) => a == b,
            (KeyUp(a), KeyUp(b)) => a == b,
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        // Coordinates are not hashed, consistent with equality.
        if let Self::KeyDown(key) | Self::KeyUp(key) = self {
            key.hash(state);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
