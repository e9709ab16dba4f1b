//=========================================================================
// Input Snapshot
//=========================================================================
//
// Immutable per-frame view of the controls, built from the state tracker
// through the key bindings. Gameplay code only ever sees this type.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::control::{Control, KeyBindings};
use super::state_tracker::StateTracker;

//=== InputSnapshot =======================================================

/// Controls held this frame plus the one-shot controls fired this frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    held: HashSet<Control>,
    triggered: HashSet<Control>,
    look_delta: (f32, f32),
}

impl InputSnapshot {
    /// Creates an empty snapshot (nothing held, nothing fired).
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves tracker state through `bindings`.
    pub fn capture(tracker: &StateTracker, bindings: &KeyBindings) -> Self {
        let held = tracker
            .held_keys()
            .filter_map(|key| bindings.control_for(*key))
            .collect();
        let triggered = tracker
            .action_keys()
            .filter_map(|key| bindings.control_for(*key))
            .collect();

        Self {
            held,
            triggered,
            look_delta: tracker.mouse_delta(),
        }
    }

    //--- Builders (tests and scripted input) -----------------------------

    /// Marks `control` as held.
    pub fn with_held(mut self, control: Control) -> Self {
        self.held.insert(control);
        self
    }

    /// Marks `control` as fired this frame.
    pub fn with_triggered(mut self, control: Control) -> Self {
        self.triggered.insert(control);
        self
    }

    pub fn with_look_delta(mut self, dx: f32, dy: f32) -> Self {
        self.look_delta = (dx, dy);
        self
    }

    //--- Queries ----------------------------------------------------------

    /// Level-triggered query.
    pub fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    /// Edge-triggered query.
    pub fn triggered(&self, control: Control) -> bool {
        self.triggered.contains(&control)
    }

    /// Pointer movement this frame, used for camera orbit.
    pub fn look_delta(&self) -> (f32, f32) {
        self.look_delta
    }

    /// Raw movement axes `(x, z)`, each in {-1, 0, 1}.
    ///
    /// Opposing controls cancel out.
    pub fn move_axes(&self) -> (f32, f32) {
        let axis = |neg: Control, pos: Control| -> f32 {
            match (self.is_held(neg), self.is_held(pos)) {
                (true, false) => -1.0,
                (false, true) => 1.0,
                _ => 0.0,
            }
        };

        (
            axis(Control::StrafeLeft, Control::StrafeRight),
            axis(Control::MoveBackward, Control::MoveForward),
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{InputEvent, KeyCode};

    #[test]
    fn capture_maps_keys_to_controls() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[
            InputEvent::KeyDown(KeyCode::KeyW),
            InputEvent::KeyDown(KeyCode::ShiftLeft),
            InputEvent::KeyDown(KeyCode::Space),
            InputEvent::KeyUp(KeyCode::Space),
        ]);

        let snapshot = InputSnapshot::capture(&tracker, &KeyBindings::default());

        assert!(snapshot.is_held(Control::MoveForward));
        assert!(snapshot.is_held(Control::Sprint));
        assert!(!snapshot.is_held(Control::Jump));
        assert!(snapshot.triggered(Control::Jump));
    }

    #[test]
    fn unbound_keys_are_dropped() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[InputEvent::KeyDown(KeyCode::KeyZ)]);

        let snapshot = InputSnapshot::capture(&tracker, &KeyBindings::default());
        assert_eq!(snapshot, InputSnapshot::new());
    }

    #[test]
    fn move_axes_follow_held_controls() {
        let snapshot = InputSnapshot::new()
            .with_held(Control::MoveForward)
            .with_held(Control::StrafeLeft);
        assert_eq!(snapshot.move_axes(), (-1.0, 1.0));

        let snapshot = InputSnapshot::new().with_held(Control::MoveBackward);
        assert_eq!(snapshot.move_axes(), (0.0, -1.0));
    }

    #[test]
    fn opposing_controls_cancel() {
        let snapshot = InputSnapshot::new()
            .with_held(Control::StrafeLeft)
            .with_held(Control::StrafeRight)
            .with_held(Control::MoveForward)
            .with_held(Control::MoveBackward);

        assert_eq!(snapshot.move_axes(), (0.0, 0.0));
    }
}
