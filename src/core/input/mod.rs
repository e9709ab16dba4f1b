//=========================================================================
// Input System
//
// High-level interface for input handling on the logic thread.
// Owns the raw `StateTracker` and the `KeyBindings`, and produces one
// `InputSnapshot` per frame for the game.
//
// Responsibilities:
// - Apply batches of platform events to the tracker in arrival order
// - Resolve held keys and released keys into controls
// - Drop edge-triggered state once the frame has been consumed
//
// Frame lifecycle:
//   process_frame(batches) → InputSnapshot → (game update) → end_frame()
//
//=========================================================================

//=== Submodules ==========================================================

pub mod control;
pub mod event;
pub mod snapshot;
pub mod state_tracker;

//=== Public API ==========================================================

pub use control::{Control, KeyBindings};
pub use event::{InputEvent, KeyCode};
pub use snapshot::InputSnapshot;
pub use state_tracker::StateTracker;

//=== External Crates =====================================================

use log::trace;

//=== InputSystem =========================================================

/// Turns platform event batches into per-frame input snapshots.
pub struct InputSystem {
    tracker: StateTracker,
    bindings: KeyBindings,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            tracker: StateTracker::new(),
            bindings,
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Applies every batch received this frame and captures the snapshot.
    pub fn process_frame(&mut self, batches: &[Vec<InputEvent>]) -> InputSnapshot {
        self.apply(batches);
        self.snapshot()
    }

    /// Like [`process_frame`](Self::process_frame), but every key held
    /// after the first `reset_at` batches is forgotten before the rest
    /// apply. Used when the window lost focus mid-frame: the platform never
    /// reports releases for keys held at that moment.
    pub fn process_frame_with_reset(&mut self, batches: &[Vec<InputEvent>], reset_at: usize) -> InputSnapshot {
        let (before, after) = batches.split_at(reset_at.min(batches.len()));
        self.apply(before);
        self.reset();
        self.apply(after);
        self.snapshot()
    }

    fn apply(&mut self, batches: &[Vec<InputEvent>]) {
        for batch in batches {
            trace!(target: "core::input", "Applying batch of {} events", batch.len());
            self.tracker.process_events(batch);
        }
    }

    fn snapshot(&self) -> InputSnapshot {
        InputSnapshot::capture(&self.tracker, &self.bindings)
    }

    /// Clears edge-triggered actions after the frame was consumed.
    pub fn end_frame(&mut self) {
        self.tracker.end_frame();
    }

    /// Forgets held keys (focus loss).
    pub fn reset(&mut self) {
        self.tracker.release_all();
    }

    //--- Accessors --------------------------------------------------------

    pub fn tracker(&self) -> &StateTracker {
        &self.tracker
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_fires_once_per_release() {
        let mut system = InputSystem::default();

        let snapshot = system.process_frame(&[vec![InputEvent::KeyDown(KeyCode::Space)]]);
        assert!(!snapshot.triggered(Control::Jump));
        system.end_frame();

        let snapshot = system.process_frame(&[vec![InputEvent::KeyUp(KeyCode::Space)]]);
        assert!(snapshot.triggered(Control::Jump));
        system.end_frame();

        let snapshot = system.process_frame(&[]);
        assert!(!snapshot.triggered(Control::Jump));
    }

    #[test]
    fn batches_apply_in_order() {
        let mut system = InputSystem::default();

        let snapshot = system.process_frame(&[
            vec![InputEvent::KeyDown(KeyCode::KeyW)],
            vec![InputEvent::KeyUp(KeyCode::KeyW)],
            vec![InputEvent::KeyDown(KeyCode::KeyS)],
        ]);

        assert!(!snapshot.is_held(Control::MoveForward));
        assert!(snapshot.is_held(Control::MoveBackward));
    }

    #[test]
    fn custom_bindings_are_honoured() {
        let mut bindings = KeyBindings::empty();
        bindings.bind(KeyCode::KeyZ, Control::MoveForward);
        let mut system = InputSystem::new(bindings);

        let snapshot = system.process_frame(&[vec![
            InputEvent::KeyDown(KeyCode::KeyZ),
            InputEvent::KeyDown(KeyCode::KeyW),
        ]]);

        assert!(snapshot.is_held(Control::MoveForward));
        assert_eq!(snapshot.move_axes(), (0.0, 1.0));
    }

    #[test]
    fn reset_mid_frame_only_drops_earlier_holds() {
        let mut system = InputSystem::default();

        let snapshot = system.process_frame_with_reset(
            &[
                vec![InputEvent::KeyDown(KeyCode::KeyW), InputEvent::KeyDown(KeyCode::Escape)],
                vec![InputEvent::KeyUp(KeyCode::Escape)],
                vec![InputEvent::KeyDown(KeyCode::KeyA)],
            ],
            2,
        );

        assert!(!snapshot.is_held(Control::MoveForward));
        assert!(snapshot.triggered(Control::Pause));
        assert!(snapshot.is_held(Control::StrafeLeft));
    }

    #[test]
    fn reset_releases_everything() {
        let mut system = InputSystem::default();
        system.process_frame(&[vec![InputEvent::KeyDown(KeyCode::KeyW)]]);
        system.reset();

        let snapshot = system.process_frame(&[]);
        assert!(!snapshot.is_held(Control::MoveForward));
    }
}
