//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level keyboard and pointer state with per-frame deltas.
//
// Two views are kept:
//   - held: level-triggered, a key is present while it is down
//   - actions: edge-triggered, a key is present for exactly one frame
//     after its KeyUp event
//
// Frame lifecycle: process_events() → query → end_frame()
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode};

//=== StateTracker ========================================================

/// Tracks held keys (persistent) and released-this-frame actions (one-shot).
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    held: HashSet<KeyCode>,
    mouse_position: (f32, f32),
    mouse_seen: bool,

    //--- Frame Deltas (reset by end_frame()) -----------------------------
    actions: HashSet<KeyCode>,
    mouse_delta: (f32, f32),
    frame_start_mouse: Option<(f32, f32)>,
}

impl StateTracker {
    /// Creates a tracker with no key held.
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            mouse_position: (0.0, 0.0),
            mouse_seen: false,
            actions: HashSet::new(),
            mouse_delta: (0.0, 0.0),
            frame_start_mouse: None,
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Applies a batch of events in arrival order.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Drops edge-triggered state once the frame has been consumed.
    pub fn end_frame(&mut self) {
        self.actions.clear();
        self.mouse_delta = (0.0, 0.0);
        self.frame_start_mouse = None;
    }

    /// Forgets every held key (focus loss, session reset).
    ///
    /// Releases already seen this frame stay as actions; the lost keys
    /// themselves do not become actions.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => {
                self.held.insert(key);
            }

            InputEvent::KeyUp(key) => {
                // A release without a prior press is spurious
                if self.held.remove(&key) {
                    self.actions.insert(key);
                }
            }

            InputEvent::MouseMoved { x, y } => {
                // The very first move of the session has nothing to diff against
                if !self.mouse_seen {
                    self.mouse_seen = true;
                    self.mouse_position = (x, y);
                }
                let anchor = *self.frame_start_mouse.get_or_insert(self.mouse_position);
                self.mouse_position = (x, y);
                self.mouse_delta = (x - anchor.0, y - anchor.1);
            }

            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` every frame the key is down.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Returns `true` only in the frame the key was released.
    pub fn is_action(&self, key: KeyCode) -> bool {
        self.actions.contains(&key)
    }

    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Pointer movement accumulated during the current frame.
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    pub fn held_keys(&self) -> impl Iterator<Item = &KeyCode> {
        self.held.iter()
    }

    pub fn action_keys(&self) -> impl Iterator<Item = &KeyCode> {
        self.actions.iter()
    }
}

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
