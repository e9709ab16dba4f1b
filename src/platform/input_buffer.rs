//=========================================================================
// Input Buffer
//
// Collects converted input events between two redraws, split into
// discrete and continuous categories. Acts as a transient aggregator
// between the winit callbacks and the channel to the logic thread.
//
// Responsibilities:
// - Store incoming events for the current frame
// - Deduplicate repeated consecutive discrete inputs (e.g., KeyDown)
// - Coalesce continuous inputs (only the last MouseMoved survives)
// - Hand both lists over via `drain()`
//
// Notes:
// Order matters for discrete events (a press and release of Space in
// the same frame must both reach the tracker). Continuous events only
// carry the latest position.
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashSet;

//=== Internal Modules ====================================================
use crate::core::input::event::InputEvent;

//=== InputBuffer Struct ==================================================
//
// Represents the transient event store for one frame of input.
//
// Internally maintains:
// - `discrete`: key presses/releases in arrival order
// - `continuous`: last-known value of each continuous input
//
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates for typical per-frame volumes.
    //
    pub fn new() -> Self {
        const DISCRETE_BASE: usize = 64;
        const CONTINUOUS_BASE: usize = 4;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Continuous Event Handling ---------------------------------------
    //
    // The latest event always replaces any previous one of the same kind
    // (InputEvent hashes MouseMoved by variant only).
    //
    pub fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    //--- Discrete Event Handling -----------------------------------------
    //
    // Duplicate consecutive events are ignored to prevent flooding.
    //
    pub fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns `(discrete, continuous)` and leaves the buffer empty, or
    // `None` when nothing was collected this frame.
    //
    pub fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }
        let discrete = std::mem::take(&mut self.discrete);
        let continuous = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------
    pub fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::KeyCode;

    fn mouse_move(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMoved { x, y }
    }

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(InputEvent::KeyDown(KeyCode::KeyA));
        buffer.push_discrete(InputEvent::KeyDown(KeyCode::KeyA));
        buffer.push_discrete(InputEvent::KeyDown(KeyCode::KeyB));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn press_release_press_is_kept_in_order() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(InputEvent::KeyDown(KeyCode::Space));
        buffer.push_discrete(InputEvent::KeyUp(KeyCode::Space));
        buffer.push_discrete(InputEvent::KeyDown(KeyCode::Space));

        let (discrete, _) = buffer.drain().unwrap();
        assert_eq!(
            discrete,
            vec![
                InputEvent::KeyDown(KeyCode::Space),
                InputEvent::KeyUp(KeyCode::Space),
                InputEvent::KeyDown(KeyCode::Space),
            ]
        );
    }

    #[test]
    fn continuous_keeps_latest() {
        let mut buffer = InputBuffer::new();
        buffer.push_continuous(mouse_move(10.0, 10.0));
        buffer.push_continuous(mouse_move(20.0, 30.0));

        let (_, continuous) = buffer.drain().unwrap();
        assert_eq!(continuous.len(), 1);
        match continuous[0] {
            InputEvent::MouseMoved { x, y } => assert_eq!((x, y), (20.0, 30.0)),
            other => panic!("Expected MouseMoved event, found {:?}", other),
        }
    }

    #[test]
    fn drain_empties_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(InputEvent::KeyDown(KeyCode::KeyA));
        buffer.push_continuous(mouse_move(5.0, 5.0));

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_none());
    }
}
