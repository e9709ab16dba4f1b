//=========================================================================
// Request Queue
//=========================================================================
//
// State changes requested during a frame. The state machine applies
// them in FIFO order at the frame boundary.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GameState;

//=== RequestQueue ========================================================

/// FIFO of requested target states.
#[derive(Debug, Default)]
pub struct RequestQueue {
    queue: Vec<GameState>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a change to be validated at the next frame boundary.
    pub fn push(&mut self, target: GameState) {
        self.queue.push(target);
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all requests, leaving the queue empty.
    pub fn take(&mut self) -> Vec<GameState> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
