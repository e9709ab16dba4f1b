//=========================================================================
// Game State Machine
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::{GameState, RequestQueue};
use crate::core::error::TransitionError;

//=== GameStateMachine ====================================================

/// Single owner of the current [`GameState`].
///
/// Changes are either applied immediately through [`transition`] or queued
/// with [`request`] and applied in order by [`apply_requests`] at the frame
/// boundary. Both paths validate against the transition table.
///
/// [`transition`]: GameStateMachine::transition
/// [`request`]: GameStateMachine::request
/// [`apply_requests`]: GameStateMachine::apply_requests
#[derive(Debug, Default)]
pub struct GameStateMachine {
    current: GameState,
    previous: Option<GameState>,
    requests: RequestQueue,
    changes: u64,
}

impl GameStateMachine {
    /// Creates a machine in [`GameState::None`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> GameState {
        self.current
    }

    /// State before the last accepted transition.
    pub fn previous(&self) -> Option<GameState> {
        self.previous
    }

    /// Number of accepted transitions so far.
    pub fn change_count(&self) -> u64 {
        self.changes
    }

    pub fn is(&self, state: GameState) -> bool {
        self.current == state
    }

    //--- Mutation ---------------------------------------------------------

    /// Moves to `to` if the table allows it.
    ///
    /// Returns the state that was left.
    pub fn transition(&mut self, to: GameState) -> Result<GameState, TransitionError> {
        let from = self.current;
        if !from.can_transition_to(to) {
            warn!("Rejected game-state transition {:?} -> {:?}", from, to);
            return Err(TransitionError::Illegal { from, to });
        }

        info!("Game state {:?} -> {:?}", from, to);
        self.previous = Some(from);
        self.current = to;
        self.changes += 1;
        Ok(from)
    }

    /// Queues a change for the next [`apply_requests`](Self::apply_requests).
    pub fn request(&mut self, to: GameState) {
        self.requests.push(to);
    }

    #[cfg(test)]
    pub(crate) fn pending_requests(&self) -> usize {
        self.requests.len()
    }

    /// Applies queued requests in FIFO order.
    ///
    /// Each request is validated against the state reached by the previous
    /// one. Rejected requests are dropped; their errors are returned.
    pub fn apply_requests(&mut self) -> Vec<TransitionError> {
        self.requests
            .take()
            .into_iter()
            .filter_map(|to| self.transition(to).err())
            .collect()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn booted() -> GameStateMachine {
        let mut machine = GameStateMachine::new();
        machine.transition(GameState::Init).unwrap();
        machine.transition(GameState::Loading).unwrap();
        machine.transition(GameState::Menu).unwrap();
        machine
    }

    #[test]
    fn starts_in_none() {
        let machine = GameStateMachine::new();
        assert_eq!(machine.current(), GameState::None);
        assert_eq!(machine.previous(), None);
        assert_eq!(machine.change_count(), 0);
    }

    #[test]
    fn legal_transition_returns_previous_state() {
        let mut machine = booted();

        assert_eq!(machine.transition(GameState::StartGame), Ok(GameState::Menu));
        assert_eq!(machine.current(), GameState::StartGame);
        assert_eq!(machine.previous(), Some(GameState::Menu));
        assert_eq!(machine.change_count(), 4);
    }

    #[test]
    fn illegal_transition_leaves_state_untouched() {
        let mut machine = booted();

        let err = machine.transition(GameState::Running).unwrap_err();
        assert_eq!(
            err,
            TransitionError::Illegal {
                from: GameState::Menu,
                to: GameState::Running
            }
        );
        assert_eq!(machine.current(), GameState::Menu);
        assert_eq!(machine.change_count(), 3);
    }

    #[test]
    fn requests_apply_in_order_at_boundary() {
        let mut machine = booted();
        machine.request(GameState::StartGame);
        machine.request(GameState::LevelReady);
        assert_eq!(machine.pending_requests(), 2);
        assert_eq!(machine.current(), GameState::Menu);

        let errors = machine.apply_requests();

        assert!(errors.is_empty());
        assert_eq!(machine.current(), GameState::LevelReady);
        assert_eq!(machine.pending_requests(), 0);
    }

    #[test]
    fn rejected_request_does_not_block_later_ones() {
        let mut machine = booted();
        machine.request(GameState::Pause);
        machine.request(GameState::StartGame);

        let errors = machine.apply_requests();

        assert_eq!(errors.len(), 1);
        assert_eq!(machine.current(), GameState::StartGame);
    }
}
