//=========================================================================
// Event Collector
//=========================================================================
//
// Drains platform events at the start of each logic tick.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → input batches → TickControl
//
// Draining is bounded so a flood of input cannot starve the tick. Events
// left over stay queued for the next tick. Pacing is the caller's job.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects platform events into ordered input batches.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<InputEvent>>,

    /// Batch count at the last focus loss this tick.
    focus_lost_at: Option<usize>,
    max_events_per_frame: usize,
}

impl EventCollector {
    const DEFAULT_MAX_EVENTS: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
            focus_lost_at: None,
            max_events_per_frame: Self::DEFAULT_MAX_EVENTS,
        }
    }

    #[cfg(test)]
    fn with_max_events(mut self, max: usize) -> Self {
        self.max_events_per_frame = max;
        self
    }

    /// Collects pending platform events for this tick.
    ///
    /// Returns `Exit` when the window was closed or the platform side of
    /// the channel is gone.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.input_batches.clear();
        self.focus_lost_at = None;
        let mut drained = 0;

        while drained < self.max_events_per_frame {
            match self.receiver.try_recv() {
                Ok(event) => {
                    drained += 1;
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                }
                Err(TryRecvError::Disconnected) => {
                    debug!(target: "core::bridge", "Platform channel disconnected");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= self.max_events_per_frame {
            warn!(target: "core::bridge", "Event queue backlog: drained {} events this tick", drained);
        }

        TickControl::Continue
    }

    /// Input batches collected this tick, in arrival order.
    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.input_batches
    }

    /// Number of leading batches that arrived before focus was lost, if it
    /// was lost this tick. Held keys must be dropped at that point.
    pub(crate) fn focus_lost_at(&self) -> Option<usize> {
        self.focus_lost_at
    }

    fn handle_event(&mut self, event: PlatformEvent) -> TickControl {
        match event {
            PlatformEvent::Inputs { discrete, continuous } => {
                if !discrete.is_empty() {
                    self.input_batches.push(discrete);
                }
                if !continuous.is_empty() {
                    self.input_batches.push(continuous);
                }
                TickControl::Continue
            }
            PlatformEvent::FocusLost => {
                debug!(target: "core::bridge", "Focus lost, held keys will be released");
                self.focus_lost_at = Some(self.input_batches.len());
                TickControl::Continue
            }
            PlatformEvent::WindowClosed => TickControl::Exit,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
