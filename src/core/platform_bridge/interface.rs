//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages crossing the thread boundary in both directions.
//
//   platform ──PlatformEvent──► core      (input batches, focus, close)
//   platform ◄──HudFrame─────── core      (status line, menu overlay)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

pub(crate) use crate::core::hud::HudFrame;

//=== PlatformEvent =======================================================

/// Events sent from platform to core.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched input events for one redraw.
    ///
    /// `discrete` keeps arrival order; `continuous` holds the latest
    /// pointer position only. Empty batches are never sent.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window lost keyboard focus. Keys held at this point will never
    /// report a release.
    FocusLost,

    /// Window close requested.
    WindowClosed,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    #[test]
    fn events_are_cloneable_and_debug() {
        let event = PlatformEvent::Inputs {
            discrete: vec![InputEvent::KeyDown(KeyCode::Enter)],
            continuous: vec![],
        };
        let cloned = event.clone();
        assert!(format!("{:?}", cloned).contains("Enter"));
        assert!(format!("{:?}", PlatformEvent::WindowClosed).contains("WindowClosed"));
    }
}
