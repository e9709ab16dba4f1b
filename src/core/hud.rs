//=========================================================================
// HUD
//=========================================================================
//
// Per-frame display data and the sink that ships it to the platform
// thread, where it becomes the window title.
//
//   Game ──HudFrame──► ChannelHud ──crossbeam──► Platform (title)
//
// The HUD is read-only: it never feeds back into gameplay.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Write as _;

use crossbeam_channel::{Sender, TrySendError};
use glam::Vec3;
use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::capabilities::HudSink;
use crate::core::state::GameState;

//=== HudFrame ============================================================

/// Snapshot of everything shown on screen for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HudFrame {
    pub state: GameState,
    pub position: Vec3,
    pub velocity: Vec3,

    /// Endurance in `[0, 100]`.
    pub endurance: f32,

    /// Time since the start line, while a lap is running.
    pub lap_elapsed: Option<f32>,
    pub last_lap: Option<f32>,

    /// `None` until a lap has been completed.
    pub best_lap: Option<f32>,

    /// Menu overlay is up. The platform shows the cursor from this flag.
    pub menu_visible: bool,
    pub inspector: bool,

    /// Startup failure waiting for a retry.
    pub startup_error: Option<String>,
}

impl HudFrame {
    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }

    /// One-line rendering, used as the window title.
    pub fn status_line(&self) -> String {
        if let Some(error) = &self.startup_error {
            return format!("Endurance Runner | startup failed: {} | R to retry", error);
        }
        if self.menu_visible {
            return "Endurance Runner | Enter to start".to_string();
        }

        let mut line = format!(
            "{:?} | speed {:.1} | endurance {:.0}",
            self.state,
            self.horizontal_speed(),
            self.endurance
        );
        if let Some(elapsed) = self.lap_elapsed {
            let _ = write!(line, " | lap {:.2}s", elapsed);
        }
        if let Some(last) = self.last_lap {
            let _ = write!(line, " | last {:.2}s", last);
        }
        if let Some(best) = self.best_lap {
            let _ = write!(line, " | best {:.2}s", best);
        }
        if self.inspector {
            let p = self.position;
            let _ = write!(line, " | pos ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z);
        }
        line
    }
}

//=== ChannelHud ==========================================================

/// [`HudSink`] forwarding frames over a bounded channel.
///
/// Frames are dropped when the platform falls behind; the next one
/// supersedes them anyway. Overlay visibility rides in every frame, so
/// no state change can be lost with a dropped frame.
#[derive(Debug, Clone)]
pub struct ChannelHud {
    sender: Sender<HudFrame>,
    dropped: u64,
}

impl ChannelHud {
    pub fn new(sender: Sender<HudFrame>) -> Self {
        Self { sender, dropped: 0 }
    }

    /// Frames discarded because the channel was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    fn send(&mut self, frame: HudFrame) {
        match self.sender.try_send(frame) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                self.dropped += 1;
                trace!(target: "core::hud", "HUD channel full, frame dropped");
            }
            Err(TrySendError::Disconnected(_)) => {
                if self.dropped == 0 {
                    warn!(target: "core::hud", "HUD channel disconnected");
                }
                self.dropped += 1;
            }
        }
    }
}

impl HudSink for ChannelHud {
    fn publish(&mut self, frame: &HudFrame) {
        self.send(frame.clone());
    }

    fn set_menu_visible(&mut self, visible: bool) {
        // Carried by `HudFrame::menu_visible` on the next publish.
        debug!(target: "core::hud", "Menu visible: {}", visible);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
