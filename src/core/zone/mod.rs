//=========================================================================
// Zones
//=========================================================================
//
// Trigger volumes tagged Start or Finish. The tracker compares the
// player's position against each box every frame and reports entries
// and exits, which feed the lap timer.
//
//=========================================================================

//=== Module Declarations =================================================

mod timer;

//=== Public API ==========================================================

pub use timer::{LapTimer, TimerEvent};

//=== External Dependencies ===============================================

use glam::Vec3;
use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::capabilities::Aabb;
use crate::core::config::ZoneConfig;

//=== Types ===============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    Start,
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub kind: ZoneKind,
    pub bounds: Aabb,
}

/// Boundary crossing reported by [`ZoneTracker::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneEvent {
    Entered(ZoneKind),
    Exited(ZoneKind),
}

//=== ZoneTracker =========================================================

/// Remembers which zones contain the player and reports changes.
#[derive(Debug, Clone)]
pub struct ZoneTracker {
    zones: Vec<Zone>,
    inside: Vec<bool>,
}

impl ZoneTracker {
    pub fn new(zones: Vec<Zone>) -> Self {
        let inside = vec![false; zones.len()];
        Self { zones, inside }
    }

    /// Start and finish boxes from configuration.
    pub fn from_config(config: &ZoneConfig) -> Self {
        Self::new(vec![
            Zone {
                kind: ZoneKind::Start,
                bounds: config.start,
            },
            Zone {
                kind: ZoneKind::Finish,
                bounds: config.finish,
            },
        ])
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn is_inside(&self, kind: ZoneKind) -> bool {
        self.zones
            .iter()
            .zip(&self.inside)
            .any(|(zone, inside)| zone.kind == kind && *inside)
    }

    /// Tests `position` against every zone; returns crossings in zone order.
    pub fn update(&mut self, position: Vec3) -> Vec<ZoneEvent> {
        let mut events = Vec::new();
        for (zone, inside) in self.zones.iter().zip(self.inside.iter_mut()) {
            let now_inside = zone.bounds.contains(position);
            if now_inside == *inside {
                continue;
            }
            *inside = now_inside;

            let event = if now_inside {
                ZoneEvent::Entered(zone.kind)
            } else {
                ZoneEvent::Exited(zone.kind)
            };
            debug!("Zone {:?} at {:?}", event, position);
            events.push(event);
        }
        events
    }

    /// Marks every zone as empty (e.g. after a respawn).
    pub fn reset(&mut self) {
        self.inside.iter_mut().for_each(|inside| *inside = false);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
