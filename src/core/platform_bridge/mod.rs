//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the winit platform layer and the game core. The core
// never touches winit types; it only sees the messages defined here.
//
// Components:
// - `interface`: messages in both directions
// - `event_collector`: core-side draining of platform events per tick
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{HudFrame, PlatformEvent};
