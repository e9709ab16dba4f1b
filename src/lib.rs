//=========================================================================
// Endurance Runner - Library Root
//
// A third-person running game core: kinematic locomotion with an
// endurance-gated sprint, a lap timer driven by start/finish zones, and
// a validated game-state machine.
//
// Typical usage:
// ```no_run
// use endurance_runner::EngineBuilder;
//
// fn main() {
//     EngineBuilder::new().build().run().unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the game itself. It never touches winit, so every piece
// can be driven from tests through the capability traits.
//
pub mod core;

//--- Convenience ---------------------------------------------------------

pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and the winit event loop.
// `engine` wires platform and core threads together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
