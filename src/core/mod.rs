//=========================================================================
// Core Systems Orchestrator
//
// Runs the game on the logic (non-platform) thread at a fixed tick rate.
//
// Each tick:
//   1. EventCollector drains platform events into input batches
//   2. InputSystem folds them into an InputSnapshot (dropping held keys
//      at a focus loss)
//   3. Game::frame runs one fixed step of 1/TPS seconds
//   4. InputSystem drops this tick's edge-triggered actions
//   5. sleep to keep pacing
//
// The loop ends when the window closes, the platform hangs up, or the
// game reaches `End`. Ending drops the HUD sender, which tells the
// platform to close the window.
//
// The game itself is built inside the thread: gameplay objects hold
// capability trait objects that are not `Send`. Only the config and the
// asset source cross the thread boundary.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod arena;
pub mod assets;
pub mod audio;
pub mod camera;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod game;
pub mod globals;
pub mod hud;
pub mod input;
pub mod physics;
pub(crate) mod platform_bridge;
pub mod player;
pub mod state;
pub mod zone;

#[cfg(test)]
pub(crate) mod test_support;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::info;

//=== Internal Modules ====================================================

use assets::AssetSource;
use config::GameConfig;
use game::Game;
use hud::ChannelHud;
use input::InputSystem;
use hud::HudFrame;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreLoop ============================================================
//
// Per-thread state of the tick loop. Split from the orchestrator so one
// tick can be driven without a thread or a clock.
//
struct CoreLoop {
    collector: EventCollector,
    input: InputSystem,
    game: Game,
    delta: f32,
}

impl CoreLoop {
    fn new(receiver: Receiver<PlatformEvent>, game: Game, tps: f64) -> Self {
        let bindings = game.context().config.bindings.clone();
        Self {
            collector: EventCollector::new(receiver),
            input: InputSystem::new(bindings),
            game,
            delta: (1.0 / tps) as f32,
        }
    }

    //--- tick() -----------------------------------------------------------
    //
    // Runs steps 1-4 of the pipeline. Returns `Exit` when the loop should
    // stop.
    //
    fn tick(&mut self) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            info!("Platform closed, stopping game");
            return TickControl::Exit;
        }

        let batches = self.collector.batches();
        let snapshot = match self.collector.focus_lost_at() {
            Some(at) => self.input.process_frame_with_reset(batches, at),
            None => self.input.process_frame(batches),
        };
        self.game.frame(&snapshot, self.delta);
        self.input.end_frame();

        if self.game.is_finished() {
            info!("Game ended");
            return TickControl::Exit;
        }
        TickControl::Continue
    }
}

//=== CoreSystemsOrchestrator =============================================
//
// Holds what the logic thread needs until it is spawned.
//
pub(crate) struct CoreSystemsOrchestrator {
    config: GameConfig,
    assets: Box<dyn AssetSource>,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    pub fn new(config: GameConfig, assets: Box<dyn AssetSource>) -> Self {
        Self { config, assets }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread. It boots the game (startup load) and then
    // ticks at `tps` until one of the exit conditions is met.
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        hud_sender: Sender<HudFrame>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut game = Game::new(self.config, self.assets, Box::new(ChannelHud::new(hud_sender)));
            game.boot();

            let mut core = CoreLoop::new(receiver, game, tps);

            loop {
                let frame_start = Instant::now();

                if core.tick() == TickControl::Exit {
                    info!("Core thread exiting.");
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
