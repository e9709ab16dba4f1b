//=========================================================================
// Endurance Runner - Binary Entry Point
//
// Sets up logging and runs the game with the built-in asset catalog.
// Log verbosity follows `RUST_LOG` (default: info), e.g.
//   RUST_LOG=core::hud=trace,platform=debug endurance-runner
//
//=========================================================================

use std::process::ExitCode;

use endurance_runner::core::assets::BundledAssets;
use endurance_runner::EngineBuilder;
use env_logger::Env;
use log::error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let engine = EngineBuilder::new()
        .with_tps(60.0)
        .with_assets(BundledAssets::new())
        .build();

    match engine.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal: {}", e);
            ExitCode::FAILURE
        }
    }
}
