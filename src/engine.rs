//=========================================================================
// Endurance Runner Engine
//
// Entry point and thread coordinator.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ spawns logic thread
//         ├─ with_channel_capacity()    runs platform
//         ├─ with_config()              blocks until exit
//         └─ with_assets()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::assets::{AssetSource, BundledAssets};
use crate::core::config::GameConfig;
use crate::core::error::EngineError;
use crate::core::platform_bridge::{HudFrame, PlatformEvent};
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events (each direction)
/// - **Config**: [`GameConfig::default`]
/// - **Assets**: the built-in [`BundledAssets`] catalog
///
/// # Examples
///
/// ```no_run
/// use endurance_runner::EngineBuilder;
///
/// EngineBuilder::new().build().run().unwrap();
/// ```
///
/// ```no_run
/// use endurance_runner::EngineBuilder;
/// use endurance_runner::core::config::{GameConfig, PlayerConfig};
///
/// let config = GameConfig::default()
///     .with_player(PlayerConfig::default().with_run_speed(18.0));
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_config(config)
///     .build()
///     .run()
///     .unwrap();
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    config: GameConfig,
    assets: Option<Box<dyn AssetSource>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: GameConfig::default(),
            assets: None,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Every tick advances the game by exactly `1 / tps` seconds.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of both thread channels.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Replaces the gameplay tuning.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the asset source used at startup.
    pub fn with_assets(mut self, assets: impl AssetSource + 'static) -> Self {
        self.assets = Some(Box::new(assets));
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        let assets = self
            .assets
            .unwrap_or_else(|| Box::new(BundledAssets::new()));

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(self.config, assets),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game runtime.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem → Game
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling, HUD title
///
/// Channels: PlatformEvent (platform → core)
///           HudFrame      (core → platform)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    /// Starts the runtime and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates both channels
    /// 2. Spawns the logic thread (boots the game)
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On exit: joins the logic thread
    ///
    /// # Errors
    ///
    /// [`EngineError::Platform`] when the event loop cannot be created or
    /// fails while running (the logic thread is still joined first), and
    /// [`EngineError::CoreThreadPanicked`] when the logic thread died.
    pub fn run(self) -> Result<(), EngineError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        let (hud_tx, hud_rx): (Sender<HudFrame>, Receiver<HudFrame>) =
            bounded(self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, hud_tx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, hud_rx);
        let platform_result = platform.run();

        if let Err(e) = &platform_result {
            error!("Platform error: {}", e);
        }
        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        if let Err(payload) = core_handle.join() {
            let message = panic_message(payload.as_ref());
            error!("Core thread panicked: {}", message);
            return Err(EngineError::CoreThreadPanicked(message));
        }
        info!("Core thread terminated cleanly");

        platform_result?;
        info!("Engine shutdown complete");
        Ok(())
    }
}

/// Best-effort text of a thread panic payload.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
