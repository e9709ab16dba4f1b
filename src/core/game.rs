//=========================================================================
// Game
//=========================================================================
//
// Top-level driver: loads the startup assets, owns the level objects and
// runs one frame of the state gate per tick.
//
// Frame pipeline (`frame`):
//   1. advance session clock
//   2. controls → state requests (menu, pause, quit, inspector, retry)
//   3. state gate:
//        Menu       (on entry) show menu, start music
//        StartGame  hide menu, game music, reset session → LevelReady
//        LevelReady → Running
//        Running    player, camera, zones, timer
//        GameOver   (on entry) game-over music
//   4. apply queued requests (frame boundary)
//   5. publish HUD frame
//
// A state change therefore takes effect at the end of the frame that
// requested it; its gate work runs from the next frame on.
//
// Startup:
//   None → Init → Loading ─ok──► Menu
//                        └fail─► Init (error kept, KeyR retries)
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info};

//=== Internal Dependencies ===============================================

use crate::core::arena::Arena;
use crate::core::assets::{AssetSource, CHARACTER_MODEL};
use crate::core::audio::{Music, SoundFx, SoundManager};
use crate::core::camera::OrbitCamera;
use crate::core::capabilities::HudSink;
use crate::core::config::GameConfig;
use crate::core::error::AssetLoadError;
use crate::core::globals::GameContext;
use crate::core::hud::HudFrame;
use crate::core::input::{Control, InputSnapshot};
use crate::core::physics::StaticWorld;
use crate::core::player::Player;
use crate::core::state::GameState;
use crate::core::zone::{LapTimer, ZoneEvent, ZoneTracker};

//=== Level ===============================================================

/// Everything built from the startup assets.
#[derive(Debug)]
struct Level {
    arena: Arena,
    player: Player,
    camera: OrbitCamera,
    zones: ZoneTracker,
    timer: LapTimer,
}

//=== Game ================================================================

pub struct Game {
    context: GameContext,
    assets: Box<dyn AssetSource>,
    physics: StaticWorld,
    level: Option<Level>,
    startup_error: Option<AssetLoadError>,

    /// State the gate ran for last frame, for entry detection.
    gated: Option<GameState>,
}

impl Game {
    /// Creates the game in [`GameState::None`]. Call [`boot`](Self::boot)
    /// before the first frame.
    pub fn new(config: GameConfig, assets: Box<dyn AssetSource>, hud: Box<dyn HudSink>) -> Self {
        Self {
            context: GameContext::new(config, hud),
            assets,
            physics: StaticWorld::new(),
            level: None,
            startup_error: None,
            gated: None,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn state(&self) -> GameState {
        self.context.state.current()
    }

    pub fn context(&self) -> &GameContext {
        &self.context
    }

    pub fn startup_error(&self) -> Option<&AssetLoadError> {
        self.startup_error.as_ref()
    }

    pub fn player(&self) -> Option<&Player> {
        self.level.as_ref().map(|level| &level.player)
    }

    pub fn timer(&self) -> Option<&LapTimer> {
        self.level.as_ref().map(|level| &level.timer)
    }

    pub fn arena(&self) -> Option<&Arena> {
        self.level.as_ref().map(|level| &level.arena)
    }

    pub fn camera(&self) -> Option<&OrbitCamera> {
        self.level.as_ref().map(|level| &level.camera)
    }

    /// Whether the game reached its terminal state.
    pub fn is_finished(&self) -> bool {
        self.state() == GameState::End
    }

    //--- Startup ----------------------------------------------------------

    /// Moves from `None` to `Init` and attempts the first load.
    pub fn boot(&mut self) {
        info!("Booting game");
        if self.context.state.transition(GameState::Init).is_ok() {
            self.load();
        }
    }

    /// Retries a failed startup. Does nothing unless one is pending.
    pub fn retry(&mut self) {
        if self.startup_error.is_none() || self.state() != GameState::Init {
            return;
        }
        info!("Retrying startup load");
        self.load();
    }

    fn load(&mut self) {
        if self.context.state.transition(GameState::Loading).is_err() {
            return;
        }

        match self.build_level() {
            Ok((level, sound)) => {
                self.context.sound = sound;
                self.level = Some(level);
                self.startup_error = None;
                self.context.state.transition(GameState::Menu).ok();
            }
            Err(err) => {
                error!("Startup load failed: {}", err);
                self.physics.clear();
                self.startup_error = Some(err);
                self.context.state.transition(GameState::Init).ok();
            }
        }
    }

    fn build_level(&mut self) -> Result<(Level, SoundManager), AssetLoadError> {
        self.physics.clear();
        let config = &self.context.config;

        let sound = SoundManager::load(self.assets.as_mut())?;
        let arena = Arena::load(&config.arena, self.assets.as_mut(), &mut self.physics)?;
        let rig = self.assets.as_mut().load_character(CHARACTER_MODEL)?;

        let player = Player::new(config.spawn, rig, config.player.clone());
        let camera = OrbitCamera::new(&config.camera, config.spawn);
        let level = Level {
            arena,
            player,
            camera,
            zones: ZoneTracker::from_config(&config.zones),
            timer: LapTimer::new(),
        };
        Ok((level, sound))
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one frame of `delta` seconds.
    pub fn frame(&mut self, input: &InputSnapshot, delta: f32) {
        self.context.clock.advance(delta);

        self.handle_controls(input);
        self.gate(input, delta);
        self.context.state.apply_requests();

        let frame = self.hud_frame();
        self.context.hud.publish(&frame);
    }

    fn handle_controls(&mut self, input: &InputSnapshot) {
        if input.triggered(Control::ToggleInspector) {
            self.context.inspector = !self.context.inspector;
            debug!("Inspector {}", if self.context.inspector { "on" } else { "off" });
        }
        if input.triggered(Control::RetryLoad) {
            self.retry();
        }

        let state = &mut self.context.state;
        match state.current() {
            GameState::Menu if input.triggered(Control::Confirm) => state.request(GameState::StartGame),
            GameState::Menu if input.triggered(Control::Quit) => state.request(GameState::End),
            GameState::Running if input.triggered(Control::Pause) => state.request(GameState::Pause),
            GameState::Pause if input.triggered(Control::Pause) => state.request(GameState::Running),
            GameState::Running | GameState::Pause if input.triggered(Control::Quit) => {
                state.request(GameState::GameOver)
            }
            GameState::GameOver if input.triggered(Control::Confirm) => state.request(GameState::Menu),
            GameState::GameOver if input.triggered(Control::Quit) => state.request(GameState::End),
            _ => {}
        }
    }

    fn gate(&mut self, input: &InputSnapshot, delta: f32) {
        let state = self.state();
        let entered = self.gated != Some(state);
        self.gated = Some(state);

        match state {
            GameState::Menu if entered => {
                self.context.hud.set_menu_visible(true);
                self.context.sound.play(Music::StartMusic);
            }
            GameState::StartGame => self.start_game(),
            GameState::LevelReady => self.context.state.request(GameState::Running),
            state if state.is_gameplay() => self.update_gameplay(input, delta),
            GameState::GameOver if entered => {
                self.context.sound.play(Music::GameOverMusic);
                if let Some(level) = self.level.as_mut() {
                    level.player.halt_animation();
                    level.timer.cancel();
                }
            }
            _ => {}
        }
    }

    /// Menu dismissed: fresh run at the spawn point.
    fn start_game(&mut self) {
        self.context.hud.set_menu_visible(false);
        self.context.sound.play(Music::GameMusic);

        let config = &self.context.config;
        if let Some(level) = self.level.as_mut() {
            level.player.reset(config.spawn);
            level.camera = OrbitCamera::new(&config.camera, config.spawn);
            level.zones.reset();
            level.timer.cancel();
        }
        info!("Session reset at {:?}", config.spawn);
        self.context.state.request(GameState::LevelReady);
    }

    fn update_gameplay(&mut self, input: &InputSnapshot, delta: f32) {
        let Some(level) = self.level.as_mut() else {
            return;
        };

        let (look_dx, _) = input.look_delta();
        level.camera.orbit(look_dx);

        let ground = level.player.probe_ground(&self.physics);
        level.player.update(input, &level.camera, ground, delta);
        level.player.set_yaw(level.camera.yaw());
        level.camera.follow(level.player.position());

        let now = self.context.clock.now();
        for event in level.zones.update(level.player.position()) {
            if let ZoneEvent::Entered(kind) = event {
                if level.timer.on_enter(kind, now).is_some() {
                    self.context.sound.play_fx(SoundFx::Whistle);
                }
            }
        }
    }

    //--- HUD --------------------------------------------------------------

    fn hud_frame(&self) -> HudFrame {
        let state = self.state();
        let mut frame = HudFrame {
            state,
            menu_visible: state == GameState::Menu,
            inspector: self.context.inspector,
            startup_error: self.startup_error.as_ref().map(ToString::to_string),
            ..HudFrame::default()
        };

        if let Some(level) = &self.level {
            let now = self.context.clock.now();
            frame.position = level.player.position();
            frame.velocity = level.player.velocity();
            frame.endurance = level.player.endurance().value();
            frame.lap_elapsed = level.timer.elapsed(now);
            frame.last_lap = level.timer.last_lap();
            frame.best_lap = level.timer.best_lap();
        }
        frame
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("context", &self.context)
            .field("level", &self.level)
            .field("startup_error", &self.startup_error)
            .finish_non_exhaustive()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
