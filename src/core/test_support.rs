//=========================================================================
// Test Support
//=========================================================================
//
// Recording doubles for every capability trait. Each double writes the
// calls it receives into a shared log the test keeps a handle to.
// Logs use `Arc<Mutex<_>>` so doubles can sit behind `AssetSource: Send`.
//
//=========================================================================

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use glam::Vec3;

use crate::core::assets::{AssetSource, CharacterRig, MeshPart, TerrainMesh};
use crate::core::capabilities::{Aabb, AnimationClip, AudioTrack, HudSink, RigidBody};
use crate::core::error::AssetLoadError;
use crate::core::hud::HudFrame;
use crate::core::player::AnimState;

//=== Body ================================================================

#[derive(Debug, Clone, Default)]
pub struct BodyLog(Arc<Mutex<(Vec<Vec3>, Vec<f32>)>>);

impl BodyLog {
    pub fn last_position(&self) -> Option<Vec3> {
        self.0.lock().unwrap().0.last().copied()
    }

    pub fn last_yaw(&self) -> Option<f32> {
        self.0.lock().unwrap().1.last().copied()
    }

    pub fn position_writes(&self) -> usize {
        self.0.lock().unwrap().0.len()
    }
}

pub struct RecordingBody {
    position: Vec3,
    log: BodyLog,
}

impl RecordingBody {
    pub fn new(log: BodyLog) -> Self {
        Self {
            position: Vec3::ZERO,
            log,
        }
    }
}

impl RigidBody for RecordingBody {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.log.0.lock().unwrap().0.push(position);
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_yaw(&mut self, yaw: f32) {
        self.log.0.lock().unwrap().1.push(yaw);
    }
}

//=== Clips ===============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipCall {
    Play,
    Stop,
}

#[derive(Debug, Clone, Default)]
pub struct ClipLog(Arc<Mutex<Vec<(AnimState, ClipCall)>>>);

impl ClipLog {
    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(AnimState, ClipCall)> {
        self.0.lock().unwrap().clone()
    }
}

pub struct RecordingClip {
    state: AnimState,
    playing: bool,
    log: ClipLog,
}

impl RecordingClip {
    pub fn new(state: AnimState, log: ClipLog) -> Self {
        Self {
            state,
            playing: false,
            log,
        }
    }
}

impl AnimationClip for RecordingClip {
    fn play_looping(&mut self) {
        self.playing = true;
        self.log.0.lock().unwrap().push((self.state, ClipCall::Play));
    }

    fn stop(&mut self) {
        self.playing = false;
        self.log.0.lock().unwrap().push((self.state, ClipCall::Stop));
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

/// A rig with a recording body and one recording clip per state.
pub fn recording_rig() -> (CharacterRig, BodyLog, ClipLog) {
    let body_log = BodyLog::default();
    let clip_log = ClipLog::default();
    let clips = AnimState::ALL
        .iter()
        .map(|&state| {
            let clip: Box<dyn AnimationClip> = Box::new(RecordingClip::new(state, clip_log.clone()));
            (state, clip)
        })
        .collect();
    let rig = CharacterRig {
        body: Box::new(RecordingBody::new(body_log.clone())),
        clips,
    };
    (rig, body_log, clip_log)
}

//=== Audio ===============================================================

#[derive(Debug, Clone, Default)]
pub struct TrackLog(Arc<Mutex<Vec<(String, &'static str)>>>);

impl TrackLog {
    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(String, &'static str)> {
        self.0.lock().unwrap().clone()
    }

    /// Names of tracks that received `play`, in order.
    pub fn played(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(_, call)| *call == "play")
            .map(|(name, _)| name)
            .collect()
    }
}

pub struct RecordingTrack {
    name: String,
    playing: bool,
    log: TrackLog,
}

impl RecordingTrack {
    pub fn new(name: &str, log: TrackLog) -> Self {
        Self {
            name: name.to_string(),
            playing: false,
            log,
        }
    }

    fn record(&self, call: &'static str) {
        self.log.0.lock().unwrap().push((self.name.clone(), call));
    }
}

impl AudioTrack for RecordingTrack {
    fn play(&mut self) {
        self.playing = true;
        self.record("play");
    }

    fn stop(&mut self) {
        self.playing = false;
        self.record("stop");
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

//=== HUD =================================================================

#[derive(Debug, Clone, Default)]
pub struct HudLog(Arc<Mutex<(Vec<HudFrame>, Vec<bool>)>>);

impl HudLog {
    pub fn last_frame(&self) -> Option<HudFrame> {
        self.0.lock().unwrap().0.last().cloned()
    }

    pub fn frame_count(&self) -> usize {
        self.0.lock().unwrap().0.len()
    }

    pub fn menu_visible(&self) -> Option<bool> {
        self.0.lock().unwrap().1.last().copied()
    }
}

pub struct RecordingHud {
    log: HudLog,
}

impl RecordingHud {
    pub fn new(log: HudLog) -> Self {
        Self { log }
    }
}

impl HudSink for RecordingHud {
    fn publish(&mut self, frame: &HudFrame) {
        self.log.0.lock().unwrap().0.push(frame.clone());
    }

    fn set_menu_visible(&mut self, visible: bool) {
        self.log.0.lock().unwrap().1.push(visible);
    }
}

//=== Assets ==============================================================

/// Asset source handing out recording doubles.
///
/// Any name can be made to fail with [`fail`](Self::fail). Clones share
/// the failure script, so a test can heal an asset after handing the
/// source to the game.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAssets {
    failing: Arc<Mutex<HashSet<String>>>,
    pub tracks: TrackLog,
    pub clips: ClipLog,
    pub body: BodyLog,
}

impl ScriptedAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self, name: &str) {
        self.failing.lock().unwrap().insert(name.to_string());
    }

    pub fn heal(&self, name: &str) {
        self.failing.lock().unwrap().remove(name);
    }

    fn check(&self, name: &str) -> Result<(), AssetLoadError> {
        if self.failing.lock().unwrap().contains(name) {
            return Err(AssetLoadError::Decode {
                name: name.to_string(),
                reason: "scripted failure".to_string(),
            });
        }
        Ok(())
    }
}

impl AssetSource for ScriptedAssets {
    fn load_music(&mut self, name: &str) -> Result<Box<dyn AudioTrack>, AssetLoadError> {
        self.check(name)?;
        Ok(Box::new(RecordingTrack::new(name, self.tracks.clone())))
    }

    fn load_sound(&mut self, name: &str) -> Result<Box<dyn AudioTrack>, AssetLoadError> {
        self.check(name)?;
        Ok(Box::new(RecordingTrack::new(name, self.tracks.clone())))
    }

    fn load_terrain(&mut self, name: &str) -> Result<TerrainMesh, AssetLoadError> {
        self.check(name)?;
        Ok(TerrainMesh {
            name: name.to_string(),
            parts: vec![MeshPart {
                name: "floor".to_string(),
                bounds: Aabb::new(Vec3::new(-12.0, -1.0, -12.0), Vec3::new(12.0, 0.0, 12.0)),
            }],
        })
    }

    fn load_character(&mut self, name: &str) -> Result<CharacterRig, AssetLoadError> {
        self.check(name)?;
        let clips = AnimState::ALL
            .iter()
            .map(|&state| {
                let clip: Box<dyn AnimationClip> = Box::new(RecordingClip::new(state, self.clips.clone()));
                (state, clip)
            })
            .collect();
        Ok(CharacterRig {
            body: Box::new(RecordingBody::new(self.body.clone())),
            clips,
        })
    }
}
