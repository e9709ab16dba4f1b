//=========================================================================
// Bundled Assets
//=========================================================================
//
// Built-in asset catalog: named entries resolved to lightweight
// collaborators that track their own play state and log what they do.
// Used by the binary, where no real decoder or renderer is attached.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use glam::Vec3;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{
    AssetSource, CharacterRig, MeshPart, TerrainMesh, CHARACTER_MODEL, GAME_MUSIC,
    GAME_OVER_MUSIC, MENU_MUSIC, TERRAIN_MODEL, WHISTLE_SOUND,
};
use crate::core::capabilities::{Aabb, AnimationClip, AudioTrack};
use crate::core::error::AssetLoadError;
use crate::core::physics::KinematicBody;
use crate::core::player::AnimState;

const MUSIC: &[(&str, bool)] = &[(MENU_MUSIC, true), (GAME_MUSIC, true), (GAME_OVER_MUSIC, false)];
const SOUNDS: &[&str] = &[WHISTLE_SOUND];

//=== LoggedTrack =========================================================

/// Audio track that records play state instead of producing sound.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedTrack {
    name: String,
    looping: bool,
    playing: bool,
}

impl LoggedTrack {
    pub fn new(name: &str, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            looping,
            playing: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

impl AudioTrack for LoggedTrack {
    fn play(&mut self) {
        debug!("Audio play '{}' (loop: {})", self.name, self.looping);
        self.playing = true;
    }

    fn stop(&mut self) {
        debug!("Audio stop '{}'", self.name);
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

//=== LoggedClip ==========================================================

/// Animation clip that only tracks whether it is running.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedClip {
    name: String,
    playing: bool,
}

impl LoggedClip {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            playing: false,
        }
    }
}

impl AnimationClip for LoggedClip {
    fn play_looping(&mut self) {
        debug!("Clip start '{}'", self.name);
        self.playing = true;
    }

    fn stop(&mut self) {
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

//=== BundledAssets =======================================================

/// In-memory asset catalog.
///
/// Entries can be withheld to simulate missing files; a withheld entry
/// fails with [`AssetLoadError::NotFound`] until restored.
#[derive(Debug, Default)]
pub struct BundledAssets {
    withheld: HashSet<String>,
}

impl BundledAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `name` unavailable.
    pub fn without(mut self, name: &str) -> Self {
        self.withheld.insert(name.to_string());
        self
    }

    /// Makes a withheld entry available again.
    pub fn restore(&mut self, name: &str) {
        if self.withheld.remove(name) {
            info!("Asset '{}' restored", name);
        }
    }

    fn check(&self, name: &str) -> Result<(), AssetLoadError> {
        if self.withheld.contains(name) {
            return Err(AssetLoadError::NotFound { name: name.to_string() });
        }
        Ok(())
    }

    /// Terrain in model space: a ground slab and a few blocks to climb.
    fn terrain_parts() -> Vec<MeshPart> {
        let part = |name: &str, min: Vec3, max: Vec3| MeshPart {
            name: name.to_string(),
            bounds: Aabb::new(min, max),
        };
        vec![
            part("ground", Vec3::new(-12.0, -1.0, -12.0), Vec3::new(12.0, 0.0, 12.0)),
            part("block_a", Vec3::new(2.0, 0.0, 2.0), Vec3::new(4.0, 0.8, 4.0)),
            part("block_b", Vec3::new(-6.0, 0.0, 4.0), Vec3::new(-4.0, 0.4, 7.0)),
            part("ridge", Vec3::new(-1.0, 0.0, -6.0), Vec3::new(1.0, 0.6, -2.0)),
        ]
    }
}

impl AssetSource for BundledAssets {
    fn load_music(&mut self, name: &str) -> Result<Box<dyn AudioTrack>, AssetLoadError> {
        self.check(name)?;
        let &(_, looping) = MUSIC
            .iter()
            .find(|(entry, _)| *entry == name)
            .ok_or_else(|| AssetLoadError::NotFound { name: name.to_string() })?;
        Ok(Box::new(LoggedTrack::new(name, looping)))
    }

    fn load_sound(&mut self, name: &str) -> Result<Box<dyn AudioTrack>, AssetLoadError> {
        self.check(name)?;
        if !SOUNDS.contains(&name) {
            return Err(AssetLoadError::NotFound { name: name.to_string() });
        }
        Ok(Box::new(LoggedTrack::new(name, false)))
    }

    fn load_terrain(&mut self, name: &str) -> Result<TerrainMesh, AssetLoadError> {
        self.check(name)?;
        if name != TERRAIN_MODEL {
            return Err(AssetLoadError::NotFound { name: name.to_string() });
        }
        Ok(TerrainMesh {
            name: name.to_string(),
            parts: Self::terrain_parts(),
        })
    }

    fn load_character(&mut self, name: &str) -> Result<CharacterRig, AssetLoadError> {
        self.check(name)?;
        if name != CHARACTER_MODEL {
            return Err(AssetLoadError::NotFound { name: name.to_string() });
        }

        let clips = AnimState::ALL
            .iter()
            .map(|&state| {
                let clip: Box<dyn AnimationClip> = Box::new(LoggedClip::new(&format!("{:?}", state)));
                (state, clip)
            })
            .collect();

        Ok(CharacterRig {
            body: Box::new(KinematicBody::default()),
            clips,
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
