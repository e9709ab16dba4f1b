//=========================================================================
// Assets
//=========================================================================
//
// Startup assets are fetched through `AssetSource`. The game never touches
// files or decoders directly; it asks for named tracks, terrain and the
// character rig and receives capability objects.
//
// Architecture:
//   AssetSource (trait)
//     ├─ load_music / load_sound -> Box<dyn AudioTrack>
//     ├─ load_terrain            -> TerrainMesh (boxes per sub-mesh)
//     └─ load_character          -> CharacterRig (body + clips)
//
//   BundledAssets: built-in catalog used by the binary.
//
//=========================================================================

//=== Module Declarations =================================================

mod bundled;

//=== Public API ==========================================================

pub use bundled::{BundledAssets, LoggedClip, LoggedTrack};

//=== Internal Dependencies ===============================================

use crate::core::capabilities::{Aabb, AnimationClip, AudioTrack, RigidBody};
use crate::core::error::AssetLoadError;
use crate::core::player::AnimState;

//=== Asset Names =========================================================

pub const MENU_MUSIC: &str = "music/menu_theme";
pub const GAME_MUSIC: &str = "music/game_music";
pub const GAME_OVER_MUSIC: &str = "music/game_over";
pub const WHISTLE_SOUND: &str = "sfx/whistle";
pub const TERRAIN_MODEL: &str = "models/terrain";
pub const CHARACTER_MODEL: &str = "models/character";

//=== Loaded Types ========================================================

/// One imported sub-mesh, reduced to its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPart {
    pub name: String,
    pub bounds: Aabb,
}

/// Imported terrain in model space (before arena scale/offset).
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    pub name: String,
    pub parts: Vec<MeshPart>,
}

/// The player's body and its locomotion clips.
pub struct CharacterRig {
    pub body: Box<dyn RigidBody>,
    pub clips: Vec<(AnimState, Box<dyn AnimationClip>)>,
}

//=== AssetSource =========================================================

/// Loader for everything the game needs at startup.
///
/// Implementations move to the logic thread, hence `Send`.
pub trait AssetSource: Send {
    /// Looping background track.
    fn load_music(&mut self, name: &str) -> Result<Box<dyn AudioTrack>, AssetLoadError>;

    /// One-shot sound effect.
    fn load_sound(&mut self, name: &str) -> Result<Box<dyn AudioTrack>, AssetLoadError>;

    fn load_terrain(&mut self, name: &str) -> Result<TerrainMesh, AssetLoadError>;

    fn load_character(&mut self, name: &str) -> Result<CharacterRig, AssetLoadError>;
}
