//=========================================================================
// Sound Manager
//=========================================================================
//
// Fixed catalog of music tracks and sound effects, loaded once at
// startup and addressed by index.
//
//   musics: [StartMusic, GameMusic, GameOverMusic]
//   sounds: [Whistle]
//
// At most one music track plays at a time; starting one stops the
// previous. Indices outside the catalog are ignored.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::assets::{AssetSource, GAME_MUSIC, GAME_OVER_MUSIC, MENU_MUSIC, WHISTLE_SOUND};
use crate::core::capabilities::AudioTrack;
use crate::core::error::AssetLoadError;

//=== Catalog =============================================================

/// Music slots, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Music {
    StartMusic = 0,
    GameMusic = 1,
    GameOverMusic = 2,
}

impl Music {
    pub const ALL: [Music; 3] = [Music::StartMusic, Music::GameMusic, Music::GameOverMusic];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn asset_name(self) -> &'static str {
        match self {
            Music::StartMusic => MENU_MUSIC,
            Music::GameMusic => GAME_MUSIC,
            Music::GameOverMusic => GAME_OVER_MUSIC,
        }
    }
}

/// Sound effect slots, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundFx {
    Whistle = 0,
}

impl SoundFx {
    pub const ALL: [SoundFx; 1] = [SoundFx::Whistle];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn asset_name(self) -> &'static str {
        match self {
            SoundFx::Whistle => WHISTLE_SOUND,
        }
    }
}

//=== SoundManager ========================================================

#[derive(Default)]
pub struct SoundManager {
    musics: Vec<Box<dyn AudioTrack>>,
    sounds: Vec<Box<dyn AudioTrack>>,

    /// Index of the music started last, if any.
    current_music: Option<usize>,
}

impl SoundManager {
    /// An empty manager; every index is out of range until loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the whole catalog. Fails on the first missing asset.
    pub fn load(assets: &mut dyn AssetSource) -> Result<Self, AssetLoadError> {
        let musics = Music::ALL
            .iter()
            .map(|music| assets.load_music(music.asset_name()))
            .collect::<Result<Vec<_>, _>>()?;
        let sounds = SoundFx::ALL
            .iter()
            .map(|fx| assets.load_sound(fx.asset_name()))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Sound catalog loaded: {} musics, {} sounds", musics.len(), sounds.len());
        Ok(Self::from_tracks(musics, sounds))
    }

    /// Builds a manager over already-loaded tracks, indexed by position.
    pub fn from_tracks(musics: Vec<Box<dyn AudioTrack>>, sounds: Vec<Box<dyn AudioTrack>>) -> Self {
        Self {
            musics,
            sounds,
            current_music: None,
        }
    }

    pub fn music_count(&self) -> usize {
        self.musics.len()
    }

    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }

    pub fn current_music(&self) -> Option<usize> {
        self.current_music
    }

    pub fn is_music_playing(&self, index: usize) -> bool {
        self.musics.get(index).is_some_and(|track| track.is_playing())
    }

    //--- Playback ---------------------------------------------------------

    /// Starts music `index`, stopping the previous one.
    ///
    /// Returns `false` (and changes nothing) for an unknown index.
    pub fn play_music(&mut self, index: usize) -> bool {
        if index >= self.musics.len() {
            warn!("Ignoring music index {} (catalog has {})", index, self.musics.len());
            return false;
        }

        self.stop_music();
        self.musics[index].play();
        self.current_music = Some(index);
        debug!("Music -> {}", index);
        true
    }

    pub fn play(&mut self, music: Music) -> bool {
        self.play_music(music.index())
    }

    /// Stops the current music, if any.
    pub fn stop_music(&mut self) {
        if let Some(track) = self.current_music.take().and_then(|i| self.musics.get_mut(i)) {
            track.stop();
        }
    }

    /// Plays sound effect `index`. Returns `false` for an unknown index.
    pub fn play_sound(&mut self, index: usize) -> bool {
        match self.sounds.get_mut(index) {
            Some(track) => {
                track.play();
                true
            }
            None => {
                warn!("Ignoring sound index {} (catalog has {})", index, self.sounds.len());
                false
            }
        }
    }

    pub fn play_fx(&mut self, fx: SoundFx) -> bool {
        self.play_sound(fx.index())
    }
}

impl std::fmt::Debug for SoundManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundManager")
            .field("musics", &self.musics.len())
            .field("sounds", &self.sounds.len())
            .field("current_music", &self.current_music)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::BundledAssets;
    use crate::core::test_support::{RecordingTrack, TrackLog};

    fn manager() -> (SoundManager, TrackLog) {
        let log = TrackLog::default();
        let track = |name: &str| Box::new(RecordingTrack::new(name, log.clone())) as Box<dyn AudioTrack>;
        let musics = vec![track("start"), track("game"), track("over")];
        let sounds = vec![track("whistle")];
        (SoundManager::from_tracks(musics, sounds), log)
    }

    #[test]
    fn playing_music_stops_previous() {
        let (mut sound, _) = manager();

        assert!(sound.play(Music::StartMusic));
        assert!(sound.play(Music::GameMusic));

        assert!(!sound.is_music_playing(Music::StartMusic.index()));
        assert!(sound.is_music_playing(Music::GameMusic.index()));
        assert_eq!(sound.current_music(), Some(1));
    }

    #[test]
    fn out_of_range_music_is_ignored() {
        let (mut sound, log) = manager();
        sound.play(Music::GameMusic);
        let calls = log.len();

        assert!(!sound.play_music(7));

        assert_eq!(log.len(), calls);
        assert_eq!(sound.current_music(), Some(1));
        assert!(sound.is_music_playing(1));
    }

    #[test]
    fn sounds_play_by_index() {
        let (mut sound, log) = manager();

        assert!(sound.play_fx(SoundFx::Whistle));
        assert!(!sound.play_sound(3));
        assert_eq!(log.calls(), vec![("whistle".to_string(), "play")]);
    }

    #[test]
    fn stop_music_clears_current() {
        let (mut sound, _) = manager();
        sound.play(Music::GameOverMusic);
        sound.stop_music();

        assert_eq!(sound.current_music(), None);
        assert!(!sound.is_music_playing(2));
    }

    #[test]
    fn empty_manager_ignores_everything() {
        let mut sound = SoundManager::new();
        assert!(!sound.play(Music::StartMusic));
        assert!(!sound.play_fx(SoundFx::Whistle));
        assert_eq!(sound.current_music(), None);
    }

    #[test]
    fn load_pulls_full_catalog() {
        let sound = SoundManager::load(&mut BundledAssets::new()).unwrap();
        assert_eq!(sound.music_count(), Music::ALL.len());
        assert_eq!(sound.sound_count(), SoundFx::ALL.len());
    }

    #[test]
    fn load_fails_on_missing_track() {
        let mut assets = BundledAssets::new().without(GAME_OVER_MUSIC);
        let err = SoundManager::load(&mut assets).unwrap_err();
        assert_eq!(err.asset_name(), GAME_OVER_MUSIC);
    }
}
