//=========================================================================
// Animation
//=========================================================================
//
// Picks the character animation state and switches clips.
//
//=========================================================================

use std::collections::HashMap;

use log::debug;

use crate::core::capabilities::AnimationClip;

/// Locomotion animation shown on the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimState {
    #[default]
    Idle,
    Run,
    /// Sprinting forward.
    Fast,
    /// Walking backward.
    Back,
}

impl AnimState {
    pub const ALL: [AnimState; 4] = [AnimState::Idle, AnimState::Run, AnimState::Fast, AnimState::Back];
}

/// Picks the animation for this frame's input.
///
/// Priority: `Fast` (moving, sprint held, forward) over `Back` (moving
/// backward) over `Run` (moving) over `Idle`. `magnitude` is the length of
/// the raw move input; anything under `threshold` counts as standing still.
pub fn select_state(magnitude: f32, sprint_held: bool, forward_axis: f32, threshold: f32) -> AnimState {
    if magnitude < threshold {
        AnimState::Idle
    } else if sprint_held && forward_axis > 0.0 {
        AnimState::Fast
    } else if forward_axis < 0.0 {
        AnimState::Back
    } else {
        AnimState::Run
    }
}

/// Owns the rig's clips and keeps exactly one of them playing.
pub struct Animator {
    clips: HashMap<AnimState, Box<dyn AnimationClip>>,
    current: Option<AnimState>,
}

impl Animator {
    pub fn new(clips: impl IntoIterator<Item = (AnimState, Box<dyn AnimationClip>)>) -> Self {
        Self {
            clips: clips.into_iter().collect(),
            current: None,
        }
    }

    pub fn current(&self) -> Option<AnimState> {
        self.current
    }

    pub fn has_clip(&self, state: AnimState) -> bool {
        self.clips.contains_key(&state)
    }

    pub fn is_playing(&self, state: AnimState) -> bool {
        self.clips.get(&state).is_some_and(|clip| clip.is_playing())
    }

    /// Switches to `state`. Returns `false` if it was already current.
    ///
    /// The new clip starts looping unless already playing; every other clip
    /// is stopped. A state without a clip just stops the others.
    pub fn apply(&mut self, state: AnimState) -> bool {
        if self.current == Some(state) {
            return false;
        }

        for (clip_state, clip) in self.clips.iter_mut() {
            if *clip_state == state {
                if !clip.is_playing() {
                    clip.play_looping();
                }
            } else if clip.is_playing() {
                clip.stop();
            }
        }

        debug!("Animation {:?} -> {:?}", self.current, state);
        self.current = Some(state);
        true
    }

    /// Stops every clip and forgets the current state.
    pub fn stop_all(&mut self) {
        for clip in self.clips.values_mut() {
            if clip.is_playing() {
                clip.stop();
            }
        }
        self.current = None;
    }
}

impl std::fmt::Debug for Animator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animator")
            .field("clips", &self.clips.keys().collect::<Vec<_>>())
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{ClipLog, RecordingClip};

    const T: f32 = 0.1;

    #[test]
    fn priority_table() {
        // (magnitude, sprint, z) -> state
        let cases = [
            (0.0, false, 0.0, AnimState::Idle),
            (0.0, true, 0.0, AnimState::Idle),
            (1.0, false, 1.0, AnimState::Run),
            (1.0, false, 0.0, AnimState::Run),
            (1.0, true, 0.0, AnimState::Run),
            (1.0, true, 1.0, AnimState::Fast),
            (1.0, false, -1.0, AnimState::Back),
            (1.0, true, -1.0, AnimState::Back),
            (0.05, true, 1.0, AnimState::Idle),
        ];
        for (m, sprint, z, expected) in cases {
            assert_eq!(select_state(m, sprint, z, T), expected, "m={m} sprint={sprint} z={z}");
        }
    }

    fn animator() -> (Animator, ClipLog) {
        let log = ClipLog::default();
        let clips = AnimState::ALL.map(|state| {
            (state, Box::new(RecordingClip::new(state, log.clone())) as Box<dyn AnimationClip>)
        });
        (Animator::new(clips), log)
    }

    #[test]
    fn apply_plays_one_and_stops_others() {
        let (mut animator, _log) = animator();

        assert!(animator.apply(AnimState::Run));
        assert!(animator.is_playing(AnimState::Run));

        assert!(animator.apply(AnimState::Fast));
        assert!(animator.is_playing(AnimState::Fast));
        assert!(!animator.is_playing(AnimState::Run));

        let playing = AnimState::ALL.iter().filter(|s| animator.is_playing(**s)).count();
        assert_eq!(playing, 1);
    }

    #[test]
    fn reapplying_current_state_is_a_noop() {
        let (mut animator, log) = animator();
        animator.apply(AnimState::Idle);
        let calls = log.len();

        assert!(!animator.apply(AnimState::Idle));
        assert_eq!(log.len(), calls);
    }

    #[test]
    fn missing_clip_stops_the_rest() {
        let log = ClipLog::default();
        let run: Box<dyn AnimationClip> = Box::new(RecordingClip::new(AnimState::Run, log.clone()));
        let mut animator = Animator::new([(AnimState::Run, run)]);

        animator.apply(AnimState::Run);
        animator.apply(AnimState::Back);

        assert!(!animator.has_clip(AnimState::Back));
        assert!(!animator.is_playing(AnimState::Run));
        assert_eq!(animator.current(), Some(AnimState::Back));
    }

    #[test]
    fn stop_all_clears_current() {
        let (mut animator, _log) = animator();
        animator.apply(AnimState::Back);
        animator.stop_all();

        assert_eq!(animator.current(), None);
        assert!(!animator.is_playing(AnimState::Back));
    }
}
