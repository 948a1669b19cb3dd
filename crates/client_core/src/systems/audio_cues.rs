//! Audio cue edges for the host's sound player.
//!
//! Only transitions are emitted; playback (and any playback failure) stays
//! with the host.

use crate::controller::ControllerEvent;
use crate::facade::controller::CameraMode;
use crate::input::KeysDown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    /// One-shot, restarted on every jump.
    Jump,
    /// Start the looping sprint sound from the beginning.
    SprintStart,
    SprintStop,
}

#[derive(Default, Debug, Clone, Copy)]
pub struct AudioCues {
    sprint_playing: bool,
}

impl AudioCues {
    #[must_use]
    pub fn sprint_playing(&self) -> bool {
        self.sprint_playing
    }

    /// Emit cues for this frame's controller events and sprint state.
    pub fn update(
        &mut self,
        keys: &KeysDown,
        mode: CameraMode,
        events: &[ControllerEvent],
        out: &mut Vec<AudioCue>,
    ) {
        if events.contains(&ControllerEvent::Jump) {
            out.push(AudioCue::Jump);
        }
        let should_sprint = keys.boost && keys.any_move() && mode.allows_walking();
        if should_sprint && !self.sprint_playing {
            self.sprint_playing = true;
            out.push(AudioCue::SprintStart);
        } else if !should_sprint && self.sprint_playing {
            self.sprint_playing = false;
            out.push(AudioCue::SprintStop);
        }
    }
}
