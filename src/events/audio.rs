use bevy_ecs::message::Message;
use serde::Serialize;

/// Named sound effect triggered by gameplay.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AudioCue {
    Jump,
    Hurt,
    Coin,
}

impl AudioCue {
    /// Asset id of the sound played for this cue.
    pub fn sound_id(&self) -> &'static str {
        match self {
            AudioCue::Jump => "sfx_jump",
            AudioCue::Hurt => "sfx_hurt",
            AudioCue::Coin => "sfx_coin",
        }
    }
}

/// Commands sent *to* the audio thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCmd {
    Play(AudioCue),
    Shutdown,
}
