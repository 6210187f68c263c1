//! Audio systems and the audio thread.
//!
//! Gameplay raises cues through the [`Sfx`] system parameter, which honours
//! the mute flag. [`forward_audio_cues`] hands every cue written this frame
//! to the audio thread over the [`AudioBridge`] channel, where a runner plays
//! it. The tick never waits on playback.
//!
//! Runners:
//! - [`run_sink`] drives any [`AudioSink`] (the headless build logs cues with
//!   [`LogSink`]; tests record them).
//! - `raylib_audio_thread` (feature `raylib`) owns the Raylib audio device and
//!   plays `assets/sounds/<id>.ogg`.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use crossbeam_channel::Receiver;
use log::debug;

use crate::events::audio::{AudioCmd, AudioCue};
use crate::resources::audio::{AudioBridge, AudioSettings};

/// Cue emitter for systems and observers.
#[derive(SystemParam)]
pub struct Sfx<'w> {
    writer: MessageWriter<'w, AudioCue>,
    settings: Res<'w, AudioSettings>,
}

impl Sfx<'_> {
    /// Fire `cue` unless audio is muted.
    pub fn play(&mut self, cue: AudioCue) {
        if self.settings.muted {
            return;
        }
        debug!("cue {:?}", cue);
        self.writer.write(cue);
    }
}

/// Forward AudioCue messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cues(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCue>) {
    for cue in reader.read() {
        // Ignore send errors: the thread is gone only during shutdown.
        let _ = bridge.tx_cmd.send(AudioCmd::Play(*cue));
    }
}

/// Advance the ECS message queue for AudioCue so stale cues are dropped.
pub fn update_audio_cues(mut msgs: ResMut<Messages<AudioCue>>) {
    msgs.update();
}

/// Something that can play cues. Lives on the audio thread.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Sink for builds without an audio device: cues only show up in the log.
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, cue: AudioCue) {
        log::info!("[audio] play '{}'", cue.sound_id());
    }
}

/// Blocking runner loop: play every cue until [`AudioCmd::Shutdown`] or the
/// sender side disappears.
pub fn run_sink<S: AudioSink>(rx_cmd: Receiver<AudioCmd>, mut sink: S) {
    debug!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );
    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::Play(cue) => sink.play(cue),
            AudioCmd::Shutdown => break,
        }
    }
    debug!("[audio] thread exiting");
}

/// Audio thread backed by Raylib. Sounds are loaded once up front; a missing
/// file only silences its cue.
#[cfg(feature = "raylib")]
pub fn raylib_audio_thread(rx_cmd: Receiver<AudioCmd>) {
    use raylib::core::audio::{RaylibAudio, Sound};
    use rustc_hash::FxHashMap;

    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            log::warn!("[audio] no audio device ({}), cues will be logged only", e);
            run_sink(rx_cmd, LogSink);
            return;
        }
    };

    let mut sounds: FxHashMap<AudioCue, Sound> = FxHashMap::default();
    for cue in [AudioCue::Jump, AudioCue::Hurt, AudioCue::Coin] {
        let path = format!("assets/sounds/{}.ogg", cue.sound_id());
        match audio.new_sound(&path) {
            Ok(sound) => {
                debug!("[audio] loaded '{}'", path);
                sounds.insert(cue, sound);
            }
            Err(e) => log::warn!("[audio] load failed path='{}' error='{}'", path, e),
        }
    }

    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::Play(cue) => {
                if let Some(sound) = sounds.get(&cue) {
                    sound.play();
                }
            }
            AudioCmd::Shutdown => break,
        }
    }
    // Sounds drop before `audio`.
    sounds.clear();
}
