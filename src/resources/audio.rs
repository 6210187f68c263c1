//! ECS resources that bridge the main thread with the background audio thread.
//!
//! Use [`setup_audio`] once during initialization to spawn the audio thread
//! and insert the [`AudioBridge`], [`AudioSettings`] and `Messages<AudioCue>`
//! resources. Call [`shutdown_audio`] during teardown to drain the queue and
//! join the thread.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::audio::{AudioCmd, AudioCue};

/// Shared bridge between the ECS world and the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Join handle for the background audio thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Global mute toggle. Cues raised while muted are dropped at the source.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioSettings {
    pub muted: bool,
}

impl AudioSettings {
    pub fn toggle(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}

/// Spawn the audio thread running `runner` and register bridge resources.
///
/// `runner` owns the receiving end of the command channel for the life of the
/// thread and must return once it sees [`AudioCmd::Shutdown`]. Playback
/// backends that are not `Send` are created inside the runner.
pub fn setup_audio<F>(world: &mut World, muted: bool, runner: F)
where
    F: FnOnce(Receiver<AudioCmd>) + Send + 'static,
{
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();

    let handle = std::thread::spawn(move || runner(rx_cmd));

    world.insert_resource(AudioBridge { tx_cmd, handle });
    world.insert_resource(AudioSettings { muted });
    world.init_resource::<Messages<AudioCue>>();
}

/// Gracefully request shutdown of the audio thread and join it.
///
/// Commands already queued are processed before the thread exits.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        if bridge.handle.join().is_err() {
            log::warn!("audio thread panicked");
        }
    }
}
