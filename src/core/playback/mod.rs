//! core/playback/mod.rs
//! MoodBeats playback core module.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

mod engine;

pub use engine::PlaybackEngine;

use super::error::EngineGone;
use super::spectrum::SpectrumFeed;

#[derive(Clone, Debug)]
pub struct PlaybackController {
    command_tx: Sender<PlayerCommand>,
}

impl PlaybackController {
    /// Fails once the engine thread has exited.
    pub fn send(&self, cmd: PlayerCommand) -> Result<(), EngineGone> {
        self.command_tx.send(cmd).map_err(|err| {
            log::warn!("PlaybackController: engine is gone, dropped {:?}", err.0);
            EngineGone
        })
    }

    /// A controller whose engine already exited.
    #[cfg(test)]
    pub(crate) fn disconnected() -> Self {
        let (command_tx, _) = mpsc::channel();
        Self { command_tx }
    }
}

#[derive(Debug)]
pub enum PlayerCommand {
    /// Start this file from the beginning, replacing whatever plays.
    Play(PathBuf),
    Pause,
    Resume,
    Stop,
    SetVolume(f32), // 0.0..=1.0
}

#[derive(Debug, Clone)]
pub enum PlayerEvent {
    Started { path: PathBuf, duration_ms: Option<u64> },
    Paused,
    Resumed,
    Stopped,
    /// The track at `path` played to its end.
    TrackEnded { path: PathBuf },
    /// `path` is the track that failed to load; `None` means the engine
    /// itself could not start.
    Error {
        path: Option<PathBuf>,
        message: String,
    },
}

/// Spawns the playback thread and returns:
/// - PlaybackController (store in GUI state)
/// - Receiver<PlayerEvent> (drained on the GUI tick)
///
/// Decoded samples of whatever plays are mirrored into `feed`.
pub fn start_playback(feed: SpectrumFeed) -> (PlaybackController, Receiver<PlayerEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

    thread::spawn(move || {
        let mut engine = match PlaybackEngine::new(event_tx.clone(), feed) {
            Ok(e) => e,
            Err(msg) => {
                log::error!("Playback engine failed to start: {msg}");
                let _ = event_tx.send(PlayerEvent::Error {
                    path: None,
                    message: msg,
                });
                return;
            }
        };

        log::info!("Playback engine started");
        engine.run(command_rx);
        log::info!("Playback engine stopped");
    });

    (PlaybackController { command_tx }, event_rx)
}
