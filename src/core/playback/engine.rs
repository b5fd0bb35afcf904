//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns:
//! - OutputStream (must stay alive)
//! - Sink (per current track)
//! - command loop + periodic end-of-track checks
//!
//! Emits PlayerEvent back via a channel.
//! No Iced imports.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::{PlayerCommand, PlayerEvent};
use crate::core::decode::open_source;
use crate::core::spectrum::{SpectrumFeed, SpectrumTap};

const TICK_MS: u64 = 100;
const DEFAULT_VOLUME: f32 = 0.8;

pub struct PlaybackEngine {
    // Keep this alive for the lifetime of the engine!
    stream: OutputStream,

    // Current playback
    sink: Option<Sink>,
    current_path: Option<PathBuf>,
    volume: f32,

    feed: SpectrumFeed,
    event_tx: Sender<PlayerEvent>,
}

impl PlaybackEngine {
    pub fn new(event_tx: Sender<PlayerEvent>, feed: SpectrumFeed) -> Result<Self, String> {
        // rodio 0.21.x: build/open the default output stream via OutputStreamBuilder
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| format!("Failed to open default audio output: {e}"))?;

        Ok(Self {
            stream,
            sink: None,
            current_path: None,
            volume: DEFAULT_VOLUME,
            feed,
            event_tx,
        })
    }

    pub fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        let tick = Duration::from_millis(TICK_MS);

        loop {
            match command_rx.recv_timeout(tick) {
                Ok(cmd) => {
                    self.handle_command(cmd);
                    while let Ok(cmd) = command_rx.try_recv() {
                        self.handle_command(cmd);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                // Controller dropped: the app is shutting down.
                Err(RecvTimeoutError::Disconnected) => break,
            }

            self.tick();
        }

        self.stop_internal();
    }

    fn emit(&self, event: PlayerEvent) {
        let _ = self.event_tx.send(event);
    }

    fn handle_command(&mut self, cmd: PlayerCommand) {
        log::debug!("PlaybackEngine: {cmd:?}");

        match cmd {
            PlayerCommand::Play(path) => {
                if let Err(message) = self.play_file(&path) {
                    log::warn!("PlaybackEngine: {message}");
                    self.emit(PlayerEvent::Error {
                        path: Some(path),
                        message,
                    });
                }
            }
            PlayerCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                    self.feed.clear();
                    self.emit(PlayerEvent::Paused);
                }
            }
            PlayerCommand::Resume => {
                if let Some(sink) = &self.sink {
                    sink.play();
                    self.emit(PlayerEvent::Resumed);
                }
            }
            PlayerCommand::Stop => {
                self.stop_internal();
                self.emit(PlayerEvent::Stopped);
            }
            PlayerCommand::SetVolume(v) => {
                self.volume = v.clamp(0.0, 1.0);
                if let Some(sink) = &self.sink {
                    sink.set_volume(self.volume);
                }
            }
        }
    }

    fn tick(&mut self) {
        let Some(sink) = &self.sink else {
            return;
        };
        if !sink.empty() {
            return;
        }
        if let Some(path) = self.current_path.clone() {
            log::debug!("PlaybackEngine: track ended {}", path.display());
            self.stop_internal();
            self.emit(PlayerEvent::TrackEnded { path });
        }
    }

    fn play_file(&mut self, path: &Path) -> Result<(), String> {
        self.stop_internal();

        let (source, duration_ms) =
            open_source(path).map_err(|e| format!("{}: {e}", path.display()))?;

        // rodio 0.21.x: Sink is created from the stream's mixer
        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.volume);
        sink.append(SpectrumTap::new(source, self.feed.clone()));
        sink.play();

        self.current_path = Some(path.to_path_buf());
        self.sink = Some(sink);

        log::info!("Playing {}", path.display());
        self.emit(PlayerEvent::Started {
            path: path.to_path_buf(),
            duration_ms,
        });

        Ok(())
    }

    fn stop_internal(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.current_path = None;
        self.feed.clear();
    }
}
