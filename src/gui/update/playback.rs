//! gui/update/playback.rs
//! GUI <-> playback engine bridge
//!
//! - `PlaybackSession` decides what a click means.
//! - This module forwards the resulting `AudioAction` to the engine.
//! - GUI never touches rodio/symphonia directly.

use std::path::{Path, PathBuf};

use iced::Task;

use super::super::state::{Message, MoodBeats};
use crate::core::playback::{PlayerCommand, PlayerEvent, start_playback};
use crate::core::session::AudioAction;

/// Spawn the engine on first use (audio output starts "suspended").
fn ensure_engine(state: &mut MoodBeats) {
    if state.playback.is_some() && state.playback_events.is_some() {
        return;
    }

    log::info!("Starting playback engine");
    let (controller, events) = start_playback(state.feed.clone());
    state.playback = Some(controller);
    state.playback_events = Some(events);

    let volume = state.volume;
    send(state, PlayerCommand::SetVolume(volume));
}

/// Forward `cmd` to the engine, if one is running.
///
/// A dead engine is dropped so the next click starts a fresh one.
fn send(state: &mut MoodBeats, cmd: PlayerCommand) {
    let Some(controller) = &state.playback else {
        return;
    };
    if let Err(e) = controller.send(cmd) {
        engine_lost(state, &e.to_string());
    }
}

fn engine_lost(state: &mut MoodBeats, reason: &str) {
    log::error!("Playback engine lost: {reason}");
    state.playback = None;
    state.playback_events = None;
    state.session.playback_failed();
    state.status = format!("Playback unavailable: {reason}");
}

pub(crate) fn drain_events(state: &mut MoodBeats) -> Task<Message> {
    let Some(rx) = state.playback_events.as_ref() else {
        return Task::none();
    };

    let drained: Vec<PlayerEvent> = rx.try_iter().collect();
    for ev in drained {
        handle_event(state, ev);
    }

    Task::none()
}

pub(crate) fn select_track(state: &mut MoodBeats, index: usize) -> Task<Message> {
    ensure_engine(state);
    if state.playback.is_none() {
        return Task::none();
    }

    let Some(action) = state.session.select_track(index) else {
        return Task::none();
    };

    let cmd = match action {
        AudioAction::Load(track) => {
            state.status = format!("Playing: {}", track.name);
            PlayerCommand::Play(state.config.songs_root.join(track.file_ref))
        }
        AudioAction::Pause => PlayerCommand::Pause,
        AudioAction::Resume => PlayerCommand::Resume,
    };

    send(state, cmd);
    Task::none()
}

/// Silence everything. No-op if the engine never started.
pub(crate) fn stop(state: &mut MoodBeats) -> Task<Message> {
    send(state, PlayerCommand::Stop);
    Task::none()
}

pub(crate) fn set_volume(state: &mut MoodBeats, volume: f32) -> Task<Message> {
    let volume = volume.clamp(0.0, 1.0);
    state.volume = volume;

    send(state, PlayerCommand::SetVolume(volume));
    Task::none()
}

/// Path of the loaded track, as the engine was told to play it.
fn loaded_path(state: &MoodBeats) -> Option<PathBuf> {
    state
        .session
        .current_track()
        .map(|t| state.config.songs_root.join(t.file_ref))
}

fn is_loaded(state: &MoodBeats, path: &Path) -> bool {
    loaded_path(state).as_deref() == Some(path)
}

fn handle_event(state: &mut MoodBeats, event: PlayerEvent) {
    log::debug!("PlayerEvent: {event:?}");

    match event {
        PlayerEvent::Started { path, duration_ms } => {
            log::info!("Now playing {} ({duration_ms:?} ms)", path.display());
        }
        // Ignore events about tracks the user already switched away from.
        PlayerEvent::TrackEnded { path } => {
            if is_loaded(state, &path) {
                state.session.track_ended();
            }
        }
        PlayerEvent::Error {
            path: Some(path),
            message,
        } => {
            if is_loaded(state, &path) {
                state.session.playback_failed();
                state.status = format!("Playback error: {message}");
            } else {
                log::debug!("Ignoring error for {}: {message}", path.display());
            }
        }
        PlayerEvent::Error {
            path: None,
            message,
        } => engine_lost(state, &message),
        PlayerEvent::Paused | PlayerEvent::Resumed | PlayerEvent::Stopped => {}
    }
}
