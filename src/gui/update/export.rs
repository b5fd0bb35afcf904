//! gui/update/export.rs
//! "Download playlist": zip the current recommendation off-thread.

use std::path::PathBuf;

use iced::Task;

use super::super::state::{Message, MoodBeats};
use super::util::spawn_blocking;
use crate::core::export::export_playlist;

pub(crate) fn export_pressed(state: &mut MoodBeats) -> Task<Message> {
    // Nothing recommended -> nothing to export.
    if state.exporting || state.session.tracks().is_empty() {
        return Task::none();
    }

    state.exporting = true;
    state.status = "Exporting playlist…".into();

    let tracks = state.session.tracks().to_vec();
    let songs_root = state.config.songs_root.clone();
    let export_dir = state.config.export_dir.clone();

    Task::perform(
        spawn_blocking(move || {
            export_playlist(&tracks, &songs_root, &export_dir).map_err(|e| e.to_string())
        }),
        Message::ExportFinished,
    )
}

pub(crate) fn export_finished(
    state: &mut MoodBeats,
    result: Result<PathBuf, String>,
) -> Task<Message> {
    state.exporting = false;

    state.status = match result {
        Ok(path) => format!("Playlist saved to {}", path.display()),
        Err(e) => {
            log::error!("Export failed: {e}");
            format!("Export failed: {e}")
        }
    };

    Task::none()
}
