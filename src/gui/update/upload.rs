//! gui/update/upload.rs
//! Upload lifecycle: pick -> read + decode off-thread -> classify + select.
//!
//! - Cancelling the picker changes nothing.
//! - Decode runs on a worker; mood + playlist are computed here, on the UI
//!   thread, only after decode succeeded.
//! - A failed decode is reported and the previous recommendation stays.

use std::path::{Path, PathBuf};

use iced::Task;

use super::super::state::{Message, MoodBeats};
use super::playback::stop;
use super::util::spawn_blocking;
use crate::core;
use crate::core::decode::{DecodedAudio, decode_upload};
use crate::core::types::UploadedFile;

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "ogg", "m4a", "aac", "mp4"];

pub(crate) fn upload_pressed(state: &mut MoodBeats) -> Task<Message> {
    if state.analyzing {
        return Task::none();
    }

    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Pick a song")
                .add_filter("Audio", AUDIO_EXTENSIONS)
                .add_filter("All files", &["*"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::UploadPicked,
    )
}

pub(crate) fn upload_picked(state: &mut MoodBeats, picked: Option<PathBuf>) -> Task<Message> {
    let Some(path) = picked else {
        log::debug!("Upload cancelled");
        return Task::none();
    };

    let name = file_name(&path);
    state.upload_generation += 1;
    state.analyzing = true;
    state.status = format!("Analyzing {name}…");

    let generation = state.upload_generation;
    let task_name = name.clone();

    Task::perform(
        spawn_blocking(move || read_and_decode(&path, task_name)),
        move |result| Message::AnalysisFinished {
            generation,
            name: name.clone(),
            result,
        },
    )
}

fn read_and_decode(path: &Path, name: String) -> Result<(UploadedFile, DecodedAudio), String> {
    let bytes = std::fs::read(path).map_err(|e| format!("failed to read: {e}"))?;
    let file = UploadedFile::new(name, bytes);
    let decoded = decode_upload(&file).map_err(|e| e.to_string())?;
    Ok((file, decoded))
}

pub(crate) fn analysis_finished(
    state: &mut MoodBeats,
    generation: u64,
    name: String,
    result: Result<(UploadedFile, DecodedAudio), String>,
) -> Task<Message> {
    if generation != state.upload_generation {
        log::debug!("Dropping stale analysis for {name:?}");
        return Task::none();
    }

    state.analyzing = false;

    match result {
        Ok((file, decoded)) => {
            let rec = core::recommend(&file.raw_name, &state.catalog, &mut state.rng);

            // New recommendation: whatever played before is gone.
            let _ = stop(state);
            state.session.reset(rec.tracks);
            state.mood = Some(rec.mood);
            state.upload = Some(file);

            state.status = if state.session.tracks().is_empty() {
                format!("{name}: {} (no tracks found)", rec.mood.display())
            } else {
                format!(
                    "{name} ({}:{:02}) feels like {}",
                    decoded.duration_ms() / 60_000,
                    decoded.duration_ms() / 1000 % 60,
                    rec.mood.display()
                )
            };
        }
        Err(e) => {
            log::warn!("Analysis failed for {name:?}: {e}");
            state.status = format!("Could not decode {name}: {e}");
        }
    }

    Task::none()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
