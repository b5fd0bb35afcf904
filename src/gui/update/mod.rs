//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, MoodBeats};
use super::visualizer::VISUALIZER_H;

mod export;
mod playback;
mod upload;
mod util;

pub(crate) fn update(state: &mut MoodBeats, message: Message) -> Task<Message> {
    match message {
        // Upload
        Message::UploadPressed => upload::upload_pressed(state),
        Message::UploadPicked(path) => upload::upload_picked(state, path),
        Message::AnalysisFinished {
            generation,
            name,
            result,
        } => upload::analysis_finished(state, generation, name, result),

        // Playback
        Message::SelectTrack(i) => playback::select_track(state, i),
        Message::SetVolume(vol) => playback::set_volume(state, vol),
        Message::TickPlayback => playback::drain_events(state),

        // Export
        Message::ExportPressed => export::export_pressed(state),
        Message::ExportFinished(result) => export::export_finished(state, result),

        Message::Frame => frame(state),
    }
}

/// One render tick: pull fresh magnitudes, drift particles.
fn frame(state: &mut MoodBeats) -> Task<Message> {
    state.bars = state.analyser.frequency_data();
    for p in &mut state.particles {
        p.step(VISUALIZER_H);
    }
    Task::none()
}
