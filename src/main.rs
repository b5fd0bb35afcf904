//! MoodBeats
//!
//! Upload a song, get a mood guess from its file name, listen to three
//! recommended tracks with a live frequency visualizer, and download them
//! as a zip.
//!
//! # Layout
//! - `core`: catalog, mood guess, playlist pick, playback session, decoding,
//!   spectrum analysis, export, playback engine thread. No GUI code.
//! - `gui`: iced state/update/view. Calls into `core`, never into rodio.
//! - `config`: YAML settings (songs root, export dir, volume).
//!
//! # Concurrency model
//! - All state lives in `MoodBeats` and is only mutated by `update()`.
//! - Decoding uploads and exporting run on worker threads and come back as
//!   messages.
//! - Audio plays on the engine thread; the GUI talks to it over channels.
//! - The visualizer reads a shared sample ring on every frame tick.

mod config;
mod core;
mod gui;

use gui::MoodBeats;

fn main() -> iced::Result {
    // RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("moodbeats starting up");

    let config = config::load_config(&config::default_config_path());

    iced::application(move || MoodBeats::new(config.clone()), gui::update, gui::view)
        .subscription(gui::subscription)
        .title("MoodBeats")
        .run()
}
