//! GUI state + messages.
//! Pure data definitions used by update + view.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::visualizer::{Particle, spawn_particles};
use crate::config::AppConfig;
use crate::core::catalog::Catalog;
use crate::core::decode::DecodedAudio;
use crate::core::playback::{PlaybackController, PlayerEvent};
use crate::core::session::PlaybackSession;
use crate::core::spectrum::{Analyser, BIN_COUNT, SpectrumFeed};
use crate::core::types::{Mood, UploadedFile};

/// App state
pub(crate) struct MoodBeats {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub rng: StdRng,

    pub status: String,

    // Upload
    /// True between picking a file and its decode finishing.
    pub analyzing: bool,
    /// Bumped on every pick; stale decode results are dropped.
    pub upload_generation: u64,
    pub upload: Option<UploadedFile>,
    pub mood: Option<Mood>,

    // Playback
    /// Recommendation + which track is loaded/playing.
    pub session: PlaybackSession,
    /// Spawned lazily on the first track click.
    pub playback: Option<PlaybackController>,
    pub playback_events: Option<Receiver<PlayerEvent>>,
    pub volume: f32,

    // Export
    pub exporting: bool,

    // Visualizer
    pub feed: SpectrumFeed,
    pub analyser: Analyser,
    pub bars: [u8; BIN_COUNT],
    pub particles: Vec<Particle>,
}

impl MoodBeats {
    pub(crate) fn new(config: AppConfig) -> Self {
        let mut rng = StdRng::from_os_rng();
        let particles = spawn_particles(&mut rng);
        let feed = SpectrumFeed::new();

        Self {
            volume: config.initial_volume,
            config,
            catalog: Catalog::builtin(),
            rng,

            status: "Upload a song to find your mood.".to_string(),

            analyzing: false,
            upload_generation: 0,
            upload: None,
            mood: None,

            session: PlaybackSession::default(),
            playback: None,
            playback_events: None,

            exporting: false,

            analyser: Analyser::new(feed.clone()),
            feed,
            bars: [0; BIN_COUNT],
            particles,
        }
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Upload
    UploadPressed,
    /// File dialog closed; `None` = cancelled.
    UploadPicked(Option<PathBuf>),
    AnalysisFinished {
        generation: u64,
        name: String,
        result: Result<(UploadedFile, DecodedAudio), String>,
    },

    // Playback
    SelectTrack(usize),
    SetVolume(f32),
    TickPlayback,

    // Export
    ExportPressed,
    ExportFinished(Result<PathBuf, String>),

    // Visualizer
    Frame,
}
