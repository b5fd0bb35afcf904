//! core/mod.rs
//!
//! The brain of the app:
//! - static catalog + mood guess + playlist pick (pure, synchronous)
//! - decode uploads, stream catalog tracks, analyse the spectrum
//! - export a playlist as a zip
//!
//! No GUI code in here. The GUI calls `recommend` once an upload decoded,
//! then drives `PlaybackSession` and forwards its actions to the engine.

pub mod catalog;
pub mod decode;
pub mod error;
pub mod export;
pub mod mood;
pub mod playback;
pub mod playlist;
pub mod session;
pub mod spectrum;
pub mod types;

use rand::Rng;

use catalog::Catalog;
use types::{Mood, Track};

/// Outcome of one upload cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub mood: Mood,
    pub tracks: Vec<Track>,
}

/// name -> mood -> playlist.
pub fn recommend<R: Rng + ?Sized>(
    uploaded_name: &str,
    catalog: &Catalog,
    rng: &mut R,
) -> Recommendation {
    let mood = mood::classify_mood(uploaded_name, catalog);
    let tracks = playlist::select_playlist(mood, uploaded_name, catalog, rng);

    log::info!(
        "Recommendation for {uploaded_name:?}: {mood} ({} tracks)",
        tracks.len()
    );

    Recommendation { mood, tracks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn enna_sugam_remix_end_to_end() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        let rec = recommend("my-enna-sugam-remix.mp3", &catalog, &mut rng);

        assert_eq!(rec.mood, Mood::Love);
        assert_eq!(rec.mood.display(), "❤️ Love");
        assert!(!rec.tracks.is_empty() && rec.tracks.len() <= 3);
        assert!(rec.tracks.iter().all(|t| catalog.tracks(Mood::Love).contains(t)));
    }

    #[test]
    fn folk_upload_gets_folk_tracks() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(9);
        let rec = recommend("Chumma Kizhi.mp3", &catalog, &mut rng);

        assert_eq!(rec.mood, Mood::Folk);
        assert!(rec.tracks.iter().all(|t| catalog.tracks(Mood::Folk).contains(t)));
    }
}
