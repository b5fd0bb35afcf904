//! core/mood.rs
//! Guess a mood from an uploaded file name.
//!
//! Pure string matching, no audio analysis:
//! - normalize both sides to `[a-z0-9]*`
//! - walk the catalog in order, first track whose name is contained wins
//! - nothing matched -> `Mood::DEFAULT`

use super::catalog::Catalog;
use super::types::Mood;

/// Lower-case and drop everything outside `[a-z0-9]`.
///
/// Ex: `"My-Enna Sugam!.mp3"` -> `"myennasugammp3"`
pub fn normalize(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

pub fn classify_mood(uploaded_name: &str, catalog: &Catalog) -> Mood {
    let uploaded = normalize(uploaded_name);

    for (mood, tracks) in catalog.buckets() {
        for track in tracks {
            let clean = normalize(track.name);
            if uploaded.contains(&clean) {
                log::debug!("classify_mood: {uploaded_name:?} matched {:?} -> {mood}", track.name);
                return mood;
            }
        }
    }

    log::debug!("classify_mood: {uploaded_name:?} matched nothing, using {}", Mood::DEFAULT);
    Mood::DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Track;

    #[test]
    fn normalize_strips_everything_but_ascii_alnum() {
        assert_eq!(normalize("My-Enna Sugam!.mp3"), "myennasugammp3");
        assert_eq!(normalize("  __ "), "");
        assert_eq!(normalize("Track 07 (Live)"), "track07live");
    }

    #[test]
    fn remix_of_enna_sugam_is_love() {
        let catalog = Catalog::builtin();
        assert_eq!(classify_mood("my-enna-sugam-remix.mp3", &catalog), Mood::Love);
    }

    #[test]
    fn folk_track_name_is_folk() {
        let catalog = Catalog::builtin();
        assert_eq!(classify_mood("COOLIE_DISCO (320kbps).mp3", &catalog), Mood::Folk);
        assert_eq!(classify_mood("chikitu.flac", &catalog), Mood::Folk);
    }

    #[test]
    fn no_match_and_empty_fall_back_to_default() {
        let catalog = Catalog::builtin();
        assert_eq!(classify_mood("random noise.wav", &catalog), Mood::Love);
        assert_eq!(classify_mood("", &catalog), Mood::DEFAULT);
    }

    #[test]
    fn first_match_in_catalog_order_wins() {
        // Both names are contained; Folk comes first in this catalog.
        const FOLK: &[Track] = &[
            Track {
                name: "Disco",
                file_ref: "songs/a.mp3",
            },
        ];
        const LOVE: &[Track] = &[
            Track {
                name: "Coolie Disco",
                file_ref: "songs/b.mp3",
            },
        ];
        let catalog = Catalog::from_buckets([(Mood::Folk, FOLK), (Mood::Love, LOVE)]);
        assert_eq!(classify_mood("coolie disco.mp3", &catalog), Mood::Folk);

        let reversed = Catalog::from_buckets([(Mood::Love, LOVE), (Mood::Folk, FOLK)]);
        assert_eq!(classify_mood("coolie disco.mp3", &reversed), Mood::Love);
    }

    #[test]
    fn classification_is_repeatable() {
        let catalog = Catalog::builtin();
        let name = "uyirey (unplugged).mp3";
        assert_eq!(classify_mood(name, &catalog), classify_mood(name, &catalog));
    }
}
