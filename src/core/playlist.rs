//! core/playlist.rs
//! Pick up to `PLAYLIST_LEN` tracks from one mood bucket.

use rand::Rng;
use rand::seq::SliceRandom;

use super::catalog::Catalog;
use super::types::{Mood, Track};

pub const PLAYLIST_LEN: usize = 3;

/// Shuffle the mood's bucket and take the first `PLAYLIST_LEN`.
///
/// Tracks whose `file_ref` appears (case-insensitively) inside the uploaded
/// name are left out first. This is a substring check, not an identity check.
pub fn select_playlist<R: Rng + ?Sized>(
    mood: Mood,
    uploaded_name: &str,
    catalog: &Catalog,
    rng: &mut R,
) -> Vec<Track> {
    let uploaded = uploaded_name.to_lowercase();

    let mut eligible: Vec<Track> = catalog
        .tracks(mood)
        .iter()
        .filter(|t| !uploaded.contains(&t.file_ref.to_lowercase()))
        .copied()
        .collect();

    eligible.shuffle(rng);
    eligible.truncate(PLAYLIST_LEN);

    log::debug!(
        "select_playlist: mood={mood} picked {:?}",
        eligible.iter().map(|t| t.name).collect::<Vec<_>>()
    );

    eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn bounded_unique_and_from_one_bucket() {
        let catalog = Catalog::builtin();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for mood in [Mood::Love, Mood::Folk] {
                let picked = select_playlist(mood, "whatever.mp3", &catalog, &mut rng);
                assert_eq!(picked.len(), PLAYLIST_LEN);

                let unique: HashSet<_> = picked.iter().map(|t| t.file_ref).collect();
                assert_eq!(unique.len(), picked.len());

                let bucket = catalog.tracks(mood);
                assert!(picked.iter().all(|t| bucket.contains(t)));
            }
        }
    }

    #[test]
    fn never_returns_the_uploaded_file() {
        let catalog = Catalog::builtin();
        let uploaded = "C:/music/SONGS/UYIREY.MP3";
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_playlist(Mood::Love, uploaded, &catalog, &mut rng);
            assert!(picked.iter().all(|t| t.file_ref != "songs/Uyirey.mp3"));
        }
    }

    #[test]
    fn plain_file_name_does_not_trigger_the_exclusion() {
        // The check is on the whole file_ref, so "Uyirey.mp3" alone stays eligible.
        const LOVE: &[Track] = &[
            Track {
                name: "Uyirey",
                file_ref: "songs/Uyirey.mp3",
            },
        ];
        let catalog = Catalog::from_buckets([(Mood::Love, LOVE)]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_playlist(Mood::Love, "Uyirey.mp3", &catalog, &mut rng).len(), 1);
    }

    #[test]
    fn short_bucket_and_fully_excluded_bucket() {
        const TWO: &[Track] = &[
            Track {
                name: "A",
                file_ref: "songs/a.mp3",
            },
            Track {
                name: "B",
                file_ref: "songs/b.mp3",
            },
        ];
        let catalog = Catalog::from_buckets([(Mood::Folk, TWO)]);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(select_playlist(Mood::Folk, "x.mp3", &catalog, &mut rng).len(), 2);
        assert_eq!(
            select_playlist(Mood::Folk, "songs/a.mp3 songs/b.mp3", &catalog, &mut rng).len(),
            0
        );
        // Mood without a bucket
        assert!(select_playlist(Mood::Love, "x.mp3", &catalog, &mut rng).is_empty());
    }

    #[test]
    fn same_seed_same_playlist() {
        let catalog = Catalog::builtin();
        let a = select_playlist(Mood::Folk, "x", &catalog, &mut StdRng::seed_from_u64(42));
        let b = select_playlist(Mood::Folk, "x", &catalog, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
