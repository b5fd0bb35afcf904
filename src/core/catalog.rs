//! core/catalog.rs
//! The static, read-only track catalog grouped by mood.
//!
//! Bucket order and track order inside each bucket are significant:
//! mood classification walks them in this order and the first hit wins.

use super::types::{Mood, Track};

const LOVE: &[Track] = &[
    Track {
        name: "Aasai Oar Pulveli",
        file_ref: "songs/Aasai-Oar-Pulveli.mp3",
    },
    Track {
        name: "Enna Sugam",
        file_ref: "songs/Enna Sugam.mp3",
    },
    Track {
        name: "Kadhal Aasai",
        file_ref: "songs/Kadhal-Aasai.mp3",
    },
    Track {
        name: "Uyirey",
        file_ref: "songs/Uyirey.mp3",
    },
    Track {
        name: "Nenjam Ellam Kadhal",
        file_ref: "songs/Nenjam-Ellam-Kadhal.mp3",
    },
    Track {
        name: "Mugai Mazhai",
        file_ref: "songs/Mugai Mazhai.mp3",
    },
];

const FOLK: &[Track] = &[
    Track {
        name: "Thalapathy Kacheri",
        file_ref: "songs/Thalapathy Kacheri.mp3",
    },
    Track {
        name: "Jalabulajangu",
        file_ref: "songs/Jalabulajangu-MassTamilan.dev.mp3",
    },
    Track {
        name: "Chumma Kizhi",
        file_ref: "songs/Chumma-Kizhi-MassTamilan.io.mp3",
    },
    Track {
        name: "Coolie Disco",
        file_ref: "songs/Coolie Disco.mp3",
    },
    Track {
        name: "Chikitu",
        file_ref: "songs/Chikitu.mp3",
    },
];

/// Mood buckets in traversal order.
#[derive(Debug, Clone)]
pub struct Catalog {
    buckets: Vec<(Mood, &'static [Track])>,
}

impl Catalog {
    /// The catalog the app ships with.
    pub fn builtin() -> Self {
        Self {
            buckets: vec![(Mood::Love, LOVE), (Mood::Folk, FOLK)],
        }
    }

    /// Build a catalog from explicit buckets.
    ///
    /// A mood listed twice keeps only its first bucket, so every track
    /// belongs to exactly one mood.
    #[cfg(test)]
    pub fn from_buckets(buckets: impl IntoIterator<Item = (Mood, &'static [Track])>) -> Self {
        let mut out: Vec<(Mood, &'static [Track])> = Vec::new();
        for (mood, tracks) in buckets {
            if out.iter().any(|(m, _)| *m == mood) {
                log::warn!("Catalog: duplicate bucket for {mood}, ignoring");
                continue;
            }
            out.push((mood, tracks));
        }
        Self { buckets: out }
    }

    /// Tracks for `mood`, in catalog order. Unknown mood -> empty.
    pub fn tracks(&self, mood: Mood) -> &'static [Track] {
        self.buckets
            .iter()
            .find(|(m, _)| *m == mood)
            .map(|(_, tracks)| *tracks)
            .unwrap_or(&[])
    }

    /// Walk (mood, tracks) in traversal order.
    pub fn buckets(&self) -> impl Iterator<Item = (Mood, &'static [Track])> + '_ {
        self.buckets.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_has_love_then_folk() {
        let moods: Vec<Mood> = Catalog::builtin().buckets().map(|(m, _)| m).collect();
        assert_eq!(moods, vec![Mood::Love, Mood::Folk]);
    }

    #[test]
    fn every_track_is_in_exactly_one_bucket() {
        let catalog = Catalog::builtin();
        let mut seen = HashSet::new();
        for (_, tracks) in catalog.buckets() {
            assert!(!tracks.is_empty());
            for t in tracks {
                assert!(seen.insert(t.file_ref), "duplicate {}", t.file_ref);
            }
        }
        assert_eq!(seen.len(), 11);
    }

    #[test]
    fn duplicate_bucket_keeps_first() {
        let catalog = Catalog::from_buckets([(Mood::Folk, FOLK), (Mood::Folk, LOVE)]);
        assert_eq!(catalog.tracks(Mood::Folk), FOLK);
        assert!(catalog.tracks(Mood::Love).is_empty());
    }
}
