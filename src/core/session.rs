//! core/session.rs
//! Playback session: which recommended track is loaded, and is it playing.
//!
//! This is pure state. Every transition returns the `AudioAction` the caller
//! must forward to the audio engine; the session itself never touches audio.
//!
//! States:
//! - Idle: nothing loaded
//! - Paused: a track is loaded but silent
//! - Playing: the loaded track is audible
//!
//! At most one track is "active" (highlighted) at any time.

use super::types::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Paused,
    Playing,
}

/// What the audio engine has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioAction {
    /// Load this track and play it from the beginning.
    Load(Track),
    Pause,
    Resume,
}

#[derive(Debug, Default)]
pub struct PlaybackSession {
    /// The current recommendation, replaced wholesale by `reset`.
    tracks: Vec<Track>,
    /// Index into `tracks` of the loaded track.
    current: Option<usize>,
    playing: bool,
    /// Index of the highlighted track (cleared when a track ends).
    active: Option<usize>,
    /// The loaded track reached its end; resuming replays it.
    ended: bool,
}

impl PlaybackSession {
    /// A new recommendation replaces the old one: back to Idle.
    pub fn reset(&mut self, tracks: Vec<Track>) {
        *self = Self {
            tracks,
            ..Self::default()
        };
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn state(&self) -> PlaybackState {
        match (self.current, self.playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), false) => PlaybackState::Paused,
            (Some(_), true) => PlaybackState::Playing,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track(&self) -> Option<Track> {
        self.current.and_then(|i| self.tracks.get(i).copied())
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// User clicked the track at `index`.
    ///
    /// - different track: load it from the start and make it the only active one
    /// - same track, playing: pause (position kept)
    /// - same track, paused: resume (position kept), or replay if it had ended
    ///
    /// Out-of-range index -> `None`, nothing changes.
    pub fn select_track(&mut self, index: usize) -> Option<AudioAction> {
        let track = *self.tracks.get(index)?;

        if self.current != Some(index) {
            self.current = Some(index);
            self.active = Some(index);
            self.playing = true;
            self.ended = false;
            return Some(AudioAction::Load(track));
        }

        if self.playing {
            self.playing = false;
            return Some(AudioAction::Pause);
        }

        self.playing = true;
        self.active = Some(index);
        if self.ended {
            self.ended = false;
            Some(AudioAction::Load(track))
        } else {
            Some(AudioAction::Resume)
        }
    }

    /// The loaded track reached its natural end.
    ///
    /// Stays loaded (Paused), but nothing is highlighted anymore.
    pub fn track_ended(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.playing = false;
        self.active = None;
        self.ended = true;
    }

    /// The engine could not play the loaded track: drop it, keep the list.
    pub fn playback_failed(&mut self) {
        self.current = None;
        self.playing = false;
        self.active = None;
        self.ended = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Track = Track {
        name: "A",
        file_ref: "songs/a.mp3",
    };
    const B: Track = Track {
        name: "B",
        file_ref: "songs/b.mp3",
    };
    const C: Track = Track {
        name: "C",
        file_ref: "songs/c.mp3",
    };

    fn session() -> PlaybackSession {
        let mut s = PlaybackSession::default();
        s.reset(vec![A, B, C]);
        s
    }

    fn active_count(s: &PlaybackSession) -> usize {
        (0..s.tracks().len()).filter(|&i| s.is_active(i)).count()
    }

    #[test]
    fn starts_idle() {
        let s = session();
        assert_eq!(s.state(), PlaybackState::Idle);
        assert_eq!(s.current_track(), None);
        assert_eq!(active_count(&s), 0);
    }

    #[test]
    fn selecting_a_new_track_loads_from_start() {
        let mut s = session();
        assert_eq!(s.select_track(1), Some(AudioAction::Load(B)));
        assert_eq!(s.state(), PlaybackState::Playing);
        assert!(s.is_active(1));

        assert_eq!(s.select_track(2), Some(AudioAction::Load(C)));
        assert!(s.is_active(2));
        assert!(!s.is_active(1));
        assert_eq!(active_count(&s), 1);
    }

    #[test]
    fn reselecting_toggles_without_reload() {
        let mut s = session();
        s.select_track(0);
        assert_eq!(s.select_track(0), Some(AudioAction::Pause));
        assert_eq!(s.state(), PlaybackState::Paused);
        assert!(s.is_active(0));

        assert_eq!(s.select_track(0), Some(AudioAction::Resume));
        assert_eq!(s.state(), PlaybackState::Playing);
        assert_eq!(active_count(&s), 1);
    }

    #[test]
    fn switching_while_paused_loads_the_new_track() {
        let mut s = session();
        s.select_track(0);
        s.select_track(0);
        assert_eq!(s.select_track(1), Some(AudioAction::Load(B)));
        assert_eq!(s.state(), PlaybackState::Playing);
    }

    #[test]
    fn track_end_clears_markers_but_stays_loaded() {
        let mut s = session();
        s.select_track(2);
        s.track_ended();
        assert_eq!(s.state(), PlaybackState::Paused);
        assert_eq!(s.current_track(), Some(C));
        assert_eq!(active_count(&s), 0);

        // Resuming an ended track replays it.
        assert_eq!(s.select_track(2), Some(AudioAction::Load(C)));
        assert!(s.is_active(2));
        assert_eq!(s.state(), PlaybackState::Playing);
    }

    #[test]
    fn track_end_while_idle_is_ignored() {
        let mut s = session();
        s.track_ended();
        assert_eq!(s.state(), PlaybackState::Idle);
    }

    #[test]
    fn reset_forces_idle() {
        let mut s = session();
        s.select_track(1);
        s.reset(vec![C]);
        assert_eq!(s.state(), PlaybackState::Idle);
        assert_eq!(s.tracks(), &[C]);
        assert_eq!(active_count(&s), 0);
    }

    #[test]
    fn out_of_range_and_empty_list_do_nothing() {
        let mut s = session();
        assert_eq!(s.select_track(9), None);
        assert_eq!(s.state(), PlaybackState::Idle);

        s.reset(Vec::new());
        assert_eq!(s.select_track(0), None);
    }

    #[test]
    fn playback_failure_returns_to_idle() {
        let mut s = session();
        s.select_track(1);
        s.playback_failed();
        assert_eq!(s.state(), PlaybackState::Idle);
        assert_eq!(s.select_track(1), Some(AudioAction::Load(B)));
    }
}
