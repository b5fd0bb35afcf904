//! gui/subscription.rs
//! Frame ticks for the visualizer, plus playback event polling once the
//! engine exists.

use iced::{Subscription, time};
use std::time::Duration;

use super::state::{Message, MoodBeats};

/// ~60 Hz; the visualizer runs whether or not anything plays.
const FRAME_MS: u64 = 16;
const PLAYBACK_POLL_MS: u64 = 200;

pub(crate) fn subscription(state: &MoodBeats) -> Subscription<Message> {
    let frames = time::every(Duration::from_millis(FRAME_MS)).map(|_| Message::Frame);

    if state.playback_events.is_none() {
        return frames;
    }

    let playback =
        time::every(Duration::from_millis(PLAYBACK_POLL_MS)).map(|_| Message::TickPlayback);
    Subscription::batch([frames, playback])
}
