//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('MoodBeats')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (frame ticks, polling playback events)
//! - the visualizer canvas

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod view;
pub(crate) mod visualizer;

// Re-export the entry points main.rs needs.
pub(crate) use state::MoodBeats;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
