//! View constants (layout/sizing).

pub(crate) const PLAYER_W: f32 = 720.0;

pub(crate) const TITLE_TEXT: f32 = 32.0;
pub(crate) const MOOD_TEXT: f32 = 26.0;
pub(crate) const ROW_TEXT: f32 = 16.0;
pub(crate) const STATUS_TEXT: f32 = 13.0;

pub(crate) const UPLOAD_H: f32 = 90.0;
pub(crate) const SONG_LIST_SPACING: f32 = 6.0;
pub(crate) const SONG_ROW_PAD: f32 = 10.0;

pub(crate) const VOLUME_W: f32 = 180.0;
