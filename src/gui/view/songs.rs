//! Recommended songs (click = play / pause).

use iced::Length;
use iced::widget::{Column, button, column, text};

use super::super::state::{Message, MoodBeats};
use super::constants::{ROW_TEXT, SONG_LIST_SPACING, SONG_ROW_PAD};
use crate::core::session::PlaybackState;

pub(crate) fn build_song_list(state: &MoodBeats) -> Column<'_, Message> {
    let mut col = column![].spacing(SONG_LIST_SPACING).width(Length::Fill);

    // Nothing analysed yet: no list at all.
    if state.mood.is_none() || state.analyzing {
        return col;
    }

    if state.session.tracks().is_empty() {
        return col.push(text("No tracks found").size(ROW_TEXT));
    }

    let playing = state
        .session
        .current_index()
        .filter(|_| state.session.state() == PlaybackState::Playing);

    for (i, t) in state.session.tracks().iter().enumerate() {
        let marker = if playing == Some(i) { "⏸" } else { "▶" };
        let label = text(format!("{marker} {}", t.name)).size(ROW_TEXT);

        let style = if state.session.is_active(i) {
            button::primary
        } else {
            button::secondary
        };

        col = col.push(
            button(label)
                .style(style)
                .padding(SONG_ROW_PAD)
                .width(Length::Fill)
                .on_press(Message::SelectTrack(i)),
        );
    }

    col
}
