//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod songs;
mod widgets;

use iced::widget::{canvas, column, container, text};
use iced::{Alignment, Element, Length};

use super::state::{Message, MoodBeats};
use super::visualizer::{VISUALIZER_H, Visualizer};
use constants::{PLAYER_W, STATUS_TEXT, TITLE_TEXT};

pub(crate) fn view(state: &MoodBeats) -> Element<'_, Message> {
    let visualizer = canvas(Visualizer {
        bars: &state.bars,
        particles: &state.particles,
    })
    .width(Length::Fill)
    .height(Length::Fixed(VISUALIZER_H));

    let player = column![
        text("MoodBeats").size(TITLE_TEXT),
        widgets::upload_box(state),
        widgets::mood_line(state),
        songs::build_song_list(state),
        widgets::controls(state),
        text(&state.status).size(STATUS_TEXT),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .width(Length::Fixed(PLAYER_W));

    let page = column![container(player).center_x(Length::Fill), visualizer]
        .spacing(16)
        .height(Length::Fill);

    container(page).padding(16).into()
}
