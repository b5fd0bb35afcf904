//! Small widgets used by the main view.

use iced::widget::{Row, button, column, container, row, slider, text};
use iced::{Alignment, Element, Length};

use super::super::state::{Message, MoodBeats};
use super::constants::{MOOD_TEXT, UPLOAD_H, VOLUME_W};

/// Big clickable upload area.
pub(crate) fn upload_box(state: &MoodBeats) -> Element<'_, Message> {
    let label = text("🎵 Click to upload a song").size(18);
    let btn = button(container(label).center(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fixed(UPLOAD_H));

    if state.analyzing {
        btn.into()
    } else {
        btn.on_press(Message::UploadPressed).into()
    }
}

/// "Analyzing…" while decoding, then the mood label.
pub(crate) fn mood_line(state: &MoodBeats) -> Element<'_, Message> {
    if state.analyzing {
        return text("Analyzing…").size(MOOD_TEXT).into();
    }

    match (state.mood, &state.upload) {
        (Some(mood), Some(upload)) => column![
            text(mood.display()).size(MOOD_TEXT),
            text(format!("from {}", upload.raw_name)).size(12),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .into(),
        _ => text("").size(MOOD_TEXT).into(),
    }
}

/// Volume slider + "Download playlist".
pub(crate) fn controls(state: &MoodBeats) -> Row<'_, Message> {
    let vol = state.volume.clamp(0.0, 1.0);
    let vol_slider = slider(0.0..=1.0, vol, Message::SetVolume)
        .step(0.01)
        .width(Length::Fixed(VOLUME_W));

    let label = if state.exporting {
        "Exporting…"
    } else {
        "⬇ Download playlist"
    };
    let download = if state.exporting || state.session.tracks().is_empty() {
        button(label)
    } else {
        button(label).on_press(Message::ExportPressed)
    };

    row![
        row![text("Vol").size(12), vol_slider]
            .spacing(8)
            .align_y(Alignment::Center),
        download,
    ]
    .spacing(24)
    .align_y(Alignment::Center)
}
