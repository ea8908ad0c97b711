mod add_friend_form;
mod confirm_dialog;
mod friend_list;
mod input_box;
mod layout;
mod packing_view;
mod split_view;
mod status_bar;
mod tab_bar;
mod theme;

use crate::app::state::{AppState, Screen};
use ratatui::prelude::*;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    tab_bar::render(frame, app_layout.tab_bar, state);
    match state.screen {
        Screen::Packing => packing_view::render(frame, app_layout.content, state),
        Screen::Split => split_view::render(frame, app_layout.content, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);

    // Overlays
    confirm_dialog::render(frame, state);
}

/// `key Label` pairs for panel footers.
fn key_hints(pairs: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, label) in pairs {
        spans.push(Span::styled(format!(" {}", key), Theme::key_hint()));
        spans.push(Span::styled(format!(" {} ", label), Theme::label()));
    }
    Line::from(spans)
}
