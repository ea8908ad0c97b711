use crate::app::state::*;
use crate::ui::theme::Theme;
use crate::ui::{input_box, key_hints};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.split_view.add_form;

    if !form.open {
        let closed = Paragraph::new(key_hints(&[("a", "Add friend")])).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(Theme::border_type())
                .border_style(Theme::border())
                .style(Theme::panel_bg()),
        );
        frame.render_widget(closed, area);
        return;
    }

    let focused = state.split_view.focus == SplitFocus::AddFriend;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    input_box::render(
        frame,
        chunks[0],
        "👫 Friend name",
        &form.name,
        focused && form.field == AddFriendField::Name,
    );
    input_box::render(
        frame,
        chunks[1],
        "🌄 Image URL",
        &form.avatar_url,
        focused && form.field == AddFriendField::AvatarUrl,
    );
    frame.render_widget(
        Paragraph::new(key_hints(&[("Enter", "Add"), ("Esc", "Close")])),
        chunks[2],
    );
}
