use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Focus indicator
    let focus_name = match state.screen {
        Screen::Packing => match state.packing_view.focus {
            PackingFocus::Form => "ADD ITEM",
            PackingFocus::List => "LIST",
        },
        Screen::Split => match state.split_view.focus {
            SplitFocus::Friends => "FRIENDS",
            SplitFocus::AddFriend => "ADD FRIEND",
            SplitFocus::BillForm => "SPLIT",
        },
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
