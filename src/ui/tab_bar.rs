use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const TABS: [(Screen, &str, &str); 2] = [
    (Screen::Packing, "F1", "🌴 Far Away"),
    (Screen::Split, "F2", "🍕 Eat-'N-Split"),
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans: Vec<Span> = Vec::new();
    for (screen, key, title) in TABS {
        let style = if state.screen == screen {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::styled(format!(" {} {} ", key, title), style));
        spans.push(Span::raw(" "));
    }
    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Theme::BG_DARK));
    frame.render_widget(paragraph, area);
}
