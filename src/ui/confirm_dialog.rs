use crate::app::state::{AppState, Prompt};
use crate::packing::list::CLEAR_LIST_PROMPT;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use crate::ui::key_hints;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(prompt) = state.prompt else {
        return;
    };
    let message = match prompt {
        Prompt::ClearList => CLEAR_LIST_PROMPT,
    };

    let popup_area = centered(frame.area(), 50, 6);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(Theme::title())
        .title_bottom(key_hints(&[("y", "Yes"), ("n", "No")]))
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Style::default().fg(Theme::ACCENT_AMBER))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let paragraph = Paragraph::new(Span::styled(message, Theme::input_text()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, popup_area);
}
