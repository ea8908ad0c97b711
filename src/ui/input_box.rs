use crate::app::input::TextInput;
use crate::ui::theme::{panel_styles, Theme};
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// A bordered single-line text field titled `label`. The terminal cursor is
/// placed in the field while it has focus.
pub fn render(frame: &mut Frame, area: Rect, label: &str, input: &TextInput, focused: bool) {
    let (border_style, border_type, bg) = panel_styles(focused);

    let block = Block::default()
        .title(format!(" {} ", label))
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(bg);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if focused {
        let line = Line::from(vec![
            Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
            Span::styled(input.as_str(), Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        if inner.width > 0 && inner.height > 0 {
            // Prompt chevron "❯ " is 2 columns
            let prompt_offset = 2u16;
            let cursor_x = inner.x + prompt_offset + input.cursor_column() as u16;
            frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
        }
    } else {
        let paragraph = Paragraph::new(input.as_str()).style(Theme::input_text());
        frame.render_widget(paragraph, inner);
    }
}

/// A read-only field that looks like an input box.
pub fn render_readonly(frame: &mut Frame, area: Rect, label: &str, value: &str) {
    let block = Block::default()
        .title(format!(" {} ", label))
        .title_style(Theme::border())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1))
        .style(Theme::panel_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(value).style(Theme::hint()), inner);
}
