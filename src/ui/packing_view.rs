use crate::app::state::*;
use crate::packing::stats::Stats;
use crate::ui::layout::packing_layout;
use crate::ui::theme::{panel_styles, Theme};
use crate::ui::{input_box, key_hints};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let layout = packing_layout(area);

    let header = Paragraph::new(Line::from(Span::styled(
        "🌴 Far Away 💼",
        Style::default()
            .fg(Theme::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, layout.header);

    render_form(frame, layout.form, state);
    render_list(frame, layout.list, state);
    render_stats(frame, layout.stats, state);
}

fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let view = &state.packing_view;
    let focused = view.focus == PackingFocus::Form;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(10)])
        .split(area);

    let (border_style, border_type, bg) = panel_styles(focused);
    let quantity = Paragraph::new(Line::from(vec![
        Span::styled("▲▼ ", Theme::hint()),
        Span::styled(view.quantity.to_string(), Theme::input_text()),
    ]))
    .block(
        Block::default()
            .title(" Qty ")
            .title_style(if focused { Theme::title() } else { Theme::border() })
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .style(bg),
    );
    frame.render_widget(quantity, chunks[0]);

    input_box::render(
        frame,
        chunks[1],
        "What do you need for your 😍 trip?",
        &view.description,
        focused,
    );
}

fn render_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let view = &state.packing_view;
    let focused = view.focus == PackingFocus::List;
    let (border_style, border_type, bg) = panel_styles(focused);

    let block = Block::default()
        .title(format!(" Packing list ({}) ", view.sort.label()))
        .title_style(Theme::title())
        .title_bottom(key_hints(&[
            ("Space", "Pack"),
            ("d", "Delete"),
            ("s", "Sort"),
            ("c", "Clear"),
        ]))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    let items: Vec<ListItem> = view
        .sort
        .apply(state.packing.items())
        .into_iter()
        .map(|item| {
            let (check, style) = if item.packed {
                ("[x] ", Theme::item_packed())
            } else {
                ("[ ] ", Theme::item_unpacked())
            };
            ListItem::new(Line::from(vec![
                Span::styled(check, Style::default().fg(Theme::ACCENT_TEAL)),
                Span::styled(item.label(), style),
            ]))
        })
        .collect();

    if items.is_empty() {
        let empty = Paragraph::new(Span::styled(" Nothing on the list yet", Theme::hint())).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(view.cursor));
    }
    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::row_selected());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
    let stats = Stats::from_items(state.packing.items());
    let paragraph = Paragraph::new(Span::styled(
        stats.message(),
        Style::default()
            .fg(Theme::ACCENT_AMBER)
            .add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Theme::border()),
    );
    frame.render_widget(paragraph, area);
}
