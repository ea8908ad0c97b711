use crate::app::state::*;
use crate::split::friend::Standing;
use crate::ui::key_hints;
use crate::ui::theme::{panel_styles, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.split_view.focus == SplitFocus::Friends;
    let (border_style, border_type, bg) = panel_styles(focused);
    let currency = &state.config.split.currency;

    let block = Block::default()
        .title(format!(" Friends ({}) ", state.ledger.friends().len()))
        .title_style(Theme::title())
        .title_bottom(key_hints(&[("Enter", "Select/Close"), ("a", "Add")]))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    let items: Vec<ListItem> = state
        .ledger
        .friends()
        .iter()
        .map(|friend| {
            let selected = state.ledger.is_selected(friend.id);
            let marker = if selected { "● " } else { "  " };
            let name_style = if selected {
                Style::default()
                    .fg(Theme::ACCENT_AMBER)
                    .add_modifier(Modifier::BOLD)
            } else {
                Theme::item_unpacked()
            };
            let balance_style = match friend.standing() {
                Standing::YouOwe => Theme::you_owe(),
                Standing::OwesYou => Theme::owes_you(),
                Standing::Even => Theme::even(),
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Theme::ACCENT_AMBER)),
                    Span::styled(friend.name.clone(), name_style),
                ]),
                Line::from(Span::styled(
                    format!("  {}", friend.describe_balance(currency)),
                    balance_style,
                )),
            ])
        })
        .collect();

    if items.is_empty() {
        let empty = Paragraph::new(Span::styled(" No friends yet. Press a to add one.", Theme::hint()))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.split_view.cursor));
    }
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Theme::BG_ELEVATED))
        .highlight_symbol("▌");
    frame.render_stateful_widget(list, area, &mut list_state);
}
