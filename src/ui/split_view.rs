use crate::app::dispatch::friend_expense_text;
use crate::app::state::*;
use crate::split::bill::Payer;
use crate::ui::layout::split_layout;
use crate::ui::theme::{panel_styles, Theme};
use crate::ui::{add_friend_form, friend_list, input_box, key_hints};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let layout = split_layout(area, state.split_view.add_form.open);
    friend_list::render(frame, layout.friends, state);
    add_friend_form::render(frame, layout.add_friend, state);
    render_bill_form(frame, layout.bill_form, state);
}

fn render_bill_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.split_view.focus == SplitFocus::BillForm;
    let (border_style, border_type, bg) = panel_styles(focused);

    let Some(friend) = state.ledger.selected_friend() else {
        let placeholder = Paragraph::new(Span::styled(
            " Select a friend to split a bill",
            Theme::hint(),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style)
                .style(bg),
        );
        frame.render_widget(placeholder, area);
        return;
    };

    let block = Block::default()
        .title(format!(" Split a bill with {} ", friend.name))
        .title_style(Theme::title())
        .title_bottom(key_hints(&[("Enter", "Split bill"), ("Esc", "Back")]))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &state.split_view.bill_form;
    input_box::render(
        frame,
        chunks[0],
        "💰 Bill value",
        &form.bill,
        focused && form.field == BillField::Bill,
    );
    input_box::render(
        frame,
        chunks[1],
        "🧍 Your expense",
        &form.your_expense,
        focused && form.field == BillField::YourExpense,
    );
    input_box::render_readonly(
        frame,
        chunks[2],
        &format!("👫 {}'s expense", friend.name),
        &friend_expense_text(state),
    );
    render_payer(
        frame,
        chunks[3],
        form.payer,
        &friend.name,
        focused && form.field == BillField::Payer,
    );
}

fn render_payer(frame: &mut Frame, area: Rect, payer: Payer, friend_name: &str, focused: bool) {
    let (border_style, border_type, bg) = panel_styles(focused);
    let option = |candidate: Payer| {
        let label = format!(" {} ", candidate.label(friend_name));
        if candidate == payer {
            Span::styled(label, Theme::row_selected())
        } else {
            Span::styled(label, Theme::label())
        }
    };

    let line = Line::from(vec![
        Span::styled("◀ ", Theme::hint()),
        option(Payer::You),
        Span::raw(" "),
        option(Payer::Friend),
        Span::styled(" ▶", Theme::hint()),
    ]);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" 🤑 Who is paying the bill? ")
            .title_style(if focused { Theme::title() } else { Theme::border() })
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .style(bg),
    );
    frame.render_widget(paragraph, area);
}
