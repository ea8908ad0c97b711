use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::input::TextInput;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.expire_status(Instant::now());
            vec![]
        }
        AppEvent::InputClosed => vec![Action::Quit],
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Confirmation dialog captures all input while open
    if let Some(prompt) = state.prompt {
        return handle_prompt_key(state, prompt, key);
    }

    match key.code {
        KeyCode::F(1) => {
            state.switch_screen(Screen::Packing);
            return vec![];
        }
        KeyCode::F(2) => {
            state.switch_screen(Screen::Split);
            return vec![];
        }
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        _ => {}
    }

    match state.screen {
        Screen::Packing => match state.packing_view.focus {
            PackingFocus::Form => handle_item_form_key(state, key),
            PackingFocus::List => handle_item_list_key(state, key),
        },
        Screen::Split => match state.split_view.focus {
            SplitFocus::Friends => handle_friends_key(state, key),
            SplitFocus::AddFriend => handle_add_friend_key(state, key),
            SplitFocus::BillForm => handle_bill_form_key(state, key),
        },
    }
}

fn handle_prompt_key(state: &mut AppState, prompt: Prompt, key: KeyEvent) -> Vec<Action> {
    let answer = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
        _ => return vec![],
    };
    state.prompt = None;
    match prompt {
        Prompt::ClearList => vec![Action::ClearList { confirmed: answer }],
    }
}

/// Shared line-editing keys. Returns `false` when the key is not an edit.
fn edit_text(input: &mut TextInput, key: KeyEvent, accept: impl Fn(char) -> bool) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => input.delete_word_back(),
        KeyCode::Char('a') if ctrl => input.move_home(),
        KeyCode::Char('e') if ctrl => input.move_end(),
        KeyCode::Char(c) if !ctrl && accept(c) => input.insert_char(c),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

fn handle_item_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => match state.draft_item() {
            Some(item) => vec![Action::AddItem(item)],
            None => vec![],
        },
        KeyCode::Up => {
            state.packing_view.increase_quantity();
            vec![]
        }
        KeyCode::Down => {
            state.packing_view.decrease_quantity();
            vec![]
        }
        KeyCode::Esc => {
            state.packing_view.reset_form();
            vec![]
        }
        _ => {
            edit_text(&mut state.packing_view.description, key, |_| true);
            vec![]
        }
    }
}

fn handle_item_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let len = state.packing.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.packing_view.cursor = state.packing_view.cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.packing_view.cursor + 1 < len {
                state.packing_view.cursor += 1;
            }
            vec![]
        }
        KeyCode::Home => {
            state.packing_view.cursor = 0;
            vec![]
        }
        KeyCode::End => {
            state.packing_view.cursor = len.saturating_sub(1);
            vec![]
        }
        KeyCode::Char(' ') | KeyCode::Enter => match state.item_under_cursor() {
            Some(id) => vec![Action::ToggleItem(id)],
            None => vec![],
        },
        KeyCode::Char('d') | KeyCode::Delete => match state.item_under_cursor() {
            Some(id) => vec![Action::DeleteItem(id)],
            None => vec![],
        },
        KeyCode::Char('s') => {
            // Keep the cursor on the same item after re-sorting
            let current = state.item_under_cursor();
            state.packing_view.sort = state.packing_view.sort.next();
            if let Some(id) = current {
                if let Some(pos) = state.visible_item_ids().iter().position(|x| *x == id) {
                    state.packing_view.cursor = pos;
                }
            }
            let label = state.packing_view.sort.label();
            state.flash(format!("Sorted by {}", label));
            vec![]
        }
        KeyCode::Char('c') => {
            if state.packing.is_empty() {
                return vec![];
            }
            if state.config.packing.confirm_clear {
                state.prompt = Some(Prompt::ClearList);
                vec![]
            } else {
                vec![Action::ClearList { confirmed: true }]
            }
        }
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_friends_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let len = state.ledger.friends().len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.split_view.cursor = state.split_view.cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.split_view.cursor + 1 < len {
                state.split_view.cursor += 1;
            }
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => match state.friend_under_cursor() {
            // Activating the selected friend is the "Close" button
            Some(id) if state.ledger.is_selected(id) => vec![Action::CloseSelection],
            Some(id) => vec![Action::SelectFriend(id)],
            None => vec![],
        },
        KeyCode::Char('a') => {
            state.split_view.add_form.open = true;
            state.split_view.focus = SplitFocus::AddFriend;
            vec![]
        }
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_add_friend_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let form = &mut state.split_view.add_form;
    match key.code {
        KeyCode::Esc => {
            form.open = false;
            form.reset();
            state.split_view.focus = SplitFocus::Friends;
            vec![]
        }
        KeyCode::Up | KeyCode::Down => {
            form.switch_field();
            vec![]
        }
        KeyCode::Enter => {
            let name = form.name.as_str().trim();
            if name.is_empty() {
                return vec![];
            }
            vec![Action::AddFriend {
                name: name.to_string(),
                avatar_url: form.avatar_url.as_str().trim().to_string(),
            }]
        }
        _ => {
            edit_text(form.active_input(), key, |_| true);
            vec![]
        }
    }
}

fn handle_bill_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if state.ledger.selected_id().is_none() {
        state.split_view.focus = SplitFocus::Friends;
        return vec![];
    }
    let form = &mut state.split_view.bill_form;
    match key.code {
        KeyCode::Esc => {
            state.split_view.focus = SplitFocus::Friends;
            vec![]
        }
        KeyCode::Up => {
            form.prev_field();
            vec![]
        }
        KeyCode::Down => {
            form.next_field();
            vec![]
        }
        KeyCode::Enter => vec![Action::SplitBill(form.draft())],
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if form.field == BillField::Payer => {
            form.payer = form.payer.toggled();
            vec![]
        }
        _ => {
            if let Some(input) = form.active_amount() {
                edit_text(input, key, is_amount_char);
            }
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::ids::SequentialIds;
    use crate::split::bill::Payer;

    fn state() -> AppState {
        AppState::with_ids(AppConfig::default(), Box::new(SequentialIds::default()))
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut state = state();
        state.prompt = Some(Prompt::ClearList);
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let actions = handle_event(&mut state, AppEvent::Terminal(CEvent::Key(key)));
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_closed_input_quits() {
        let mut state = state();
        let actions = handle_event(&mut state, AppEvent::InputClosed);
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_item_form_builds_add_action() {
        let mut state = state();
        type_text(&mut state, "Socks");
        press(&mut state, KeyCode::Up);
        press(&mut state, KeyCode::Up);
        let actions = press(&mut state, KeyCode::Enter);
        match actions.as_slice() {
            [Action::AddItem(item)] => {
                assert_eq!(item.description, "Socks");
                assert_eq!(item.quantity, 3);
                assert!(!item.packed);
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_empty_description_is_ignored() {
        let mut state = state();
        type_text(&mut state, "   ");
        assert!(press(&mut state, KeyCode::Enter).is_empty());
    }

    #[test]
    fn test_clear_asks_for_confirmation_first() {
        let mut state = state();
        state.packing.add_item(crate::packing::item::Item::new(1, "Hat", 1));
        state.packing_view.focus = PackingFocus::List;

        assert!(press(&mut state, KeyCode::Char('c')).is_empty());
        assert_eq!(state.prompt, Some(Prompt::ClearList));

        // Unrelated keys are swallowed by the dialog
        assert!(press(&mut state, KeyCode::Char('d')).is_empty());
        assert_eq!(state.prompt, Some(Prompt::ClearList));

        let actions = press(&mut state, KeyCode::Char('n'));
        assert_eq!(actions, vec![Action::ClearList { confirmed: false }]);
        assert_eq!(state.prompt, None);
    }

    #[test]
    fn test_clear_without_confirmation_when_disabled() {
        let mut state = state();
        state.config.packing.confirm_clear = false;
        state.packing.add_item(crate::packing::item::Item::new(1, "Hat", 1));
        state.packing_view.focus = PackingFocus::List;
        let actions = press(&mut state, KeyCode::Char('c'));
        assert_eq!(actions, vec![Action::ClearList { confirmed: true }]);
    }

    #[test]
    fn test_list_keys_target_item_under_cursor() {
        let mut state = state();
        state.packing.add_item(crate::packing::item::Item::new(10, "b", 1));
        state.packing.add_item(crate::packing::item::Item::new(11, "a", 1));
        state.packing_view.focus = PackingFocus::List;

        press(&mut state, KeyCode::Down);
        assert_eq!(press(&mut state, KeyCode::Char(' ')), vec![Action::ToggleItem(11)]);

        // Sorting by description keeps the cursor on item 11
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.packing_view.cursor, 0);
        assert_eq!(press(&mut state, KeyCode::Char('d')), vec![Action::DeleteItem(11)]);
    }

    #[test]
    fn test_enter_on_selected_friend_closes() {
        let mut state = state();
        state.screen = Screen::Split;
        assert_eq!(press(&mut state, KeyCode::Enter), vec![Action::CloseSelection]);
        press(&mut state, KeyCode::Down);
        assert_eq!(press(&mut state, KeyCode::Enter), vec![Action::SelectFriend(933372)]);
    }

    #[test]
    fn test_add_friend_form() {
        let mut state = state();
        state.screen = Screen::Split;
        press(&mut state, KeyCode::Char('a'));
        assert_eq!(state.split_view.focus, SplitFocus::AddFriend);
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        type_text(&mut state, "Dana");
        let actions = press(&mut state, KeyCode::Enter);
        assert_eq!(
            actions,
            vec![Action::AddFriend {
                name: "Dana".into(),
                avatar_url: "https://i.pravatar.cc/48".into(),
            }]
        );
    }

    #[test]
    fn test_bill_form_accepts_only_amount_characters() {
        let mut state = state();
        state.screen = Screen::Split;
        state.split_view.focus = SplitFocus::BillForm;
        type_text(&mut state, "1x00");
        press(&mut state, KeyCode::Down);
        type_text(&mut state, "40");
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Right);

        let actions = press(&mut state, KeyCode::Enter);
        let [Action::SplitBill(draft)] = actions.as_slice() else {
            panic!("expected a split action, got {:?}", actions);
        };
        assert_eq!(draft.bill, Some(100.0));
        assert_eq!(draft.your_expense, Some(40.0));
        assert_eq!(draft.payer, Payer::Friend);
    }

    #[test]
    fn test_function_keys_switch_screens() {
        let mut state = state();
        press(&mut state, KeyCode::F(2));
        assert_eq!(state.screen, Screen::Split);
        press(&mut state, KeyCode::F(1));
        assert_eq!(state.screen, Screen::Packing);
    }
}
