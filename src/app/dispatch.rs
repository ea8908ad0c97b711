//! Applies actions to the owned state. This is the only place the packing
//! list and the friend ledger change.

use crate::app::action::Action;
use crate::app::state::*;
use crate::split::friend::format_amount;
use tracing::debug;

pub fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::AddItem(item) => {
            let label = item.label();
            state.packing.add_item(item);
            state.packing_view.reset_form();
            state.flash(format!("Added {}", label));
        }
        Action::DeleteItem(id) => {
            if state.packing.delete_item(id) {
                let len = state.packing.len();
                state.packing_view.clamp_cursor(len);
            }
        }
        Action::ToggleItem(id) => {
            state.packing.toggle_item(id);
        }
        Action::ClearList { confirmed } => {
            if state.packing.clear_list(&mut |_: &str| confirmed) {
                state.packing_view.cursor = 0;
                state.flash("Packing list cleared");
            }
        }
        Action::AddFriend { name, avatar_url } => {
            let id = state
                .ledger
                .add_friend(&name, &avatar_url, state.ids.as_mut());
            let form = &mut state.split_view.add_form;
            form.reset();
            form.open = false;
            state.split_view.focus = SplitFocus::Friends;
            if let Some(pos) = state.ledger.friends().iter().position(|f| f.id == id) {
                state.split_view.cursor = pos;
            }
            state.flash(format!("Added {}", name));
        }
        Action::SelectFriend(id) => {
            if state.ledger.select_friend(id) {
                state.split_view.bill_form.reset();
                state.split_view.focus = SplitFocus::BillForm;
            }
        }
        Action::CloseSelection => {
            state.ledger.close_selection();
            state.split_view.bill_form.reset();
            state.split_view.focus = SplitFocus::Friends;
        }
        Action::SplitBill(draft) => match state.ledger.split_bill(&draft) {
            Ok(_) => {
                state.split_view.bill_form.reset();
                let currency = state.config.split.currency.clone();
                if let Some(friend) = state.ledger.selected_friend() {
                    let text = friend.describe_balance(&currency);
                    state.flash(text);
                }
            }
            Err(rejected) => debug!(%rejected, "bill split not applied"),
        },
        Action::Quit => {
            state.should_quit = true;
        }
    }
    state.dirty = true;
}

/// Friend's share as shown in the read-only field of the split form.
pub fn friend_expense_text(state: &AppState) -> String {
    state
        .split_view
        .bill_form
        .draft()
        .friend_expense()
        .map(format_amount)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::ids::SequentialIds;
    use crate::packing::item::Item;
    use crate::split::bill::{BillDraft, Payer};

    const CLARK: u64 = 118836;

    fn state() -> AppState {
        AppState::with_ids(AppConfig::default(), Box::new(SequentialIds::default()))
    }

    fn with_three_items() -> AppState {
        let mut state = state();
        for (id, name) in [(1, "Passports"), (2, "Socks"), (3, "Charger")] {
            apply_action(&mut state, Action::AddItem(Item::new(id, name, 1)));
        }
        state
    }

    fn draft(bill: Option<f64>, yours: Option<f64>, payer: Payer) -> BillDraft {
        BillDraft {
            bill,
            your_expense: yours,
            payer,
        }
    }

    #[test]
    fn test_clear_declined_then_confirmed() {
        let mut state = with_three_items();
        apply_action(&mut state, Action::ClearList { confirmed: false });
        assert_eq!(state.packing.len(), 3);
        apply_action(&mut state, Action::ClearList { confirmed: true });
        assert_eq!(state.packing.len(), 0);
    }

    #[test]
    fn test_add_item_resets_form() {
        let mut state = state();
        state.packing_view.description.set_text("Hat");
        state.packing_view.quantity = 2;
        apply_action(&mut state, Action::AddItem(Item::new(5, "Hat", 2)));
        assert_eq!(state.packing_view.description.as_str(), "");
        assert_eq!(state.packing_view.quantity, 1);
        assert_eq!(state.status_line(), "Added 2 Hat");
    }

    #[test]
    fn test_delete_last_row_moves_cursor_up() {
        let mut state = with_three_items();
        state.packing_view.cursor = 2;
        apply_action(&mut state, Action::DeleteItem(3));
        assert_eq!(state.packing_view.cursor, 1);
        apply_action(&mut state, Action::DeleteItem(99));
        assert_eq!(state.packing.len(), 2);
    }

    #[test]
    fn test_split_scenarios_for_clark() {
        let mut state = state();
        apply_action(&mut state, Action::SelectFriend(CLARK));
        apply_action(&mut state, Action::SplitBill(draft(Some(100.0), Some(40.0), Payer::You)));
        assert_eq!(state.ledger.get(CLARK).unwrap().balance, -67.0);
        assert_eq!(state.status_line(), "You owe Clark 67€");

        let mut other = self::state();
        apply_action(&mut other, Action::SelectFriend(CLARK));
        apply_action(&mut other, Action::SplitBill(draft(Some(100.0), Some(40.0), Payer::Friend)));
        assert_eq!(other.ledger.get(CLARK).unwrap().balance, 53.0);
        assert_eq!(other.ledger.selected_id(), Some(CLARK));
    }

    #[test]
    fn test_rejected_split_keeps_form_values() {
        let mut state = state();
        state.split_view.bill_form.bill.set_text("100");
        let before = state.ledger.clone();
        apply_action(&mut state, Action::SplitBill(draft(Some(100.0), None, Payer::You)));
        assert_eq!(state.ledger, before);
        assert_eq!(state.split_view.bill_form.bill.as_str(), "100");
    }

    #[test]
    fn test_successful_split_resets_form() {
        let mut state = state();
        let form = &mut state.split_view.bill_form;
        form.bill.set_text("30");
        form.your_expense.set_text("10");
        form.payer = Payer::Friend;
        assert_eq!(friend_expense_text(&state), "20");
        let draft = state.split_view.bill_form.draft();
        apply_action(&mut state, Action::SplitBill(draft));
        assert_eq!(state.split_view.bill_form.payer, Payer::You);
        assert_eq!(state.split_view.bill_form.bill.as_str(), "");
        assert_eq!(friend_expense_text(&state), "");
    }

    #[test]
    fn test_selection_change_resets_form_and_close_clears() {
        let mut state = state();
        state.split_view.bill_form.bill.set_text("50");
        apply_action(&mut state, Action::SelectFriend(933372));
        assert_eq!(state.split_view.bill_form.bill.as_str(), "");
        assert_eq!(state.split_view.focus, SplitFocus::BillForm);

        apply_action(&mut state, Action::CloseSelection);
        assert_eq!(state.ledger.selected_id(), None);
        assert_eq!(state.split_view.focus, SplitFocus::Friends);

        apply_action(&mut state, Action::SelectFriend(42));
        assert_eq!(state.ledger.selected_id(), None);
    }

    #[test]
    fn test_add_friend_keeps_selection() {
        let mut state = state();
        state.split_view.add_form.open = true;
        apply_action(
            &mut state,
            Action::AddFriend {
                name: "Dana".into(),
                avatar_url: "https://i.pravatar.cc/48".into(),
            },
        );
        let dana = state.ledger.friends().last().unwrap();
        assert_eq!(dana.name, "Dana");
        assert_eq!(dana.balance, 0.0);
        assert_eq!(state.ledger.selected_id(), Some(CLARK));
        assert!(!state.split_view.add_form.open);
        assert_eq!(state.split_view.cursor, 3);
    }
}
