//! Friends, their balances and the current selection.
//!
//! The selection always points at a friend present in the list; friends are
//! never removed, so once valid it stays valid.

use super::bill::{settle, BillDraft};
use super::friend::{avatar_for, Friend, FriendId};
use crate::ids::{allocate_id, IdSource};
use thiserror::Error;
use tracing::info;

/// Why a bill split was not applied. These are not shown to the user: the
/// form simply keeps its values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitRejected {
    #[error("no friend is selected")]
    NoSelection,
    #[error("bill value and your expense must both be entered")]
    IncompleteBill,
    #[error("selected friend {0} is not in the list")]
    UnknownFriend(FriendId),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ledger {
    friends: Vec<Friend>,
    selected: Option<FriendId>,
}

impl Ledger {
    pub fn new(friends: Vec<Friend>) -> Self {
        Self {
            friends,
            selected: None,
        }
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn get(&self, id: FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == id)
    }

    pub fn selected_id(&self) -> Option<FriendId> {
        self.selected
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn is_selected(&self, id: FriendId) -> bool {
        self.selected == Some(id)
    }

    /// Select `id`. Unknown ids leave the selection as it was.
    pub fn select_friend(&mut self, id: FriendId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn close_selection(&mut self) {
        self.selected = None;
    }

    /// Append a friend with a zero balance and a fresh id. The selection is
    /// left alone.
    pub fn add_friend<S>(&mut self, name: &str, avatar_url: &str, ids: &mut S) -> FriendId
    where
        S: IdSource + ?Sized,
    {
        let id = allocate_id(ids, self.friends.iter().map(|f| f.id));
        let friend = Friend {
            id,
            name: name.trim().to_string(),
            avatar_url: avatar_for(avatar_url, id),
            balance: 0.0,
        };
        info!(id, name = %friend.name, "friend added");
        let mut next = self.friends.clone();
        next.push(friend);
        self.friends = next;
        id
    }

    /// Apply `draft` to the selected friend and return their new balance.
    pub fn split_bill(&mut self, draft: &BillDraft) -> Result<f64, SplitRejected> {
        let id = self.selected.ok_or(SplitRejected::NoSelection)?;
        let friend_expense = draft.friend_expense().ok_or(SplitRejected::IncompleteBill)?;
        let friend = self.get(id).ok_or(SplitRejected::UnknownFriend(id))?;

        let balance = settle(friend.balance, friend_expense, draft.payer);
        let updated = friend.with_balance(balance);
        info!(id, friend_expense, balance, "bill split");
        self.friends = self
            .friends
            .iter()
            .map(|f| if f.id == id { updated.clone() } else { f.clone() })
            .collect();
        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::split::bill::Payer;

    fn clark() -> Friend {
        Friend {
            id: 1,
            name: "Clark".into(),
            avatar_url: "https://i.pravatar.cc/48?u=1".into(),
            balance: -7.0,
        }
    }

    fn ledger() -> Ledger {
        let sarah = Friend {
            id: 2,
            name: "Sarah".into(),
            avatar_url: "https://i.pravatar.cc/48?u=2".into(),
            balance: 20.0,
        };
        Ledger::new(vec![clark(), sarah])
    }

    fn draft(bill: Option<f64>, yours: Option<f64>, payer: Payer) -> BillDraft {
        BillDraft {
            bill,
            your_expense: yours,
            payer,
        }
    }

    #[test]
    fn test_user_pays_friend_owes_more() {
        let mut ledger = ledger();
        ledger.select_friend(1);
        let balance = ledger.split_bill(&draft(Some(100.0), Some(40.0), Payer::You));
        assert_eq!(balance, Ok(-67.0));
        assert_eq!(ledger.get(1).unwrap().balance, -67.0);
        assert_eq!(ledger.get(2).unwrap().balance, 20.0);
        assert_eq!(ledger.selected_id(), Some(1));
    }

    #[test]
    fn test_friend_pays() {
        let mut ledger = ledger();
        ledger.select_friend(1);
        let balance = ledger.split_bill(&draft(Some(100.0), Some(40.0), Payer::Friend));
        assert_eq!(balance, Ok(53.0));
        assert_eq!(ledger.get(1).unwrap().balance, 53.0);
    }

    #[test]
    fn test_incomplete_bill_leaves_friends_unchanged() {
        let mut ledger = ledger();
        ledger.select_friend(1);
        let before = ledger.clone();
        assert_eq!(
            ledger.split_bill(&draft(Some(100.0), None, Payer::You)),
            Err(SplitRejected::IncompleteBill)
        );
        assert_eq!(
            ledger.split_bill(&draft(None, Some(10.0), Payer::Friend)),
            Err(SplitRejected::IncompleteBill)
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_split_without_selection_is_rejected() {
        let mut ledger = ledger();
        assert_eq!(
            ledger.split_bill(&draft(Some(10.0), Some(5.0), Payer::You)),
            Err(SplitRejected::NoSelection)
        );
    }

    #[test]
    fn test_select_unknown_friend_keeps_selection() {
        let mut ledger = ledger();
        ledger.select_friend(2);
        assert!(!ledger.select_friend(99));
        assert_eq!(ledger.selected_id(), Some(2));
        ledger.close_selection();
        assert_eq!(ledger.selected_id(), None);
    }

    #[test]
    fn test_add_friend_starts_even_with_unique_id() {
        let mut ledger = ledger();
        ledger.select_friend(2);
        let mut ids = SequentialIds::starting_at(1);
        let id = ledger.add_friend("  Anthony ", "", &mut ids);
        assert_eq!(id, 3);
        let anthony = ledger.get(id).unwrap();
        assert_eq!(anthony.name, "Anthony");
        assert_eq!(anthony.balance, 0.0);
        assert_eq!(anthony.avatar_url, "https://i.pravatar.cc/48?u=3");
        assert_eq!(ledger.friends().last().unwrap().id, id);
        assert_eq!(ledger.selected_id(), Some(2));
    }
}
