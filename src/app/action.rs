use crate::packing::item::{Item, ItemId};
use crate::split::bill::BillDraft;
use crate::split::friend::FriendId;

/// State changes requested by the event handler. Only
/// [`dispatch::apply_action`](super::dispatch::apply_action) touches the item
/// list and the friend ledger.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddItem(Item),
    DeleteItem(ItemId),
    ToggleItem(ItemId),
    /// Answer from the clear-list confirmation.
    ClearList { confirmed: bool },
    AddFriend { name: String, avatar_url: String },
    SelectFriend(FriendId),
    CloseSelection,
    SplitBill(BillDraft),
    Quit,
}
