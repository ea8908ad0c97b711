//! Bill splitting between the user and their friends.

pub mod bill;
pub mod friend;
pub mod ledger;
