use crate::app::input::TextInput;
use crate::config::model::StartScreen;
use crate::config::AppConfig;
use crate::ids::{allocate_id, IdSource, RandomIds};
use crate::packing::item::{Item, ItemId};
use crate::packing::list::PackingList;
use crate::packing::sort::SortOrder;
use crate::split::bill::{parse_amount, BillDraft, Payer};
use crate::split::friend::{avatar_for, Friend, FriendId};
use crate::split::ledger::Ledger;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Packing,
    Split,
}

impl From<StartScreen> for Screen {
    fn from(start: StartScreen) -> Self {
        match start {
            StartScreen::Packing => Screen::Packing,
            StartScreen::Split => Screen::Split,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingFocus {
    Form,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitFocus {
    Friends,
    AddFriend,
    BillForm,
}

/// Modal dialogs that capture all input while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    ClearList,
}

/// Add-item form and list cursor of the packing screen.
#[derive(Debug)]
pub struct PackingView {
    pub focus: PackingFocus,
    pub description: TextInput,
    pub quantity: u32,
    pub max_quantity: u32,
    /// Row in the sorted view.
    pub cursor: usize,
    pub sort: SortOrder,
}

impl PackingView {
    pub fn new(max_quantity: u32, sort: SortOrder) -> Self {
        Self {
            focus: PackingFocus::Form,
            description: TextInput::new(),
            quantity: 1,
            max_quantity: max_quantity.max(1),
            cursor: 0,
            sort,
        }
    }

    pub fn increase_quantity(&mut self) {
        self.quantity = (self.quantity + 1).min(self.max_quantity);
    }

    pub fn decrease_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    pub fn reset_form(&mut self) {
        self.description.clear();
        self.quantity = 1;
    }

    pub fn clamp_cursor(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            PackingFocus::Form => PackingFocus::List,
            PackingFocus::List => PackingFocus::Form,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddFriendField {
    Name,
    AvatarUrl,
}

#[derive(Debug)]
pub struct AddFriendForm {
    pub open: bool,
    pub field: AddFriendField,
    pub name: TextInput,
    pub avatar_url: TextInput,
    default_avatar_url: String,
}

impl AddFriendForm {
    pub fn new(default_avatar_url: &str) -> Self {
        Self {
            open: false,
            field: AddFriendField::Name,
            name: TextInput::new(),
            avatar_url: TextInput::with_text(default_avatar_url),
            default_avatar_url: default_avatar_url.to_string(),
        }
    }

    pub fn reset(&mut self) {
        self.field = AddFriendField::Name;
        self.name.clear();
        self.avatar_url.set_text(self.default_avatar_url.clone());
    }

    pub fn active_input(&mut self) -> &mut TextInput {
        match self.field {
            AddFriendField::Name => &mut self.name,
            AddFriendField::AvatarUrl => &mut self.avatar_url,
        }
    }

    pub fn switch_field(&mut self) {
        self.field = match self.field {
            AddFriendField::Name => AddFriendField::AvatarUrl,
            AddFriendField::AvatarUrl => AddFriendField::Name,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillField {
    #[default]
    Bill,
    YourExpense,
    Payer,
}

/// Raw text of the split form. Amounts are parsed on demand.
#[derive(Debug, Default)]
pub struct BillForm {
    pub field: BillField,
    pub bill: TextInput,
    pub your_expense: TextInput,
    pub payer: Payer,
}

impl BillForm {
    pub fn draft(&self) -> BillDraft {
        BillDraft {
            bill: parse_amount(self.bill.as_str()),
            your_expense: parse_amount(self.your_expense.as_str()),
            payer: self.payer,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            BillField::Bill => BillField::YourExpense,
            BillField::YourExpense => BillField::Payer,
            BillField::Payer => BillField::Bill,
        };
    }

    pub fn prev_field(&mut self) {
        self.field = match self.field {
            BillField::Bill => BillField::Payer,
            BillField::YourExpense => BillField::Bill,
            BillField::Payer => BillField::YourExpense,
        };
    }

    /// The amount field under the cursor, if the cursor is on one.
    pub fn active_amount(&mut self) -> Option<&mut TextInput> {
        match self.field {
            BillField::Bill => Some(&mut self.bill),
            BillField::YourExpense => Some(&mut self.your_expense),
            BillField::Payer => None,
        }
    }
}

#[derive(Debug)]
pub struct SplitView {
    pub focus: SplitFocus,
    /// Row in the friend list.
    pub cursor: usize,
    pub add_form: AddFriendForm,
    pub bill_form: BillForm,
}

impl SplitView {
    pub fn new(default_avatar_url: &str) -> Self {
        Self {
            focus: SplitFocus::Friends,
            cursor: 0,
            add_form: AddFriendForm::new(default_avatar_url),
            bill_form: BillForm::default(),
        }
    }
}

/// Short-lived message in the status bar.
#[derive(Debug, Clone)]
pub struct StatusFlash {
    pub text: String,
    /// `None` when the configured timeout is beyond what `Instant` can hold.
    pub expires_at: Option<Instant>,
}

pub struct AppState {
    pub config: AppConfig,
    pub screen: Screen,
    pub packing: PackingList,
    pub ledger: Ledger,
    pub packing_view: PackingView,
    pub split_view: SplitView,
    pub prompt: Option<Prompt>,
    pub status: Option<StatusFlash>,
    pub ids: Box<dyn IdSource>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_ids(config, Box::new(RandomIds))
    }

    /// Build the initial state, drawing generated ids from `ids`.
    pub fn with_ids(config: AppConfig, mut ids: Box<dyn IdSource>) -> Self {
        let mut friends: Vec<Friend> = Vec::new();
        for seed in &config.split.friends {
            let id = match seed.id {
                Some(id) if friends.iter().all(|f| f.id != id) => id,
                _ => allocate_id(ids.as_mut(), friends.iter().map(|f| f.id)),
            };
            let avatar_url = seed
                .avatar_url
                .clone()
                .unwrap_or_else(|| avatar_for(&config.split.default_avatar_url, id));
            friends.push(Friend {
                id,
                name: seed.name.clone(),
                avatar_url,
                balance: seed.balance,
            });
        }

        let mut ledger = Ledger::new(friends);
        if let Some(first) = ledger.friends().first().map(|f| f.id) {
            ledger.select_friend(first);
        }

        let packing_view = PackingView::new(config.packing.max_quantity, config.packing.default_sort);
        let split_view = SplitView::new(&config.split.default_avatar_url);
        let screen = Screen::from(config.ui.start_screen);

        Self {
            config,
            screen,
            packing: PackingList::new(Vec::new()),
            ledger,
            packing_view,
            split_view,
            prompt: None,
            status: None,
            ids,
            should_quit: false,
            dirty: true,
        }
    }

    /// Item ids in the order they are currently displayed.
    pub fn visible_item_ids(&self) -> Vec<ItemId> {
        self.packing_view
            .sort
            .apply(self.packing.items())
            .iter()
            .map(|item| item.id)
            .collect()
    }

    pub fn item_under_cursor(&self) -> Option<ItemId> {
        self.visible_item_ids().get(self.packing_view.cursor).copied()
    }

    pub fn friend_under_cursor(&self) -> Option<FriendId> {
        self.ledger
            .friends()
            .get(self.split_view.cursor)
            .map(|f| f.id)
    }

    /// Build an item from the add form, or `None` when no description was
    /// typed.
    pub fn draft_item(&mut self) -> Option<Item> {
        let description = self.packing_view.description.as_str().trim().to_string();
        if description.is_empty() {
            return None;
        }
        let id = allocate_id(self.ids.as_mut(), self.packing.items().iter().map(|i| i.id));
        Some(Item::new(id, description, self.packing_view.quantity))
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        match self.screen {
            Screen::Packing => self.packing_view.cycle_focus(),
            Screen::Split => {
                let view = &mut self.split_view;
                let has_selection = self.ledger.selected_id().is_some();
                view.focus = match view.focus {
                    SplitFocus::Friends if view.add_form.open => SplitFocus::AddFriend,
                    SplitFocus::Friends | SplitFocus::AddFriend if has_selection => SplitFocus::BillForm,
                    _ => SplitFocus::Friends,
                };
            }
        }
        self.dirty = true;
    }

    pub fn flash(&mut self, text: impl Into<String>) {
        let timeout = Duration::from_secs(self.config.ui.status_timeout_secs);
        self.status = Some(StatusFlash {
            text: text.into(),
            expires_at: Instant::now().checked_add(timeout),
        });
        self.dirty = true;
    }

    pub fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| s.expires_at.is_some_and(|at| now >= at)) {
            self.status = None;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref flash) = self.status {
            return flash.text.clone();
        }
        match self.screen {
            Screen::Packing => format!(
                "Items: {} | Sorted by {}",
                self.packing.len(),
                self.packing_view.sort.label()
            ),
            Screen::Split => match self.ledger.selected_friend() {
                Some(friend) => format!(
                    "Friends: {} | Splitting with {}",
                    self.ledger.friends().len(),
                    friend.name
                ),
                None => format!("Friends: {}", self.ledger.friends().len()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::FriendSeed;
    use crate::ids::SequentialIds;

    fn state() -> AppState {
        AppState::with_ids(AppConfig::default(), Box::new(SequentialIds::default()))
    }

    #[test]
    fn test_seed_friends_and_first_is_selected() {
        let state = state();
        assert_eq!(state.ledger.friends().len(), 3);
        assert_eq!(state.ledger.selected_friend().unwrap().name, "Clark");
        assert_eq!(state.ledger.selected_id(), Some(118836));
        assert_eq!(state.screen, Screen::Packing);
    }

    #[test]
    fn test_seeds_without_ids_get_unique_ones() {
        let mut config = AppConfig::default();
        config.split.friends = vec![
            FriendSeed { id: Some(1), name: "A".into(), avatar_url: None, balance: 0.0 },
            FriendSeed { id: None, name: "B".into(), avatar_url: None, balance: 0.0 },
            FriendSeed { id: Some(1), name: "C".into(), avatar_url: None, balance: 0.0 },
        ];
        let state = AppState::with_ids(config, Box::new(SequentialIds::default()));
        let ids: Vec<_> = state.ledger.friends().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(state.ledger.friends()[1].avatar_url, "https://i.pravatar.cc/48?u=2");
    }

    #[test]
    fn test_no_seed_friends_means_no_selection() {
        let mut config = AppConfig::default();
        config.split.friends.clear();
        let state = AppState::with_ids(config, Box::new(SequentialIds::default()));
        assert_eq!(state.ledger.selected_id(), None);
    }

    #[test]
    fn test_quantity_stays_in_range() {
        let mut view = PackingView::new(3, SortOrder::Input);
        view.decrease_quantity();
        assert_eq!(view.quantity, 1);
        for _ in 0..5 {
            view.increase_quantity();
        }
        assert_eq!(view.quantity, 3);
    }

    #[test]
    fn test_draft_item_requires_description() {
        let mut state = state();
        assert_eq!(state.draft_item(), None);
        state.packing_view.description.set_text("  Socks ");
        state.packing_view.quantity = 4;
        let item = state.draft_item().unwrap();
        assert_eq!(item.description, "Socks");
        assert_eq!(item.quantity, 4);
        assert!(!item.packed);
    }

    #[test]
    fn test_bill_form_draft_parses_fields() {
        let mut form = BillForm::default();
        form.bill.set_text("100");
        assert_eq!(form.draft().friend_expense(), None);
        form.your_expense.set_text("40");
        assert_eq!(form.draft().friend_expense(), Some(60.0));
        form.reset();
        assert_eq!(form.draft(), BillDraft::default());
    }

    #[test]
    fn test_status_flash_expires() {
        let mut state = state();
        state.flash("Added");
        assert_eq!(state.status_line(), "Added");
        let later = Instant::now() + Duration::from_secs(60);
        state.expire_status(later);
        assert!(state.status.is_none());
        assert!(state.status_line().starts_with("Items: 0"));
    }

    #[test]
    fn test_huge_status_timeout_never_expires() {
        let config: AppConfig =
            toml::from_str("[ui]\nstatus_timeout_secs = 9223372036854775807").unwrap();
        let mut state = AppState::with_ids(config, Box::new(SequentialIds::default()));
        state.flash("Added 1 Hat");
        assert_eq!(state.status.as_ref().unwrap().expires_at, None);
        state.expire_status(Instant::now() + Duration::from_secs(3600));
        assert_eq!(state.status_line(), "Added 1 Hat");
    }
}
