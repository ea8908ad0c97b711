use super::item::Item;
use serde::{Deserialize, Serialize};

/// Display order of the packing list. The stored list always stays in
/// insertion order; sorting only affects what is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Input,
    Description,
    Packed,
}

impl SortOrder {
    pub fn next(self) -> Self {
        match self {
            SortOrder::Input => SortOrder::Description,
            SortOrder::Description => SortOrder::Packed,
            SortOrder::Packed => SortOrder::Input,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Input => "input order",
            SortOrder::Description => "description",
            SortOrder::Packed => "packed status",
        }
    }

    pub fn apply<'a>(self, items: &'a [Item]) -> Vec<&'a Item> {
        let mut view: Vec<&Item> = items.iter().collect();
        match self {
            SortOrder::Input => {}
            SortOrder::Description => view.sort_by(|a, b| {
                a.description
                    .to_lowercase()
                    .cmp(&b.description.to_lowercase())
            }),
            // Unpacked first
            SortOrder::Packed => view.sort_by_key(|item| item.packed),
        }
        view
    }
}
