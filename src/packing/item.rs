pub type ItemId = u64;

/// One line of the packing list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: u32,
    pub packed: bool,
}

impl Item {
    /// A freshly added, not yet packed item.
    pub fn new(id: ItemId, description: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }

    /// Copy of this item with the packed flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.quantity, self.description)
    }
}
