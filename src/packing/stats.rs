use super::item::Item;

/// Packing progress shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub packed: usize,
    pub percentage: u32,
}

impl Stats {
    pub fn from_items(items: &[Item]) -> Self {
        let total = items.len();
        let packed = items.iter().filter(|item| item.packed).count();
        let percentage = if total == 0 {
            0
        } else {
            (packed as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            total,
            packed,
            percentage,
        }
    }

    pub fn message(&self) -> String {
        if self.total == 0 {
            return "Start adding some items to your packing list 🚀".to_string();
        }
        if self.percentage == 100 {
            return "You got everything! Ready to go ✈️".to_string();
        }
        format!(
            "💼 You have {} items on your list, and you already packed {} ({}%)",
            self.total, self.packed, self.percentage
        )
    }
}
