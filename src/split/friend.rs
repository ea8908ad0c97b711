pub type FriendId = u64;

pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

/// A friend and the running balance between them and the user.
///
/// Negative balance: the user owes the friend. Positive: the friend owes the
/// user.
#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub avatar_url: String,
    pub balance: f64,
}

impl Friend {
    /// Copy of this friend carrying `balance`.
    pub fn with_balance(&self, balance: f64) -> Self {
        Self {
            balance,
            ..self.clone()
        }
    }

    /// Who owes whom, judged on the balance as displayed (to the cent).
    pub fn standing(&self) -> Standing {
        let shown = round_cents(self.balance);
        if shown < 0.0 {
            Standing::YouOwe
        } else if shown > 0.0 {
            Standing::OwesYou
        } else {
            Standing::Even
        }
    }

    pub fn describe_balance(&self, currency: &str) -> String {
        let amount = format_amount(self.balance.abs());
        match self.standing() {
            Standing::YouOwe => format!("You owe {} {}{}", self.name, amount, currency),
            Standing::OwesYou => format!("{} owes you {}{}", self.name, amount, currency),
            Standing::Even => format!("You and {} are even", self.name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    YouOwe,
    OwesYou,
    Even,
}

/// Avatar for a new friend. The shared placeholder gets a per-friend
/// `?u=<id>` so every friend shows a different face.
pub fn avatar_for(url: &str, id: FriendId) -> String {
    let url = url.trim();
    if url.is_empty() || url == DEFAULT_AVATAR_URL {
        format!("{}?u={}", DEFAULT_AVATAR_URL, id)
    } else {
        url.to_string()
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render an amount with at most two decimals and no trailing zeros.
pub fn format_amount(value: f64) -> String {
    let rounded = round_cents(value);
    // Avoid printing "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}
