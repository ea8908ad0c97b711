//! Bill split arithmetic.
//!
//! Form fields start out empty and only become numbers once the user types
//! one, so every amount here is an `Option<f64>`: `None` means "not entered
//! yet", which is different from an entered `0`.

/// Who paid the whole bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payer {
    #[default]
    You,
    Friend,
}

impl Payer {
    pub fn toggled(self) -> Self {
        match self {
            Payer::You => Payer::Friend,
            Payer::Friend => Payer::You,
        }
    }

    pub fn label(self, friend_name: &str) -> &str {
        match self {
            Payer::You => "You",
            Payer::Friend => friend_name,
        }
    }
}

/// Committed values of the split form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BillDraft {
    pub bill: Option<f64>,
    pub your_expense: Option<f64>,
    pub payer: Payer,
}

impl BillDraft {
    /// The friend's share, defined only once both amounts are entered.
    pub fn friend_expense(&self) -> Option<f64> {
        match (self.bill, self.your_expense) {
            (Some(bill), Some(yours)) => Some(bill - yours),
            _ => None,
        }
    }
}

/// Parse a form field. Empty text and anything that is not a finite number
/// stay unset.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// New balance after `friend_expense` was paid by `payer`.
pub fn settle(balance: f64, friend_expense: f64, payer: Payer) -> f64 {
    match payer {
        Payer::You => balance - friend_expense,
        Payer::Friend => balance + friend_expense,
    }
}
