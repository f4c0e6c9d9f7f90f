use serde::{Deserialize, Serialize};

use super::settings::Settings;
use super::transaction::Transaction;

/// The main data container behind a ledger session.
///
/// Contains: the ordered transaction records, the session settings, and the
/// id counter. Held in memory only; dropped when the session ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    /// All transactions, in insertion order
    pub transactions: Vec<Transaction>,

    pub settings: Settings,

    /// Next value handed out by the sequential id generator.
    /// Only ever moves forward.
    pub next_sequence: u64,
}

impl Journal {
    /// Whether a record with this id is currently present.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.transactions.iter().any(|t| t.id == id)
    }
}
