use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::transaction::Transaction;

/// How many trailing transactions the summary lists as recent.
pub const RECENT_LIMIT: usize = 5;

/// Sum of all transaction amounts in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
    /// How many transactions contributed to `total`
    pub count: usize,
}

/// Everything the summary screen shows, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Number of transactions in the ledger
    pub transaction_count: usize,

    /// Sum of every transaction amount
    pub total_expenses: Decimal,

    /// Per-category totals, in order of first appearance
    pub by_category: Vec<CategoryTotal>,

    /// The last `RECENT_LIMIT` transactions, oldest first
    pub recent: Vec<Transaction>,
}
