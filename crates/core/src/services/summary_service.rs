use rust_decimal::Decimal;

use crate::models::summary::{CategoryTotal, LedgerSummary, RECENT_LIMIT};
use crate::models::transaction::Transaction;

/// Computes spending aggregates over a set of transactions.
///
/// Nothing is cached: every call walks the records it is given. Sums are
/// unchecked; `TransactionService` refuses any record that would make the
/// total overflow.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Sum of every amount. Zero for an empty slice.
    #[must_use]
    pub fn total_expenses(&self, transactions: &[Transaction]) -> Decimal {
        transactions.iter().map(|t| t.amount).sum()
    }

    /// Per-category sums, keyed in order of each category's first appearance.
    /// Categories without transactions are left out.
    #[must_use]
    pub fn totals_by_category(&self, transactions: &[Transaction]) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();

        for transaction in transactions {
            match totals.iter_mut().find(|t| t.category == transaction.category) {
                Some(entry) => {
                    entry.total += transaction.amount;
                    entry.count += 1;
                }
                None => totals.push(CategoryTotal {
                    category: transaction.category,
                    total: transaction.amount,
                    count: 1,
                }),
            }
        }

        totals
    }

    #[must_use]
    pub fn summarize(&self, transactions: &[Transaction]) -> LedgerSummary {
        LedgerSummary {
            transaction_count: transactions.len(),
            total_expenses: self.total_expenses(transactions),
            by_category: self.totals_by_category(transactions),
            recent: transactions[transactions.len().saturating_sub(RECENT_LIMIT)..].to_vec(),
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
