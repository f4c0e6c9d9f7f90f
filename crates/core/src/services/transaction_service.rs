use std::collections::HashSet;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::journal::Journal;
use crate::models::settings::IdStrategy;
use crate::models::transaction::{NewTransaction, Transaction};

/// Manages the transaction records: validates form input, assigns ids,
/// appends and removes.
///
/// Pure business logic — no I/O. Easy to test.
pub struct TransactionService;

impl TransactionService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a form draft and append the resulting transaction.
    ///
    /// The journal is only touched after every check has passed, so a
    /// rejected draft leaves it exactly as it was.
    pub fn add_transaction(
        &self,
        journal: &mut Journal,
        draft: &NewTransaction,
    ) -> Result<Transaction, CoreError> {
        let (name, amount, date, category) = self.parse_draft(journal, draft)?;
        Self::checked_total(&journal.transactions)
            .and_then(|total| total.checked_add(amount))
            .ok_or_else(|| {
                CoreError::ValidationError(format!(
                    "amount {amount} would overflow the ledger total"
                ))
            })?;
        let id = self.next_id(journal);
        let transaction = Transaction::new(id, name, amount, date, category);
        journal.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Remove a transaction by id. Returns the removed record, or `None`
    /// when no record has that id.
    pub fn remove_transaction(&self, journal: &mut Journal, id: &str) -> Option<Transaction> {
        let idx = journal.transactions.iter().position(|t| t.id == id)?;
        Some(journal.transactions.remove(idx))
    }

    /// Check that no two seed records share an id and that their amounts
    /// can be summed without overflow.
    pub fn validate_seed(&self, seed: &[Transaction]) -> Result<(), CoreError> {
        if Self::checked_total(seed).is_none() {
            return Err(CoreError::ValidationError(
                "Seed amounts overflow the ledger total".into(),
            ));
        }

        let mut seen = HashSet::with_capacity(seed.len());
        for transaction in seed {
            if !seen.insert(transaction.id.as_str()) {
                return Err(CoreError::ValidationError(format!(
                    "Duplicate transaction id '{}' in seed data",
                    transaction.id
                )));
            }
        }
        Ok(())
    }

    /// First value for the sequential generator: one past the largest
    /// purely numeric id among `seed`, or 1 when there is none.
    #[must_use]
    pub fn sequence_start(&self, seed: &[Transaction]) -> u64 {
        seed.iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max.checked_add(1).unwrap_or(u64::MAX))
    }

    /// Sum of all amounts, or `None` if it does not fit in a `Decimal`.
    /// Every ledger keeps this `Some`, so aggregates can sum unchecked.
    fn checked_total(transactions: &[Transaction]) -> Option<Decimal> {
        transactions
            .iter()
            .try_fold(Decimal::ZERO, |acc, t| acc.checked_add(t.amount))
    }

    /// Produce an id not used by any record currently in the journal.
    ///
    /// Once the sequential counter reaches `u64::MAX` it stops there and
    /// ids fall back to random UUIDs.
    pub fn next_id(&self, journal: &mut Journal) -> String {
        loop {
            let candidate = match journal.settings.id_strategy {
                IdStrategy::Sequential => {
                    let value = journal.next_sequence;
                    match value.checked_add(1) {
                        Some(next) => {
                            journal.next_sequence = next;
                            value.to_string()
                        }
                        None => {
                            tracing::warn!("id sequence exhausted, using random ids");
                            Uuid::new_v4().to_string()
                        }
                    }
                }
                IdStrategy::Random => Uuid::new_v4().to_string(),
            };
            if !journal.contains_id(&candidate) {
                return candidate;
            }
        }
    }

    /// Turn the raw form text into typed fields.
    ///
    /// Rules:
    /// - name, amount and category must not be blank
    /// - amount must be plain decimal text (digits, one optional point,
    ///   optional leading sign) and not negative
    /// - date must be `YYYY-MM-DD`; blank means the settings default
    /// - category must be one of the known labels
    fn parse_draft(
        &self,
        journal: &Journal,
        draft: &NewTransaction,
    ) -> Result<(String, Decimal, NaiveDate, Category), CoreError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(CoreError::missing_field("name"));
        }
        let amount_text = draft.amount.trim();
        if amount_text.is_empty() {
            return Err(CoreError::missing_field("amount"));
        }
        let category_text = draft.category.trim();
        if category_text.is_empty() {
            return Err(CoreError::missing_field("category"));
        }

        if !Self::is_plain_decimal(amount_text) {
            return Err(CoreError::parse(
                "amount",
                format!("'{amount_text}' is not a plain decimal number"),
            ));
        }
        let amount = Decimal::from_str(amount_text)
            .map_err(|e| CoreError::parse("amount", format!("'{amount_text}' is not a number ({e})")))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CoreError::ValidationError(format!(
                "amount must not be negative (got {amount})"
            )));
        }

        let date_text = draft.date.trim();
        let date = if date_text.is_empty() {
            journal.settings.default_date
        } else {
            NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
                .map_err(|e| CoreError::parse("date", format!("'{date_text}' is not YYYY-MM-DD ({e})")))?
        };

        let category = Category::from_str(category_text)?;

        Ok((name.to_string(), amount, date, category))
    }

    /// Digits with at most one decimal point and an optional leading sign.
    /// Rejects forms `Decimal::from_str` tolerates, like `1_000` or `1e3`.
    fn is_plain_decimal(text: &str) -> bool {
        let digits = text.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(text);
        digits.chars().any(|c| c.is_ascii_digit())
            && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
            && digits.matches('.').count() <= 1
    }
}

impl Default for TransactionService {
    fn default() -> Self {
        Self::new()
    }
}
