use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::settings::Settings;

/// A single expense entry in the ledger.
///
/// Records are never edited in place. The `id` is assigned when the record
/// enters the ledger and stays fixed until it is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier within the ledger
    pub id: String,

    /// Free-text label (e.g., "Groceries")
    pub name: String,

    /// Amount spent; never negative
    pub amount: Decimal,

    /// Date of the expense (daily granularity, `YYYY-MM-DD` on the wire)
    pub date: NaiveDate,

    pub category: Category,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            date,
            category,
        }
    }
}

/// Raw input of the add-transaction form, before validation.
///
/// Every field is kept as typed text; `TransactionService` turns it into a
/// `Transaction` or rejects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub name: String,
    pub amount: String,
    pub date: String,
    pub category: String,
}

impl NewTransaction {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            date: date.into(),
            category: category.into(),
        }
    }

    /// The form's reset state: blank name and amount, default date and category.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            name: String::new(),
            amount: String::new(),
            date: settings.default_date.format("%Y-%m-%d").to_string(),
            category: settings.default_category.label().to_string(),
        }
    }
}
