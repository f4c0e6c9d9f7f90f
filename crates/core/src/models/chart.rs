use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// One slice of the spending-by-category pie chart.
///
/// The core computes the numbers and picks the color; the frontend only
/// draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub category: Category,

    /// Legend label (the category name)
    pub label: String,

    /// Total spent in this category
    pub amount: Decimal,

    /// Fill color, `#RRGGBB`. Stable for a given category.
    pub color: String,

    /// Share of total spending, 0–100, rounded to two decimals.
    /// Zero when the ledger total is zero.
    pub percentage: Decimal,
}
