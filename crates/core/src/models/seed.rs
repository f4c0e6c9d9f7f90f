use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::category::Category;
use super::transaction::Transaction;

/// The five sample records both screens start from.
#[must_use]
pub fn mock_transactions() -> Vec<Transaction> {
    [
        ("1", "Groceries", 50, 1, Category::Food),
        ("2", "Rent", 500, 2, Category::Housing),
        ("3", "Electricity Bill", 100, 3, Category::Utilities),
        ("4", "Internet", 60, 4, Category::Utilities),
        ("5", "Dining Out", 70, 5, Category::Food),
    ]
    .into_iter()
    .filter_map(|(id, name, amount, day, category)| {
        let date = NaiveDate::from_ymd_opt(2024, 10, day)?;
        Some(Transaction::new(id, name, Decimal::from(amount), date, category))
    })
    .collect()
}
