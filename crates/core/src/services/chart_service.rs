use rust_decimal::Decimal;

use crate::models::chart::PieSlice;
use crate::models::summary::CategoryTotal;

/// Generates chart-ready data from ledger aggregates.
///
/// The core computes all the numbers — the frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Build pie-chart slices from per-category totals.
    ///
    /// Slice order follows `totals`. Colors come from the fixed category
    /// palette, so repeated calls produce identical output.
    #[must_use]
    pub fn pie_slices(&self, totals: &[CategoryTotal]) -> Vec<PieSlice> {
        let grand_total: Decimal = totals.iter().map(|t| t.total).sum();

        totals
            .iter()
            .map(|t| PieSlice {
                category: t.category,
                label: t.category.label().to_string(),
                amount: t.total,
                color: t.category.color().to_string(),
                percentage: Self::percentage(t.total, grand_total),
            })
            .collect()
    }

    fn percentage(part: Decimal, whole: Decimal) -> Decimal {
        if whole.is_zero() {
            return Decimal::ZERO;
        }
        part.checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.checked_div(whole))
            .map_or(Decimal::ZERO, |pct| pct.round_dp(2))
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
