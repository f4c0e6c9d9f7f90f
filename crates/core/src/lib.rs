pub mod errors;
pub mod logging;
pub mod models;
pub mod services;

use rust_decimal::Decimal;
use models::{
    chart::PieSlice,
    journal::Journal,
    seed::mock_transactions,
    settings::Settings,
    summary::{CategoryTotal, LedgerSummary},
    transaction::{NewTransaction, Transaction},
};
use services::{
    chart_service::ChartService, summary_service::SummaryService,
    transaction_service::TransactionService,
};

use errors::CoreError;

/// Main entry point for the expense-ledger core library.
/// Holds the transaction records and all services needed to operate on them.
///
/// One `Ledger` backs every screen of a session: the list screen mutates it,
/// the summary screen reads aggregates from it. All mutation goes through
/// `&mut self`, so the owner is the single point where changes are ordered.
#[must_use]
pub struct Ledger {
    journal: Journal,
    transaction_service: TransactionService,
    summary_service: SummaryService,
    chart_service: ChartService,
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("transactions", &self.journal.transactions.len())
            .field("settings", &self.journal.settings)
            .field("next_sequence", &self.journal.next_sequence)
            .finish()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger with default settings.
    pub fn new() -> Self {
        Self::build(Journal {
            transactions: Vec::new(),
            settings: Settings::default(),
            next_sequence: 1,
        })
    }

    /// Create a ledger holding exactly `seed`, in order, with default settings.
    pub fn from_seed(seed: Vec<Transaction>) -> Result<Self, CoreError> {
        Self::with_settings(seed, Settings::default())
    }

    /// Create a ledger holding exactly `seed`, in order.
    /// Fails if two seed records share an id.
    pub fn with_settings(seed: Vec<Transaction>, settings: Settings) -> Result<Self, CoreError> {
        let transaction_service = TransactionService::new();
        transaction_service.validate_seed(&seed)?;
        let next_sequence = transaction_service.sequence_start(&seed);

        tracing::debug!(records = seed.len(), next_sequence, "ledger initialized");

        Ok(Self::build(Journal {
            transactions: seed,
            settings,
            next_sequence,
        }))
    }

    /// Create a ledger seeded with the five sample records.
    pub fn with_mock_data() -> Self {
        Self::from_seed(mock_transactions()).unwrap_or_else(|e| {
            tracing::error!(error = %e, "sample data rejected, starting empty");
            Self::new()
        })
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Add a transaction from raw form text.
    ///
    /// `name`, `amount` and `category` are required. A blank `date` uses the
    /// configured default date. Returns the stored record, including its
    /// newly assigned id. On error the ledger is unchanged.
    pub fn add(
        &mut self,
        name: &str,
        amount: &str,
        date: &str,
        category: &str,
    ) -> Result<Transaction, CoreError> {
        self.add_draft(&NewTransaction::new(name, amount, date, category))
    }

    /// Add a transaction from a submitted form draft.
    pub fn add_draft(&mut self, draft: &NewTransaction) -> Result<Transaction, CoreError> {
        match self
            .transaction_service
            .add_transaction(&mut self.journal, draft)
        {
            Ok(transaction) => {
                tracing::debug!(
                    id = %transaction.id,
                    category = %transaction.category,
                    amount = %transaction.amount,
                    "transaction added"
                );
                Ok(transaction)
            }
            Err(e) => {
                tracing::warn!(error = %e, "transaction rejected");
                Err(e)
            }
        }
    }

    /// Remove the transaction with `id`. Returns whether anything was removed;
    /// an unknown id is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        match self
            .transaction_service
            .remove_transaction(&mut self.journal, id)
        {
            Some(removed) => {
                tracing::debug!(id = %removed.id, amount = %removed.amount, "transaction removed");
                true
            }
            None => {
                tracing::debug!(id, "remove ignored, no such transaction");
                false
            }
        }
    }

    // ── Records ─────────────────────────────────────────────────────

    /// All transactions, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Transaction] {
        &self.journal.transactions
    }

    /// Look up a single transaction (detail screen).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.journal.transactions.iter().find(|t| t.id == id)
    }

    /// The last `n` transactions, oldest first. Fewer when the ledger is shorter.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[Transaction] {
        let records = &self.journal.transactions;
        &records[records.len().saturating_sub(n)..]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.journal.transactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.journal.transactions.is_empty()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.journal.settings
    }

    /// A blank add-transaction form, prefilled with the default date and category.
    #[must_use]
    pub fn blank_form(&self) -> NewTransaction {
        NewTransaction::from_settings(&self.journal.settings)
    }

    // ── Aggregates ──────────────────────────────────────────────────

    /// Sum of all amounts. Zero for an empty ledger.
    #[must_use]
    pub fn total_expenses(&self) -> Decimal {
        self.summary_service.total_expenses(&self.journal.transactions)
    }

    /// Per-category sums in order of first appearance.
    #[must_use]
    pub fn totals_by_category(&self) -> Vec<CategoryTotal> {
        self.summary_service
            .totals_by_category(&self.journal.transactions)
    }

    #[must_use]
    pub fn summary(&self) -> LedgerSummary {
        self.summary_service.summarize(&self.journal.transactions)
    }

    /// Spending-by-category pie slices with stable colors.
    #[must_use]
    pub fn pie_chart(&self) -> Vec<PieSlice> {
        self.chart_service.pie_slices(&self.totals_by_category())
    }

    /// Total rendered for the list header, e.g. `$780.00`.
    #[must_use]
    pub fn formatted_total(&self) -> String {
        format!(
            "{}{:.2}",
            self.journal.settings.currency_symbol,
            self.total_expenses()
        )
    }

    // ── Export ──────────────────────────────────────────────────────

    /// JSON snapshot of the records, for handing to a frontend.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.journal.transactions)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize transactions: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(journal: Journal) -> Self {
        Self {
            journal,
            transaction_service: TransactionService::new(),
            summary_service: SummaryService::new(),
            chart_service: ChartService::new(),
        }
    }
}
