use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::errors::CoreError;

/// How new transaction ids are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdStrategy {
    /// Monotonic counter rendered as a decimal string ("6", "7", ...).
    /// Never reuses a value, even after removals.
    #[default]
    Sequential,
    /// Random UUID v4 string.
    Random,
}

/// User-configurable settings for a ledger session.
///
/// Missing keys fall back to their defaults when loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prefix used when rendering amounts (e.g., "$", "€").
    pub currency_symbol: String,

    /// Category preselected in a fresh add-transaction form.
    pub default_category: Category,

    /// Date preselected in a fresh add-transaction form, and used when a
    /// submitted form leaves the date blank.
    pub default_date: NaiveDate,

    pub id_strategy: IdStrategy,
}

impl Settings {
    /// Load settings from a JSON document. Absent keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            default_category: Category::Food,
            default_date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap_or_default(),
            id_strategy: IdStrategy::Sequential,
        }
    }
}
