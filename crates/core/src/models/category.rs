use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Spending category of a transaction.
///
/// The set is closed: these are the labels offered by the add-transaction
/// picker, and the only keys that can ever show up in per-category totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Housing,
    Utilities,
    Transport,
    Entertainment,
}

impl Category {
    /// Every category, in picker order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Housing,
        Category::Utilities,
        Category::Transport,
        Category::Entertainment,
    ];

    /// Display label, as shown in the picker and on transaction cards.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Housing => "Housing",
            Category::Utilities => "Utilities",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
        }
    }

    /// Fixed chart color for this category (hex, `#RRGGBB`).
    ///
    /// Keyed by variant so a category keeps its color across re-renders.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Category::Food => "#4CAF50",
            Category::Housing => "#2196F3",
            Category::Utilities => "#FF9800",
            Category::Transport => "#9C27B0",
            Category::Entertainment => "#F44336",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = CoreError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CoreError::ValidationError(format!(
                    "Unknown category '{wanted}' (expected one of: Food, Housing, Utilities, Transport, Entertainment)"
                ))
            })
    }
}
