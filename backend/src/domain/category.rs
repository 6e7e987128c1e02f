//! Fixed expense categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Expense category. The set is closed; reports always list every variant in
/// the order of [`Category::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Groceries and eating out.
    Food,
    /// Medical and wellbeing costs.
    Health,
    /// Rent, utilities, and upkeep.
    Housing,
    /// Sport and fitness.
    Sport,
    /// Courses, books, and tuition.
    Education,
}

impl Category {
    /// Every category in canonical report order.
    pub const ALL: [Self; 5] = [
        Self::Food,
        Self::Health,
        Self::Housing,
        Self::Sport,
        Self::Education,
    ];

    /// Lower-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Health => "health",
            Self::Housing => "housing",
            Self::Sport => "sport",
            Self::Education => "education",
        }
    }

    /// Comma-separated list of accepted wire names, for error messages.
    #[must_use]
    pub fn expected_values() -> String {
        Self::ALL
            .iter()
            .map(|category| category.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string is not one of the fixed categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {value}")]
pub struct ParseCategoryError {
    /// Rejected input.
    pub value: String,
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError {
                value: s.to_owned(),
            })
    }
}
