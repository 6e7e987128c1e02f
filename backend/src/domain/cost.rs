//! Cost records and the validation applied before they are persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Category, UserId};

/// Store-assigned cost identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostId(i64);

impl CostId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

/// A validated cost waiting to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCost {
    /// Owner of the expense.
    pub user_id: UserId,
    /// Trimmed, non-empty description.
    pub description: String,
    /// One of the fixed categories.
    pub category: Category,
    /// Amount; sign and magnitude are not constrained.
    pub sum: f64,
    /// When the expense happened.
    pub date: DateTime<Utc>,
}

/// A persisted cost record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    /// Store-assigned identifier.
    pub id: CostId,
    /// Owner of the expense.
    #[serde(rename = "userid")]
    pub user_id: UserId,
    /// Description as stored.
    pub description: String,
    /// Category as stored.
    pub category: Category,
    /// Amount as stored.
    pub sum: f64,
    /// When the expense happened.
    pub date: DateTime<Utc>,
}

impl Cost {
    /// Attach a store-assigned identifier to a validated cost.
    #[must_use]
    pub fn from_new(id: CostId, cost: NewCost) -> Self {
        let NewCost {
            user_id,
            description,
            category,
            sum,
            date,
        } = cost;
        Self {
            id,
            user_id,
            description,
            category,
            sum,
            date,
        }
    }
}

/// Reasons an incoming cost is rejected before persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostValidationError {
    /// A required field was absent.
    #[error("missing required field: {field}")]
    MissingField {
        /// Wire name of the absent field.
        field: &'static str,
    },
    /// The description was blank after trimming.
    #[error("description must not be empty")]
    EmptyDescription,
    /// The category is not one of the fixed set.
    #[error("invalid category: {value}")]
    InvalidCategory {
        /// Rejected category.
        value: String,
    },
}

/// Unvalidated input for the add-cost use-case.
///
/// Every field is optional so presence can be checked explicitly. Zero is a
/// present value for both `user_id` and `sum`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddCostRequest {
    /// Owner of the expense.
    pub user_id: Option<UserId>,
    /// Free-text description.
    pub description: Option<String>,
    /// Category wire name.
    pub category: Option<String>,
    /// Amount.
    pub sum: Option<f64>,
    /// When the expense happened; defaults to the current time.
    pub date: Option<DateTime<Utc>>,
}

impl AddCostRequest {
    /// Validate the request, resolving a missing date to `now`.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use cost_manager::domain::{AddCostRequest, Category, UserId};
    ///
    /// let request = AddCostRequest {
    ///     user_id: Some(UserId::new(1)),
    ///     description: Some("bread".into()),
    ///     category: Some("food".into()),
    ///     sum: Some(0.0),
    ///     date: None,
    /// };
    /// let now = Utc::now();
    /// let cost = request.validate(now).expect("valid cost");
    /// assert_eq!(cost.category, Category::Food);
    /// assert_eq!(cost.date, now);
    /// ```
    pub fn validate(self, now: DateTime<Utc>) -> Result<NewCost, CostValidationError> {
        let Self {
            user_id,
            description,
            category,
            sum,
            date,
        } = self;

        let user_id = user_id.ok_or(CostValidationError::MissingField { field: "userid" })?;
        let description = description.ok_or(CostValidationError::MissingField {
            field: "description",
        })?;
        let category = category.ok_or(CostValidationError::MissingField { field: "category" })?;
        let sum = sum.ok_or(CostValidationError::MissingField { field: "sum" })?;

        let description = description.trim();
        if description.is_empty() {
            return Err(CostValidationError::EmptyDescription);
        }

        let category = category
            .parse::<Category>()
            .map_err(|err| CostValidationError::InvalidCategory { value: err.value })?;

        Ok(NewCost {
            user_id,
            description: description.to_owned(),
            category,
            sum,
            date: date.unwrap_or(now),
        })
    }
}
