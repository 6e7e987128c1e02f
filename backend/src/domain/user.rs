//! User data model.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validation errors returned by [`User::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// First name was blank.
    EmptyFirstName,
    /// Last name was blank.
    EmptyLastName,
    /// Marital status was blank.
    EmptyMaritalStatus,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFirstName => write!(f, "first name must not be empty"),
            Self::EmptyLastName => write!(f, "last name must not be empty"),
            Self::EmptyMaritalStatus => write!(f, "marital status must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Numeric user identifier shared by users and their costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
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

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Descriptive profile fields supplied when registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth.
    pub birthday: NaiveDate,
    /// Free-form marital status.
    pub marital_status: String,
}

/// Application user.
///
/// ## Invariants
/// - `first_name`, `last_name` and `marital_status` are trimmed and non-empty.
/// - `total` is a denormalised copy of the sum of the user's costs. It is
///   refreshed after each insert and never treated as authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    birthday: NaiveDate,
    marital_status: String,
    total: f64,
}

fn require(value: &str, error: UserValidationError) -> Result<String, UserValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_owned())
}

impl User {
    /// Validate the profile and build a user with a zero total.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use cost_manager::domain::{User, UserId, UserProfile};
    ///
    /// let user = User::new(
    ///     UserId::new(1),
    ///     UserProfile {
    ///         first_name: " Ada ".into(),
    ///         last_name: "Lovelace".into(),
    ///         birthday: NaiveDate::from_ymd_opt(1815, 12, 10).expect("valid date"),
    ///         marital_status: "married".into(),
    ///     },
    /// )
    /// .expect("valid user");
    /// assert_eq!(user.first_name(), "Ada");
    /// assert_eq!(user.total(), 0.0);
    /// ```
    pub fn new(id: UserId, profile: UserProfile) -> Result<Self, UserValidationError> {
        let UserProfile {
            first_name,
            last_name,
            birthday,
            marital_status,
        } = profile;
        Ok(Self {
            id,
            first_name: require(&first_name, UserValidationError::EmptyFirstName)?,
            last_name: require(&last_name, UserValidationError::EmptyLastName)?,
            birthday,
            marital_status: require(&marital_status, UserValidationError::EmptyMaritalStatus)?,
            total: 0.0,
        })
    }

    /// Return a copy carrying the supplied denormalised total.
    #[must_use]
    pub fn with_total(mut self, total: f64) -> Self {
        self.total = total;
        self
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Date of birth.
    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    /// Marital status as recorded.
    pub fn marital_status(&self) -> &str {
        &self.marital_status
    }

    /// Denormalised running total of the user's costs.
    pub fn total(&self) -> f64 {
        self.total
    }
}

/// Read model returned by the user summary use-case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// User identifier.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Sum of every cost recorded for the user.
    pub total: f64,
}

impl UserSummary {
    /// Build a summary from a user record and a freshly computed total.
    #[must_use]
    pub fn from_user(user: &User, total: f64) -> Self {
        Self {
            id: user.id(),
            first_name: user.first_name().to_owned(),
            last_name: user.last_name().to_owned(),
            total,
        }
    }
}
