//! Driving port for user summaries.

use async_trait::async_trait;

use crate::domain::{Error, UserId, UserSummary};

/// Domain use-case port for looking up a user with their current total.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSummaryQuery: Send + Sync {
    /// Summary for `user_id`; `not_found` when no such user exists.
    async fn summary(&self, user_id: UserId) -> Result<UserSummary, Error>;
}
