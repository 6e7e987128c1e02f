//! Port abstraction for cost persistence adapters and their errors.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Cost, NewCost, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by cost repository adapters.
    pub enum CostRepositoryError {
        /// Repository connection could not be established.
        Connection => "cost repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "cost repository query failed: {message}",
    }
}

/// Storage for cost records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CostRepository: Send + Sync {
    /// Persist a validated cost and return the stored record.
    async fn insert(&self, cost: &NewCost) -> Result<Cost, CostRepositoryError>;

    /// Costs for `user_id` dated within the half-open range `[start, end)`,
    /// ordered by date ascending.
    async fn find_by_user_and_range(
        &self,
        user_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Cost>, CostRepositoryError>;

    /// Sum of every cost recorded for `user_id`; zero when there are none.
    async fn sum_by_user(&self, user_id: UserId) -> Result<f64, CostRepositoryError>;
}
