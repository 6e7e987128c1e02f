//! Driving port for recording costs.

use async_trait::async_trait;

use crate::domain::{AddCostRequest, Cost, Error};

/// Domain use-case port for the write path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CostCommand: Send + Sync {
    /// Validate and persist a cost, returning the stored record.
    async fn add_cost(&self, request: AddCostRequest) -> Result<Cost, Error>;
}
