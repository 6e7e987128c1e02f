//! Write path for cost records.
//!
//! Recording a cost is a short saga: persist the record, invalidate the
//! affected report, then refresh the owner's denormalised total. The steps
//! are not transactional. A refresh failure after a successful insert is
//! logged and surfaced; [`CostIngestionService::refresh_total`] can be re-run
//! at any time to repair the total.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, warn};

use super::report_service::ReportService;
use super::service_error_mapping::{map_cost_error, map_user_error, map_validation_error};
use crate::domain::ports::{CostCommand, CostRepository, UserRepository};
use crate::domain::{AddCostRequest, Cost, Error, ReportPeriod, UserId};

/// Ingestion service implementing [`CostCommand`].
#[derive(Clone)]
pub struct CostIngestionService<C, U> {
    costs: Arc<C>,
    users: Arc<U>,
    reports: Arc<ReportService<C>>,
    clock: Arc<dyn Clock>,
}

impl<C, U> CostIngestionService<C, U> {
    /// Create the service.
    ///
    /// `reports` must wrap the same cost store as `costs` so invalidations
    /// reach the cache that serves reads.
    pub fn new(
        costs: Arc<C>,
        users: Arc<U>,
        reports: Arc<ReportService<C>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            costs,
            users,
            reports,
            clock,
        }
    }
}

impl<C, U> CostIngestionService<C, U>
where
    C: CostRepository,
    U: UserRepository,
{
    /// Recompute the user's total from the cost store and write it to the
    /// user record. Idempotent.
    pub async fn refresh_total(&self, user_id: UserId) -> Result<f64, Error> {
        let total = self
            .costs
            .sum_by_user(user_id)
            .await
            .map_err(map_cost_error)?;
        self.users
            .update_total(user_id, total)
            .await
            .map_err(map_user_error)?;
        debug!(%user_id, total, "user total refreshed");
        Ok(total)
    }
}

#[async_trait]
impl<C, U> CostCommand for CostIngestionService<C, U>
where
    C: CostRepository,
    U: UserRepository,
{
    async fn add_cost(&self, request: AddCostRequest) -> Result<Cost, Error> {
        let cost = request
            .validate(self.clock.utc())
            .map_err(map_validation_error)?;

        let stored = self.costs.insert(&cost).await.map_err(map_cost_error)?;

        self.reports
            .invalidate(stored.user_id, &ReportPeriod::containing(stored.date));

        if let Err(error) = self.refresh_total(stored.user_id).await {
            warn!(
                user_id = %stored.user_id,
                cost_id = stored.id.get(),
                error = %error,
                "cost stored but user total refresh failed"
            );
            return Err(error);
        }

        Ok(stored)
    }
}

#[cfg(test)]
#[path = "cost_ingestion_tests.rs"]
mod tests;
