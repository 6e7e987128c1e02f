//! Driving port for monthly reports.

use async_trait::async_trait;

use crate::domain::{Error, MonthlyReport, ReportPeriod, UserId};

/// Domain use-case port for the report read path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportQuery: Send + Sync {
    /// Costs for `user_id` in `period`, grouped by category.
    async fn monthly_report(
        &self,
        user_id: UserId,
        period: ReportPeriod,
    ) -> Result<MonthlyReport, Error>;
}
