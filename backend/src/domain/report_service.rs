//! Report engine: memoised monthly reports kept consistent with writes.
//!
//! The service owns its [`ReportCache`]. Writers never touch the cache
//! directly; they call [`ReportService::invalidate`] with the period of the
//! cost they stored.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::report_cache::{CacheLookup, ReportCache, ReportCacheKey};
use super::service_error_mapping::map_cost_error;
use crate::domain::ports::{CostRepository, ReportQuery};
use crate::domain::{Error, MonthlyReport, ReportPeriod, UserId};

/// Report engine implementing [`ReportQuery`].
pub struct ReportService<C> {
    costs: Arc<C>,
    cache: ReportCache,
}

impl<C> ReportService<C> {
    /// Create a report engine with an empty cache.
    pub fn new(costs: Arc<C>) -> Self {
        Self {
            costs,
            cache: ReportCache::new(),
        }
    }

    /// Forget the cached report for `user_id` in `period`, if any.
    ///
    /// Returns whether a cached report was dropped.
    pub fn invalidate(&self, user_id: UserId, period: &ReportPeriod) -> bool {
        let key = ReportCacheKey::new(user_id, period);
        let removed = self.cache.invalidate(&key);
        debug!(%key, removed, "report cache invalidated");
        removed
    }

    /// The underlying cache.
    pub fn cache(&self) -> &ReportCache {
        &self.cache
    }
}

impl<C> ReportService<C>
where
    C: CostRepository,
{
    /// Return the report for `user_id` in `period`, computing and caching it
    /// on a miss.
    pub async fn report(
        &self,
        user_id: UserId,
        period: ReportPeriod,
    ) -> Result<MonthlyReport, Error> {
        let key = ReportCacheKey::new(user_id, &period);
        let generation = match self.cache.lookup(&key) {
            CacheLookup::Hit(report) => {
                debug!(%key, "report cache hit");
                return Ok(report);
            }
            CacheLookup::Miss(generation) => generation,
        };

        debug!(%key, "report cache miss");
        let (start, end) = period.bounds();
        let costs = self
            .costs
            .find_by_user_and_range(user_id, start, end)
            .await
            .map_err(map_cost_error)?;

        let report = MonthlyReport::from_costs(user_id, period, &costs);
        if !self.cache.store(key, generation, report.clone()) {
            debug!(%key, "report invalidated while computing; not cached");
        }
        Ok(report)
    }
}

#[async_trait]
impl<C> ReportQuery for ReportService<C>
where
    C: CostRepository,
{
    async fn monthly_report(
        &self,
        user_id: UserId,
        period: ReportPeriod,
    ) -> Result<MonthlyReport, Error> {
        self.report(user_id, period).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{CostRepositoryError, MockCostRepository};
    use crate::domain::{Category, Cost, CostId, ErrorCode};
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    #[fixture]
    fn period() -> ReportPeriod {
        ReportPeriod::new(2025, 3).expect("valid period")
    }

    fn food(id: i64, sum: f64, day: u32) -> Cost {
        Cost {
            id: CostId::new(id),
            user_id: UserId::new(1),
            description: "groceries".to_owned(),
            category: Category::Food,
            sum,
            date: Utc
                .with_ymd_and_hms(2025, 3, day, 8, 0, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn miss_queries_month_range_and_caches(period: ReportPeriod) {
        let (start, end) = period.bounds();
        let mut repo = MockCostRepository::new();
        repo.expect_find_by_user_and_range()
            .withf(move |user, lower, upper| {
                *user == UserId::new(1) && *lower == start && *upper == end
            })
            .times(1)
            .return_once(|_, _, _| Ok(vec![food(1, 50.0, 5)]));

        let service = ReportService::new(Arc::new(repo));

        let first = service.report(UserId::new(1), period).await.expect("report");
        let second = service.report(UserId::new(1), period).await.expect("cached");

        assert_eq!(first, second);
        assert_eq!(first.entries_for(Category::Food).len(), 1);
        assert_eq!(service.cache().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn invalidation_forces_recompute(period: ReportPeriod) {
        let mut repo = MockCostRepository::new();
        repo.expect_find_by_user_and_range()
            .times(2)
            .returning(|_, _, _| Ok(Vec::new()));

        let service = ReportService::new(Arc::new(repo));
        service.report(UserId::new(1), period).await.expect("report");

        assert!(service.invalidate(UserId::new(1), &period));
        service.report(UserId::new(1), period).await.expect("recomputed");
    }

    #[rstest]
    #[tokio::test]
    async fn invalidating_other_period_keeps_entry(period: ReportPeriod) {
        let mut repo = MockCostRepository::new();
        repo.expect_find_by_user_and_range()
            .times(1)
            .returning(|_, _, _| Ok(Vec::new()));

        let service = ReportService::new(Arc::new(repo));
        service.report(UserId::new(1), period).await.expect("report");

        let april = ReportPeriod::new(2025, 4).expect("valid period");
        assert!(!service.invalidate(UserId::new(1), &april));
        service.report(UserId::new(1), period).await.expect("cached");
    }

    #[rstest]
    #[case(CostRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(CostRepositoryError::query("boom"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn store_failures_are_mapped_and_not_cached(
        period: ReportPeriod,
        #[case] failure: CostRepositoryError,
        #[case] code: ErrorCode,
    ) {
        let mut repo = MockCostRepository::new();
        repo.expect_find_by_user_and_range()
            .times(1)
            .return_once(move |_, _, _| Err(failure));

        let service = ReportService::new(Arc::new(repo));
        let error = service
            .report(UserId::new(1), period)
            .await
            .expect_err("store failure");

        assert_eq!(error.code(), code);
        assert!(service.cache().is_empty());
    }
}
