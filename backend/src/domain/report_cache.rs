//! In-process memo of shaped monthly reports.
//!
//! Entries never expire; they are removed only by [`ReportCache::invalidate`].
//! A single cache-wide epoch is bumped by every invalidation, so a read that
//! raced with any write cannot store a report computed before that write.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{MonthlyReport, ReportPeriod, UserId};

/// Cache key: one user's report for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportCacheKey {
    user_id: UserId,
    year: i32,
    month: u32,
}

impl ReportCacheKey {
    /// Build the key for `user_id` in `period`.
    #[must_use]
    pub fn new(user_id: UserId, period: &ReportPeriod) -> Self {
        Self {
            user_id,
            year: period.year(),
            month: period.month(),
        }
    }

    /// Key owner.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }
}

impl std::fmt::Display for ReportCacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{:02}", self.user_id, self.year, self.month)
    }
}

/// Epoch observed on a miss; pass it back to [`ReportCache::store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Result of a cache probe.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    /// A memoised report.
    Hit(MonthlyReport),
    /// Nothing cached; the generation to store against.
    Miss(Generation),
}

#[derive(Debug, Default)]
struct CacheState {
    reports: HashMap<ReportCacheKey, MonthlyReport>,
    epoch: u64,
}

/// Thread-safe report memo owned by the report engine.
#[derive(Debug, Default)]
pub struct ReportCache {
    state: Mutex<CacheState>,
}

impl ReportCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Cached data is disposable, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Probe the cache.
    pub fn lookup(&self, key: &ReportCacheKey) -> CacheLookup {
        let state = self.lock();
        match state.reports.get(key) {
            Some(report) => CacheLookup::Hit(report.clone()),
            None => CacheLookup::Miss(Generation(state.epoch)),
        }
    }

    /// Store `report` unless any key was invalidated after `observed` was
    /// taken. Returns whether the report was stored.
    pub fn store(&self, key: ReportCacheKey, observed: Generation, report: MonthlyReport) -> bool {
        let mut state = self.lock();
        if state.epoch != observed.0 {
            return false;
        }
        state.reports.insert(key, report);
        true
    }

    /// Drop the entry for `key` and fence out in-flight computations.
    /// Returns whether an entry was removed.
    pub fn invalidate(&self, key: &ReportCacheKey) -> bool {
        let mut state = self.lock();
        state.epoch = state.epoch.wrapping_add(1);
        state.reports.remove(key).is_some()
    }

    /// Number of memoised reports.
    pub fn len(&self) -> usize {
        self.lock().reports.len()
    }

    /// Whether nothing is memoised.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
