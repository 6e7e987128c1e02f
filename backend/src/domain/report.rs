//! Monthly report model and the shaping of costs into fixed category buckets.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::{Category, Cost, UserId};

/// Reasons a (year, month) pair does not name a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportPeriodError {
    /// Month outside `1..=12`.
    #[error("month must be between 1 and 12, got {month}")]
    MonthOutOfRange {
        /// Rejected month.
        month: u32,
    },
    /// Year outside the supported calendar range.
    #[error("year {year} is outside the supported range")]
    YearOutOfRange {
        /// Rejected year.
        year: i32,
    },
}

/// A calendar month in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportPeriod {
    year: i32,
    month: u32,
    start: NaiveDate,
    next: NaiveDate,
}

impl ReportPeriod {
    /// Validate a (year, month) pair.
    ///
    /// # Examples
    /// ```
    /// use cost_manager::domain::ReportPeriod;
    ///
    /// let period = ReportPeriod::new(2025, 12).expect("valid month");
    /// let (start, end) = period.bounds();
    /// assert_eq!(start.to_rfc3339(), "2025-12-01T00:00:00+00:00");
    /// assert_eq!(end.to_rfc3339(), "2026-01-01T00:00:00+00:00");
    /// assert!(ReportPeriod::new(2025, 13).is_err());
    /// ```
    pub fn new(year: i32, month: u32) -> Result<Self, ReportPeriodError> {
        if !(1..=12).contains(&month) {
            return Err(ReportPeriodError::MonthOutOfRange { month });
        }
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(ReportPeriodError::YearOutOfRange { year })?;
        let next = start
            .checked_add_months(Months::new(1))
            .ok_or(ReportPeriodError::YearOutOfRange { year })?;

        Ok(Self {
            year,
            month,
            start,
            next,
        })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn containing(date: DateTime<Utc>) -> Self {
        let start = date.date_naive().with_day(1).unwrap_or_else(|| date.date_naive());
        let next = start
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        Self {
            year: date.year(),
            month: date.month(),
            start,
            next,
        }
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month, `1..=12`.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Half-open `[start, end)` instant range covering every moment of the
    /// month, including all of its last day.
    #[must_use]
    pub fn bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            self.start.and_time(NaiveTime::MIN).and_utc(),
            self.next.and_time(NaiveTime::MIN).and_utc(),
        )
    }
}

/// One cost as it appears in a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    /// Amount.
    pub sum: f64,
    /// Description.
    pub description: String,
    /// Day of month (UTC) the cost was recorded on.
    pub day: u32,
}

impl From<&Cost> for ReportEntry {
    fn from(cost: &Cost) -> Self {
        Self {
            sum: cost.sum,
            description: cost.description.clone(),
            day: cost.date.day(),
        }
    }
}

/// Entries for a single category, serialised as `{"<category>": [...]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    /// The bucket's category.
    pub category: Category,
    /// Matching costs in store order.
    pub entries: Vec<ReportEntry>,
}

impl Serialize for CategoryBreakdown {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.category.as_str(), &self.entries)?;
        map.end()
    }
}

/// A user's costs for one month grouped into the fixed categories.
///
/// ## Invariants
/// - `costs` holds exactly one bucket per [`Category::ALL`] entry, in that
///   order, even when a bucket is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    #[serde(rename = "userid")]
    user_id: UserId,
    year: i32,
    month: u32,
    costs: Vec<CategoryBreakdown>,
}

impl MonthlyReport {
    /// Shape `costs` into the fixed buckets. Costs belonging to other users
    /// or months are the caller's responsibility to exclude.
    ///
    /// # Examples
    /// ```
    /// use cost_manager::domain::{Category, MonthlyReport, ReportPeriod, UserId};
    ///
    /// let period = ReportPeriod::new(2025, 3).expect("valid month");
    /// let report = MonthlyReport::from_costs(UserId::new(1), period, &[]);
    /// assert_eq!(report.breakdowns().len(), 5);
    /// assert!(report.entries_for(Category::Food).is_empty());
    /// ```
    #[must_use]
    pub fn from_costs(user_id: UserId, period: ReportPeriod, costs: &[Cost]) -> Self {
        let buckets = Category::ALL
            .into_iter()
            .map(|category| CategoryBreakdown {
                category,
                entries: costs
                    .iter()
                    .filter(|cost| cost.category == category)
                    .map(ReportEntry::from)
                    .collect(),
            })
            .collect();

        Self {
            user_id,
            year: period.year(),
            month: period.month(),
            costs: buckets,
        }
    }

    /// Report owner.
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

    /// All buckets in canonical order.
    #[must_use]
    pub fn breakdowns(&self) -> &[CategoryBreakdown] {
        &self.costs
    }

    /// Entries for one category.
    #[must_use]
    pub fn entries_for(&self, category: Category) -> &[ReportEntry] {
        self.costs
            .iter()
            .find(|bucket| bucket.category == category)
            .map(|bucket| bucket.entries.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
