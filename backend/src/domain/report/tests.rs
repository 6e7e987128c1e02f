//! Tests for report periods and category shaping.

use super::*;
use crate::domain::CostId;
use chrono::TimeZone;
use rstest::rstest;
use serde_json::json;

fn cost(id: i64, category: Category, sum: f64, day: u32) -> Cost {
    Cost {
        id: CostId::new(id),
        user_id: UserId::new(1),
        description: format!("cost {id}"),
        category,
        sum,
        date: Utc
            .with_ymd_and_hms(2025, 3, day, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
    }
}

#[rstest]
#[case(0)]
#[case(13)]
fn period_rejects_months_outside_calendar(#[case] month: u32) {
    let err = ReportPeriod::new(2025, month).expect_err("invalid month");
    assert_eq!(err, ReportPeriodError::MonthOutOfRange { month });
}

#[rstest]
fn period_rejects_unrepresentable_years() {
    let err = ReportPeriod::new(i32::MAX, 1).expect_err("invalid year");
    assert_eq!(err, ReportPeriodError::YearOutOfRange { year: i32::MAX });
}

#[rstest]
#[case(2024, 2, "2024-02-01T00:00:00+00:00", "2024-03-01T00:00:00+00:00")]
#[case(2025, 12, "2025-12-01T00:00:00+00:00", "2026-01-01T00:00:00+00:00")]
fn period_bounds_cover_whole_month(
    #[case] year: i32,
    #[case] month: u32,
    #[case] start: &str,
    #[case] end: &str,
) {
    let (lower, upper) = ReportPeriod::new(year, month).expect("valid").bounds();
    assert_eq!(lower.to_rfc3339(), start);
    assert_eq!(upper.to_rfc3339(), end);
}

#[rstest]
fn containing_matches_explicit_construction() {
    let date = Utc
        .with_ymd_and_hms(2025, 3, 31, 23, 59, 59)
        .single()
        .expect("valid timestamp");
    assert_eq!(
        ReportPeriod::containing(date),
        ReportPeriod::new(2025, 3).expect("valid")
    );
}

#[rstest]
fn shaping_keeps_all_five_buckets_in_order() {
    let period = ReportPeriod::new(2025, 3).expect("valid");
    let report = MonthlyReport::from_costs(
        UserId::new(1),
        period,
        &[cost(1, Category::Sport, 12.0, 2)],
    );

    let order: Vec<_> = report.breakdowns().iter().map(|b| b.category).collect();
    assert_eq!(order, Category::ALL);
    assert_eq!(report.entries_for(Category::Sport).len(), 1);
    assert!(report.entries_for(Category::Food).is_empty());
}

#[rstest]
fn report_carries_owner_and_period() {
    let period = ReportPeriod::new(2024, 12).expect("valid");
    let report = MonthlyReport::from_costs(UserId::new(42), period, &[]);

    assert_eq!(report.user_id(), UserId::new(42));
    assert_eq!((report.year(), report.month()), (period.year(), period.month()));
    assert!(report.breakdowns().iter().all(|bucket| bucket.entries.is_empty()));
}

#[rstest]
fn shaping_groups_entries_by_category() {
    let period = ReportPeriod::new(2025, 3).expect("valid");
    let costs = [
        cost(1, Category::Food, 50.0, 5),
        cost(2, Category::Housing, 900.0, 1),
        cost(3, Category::Food, 30.0, 20),
    ];

    let report = MonthlyReport::from_costs(UserId::new(1), period, &costs);

    let food = report.entries_for(Category::Food);
    assert_eq!(food.iter().map(|e| e.day).collect::<Vec<_>>(), [5, 20]);
    assert_eq!(food.iter().map(|e| e.sum).sum::<f64>(), 80.0);
    assert_eq!(report.entries_for(Category::Housing).len(), 1);
}

#[rstest]
fn report_serialises_as_single_key_objects() {
    let period = ReportPeriod::new(2025, 3).expect("valid");
    let report = MonthlyReport::from_costs(
        UserId::new(1),
        period,
        &[cost(1, Category::Food, 50.0, 5)],
    );

    let value = serde_json::to_value(&report).expect("serialise");
    assert_eq!(
        value,
        json!({
            "userid": 1,
            "year": 2025,
            "month": 3,
            "costs": [
                { "food": [{ "sum": 50.0, "description": "cost 1", "day": 5 }] },
                { "health": [] },
                { "housing": [] },
                { "sport": [] },
                { "education": [] },
            ],
        })
    );
}
