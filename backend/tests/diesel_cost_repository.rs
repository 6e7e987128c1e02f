//! Integration tests for the Diesel cost and user adapters against embedded
//! PostgreSQL.
//!
//! Each test gets a freshly migrated database so the half-open month range,
//! ordering and `SUM` behaviour are checked against real SQL.

use chrono::{DateTime, TimeZone, Utc};
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use uuid::Uuid;

use cost_manager::domain::ports::{CostRepository, UserRepository};
use cost_manager::domain::{Category, Cost, NewCost, ReportPeriod, UserId};
use cost_manager::outbound::persistence::{
    DbPool, DieselCostRepository, DieselUserRepository, PoolConfig,
};
use cost_manager::server::{DEMO_USER_ID, seed_demo_user};

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::{handle_cluster_setup_failure, migrate_schema, reset_database};

const OWNER: UserId = UserId::new(7);
const OTHER: UserId = UserId::new(8);

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    costs: DieselCostRepository,
    users: DieselUserRepository,
}

impl TestContext {
    fn record(&self, user_id: UserId, description: &str, sum: f64, date: DateTime<Utc>) -> Cost {
        let cost = NewCost {
            user_id,
            description: description.to_owned(),
            category: Category::Food,
            sum,
            date,
        };
        self.runtime
            .block_on(self.costs.insert(&cost))
            .expect("insert cost")
    }

    fn month(&self, user_id: UserId, year: i32, month: u32) -> Vec<Cost> {
        let (start, end) = ReportPeriod::new(year, month).expect("valid period").bounds();
        self.runtime
            .block_on(self.costs.find_by_user_and_range(user_id, start, end))
            .expect("range query")
    }

    fn sum(&self, user_id: UserId) -> f64 {
        self.runtime
            .block_on(self.costs.sum_by_user(user_id))
            .expect("sum query")
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .expect("valid timestamp")
}

fn descriptions(costs: &[Cost]) -> Vec<&str> {
    costs.iter().map(|cost| cost.description.as_str()).collect()
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    let name = format!("costs_{}", Uuid::new_v4().simple());
    reset_database(&cluster.connection().database_url("postgres"), &name)?;
    let database_url = cluster.connection().database_url(&name);
    migrate_schema(&runtime, &database_url)?;

    let config = PoolConfig::new(&database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        costs: DieselCostRepository::new(pool.clone()),
        users: DieselUserRepository::new(pool),
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

#[rstest]
fn insert_assigns_ids_and_keeps_fields(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: insert_assigns_ids_and_keeps_fields skipped");
        return;
    };

    let first = context.record(OWNER, "bread", 4.5, at(2025, 3, 5, 9, 0, 0));
    let second = context.record(OWNER, "milk", 2.0, at(2025, 3, 5, 9, 0, 0));

    assert!(second.id.get() > first.id.get());
    assert_eq!(first.user_id, OWNER);
    assert_eq!(first.category, Category::Food);
    assert_eq!(first.sum, 4.5);
    assert_eq!(first.date, at(2025, 3, 5, 9, 0, 0));
}

#[rstest]
fn month_range_includes_last_second_and_excludes_next_midnight(
    repo_context: Option<TestContext>,
) {
    let Some(context) = repo_context else {
        eprintln!(
            "SKIP-TEST-CLUSTER: month_range_includes_last_second_and_excludes_next_midnight skipped"
        );
        return;
    };

    context.record(OWNER, "february", 1.0, at(2025, 2, 28, 23, 59, 59));
    context.record(OWNER, "first", 1.0, at(2025, 3, 1, 0, 0, 0));
    context.record(OWNER, "last", 1.0, at(2025, 3, 31, 23, 59, 59));
    context.record(OWNER, "april", 1.0, at(2025, 4, 1, 0, 0, 0));
    context.record(OTHER, "someone else", 1.0, at(2025, 3, 15, 12, 0, 0));

    assert_eq!(descriptions(&context.month(OWNER, 2025, 3)), ["first", "last"]);
    assert_eq!(descriptions(&context.month(OWNER, 2025, 2)), ["february"]);
    assert_eq!(descriptions(&context.month(OWNER, 2025, 4)), ["april"]);
}

#[rstest]
fn december_range_rolls_into_next_year(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: december_range_rolls_into_next_year skipped");
        return;
    };

    context.record(OWNER, "eve", 1.0, at(2024, 12, 31, 23, 59, 59));
    context.record(OWNER, "new year", 1.0, at(2025, 1, 1, 0, 0, 0));

    assert_eq!(descriptions(&context.month(OWNER, 2024, 12)), ["eve"]);
    assert_eq!(descriptions(&context.month(OWNER, 2025, 1)), ["new year"]);
}

#[rstest]
fn month_range_orders_by_date_then_insertion(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: month_range_orders_by_date_then_insertion skipped");
        return;
    };

    context.record(OWNER, "late", 1.0, at(2025, 3, 20, 8, 0, 0));
    context.record(OWNER, "tie a", 1.0, at(2025, 3, 10, 8, 0, 0));
    context.record(OWNER, "early", 1.0, at(2025, 3, 2, 8, 0, 0));
    context.record(OWNER, "tie b", 1.0, at(2025, 3, 10, 8, 0, 0));

    assert_eq!(
        descriptions(&context.month(OWNER, 2025, 3)),
        ["early", "tie a", "tie b", "late"]
    );
}

#[rstest]
fn sum_is_zero_for_user_without_costs(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: sum_is_zero_for_user_without_costs skipped");
        return;
    };

    context.record(OTHER, "not ours", 9.0, at(2025, 3, 1, 0, 0, 0));

    assert_eq!(context.sum(OWNER), 0.0);
    assert!(context.month(OWNER, 2025, 3).is_empty());
}

#[rstest]
fn sum_covers_every_month(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: sum_covers_every_month skipped");
        return;
    };

    context.record(OWNER, "january", 10.25, at(2025, 1, 3, 0, 0, 0));
    context.record(OWNER, "march", 5.5, at(2025, 3, 3, 0, 0, 0));
    context.record(OWNER, "refund", -0.75, at(2025, 3, 4, 0, 0, 0));

    assert!((context.sum(OWNER) - 15.0).abs() < f64::EPSILON);
}

#[rstest]
fn seeding_inserts_demo_user_once_and_keeps_its_total(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!(
            "SKIP-TEST-CLUSTER: seeding_inserts_demo_user_once_and_keeps_its_total skipped"
        );
        return;
    };
    let demo = UserId::new(DEMO_USER_ID);

    context.runtime.block_on(async {
        seed_demo_user(&context.users).await.expect("first seed");
        context
            .users
            .update_total(demo, 12.5)
            .await
            .expect("total stored");
        seed_demo_user(&context.users).await.expect("second seed");

        let stored = context
            .users
            .find_by_id(demo)
            .await
            .expect("lookup")
            .expect("demo user exists");
        assert_eq!(stored.first_name(), "mosh");
        assert_eq!(stored.total(), 12.5);
    });
}

#[rstest]
fn update_total_for_unknown_user_is_ignored(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: update_total_for_unknown_user_is_ignored skipped");
        return;
    };

    context.runtime.block_on(async {
        context
            .users
            .update_total(OTHER, 3.0)
            .await
            .expect("no-op update");
        assert!(
            context
                .users
                .find_by_id(OTHER)
                .await
                .expect("lookup")
                .is_none()
        );
    });
}
