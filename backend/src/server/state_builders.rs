//! Builders wiring repositories into the domain services behind
//! [`HttpState`].

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use tracing::{debug, info};

use crate::domain::ports::{CostRepository, UserRepository};
use crate::domain::{
    CostIngestionService, Error, ReportService, TeamRoster, User, UserId, UserProfile,
    UserSummaryService,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryCostRepository, InMemoryUserRepository};
use crate::outbound::persistence::{DieselCostRepository, DieselUserRepository};

use super::ServerConfig;

/// Identifier of the user seeded for local runs.
pub const DEMO_USER_ID: i64 = 123_123;

/// The user seeded into the in-memory stores.
///
/// # Errors
///
/// Never fails for the built-in profile; the `Result` mirrors
/// [`User::new`].
pub fn demo_user() -> Result<User, Error> {
    let birthday = NaiveDate::from_ymd_opt(1990, 1, 10)
        .ok_or_else(|| Error::internal("invalid demo user birthday"))?;
    User::new(
        UserId::new(DEMO_USER_ID),
        UserProfile {
            first_name: "mosh".to_owned(),
            last_name: "israeli".to_owned(),
            birthday,
            marital_status: "single".to_owned(),
        },
    )
    .map_err(|err| Error::internal(format!("invalid demo user: {err}")))
}

/// Wire one cost store and one user store into every driving port.
///
/// The report service is shared between the read path and the ingestion
/// service so invalidations reach the cache that serves reads.
pub fn assemble_state<C, U>(costs: Arc<C>, users: Arc<U>, clock: Arc<dyn Clock>) -> HttpState
where
    C: CostRepository + 'static,
    U: UserRepository + 'static,
{
    let reports = Arc::new(ReportService::new(Arc::clone(&costs)));
    let ingestion = CostIngestionService::new(
        Arc::clone(&costs),
        Arc::clone(&users),
        Arc::clone(&reports),
        clock,
    );
    HttpState::new(
        Arc::new(ingestion),
        reports,
        Arc::new(UserSummaryService::new(costs, users)),
        Arc::new(TeamRoster),
    )
}

/// Insert the demo user unless a user with its id already exists.
///
/// A stored row is left untouched so a restart never resets its total.
///
/// # Errors
///
/// Returns an error when the repository cannot be read or written.
pub async fn seed_demo_user<U>(users: &U) -> Result<(), Error>
where
    U: UserRepository + ?Sized,
{
    let user = demo_user()?;
    let existing = users
        .find_by_id(user.id())
        .await
        .map_err(|err| Error::internal(format!("failed to look up demo user: {err}")))?;
    if existing.is_some() {
        debug!(user_id = DEMO_USER_ID, "demo user already present");
        return Ok(());
    }
    users
        .upsert(&user)
        .await
        .map_err(|err| Error::internal(format!("failed to seed demo user: {err}")))?;
    info!(user_id = DEMO_USER_ID, "seeded demo user");
    Ok(())
}

/// Build HTTP state on the in-memory stores, optionally seeding the demo
/// user.
///
/// # Errors
///
/// Returns an error when the demo user cannot be stored.
pub async fn build_in_memory_state(seed: bool) -> Result<HttpState, Error> {
    let costs = Arc::new(InMemoryCostRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    if seed {
        seed_demo_user(users.as_ref()).await?;
    }
    Ok(assemble_state(costs, users, Arc::new(DefaultClock)))
}

/// Build HTTP state using the Diesel adapters when a pool is configured,
/// otherwise the in-memory stores.
///
/// # Errors
///
/// Returns an error when seeding the demo user fails.
pub(crate) async fn build_http_state(config: &ServerConfig) -> Result<HttpState, Error> {
    let Some(pool) = &config.db_pool else {
        return build_in_memory_state(config.seed_demo_user).await;
    };
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    if config.seed_demo_user {
        seed_demo_user(users.as_ref()).await?;
    }
    Ok(assemble_state(
        Arc::new(DieselCostRepository::new(pool.clone())),
        users,
        Arc::new(DefaultClock),
    ))
}
