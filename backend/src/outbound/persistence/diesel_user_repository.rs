//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId, UserProfile};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow, UserUpdate};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserRepositoryError> {
    let UserRow {
        id,
        first_name,
        last_name,
        birthday,
        marital_status,
        total,
    } = row;
    let profile = UserProfile {
        first_name,
        last_name,
        birthday,
        marital_status,
    };
    User::new(UserId::new(id), profile)
        .map(|user| user.with_total(total))
        .map_err(|err| UserRepositoryError::query(format!("stored user {id} is invalid: {err}")))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn upsert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewUserRow {
            id: user.id().get(),
            first_name: user.first_name(),
            last_name: user.last_name(),
            birthday: user.birthday(),
            marital_status: user.marital_status(),
            total: user.total(),
        };
        let update = UserUpdate {
            first_name: user.first_name(),
            last_name: user.last_name(),
            birthday: user.birthday(),
            marital_status: user.marital_status(),
            total: user.total(),
        };

        diesel::insert_into(users::table)
            .values(&row)
            .on_conflict(users::id)
            .do_update()
            .set(&update)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn update_total(&self, id: UserId, total: f64) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(users::table.find(id.get()))
            .set(users::total.eq(total))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            debug!(user_id = %id, "total not stored; user is not registered");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    #[fixture]
    fn row() -> UserRow {
        UserRow {
            id: 123_123,
            first_name: "mosh".to_owned(),
            last_name: "israeli".to_owned(),
            birthday: NaiveDate::from_ymd_opt(1990, 1, 10).expect("valid date"),
            marital_status: "single".to_owned(),
            total: 12.5,
        }
    }

    #[rstest]
    fn row_converts_to_domain_user(row: UserRow) {
        let user = row_to_user(row).expect("valid row");

        assert_eq!(user.id(), UserId::new(123_123));
        assert_eq!(user.first_name(), "mosh");
        assert_eq!(user.total(), 12.5);
    }

    #[rstest]
    fn blank_stored_name_is_query_error(mut row: UserRow) {
        row.first_name = "  ".to_owned();

        let error = row_to_user(row).expect_err("invalid row");

        assert!(matches!(error, UserRepositoryError::Query { .. }));
    }
}
