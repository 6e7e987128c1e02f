//! PostgreSQL-backed `CostRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CostRepository, CostRepositoryError};
use crate::domain::{Category, Cost, CostId, NewCost, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CostRow, NewCostRow};
use super::pool::DbPool;
use super::schema::costs;

/// Diesel-backed implementation of the [`CostRepository`] port.
#[derive(Clone)]
pub struct DieselCostRepository {
    pool: DbPool,
}

impl DieselCostRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_cost(row: CostRow) -> Result<Cost, CostRepositoryError> {
    let category = row.category.parse::<Category>().map_err(|err| {
        CostRepositoryError::query(format!("cost {} has {err}", row.id))
    })?;

    Ok(Cost {
        id: CostId::new(row.id),
        user_id: UserId::new(row.user_id),
        description: row.description,
        category,
        sum: row.amount,
        date: row.incurred_at,
    })
}

#[async_trait]
impl CostRepository for DieselCostRepository {
    async fn insert(&self, cost: &NewCost) -> Result<Cost, CostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewCostRow {
            user_id: cost.user_id.get(),
            description: &cost.description,
            category: cost.category.as_str(),
            amount: cost.sum,
            incurred_at: cost.date,
        };

        let stored: CostRow = diesel::insert_into(costs::table)
            .values(&row)
            .returning(CostRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_cost(stored)
    }

    async fn find_by_user_and_range(
        &self,
        user_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Cost>, CostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CostRow> = costs::table
            .filter(costs::user_id.eq(user_id.get()))
            .filter(costs::incurred_at.ge(start))
            .filter(costs::incurred_at.lt(end))
            .order((costs::incurred_at.asc(), costs::id.asc()))
            .select(CostRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_cost).collect()
    }

    async fn sum_by_user(&self, user_id: UserId) -> Result<f64, CostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: Option<f64> = costs::table
            .filter(costs::user_id.eq(user_id.get()))
            .select(diesel::dsl::sum(costs::amount))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(total.unwrap_or_default())
    }
}
