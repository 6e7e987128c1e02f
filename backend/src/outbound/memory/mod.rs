//! In-process stores used when no database is configured.
//!
//! Both repositories keep their data behind a `Mutex` and lose it on
//! restart. They honour the same contracts as the Diesel adapters: costs are
//! returned in date order and ids are assigned sequentially from 1.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{
    CostRepository, CostRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{Cost, CostId, NewCost, User, UserId};

#[derive(Debug, Default)]
struct CostState {
    last_id: i64,
    costs: Vec<Cost>,
}

/// Vector-backed [`CostRepository`].
#[derive(Debug, Default)]
pub struct InMemoryCostRepository {
    state: Mutex<CostState>,
}

impl InMemoryCostRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, CostState>, CostRepositoryError> {
        self.state
            .lock()
            .map_err(|_| CostRepositoryError::query("cost store lock poisoned"))
    }
}

#[async_trait]
impl CostRepository for InMemoryCostRepository {
    async fn insert(&self, cost: &NewCost) -> Result<Cost, CostRepositoryError> {
        let mut state = self.lock()?;
        state.last_id += 1;
        let stored = Cost::from_new(CostId::new(state.last_id), cost.clone());
        state.costs.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_user_and_range(
        &self,
        user_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Cost>, CostRepositoryError> {
        let state = self.lock()?;
        let mut matching: Vec<Cost> = state
            .costs
            .iter()
            .filter(|cost| cost.user_id == user_id && cost.date >= start && cost.date < end)
            .cloned()
            .collect();
        matching.sort_by_key(|cost| (cost.date, cost.id));
        Ok(matching)
    }

    async fn sum_by_user(&self, user_id: UserId) -> Result<f64, CostRepositoryError> {
        let state = self.lock()?;
        Ok(state
            .costs
            .iter()
            .filter(|cost| cost.user_id == user_id)
            .map(|cost| cost.sum)
            .sum())
    }
}

/// Map-backed [`UserRepository`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<UserId, User>>, UserRepositoryError> {
        self.users
            .lock()
            .map_err(|_| UserRepositoryError::query("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn upsert(&self, user: &User) -> Result<(), UserRepositoryError> {
        self.lock()?.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.lock()?.get(&id).cloned())
    }

    async fn update_total(&self, id: UserId, total: f64) -> Result<(), UserRepositoryError> {
        let mut users = self.lock()?;
        if let Some(user) = users.remove(&id) {
            users.insert(id, user.with_total(total));
        }
        Ok(())
    }
}
