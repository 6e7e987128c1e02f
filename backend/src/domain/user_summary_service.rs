//! User lookup combined with a live total from the cost store.

use std::sync::Arc;

use async_trait::async_trait;

use super::service_error_mapping::{map_cost_error, map_user_error};
use crate::domain::ports::{CostRepository, UserRepository, UserSummaryQuery};
use crate::domain::{Error, UserId, UserSummary};

/// Service implementing [`UserSummaryQuery`].
///
/// The total is summed from the cost store on every call; the user record's
/// denormalised total is not consulted.
#[derive(Clone)]
pub struct UserSummaryService<C, U> {
    costs: Arc<C>,
    users: Arc<U>,
}

impl<C, U> UserSummaryService<C, U> {
    /// Create the service.
    pub fn new(costs: Arc<C>, users: Arc<U>) -> Self {
        Self { costs, users }
    }
}

#[async_trait]
impl<C, U> UserSummaryQuery for UserSummaryService<C, U>
where
    C: CostRepository,
    U: UserRepository,
{
    async fn summary(&self, user_id: UserId) -> Result<UserSummary, Error> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(format!("user {user_id} not found")))?;

        let total = self
            .costs
            .sum_by_user(user_id)
            .await
            .map_err(map_cost_error)?;

        Ok(UserSummary::from_user(&user, total))
    }
}
