//! Shared mapping from pool and Diesel failures to repository port errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{CostRepositoryError, UserRepositoryError};

use super::pool::PoolError;

/// Port error enums with connection and query variants.
pub(crate) trait RepositoryErrorKind: Sized {
    fn connection(message: String) -> Self;
    fn query(message: String) -> Self;
}

impl RepositoryErrorKind for CostRepositoryError {
    fn connection(message: String) -> Self {
        Self::Connection { message }
    }

    fn query(message: String) -> Self {
        Self::Query { message }
    }
}

impl RepositoryErrorKind for UserRepositoryError {
    fn connection(message: String) -> Self {
        Self::Connection { message }
    }

    fn query(message: String) -> Self {
        Self::Query { message }
    }
}

/// Pool failures always mean the database could not be reached.
pub(crate) fn map_pool_error<E: RepositoryErrorKind>(error: PoolError) -> E {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => E::connection(message),
    }
}

/// Map Diesel errors, logging the driver detail and returning a redacted
/// message.
pub(crate) fn map_diesel_error<E: RepositoryErrorKind>(error: DieselError) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => E::query("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => E::query("database query error".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            E::connection("database connection error".to_owned())
        }
        _ => E::query("database error".to_owned()),
    }
}
