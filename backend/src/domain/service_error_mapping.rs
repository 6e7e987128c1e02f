//! Mapping from port and validation errors to domain [`Error`] values.

use serde_json::json;

use crate::domain::ports::{CostRepositoryError, UserRepositoryError};
use crate::domain::{CostValidationError, Error};

pub(super) fn map_cost_error(error: CostRepositoryError) -> Error {
    match error {
        CostRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("cost repository unavailable: {message}"))
        }
        CostRepositoryError::Query { message } => {
            Error::internal(format!("cost repository error: {message}"))
        }
    }
}

pub(super) fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

pub(super) fn map_validation_error(error: CostValidationError) -> Error {
    let details = match &error {
        CostValidationError::MissingField { field } => json!({
            "field": field,
            "code": "missing_field",
        }),
        CostValidationError::EmptyDescription => json!({
            "field": "description",
            "code": "empty_description",
        }),
        CostValidationError::InvalidCategory { value } => json!({
            "field": "category",
            "value": value,
            "code": "invalid_category",
        }),
    };
    Error::invalid_request(error.to_string()).with_details(details)
}
