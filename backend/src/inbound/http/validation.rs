//! Shared validation helpers for inbound HTTP adapters.

use std::str::FromStr;

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::json;

use crate::domain::{Error, ReportPeriodError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidParameter,
    InvalidDate,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidParameter => "invalid_parameter",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("missing required field: {name}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_parameter_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must be an integer"))
        .with_value(ErrorCode::InvalidParameter, value)
}

/// Parse a required integer query or path parameter.
pub(crate) fn parse_integer<T: FromStr>(value: Option<&str>, field: FieldName) -> Result<T, Error> {
    let raw = value.ok_or_else(|| missing_field_error(field))?;
    raw.trim()
        .parse::<T>()
        .map_err(|_| invalid_parameter_error(field, raw))
}

/// Map an out-of-range report period onto the offending parameter.
pub(crate) fn invalid_period_error(error: &ReportPeriodError) -> Error {
    let (field, value) = match error {
        ReportPeriodError::MonthOutOfRange { month } => ("month", month.to_string()),
        ReportPeriodError::YearOutOfRange { year } => ("year", year.to_string()),
    };
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidParameter.as_str(),
    }))
}

/// Parse an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
pub(crate) fn parse_cost_date(value: &str, field: FieldName) -> Result<DateTime<Utc>, Error> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| {
            let name = field.as_str();
            ValidationError::new(
                field,
                format!("{name} must be an RFC 3339 timestamp or YYYY-MM-DD date"),
            )
            .with_value(ErrorCode::InvalidDate, value)
        })
}

fn invalid_body_error(message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "code": ErrorCode::InvalidBody.as_str(),
    }))
}

/// `JsonConfig` error handler returning the domain error envelope.
pub(crate) fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    invalid_body_error(format!("invalid JSON body: {err}")).into()
}

/// `QueryConfig` error handler returning the domain error envelope.
pub(crate) fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    invalid_body_error(format!("invalid query string: {err}")).into()
}

/// `PathConfig` error handler returning the domain error envelope.
pub(crate) fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    invalid_body_error(format!("invalid path: {err}")).into()
}
