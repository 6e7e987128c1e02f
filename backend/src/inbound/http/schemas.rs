//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape so the generated document matches
//! what handlers serialise.

#![expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing store is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "invalid category: toys")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level context such as `{"field": "category", "code": "invalid_category"}`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Category`].
#[derive(ToSchema)]
#[schema(as = Category)]
#[schema(rename_all = "lowercase")]
pub enum CategorySchema {
    Food,
    Health,
    Housing,
    Sport,
    Education,
}

/// OpenAPI schema for [`crate::domain::Cost`].
#[derive(ToSchema)]
#[schema(as = Cost)]
pub struct CostSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    /// Owning user.
    #[schema(example = 123_123)]
    userid: i64,
    #[schema(example = "groceries")]
    description: String,
    category: CategorySchema,
    #[schema(example = 50.0)]
    sum: f64,
    /// RFC 3339 timestamp.
    #[schema(example = "2025-03-05T00:00:00Z")]
    date: String,
}

/// OpenAPI schema for [`crate::domain::ReportEntry`].
#[derive(ToSchema)]
#[schema(as = ReportEntry)]
pub struct ReportEntrySchema {
    #[schema(example = 50.0)]
    sum: f64,
    #[schema(example = "groceries")]
    description: String,
    /// Day of month (UTC).
    #[schema(example = 5)]
    day: u32,
}

/// OpenAPI schema for [`crate::domain::MonthlyReport`].
#[derive(ToSchema)]
#[schema(as = MonthlyReport)]
pub struct MonthlyReportSchema {
    #[schema(example = 123_123)]
    userid: i64,
    #[schema(example = 2025)]
    year: i32,
    #[schema(example = 3)]
    month: u32,
    /// Five single-key objects in the order food, health, housing, sport,
    /// education.
    costs: Vec<BTreeMap<String, Vec<ReportEntrySchema>>>,
}

/// OpenAPI schema for [`crate::domain::UserSummary`].
#[derive(ToSchema)]
#[schema(as = UserSummary)]
pub struct UserSummarySchema {
    #[schema(example = 123_123)]
    id: i64,
    #[schema(example = "mosh")]
    first_name: String,
    #[schema(example = "israeli")]
    last_name: String,
    /// Sum of every cost recorded for the user.
    #[schema(example = 80.0)]
    total: f64,
}

/// OpenAPI schema for [`crate::domain::TeamMember`].
#[derive(ToSchema)]
#[schema(as = TeamMember)]
pub struct TeamMemberSchema {
    #[schema(example = "Shirly")]
    first_name: String,
    #[schema(example = "Avrahamoff")]
    last_name: String,
}
