//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every `/api` endpoint plus the health probes
//! - **Schemas**: wrappers from [`crate::inbound::http::schemas`] describing
//!   the wire shape of domain types without coupling them to utoipa
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::costs::AddCostBody;
use crate::inbound::http::schemas::{
    CategorySchema, CostSchema, ErrorCodeSchema, ErrorSchema, MonthlyReportSchema,
    ReportEntrySchema, TeamMemberSchema, UserSummarySchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cost manager API",
        description = "Record personal costs, read monthly reports grouped by category and user totals."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::costs::add_cost,
        crate::inbound::http::costs::monthly_report,
        crate::inbound::http::users::user_summary,
        crate::inbound::http::about::about,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AddCostBody,
        CategorySchema,
        CostSchema,
        ErrorCodeSchema,
        ErrorSchema,
        MonthlyReportSchema,
        ReportEntrySchema,
        TeamMemberSchema,
        UserSummarySchema
    )),
    tags(
        (name = "costs", description = "Cost ingestion and monthly reports"),
        (name = "users", description = "User summaries"),
        (name = "about", description = "Team information"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
