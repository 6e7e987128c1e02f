//! Cost ingestion and monthly report handlers.
//!
//! ```text
//! POST /api/add {"userid":123123,"description":"milk","category":"food","sum":8}
//! GET /api/report?id=123123&year=2025&month=3
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{AddCostRequest, MonthlyReport, ReportPeriod, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CostSchema, ErrorSchema, MonthlyReportSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, invalid_period_error, parse_cost_date, parse_integer,
};

/// Request body for `POST /api/add`.
///
/// Every field is optional at the transport level so missing fields are
/// reported with the domain's validation details.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AddCostBody {
    /// Owning user.
    #[schema(example = 123_123)]
    pub userid: Option<i64>,
    /// What the money was spent on.
    #[schema(example = "milk")]
    pub description: Option<String>,
    /// One of `food`, `health`, `housing`, `sport`, `education`.
    #[schema(example = "food")]
    pub category: Option<String>,
    /// Amount spent.
    #[schema(example = 8.0)]
    pub sum: Option<f64>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`; defaults to now when absent or
    /// blank.
    #[schema(example = "2025-03-05")]
    pub date: Option<String>,
}

impl AddCostBody {
    fn into_request(self) -> ApiResult<AddCostRequest> {
        let date = self
            .date
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| parse_cost_date(raw, FieldName::new("date")))
            .transpose()?;
        Ok(AddCostRequest {
            user_id: self.userid.map(UserId::new),
            description: self.description,
            category: self.category,
            sum: self.sum,
            date,
        })
    }
}

/// Record a cost for a user.
#[utoipa::path(
    post,
    path = "/api/add",
    request_body = AddCostBody,
    responses(
        (status = 201, description = "Cost recorded", body = CostSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["costs"],
    operation_id = "addCost"
)]
#[post("/add")]
pub async fn add_cost(
    state: web::Data<HttpState>,
    payload: web::Json<AddCostBody>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner().into_request()?;
    let cost = state.costs.add_cost(request).await?;
    Ok(HttpResponse::Created().json(cost))
}

/// Query parameters for `GET /api/report`, kept as strings so parse failures
/// surface as field-level validation errors.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportParams {
    /// User identifier.
    pub id: Option<String>,
    /// Calendar year.
    pub year: Option<String>,
    /// Calendar month, 1 to 12.
    pub month: Option<String>,
}

fn parse_report_params(params: &ReportParams) -> ApiResult<(UserId, ReportPeriod)> {
    let user_id = parse_integer::<i64>(params.id.as_deref(), FieldName::new("id"))?;
    let year = parse_integer::<i32>(params.year.as_deref(), FieldName::new("year"))?;
    let month = parse_integer::<u32>(params.month.as_deref(), FieldName::new("month"))?;
    let period = ReportPeriod::new(year, month).map_err(|err| invalid_period_error(&err))?;
    Ok((UserId::new(user_id), period))
}

/// Costs for one user and month grouped by category.
#[utoipa::path(
    get,
    path = "/api/report",
    params(ReportParams),
    responses(
        (status = 200, description = "Monthly report", body = MonthlyReportSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["costs"],
    operation_id = "monthlyReport"
)]
#[get("/report")]
pub async fn monthly_report(
    state: web::Data<HttpState>,
    query: web::Query<ReportParams>,
) -> ApiResult<web::Json<MonthlyReport>> {
    let (user_id, period) = parse_report_params(&query)?;
    let report = state.reports.monthly_report(user_id, period).await?;
    Ok(web::Json(report))
}

#[cfg(test)]
#[path = "costs_tests.rs"]
mod tests;
