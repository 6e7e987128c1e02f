//! User summary handler.
//!
//! ```text
//! GET /api/users/123123
//! ```

use actix_web::{get, web};

use crate::domain::{UserId, UserSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSummarySchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_integer};

/// A user's names and the live total of their costs.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User summary", body = UserSummarySchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "userSummary"
)]
#[get("/users/{id}")]
pub async fn user_summary(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserSummary>> {
    let id = parse_integer::<i64>(Some(path.as_str()), FieldName::new("id"))?;
    let summary = state.users.summary(UserId::new(id)).await?;
    Ok(web::Json(summary))
}
