//! Static team listing.
//!
//! ```text
//! GET /api/about
//! ```

use actix_web::{get, web};

use crate::domain::TeamMember;
use crate::inbound::http::schemas::TeamMemberSchema;
use crate::inbound::http::state::HttpState;

/// The people behind the service.
#[utoipa::path(
    get,
    path = "/api/about",
    responses(
        (status = 200, description = "Team members", body = [TeamMemberSchema])
    ),
    tags = ["about"],
    operation_id = "about"
)]
#[get("/about")]
pub async fn about(state: web::Data<HttpState>) -> web::Json<Vec<TeamMember>> {
    web::Json(state.about.team())
}
