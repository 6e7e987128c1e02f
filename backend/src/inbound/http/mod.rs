//! HTTP inbound adapter exposing REST endpoints.

pub mod about;
pub mod costs;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the `/api` handlers and extractor error handlers on `cfg`.
///
/// Extractor failures (malformed JSON, bad query strings) are answered with
/// the same error envelope as domain failures.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(validation::query_error_handler))
        .app_data(web::PathConfig::default().error_handler(validation::path_error_handler))
        .service(
            web::scope("/api")
                .service(costs::add_cost)
                .service(costs::monthly_report)
                .service(users::user_summary)
                .service(about::about),
        );
}
