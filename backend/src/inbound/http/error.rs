//! HTTP adapter mapping for domain errors.
//!
//! Each [`ErrorCode`] maps to one status: `invalid_request` 400, `not_found`
//! 404, `service_unavailable` 503 and `internal_error` 500. Internal errors
//! reach clients with a generic message; the full message is logged with the
//! request's trace id.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{debug, error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Body sent to the client: internal errors lose message and details but
/// keep the trace id.
fn client_body(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    match error.trace_id() {
        Some(id) => Error::internal(REDACTED_MESSAGE).with_trace_id(id.to_owned()),
        None => Error::internal(REDACTED_MESSAGE),
    }
}

fn log_failure(error: &Error) {
    let trace_id = error.trace_id();
    match error.code() {
        ErrorCode::InternalError => {
            error!(message = error.message(), trace_id, "request failed");
        }
        ErrorCode::ServiceUnavailable => {
            warn!(message = error.message(), trace_id, "backing store unavailable");
        }
        ErrorCode::InvalidRequest | ErrorCode::NotFound => {
            debug!(code = ?error.code(), message = error.message(), trace_id, "request rejected");
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        log_failure(self);

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(client_body(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(REDACTED_MESSAGE)
    }
}
