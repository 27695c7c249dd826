//! HTTP adapter mapping for domain errors.
//!
//! Keeps [`Error`] transport agnostic while giving handlers consistent JSON
//! responses. Extractor failures (malformed JSON, missing fields, non-integer
//! path ids) are routed through [`json_error_handler`] and
//! [`path_error_handler`] so they share the validation envelope.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, SellerValidationError, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(message = self.message(), "request failed with internal error");
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<SellerValidationError> for Error {
    fn from(err: SellerValidationError) -> Self {
        Self::validation_failed(err.to_string()).with_details(json!({
            "field": err.field(),
            "code": err.reason(),
        }))
    }
}

/// Error handler for `web::JsonConfig`.
///
/// Missing, null and mistyped fields all surface as deserialisation errors.
#[expect(
    clippy::needless_pass_by_value,
    reason = "signature fixed by JsonConfig::error_handler"
)]
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    let reason = match &err {
        JsonPayloadError::ContentType => "unsupported_content_type",
        JsonPayloadError::Deserialize(_) => "invalid_body",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "body_too_large"
        }
        _ => "unreadable_body",
    };
    Error::validation_failed(err.to_string())
        .with_details(json!({ "code": reason }))
        .into()
}

/// Error handler for `web::PathConfig`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "signature fixed by PathConfig::error_handler"
)]
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected path parameters");
    Error::validation_failed(err.to_string())
        .with_details(json!({ "field": "seller_id", "code": "invalid_path" }))
        .into()
}
