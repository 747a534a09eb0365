//! # ApiError
//!
//! Maps validation failures and unreadable bodies onto `400 Bad Request`
//! with a `{ "field", "message" }` JSON body.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use pc_core::ValidationError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The payload parsed but broke a field rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Not JSON, wrong field types, wrong content type, or over the size limit
    #[error("malformed body: {0}")]
    MalformedBody(String),
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    field: Option<&'static str>,
    message: &'a str,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(err) => ErrorBody {
                field: Some(err.field),
                message: &err.message,
            },
            ApiError::MalformedBody(reason) => ErrorBody {
                field: None,
                message: reason,
            },
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_bad_request() {
        let err: ApiError = ValidationError::new("text", "text too long").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "text: text too long");
    }

    #[test]
    fn malformed_body_maps_to_bad_request() {
        let err = ApiError::MalformedBody("EOF while parsing".into());
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
    }
}
