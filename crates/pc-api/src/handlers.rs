//! # pc-api Handlers
//!
//! Hands a decoded JSON body to the core validator and echoes the accepted
//! payload back. Nothing is stored here; the caller persists what we accept.

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use pc_core::Validate;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::ApiError;

/// Validates any submission shape: posts, comments and shares share this handler.
pub async fn validate_payload<T>(body: web::Json<T>) -> Result<HttpResponse, ApiError>
where
    T: Validate + DeserializeOwned,
    T::Output: Serialize,
{
    let payload = body.validate().map_err(|err| {
        log::debug!("rejected payload on field `{}`: {}", err.field, err.message);
        err
    })?;
    Ok(HttpResponse::Ok().json(payload))
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// JSON extractor settings: size ceiling plus our own error body.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(malformed_body)
}

fn malformed_body(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("unreadable body on {}: {}", req.path(), err);
    ApiError::MalformedBody(err.to_string()).into()
}
