//! # pc-api
//!
//! HTTP surface of the payload validator.

pub mod error;
pub mod handlers;
pub mod middleware;

use actix_web::web;
use pc_core::{CommentInput, PostInput, ShareInput};

pub use error::ApiError;

/// Default JSON body ceiling, in bytes.
pub const DEFAULT_JSON_LIMIT: usize = 64 * 1024;

/// Configures the validation routes.
///
/// # Developer Note
/// Registered on a scope so the binary can mount the API under a prefix
/// (e.g. /api/v1/) without touching the handlers.
pub fn configure_routes(cfg: &mut web::ServiceConfig, json_limit: usize) {
    cfg.app_data(handlers::json_config(json_limit)).service(
        web::scope("")
            .route("/health", web::get().to(handlers::health))
            .route(
                "/posts/validate",
                web::post().to(handlers::validate_payload::<PostInput>),
            )
            .route(
                "/comments/validate",
                web::post().to(handlers::validate_payload::<CommentInput>),
            )
            .route(
                "/shares/validate",
                web::post().to(handlers::validate_payload::<ShareInput>),
            ),
    );
}
