//! postcheck/crates/pc-api/src/middleware.rs Middleware
//!
//! Access logging and CORS for the validation API.

use actix_cors::Cors;
use actix_web::middleware::Logger;

// Standard access log:
// remote-ip "request-line" status-code response-size "referrer" "user-agent" duration
pub fn standard_middleware() -> Logger {
    Logger::default()
}

// Clients call us from the web app origin, which is not ours.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_header(actix_web::http::header::CONTENT_TYPE)
        .max_age(3600)
}
