//! # postcheck Binary
//!
//! Serves the payload validation API.

mod settings;

use actix_web::{App, HttpServer};
use pc_api::{configure_routes, middleware};

use crate::settings::Settings;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::load()?;
    let json_limit = settings.json_limit;

    log::info!(
        "postcheck starting on http://{}:{} (json limit {} bytes)",
        settings.host,
        settings.port,
        json_limit
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::standard_middleware())
            .wrap(middleware::cors_policy())
            .configure(|cfg| configure_routes(cfg, json_limit))
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await?;

    Ok(())
}
