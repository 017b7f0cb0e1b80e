//! # CineCraft Connect API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use cinecraft_core::ports::{PasswordService, RateLimiter, TokenService};
use cinecraft_infra::{Argon2PasswordService, JwtTokenService, KeyedRateLimiter};

mod config;
mod handlers;
mod middleware;
mod state;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration; the database is mandatory, so this fails fast.
    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    tracing::info!(
        "Starting CineCraft Connect API Server on {}:{}",
        config.host,
        config.port
    );

    let pool = cinecraft_infra::init_pool(&config.database)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    // Build application state and the services shared across workers.
    let state = AppState::new(pool);
    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());
    let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
    let auth_limiter: Arc<dyn RateLimiter> = Arc::new(KeyedRateLimiter::new(config.auth_rate_limit.clone()));

    // Start HTTP server
    HttpServer::new(move || {
        let auth_limiter = auth_limiter.clone();
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_service.clone()))
            .app_data(web::Data::new(password_service.clone()))
            .configure(move |cfg| handlers::configure_routes(cfg, auth_limiter))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,cinecraft_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
