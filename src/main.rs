//! Shear Magic Server - barbershop booking API

use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shearmagic_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::{auth::hash_password, Services},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("shearmagic_server={},tower_http=debug", config.logging.level).into());

    let json_logs = config.logging.format == "json";
    tracing_subscriber::registry()
        .with(filter)
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Starting Shear Magic Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await?;

    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!("Database migrations completed");

    let repository = Repository::new(pool);

    if config.auth.seed_password == "shearmagic123" {
        tracing::warn!("auth.seed_password is the default. Set SHEARMAGIC__AUTH__SEED_PASSWORD in production.");
    }
    let seed_hash = hash_password(&config.auth.seed_password)?;
    if repository.seed_defaults(&seed_hash).await? {
        tracing::info!("Seeded barbers, services and schedules");
    }

    let services = Services::new(repository, config.auth, config.email, config.notifications)?;

    let state = AppState {
        services: Arc::new(services),
    };

    let app = api::router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
