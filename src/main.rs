use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loanledger::config::{Config, DatabaseConfig};
use loanledger::core::RepositoryGateway;
use loanledger::gateway::MySqlGateway;
use loanledger::middleware::RequestId;
use loanledger::modules;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    let json_logs = config.app.json_logs();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("loanledger={},actix_web=info", config.app.log_level).into()
            }),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting LoanLedger");
    tracing::info!(env = %config.app.env, "Environment");
    tracing::info!(address = %config.server.bind_address(), "Server binding");

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        min_connections = config.database.pool_size,
        max_connections = config.database.max_connections,
        "Database pool initialized"
    );

    if config.database.run_migrations {
        DatabaseConfig::migrate(&db_pool)
            .await
            .context("Failed to run database migrations")?;
        tracing::info!("Database migrations applied");
    }

    let gateway: Arc<dyn RepositoryGateway> = Arc::new(MySqlGateway::new(db_pool));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::Data::from(gateway.clone()))
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
