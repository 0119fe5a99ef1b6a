//! # labhubd — labhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), then close the pool
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use labhub_adapter_http_axum::router;
use labhub_adapter_http_axum::state::AppState;
use labhub_adapter_storage_sqlite_sqlx::{
    SqliteFacultyRepository, SqliteLaboratoryRepository, SqlitePublicationRepository,
    SqliteResearcherRepository,
};
use labhub_app::services::faculty_service::FacultyService;
use labhub_app::services::laboratory_service::LaboratoryService;
use labhub_app::services::publication_service::PublicationService;
use labhub_app::services::researcher_service::ResearcherService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    let filter = EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {:?}: {err}", config.logging.filter);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Database
    let db = labhub_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database.url.clone(),
        max_connections: config.database.max_connections,
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let researcher_repo = SqliteResearcherRepository::new(pool.clone());
    let faculty_repo = SqliteFacultyRepository::new(pool.clone());
    let publication_repo = SqlitePublicationRepository::new(pool.clone());
    let laboratory_repo = SqliteLaboratoryRepository::new(pool);

    // HTTP
    let state = AppState::new(
        ResearcherService::new(researcher_repo),
        FacultyService::new(faculty_repo),
        PublicationService::new(publication_repo),
        LaboratoryService::new(laboratory_repo),
    );
    let mut app = router::build(state);
    if let Some(cors) = router::cors_layer(&config.server.cors_origins) {
        app = app.layer(cors);
    }

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "labhubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("database pool closed, bye");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
