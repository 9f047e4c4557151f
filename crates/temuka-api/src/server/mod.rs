//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use temuka_common::{AppConfig, AppError};
use temuka_db::{
    create_pool, run_migrations, MemoryStore, PgCommunityRepository, PgHealthCheck,
    PgPostRepository, PgUserRepository, PoolSettings,
};
use temuka_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// `DATABASE_URL` value that selects the in-process store
pub const MEMORY_DATABASE_URL: &str = "memory";

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let router = apply_rate_limit(create_router(), &config.rate_limit)?;
    let router = apply_middleware(router.merge(health_routes()), config);

    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let service_context = if config.database.url == MEMORY_DATABASE_URL {
        warn!("Using in-memory store; data is lost on shutdown");
        memory_context(MemoryStore::new())?
    } else {
        postgres_context(&config).await?
    };

    Ok(AppState::new(service_context, config))
}

/// Service context backed by a [`MemoryStore`]
pub fn memory_context(store: MemoryStore) -> Result<ServiceContext, AppError> {
    ServiceContextBuilder::new()
        .community_repo(Arc::new(store.clone()))
        .user_repo(Arc::new(store.clone()))
        .post_repo(Arc::new(store.clone()))
        .health(Arc::new(store))
        .build()
        .map_err(AppError::config)
}

async fn postgres_context(config: &AppConfig) -> Result<ServiceContext, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolSettings::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        info!(dir = %config.database.migrations_dir, "Running database migrations");
        run_migrations(&pool, &config.database.migrations_dir)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
    }

    ServiceContextBuilder::new()
        .community_repo(Arc::new(PgCommunityRepository::new(pool.clone())))
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .post_repo(Arc::new(PgPostRepository::new(pool.clone())))
        .health(Arc::new(PgHealthCheck::new(pool)))
        .build()
        .map_err(AppError::config)
}

/// Run the HTTP server on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read local address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}
