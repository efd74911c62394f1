//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::application::services::{InviteService, PgInviteService};
use crate::config::Settings;
use crate::domain::services::RuleValidator;
use crate::infrastructure::{database, metrics, repositories::PgInviteRepository};
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};
use crate::shared::messages::Locale;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub invites: Arc<dyn InviteService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Language for response messages.
    pub fn locale(&self) -> Locale {
        self.settings.locale
    }
}

/// Full router with the trace and CORS layers applied.
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);
    routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(create_trace_layer())
            .layer(cors),
    )
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        // Create database pool
        let db = database::create_pool(&settings.database)
            .await
            .context("failed to connect to the database")?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db)
                .await
                .context("failed to apply database migrations")?;
            tracing::info!("Database migrations applied");
        }
        metrics::record_pool(&db);

        let invites: Arc<dyn InviteService> = Arc::new(PgInviteService::new(
            Arc::new(PgInviteRepository::new(db.clone())),
            Arc::new(RuleValidator::new()),
        ));

        // Create app state
        let state = AppState {
            db,
            invites,
            settings: Arc::new(settings.clone()),
        };

        let router = build_router(state);

        // Bind to address
        let listener = TcpListener::bind(settings.server_addr())
            .await
            .with_context(|| format!("failed to bind {}", settings.server_addr()))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

