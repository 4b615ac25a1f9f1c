//! EcoQuest API Server

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ecoquest=debug".parse()?)
                .add_directive("api=debug".parse()?)
                .add_directive("engine=debug".parse()?)
                .add_directive("store=debug".parse()?),
        )
        .init();

    info!("🌱 Starting EcoQuest API");

    // Load configuration
    let config = common::Config::from_env();

    // Open the ledger store
    let ledger = store::open();

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), ledger));

    // Build API router with state
    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/users", post(routes::users::register))
        .route("/api/users/:id", get(routes::users::get))
        .route("/api/users/:id/standing", get(routes::users::standing))
        .route("/api/users/:id/bills", get(routes::users::bills))
        .route(
            "/api/users/:id/notifications",
            get(routes::notifications::list),
        )
        .route(
            "/api/users/:id/notifications/:nid/read",
            post(routes::notifications::mark_read),
        )
        .route("/api/actions", post(routes::actions::record))
        .route("/api/bills", post(routes::bills::record))
        .route("/api/leaderboard", get(routes::leaderboard::global))
        .route(
            "/api/rewards",
            get(routes::rewards::list).post(routes::rewards::create),
        )
        .route("/api/rewards/:id/stock", put(routes::rewards::update_stock))
        .route("/api/rewards/:id/redeem", post(routes::rewards::redeem))
        .route("/api/admin/points", post(routes::admin::adjust_points))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("🚀 Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
