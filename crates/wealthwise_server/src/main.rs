use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod validation;

use state::{Engine, EngineConfig};

fn app(engine: Engine) -> Router {
    Router::new()
        .route("/", get(|| async { "WealthWise API Server" }))
        .route("/health", get(handlers::health_check))
        .merge(routes::goal_routes())
        .merge(routes::portfolio_routes())
        .with_state(engine)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wealthwise_server=info,tower_http=info")),
        )
        .init();

    let engine: Engine = Arc::new(EngineConfig::baseline());
    let app = app(engine);

    let addr =
        std::env::var("WEALTHWISE_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
