use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::Engine;

pub fn portfolio_routes() -> Router<Engine> {
    Router::new()
        .route("/portfolio/optimize", post(handlers::optimize_portfolio))
        .route("/portfolio/rebalance", post(handlers::rebalance_portfolio))
        .route("/portfolio/frontier", get(handlers::efficient_frontier))
}
