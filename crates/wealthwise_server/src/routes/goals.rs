use axum::{Router, routing::post};

use crate::handlers;
use crate::state::Engine;

pub fn goal_routes() -> Router<Engine> {
    Router::new().route("/goals/{id}/simulate", post(handlers::simulate_goal))
}
