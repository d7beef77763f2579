use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/overview", get(handlers::overview))
        .route("/api/habits", post(handlers::create_habit))
        .route("/api/habits/:id/toggle", post(handlers::toggle_completion))
        .route("/api/groups", post(handlers::create_group))
        .with_state(state)
}
