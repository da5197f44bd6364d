// API layer module (adapters for the page and JSON endpoints)

pub mod errors;
pub mod handlers;
pub mod state;
pub mod view;

use axum::{
    routing::{get, post, put},
    Router,
};

use handlers::{page, roster};
pub use state::AppState;

/// Builds the application router over a session
pub fn router(state: AppState) -> Router {
    Router::new()
        // Page
        .route("/", get(page::index))
        .route("/players", post(page::add_players))
        .route("/team-size", post(page::change_team_size))
        // Health check
        .route("/health", get(handlers::health_check))
        // JSON routes
        .route("/api/roster", get(roster::get_roster))
        .route("/api/pending", post(roster::update_pending))
        .route("/api/players", post(roster::add_players))
        .route("/api/team-size", put(roster::change_team_size))
        .fallback(handlers::not_found)
        .with_state(state)
}
