use axum::{extract::State, http::StatusCode, response::Html, Form};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::view::render_page;

/// Form body for the "Add Players" button
#[derive(Debug, Deserialize)]
pub struct AddPlayersForm {
    #[serde(default)]
    pub names: String,
}

/// Form body for the team size field
#[derive(Debug, Deserialize)]
pub struct TeamSizeForm {
    #[serde(default)]
    pub team_size: String,
    /// Current names box contents, so re-rendering keeps unsent typing
    pub names: Option<String>,
}

/// Render the roster page
///
/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_page(&session.view()))
}

/// Submit the names box and re-render
///
/// POST /players
pub async fn add_players(
    State(state): State<AppState>,
    Form(form): Form<AddPlayersForm>,
) -> (StatusCode, Html<String>) {
    let mut session = state.session.lock().await;
    session.set_pending_text(form.names);

    let status = match session.submit() {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };

    (status, Html(render_page(&session.view())))
}

/// Change the team size and re-render
///
/// POST /team-size
pub async fn change_team_size(
    State(state): State<AppState>,
    Form(form): Form<TeamSizeForm>,
) -> (StatusCode, Html<String>) {
    let mut session = state.session.lock().await;
    if let Some(names) = form.names {
        session.set_pending_text(names);
    }

    let status = match session.set_team_size(&form.team_size) {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };

    (status, Html(render_page(&session.view())))
}
