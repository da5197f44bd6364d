use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::session::SessionView;

/// Request body carrying the names box contents
#[derive(Debug, Deserialize)]
pub struct PendingTextRequest {
    #[serde(default)]
    pub text: String,
}

/// Live count of valid names in the box
#[derive(Debug, Serialize)]
pub struct PendingCountResponse {
    pub count: usize,
}

/// Request body for changing the team size
///
/// Accepts a number or a string so non-integer input reaches domain
/// validation instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct TeamSizeRequest {
    pub team_size: Value,
}

/// Current session snapshot
///
/// GET /api/roster
pub async fn get_roster(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session.lock().await;
    Json(session.view())
}

/// Store the names box contents and return the live count
///
/// POST /api/pending
pub async fn update_pending(
    State(state): State<AppState>,
    Json(req): Json<PendingTextRequest>,
) -> Json<PendingCountResponse> {
    let mut session = state.session.lock().await;
    session.set_pending_text(req.text);

    Json(PendingCountResponse {
        count: session.pending_count(),
    })
}

/// Submit names and distribute them into teams
///
/// POST /api/players
pub async fn add_players(
    State(state): State<AppState>,
    Json(req): Json<PendingTextRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let mut session = state.session.lock().await;
    session.set_pending_text(req.text);
    session.submit()?;

    Ok(Json(session.view()))
}

/// Change the team size used for later submissions
///
/// PUT /api/team-size
pub async fn change_team_size(
    State(state): State<AppState>,
    Json(req): Json<TeamSizeRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let raw = match &req.team_size {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let mut session = state.session.lock().await;
    session.set_team_size(&raw)?;

    Ok(Json(session.view()))
}
