use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::roster::TeamSize;
use crate::session::RosterSession;

/// Shared handler state
///
/// One session per server process. The mutex serializes requests so each
/// user action runs to completion before the next one starts.
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: Arc<Mutex<RosterSession>>,
}

impl AppState {
    pub fn new(team_size: TeamSize) -> Self {
        Self {
            session: Arc::new(Mutex::new(RosterSession::new(team_size))),
        }
    }
}
