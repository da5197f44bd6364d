use serde::Serialize;

use crate::domain::roster::{
    parse_candidates, pending_count, Roster, RosterError, RosterEvent, RosterResult, TeamSize,
};

/// Roster manager for one interactive session
///
/// Owns the committed roster plus the uncommitted form state: the text in
/// the names box, the team size field, and the last error shown. Every
/// operation runs to completion and either fully applies or leaves the
/// roster untouched.
#[derive(Debug, Clone, Default)]
pub struct RosterSession {
    roster: Roster,
    pending_text: String,
    team_size: TeamSize,
    error_message: Option<String>,
}

impl RosterSession {
    pub fn new(team_size: TeamSize) -> Self {
        Self {
            team_size,
            ..Self::default()
        }
    }

    /// Replaces the text in the names box
    pub fn set_pending_text(&mut self, text: impl Into<String>) {
        self.pending_text = text.into();
    }

    /// Applies raw input from the team size field
    ///
    /// Non-integer input is rejected and shown as the current error; the
    /// previous size stays in effect. Values below 1 are clamped to 1.
    /// Existing teams are not touched either way.
    pub fn set_team_size(&mut self, raw: &str) -> RosterResult<TeamSize> {
        match TeamSize::parse(raw) {
            Ok((size, clamped)) => {
                if clamped {
                    tracing::warn!(input = raw.trim(), "Team size below 1, clamped to 1");
                }
                tracing::info!(from = %self.team_size, to = %size, "Team size changed");
                self.team_size = size;
                Ok(size)
            }
            Err(err) => {
                tracing::warn!(input = raw.trim(), "Rejected team size input");
                self.error_message = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Submits the names box
    ///
    /// On success the new players are distributed, the names box is cleared,
    /// and any shown error goes away. On failure the roster and the names
    /// box are unchanged and the error message is kept for display.
    pub fn submit(&mut self) -> RosterResult<Vec<RosterEvent>> {
        let candidates = parse_candidates(&self.pending_text);

        match self.roster.distribute(self.team_size, candidates) {
            Ok((roster, events)) => {
                for event in &events {
                    tracing::debug!(team = event.team_index() + 1, ?event, "Roster updated");
                }
                let added: usize = events.iter().map(RosterEvent::placed).sum();
                self.roster = roster;
                self.pending_text.clear();
                self.error_message = None;
                tracing::info!(
                    added,
                    players = self.roster.player_count(),
                    teams = self.roster.teams().len(),
                    team_size = %self.team_size,
                    "Players added"
                );
                Ok(events)
            }
            Err(err) => {
                match &err {
                    RosterError::DuplicateNames(names) => {
                        tracing::warn!(?names, "Submission rejected: duplicate names");
                    }
                    other => {
                        tracing::warn!(error = %other, "Submission rejected");
                    }
                }
                self.error_message = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Valid names currently in the box, recomputed from the text each call
    pub fn pending_count(&self) -> usize {
        pending_count(&self.pending_text)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    pub fn team_size(&self) -> TeamSize {
        self.team_size
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Snapshot of everything the page displays
    pub fn view(&self) -> SessionView {
        SessionView {
            pending_text: self.pending_text.clone(),
            pending_count: self.pending_count(),
            team_size: self.team_size.get(),
            error: self.error_message.clone(),
            teams: self
                .roster
                .teams()
                .iter()
                .enumerate()
                .map(|(index, team)| TeamView {
                    label: format!("Team {}", index + 1),
                    players: team.players().iter().map(|p| p.to_string()).collect(),
                })
                .collect(),
        }
    }
}

/// Display projection of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub pending_text: String,
    pub pending_count: usize,
    pub team_size: usize,
    pub error: Option<String>,
    pub teams: Vec<TeamView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamView {
    pub label: String,
    pub players: Vec<String>,
}
