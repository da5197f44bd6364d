use serde::Serialize;
use std::collections::{HashSet, VecDeque};

use super::errors::{RosterError, RosterResult};
use super::events::RosterEvent;
use super::team::Team;
use super::value_objects::{PlayerName, TeamSize};

/// Roster aggregate root
///
/// The ordered list of all teams in the session.
///
/// # Invariants
/// - A player name appears in at most one team
/// - Teams are topped up in index order before a new team is appended
/// - Teams are never removed, merged, or reordered
///
/// # Example
/// ```
/// use team_roster::domain::roster::{parse_candidates, Roster, TeamSize};
///
/// let roster = Roster::new();
/// let candidates = parse_candidates("A\nB\nC\nD\nE\nF\nG");
/// let (roster, events) = roster
///     .distribute(TeamSize::clamped(5), candidates)
///     .expect("valid submission");
///
/// assert_eq!(roster.teams().len(), 2);
/// assert_eq!(roster.teams()[1].len(), 2);
/// assert_eq!(events.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    teams: Vec<Team>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distributes a batch of candidates into a copy of this roster
    ///
    /// # Arguments
    /// * `team_size` - Size teams are filled up to
    /// * `candidates` - Names in submission order
    ///
    /// # Returns
    /// * `Ok((Roster, Vec<RosterEvent>))` - The new roster and what changed
    /// * `Err(RosterError::EmptyInput)` - If there are no candidates
    /// * `Err(RosterError::DuplicateNames)` - If any candidate is already on
    ///   the roster; the offending names are listed in candidate order
    ///
    /// # Business Rules Enforced
    /// - Existing teams are topped up first, in index order
    /// - Leftover names form new teams of `team_size` (the last may be short)
    /// - Rejection is all-or-nothing; `self` is never modified
    /// - Repeated names within one batch are not checked against each other
    pub fn distribute(
        &self,
        team_size: TeamSize,
        candidates: Vec<PlayerName>,
    ) -> RosterResult<(Roster, Vec<RosterEvent>)> {
        if candidates.is_empty() {
            return Err(RosterError::EmptyInput);
        }

        let duplicates = self.collisions(&candidates);
        if !duplicates.is_empty() {
            return Err(RosterError::DuplicateNames(duplicates));
        }

        let mut teams = self.teams.clone();
        let mut remaining: VecDeque<PlayerName> = candidates.into();
        let mut events = Vec::new();

        for (team_index, team) in teams.iter_mut().enumerate() {
            if remaining.is_empty() {
                break;
            }
            while !team.is_full(team_size) {
                let Some(player) = remaining.pop_front() else {
                    break;
                };
                team.push(player.clone());
                events.push(RosterEvent::PlayerAssigned { team_index, player });
            }
        }

        while !remaining.is_empty() {
            let take = team_size.get().min(remaining.len());
            let players: Vec<PlayerName> = remaining.drain(..take).collect();
            events.push(RosterEvent::TeamCreated {
                team_index: teams.len(),
                players: players.clone(),
            });
            teams.push(Team::from_players(players));
        }

        Ok((Roster { teams }, events))
    }

    /// Candidates already present somewhere on the roster, in candidate order
    fn collisions(&self, candidates: &[PlayerName]) -> Vec<String> {
        let existing: HashSet<&str> = self.names().collect();
        candidates
            .iter()
            .filter(|c| existing.contains(c.as_str()))
            .map(|c| c.as_str().to_string())
            .collect()
    }

    /// Every player on the roster, team by team
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.teams
            .iter()
            .flat_map(|team| team.players().iter().map(|p| p.as_str()))
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn player_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
