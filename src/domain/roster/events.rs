use super::value_objects::PlayerName;

/// Domain events produced by a distribution run
///
/// `team_index` is zero-based; the page shows it one-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    /// A player topped up an existing team
    PlayerAssigned {
        team_index: usize,
        player: PlayerName,
    },
    /// A new team was appended to the roster
    TeamCreated {
        team_index: usize,
        players: Vec<PlayerName>,
    },
}

impl RosterEvent {
    pub fn team_index(&self) -> usize {
        match self {
            RosterEvent::PlayerAssigned { team_index, .. } => *team_index,
            RosterEvent::TeamCreated { team_index, .. } => *team_index,
        }
    }

    /// Number of players this event placed
    pub fn placed(&self) -> usize {
        match self {
            RosterEvent::PlayerAssigned { .. } => 1,
            RosterEvent::TeamCreated { players, .. } => players.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_assigned_event() {
        let event = RosterEvent::PlayerAssigned {
            team_index: 2,
            player: PlayerName::parse("Zed").unwrap(),
        };

        assert_eq!(event.team_index(), 2);
        assert_eq!(event.placed(), 1);
    }

    #[test]
    fn team_created_event() {
        let event = RosterEvent::TeamCreated {
            team_index: 0,
            players: vec![
                PlayerName::parse("A").unwrap(),
                PlayerName::parse("B").unwrap(),
            ],
        };

        assert_eq!(event.team_index(), 0);
        assert_eq!(event.placed(), 2);
    }
}
