use serde::Serialize;

use super::value_objects::{PlayerName, TeamSize};

/// An ordered group of players
///
/// Players keep their arrival order. A team is only ever appended to;
/// nothing here removes or reorders members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Team {
    players: Vec<PlayerName>,
}

impl Team {
    pub(crate) fn from_players(players: Vec<PlayerName>) -> Self {
        Self { players }
    }

    /// True once the team holds at least `size` players
    ///
    /// A team filled under a larger size stays "full" after the size shrinks;
    /// it is never trimmed back.
    pub fn is_full(&self, size: TeamSize) -> bool {
        self.players.len() >= size.get()
    }

    pub(crate) fn push(&mut self, player: PlayerName) {
        self.players.push(player);
    }

    pub fn players(&self) -> &[PlayerName] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
