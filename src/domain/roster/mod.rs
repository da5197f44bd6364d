// Roster domain module
// Contains the roster aggregate, teams, value objects, and distribution events

#![allow(clippy::module_inception)]

pub mod errors;
pub mod events;
pub mod input;
pub mod roster;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use errors::{RosterError, RosterResult};
pub use events::RosterEvent;
pub use input::{parse_candidates, pending_count};
pub use roster::Roster;
pub use team::Team;
pub use value_objects::{PlayerName, TeamSize};
