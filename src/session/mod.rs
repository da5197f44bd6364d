// Session state: the roster manager that the page drives

pub mod roster_session;

pub use roster_session::{RosterSession, SessionView, TeamView};
