use thiserror::Error;

/// Validation failures raised by the roster manager
///
/// All of them are recoverable: the roster is left untouched and the
/// message is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Please enter valid player names.")]
    EmptyInput,

    #[error("The following names already exist: {}", .0.join(", "))]
    DuplicateNames(Vec<String>),

    #[error("Team size must be a whole number, got '{0}'.")]
    InvalidTeamSize(String),
}

pub type RosterResult<T> = Result<T, RosterError>;
