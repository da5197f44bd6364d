use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::RosterError;

/// Trims whitespace and byte-order marks from both ends of a name
pub fn trim_name(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Player name value object
///
/// # Invariants
/// - Never empty
/// - Never carries leading or trailing whitespace
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// Creates a player name from raw text, trimming surrounding whitespace
    ///
    /// Returns `None` when nothing is left after trimming.
    ///
    /// # Example
    /// ```
    /// use team_roster::domain::roster::PlayerName;
    ///
    /// let name = PlayerName::parse("  Alice ").expect("non-empty name");
    /// assert_eq!(name.as_str(), "Alice");
    /// assert!(PlayerName::parse("   ").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = trim_name(raw);
        if trimmed.is_empty() {
            None
        } else {
            Some(PlayerName(trimmed.to_string()))
        }
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum number of players a team is filled up to
///
/// # Invariants
/// - Always at least 1, so distribution always makes progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TeamSize(usize);

impl TeamSize {
    pub const DEFAULT: TeamSize = TeamSize(5);

    /// Creates a team size, clamping anything below 1 up to 1
    ///
    /// # Example
    /// ```
    /// use team_roster::domain::roster::TeamSize;
    ///
    /// assert_eq!(TeamSize::clamped(4).get(), 4);
    /// assert_eq!(TeamSize::clamped(0).get(), 1);
    /// assert_eq!(TeamSize::clamped(-3).get(), 1);
    /// ```
    pub fn clamped(value: i64) -> Self {
        if value < 1 {
            TeamSize(1)
        } else {
            TeamSize(usize::try_from(value).unwrap_or(usize::MAX))
        }
    }

    /// Parses user input from the team size field
    ///
    /// # Returns
    /// * `Ok((TeamSize, bool))` - The size and whether it had to be clamped
    /// * `Err(RosterError::InvalidTeamSize)` - If the input is not a whole number
    pub fn parse(raw: &str) -> Result<(Self, bool), RosterError> {
        let trimmed = raw.trim();
        let value: i64 = match trimmed.parse::<i64>() {
            Ok(value) => value,
            // Whole numbers outside i64 or in float notation ("1e20", "3.0")
            Err(_) => match trimmed.parse::<f64>() {
                Ok(f) if f.is_finite() && f.fract() == 0.0 => f as i64,
                _ => return Err(RosterError::InvalidTeamSize(trimmed.to_string())),
            },
        };
        Ok((Self::clamped(value), value < 1))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for TeamSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TeamSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
