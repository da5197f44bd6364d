//! Parsing of the free-text player box.

use super::value_objects::{trim_name, PlayerName};

/// Splits pending text into candidate names: one per line, trimmed,
/// blank lines dropped
///
/// Duplicates inside the text are kept.
pub fn parse_candidates(text: &str) -> Vec<PlayerName> {
    text.lines().filter_map(PlayerName::parse).collect()
}

/// Number of valid names currently typed into the box
pub fn pending_count(text: &str) -> usize {
    text.lines().filter(|line| !trim_name(line).is_empty()).count()
}
