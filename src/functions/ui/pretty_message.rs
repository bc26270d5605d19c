use std::fmt::Display;

/// Builds the "emoji | message" line used across embeds and responses.
pub fn pretty_message(emoji: impl Display, message: impl Display) -> String {
    format!("{emoji} | {message}")
}
