use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PREFIX: &str = "?";

type EnvError = Box<dyn std::error::Error + Send + Sync>;
type EnvResult<T> = Result<T, EnvError>;

/// Gets the Discord bot token from environment
pub fn discord_token() -> EnvResult<String> {
    dotenvy::var("DISCORD_TOKEN").map_err(|e| Box::new(e) as EnvError)
}

/// Prefix for text commands, `?` when unset
pub fn command_prefix() -> EnvResult<String> {
    Ok(optional_var("MEMORIA_PREFIX")?.unwrap_or_else(|| DEFAULT_PREFIX.to_string()))
}

/// Default board size for `/memoria` when the player does not pick one
pub fn tile_count() -> EnvResult<Option<usize>> {
    optional_var("MEMORIA_TILE_COUNT")?
        .map(|raw| parse_value("MEMORIA_TILE_COUNT", &raw))
        .transpose()
}

/// How long a flipped pair stays visible, in milliseconds
pub fn reveal_delay() -> EnvResult<Option<Duration>> {
    optional_var("MEMORIA_REVEAL_DELAY_MS")?
        .map(|raw| parse_value("MEMORIA_REVEAL_DELAY_MS", &raw).map(Duration::from_millis))
        .transpose()
}

fn optional_var(name: &str) -> EnvResult<Option<String>> {
    match dotenvy::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(e) => Err(Box::new(e) as EnvError),
    }
}

fn parse_value<T>(name: &str, raw: &str) -> EnvResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|err| format!("{name} must be a number, got {raw:?}: {err}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numbers() {
        let value: usize = parse_value("MEMORIA_TILE_COUNT", " 12 ").unwrap();
        assert_eq!(value, 12);
    }

    #[test]
    fn names_the_variable_on_bad_input() {
        let err = parse_value::<u64>("MEMORIA_REVEAL_DELAY_MS", "soon").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("MEMORIA_REVEAL_DELAY_MS"));
        assert!(message.contains("\"soon\""));
    }
}
