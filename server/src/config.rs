use std::env;
use std::str::FromStr;

use log::{Level, ParseLevelError};

pub const LOG_LEVEL_ENV: &str = "FEED_LOG_LEVEL";
pub const LEPTOS_ENV: &str = "LEPTOS_ENV";
pub const PROD_MODE_VALUE: &str = "PROD";
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

/// Log level taken from the environment, the default level when the variable is not set
pub fn get_log_level() -> Result<Level, ParseLevelError> {
    parse_log_level(env::var(LOG_LEVEL_ENV).ok().as_deref())
}

pub fn is_prod_mode() -> bool {
    env::var(LEPTOS_ENV).is_ok_and(|leptos_env| leptos_env == PROD_MODE_VALUE)
}

fn parse_log_level(value: Option<&str>) -> Result<Level, ParseLevelError> {
    match value {
        Some(value) => Level::from_str(value.trim()),
        None => Ok(DEFAULT_LOG_LEVEL),
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use crate::config::{parse_log_level, DEFAULT_LOG_LEVEL};

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(None), Ok(DEFAULT_LOG_LEVEL));
        assert_eq!(parse_log_level(Some("debug")), Ok(Level::Debug));
        assert_eq!(parse_log_level(Some(" WARN ")), Ok(Level::Warn));
        assert!(parse_log_level(Some("verbose")).is_err());
    }
}
