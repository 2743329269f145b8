//! Error types
//!
//! Gameplay transitions themselves never fail. Errors only describe rejected
//! user input, unavailable hints and unreadable settings files.

use std::fmt;
use std::io;

/// Rejected player action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Input could not be interpreted (e.g. a non-numeric guess)
    InvalidInput(String),
    /// The round already ended; start a new one first
    RoundOver,
    /// Cell or column index outside the board
    OutOfBounds { index: usize, len: usize },
}

/// Hint service failure, always reported inline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    /// No API credential configured; the hint feature is disabled
    MissingCredential,
    /// The text-generation call failed
    Service(String),
    /// The single hint for this round was already spent
    AlreadyUsed,
}

/// Settings file could not be loaded
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidInput(msg) => write!(f, "{}", msg),
            GameError::RoundOver => write!(f, "round is over, start a new game"),
            GameError::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds (board has {})", index, len)
            }
        }
    }
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintError::MissingCredential => {
                write!(f, "Hints are unavailable: no API key configured.")
            }
            HintError::Service(msg) => write!(f, "Could not fetch a hint: {}", msg),
            HintError::AlreadyUsed => write!(f, "You already used your hint this round."),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "settings I/O error: {}", e),
            ConfigError::Parse(e) => write!(f, "settings parse error: {}", e),
        }
    }
}

impl std::error::Error for GameError {}

impl std::error::Error for HintError {}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_error_messages_are_user_facing() {
        assert_eq!(
            HintError::MissingCredential.to_string(),
            "Hints are unavailable: no API key configured."
        );
        assert!(HintError::Service("timeout".into()).to_string().contains("timeout"));
    }

    #[test]
    fn test_config_error_from_parse() {
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
