//! Optional hint service for the word games
//!
//! The transport (an HTTP text-generation call in the browser build) is
//! supplied by the host through `HintProvider`. Without a credential the
//! feature stays disabled and every request reports that inline. Each round
//! gets one hint.

use crate::error::HintError;
use crate::settings::HintSettings;

/// Produces a one-sentence clue for a target word
pub trait HintProvider {
    fn clue(&self, word: &str) -> Result<String, HintError>;
}

/// Offline provider: describes length and first letter
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterHints;

impl HintProvider for LetterHints {
    fn clue(&self, word: &str) -> Result<String, HintError> {
        let first = word
            .chars()
            .next()
            .ok_or_else(|| HintError::Service("empty word".to_string()))?;
        Ok(format!(
            "It has {} letters and starts with '{}'.",
            word.chars().count(),
            first.to_ascii_uppercase()
        ))
    }
}

/// Single-use-per-round gate in front of an optional provider
pub struct Hints {
    provider: Option<Box<dyn HintProvider>>,
    used: bool,
}

impl std::fmt::Debug for Hints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hints")
            .field("enabled", &self.provider.is_some())
            .field("used", &self.used)
            .finish()
    }
}

impl Default for Hints {
    fn default() -> Self {
        Self::disabled()
    }
}

impl Hints {
    pub fn disabled() -> Self {
        Self {
            provider: None,
            used: false,
        }
    }

    pub fn with_provider(provider: Box<dyn HintProvider>) -> Self {
        Self {
            provider: Some(provider),
            used: false,
        }
    }

    /// Build from settings; `connect` turns the API key into a provider.
    /// Stays disabled when no key is configured.
    pub fn from_settings<F>(settings: &HintSettings, connect: F) -> Self
    where
        F: FnOnce(String) -> Box<dyn HintProvider>,
    {
        match settings.resolved_api_key() {
            Some(key) => Self::with_provider(connect(key)),
            None => {
                log::info!("No hint API key configured, hints disabled");
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    /// Ask for this round's hint. A failed call does not consume it.
    pub fn request(&mut self, word: &str) -> Result<String, HintError> {
        if self.used {
            return Err(HintError::AlreadyUsed);
        }
        let provider = self.provider.as_ref().ok_or(HintError::MissingCredential)?;
        match provider.clue(word) {
            Ok(clue) => {
                self.used = true;
                Ok(clue)
            }
            Err(e) => {
                log::warn!("Hint request failed: {}", e);
                Err(e)
            }
        }
    }

    /// `request`, folded into the text shown under the game
    pub fn message(&mut self, word: &str) -> String {
        match self.request(word) {
            Ok(clue) => format!("Hint: {}", clue),
            Err(e) => e.to_string(),
        }
    }

    pub fn new_round(&mut self) {
        self.used = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider that always fails, as when the service is unreachable
    struct Offline;

    impl HintProvider for Offline {
        fn clue(&self, _word: &str) -> Result<String, HintError> {
            Err(HintError::Service("network unreachable".to_string()))
        }
    }

    #[test]
    fn test_one_hint_per_round() {
        let mut hints = Hints::with_provider(Box::new(LetterHints));
        assert_eq!(
            hints.request("rocket"),
            Ok("It has 6 letters and starts with 'R'.".to_string())
        );
        assert_eq!(hints.request("rocket"), Err(HintError::AlreadyUsed));
        hints.new_round();
        assert!(hints.request("rocket").is_ok());
    }

    #[test]
    fn test_missing_credential_is_reported_inline() {
        let mut hints = Hints::disabled();
        assert!(!hints.is_enabled());
        assert_eq!(hints.request("rocket"), Err(HintError::MissingCredential));
        assert_eq!(
            hints.message("rocket"),
            "Hints are unavailable: no API key configured."
        );
        assert!(!hints.is_used());
    }

    #[test]
    fn test_blank_key_leaves_hints_disabled() {
        let settings = HintSettings {
            api_key: Some("  ".to_string()),
        };
        let hints = Hints::from_settings(&settings, |_| {
            Box::new(LetterHints) as Box<dyn HintProvider>
        });
        assert!(!hints.is_enabled());
    }

    #[test]
    fn test_configured_key_reaches_provider() {
        let settings = HintSettings {
            api_key: Some("abc".to_string()),
        };
        let mut seen = None;
        let hints = Hints::from_settings(&settings, |key| {
            seen = Some(key);
            Box::new(LetterHints) as Box<dyn HintProvider>
        });
        assert!(hints.is_enabled());
        assert_eq!(seen.as_deref(), Some("abc"));
    }

    #[test]
    fn test_service_failure_keeps_hint() {
        let mut hints = Hints::with_provider(Box::new(Offline));
        let msg = hints.message("rocket");
        assert!(msg.contains("network unreachable"));
        assert!(!hints.is_used());
    }
}
