//! Game tuning and preferences
//!
//! Loaded from an optional JSON file. Every field has a default, so partial
//! files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Environment variable holding the hint service credential
pub const HINT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// AI paddle tracking speed (pixels/frame)
    pub fn pong_ai_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Normal => PONG_AI_SPEED,
            Difficulty::Hard => 4.5,
        }
    }

    /// Snake interval floor (ms)
    pub fn snake_min_interval_ms(&self) -> u32 {
        match self {
            Difficulty::Easy => 90,
            Difficulty::Normal => SNAKE_MIN_INTERVAL_MS,
            Difficulty::Hard => 35,
        }
    }
}

/// Pong balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PongTuning {
    /// AI paddle tracking speed (pixels/frame)
    pub ai_speed: f32,
    /// Multiplier applied to horizontal speed on every paddle hit
    pub paddle_boost: f32,
    /// Horizontal serve speed (pixels/frame)
    pub serve_speed: f32,
    pub winning_score: u32,
}

impl Default for PongTuning {
    fn default() -> Self {
        Self {
            ai_speed: PONG_AI_SPEED,
            paddle_boost: PONG_PADDLE_BOOST,
            serve_speed: PONG_SERVE_SPEED,
            winning_score: PONG_WINNING_SCORE,
        }
    }
}

/// Brick Breaker balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakoutTuning {
    pub lives: u8,
    /// Per-axis ball speed (pixels/frame)
    pub ball_speed: f32,
    pub brick_reward: u32,
}

impl Default for BreakoutTuning {
    fn default() -> Self {
        Self {
            lives: BREAKOUT_LIVES,
            ball_speed: BREAKOUT_BALL_SPEED,
            brick_reward: BRICK_REWARD,
        }
    }
}

/// Snake pacing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeTuning {
    pub start_interval_ms: u32,
    pub min_interval_ms: u32,
    /// Interval multiplier per food eaten (< 1.0 speeds up)
    pub speedup: f32,
}

impl Default for SnakeTuning {
    fn default() -> Self {
        Self {
            start_interval_ms: SNAKE_START_INTERVAL_MS,
            min_interval_ms: SNAKE_MIN_INTERVAL_MS,
            speedup: SNAKE_SPEEDUP,
        }
    }
}

/// Hint service preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HintSettings {
    /// API credential; falls back to `GEMINI_API_KEY`
    pub api_key: Option<String>,
}

impl HintSettings {
    /// Credential from the file, else from the environment. Blank keys count as missing.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(HINT_API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

/// Game settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub pong: PongTuning,
    pub breakout: BreakoutTuning,
    pub snake: SnakeTuning,
    pub hint: HintSettings,
}

impl Settings {
    /// Create settings from a difficulty preset (applies preset defaults)
    pub fn from_preset(preset: Difficulty) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a difficulty preset (updates difficulty-dependent tuning)
    pub fn apply_preset(&mut self, preset: Difficulty) {
        self.difficulty = preset;
        self.pong.ai_speed = preset.pong_ai_speed();
        self.snake.min_interval_ms = preset.snake_min_interval_ms();
    }

    /// Parse settings from JSON text. The file's difficulty sets the
    /// preset-dependent tuning unless the file gives those values itself.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let explicit_ai_speed = value.pointer("/pong/ai_speed").is_some();
        let explicit_min_interval = value.pointer("/snake/min_interval_ms").is_some();

        let mut settings: Self = serde_json::from_value(value)?;
        let preset = settings.difficulty;
        if !explicit_ai_speed {
            settings.pong.ai_speed = preset.pong_ai_speed();
        }
        if !explicit_min_interval {
            settings.snake.min_interval_ms = preset.snake_min_interval_ms();
        }
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings if a path is given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Using default settings ({})", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "pong": { "winning_score": 3 } }"#).unwrap();
        assert_eq!(settings.pong.winning_score, 3);
        assert_eq!(settings.pong.paddle_boost, PONG_PADDLE_BOOST);
        assert_eq!(settings.breakout.lives, BREAKOUT_LIVES);
        assert_eq!(settings.difficulty, Difficulty::Normal);
    }

    #[test]
    fn test_file_difficulty_applies_preset() {
        let settings = Settings::from_json(r#"{ "difficulty": "Hard" }"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.pong.ai_speed, Difficulty::Hard.pong_ai_speed());
        assert_eq!(
            settings.snake.min_interval_ms,
            Difficulty::Hard.snake_min_interval_ms()
        );
    }

    #[test]
    fn test_explicit_tuning_beats_file_difficulty() {
        let settings = Settings::from_json(
            r#"{ "difficulty": "Hard", "pong": { "ai_speed": 1.5 }, "snake": { "speedup": 0.9 } }"#,
        )
        .unwrap();
        assert_eq!(settings.pong.ai_speed, 1.5);
        assert_eq!(
            settings.snake.min_interval_ms,
            Difficulty::Hard.snake_min_interval_ms()
        );
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings =
            Settings::load_or_default(Some(Path::new("/definitely/not/here/settings.json")));
        assert_eq!(settings.snake.start_interval_ms, SNAKE_START_INTERVAL_MS);
    }

    #[test]
    fn test_presets() {
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("medium"), None);
        let hard = Settings::from_preset(Difficulty::Hard);
        assert!(hard.pong.ai_speed > PONG_AI_SPEED);
        assert!(hard.snake.min_interval_ms < SNAKE_MIN_INTERVAL_MS);
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let hint = HintSettings {
            api_key: Some("   ".into()),
        };
        assert_eq!(hint.resolved_api_key(), None);
        let hint = HintSettings {
            api_key: Some("abc".into()),
        };
        assert_eq!(hint.resolved_api_key().as_deref(), Some("abc"));
    }

    #[test]
    fn test_round_trip_json() {
        let settings = Settings::from_preset(Difficulty::Easy);
        let back = Settings::from_json(&settings.to_json()).unwrap();
        assert_eq!(back.difficulty, Difficulty::Easy);
        assert_eq!(back.pong.ai_speed, settings.pong.ai_speed);
    }
}
