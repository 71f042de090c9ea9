use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::Mode;

pub const DEFAULT_OPPONENT_DELAY_MS: u64 = 500;
pub const MAX_OPPONENT_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_opponent_delay_ms")]
    pub opponent_delay_ms: u64,
    /// Seed for the opponent's random fallback. `None` picks a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_opponent_delay_ms() -> u64 {
    DEFAULT_OPPONENT_DELAY_MS
}

impl GameSettings {
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            opponent_delay_ms: DEFAULT_OPPONENT_DELAY_MS,
            seed: None,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.opponent_delay_ms > MAX_OPPONENT_DELAY_MS {
            return Err(format!(
                "opponent_delay_ms must not exceed {} (got {})",
                MAX_OPPONENT_DELAY_MS, self.opponent_delay_ms
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_defaults_match_reference_behavior() {
        let settings = GameSettings::default();
        assert_eq!(settings.mode, Mode::MultiPlayer);
        assert_eq!(settings.opponent_delay(), Duration::from_millis(500));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let serializer = YamlConfigSerializer::new();
        let settings: GameSettings = serializer.deserialize("mode: single\n").unwrap();
        assert_eq!(settings.mode, Mode::SinglePlayer);
        assert_eq!(settings.opponent_delay_ms, DEFAULT_OPPONENT_DELAY_MS);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_excessive_delay_is_invalid() {
        let settings = GameSettings {
            opponent_delay_ms: MAX_OPPONENT_DELAY_MS + 1,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
