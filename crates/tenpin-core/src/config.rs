//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for a [`crate::Game`].
///
/// Missing fields take their default values when loading from JSON.
///
/// # Example
///
/// ```
/// use tenpin_core::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "max_players": 6 }"#).unwrap();
/// assert_eq!(config.max_players, Some(6));
/// assert!(config.record_events);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Largest roster allowed, or `None` for no limit.
    pub max_players: Option<usize>,
    /// Whether accepted operations are written to the event journal.
    pub record_events: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_players: None,
            record_events: true,
        }
    }
}

impl GameConfig {
    /// Create a config with a roster limit.
    #[must_use]
    pub fn with_max_players(max_players: usize) -> Self {
        Self {
            max_players: Some(max_players),
            ..Default::default()
        }
    }

    /// Parses a config from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::ZeroPlayerLimit`] if `max_players` is 0.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the config for values no game could use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPlayerLimit`] if `max_players` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_players == Some(0) {
            return Err(ConfigError::ZeroPlayerLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited_and_journaled() {
        let config = GameConfig::default();
        assert_eq!(config.max_players, None);
        assert!(config.record_events);
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config =
            GameConfig::from_json(r#"{ "max_players": 4, "record_events": false }"#).unwrap();
        assert_eq!(config.max_players, Some(4));
        assert!(!config.record_events);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            GameConfig::from_json("{ max_players"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_zero_player_limit() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "max_players": 0 }"#),
            Err(ConfigError::ZeroPlayerLimit)
        ));
    }
}
