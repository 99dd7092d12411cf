use std::time::Duration;

use crate::board::Player;
use crate::error::ConfigError;

/// Setup choices for one game, gathered before the first move
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Whether the computer makes the opening move
    pub computer_first: bool,
    /// How long the computer may think about each move, in whole seconds
    pub time_limit: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            computer_first: true,
            time_limit: 5,
        }
    }
}

impl GameConfig {
    pub fn new(computer_first: bool, time_limit: u64) -> Result<Self, ConfigError> {
        let config = GameConfig {
            computer_first,
            time_limit,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_limit == 0 {
            return Err(ConfigError::Validation(
                "time_limit must be at least 1 second".into(),
            ));
        }
        Ok(())
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit)
    }

    pub fn first_player(&self) -> Player {
        if self.computer_first {
            Player::Computer
        } else {
            Player::Human
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_time_limit_is_rejected() {
        let err = GameConfig::new(false, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: time_limit must be at least 1 second"
        );
    }

    #[test]
    fn first_player_follows_flag() {
        assert_eq!(GameConfig::new(true, 3).unwrap().first_player(), Player::Computer);
        assert_eq!(GameConfig::new(false, 3).unwrap().first_player(), Player::Human);
        assert_eq!(GameConfig::new(false, 3).unwrap().time_limit(), Duration::from_secs(3));
    }
}
