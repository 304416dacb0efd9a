//! Session configuration loaded from TOML.

use crate::session::PlayerSetup;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default location of the config file.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_noughts.toml";

/// Players and logging for a play session.
///
/// ```toml
/// log_filter = "info"
///
/// [player_one]
/// name = "Ada"
/// marker = "X"
///
/// [player_two]
/// name = "Grace"
/// marker = "O"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seat-one player.
    #[serde(default = "default_player_one")]
    player_one: PlayerSetup,

    /// Seat-two player.
    #[serde(default = "default_player_two")]
    player_two: PlayerSetup,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_player_one() -> PlayerSetup {
    PlayerSetup::new("Player 1", "X")
}

fn default_player_two() -> PlayerSetup {
    PlayerSetup::new("Player 2", "O")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_one = %config.player_one.name,
            player_two = %config.player_two.name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, else the default file if it exists, else
    /// built-in defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(mut self, overrides: &PlayerOverrides) -> Self {
        let apply = |setup: &mut PlayerSetup, name: &Option<String>, marker: &Option<String>| {
            if let Some(name) = name {
                setup.name = name.clone();
            }
            if let Some(marker) = marker {
                setup.marker = marker.clone();
            }
        };
        apply(&mut self.player_one, &overrides.name_one, &overrides.marker_one);
        apply(&mut self.player_two, &overrides.name_two, &overrides.marker_two);
        self
    }
}

/// Per-player values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, clap::Args)]
pub struct PlayerOverrides {
    /// Name for seat 1
    #[arg(long = "name1")]
    pub name_one: Option<String>,

    /// Marker for seat 1
    #[arg(long = "marker1")]
    pub marker_one: Option<String>,

    /// Name for seat 2
    #[arg(long = "name2")]
    pub name_two: Option<String>,

    /// Marker for seat 2
    #[arg(long = "marker2")]
    pub marker_two: Option<String>,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            [player_two]
            name = "Grace"
            marker = "G"
            "#,
        )
        .unwrap();
        assert_eq!(config.player_one(), &default_player_one());
        assert_eq!(config.player_two().marker, "G");
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let overrides = PlayerOverrides {
            name_one: Some("Ada".to_string()),
            marker_two: Some("@".to_string()),
            ..Default::default()
        };
        let config = GameConfig::default().with_overrides(&overrides);
        assert_eq!(config.player_one(), &PlayerSetup::new("Ada", "X"));
        assert_eq!(config.player_two(), &PlayerSetup::new("Player 2", "@"));
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = toml::from_str::<GameConfig>("player_one = 3").unwrap_err();
        let wrapped = ConfigError::new(format!("Failed to parse config: {}", err));
        assert!(
            wrapped
                .to_string()
                .starts_with("Config error: Failed to parse config")
        );
    }
}
