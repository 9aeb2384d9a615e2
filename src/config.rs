use std::path::Path;

use crate::error::ConfigError;
use crate::game::{PlayerKind, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_SIDE};

/// Largest board side accepted from config or the command line.
pub const MAX_SIDE: usize = 64;

/// Game setup, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub player1_color: String,
    pub player2_color: String,
    /// Who plays the second seat. The first seat is always human.
    pub opponent: PlayerKind,
    /// Seed for the computer opponent; random per run when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            player1_color: "red".to_string(),
            player2_color: "yellow".to_string(),
            opponent: PlayerKind::Computer,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&self.width) {
            return Err(ConfigError::Validation(format!(
                "width must be in [{MIN_SIDE}, {MAX_SIDE}]"
            )));
        }
        if !(MIN_SIDE..=MAX_SIDE).contains(&self.height) {
            return Err(ConfigError::Validation(format!(
                "height must be in [{MIN_SIDE}, {MAX_SIDE}]"
            )));
        }
        if self.player1_color.trim().is_empty() || self.player2_color.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player colors must not be empty".into(),
            ));
        }
        if self
            .player1_color
            .trim()
            .eq_ignore_ascii_case(self.player2_color.trim())
        {
            return Err(ConfigError::Validation(
                "player1_color and player2_color must differ".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&GameConfig::default())
    }
}
