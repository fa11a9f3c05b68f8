use std::path::Path;

use crate::error::ConfigError;

/// Largest board the UI can label with column letters
pub const MAX_BOARD_SIZE: usize = 26;

/// Board size and win length, loadable from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub win_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Variant::ConnectFive.config()
    }
}

/// Built-in board presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Variant {
    /// 6x6 board, four in a row
    ConnectFour,
    /// 5x5 board, five in a row
    ConnectFive,
    /// 8x8 board, five in a row
    Wide,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::ConnectFour, Variant::ConnectFive, Variant::Wide];

    pub fn config(self) -> GameConfig {
        let (board_size, win_length) = match self {
            Variant::ConnectFour => (6, 4),
            Variant::ConnectFive => (5, 5),
            Variant::Wide => (8, 5),
        };
        GameConfig {
            board_size,
            win_length,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::ConnectFour => "Connect Four (6x6)",
            Variant::ConnectFive => "Connect Five (5x5)",
            Variant::Wide => "Wide (8x8)",
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
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 2 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be in [2, {MAX_BOARD_SIZE}]"
            )));
        }
        if self.win_length < 2 {
            return Err(ConfigError::Validation("win_length must be >= 2".into()));
        }
        if self.win_length > self.board_size {
            return Err(ConfigError::Validation(
                "win_length must be <= board_size".into(),
            ));
        }
        Ok(())
    }
}
