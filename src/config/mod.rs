//! Game configuration, loadable from TOML.
//!
//! ```
//! use knights_tour::config::TourConfig;
//!
//! let config = TourConfig::from_toml_str(r#"
//!     board_size = 6
//!     start = { row = 2, col = 3 }
//! "#).unwrap();
//!
//! assert_eq!(config.board_size, 6);
//! assert!(config.show_hints);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::position::Position;

/// Board sizes offered to players by default.
pub const DEFAULT_ALLOWED_SIZES: [usize; 4] = [5, 6, 7, 8];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    /// Side length N of the board.
    pub board_size: usize,

    /// Start square (0-based).
    pub start: Position,

    /// Whether front ends show the Warnsdorff hint.
    pub show_hints: bool,

    /// Board sizes a front end may offer. Empty means any size ≥ 1.
    ///
    /// This is presentation policy; the engine accepts every size ≥ 1.
    pub allowed_sizes: Vec<usize>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            start: Position::ORIGIN,
            show_hints: true,
            allowed_sizes: DEFAULT_ALLOWED_SIZES.to_vec(),
        }
    }
}

impl TourConfig {
    /// Loads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML string. Does not validate.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    pub fn with_show_hints(mut self, show: bool) -> Self {
        self.show_hints = show;
        self
    }

    pub fn is_size_allowed(&self, size: usize) -> bool {
        size >= 1 && (self.allowed_sizes.is_empty() || self.allowed_sizes.contains(&size))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 1 {
            return Err(ConfigError::Invalid(
                "board_size must be at least 1".to_string(),
            ));
        }
        if !self.is_size_allowed(self.board_size) {
            return Err(ConfigError::Invalid(format!(
                "board_size {} is not one of the allowed sizes {:?}",
                self.board_size, self.allowed_sizes
            )));
        }
        if !self.start.in_bounds(self.board_size) {
            return Err(ConfigError::Invalid(format!(
                "start {{ row = {}, col = {} }} is off a {}x{} board",
                self.start.row, self.start.col, self.board_size, self.board_size
            )));
        }
        Ok(())
    }
}
