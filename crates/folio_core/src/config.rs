//! Browse configuration.
//!
//! # Responsibility
//! - Hold pagination tuning values for browse sessions.
//! - Validate values loaded from JSON before a session uses them.
//!
//! # Invariants
//! - `initial_page_size` and `load_more_step` are both non-zero.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of cards shown before any "load more".
pub const DEFAULT_INITIAL_PAGE_SIZE: usize = 6;
/// Cards added per "load more".
pub const DEFAULT_LOAD_MORE_STEP: usize = 6;

/// Pagination settings for a browse session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    pub initial_page_size: usize,
    pub load_more_step: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            initial_page_size: DEFAULT_INITIAL_PAGE_SIZE,
            load_more_step: DEFAULT_LOAD_MORE_STEP,
        }
    }
}

impl BrowseConfig {
    /// Parses and validates a JSON config object. Missing keys use defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_page_size == 0 {
            return Err(ConfigError::ZeroValue("initial_page_size"));
        }
        if self.load_more_step == 0 {
            return Err(ConfigError::ZeroValue("load_more_step"));
        }
        Ok(())
    }
}

/// Configuration load/validation error.
#[derive(Debug)]
pub enum ConfigError {
    ZeroValue(&'static str),
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroValue(name) => write!(f, "browse config `{name}` must be greater than 0"),
            Self::Parse(err) => write!(f, "failed to parse browse config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroValue(_) => None,
            Self::Parse(err) => Some(err),
        }
    }
}
