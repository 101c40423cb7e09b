//! Rule configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Identifier length accepted by default: a hyphenated UUID.
pub const DEFAULT_ID_LENGTH: usize = 36;

/// Tunables for the account rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Exact number of bytes an account ID must have.
    pub id_length: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            id_length: DEFAULT_ID_LENGTH,
        }
    }
}

impl RuleConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the required ID length.
    #[must_use]
    pub const fn with_id_length(mut self, id_length: usize) -> Self {
        self.id_length = id_length;
        self
    }

    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serde`] if the document is malformed and
    /// [`Error::Config`] if the values are out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configured values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `id_length` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.id_length == 0 {
            return Err(Error::Config(
                "id_length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
