//! Resolver configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// How `path_without_modifier` is rebuilt from the parsed segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reconstruction {
    /// Each segment contributes its own base name.
    #[default]
    PerSegment,
    /// The rightmost base name is repeated once per segment.
    Literal,
}

/// Configuration for parsing and resolving character paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub reconstruction: Reconstruction,

    /// Separates path segments.
    pub segment_separator: char,

    /// Separates a family qualifier from the local name.
    pub family_separator: char,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            reconstruction: Reconstruction::PerSegment,
            segment_separator: '/',
            family_separator: ':',
        }
    }
}

/// Errors raised while loading a resolver configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid separator {0:?}: separators must differ and cannot be braces")]
    InvalidSeparator(char),
}

impl ResolverConfig {
    /// Parse and validate a TOML configuration. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Check that the separators can be told apart from each other and from
    /// the relation braces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for separator in [self.segment_separator, self.family_separator] {
            if separator == '{' || separator == '}' {
                return Err(ConfigError::InvalidSeparator(separator));
            }
        }
        if self.segment_separator == self.family_separator {
            return Err(ConfigError::InvalidSeparator(self.family_separator));
        }
        Ok(())
    }
}
