//! Theme error types

use thiserror::Error;

/// A theme-requiring component was used outside any theme provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{context} requires an AureliusTheme.")]
pub struct MissingThemeError {
    /// Name of the component that asked for the theme
    pub context: String,
}

impl MissingThemeError {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

/// Palette configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document is not valid TOML or has the wrong shape
    #[error("Invalid theme configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A `[colors]` key that names no color role
    #[error("Unknown color role: {0}")]
    UnknownRole(String),

    /// A color value that is not `#RRGGBB` or `#RRGGBBAA`
    #[error("Invalid color for {role}: {value}")]
    InvalidColor { role: String, value: String },
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;
