//! Palette configuration
//!
//! Apps that let users or designers tweak colors describe them in TOML:
//!
//! ```toml
//! scheme = "dark"
//!
//! [colors]
//! container_primary = "#7C3AED"
//! scrim = "#00000080"
//! ```
//!
//! The library never reads files itself; hosts pass the document text in.

use crate::error::{ConfigError, Result};
use crate::themes::ColorScheme;
use crate::tokens::{ColorRole, Colors};
use aurelius_core::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Theme configuration document
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Base palette the overrides apply to
    #[serde(default)]
    pub scheme: ColorScheme,
    /// Color role key -> `#RRGGBB` / `#RRGGBBAA`
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

impl ThemeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ThemeConfig = toml::from_str(source)?;
        tracing::debug!(
            "loaded theme config: {:?} scheme, {} color override(s)",
            config.scheme,
            config.colors.len()
        );
        Ok(config)
    }

    /// Base palette for `scheme` with every override applied
    pub fn colors(&self) -> Result<Colors> {
        let mut colors = Colors::for_scheme(self.scheme);

        for (key, value) in &self.colors {
            let role =
                ColorRole::from_key(key).ok_or_else(|| ConfigError::UnknownRole(key.clone()))?;
            let color = Color::parse_hex(value).ok_or_else(|| ConfigError::InvalidColor {
                role: key.clone(),
                value: value.clone(),
            })?;
            colors.set(role, color);
        }

        Ok(colors)
    }
}
