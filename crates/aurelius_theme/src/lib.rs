//! Aurelius Theme System
//!
//! Design token bundles, a scoped provider that installs them into a
//! [`Composition`](aurelius_core::Composition), and the read-only facade
//! components use to look them up.
//!
//! # Overview
//!
//! - **Tokens**: [`Animation`](tokens::Animation), [`Colors`](tokens::Colors),
//!   [`Shapes`](tokens::Shapes), [`Sizes`](tokens::Sizes), [`Text`](tokens::Text)
//!   and [`Visibility`](tokens::Visibility), each with an `UNSPECIFIED` sentinel
//! - **Provider**: [`ThemeProvider`] / [`aurelius_theme`] install all six bundles
//!   for a subtree and style the platform system bars
//! - **Facade**: [`AureliusTheme`] reads the current bundles and reports whether a
//!   theme is provided at all
//! - **Configuration**: [`ThemeConfig`] loads palette overrides from TOML
//!
//! # Quick Start
//!
//! ```rust
//! use aurelius_core::Composition;
//! use aurelius_theme::{tokens::Colors, AureliusTheme, ThemeProvider};
//!
//! let composition = Composition::new();
//! let mut provider = ThemeProvider::new();
//!
//! provider.compose(&composition, Colors::light(), |theme| {
//!     theme.require_for("Greeting").unwrap();
//!     let _padding = theme.sizes().spacing.medium;
//! });
//!
//! assert!(AureliusTheme::of(&composition).require_for("Greeting").is_err());
//! ```

pub mod config;
pub mod error;
mod locals;
pub mod provider;
pub mod system_bars;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use config::ThemeConfig;
pub use error::{ConfigError, MissingThemeError};
pub use provider::{aurelius_theme, ThemeProvider};
pub use system_bars::{SystemBars, SystemBarsStyle};
pub use theme::AureliusTheme;
pub use themes::ColorScheme;
