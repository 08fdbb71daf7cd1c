//! Themed components
//!
//! Each component is a plain configuration value built with chained setters.
//! `build` resolves it against an [`AureliusTheme`](aurelius_theme::AureliusTheme)
//! into a style struct the host toolkit renders, and `click` runs its callback the
//! way a tap would.

pub mod dialog;
pub mod fab;
pub mod menu_drawer;
pub mod top_app_bar;

use std::sync::Arc;

/// Callback run when a component is activated
pub type OnClick = Arc<dyn Fn() + Send + Sync>;
