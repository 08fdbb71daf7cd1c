//! Theme provider
//!
//! Installs every token bundle into a [`Composition`] for the duration of a
//! subtree. Colors are chosen by the caller; the other bundles are the library
//! defaults, with system bar margins taken from the host window when known.
//!
//! ```rust
//! use aurelius_core::Composition;
//! use aurelius_theme::{aurelius_theme, tokens::Colors, AureliusTheme};
//!
//! let composition = Composition::new();
//!
//! aurelius_theme(&composition, Colors::dark(), |theme| {
//!     assert!(theme.is_provided());
//!     assert_eq!(theme.colors(), Colors::dark());
//! });
//!
//! assert!(!AureliusTheme::of(&composition).is_provided());
//! ```

use crate::locals::*;
use crate::system_bars::{SystemBars, SystemBarsStyle};
use crate::theme::AureliusTheme;
use crate::tokens::{Animation, Colors, Margin, Shapes, Sizes, Text, Visibility};
use aurelius_core::Composition;
use std::fmt;
use std::sync::Arc;

/// Long-lived provider for one place in the UI tree
///
/// Keep one instance per provider site so that the system bar effect only runs
/// when the colors actually change.
#[derive(Default)]
pub struct ThemeProvider {
    system_bars: Option<Box<dyn SystemBars>>,
    margin: Option<Margin>,
    /// Colors last handed to `system_bars`
    applied: Option<Colors>,
}

impl ThemeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style the platform system bars whenever the provided colors change
    pub fn system_bars(mut self, system_bars: impl SystemBars + 'static) -> Self {
        self.system_bars = Some(Box::new(system_bars));
        self
    }

    /// System bar margins reported by the host window
    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Update the margins after the host window's insets change
    pub fn set_margin(&mut self, margin: Margin) {
        self.margin = Some(margin);
    }

    /// Provide the theme while running `content`
    ///
    /// Outer values become visible again when this returns, including by unwinding.
    pub fn compose<R>(
        &mut self,
        composition: &Composition,
        colors: impl Into<Arc<Colors>>,
        content: impl FnOnce(&AureliusTheme<'_>) -> R,
    ) -> R {
        let colors: Arc<Colors> = colors.into();
        let sizes = match self.margin {
            Some(margin) => Sizes::DEFAULT.with_margin(margin),
            None => Sizes::DEFAULT,
        };
        let visibility = Visibility::DEFAULT;

        self.apply_system_bars(&colors, &visibility);

        let _animation = composition.provide(&LOCAL_ANIMATION, Animation::DEFAULT);
        let _colors = composition.provide(&LOCAL_COLORS, colors);
        let _shapes = composition.provide(&LOCAL_SHAPES, Shapes::DEFAULT);
        let _sizes = composition.provide(&LOCAL_SIZES, sizes);
        let _text = composition.provide(&LOCAL_TEXT, Text::DEFAULT);
        let _visibility = composition.provide(&LOCAL_VISIBILITY, visibility);

        tracing::debug!(
            "theme provided at depth {}",
            composition.depth(&LOCAL_COLORS) - 1
        );

        content(&AureliusTheme::of(composition))
    }

    fn apply_system_bars(&mut self, colors: &Colors, visibility: &Visibility) {
        let Some(system_bars) = self.system_bars.as_mut() else {
            return;
        };
        if self.applied.as_ref() == Some(colors) {
            return;
        }

        let style = SystemBarsStyle::for_colors(colors, visibility);
        tracing::debug!("applying system bars style: {:?}", style);
        system_bars.apply(&style);
        self.applied = Some(*colors);
    }
}

impl fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("system_bars", &self.system_bars.is_some())
            .field("margin", &self.margin)
            .field("applied", &self.applied)
            .finish()
    }
}

/// Provide the theme with `colors` for one call, without system bar tracking
pub fn aurelius_theme<R>(
    composition: &Composition,
    colors: impl Into<Arc<Colors>>,
    content: impl FnOnce(&AureliusTheme<'_>) -> R,
) -> R {
    ThemeProvider::new().compose(composition, colors, content)
}
