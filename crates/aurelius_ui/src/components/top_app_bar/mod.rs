//! Top app bar component
//!
//! Shows what the current screen is about, a leading navigation button and
//! trailing actions. The bar is either expanded, with a large title and an
//! optional subtitle, or compact; switching animates its height and spacing.
//!
//! # Example
//!
//! ```rust
//! use aurelius_core::Composition;
//! use aurelius_theme::{aurelius_theme, tokens::Colors};
//! use aurelius_ui::prelude::*;
//!
//! let mut bar = TopAppBar::new("Inbox")
//!     .subtitle("3 unread")
//!     .navigation_button(MenuButton::new())
//!     .action(DeleteAction::new(|| {}));
//!
//! let composition = Composition::new();
//! let layout = aurelius_theme(&composition, Colors::light(), |theme| bar.build(theme)).unwrap();
//! assert_eq!(layout.tag, TOP_APP_BAR_TAG);
//! assert_eq!(layout.actions.len(), 1);
//! ```

pub mod action;
pub mod navigation;
pub mod state;

pub use action::*;
pub use navigation::*;
pub use state::*;

use aurelius_core::{Brush, Color, EdgeInsets};
use aurelius_theme::tokens::TextStyle;
use aurelius_theme::{AureliusTheme, MissingThemeError};

/// Identifies the top app bar in UI tests
pub const TOP_APP_BAR_TAG: &str = "top_app_bar";

/// App bar at the top of a screen
#[derive(Debug)]
pub struct TopAppBar {
    title: String,
    subtitle: Option<String>,
    navigation_button: Option<NavigationButton>,
    actions: Vec<ActionButton>,
    container_brush: Option<Brush>,
    state: TopAppBarState,
}

impl TopAppBar {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            navigation_button: None,
            actions: Vec::new(),
            container_brush: None,
            state: TopAppBarState::default(),
        }
    }

    /// Secondary line, shown only while expanded
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn navigation_button(mut self, button: impl Into<NavigationButton>) -> Self {
        self.navigation_button = Some(button.into());
        self
    }

    pub fn action(mut self, action: impl Into<ActionButton>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Background; defaults to the theme's secondary container color
    pub fn container_brush(mut self, brush: impl Into<Brush>) -> Self {
        self.container_brush = Some(brush.into());
        self
    }

    /// Start compact instead of expanded
    pub fn compact(mut self, is_compact: bool) -> Self {
        self.state = TopAppBarState::new(is_compact);
        self
    }

    pub fn set_compact(&mut self, is_compact: bool) {
        self.state.set_compact(is_compact);
    }

    pub fn is_compact(&self) -> bool {
        self.state.is_compact()
    }

    pub fn state(&self) -> &TopAppBarState {
        &self.state
    }

    pub fn navigation(&self) -> Option<&NavigationButton> {
        self.navigation_button.as_ref()
    }

    pub fn actions(&self) -> &[ActionButton] {
        &self.actions
    }

    /// Report the laid-out height of the bar
    pub fn on_placed(&mut self, height: f32) -> bool {
        self.state.on_placed(height)
    }

    pub fn tick(&mut self, dt: f32) -> bool {
        self.state.tick(dt)
    }

    /// Resolve the bar against `theme`
    pub fn build(&mut self, theme: &AureliusTheme<'_>) -> Result<TopAppBarLayout, MissingThemeError> {
        theme.require_for("TopAppBar")?;

        let colors = theme.colors();
        let sizes = theme.sizes();
        let text = theme.text();
        let is_compact = self.state.is_compact();

        self.state.update(
            sizes.spacing.medium,
            sizes.spacing.large,
            sizes.margin.status_bar.top,
            theme.animation().default_spec(),
        );
        let spacing = self.state.spacing();

        let actions = self
            .actions
            .iter()
            .map(|action| action.build(theme))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TopAppBarLayout {
            tag: TOP_APP_BAR_TAG,
            height: self.state.height(),
            spacing,
            padding: sizes.margin.status_bar + EdgeInsets::uniform(spacing),
            background: self
                .container_brush
                .clone()
                .unwrap_or(Brush::Solid(colors.container.secondary)),
            title: self.title.clone(),
            title_style: if is_compact {
                text.title.small
            } else {
                text.title.large
            },
            title_color: colors.text.primary,
            subtitle: self
                .subtitle
                .clone()
                .filter(|_| !is_compact)
                .map(|subtitle| (subtitle, text.body)),
            navigation: self
                .navigation_button
                .as_ref()
                .map(|button| button.build(theme)),
            actions,
            action_spacing: sizes.spacing.small,
        })
    }
}

/// Everything the host needs to draw a top app bar
#[derive(Clone, Debug, PartialEq)]
pub struct TopAppBarLayout {
    pub tag: &'static str,
    /// `None` lets the bar take its natural height
    pub height: Option<f32>,
    /// Gap between the navigation button and the headline
    pub spacing: f32,
    pub padding: EdgeInsets,
    pub background: Brush,
    pub title: String,
    pub title_style: TextStyle,
    pub title_color: Color,
    pub subtitle: Option<(String, TextStyle)>,
    pub navigation: Option<IconButtonStyle>,
    pub actions: Vec<ActionButtonStyle>,
    /// Gap between actions
    pub action_spacing: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurelius_core::Composition;
    use aurelius_theme::aurelius_theme;
    use aurelius_theme::tokens::{Colors, Sizes, Text};

    #[test]
    fn test_top_app_bar_requires_theme() {
        let composition = Composition::new();
        let error = TopAppBar::new("Title")
            .build(&AureliusTheme::of(&composition))
            .unwrap_err();

        assert_eq!(error.to_string(), "TopAppBar requires an AureliusTheme.");
    }

    #[test]
    fn test_compact_bar_hides_subtitle() {
        let composition = Composition::new();
        let mut bar = TopAppBar::new("Title").subtitle("Subtitle").compact(true);

        let layout = aurelius_theme(&composition, Colors::light(), |theme| bar.build(theme)).unwrap();

        assert_eq!(layout.subtitle, None);
        assert_eq!(layout.title_style, Text::DEFAULT.title.small);
        assert_eq!(
            layout.height,
            Some(COMPACT_HEIGHT + Sizes::DEFAULT.margin.status_bar.top)
        );
        assert_eq!(layout.spacing, Sizes::DEFAULT.spacing.medium);
    }

    #[test]
    fn test_default_background_is_secondary_container() {
        let composition = Composition::new();
        let mut bar = TopAppBar::new("Title");

        let layout = aurelius_theme(&composition, Colors::dark(), |theme| bar.build(theme)).unwrap();

        assert_eq!(
            layout.background,
            Brush::Solid(Colors::dark().container.secondary)
        );
        assert_eq!(layout.height, None);
    }
}
