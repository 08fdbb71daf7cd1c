//! Leading navigation buttons of the top app bar

use crate::components::OnClick;
use crate::icon::{Icon, IconStyle};
use aurelius_core::{Color, LayoutDirection};
use aurelius_theme::AureliusTheme;
use std::fmt;
use std::sync::Arc;

/// Icon size of every navigation button
pub const NAVIGATION_ICON_SIZE: f32 = 24.0;

/// Resolved icon-only button
#[derive(Clone, Debug, PartialEq)]
pub struct IconButtonStyle {
    pub icon: IconStyle,
}

/// Shared configuration of the navigation buttons
#[derive(Clone, Default)]
struct NavigationConfig {
    on_click: Option<OnClick>,
    tint: Option<Color>,
}

impl NavigationConfig {
    fn click(&self) {
        if let Some(on_click) = &self.on_click {
            on_click();
        }
    }

    fn build(&self, theme: &AureliusTheme<'_>, icon: Icon, description: &str) -> IconButtonStyle {
        IconButtonStyle {
            icon: IconStyle {
                icon,
                size: NAVIGATION_ICON_SIZE,
                tint: self.tint.unwrap_or(theme.colors().content.secondary),
                content_description: description.to_string(),
            },
        }
    }
}

impl fmt::Debug for NavigationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationConfig")
            .field("on_click", &self.on_click.is_some())
            .field("tint", &self.tint)
            .finish()
    }
}

macro_rules! navigation_builder {
    () => {
        pub fn on_click<F>(mut self, callback: F) -> Self
        where
            F: Fn() + Send + Sync + 'static,
        {
            self.config.on_click = Some(Arc::new(callback));
            self
        }

        /// Icon color; defaults to the theme's secondary content color
        pub fn tint(mut self, tint: Color) -> Self {
            self.config.tint = Some(tint);
            self
        }

        pub fn click(&self) {
            self.config.click();
        }
    };
}

/// Navigates to the previous screen
///
/// The arrow points against the reading direction.
#[derive(Clone, Debug, Default)]
pub struct BackButton {
    config: NavigationConfig,
    direction: LayoutDirection,
}

impl BackButton {
    pub fn new() -> Self {
        Self::default()
    }

    navigation_builder!();

    pub fn layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn build(&self, theme: &AureliusTheme<'_>) -> IconButtonStyle {
        self.config.build(theme, Icon::back(self.direction), "Back")
    }
}

/// Dismisses the current screen
#[derive(Clone, Debug, Default)]
pub struct CloseButton {
    config: NavigationConfig,
}

impl CloseButton {
    pub fn new() -> Self {
        Self::default()
    }

    navigation_builder!();

    pub fn build(&self, theme: &AureliusTheme<'_>) -> IconButtonStyle {
        self.config.build(theme, Icon::Close, "Close")
    }
}

/// Opens the menu drawer
#[derive(Clone, Debug, Default)]
pub struct MenuButton {
    config: NavigationConfig,
}

impl MenuButton {
    pub fn new() -> Self {
        Self::default()
    }

    navigation_builder!();

    pub fn build(&self, theme: &AureliusTheme<'_>) -> IconButtonStyle {
        self.config.build(theme, Icon::Menu, "Menu")
    }
}

/// Any of the leading navigation buttons
#[derive(Clone, Debug)]
pub enum NavigationButton {
    Back(BackButton),
    Close(CloseButton),
    Menu(MenuButton),
}

impl NavigationButton {
    pub fn click(&self) {
        match self {
            NavigationButton::Back(button) => button.click(),
            NavigationButton::Close(button) => button.click(),
            NavigationButton::Menu(button) => button.click(),
        }
    }

    pub fn build(&self, theme: &AureliusTheme<'_>) -> IconButtonStyle {
        match self {
            NavigationButton::Back(button) => button.build(theme),
            NavigationButton::Close(button) => button.build(theme),
            NavigationButton::Menu(button) => button.build(theme),
        }
    }
}

impl From<BackButton> for NavigationButton {
    fn from(button: BackButton) -> Self {
        NavigationButton::Back(button)
    }
}

impl From<CloseButton> for NavigationButton {
    fn from(button: CloseButton) -> Self {
        NavigationButton::Close(button)
    }
}

impl From<MenuButton> for NavigationButton {
    fn from(button: MenuButton) -> Self {
        NavigationButton::Menu(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurelius_core::Composition;
    use aurelius_theme::{aurelius_theme, tokens::Colors};
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_back_button_follows_direction() {
        let composition = Composition::new();
        aurelius_theme(&composition, Colors::light(), |theme| {
            let ltr = BackButton::new().build(theme);
            let rtl = BackButton::new()
                .layout_direction(LayoutDirection::Rtl)
                .build(theme);

            assert_eq!(ltr.icon.icon, Icon::ArrowBack);
            assert_eq!(rtl.icon.icon, Icon::ArrowForward);
            assert_eq!(ltr.icon.tint, Colors::light().content.secondary);
        });
    }

    #[test]
    fn test_custom_tint_wins() {
        let composition = Composition::new();
        let style = aurelius_theme(&composition, Colors::dark(), |theme| {
            CloseButton::new().tint(Color::WHITE).build(theme)
        });

        assert_eq!(style.icon.tint, Color::WHITE);
        assert_eq!(style.icon.size, NAVIGATION_ICON_SIZE);
    }

    #[test]
    fn test_click_through_enum() {
        let clicked = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&clicked);
        let button: NavigationButton = MenuButton::new()
            .on_click(move || flag.store(true, Ordering::SeqCst))
            .into();

        button.click();
        assert!(clicked.load(Ordering::SeqCst));
    }
}
