//! System bar styling
//!
//! Themes draw edge to edge: the platform's status and navigation bars are made
//! transparent and their icons are switched between dark and light to stay
//! legible on the theme background.

use crate::tokens::{Colors, Visibility};
use aurelius_core::Color;

/// Background luminance above which bar icons are drawn dark
const DARK_ICONS_LUMINANCE: f32 = 0.5;

/// How the host should style its system bars
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SystemBarsStyle {
    /// Bar background
    pub color: Color,
    /// Dark icons on a light background
    pub dark_icons: bool,
    pub status_bar_visible: bool,
    pub navigation_bar_visible: bool,
}

impl SystemBarsStyle {
    pub fn for_colors(colors: &Colors, visibility: &Visibility) -> Self {
        Self {
            color: Color::TRANSPARENT,
            dark_icons: colors.background.luminance() > DARK_ICONS_LUMINANCE,
            status_bar_visible: visibility.status_bar,
            navigation_bar_visible: visibility.navigation_bar,
        }
    }
}

/// Host hook that applies a [`SystemBarsStyle`] to the platform window
pub trait SystemBars {
    fn apply(&mut self, style: &SystemBarsStyle);
}

impl<F> SystemBars for F
where
    F: FnMut(&SystemBarsStyle),
{
    fn apply(&mut self, style: &SystemBarsStyle) {
        self(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_follow_background_brightness() {
        let light = SystemBarsStyle::for_colors(&Colors::light(), &Visibility::DEFAULT);
        let dark = SystemBarsStyle::for_colors(&Colors::dark(), &Visibility::DEFAULT);

        assert!(light.dark_icons);
        assert!(!dark.dark_icons);
        assert_eq!(light.color, Color::TRANSPARENT);
    }
}
