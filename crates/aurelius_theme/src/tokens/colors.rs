//! Color tokens for theming

use crate::themes::{aurelius, ColorScheme};
use aurelius_core::Color;

/// Primary/secondary pair of one color group
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPair {
    pub primary: Color,
    pub secondary: Color,
}

impl ColorPair {
    pub const fn new(primary: Color, secondary: Color) -> Self {
        Self { primary, secondary }
    }
}

/// Semantic color roles, for dynamic access and configuration keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    Background,
    ContainerPrimary,
    ContainerSecondary,
    ContentPrimary,
    ContentSecondary,
    TextPrimary,
    TextSecondary,
    Scrim,
    Error,
}

impl ColorRole {
    pub const ALL: [ColorRole; 9] = [
        ColorRole::Background,
        ColorRole::ContainerPrimary,
        ColorRole::ContainerSecondary,
        ColorRole::ContentPrimary,
        ColorRole::ContentSecondary,
        ColorRole::TextPrimary,
        ColorRole::TextSecondary,
        ColorRole::Scrim,
        ColorRole::Error,
    ];

    /// Snake-case name used in configuration files
    pub fn key(&self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::ContainerPrimary => "container_primary",
            ColorRole::ContainerSecondary => "container_secondary",
            ColorRole::ContentPrimary => "content_primary",
            ColorRole::ContentSecondary => "content_secondary",
            ColorRole::TextPrimary => "text_primary",
            ColorRole::TextSecondary => "text_secondary",
            ColorRole::Scrim => "scrim",
            ColorRole::Error => "error",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }
}

/// Complete set of semantic colors
///
/// `container` fills surfaces such as buttons and bars, `content` tints what is
/// drawn on top of containers (icons, labels), and `text` is for running text on
/// the background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Colors {
    pub background: Color,
    pub container: ColorPair,
    pub content: ColorPair,
    pub text: ColorPair,
    /// Dims content behind modal surfaces
    pub scrim: Color,
    pub error: Color,
}

impl Colors {
    /// Every role transparent
    ///
    /// A user palette that is entirely transparent is indistinguishable from this
    /// and reads as "no theme".
    pub const UNSPECIFIED: Colors = Colors {
        background: Color::TRANSPARENT,
        container: ColorPair::new(Color::TRANSPARENT, Color::TRANSPARENT),
        content: ColorPair::new(Color::TRANSPARENT, Color::TRANSPARENT),
        text: ColorPair::new(Color::TRANSPARENT, Color::TRANSPARENT),
        scrim: Color::TRANSPARENT,
        error: Color::TRANSPARENT,
    };

    pub fn light() -> Self {
        aurelius::LIGHT
    }

    pub fn dark() -> Self {
        aurelius::DARK
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::ContainerPrimary => self.container.primary,
            ColorRole::ContainerSecondary => self.container.secondary,
            ColorRole::ContentPrimary => self.content.primary,
            ColorRole::ContentSecondary => self.content.secondary,
            ColorRole::TextPrimary => self.text.primary,
            ColorRole::TextSecondary => self.text.secondary,
            ColorRole::Scrim => self.scrim,
            ColorRole::Error => self.error,
        }
    }

    pub fn set(&mut self, role: ColorRole, color: Color) {
        let slot = match role {
            ColorRole::Background => &mut self.background,
            ColorRole::ContainerPrimary => &mut self.container.primary,
            ColorRole::ContainerSecondary => &mut self.container.secondary,
            ColorRole::ContentPrimary => &mut self.content.primary,
            ColorRole::ContentSecondary => &mut self.content.secondary,
            ColorRole::TextPrimary => &mut self.text.primary,
            ColorRole::TextSecondary => &mut self.text.secondary,
            ColorRole::Scrim => &mut self.scrim,
            ColorRole::Error => &mut self.error,
        };
        *slot = color;
    }

    /// Copy with one role replaced
    pub fn with(mut self, role: ColorRole, color: Color) -> Self {
        self.set(role, color);
        self
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_keys_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(ColorRole::from_key(role.key()), Some(role));
        }
        assert_eq!(ColorRole::from_key("accent"), None);
    }

    #[test]
    fn test_with_replaces_only_that_role() {
        let colors = Colors::light().with(ColorRole::Error, Color::WHITE);

        assert_eq!(colors.get(ColorRole::Error), Color::WHITE);
        assert_eq!(colors.background, Colors::light().background);
    }

    #[test]
    fn test_builtin_palettes_are_specified() {
        assert_ne!(Colors::light(), Colors::UNSPECIFIED);
        assert_ne!(Colors::dark(), Colors::UNSPECIFIED);
        assert_ne!(Colors::light(), Colors::dark());
    }
}
