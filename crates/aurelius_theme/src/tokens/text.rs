//! Typography tokens

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Light,
    #[default]
    Normal,
    Medium,
    SemiBold,
    Bold,
}

impl FontWeight {
    /// CSS-style numeric weight (100-900)
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// Resolved style of one text role
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub line_height: f32,
    pub weight: FontWeight,
    pub letter_spacing: f32,
}

impl TextStyle {
    /// Zero-sized style the host falls back to its own defaults for
    pub const DEFAULT: TextStyle = TextStyle {
        font_size: 0.0,
        line_height: 0.0,
        weight: FontWeight::Normal,
        letter_spacing: 0.0,
    };

    pub const fn new(font_size: f32, line_height: f32, weight: FontWeight) -> Self {
        Self {
            font_size,
            line_height,
            weight,
            letter_spacing: 0.0,
        }
    }

    pub const fn with_letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Title styles
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct Title {
    /// Screen titles
    pub large: TextStyle,
    /// Section and dialog titles
    pub small: TextStyle,
}

impl Title {
    pub const UNSPECIFIED: Title = Title {
        large: TextStyle::DEFAULT,
        small: TextStyle::DEFAULT,
    };
}

/// Text styles by role
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct Text {
    pub headline: TextStyle,
    pub title: Title,
    pub body: TextStyle,
    pub label: TextStyle,
}

impl Text {
    pub const UNSPECIFIED: Text = Text {
        headline: TextStyle::DEFAULT,
        title: Title::UNSPECIFIED,
        body: TextStyle::DEFAULT,
        label: TextStyle::DEFAULT,
    };

    pub const DEFAULT: Text = Text {
        headline: TextStyle::new(32.0, 40.0, FontWeight::Bold),
        title: Title {
            large: TextStyle::new(24.0, 32.0, FontWeight::SemiBold),
            small: TextStyle::new(18.0, 24.0, FontWeight::SemiBold),
        },
        body: TextStyle::new(16.0, 24.0, FontWeight::Normal),
        label: TextStyle::new(14.0, 20.0, FontWeight::Medium).with_letter_spacing(0.1),
    };
}

impl Default for Text {
    fn default() -> Self {
        Self::DEFAULT
    }
}
