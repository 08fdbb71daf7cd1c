//! Spacing and margin tokens

use aurelius_core::EdgeInsets;

/// Distances between and inside components
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct Spacing {
    pub huge: f32,
    pub large: f32,
    pub medium: f32,
    pub small: f32,
    pub tiny: f32,
}

impl Spacing {
    pub const UNSPECIFIED: Spacing = Spacing {
        huge: 0.0,
        large: 0.0,
        medium: 0.0,
        small: 0.0,
        tiny: 0.0,
    };

    pub const DEFAULT: Spacing = Spacing {
        huge: 24.0,
        large: 20.0,
        medium: 16.0,
        small: 8.0,
        tiny: 4.0,
    };
}

/// Space reserved for system bars drawn over the window
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct Margin {
    pub status_bar: EdgeInsets,
    pub navigation_bar: EdgeInsets,
}

impl Margin {
    pub const UNSPECIFIED: Margin = Margin {
        status_bar: EdgeInsets::ZERO,
        navigation_bar: EdgeInsets::ZERO,
    };

    /// Typical phone system bars: 24 on top, 48 at the bottom
    pub const DEFAULT: Margin = Margin {
        status_bar: EdgeInsets::top(24.0),
        navigation_bar: EdgeInsets::bottom(48.0),
    };

    /// Margins from the host window's reported system bar insets
    pub fn new(status_bar: EdgeInsets, navigation_bar: EdgeInsets) -> Self {
        Self {
            status_bar,
            navigation_bar,
        }
    }
}

/// Area measurements shared by all components
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct Sizes {
    pub spacing: Spacing,
    pub margin: Margin,
}

impl Sizes {
    pub const UNSPECIFIED: Sizes = Sizes {
        spacing: Spacing::UNSPECIFIED,
        margin: Margin::UNSPECIFIED,
    };

    pub const DEFAULT: Sizes = Sizes {
        spacing: Spacing::DEFAULT,
        margin: Margin::DEFAULT,
    };

    /// Copy with different system bar margins
    pub fn with_margin(self, margin: Margin) -> Self {
        Self { margin, ..self }
    }
}

impl Default for Sizes {
    fn default() -> Self {
        Self::DEFAULT
    }
}
