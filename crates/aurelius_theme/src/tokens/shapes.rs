//! Corner-radius tokens

use aurelius_core::CornerRadius;

/// Corner radii by component size, from surfaces down to chips
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct Shapes {
    /// Sheets and drawers
    pub huge: CornerRadius,
    pub large: CornerRadius,
    /// Dialog buttons and cards
    pub medium: CornerRadius,
    pub small: CornerRadius,
    /// Icon buttons
    pub tiny: CornerRadius,
}

impl Shapes {
    pub const UNSPECIFIED: Shapes = Shapes {
        huge: CornerRadius::ZERO,
        large: CornerRadius::ZERO,
        medium: CornerRadius::ZERO,
        small: CornerRadius::ZERO,
        tiny: CornerRadius::ZERO,
    };

    pub const DEFAULT: Shapes = Shapes {
        huge: CornerRadius::uniform(32.0),
        large: CornerRadius::uniform(24.0),
        medium: CornerRadius::uniform(16.0),
        small: CornerRadius::uniform(12.0),
        tiny: CornerRadius::uniform(8.0),
    };
}

impl Default for Shapes {
    fn default() -> Self {
        Self::DEFAULT
    }
}
