//! Visibility tokens

/// Which system bars are shown and how disabled content fades
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct Visibility {
    pub status_bar: bool,
    pub navigation_bar: bool,
    /// Opacity applied to disabled components
    pub disabled_alpha: f32,
}

impl Visibility {
    pub const UNSPECIFIED: Visibility = Visibility {
        status_bar: false,
        navigation_bar: false,
        disabled_alpha: 0.0,
    };

    pub const DEFAULT: Visibility = Visibility {
        status_bar: true,
        navigation_bar: true,
        disabled_alpha: 0.38,
    };
}

impl Default for Visibility {
    fn default() -> Self {
        Self::DEFAULT
    }
}
