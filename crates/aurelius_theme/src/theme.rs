//! Read-only theme facade

use crate::error::MissingThemeError;
use crate::locals::*;
use crate::tokens::{Animation, Colors, Shapes, Sizes, Text, Visibility};
use aurelius_core::Composition;
use std::fmt;

/// The theme visible at one point of a composition
///
/// Every accessor reads its slot on each call, so a facade obtained outside a
/// provider and used inside one observes the provided values.
#[derive(Clone, Copy)]
pub struct AureliusTheme<'c> {
    composition: &'c Composition,
}

impl<'c> AureliusTheme<'c> {
    pub fn of(composition: &'c Composition) -> Self {
        Self { composition }
    }

    /// Composition this facade reads from
    pub fn composition(&self) -> &'c Composition {
        self.composition
    }

    pub fn animation(&self) -> Animation {
        *self.composition.current(&LOCAL_ANIMATION)
    }

    pub fn colors(&self) -> Colors {
        *self.composition.current(&LOCAL_COLORS)
    }

    pub fn shapes(&self) -> Shapes {
        *self.composition.current(&LOCAL_SHAPES)
    }

    pub fn sizes(&self) -> Sizes {
        *self.composition.current(&LOCAL_SIZES)
    }

    pub fn text(&self) -> Text {
        *self.composition.current(&LOCAL_TEXT)
    }

    pub fn visibility(&self) -> Visibility {
        *self.composition.current(&LOCAL_VISIBILITY)
    }

    /// Whether every bundle has been provided
    ///
    /// True only when all six current values differ from their `UNSPECIFIED`
    /// counterparts.
    pub fn is_provided(&self) -> bool {
        self.animation() != Animation::UNSPECIFIED
            && self.colors() != Colors::UNSPECIFIED
            && self.shapes() != Shapes::UNSPECIFIED
            && self.sizes() != Sizes::UNSPECIFIED
            && self.text() != Text::UNSPECIFIED
            && self.visibility() != Visibility::UNSPECIFIED
    }

    /// Fail with [`MissingThemeError`] unless a theme is provided
    ///
    /// `context` names the caller in the error message and must not be blank.
    pub fn require_for(&self, context: &str) -> Result<(), MissingThemeError> {
        debug_assert!(
            !context.trim().is_empty(),
            "require_for needs the name of the component asking for the theme"
        );

        if self.is_provided() {
            Ok(())
        } else {
            tracing::warn!("{} used outside an AureliusTheme", context);
            Err(MissingThemeError::new(context))
        }
    }
}

impl fmt::Debug for AureliusTheme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AureliusTheme")
            .field("is_provided", &self.is_provided())
            .finish()
    }
}
