//! Icons referenced by components
//!
//! Components only name icons; the host maps each variant to its own vector asset.

use aurelius_core::{Color, LayoutDirection};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Add,
    ArrowBack,
    ArrowForward,
    Check,
    Close,
    Delete,
    Menu,
    Settings,
}

impl Icon {
    /// Arrow pointing toward the previous screen in `direction`
    pub fn back(direction: LayoutDirection) -> Self {
        match direction {
            LayoutDirection::Ltr => Icon::ArrowBack,
            LayoutDirection::Rtl => Icon::ArrowForward,
        }
    }
}

/// An icon as it should be drawn
#[derive(Clone, Debug, PartialEq)]
pub struct IconStyle {
    pub icon: Icon,
    /// Side length in logical pixels
    pub size: f32,
    pub tint: Color,
    /// Accessibility label
    pub content_description: String,
}
