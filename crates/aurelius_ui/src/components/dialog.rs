//! Dialog buttons

use crate::components::OnClick;
use aurelius_core::{Color, CornerRadius, EdgeInsets};
use aurelius_theme::tokens::TextStyle;
use aurelius_theme::AureliusTheme;
use std::fmt;
use std::sync::Arc;

/// Identifies the confirmation button in UI tests
pub const CONFIRMATION_BUTTON_TAG: &str = "confirmation_button";

/// Resolved text button
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonStyle {
    pub tag: &'static str,
    pub label: String,
    pub corner_radius: CornerRadius,
    pub background: Color,
    pub text_color: Color,
    pub text_style: TextStyle,
    pub padding: EdgeInsets,
}

/// Accepts what a dialog proposes
#[derive(Clone)]
pub struct ConfirmationButton {
    label: String,
    on_click: Option<OnClick>,
}

impl ConfirmationButton {
    pub fn new() -> Self {
        Self {
            label: "OK".to_string(),
            on_click: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(callback));
        self
    }

    pub fn click(&self) {
        if let Some(on_click) = &self.on_click {
            on_click();
        }
    }

    pub fn build(&self, theme: &AureliusTheme<'_>) -> ButtonStyle {
        let colors = theme.colors();
        let spacing = theme.sizes().spacing;

        ButtonStyle {
            tag: CONFIRMATION_BUTTON_TAG,
            label: self.label.clone(),
            corner_radius: theme.shapes().medium,
            background: colors.container.primary,
            text_color: colors.content.primary,
            text_style: theme.text().label,
            padding: EdgeInsets::new(spacing.small, spacing.medium, spacing.small, spacing.medium),
        }
    }
}

impl Default for ConfirmationButton {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfirmationButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmationButton")
            .field("label", &self.label)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}
