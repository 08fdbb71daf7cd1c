//! Trailing action buttons of the top app bar

use crate::components::OnClick;
use crate::icon::{Icon, IconStyle};
use aurelius_core::{Color, CornerRadius, EdgeInsets};
use aurelius_theme::{AureliusTheme, MissingThemeError};
use std::fmt;
use std::sync::Arc;

/// Icon size inside an action button
pub const ACTION_ICON_SIZE: f32 = 20.0;

/// Resolved action button
#[derive(Clone, Debug, PartialEq)]
pub struct ActionButtonStyle {
    pub corner_radius: CornerRadius,
    pub background: Color,
    pub padding: EdgeInsets,
    pub icon: IconStyle,
}

/// Quick operation on the current screen, shown at the end of the top app bar
#[derive(Clone)]
pub struct ActionButton {
    icon: Icon,
    content_description: String,
    on_click: Option<OnClick>,
}

impl ActionButton {
    pub fn new(icon: Icon, content_description: impl Into<String>) -> Self {
        Self {
            icon,
            content_description: content_description.into(),
            on_click: None,
        }
    }

    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(callback));
        self
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }

    pub fn click(&self) {
        if let Some(on_click) = &self.on_click {
            on_click();
        }
    }

    pub fn build(&self, theme: &AureliusTheme<'_>) -> Result<ActionButtonStyle, MissingThemeError> {
        theme.require_for("ActionButton")?;

        let colors = theme.colors();
        Ok(ActionButtonStyle {
            corner_radius: theme.shapes().tiny,
            background: colors.container.primary,
            padding: EdgeInsets::uniform(theme.sizes().spacing.small),
            icon: IconStyle {
                icon: self.icon,
                size: ACTION_ICON_SIZE,
                tint: colors.content.primary,
                content_description: self.content_description.clone(),
            },
        })
    }
}

impl fmt::Debug for ActionButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionButton")
            .field("icon", &self.icon)
            .field("content_description", &self.content_description)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// [`ActionButton`] that deletes what the current screen shows
#[derive(Clone, Debug)]
pub struct DeleteAction {
    button: ActionButton,
}

impl DeleteAction {
    pub fn new<F>(on_delete: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            button: ActionButton::new(Icon::Delete, "Delete").on_click(on_delete),
        }
    }

    pub fn click(&self) {
        self.button.click();
    }

    pub fn build(&self, theme: &AureliusTheme<'_>) -> Result<ActionButtonStyle, MissingThemeError> {
        self.button.build(theme)
    }
}

impl From<DeleteAction> for ActionButton {
    fn from(action: DeleteAction) -> Self {
        action.button
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurelius_core::Composition;
    use aurelius_theme::tokens::{Colors, Shapes};
    use aurelius_theme::aurelius_theme;

    #[test]
    fn test_action_button_requires_theme() {
        let composition = Composition::new();
        let error = ActionButton::new(Icon::Add, "Add")
            .build(&AureliusTheme::of(&composition))
            .unwrap_err();

        assert_eq!(error.context, "ActionButton");
    }

    #[test]
    fn test_action_button_style() {
        let composition = Composition::new();
        let style = aurelius_theme(&composition, Colors::light(), |theme| {
            ActionButton::new(Icon::Add, "Add").build(theme)
        })
        .unwrap();

        assert_eq!(style.corner_radius, Shapes::DEFAULT.tiny);
        assert_eq!(style.background, Colors::light().container.primary);
        assert_eq!(style.icon.tint, Colors::light().content.primary);
        assert_eq!(style.icon.size, ACTION_ICON_SIZE);
    }

    #[test]
    fn test_delete_action_describes_itself() {
        let composition = Composition::new();
        let style = aurelius_theme(&composition, Colors::dark(), |theme| {
            DeleteAction::new(|| {}).build(theme)
        })
        .unwrap();

        assert_eq!(style.icon.icon, Icon::Delete);
        assert_eq!(style.icon.content_description, "Delete");
    }
}
