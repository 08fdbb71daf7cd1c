//! Floating action button
//!
//! The main action of a screen. Hiding and showing it fades it (medium duration)
//! while sliding it down past its own height (fast duration).

use crate::components::OnClick;
use crate::icon::{Icon, IconStyle};
use aurelius_animation::Animatable;
use aurelius_core::{Color, CornerRadius};
use aurelius_theme::AureliusTheme;
use std::fmt;
use std::sync::Arc;

/// Identifies the floating action button in UI tests
pub const FLOATING_ACTION_BUTTON_TAG: &str = "floating_action_button";

const SIZE: f32 = 56.0;
const ICON_SIZE: f32 = 24.0;

/// Resolved floating action button
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingActionButtonStyle {
    pub tag: &'static str,
    /// False once fully hidden; the host can skip drawing it
    pub is_drawn: bool,
    pub alpha: f32,
    /// Downward translation as a fraction of [`size`](Self::size)
    pub translation_y: f32,
    pub size: f32,
    pub corner_radius: CornerRadius,
    pub container: Color,
    pub icon: IconStyle,
}

pub struct FloatingActionButton {
    icon: Icon,
    content_description: String,
    on_click: Option<OnClick>,
    container_color: Option<Color>,
    content_color: Option<Color>,
    is_visible: bool,
    alpha: Animatable,
    /// 0 in place, 1 slid out
    slide: Animatable,
}

impl FloatingActionButton {
    pub fn new(icon: Icon, content_description: impl Into<String>) -> Self {
        Self {
            icon,
            content_description: content_description.into(),
            on_click: None,
            container_color: None,
            content_color: None,
            is_visible: true,
            alpha: Animatable::new(1.0),
            slide: Animatable::new(0.0),
        }
    }

    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(callback));
        self
    }

    /// Defaults to the theme's primary container color
    pub fn container_color(mut self, color: Color) -> Self {
        self.container_color = Some(color);
        self
    }

    /// Defaults to the theme's primary content color
    pub fn content_color(mut self, color: Color) -> Self {
        self.content_color = Some(color);
        self
    }

    /// Start hidden without animating
    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self.alpha.snap_to(0.0);
        self.slide.snap_to(1.0);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// Show or hide, animating with `theme`'s motion settings
    pub fn set_visible(&mut self, is_visible: bool, theme: &AureliusTheme<'_>) {
        if self.is_visible == is_visible {
            return;
        }
        self.is_visible = is_visible;

        let animation = theme.animation();
        let (alpha, slide) = if is_visible { (1.0, 0.0) } else { (0.0, 1.0) };
        self.alpha.animate_to(alpha, animation.spec(|d| d.medium));
        self.slide.animate_to(slide, animation.spec(|d| d.fast));
    }

    pub fn click(&self) {
        if self.is_visible {
            if let Some(on_click) = &self.on_click {
                on_click();
            }
        }
    }

    pub fn tick(&mut self, dt: f32) -> bool {
        let alpha = self.alpha.tick(dt);
        let slide = self.slide.tick(dt);
        alpha || slide
    }

    pub fn build(&self, theme: &AureliusTheme<'_>) -> FloatingActionButtonStyle {
        let colors = theme.colors();
        let alpha = self.alpha.value();

        FloatingActionButtonStyle {
            tag: FLOATING_ACTION_BUTTON_TAG,
            is_drawn: self.is_visible || alpha > 0.0,
            alpha,
            translation_y: self.slide.value(),
            size: SIZE,
            corner_radius: theme.shapes().large,
            container: self.container_color.unwrap_or(colors.container.primary),
            icon: IconStyle {
                icon: self.icon,
                size: ICON_SIZE,
                tint: self.content_color.unwrap_or(colors.content.primary),
                content_description: self.content_description.clone(),
            },
        }
    }
}

impl fmt::Debug for FloatingActionButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatingActionButton")
            .field("icon", &self.icon)
            .field("is_visible", &self.is_visible)
            .field("alpha", &self.alpha.value())
            .field("slide", &self.slide.value())
            .finish()
    }
}
