//! Menu drawer component
//!
//! A navigation panel that slides in from the leading edge over the main
//! content, dimming it with a scrim. Items usually close the drawer when clicked.
//!
//! # Example
//!
//! ```rust
//! use aurelius_core::Composition;
//! use aurelius_theme::{aurelius_theme, tokens::Colors};
//! use aurelius_ui::prelude::*;
//!
//! let mut drawer = MenuDrawer::new("Aurelius")
//!     .item(MenuDrawerItem::new("Settings").icon(Icon::Settings).selected(true))
//!     .item(MenuDrawerItem::new("Rate").on_click(|| println!("rate")));
//!
//! // the host reports its container width once laid out
//! drawer.on_layout(400.0);
//! drawer.open();
//! while drawer.tick(1.0 / 60.0) {}
//!
//! let composition = Composition::new();
//! let layout = aurelius_theme(&composition, Colors::light(), |theme| drawer.build(theme));
//! assert_eq!(layout.panel.width, Some(320.0));
//! assert!(layout.scrim.is_some());
//! ```

pub mod state;

pub use state::*;

use crate::components::OnClick;
use crate::icon::{Icon, IconStyle};
use aurelius_core::{Color, CornerRadius, EdgeInsets, LayoutDirection};
use aurelius_theme::tokens::TextStyle;
use aurelius_theme::AureliusTheme;
use std::fmt;
use std::sync::Arc;

/// Identifies the drawer panel in UI tests
pub const MENU_DRAWER_TAG: &str = "menu_drawer";

/// Share of the container width the panel takes
pub const PANEL_WIDTH_FRACTION: f32 = 0.8;

const ITEM_ICON_SIZE: f32 = 24.0;

/// One entry of the drawer
#[derive(Clone)]
pub struct MenuDrawerItem {
    label: String,
    icon: Option<Icon>,
    is_selected: bool,
    on_click: Option<OnClick>,
}

impl MenuDrawerItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            is_selected: false,
            on_click: None,
        }
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Highlight this item as the current destination
    pub fn selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(callback));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }
}

impl fmt::Debug for MenuDrawerItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuDrawerItem")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("is_selected", &self.is_selected)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Sliding navigation drawer
#[derive(Debug)]
pub struct MenuDrawer {
    title: String,
    items: Vec<MenuDrawerItem>,
    state: DrawerState,
    close_on_item_click: bool,
    layout_direction: LayoutDirection,
}

impl MenuDrawer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            state: DrawerState::default(),
            close_on_item_click: true,
            layout_direction: LayoutDirection::Ltr,
        }
    }

    pub fn item(mut self, item: MenuDrawerItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = MenuDrawerItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Whether clicking an item also closes the drawer (default: true)
    pub fn close_on_item_click(mut self, close: bool) -> Self {
        self.close_on_item_click = close;
        self
    }

    pub fn layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    /// Start open or closed
    pub fn initial_value(mut self, value: DrawerValue) -> Self {
        self.state = DrawerState::new(value);
        self
    }

    pub fn state(&self) -> &DrawerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DrawerState {
        &mut self.state
    }

    pub fn open(&mut self) {
        self.state.open();
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Report the width of the container the drawer is laid out in
    ///
    /// The panel takes [`PANEL_WIDTH_FRACTION`] of it. Only the first valid
    /// report is kept.
    pub fn on_layout(&mut self, container_width: f32) -> bool {
        self.state.on_placed(container_width * PANEL_WIDTH_FRACTION)
    }

    /// Activate the item at `index`; returns false if there is none
    pub fn click_item(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };

        tracing::debug!("menu drawer item {:?} clicked", item.label);
        if let Some(on_click) = &item.on_click {
            on_click();
        }
        if self.close_on_item_click {
            self.state.close();
        }
        true
    }

    /// Advance the slide animation; returns whether it is still running
    pub fn tick(&mut self, dt: f32) -> bool {
        self.state.tick(dt)
    }

    /// Resolve the drawer against `theme`
    ///
    /// Later drawer motion also adopts the theme's animation spec.
    pub fn build(&mut self, theme: &AureliusTheme<'_>) -> MenuDrawerLayout {
        self.state
            .set_animation_spec(theme.animation().default_spec());

        let colors = theme.colors();
        let sizes = theme.sizes();
        let spacing = sizes.spacing.huge;

        let panel = DrawerPanelStyle {
            width: self.state.width().value(),
            offset_x: self.state.offset(),
            corner_radius: theme
                .shapes()
                .huge
                .with_start_zeroed(self.layout_direction),
            background: colors.background,
            padding: sizes.margin.status_bar
                + sizes.margin.navigation_bar
                + EdgeInsets::uniform(spacing),
            spacing,
            title: self.title.clone(),
            title_style: theme.text().headline,
        };

        let scrim = self.state.scrim().map(|scrim| ScrimStyle {
            color: colors.scrim,
            opacity: scrim.opacity,
        });

        let items = self
            .items
            .iter()
            .map(|item| {
                let (background, foreground) = if item.is_selected {
                    (colors.container.primary, colors.content.primary)
                } else {
                    (Color::TRANSPARENT, colors.text.primary)
                };

                MenuDrawerItemStyle {
                    label: item.label.clone(),
                    icon: item.icon.map(|icon| IconStyle {
                        icon,
                        size: ITEM_ICON_SIZE,
                        tint: foreground,
                        content_description: item.label.clone(),
                    }),
                    is_selected: item.is_selected,
                    background,
                    text_color: foreground,
                    text_style: theme.text().body,
                    corner_radius: theme.shapes().medium,
                    padding: EdgeInsets::uniform(sizes.spacing.medium),
                }
            })
            .collect();

        MenuDrawerLayout {
            tag: MENU_DRAWER_TAG,
            panel,
            scrim,
            items,
        }
    }
}

/// Resolved drawer panel
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerPanelStyle {
    /// Measured width; `None` means the host should lay the panel out to measure it
    pub width: Option<f32>,
    /// Horizontal offset from the leading edge; `None` until measured
    pub offset_x: Option<f32>,
    /// Trailing corners rounded, leading corners square against the screen edge
    pub corner_radius: CornerRadius,
    pub background: Color,
    pub padding: EdgeInsets,
    /// Gap between the title and each item
    pub spacing: f32,
    pub title: String,
    pub title_style: TextStyle,
}

/// Resolved scrim over the main content
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrimStyle {
    pub color: Color,
    pub opacity: f32,
}

/// Resolved drawer item
#[derive(Clone, Debug, PartialEq)]
pub struct MenuDrawerItemStyle {
    pub label: String,
    pub icon: Option<IconStyle>,
    pub is_selected: bool,
    pub background: Color,
    pub text_color: Color,
    pub text_style: TextStyle,
    pub corner_radius: CornerRadius,
    pub padding: EdgeInsets,
}

/// Everything the host needs to draw a menu drawer
#[derive(Clone, Debug, PartialEq)]
pub struct MenuDrawerLayout {
    pub tag: &'static str,
    pub panel: DrawerPanelStyle,
    /// Present whenever the drawer is at least partly shown
    pub scrim: Option<ScrimStyle>,
    pub items: Vec<MenuDrawerItemStyle>,
}
