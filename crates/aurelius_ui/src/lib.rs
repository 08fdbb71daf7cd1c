//! Aurelius Component Library
//!
//! Themed scaffold components: a sliding [`MenuDrawer`](components::menu_drawer::MenuDrawer),
//! a collapsible [`TopAppBar`](components::top_app_bar::TopAppBar) with navigation and
//! action buttons, a [`FloatingActionButton`](components::fab::FloatingActionButton) and
//! dialog buttons.
//!
//! Components hold their own interaction state (drawer position, bar size,
//! visibility) and are advanced by the host once per frame with `tick(dt)`. Their
//! `build` methods read the current [`AureliusTheme`](aurelius_theme::AureliusTheme)
//! and return plain style values for the host toolkit to render.
//!
//! # Quick Start
//!
//! ```rust
//! use aurelius_core::{Composition, DragEvent};
//! use aurelius_theme::{tokens::Colors, ThemeProvider};
//! use aurelius_ui::prelude::*;
//!
//! let composition = Composition::new();
//! let mut provider = ThemeProvider::new();
//! let mut drawer = MenuDrawer::new("Menu").item(MenuDrawerItem::new("Home"));
//!
//! drawer.on_layout(360.0);
//! drawer.state_mut().handle(DragEvent::Delta(200.0));
//! drawer.state_mut().handle(DragEvent::Release { velocity: 40.0 });
//! while drawer.tick(1.0 / 60.0) {}
//!
//! assert!(drawer.is_open());
//! provider.compose(&composition, Colors::light(), |theme| {
//!     let layout = drawer.build(theme);
//!     assert_eq!(layout.panel.offset_x, Some(0.0));
//! });
//! ```

pub mod components;
pub mod icon;

/// Commonly used components and state types
pub mod prelude {
    pub use crate::components::dialog::{ButtonStyle, ConfirmationButton, CONFIRMATION_BUTTON_TAG};
    pub use crate::components::fab::{
        FloatingActionButton, FloatingActionButtonStyle, FLOATING_ACTION_BUTTON_TAG,
    };
    pub use crate::components::menu_drawer::{
        swipe_transition, Anchors, DrawerState, DrawerValue, DrawerWidth, MenuDrawer,
        MenuDrawerItem, MenuDrawerLayout, Scrim, SwipeInput, SwipeOutcome, SwipeThresholds,
        MENU_DRAWER_TAG,
    };
    pub use crate::components::top_app_bar::{
        ActionButton, BackButton, CloseButton, DeleteAction, MenuButton, NavigationButton,
        TopAppBar, TopAppBarLayout, TopAppBarState, TOP_APP_BAR_TAG,
    };
    pub use crate::components::OnClick;
    pub use crate::icon::Icon;
}
