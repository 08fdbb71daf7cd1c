//! Menu drawer demo
//!
//! Drives a themed scaffold (top app bar, menu drawer, floating action button)
//! through a scripted session without a window: a swipe opens the drawer, an item
//! click closes it, the keyboard shows up and the bar collapses.
//!
//! Run with:
//! ```sh
//! RUST_LOG=debug cargo run -p aurelius_ui --example drawer_demo
//! ```

use anyhow::Result;
use aurelius_core::{Composition, DragEvent, InsetsEvent, VelocityTracker};
use aurelius_platform::{Keyboard, KeyboardListener};
use aurelius_theme::{SystemBarsStyle, ThemeConfig, ThemeProvider};
use aurelius_ui::prelude::*;
use tracing_subscriber::EnvFilter;

const FRAME: f32 = 1.0 / 60.0;

const THEME: &str = r##"
scheme = "dark"

[colors]
container_primary = "#8B5CF6"
"##;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let colors = ThemeConfig::from_toml_str(THEME)?.colors()?;
    let composition = Composition::new();
    let mut provider = ThemeProvider::new().system_bars(|style: &SystemBarsStyle| {
        tracing::info!(dark_icons = style.dark_icons, "system bars styled");
    });

    let mut bar = TopAppBar::new("Inbox")
        .subtitle("3 unread")
        .navigation_button(MenuButton::new())
        .action(DeleteAction::new(|| tracing::info!("delete tapped")));
    let mut drawer = MenuDrawer::new("Aurelius")
        .item(
            MenuDrawerItem::new("Inbox")
                .icon(Icon::Menu)
                .selected(true),
        )
        .item(
            MenuDrawerItem::new("Settings")
                .icon(Icon::Settings)
                .on_click(|| tracing::info!("settings opened")),
        );
    let mut fab = FloatingActionButton::new(Icon::Add, "Compose");
    let mut keyboard = KeyboardListener::new(2.75, |keyboard: &Keyboard| {
        tracing::info!(height = keyboard.height(), "keyboard {:?}", keyboard);
    });

    // first frame: lay everything out
    provider.compose(&composition, colors, |theme| -> Result<()> {
        bar.build(theme)?;
        bar.on_placed(152.0);
        drawer.build(theme);
        drawer.on_layout(412.0);
        Ok(())
    })?;

    // swipe from the leading edge
    let mut tracker = VelocityTracker::new();
    let mut position = 0.0;
    for frame in 0..8u64 {
        position += 24.0;
        tracker.add(frame * 16, position);
        drawer.state_mut().handle(DragEvent::Delta(24.0));
    }
    drawer.state_mut().handle(DragEvent::Release {
        velocity: tracker.velocity(),
    });
    run_frames(&mut drawer, &mut bar, &mut fab);
    tracing::info!(open = drawer.is_open(), "after swipe");

    drawer.click_item(1);
    run_frames(&mut drawer, &mut bar, &mut fab);
    tracing::info!(open = drawer.is_open(), "after item click");

    // keyboard appears: collapse the bar and hide the button
    if let Some(state) = keyboard.on_apply_window_insets(&InsetsEvent::ime(913.0, true)) {
        let is_open = state.is_open();
        provider.compose(&composition, colors, |theme| {
            bar.set_compact(is_open);
            fab.set_visible(!is_open, theme);
        });
    }

    provider.compose(&composition, colors, |theme| -> Result<()> {
        bar.build(theme)?;
        Ok(())
    })?;
    run_frames(&mut drawer, &mut bar, &mut fab);

    provider.compose(&composition, colors, |theme| -> Result<()> {
        let layout = bar.build(theme)?;
        let fab = fab.build(theme);
        tracing::info!(
            bar_height = ?layout.height,
            fab_drawn = fab.is_drawn,
            "final frame"
        );
        Ok(())
    })?;

    Ok(())
}

fn run_frames(drawer: &mut MenuDrawer, bar: &mut TopAppBar, fab: &mut FloatingActionButton) {
    let mut frames = 0;
    while drawer.tick(FRAME) | bar.tick(FRAME) | fab.tick(FRAME) {
        frames += 1;
    }
    tracing::debug!(frames, "animations settled");
}
