//! Integration tests for the menu drawer
//!
//! These tests verify that:
//! - Progress always matches the offset between the anchors
//! - Back-to-back open/close requests settle on the latest one
//! - The first measured width is the only one that counts
//! - The scrim follows progress and closes the drawer one tick after a tap

use aurelius_core::{Composition, DragEvent};
use aurelius_theme::{aurelius_theme, tokens::Colors, ThemeProvider};
use aurelius_ui::prelude::*;
use pretty_assertions::assert_eq;

const WIDTH: f32 = 300.0;

fn measured_state(initial: DrawerValue) -> DrawerState {
    let mut state = DrawerState::new(initial);
    assert!(state.on_placed(WIDTH));
    state
}

fn settle(state: &mut DrawerState) {
    let mut frames = 0;
    while state.tick(1.0 / 60.0) {
        frames += 1;
        assert!(frames < 600, "drawer never settled");
    }
}

#[test]
fn test_progress_at_anchors() {
    let closed = measured_state(DrawerValue::Closed);
    let open = measured_state(DrawerValue::Open);

    assert_eq!(closed.progress(), 0.0);
    assert_eq!(open.progress(), 1.0);
}

#[test]
fn test_progress_tracks_any_drag_sequence() {
    let mut state = measured_state(DrawerValue::Closed);

    for delta in [40.0, 120.0, -30.0, 500.0, -75.0, -1_000.0, 90.0] {
        state.drag(delta);
        let offset = state.offset().unwrap();
        let expected = ((offset + WIDTH) / WIDTH).clamp(0.0, 1.0);

        assert!((-WIDTH..=0.0).contains(&offset));
        assert!((state.progress() - expected).abs() < 1e-6);
    }
}

#[test]
fn test_close_then_open_settles_open() {
    let mut state = measured_state(DrawerValue::Closed);

    state.close();
    state.open();
    settle(&mut state);

    assert_eq!(state.offset(), Some(0.0));
    assert!(state.is_open());
}

#[test]
fn test_reopening_mid_close_settles_open() {
    let mut state = measured_state(DrawerValue::Open);

    state.close();
    for _ in 0..5 {
        state.tick(1.0 / 60.0);
    }
    state.open();
    settle(&mut state);

    assert_eq!(state.offset(), Some(0.0));
}

#[test]
fn test_second_width_does_not_move_closed_anchor() {
    let mut state = measured_state(DrawerValue::Closed);

    assert!(!state.on_placed(WIDTH * 2.0));
    state.open();
    settle(&mut state);
    state.close();
    settle(&mut state);

    assert_eq!(state.offset(), Some(-WIDTH));
    assert_eq!(state.width(), DrawerWidth::Measured(WIDTH));
}

#[test]
fn test_flick_overrides_position() {
    let mut state = measured_state(DrawerValue::Closed);

    state.handle(DragEvent::Delta(30.0));
    state.handle(DragEvent::Release { velocity: 900.0 });
    settle(&mut state);
    assert!(state.is_open());

    state.handle(DragEvent::Delta(-30.0));
    state.handle(DragEvent::Release { velocity: -900.0 });
    settle(&mut state);
    assert!(!state.is_open());
}

#[test]
fn test_fast_release_never_leaves_anchors() {
    for (start, velocity, expected) in [
        (DrawerValue::Closed, 3_000.0_f32, 0.0),
        (DrawerValue::Open, -3_000.0, -WIDTH),
    ] {
        let mut state = measured_state(start);
        state.handle(DragEvent::Delta(velocity.signum() * (WIDTH - 10.0)));
        state.handle(DragEvent::Release { velocity });

        let mut frames = 0;
        loop {
            let moving = state.tick(1.0 / 60.0);
            let offset = state.offset().unwrap();
            assert!(
                (-WIDTH..=0.0).contains(&offset),
                "offset {offset} left the anchors at frame {frames}"
            );
            assert!((0.0..=1.0).contains(&state.progress()));
            if !moving {
                break;
            }
            frames += 1;
            assert!(frames < 600, "drawer never settled");
        }
        assert_eq!(state.offset(), Some(expected));
    }
}

#[test]
fn test_stalled_and_corrupt_frames_return() {
    let mut state = measured_state(DrawerValue::Closed);
    state.open();

    for dt in [1.0e6, f32::INFINITY, f32::NAN, -1.0] {
        state.tick(dt);
        let offset = state.offset().unwrap();
        assert!(offset.is_finite());
        assert!((-WIDTH..=0.0).contains(&offset));
    }

    settle(&mut state);
    assert_eq!(state.offset(), Some(0.0));
}

#[test]
fn test_scrim_follows_progress() {
    let mut state = measured_state(DrawerValue::Closed);
    assert_eq!(state.scrim(), None);

    state.drag(WIDTH / 4.0);
    assert_eq!(state.scrim(), Some(Scrim { opacity: 0.25 }));
}

#[test]
fn test_scrim_tap_closes_on_next_tick() {
    let mut state = measured_state(DrawerValue::Open);

    state.on_scrim_tap();
    assert!(state.is_open());

    state.tick(1.0 / 60.0);
    assert!(!state.is_open());
    settle(&mut state);
    assert_eq!(state.progress(), 0.0);
}

#[test]
fn test_layout_uses_theme_tokens() {
    let composition = Composition::new();
    let mut provider = ThemeProvider::new();
    let mut drawer = MenuDrawer::new("Aurelius")
        .item(MenuDrawerItem::new("Settings").icon(Icon::Settings).selected(true))
        .item(MenuDrawerItem::new("Rate"))
        .initial_value(DrawerValue::Open);
    drawer.on_layout(400.0);

    provider.compose(&composition, Colors::light(), |theme| {
        let layout = drawer.build(theme);
        let sizes = theme.sizes();

        assert_eq!(layout.tag, MENU_DRAWER_TAG);
        assert_eq!(layout.panel.width, Some(320.0));
        assert_eq!(layout.panel.background, Colors::light().background);
        assert_eq!(layout.panel.corner_radius.top_left, 0.0);
        assert_eq!(layout.panel.corner_radius.bottom_left, 0.0);
        assert_eq!(
            layout.panel.corner_radius.top_right,
            theme.shapes().huge.top_right
        );
        assert_eq!(
            layout.panel.padding.top,
            sizes.margin.status_bar.top + sizes.spacing.huge
        );
        assert_eq!(
            layout.panel.padding.bottom,
            sizes.margin.navigation_bar.bottom + sizes.spacing.huge
        );
        assert_eq!(layout.panel.title_style, theme.text().headline);

        let scrim = layout.scrim.unwrap();
        assert_eq!(scrim.color, Colors::light().scrim);
        assert_eq!(scrim.opacity, 1.0);

        assert!(layout.items[0].is_selected);
        assert_eq!(layout.items[0].background, Colors::light().container.primary);
        assert!(layout.items[1].icon.is_none());
    });
}

#[test]
fn test_unmeasured_drawer_has_no_offset_or_scrim() {
    let composition = Composition::new();
    let mut drawer = MenuDrawer::new("Menu");

    let layout = aurelius_theme(&composition, Colors::dark(), |theme| drawer.build(theme));
    assert_eq!(layout.panel.offset_x, None);
    assert_eq!(layout.scrim, None);
}
