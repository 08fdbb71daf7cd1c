use aurelius_core::{Brush, Color, Composition};
use aurelius_theme::tokens::Colors;
use aurelius_theme::{aurelius_theme, AureliusTheme};
use aurelius_ui::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_theme_requiring_components_fail_outside_provider() {
    let composition = Composition::new();
    let theme = AureliusTheme::of(&composition);

    let bar = TopAppBar::new("Title").build(&theme).unwrap_err();
    let action = ActionButton::new(Icon::Add, "Add").build(&theme).unwrap_err();
    let delete = DeleteAction::new(|| {}).build(&theme).unwrap_err();

    assert_eq!(bar.context, "TopAppBar");
    assert_eq!(action.context, "ActionButton");
    assert_eq!(delete.context, "ActionButton");
}

#[test]
fn test_theme_requiring_components_succeed_inside_provider() {
    let composition = Composition::new();

    aurelius_theme(&composition, Colors::light(), |theme| {
        assert!(TopAppBar::new("Title").build(theme).is_ok());
        assert!(ActionButton::new(Icon::Add, "Add").build(theme).is_ok());
        assert!(DeleteAction::new(|| {}).build(theme).is_ok());
    });
}

#[test]
fn test_top_app_bar_collapses_smoothly() {
    let composition = Composition::new();
    let mut bar = TopAppBar::new("Inbox").navigation_button(BackButton::new());

    let expanded = aurelius_theme(&composition, Colors::light(), |theme| bar.build(theme)).unwrap();
    assert_eq!(expanded.height, None);
    assert!(bar.on_placed(160.0));

    bar.set_compact(true);
    let collapsing = aurelius_theme(&composition, Colors::light(), |theme| bar.build(theme)).unwrap();
    assert_eq!(collapsing.height, Some(160.0));

    while bar.tick(1.0 / 60.0) {}
    let compact = aurelius_theme(&composition, Colors::light(), |theme| bar.build(theme)).unwrap();
    assert_eq!(
        compact.height,
        Some(top_app_bar_compact_height(&composition))
    );

    bar.set_compact(false);
    aurelius_theme(&composition, Colors::light(), |theme| bar.build(theme)).unwrap();
    while bar.tick(1.0 / 60.0) {}
    assert_eq!(bar.state().height(), Some(160.0));
}

fn top_app_bar_compact_height(composition: &Composition) -> f32 {
    aurelius_theme(composition, Colors::light(), |theme| {
        aurelius_ui::components::top_app_bar::COMPACT_HEIGHT + theme.sizes().margin.status_bar.top
    })
}

#[test]
fn test_custom_container_brush() {
    let composition = Composition::new();
    let gradient = Brush::VerticalGradient(vec![Color::BLACK, Color::TRANSPARENT]);
    let mut bar = TopAppBar::new("Title").container_brush(gradient.clone());

    let layout = aurelius_theme(&composition, Colors::dark(), |theme| bar.build(theme)).unwrap();
    assert_eq!(layout.background, gradient);
}

#[test]
fn test_clicks_reach_callbacks() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = || {
        let clicks = Arc::clone(&clicks);
        move || {
            clicks.fetch_add(1, Ordering::SeqCst);
        }
    };

    let bar = TopAppBar::new("Title")
        .navigation_button(CloseButton::new().on_click(counter()))
        .action(DeleteAction::new(counter()));
    bar.navigation().unwrap().click();
    bar.actions()[0].click();

    ConfirmationButton::new().on_click(counter()).click();
    FloatingActionButton::new(Icon::Add, "Add")
        .on_click(counter())
        .click();

    assert_eq!(clicks.load(Ordering::SeqCst), 4);
}
