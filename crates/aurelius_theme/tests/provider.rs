use aurelius_core::Composition;
use aurelius_theme::tokens::{Animation, Colors, Shapes, Sizes, Text, Visibility};
use aurelius_theme::{aurelius_theme, AureliusTheme, ThemeConfig, ThemeProvider};
use pretty_assertions::assert_eq;
use std::panic::{catch_unwind, AssertUnwindSafe};

#[test]
fn test_provided_theme_reverts_after_subtree() {
    let composition = Composition::new();
    let theme = AureliusTheme::of(&composition);

    aurelius_theme(&composition, Colors::light(), |inner| {
        assert!(inner.is_provided());
        assert_eq!(inner.colors(), Colors::light());
        assert_eq!(inner.animation(), Animation::default());
        assert_eq!(inner.shapes(), Shapes::default());
        assert_eq!(inner.text(), Text::default());
        assert_eq!(inner.visibility(), Visibility::default());

        // the outer facade reads the same slots
        assert!(theme.is_provided());
    });

    assert!(!theme.is_provided());
    assert_eq!(theme.colors(), Colors::UNSPECIFIED);
    assert_eq!(theme.sizes(), Sizes::UNSPECIFIED);
}

#[test]
fn test_nested_providers_innermost_wins() {
    let composition = Composition::new();
    let mut outer = ThemeProvider::new();
    let mut inner = ThemeProvider::new();

    outer.compose(&composition, Colors::light(), |theme| {
        let nested = inner.compose(theme.composition(), Colors::dark(), |t| t.colors());
        assert_eq!(nested, Colors::dark());
        assert_eq!(theme.colors(), Colors::light());
    });
}

#[test]
fn test_panicking_subtree_still_restores_outer_theme() {
    let composition = Composition::new();

    let result = catch_unwind(AssertUnwindSafe(|| {
        aurelius_theme(&composition, Colors::dark(), |_| panic!("render failed"));
    }));

    assert!(result.is_err());
    assert!(!AureliusTheme::of(&composition).is_provided());
}

#[test]
fn test_require_for_fails_only_outside_provider() {
    let composition = Composition::new();
    let theme = AureliusTheme::of(&composition);

    let error = theme.require_for("TopAppBar").unwrap_err();
    assert_eq!(error.to_string(), "TopAppBar requires an AureliusTheme.");

    aurelius_theme(&composition, Colors::light(), |theme| {
        assert_eq!(theme.require_for("TopAppBar"), Ok(()));
    });
}

#[test]
fn test_configured_palette_is_provided() {
    let config = ThemeConfig::from_toml_str("scheme = \"dark\"\n[colors]\nerror = \"#FF0000\"")
        .unwrap();
    let colors = config.colors().unwrap();
    let composition = Composition::new();

    let provided = aurelius_theme(&composition, colors, |theme| theme.colors());
    assert_eq!(provided.background, Colors::dark().background);
    assert_eq!(provided.error.r, 1.0);
}
