//! Default Aurelius palettes
//!
//! A warm neutral ramp with a single indigo accent. Light mode fills containers
//! with the accent; dark mode keeps the accent for content and lifts containers
//! off a near-black background.

use crate::tokens::{ColorPair, Colors};
use aurelius_core::Color;

/// Raw palette swatches
pub mod palette {
    use aurelius_core::Color;

    // Neutrals
    pub const SNOW: Color = Color::rgb(250.0 / 255.0, 249.0 / 255.0, 247.0 / 255.0);
    pub const PEARL: Color = Color::rgb(240.0 / 255.0, 238.0 / 255.0, 234.0 / 255.0);
    pub const ASH: Color = Color::rgb(154.0 / 255.0, 150.0 / 255.0, 143.0 / 255.0);
    pub const SLATE: Color = Color::rgb(98.0 / 255.0, 95.0 / 255.0, 90.0 / 255.0);
    pub const GRAPHITE: Color = Color::rgb(46.0 / 255.0, 44.0 / 255.0, 42.0 / 255.0);
    pub const ONYX: Color = Color::rgb(28.0 / 255.0, 27.0 / 255.0, 26.0 / 255.0);
    pub const INK: Color = Color::rgb(18.0 / 255.0, 17.0 / 255.0, 16.0 / 255.0);

    // Accent
    pub const INDIGO: Color = Color::rgb(79.0 / 255.0, 70.0 / 255.0, 229.0 / 255.0);
    pub const PERIWINKLE: Color = Color::rgb(165.0 / 255.0, 160.0 / 255.0, 255.0 / 255.0);

    // Semantic
    pub const CRIMSON: Color = Color::rgb(220.0 / 255.0, 38.0 / 255.0, 38.0 / 255.0);
    pub const ROSE: Color = Color::rgb(248.0 / 255.0, 113.0 / 255.0, 113.0 / 255.0);
}

pub const LIGHT: Colors = Colors {
    background: palette::SNOW,
    container: ColorPair::new(palette::INDIGO, palette::PEARL),
    content: ColorPair::new(Color::WHITE, palette::INDIGO),
    text: ColorPair::new(palette::ONYX, palette::SLATE),
    scrim: Color::rgba(0.0, 0.0, 0.0, 0.32),
    error: palette::CRIMSON,
};

pub const DARK: Colors = Colors {
    background: palette::INK,
    container: ColorPair::new(palette::PERIWINKLE, palette::GRAPHITE),
    content: ColorPair::new(palette::INK, palette::PERIWINKLE),
    text: ColorPair::new(palette::PEARL, palette::ASH),
    scrim: Color::rgba(0.0, 0.0, 0.0, 0.6),
    error: palette::ROSE,
};
