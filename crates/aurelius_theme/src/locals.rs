//! Context slots holding the current token bundles
//!
//! Each slot defaults to its bundle's `UNSPECIFIED` value. Only
//! [`ThemeProvider`](crate::ThemeProvider) installs real values; components read
//! them through [`AureliusTheme`](crate::AureliusTheme).

use crate::tokens::{Animation, Colors, Shapes, Sizes, Text, Visibility};
use aurelius_core::ContextSlot;

pub(crate) static LOCAL_ANIMATION: ContextSlot<Animation> =
    ContextSlot::new("animation", || Animation::UNSPECIFIED);

pub(crate) static LOCAL_COLORS: ContextSlot<Colors> =
    ContextSlot::new("colors", || Colors::UNSPECIFIED);

pub(crate) static LOCAL_SHAPES: ContextSlot<Shapes> =
    ContextSlot::new("shapes", || Shapes::UNSPECIFIED);

pub(crate) static LOCAL_SIZES: ContextSlot<Sizes> =
    ContextSlot::new("sizes", || Sizes::UNSPECIFIED);

pub(crate) static LOCAL_TEXT: ContextSlot<Text> = ContextSlot::new("text", || Text::UNSPECIFIED);

pub(crate) static LOCAL_VISIBILITY: ContextSlot<Visibility> =
    ContextSlot::new("visibility", || Visibility::UNSPECIFIED);
