//! Aurelius Core
//!
//! This crate provides the foundational primitives shared by every Aurelius crate:
//!
//! - **Geometry & color**: plain value types ([`Point`], [`Size`], [`EdgeInsets`],
//!   [`CornerRadius`], [`Color`]) that token bundles and component styles are made of
//! - **Composition context**: an explicit, stack-disciplined replacement for implicit
//!   context propagation. Values are installed into a [`Composition`] for the duration of
//!   a subtree and restored when the returned guard is dropped
//! - **Events**: the inbound gesture and window-insets notifications components consume
//!
//! # Example
//!
//! ```rust
//! use aurelius_core::context::{Composition, ContextSlot};
//!
//! #[derive(Debug, PartialEq)]
//! struct Accent(u32);
//!
//! static ACCENT: ContextSlot<Accent> = ContextSlot::new("accent", || Accent(0));
//!
//! let composition = Composition::new();
//! assert_eq!(*composition.current(&ACCENT), Accent(0));
//!
//! composition.provide_scoped(&ACCENT, Accent(7), |composition| {
//!     assert_eq!(*composition.current(&ACCENT), Accent(7));
//! });
//!
//! assert_eq!(*composition.current(&ACCENT), Accent(0));
//! ```

pub mod color;
pub mod context;
pub mod events;
pub mod geometry;

pub use color::{Brush, Color};
pub use context::{Composition, ContextSlot, ProvideGuard};
pub use events::{DragEvent, InsetsEvent, InsetsKind, VelocityTracker};
pub use geometry::{CornerRadius, EdgeInsets, LayoutDirection, Point, Size};
