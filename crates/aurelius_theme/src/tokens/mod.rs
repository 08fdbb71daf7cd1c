//! Design token bundles
//!
//! One bundle per concern:
//! - Animation (durations and curve)
//! - Colors
//! - Shapes (corner radii)
//! - Sizes (spacing and system bar margins)
//! - Text styles
//! - Visibility
//!
//! Every bundle has an `UNSPECIFIED` constant: the degenerate value context slots
//! hold before a provider installs a real one. It is compared structurally, never
//! by identity.

mod animation;
mod colors;
mod shapes;
mod sizes;
mod text;
mod visibility;

pub use animation::*;
pub use colors::*;
pub use shapes::*;
pub use sizes::*;
pub use text::*;
pub use visibility::*;
