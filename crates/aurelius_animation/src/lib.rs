//! Aurelius Animation System
//!
//! Easing curves, spring physics, and retargetable animated values.
//!
//! # Features
//!
//! - **Animation specs**: tweens (duration + easing) and springs, chosen by the theme
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Retargetable values**: [`Animatable`] restarts from its current value and
//!   velocity whenever it receives a new target, so the newest request always wins
//! - **Explicit frame clock**: nothing advances on its own; the host calls `tick(dt)`
//!   once per frame

pub mod animatable;
pub mod easing;
pub mod spec;
pub mod spring;

pub use animatable::{Animatable, MAX_FRAME_DELTA};
pub use easing::Easing;
pub use spec::AnimationSpec;
pub use spring::{Spring, SpringConfig};
