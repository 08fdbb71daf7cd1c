//! Animation specifications

use crate::easing::Easing;
use crate::spring::SpringConfig;
use std::time::Duration;

/// How an animated value travels to its target
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationSpec {
    /// Fixed-duration interpolation along an easing curve
    Tween { duration: Duration, easing: Easing },
    /// Physics-driven; duration emerges from the spring parameters
    Spring(SpringConfig),
    /// Jump to the target on the next tick
    Snap,
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        AnimationSpec::Tween { duration, easing }
    }

    pub fn spring(config: SpringConfig) -> Self {
        AnimationSpec::Spring(config)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        AnimationSpec::Spring(SpringConfig::default())
    }
}
