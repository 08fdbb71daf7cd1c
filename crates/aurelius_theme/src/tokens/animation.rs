//! Motion tokens

use aurelius_animation::{AnimationSpec, Easing, SpringConfig};
use std::time::Duration;

/// How long animations of different weights take
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct AnimationDurations {
    /// Small, frequent changes (icon swaps, slides of small controls)
    pub fast: Duration,
    pub medium: Duration,
    /// Large surfaces entering or leaving the screen
    pub slow: Duration,
}

impl AnimationDurations {
    pub const UNSPECIFIED: AnimationDurations = AnimationDurations {
        fast: Duration::ZERO,
        medium: Duration::ZERO,
        slow: Duration::ZERO,
    };

    pub const DEFAULT: AnimationDurations = AnimationDurations {
        fast: Duration::from_millis(150),
        medium: Duration::from_millis(300),
        slow: Duration::from_millis(500),
    };
}

impl Default for AnimationDurations {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Shape of every animation the theme hands out
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationCurve {
    /// Fixed-duration tween along an easing curve
    Tween(Easing),
    /// Default spring; durations are ignored
    Spring,
}

/// Motion settings shared by all components
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct Animation {
    pub durations: AnimationDurations,
    pub curve: AnimationCurve,
}

impl Animation {
    /// Zero durations with a spring curve, so unthemed motion still settles
    pub const UNSPECIFIED: Animation = Animation {
        durations: AnimationDurations::UNSPECIFIED,
        curve: AnimationCurve::Spring,
    };

    pub const DEFAULT: Animation = Animation {
        durations: AnimationDurations::DEFAULT,
        curve: AnimationCurve::Tween(Easing::EaseInOutCubic),
    };

    /// Animation spec lasting the duration picked by `duration`
    ///
    /// ```rust
    /// use aurelius_theme::tokens::Animation;
    ///
    /// let spec = Animation::default().spec(|durations| durations.fast);
    /// # let _ = spec;
    /// ```
    pub fn spec(&self, duration: impl FnOnce(&AnimationDurations) -> Duration) -> AnimationSpec {
        match self.curve {
            AnimationCurve::Tween(easing) => AnimationSpec::tween(duration(&self.durations), easing),
            AnimationCurve::Spring => AnimationSpec::spring(SpringConfig::default()),
        }
    }

    /// [`spec`](Self::spec) with the medium duration
    pub fn default_spec(&self) -> AnimationSpec {
        self.spec(|durations| durations.medium)
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unspecified_always_springs() {
        assert_eq!(
            Animation::UNSPECIFIED.spec(|d| d.slow),
            AnimationSpec::spring(SpringConfig::default())
        );
    }

    #[test]
    fn test_default_spec_uses_medium_duration() {
        assert_eq!(
            Animation::DEFAULT.default_spec(),
            AnimationSpec::tween(Duration::from_millis(300), Easing::EaseInOutCubic)
        );
    }
}
