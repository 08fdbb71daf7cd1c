//! Top app bar size state
//!
//! The bar switches between an expanded and a compact size. Both its inner
//! spacing and its height animate between the two; the expanded height is
//! whatever the bar measured the first time it was laid out expanded.

use aurelius_animation::{Animatable, AnimationSpec};

/// Height of a compact bar, excluding the status bar margin
pub const COMPACT_HEIGHT: f32 = 64.0;

#[derive(Debug)]
pub struct TopAppBarState {
    is_compact: bool,
    expanded_height: Option<f32>,
    spacing: Animatable,
    /// `None` while the bar may take its natural height
    height: Option<Animatable>,
    initialized: bool,
}

impl TopAppBarState {
    pub fn new(is_compact: bool) -> Self {
        Self {
            is_compact,
            expanded_height: None,
            spacing: Animatable::default(),
            height: None,
            initialized: false,
        }
    }

    pub fn is_compact(&self) -> bool {
        self.is_compact
    }

    /// Takes effect at the next [`update`](Self::update)
    pub fn set_compact(&mut self, is_compact: bool) {
        self.is_compact = is_compact;
    }

    pub fn expanded_height(&self) -> Option<f32> {
        self.expanded_height
    }

    /// Current height; `None` means unbounded
    pub fn height(&self) -> Option<f32> {
        self.height.as_ref().map(Animatable::value)
    }

    pub fn spacing(&self) -> f32 {
        self.spacing.value()
    }

    /// Record the laid-out height
    ///
    /// Only the first measurement taken while expanded is kept.
    pub fn on_placed(&mut self, height: f32) -> bool {
        if self.is_compact || self.expanded_height.is_some() {
            return false;
        }
        if !(height.is_finite() && height > 0.0) {
            tracing::warn!("ignoring invalid top app bar height {}", height);
            return false;
        }

        tracing::debug!("top app bar expanded height measured at {}", height);
        self.expanded_height = Some(height);
        if self.height.is_none() {
            self.height = Some(Animatable::new(height));
        }
        true
    }

    /// Retarget spacing and height for the current size
    ///
    /// The first call jumps straight to the targets; later calls animate with
    /// `spec` whenever a target changes.
    pub fn update(
        &mut self,
        compact_spacing: f32,
        expanded_spacing: f32,
        status_bar_top: f32,
        spec: AnimationSpec,
    ) {
        let (spacing, height) = if self.is_compact {
            (compact_spacing, Some(COMPACT_HEIGHT + status_bar_top))
        } else {
            (expanded_spacing, self.expanded_height)
        };

        if !self.initialized {
            self.initialized = true;
            self.spacing.snap_to(spacing);
            self.height = height.map(Animatable::new);
            return;
        }

        if self.spacing.target() != spacing {
            self.spacing.animate_to(spacing, spec);
        }

        match (height, self.height.as_mut()) {
            (None, _) => self.height = None,
            (Some(target), Some(current)) => {
                if current.target() != target {
                    current.animate_to(target, spec);
                }
            }
            (Some(target), None) => self.height = Some(Animatable::new(target)),
        }
    }

    /// Advance both animations; returns whether either is still running
    pub fn tick(&mut self, dt: f32) -> bool {
        let spacing = self.spacing.tick(dt);
        let height = self.height.as_mut().is_some_and(|height| height.tick(dt));
        spacing || height
    }
}

impl Default for TopAppBarState {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurelius_animation::Easing;
    use std::time::Duration;

    const SPEC: AnimationSpec = AnimationSpec::Tween {
        duration: Duration::from_millis(100),
        easing: Easing::Linear,
    };

    #[test]
    fn test_first_update_jumps_to_targets() {
        let mut state = TopAppBarState::new(true);
        state.update(16.0, 20.0, 24.0, SPEC);

        assert_eq!(state.spacing(), 16.0);
        assert_eq!(state.height(), Some(88.0));
        assert!(!state.tick(0.016));
    }

    #[test]
    fn test_expanded_bar_is_unbounded_until_measured() {
        let mut state = TopAppBarState::new(false);
        state.update(16.0, 20.0, 24.0, SPEC);
        assert_eq!(state.height(), None);

        assert!(state.on_placed(152.0));
        assert!(!state.on_placed(180.0));
        assert_eq!(state.height(), Some(152.0));
    }

    #[test]
    fn test_collapsing_animates_height_and_spacing() {
        let mut state = TopAppBarState::new(false);
        state.update(16.0, 20.0, 24.0, SPEC);
        state.on_placed(152.0);

        state.set_compact(true);
        state.update(16.0, 20.0, 24.0, SPEC);
        assert!(state.tick(0.05));
        assert!((state.height().unwrap() - 120.0).abs() < 1e-3);
        assert!((state.spacing() - 18.0).abs() < 1e-3);

        assert!(!state.tick(0.06));
        assert_eq!(state.height(), Some(88.0));
    }

    #[test]
    fn test_compact_placement_is_not_the_expanded_height() {
        let mut state = TopAppBarState::new(true);
        assert!(!state.on_placed(88.0));
        assert_eq!(state.expanded_height(), None);
    }
}
