//! Menu drawer swipe state
//!
//! The drawer panel slides horizontally between two anchors: fully hidden at
//! `-width` and fully shown at `0`. Its position is a continuous offset that
//! follows the finger while dragging and animates to an anchor otherwise.
//!
//! ```text
//!  offset:  -width ............................ 0
//!  value:   Closed                             Open
//!  progress: 0.0                               1.0
//! ```
//!
//! The panel width is only known after the host lays it out, so the state starts
//! with [`DrawerWidth::Unspecified`] and becomes [`DrawerWidth::Measured`] on the
//! first valid [`DrawerState::on_placed`] call. Later measurements are ignored.

use aurelius_animation::{Animatable, AnimationSpec};
use aurelius_core::DragEvent;
use smallvec::SmallVec;

/// Release speed (logical px/s) above which a flick decides the anchor
pub const VELOCITY_THRESHOLD: f32 = 125.0;

/// Anchor a drawer rests at
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawerValue {
    #[default]
    Closed,
    Open,
}

/// Panel width as far as the state knows
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DrawerWidth {
    /// Not laid out yet
    #[default]
    Unspecified,
    Measured(f32),
}

impl DrawerWidth {
    pub fn value(&self) -> Option<f32> {
        match self {
            DrawerWidth::Unspecified => None,
            DrawerWidth::Measured(width) => Some(*width),
        }
    }
}

/// Offsets of the two anchors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchors {
    pub closed: f32,
    pub open: f32,
}

impl Anchors {
    /// Anchors of a panel `width` wide that slides in from the leading edge
    pub fn for_width(width: f32) -> Self {
        Self {
            closed: -width,
            open: 0.0,
        }
    }

    pub fn offset_of(&self, value: DrawerValue) -> f32 {
        match value {
            DrawerValue::Closed => self.closed,
            DrawerValue::Open => self.open,
        }
    }

    /// Fraction of the way from closed to open, clamped to `0..=1`
    pub fn progress(&self, offset: f32) -> f32 {
        let span = self.open - self.closed;
        if span <= 0.0 {
            return 0.0;
        }
        ((offset - self.closed) / span).clamp(0.0, 1.0)
    }
}

/// When a released drag settles open rather than closed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeThresholds {
    /// Minimum release speed for the direction of motion to win
    pub velocity: f32,
    /// Progress at or above which a slow release settles open
    pub positional: f32,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            velocity: VELOCITY_THRESHOLD,
            positional: 0.5,
        }
    }
}

/// Input to [`swipe_transition`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeInput {
    /// Finger moved by this many logical pixels (positive = toward open)
    Drag(f32),
    /// Finger lifted at this velocity (px/s, positive = toward open)
    Release(f32),
}

/// Result of [`swipe_transition`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeOutcome {
    /// Follow the finger to this offset
    Offset(f32),
    /// Animate to this anchor
    Settle(DrawerValue),
}

/// Where a swipe input leaves the drawer
///
/// Drags move the offset and clamp it between the anchors. A release faster than
/// `thresholds.velocity` settles in the direction of motion; a slower one settles
/// at the anchor the panel is closer to, with the exact midpoint counting as open.
pub fn swipe_transition(
    offset: f32,
    anchors: Anchors,
    input: SwipeInput,
    thresholds: SwipeThresholds,
) -> SwipeOutcome {
    match input {
        SwipeInput::Drag(delta) => {
            SwipeOutcome::Offset((offset + delta).clamp(anchors.closed, anchors.open))
        }
        SwipeInput::Release(velocity) if velocity.abs() >= thresholds.velocity => {
            if velocity > 0.0 {
                SwipeOutcome::Settle(DrawerValue::Open)
            } else {
                SwipeOutcome::Settle(DrawerValue::Closed)
            }
        }
        SwipeInput::Release(_) => {
            if anchors.progress(offset) >= thresholds.positional {
                SwipeOutcome::Settle(DrawerValue::Open)
            } else {
                SwipeOutcome::Settle(DrawerValue::Closed)
            }
        }
    }
}

/// Scrim drawn over the content behind an open drawer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrim {
    /// Equal to the drawer progress
    pub opacity: f32,
}

/// Deferred requests, applied at the start of the next tick
#[derive(Clone, Copy, Debug, PartialEq)]
enum DrawerCommand {
    Close,
}

/// Position and target of one menu drawer
#[derive(Debug)]
pub struct DrawerState {
    target: DrawerValue,
    width: DrawerWidth,
    offset: Animatable,
    spec: AnimationSpec,
    thresholds: SwipeThresholds,
    pending: SmallVec<[DrawerCommand; 2]>,
}

impl DrawerState {
    pub fn new(initial: DrawerValue) -> Self {
        Self {
            target: initial,
            width: DrawerWidth::Unspecified,
            offset: Animatable::default(),
            spec: AnimationSpec::default(),
            thresholds: SwipeThresholds::default(),
            pending: SmallVec::new(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: SwipeThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Spec used by later `open`, `close` and release animations
    pub fn set_animation_spec(&mut self, spec: AnimationSpec) {
        self.spec = spec;
    }

    pub fn animation_spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Anchor the drawer is at or heading to
    pub fn target(&self) -> DrawerValue {
        self.target
    }

    pub fn is_open(&self) -> bool {
        self.target == DrawerValue::Open
    }

    pub fn width(&self) -> DrawerWidth {
        self.width
    }

    pub fn anchors(&self) -> Option<Anchors> {
        self.width.value().map(Anchors::for_width)
    }

    /// Current horizontal offset of the panel; `None` until measured
    pub fn offset(&self) -> Option<f32> {
        self.width.value().map(|_| self.offset.value())
    }

    /// 0 when closed, 1 when open
    ///
    /// Before the width is measured this follows the target.
    pub fn progress(&self) -> f32 {
        match self.anchors() {
            Some(anchors) => anchors.progress(self.offset.value()),
            None if self.is_open() => 1.0,
            None => 0.0,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_running()
    }

    pub fn open(&mut self) {
        self.animate_to(DrawerValue::Open, 0.0);
    }

    pub fn close(&mut self) {
        self.animate_to(DrawerValue::Closed, 0.0);
    }

    /// Follow the finger by `delta`, cancelling any running animation
    pub fn drag(&mut self, delta: f32) {
        let Some(anchors) = self.anchors() else {
            return;
        };

        self.offset.stop();
        if let SwipeOutcome::Offset(offset) = swipe_transition(
            self.offset.value(),
            anchors,
            SwipeInput::Drag(delta),
            self.thresholds,
        ) {
            tracing::trace!(offset, "drawer drag");
            self.offset.snap_to(offset);
        }
    }

    /// Settle after the finger lifts at `velocity`
    pub fn release(&mut self, velocity: f32) {
        let Some(anchors) = self.anchors() else {
            return;
        };

        if let SwipeOutcome::Settle(value) = swipe_transition(
            self.offset.value(),
            anchors,
            SwipeInput::Release(velocity),
            self.thresholds,
        ) {
            self.animate_to(value, velocity);
        }
    }

    /// Route a drag gesture event
    pub fn handle(&mut self, event: DragEvent) {
        match event {
            DragEvent::Delta(delta) => self.drag(delta),
            DragEvent::Release { velocity } => self.release(velocity),
        }
    }

    /// Record the laid-out panel width
    ///
    /// Only the first finite, positive width is kept. Returns whether it was.
    pub fn on_placed(&mut self, width: f32) -> bool {
        match self.width {
            DrawerWidth::Measured(measured) => {
                if measured != width {
                    tracing::warn!(
                        "drawer re-measured at {} but keeps its first width {}",
                        width,
                        measured
                    );
                }
                false
            }
            DrawerWidth::Unspecified if !(width.is_finite() && width > 0.0) => {
                tracing::warn!("ignoring invalid drawer width {}", width);
                false
            }
            DrawerWidth::Unspecified => {
                tracing::debug!("drawer measured at {}", width);
                self.width = DrawerWidth::Measured(width);
                self.offset
                    .snap_to(Anchors::for_width(width).offset_of(self.target));
                true
            }
        }
    }

    /// Scrim to draw, if the drawer shows at all
    pub fn scrim(&self) -> Option<Scrim> {
        let progress = self.progress();
        (progress > 0.0).then_some(Scrim { opacity: progress })
    }

    /// Tapping the scrim closes an open drawer on the next tick
    pub fn on_scrim_tap(&mut self) {
        if self.is_open() {
            self.pending.push(DrawerCommand::Close);
        }
    }

    /// Advance by `dt` seconds; returns whether the drawer is still moving
    ///
    /// Deferred commands run first.
    pub fn tick(&mut self, dt: f32) -> bool {
        let pending = std::mem::take(&mut self.pending);
        for command in pending {
            match command {
                DrawerCommand::Close => self.close(),
            }
        }

        let running = self.offset.tick(dt);
        let Some(anchors) = self.anchors() else {
            return running;
        };

        // a flung spring may overshoot; the panel never leaves the anchors
        let offset = self.offset.value();
        let clamped = offset.clamp(anchors.closed, anchors.open);
        if clamped == offset {
            return running;
        }

        let target = anchors.offset_of(self.target);
        self.offset.snap_to(clamped);
        if clamped != target {
            self.offset.animate_to(target, self.spec);
        }
        self.offset.is_running()
    }

    fn animate_to(&mut self, value: DrawerValue, velocity: f32) {
        if self.target != value {
            tracing::debug!("drawer target {:?} -> {:?}", self.target, value);
        }
        self.target = value;

        if let Some(anchors) = self.anchors() {
            self.offset
                .animate_to_with_velocity(anchors.offset_of(value), self.spec, velocity);
        }
    }
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::new(DrawerValue::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(width: f32) -> DrawerState {
        let mut state = DrawerState::default();
        state.on_placed(width);
        state
    }

    fn settle(state: &mut DrawerState) {
        for _ in 0..600 {
            if !state.tick(1.0 / 60.0) {
                return;
            }
        }
        panic!("drawer never settled");
    }

    #[test]
    fn test_drag_is_clamped_between_anchors() {
        let anchors = Anchors::for_width(300.0);
        let thresholds = SwipeThresholds::default();

        assert_eq!(
            swipe_transition(-10.0, anchors, SwipeInput::Drag(50.0), thresholds),
            SwipeOutcome::Offset(0.0)
        );
        assert_eq!(
            swipe_transition(-290.0, anchors, SwipeInput::Drag(-50.0), thresholds),
            SwipeOutcome::Offset(-300.0)
        );
    }

    #[test]
    fn test_fast_release_follows_direction() {
        let anchors = Anchors::for_width(300.0);
        let thresholds = SwipeThresholds::default();

        assert_eq!(
            swipe_transition(-280.0, anchors, SwipeInput::Release(125.0), thresholds),
            SwipeOutcome::Settle(DrawerValue::Open)
        );
        assert_eq!(
            swipe_transition(-20.0, anchors, SwipeInput::Release(-400.0), thresholds),
            SwipeOutcome::Settle(DrawerValue::Closed)
        );
    }

    #[test]
    fn test_slow_release_picks_closer_anchor() {
        let anchors = Anchors::for_width(300.0);
        let thresholds = SwipeThresholds::default();

        assert_eq!(
            swipe_transition(-100.0, anchors, SwipeInput::Release(-100.0), thresholds),
            SwipeOutcome::Settle(DrawerValue::Open)
        );
        assert_eq!(
            swipe_transition(-200.0, anchors, SwipeInput::Release(100.0), thresholds),
            SwipeOutcome::Settle(DrawerValue::Closed)
        );
        assert_eq!(
            swipe_transition(-150.0, anchors, SwipeInput::Release(0.0), thresholds),
            SwipeOutcome::Settle(DrawerValue::Open)
        );
    }

    #[test]
    fn test_unmeasured_drawer_only_tracks_target() {
        let mut state = DrawerState::default();
        state.drag(100.0);
        state.release(1_000.0);
        assert_eq!(state.offset(), None);
        assert!(!state.is_open());

        state.open();
        assert!(state.is_open());
        assert_eq!(state.progress(), 1.0);
        assert!(!state.tick(1.0 / 60.0));
    }

    #[test]
    fn test_measurement_places_panel_at_target_anchor() {
        let mut state = DrawerState::new(DrawerValue::Open);
        assert!(state.on_placed(280.0));
        assert_eq!(state.offset(), Some(0.0));

        let mut state = DrawerState::new(DrawerValue::Closed);
        state.on_placed(280.0);
        assert_eq!(state.offset(), Some(-280.0));
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_invalid_widths_are_not_measurements() {
        let mut state = DrawerState::default();
        assert!(!state.on_placed(0.0));
        assert!(!state.on_placed(f32::INFINITY));
        assert_eq!(state.width(), DrawerWidth::Unspecified);

        assert!(state.on_placed(240.0));
        assert!(!state.on_placed(320.0));
        assert_eq!(state.anchors(), Some(Anchors::for_width(240.0)));
    }

    #[test]
    fn test_drag_cancels_running_animation() {
        let mut state = measured(300.0);
        state.open();
        state.tick(1.0 / 60.0);
        assert!(state.is_animating());

        state.drag(-10.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_scrim_tap_is_deferred_to_next_tick() {
        let mut state = measured(300.0);
        state.open();
        settle(&mut state);

        state.on_scrim_tap();
        assert!(state.is_open());

        state.tick(1.0 / 60.0);
        assert!(!state.is_open());
        settle(&mut state);
        assert_eq!(state.scrim(), None);
    }

    #[test]
    fn test_scrim_tap_on_closed_drawer_does_nothing() {
        let mut state = measured(300.0);
        state.on_scrim_tap();
        state.open();
        state.tick(1.0 / 60.0);

        assert!(state.is_open());
    }

    #[test]
    fn test_overshoot_is_clamped_to_anchor() {
        let mut state = measured(300.0);
        state.drag(290.0);
        state.release(3_000.0);

        for _ in 0..600 {
            let moving = state.tick(1.0 / 60.0);
            assert!(state.offset().is_some_and(|offset| offset <= 0.0));
            if !moving {
                break;
            }
        }
        assert_eq!(state.offset(), Some(0.0));
    }
}
