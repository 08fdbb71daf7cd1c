//! Retargetable animated value
//!
//! An [`Animatable`] owns at most one running motion. Every call to
//! [`animate_to`](Animatable::animate_to) replaces it, starting from the current
//! value (and, for springs, the current velocity), so conflicting requests never
//! stack: the newest one wins.

use crate::easing::Easing;
use crate::spec::AnimationSpec;
use crate::spring::Spring;

/// Longest frame delta a single [`Animatable::tick`] honors; a stalled frame
/// advances by this much
pub const MAX_FRAME_DELTA: f32 = 0.1;

#[derive(Clone, Debug)]
enum Motion {
    Tween {
        from: f32,
        to: f32,
        /// Seconds
        elapsed: f32,
        /// Seconds
        duration: f32,
        easing: Easing,
    },
    Spring(Spring),
}

/// A single `f32` driven toward a target by an [`AnimationSpec`]
#[derive(Clone, Debug)]
pub struct Animatable {
    value: f32,
    velocity: f32,
    target: f32,
    motion: Option<Motion>,
}

impl Animatable {
    /// Value at rest
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            motion: None,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Units per second
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Where the value is heading (equals `value` at rest)
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.motion.is_some()
    }

    /// Stop any motion and jump to `value`
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.motion = None;
    }

    /// Stop any motion where it is
    pub fn stop(&mut self) {
        self.target = self.value;
        self.velocity = 0.0;
        self.motion = None;
    }

    /// Start moving toward `target`, replacing any running motion
    pub fn animate_to(&mut self, target: f32, spec: AnimationSpec) {
        self.target = target;

        self.motion = match spec {
            AnimationSpec::Snap => {
                self.snap_to(target);
                return;
            }
            AnimationSpec::Tween { duration, easing } => {
                let duration = duration.as_secs_f32();
                if duration <= 0.0 {
                    self.snap_to(target);
                    return;
                }
                Some(Motion::Tween {
                    from: self.value,
                    to: target,
                    elapsed: 0.0,
                    duration,
                    easing,
                })
            }
            AnimationSpec::Spring(config) => {
                let mut spring = Spring::new(config, self.value).with_velocity(self.velocity);
                spring.set_target(target);
                Some(Motion::Spring(spring))
            }
        };
    }

    /// Like [`animate_to`](Self::animate_to), starting with `velocity` (e.g. a fling)
    pub fn animate_to_with_velocity(&mut self, target: f32, spec: AnimationSpec, velocity: f32) {
        self.velocity = velocity;
        self.animate_to(target, spec);
    }

    /// Advance by `dt` seconds; returns whether the value is still moving
    ///
    /// `dt` is capped at [`MAX_FRAME_DELTA`]; negative or non-finite deltas count as 0.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(motion) = self.motion.as_mut() else {
            return false;
        };
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DELTA)
        } else {
            0.0
        };

        let previous = self.value;
        let finished = match motion {
            Motion::Tween {
                from,
                to,
                elapsed,
                duration,
                easing,
            } => {
                *elapsed = (*elapsed + dt).min(*duration);
                let t = *elapsed / *duration;
                self.value = *from + (*to - *from) * easing.apply(t);
                if dt > 0.0 {
                    self.velocity = (self.value - previous) / dt;
                }
                *elapsed >= *duration
            }
            Motion::Spring(spring) => {
                spring.step(dt);
                self.value = spring.value();
                self.velocity = spring.velocity();
                spring.is_settled()
            }
        };

        if finished {
            self.snap_to(self.target);
            return false;
        }

        tracing::trace!(value = self.value, target = self.target, "animatable tick");
        true
    }
}

impl Default for Animatable {
    fn default() -> Self {
        Self::new(0.0)
    }
}
