//! Spring physics
//!
//! A damped harmonic oscillator integrated with RK4. Springs carry their velocity
//! across retargets, which is what makes interrupted animations feel continuous.

/// Largest integration step; longer frames are split into substeps
const MAX_STEP: f32 = 1.0 / 240.0;

/// Substeps simulated per call at most; longer deltas are cut short
const MAX_SUBSTEPS: u32 = 240;

/// Distance and speed below which a spring counts as settled
const REST_THRESHOLD: f32 = 0.01;

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Critically damped spring with the given stiffness and unit mass
    pub fn critically_damped(stiffness: f32) -> Self {
        Self::new(stiffness, 2.0 * stiffness.sqrt(), 1.0)
    }

    /// Slow, soft spring for large surface transitions
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Quick spring with a slight bounce, for small controls
    pub fn snappy() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Fast, critically damped spring
    pub fn stiff() -> Self {
        Self::critically_damped(1500.0)
    }

    /// Damping ratio (1.0 = critical)
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::stiff()
    }
}

/// A spring animating a single value toward a target
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Spring at rest at `value`
    pub fn new(config: SpringConfig, value: f32) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Retarget; value and velocity carry over
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_THRESHOLD && self.velocity.abs() < REST_THRESHOLD
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// At most one simulated second passes per call. A non-finite `dt` is ignored.
    pub fn step(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 || self.is_settled() {
            if self.is_settled() {
                self.value = self.target;
                self.velocity = 0.0;
            }
            return;
        }

        let steps = (dt / MAX_STEP).ceil().min(MAX_SUBSTEPS as f32) as u32;
        let h = (dt / steps as f32).min(MAX_STEP);
        for _ in 0..steps {
            self.rk4(h);
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        (-stiffness * (x - self.target) - damping * v) / mass
    }

    fn rk4(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.acceleration(x, v);

        let k2x = v + 0.5 * h * k1v;
        let k2v = self.acceleration(x + 0.5 * h * k1x, k2x);

        let k3x = v + 0.5 * h * k2v;
        let k3v = self.acceleration(x + 0.5 * h * k2x, k3x);

        let k4x = v + h * k3v;
        let k4v = self.acceleration(x + h * k3x, k4x);

        self.value = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: f32) {
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            spring.step(1.0 / 60.0);
        }
    }

    #[test]
    fn test_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(100.0);
        run(&mut spring, 1.0);

        assert!(spring.is_settled());
        assert_eq!(spring.value(), 100.0);
    }

    #[test]
    fn test_critically_damped_spring_does_not_overshoot() {
        let mut spring = Spring::new(SpringConfig::critically_damped(400.0), 0.0);
        spring.set_target(100.0);

        for _ in 0..120 {
            spring.step(1.0 / 60.0);
            assert!(spring.value() <= 100.0 + REST_THRESHOLD);
        }
    }

    #[test]
    fn test_velocity_survives_retarget() {
        let mut spring = Spring::new(SpringConfig::gentle(), 0.0);
        spring.set_target(100.0);
        run(&mut spring, 0.1);
        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(0.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_damping_ratio_of_presets() {
        assert!((SpringConfig::stiff().damping_ratio() - 1.0).abs() < 1e-4);
        assert!(SpringConfig::snappy().damping_ratio() < 1.0);
    }

    #[test]
    fn test_huge_and_non_finite_steps_return() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(100.0);

        spring.step(f32::INFINITY);
        spring.step(f32::NAN);
        assert_eq!(spring.value(), 0.0);

        spring.step(1.0e6);
        assert!(spring.value().is_finite());
        assert!(spring.is_settled());
    }
}
