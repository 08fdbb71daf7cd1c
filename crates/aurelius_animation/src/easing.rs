//! Easing curves for tweens

/// Maps linear tween progress onto eased progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseOutCubic,
    EaseInOutCubic,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Quick start with a gentle settle, used for enter/exit motion
    pub const FAST_OUT_SLOW_IN: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);

    /// Eased progress for `t`, clamped into 0..=1
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic if t < 0.5 => 4.0 * t * t * t,
            Easing::EaseInOutCubic => 1.0 - (2.0 - 2.0 * t).powi(3) / 2.0,
            Easing::CubicBezier(x1, y1, x2, y2) => Bezier::new(x1, y1, x2, y2).solve(t),
        }
    }
}

/// Unit cubic bezier from (0, 0) to (1, 1), evaluated in f64
struct Bezier {
    x: (f64, f64),
    y: (f64, f64),
}

impl Bezier {
    const EPSILON: f64 = 1e-7;
    const MAX_STEPS: usize = 32;

    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: (x1 as f64, x2 as f64),
            y: (y1 as f64, y2 as f64),
        }
    }

    fn axis(s: f64, (p1, p2): (f64, f64)) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    /// y at the curve parameter whose x equals `t`
    fn solve(&self, t: f32) -> f32 {
        if t <= 0.0 || t >= 1.0 {
            return t;
        }

        // x(s) is monotonic for control points inside the unit square
        let target = t as f64;
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        let mut s = target;
        for _ in 0..Self::MAX_STEPS {
            let x = Self::axis(s, self.x);
            if (x - target).abs() < Self::EPSILON {
                break;
            }
            if x < target {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }

        Self::axis(s, self.y) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseOutCubic,
            Easing::EaseInOutCubic,
            Easing::FAST_OUT_SLOW_IN,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }

    #[test]
    fn test_fast_out_slow_in_leads_linear() {
        assert!(Easing::FAST_OUT_SLOW_IN.apply(0.5) > 0.5);
    }

    #[test]
    fn test_linear_bezier_matches_linear() {
        let bezier = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        assert!((bezier.apply(0.3) - 0.3).abs() < 1e-4);
    }
}
