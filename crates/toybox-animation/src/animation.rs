//! Interpolation and easing.

use toybox_geometry::Point;

use crate::keyframes::KeyframeCurve;

/// Trait for types that can be linearly interpolated.
///
/// `fraction` is not clamped; values past `1.0` overshoot the target.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self.lerp_unclamped(*target, fraction)
    }
}

/// Standard cubic-bezier easing presets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material standard curve.
    FastOutSlowIn,
    LinearOutSlowIn,
    FastOutLinearIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction. Input is clamped to
    /// `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0).solve(fraction),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0).solve(fraction),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0).solve(fraction),
            Easing::FastOutSlowIn => CubicBezier::new(0.4, 0.0, 0.2, 1.0).solve(fraction),
            Easing::LinearOutSlowIn => CubicBezier::new(0.0, 0.0, 0.2, 1.0).solve(fraction),
            Easing::FastOutLinearIn => CubicBezier::new(0.4, 0.0, 1.0, 1.0).solve(fraction),
        }
    }
}

/// Polynomial coefficients of a unit cubic bezier through (0,0) and (1,1).
struct CubicBezier {
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl CubicBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn x_at(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn y_at(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn dx_at(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    fn solve(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        // Newton-Raphson first, bisection when the slope flattens out.
        let mut t = fraction;
        for _ in 0..8 {
            let x = self.x_at(t) - fraction;
            if x.abs() < 1e-6 {
                return self.y_at(t);
            }
            let dx = self.dx_at(t);
            if dx.abs() < 1e-6 {
                break;
            }
            t = (t - x / dx).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..16 {
            let delta = self.x_at(t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
        self.y_at(t)
    }
}

/// Shape applied to normalized animation time.
///
/// The result is used as an unclamped interpolation factor, so a curve that
/// rises above `1.0` makes the animated value overshoot before settling.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionCurve {
    Easing(Easing),
    Keyframes(KeyframeCurve),
}

impl MotionCurve {
    /// The sheet's default spring-like curve: overshoots to 1.05 at 80% of the
    /// duration, then settles on 1.0.
    pub fn elastic_bounce() -> Self {
        MotionCurve::Keyframes(KeyframeCurve::elastic_bounce())
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            MotionCurve::Easing(easing) => easing.transform(t),
            MotionCurve::Keyframes(curve) => curve.evaluate(t),
        }
    }
}

impl From<Easing> for MotionCurve {
    fn from(easing: Easing) -> Self {
        MotionCurve::Easing(easing)
    }
}

impl From<KeyframeCurve> for MotionCurve {
    fn from(curve: KeyframeCurve) -> Self {
        MotionCurve::Keyframes(curve)
    }
}
