//! Frame-stepped transition between two values.

use crate::animation::{Lerp, MotionCurve};

/// Outcome of advancing a [`Tween`] by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenStep<T> {
    Running(T),
    /// The tween reached its end this frame. Carries the exact target so
    /// callers never see accumulated floating-point drift.
    Finished(T),
}

impl<T> TweenStep<T> {
    pub fn value(&self) -> &T {
        match self {
            TweenStep::Running(value) | TweenStep::Finished(value) => value,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, TweenStep::Finished(_))
    }
}

/// A resumable animation: `{start, target, elapsed, duration}` plus an
/// optional curve.
///
/// Without a curve the value moves linearly with `t` clamped to `[0, 1]`.
/// With a curve the curve output is used unclamped, so overshooting curves
/// carry the value past the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T: Lerp + Clone> {
    start: T,
    target: T,
    elapsed: f32,
    duration: f32,
    curve: Option<MotionCurve>,
}

impl<T: Lerp + Clone> Tween<T> {
    /// `duration` is in seconds. A non-positive duration finishes on the first
    /// advance.
    pub fn new(start: T, target: T, duration: f32, curve: Option<MotionCurve>) -> Self {
        Self {
            start,
            target,
            elapsed: 0.0,
            duration: duration.max(0.0),
            curve,
        }
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Normalized time, not clamped.
    pub fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        }
    }

    /// Value at normalized time `t` without changing the tween.
    pub fn sample(&self, t: f32) -> T {
        match &self.curve {
            Some(curve) => self.start.lerp(&self.target, curve.evaluate(t)),
            None => self.start.lerp(&self.target, t.clamp(0.0, 1.0)),
        }
    }

    /// Advance by `dt` seconds and return the value for this frame.
    pub fn advance(&mut self, dt: f32) -> TweenStep<T> {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        let t = self.progress();
        if t >= 1.0 {
            self.elapsed = self.duration;
            TweenStep::Finished(self.target.clone())
        } else {
            TweenStep::Running(self.sample(t))
        }
    }
}
