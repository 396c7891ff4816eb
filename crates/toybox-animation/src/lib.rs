//! Animation primitives for Toybox
//!
//! Curves map normalized time to an interpolation factor and [`Tween`] steps a
//! value between two endpoints one frame at a time. Nothing here owns a clock:
//! callers feed elapsed seconds into [`Tween::advance`].

mod animation;
mod keyframes;
mod tween;

pub use animation::{Easing, Lerp, MotionCurve};
pub use keyframes::{Keyframe, KeyframeCurve};
pub use tween::{Tween, TweenStep};

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
