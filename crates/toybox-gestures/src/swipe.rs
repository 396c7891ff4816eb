//! Release velocity estimation.
//!
//! Every drag move contributes its vertical pixel delta. At release the deltas
//! are averaged and divided by the most recent frame time, giving a rough
//! signed pixels-per-second figure. Not time-weighted: it is distance per move
//! scaled by one frame.

use smallvec::SmallVec;

/// Inline capacity; a typical flick produces fewer moves than this.
const INLINE_SAMPLES: usize = 32;

#[derive(Clone, Debug, Default)]
pub struct SwipeSampler {
    samples: SmallVec<[f32; INLINE_SAMPLES]>,
}

impl SwipeSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, delta_y: f32) {
        if delta_y.is_finite() {
            self.samples.push(delta_y);
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sum(&self) -> f32 {
        self.samples.iter().sum()
    }

    /// Mean per-move delta, or 0 without samples.
    pub fn average_delta(&self) -> f32 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum() / self.samples.len() as f32
        }
    }

    /// Mean per-move delta divided by `last_frame_delta`.
    ///
    /// Returns 0 when there are no samples or the frame delta is not a
    /// positive finite number.
    pub fn average_velocity(&self, last_frame_delta: f32) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        if !last_frame_delta.is_finite() || last_frame_delta <= 0.0 {
            log::warn!(
                "SwipeSampler: cannot derive velocity from frame delta {}",
                last_frame_delta
            );
            return 0.0;
        }
        self.average_delta() / last_frame_delta
    }
}

/// Vertical direction of a swipe. Up is towards larger detent ratios.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
}

/// What a drag release should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Fast enough to jump one detent.
    Swipe(SwipeDirection),
    /// Settle on whichever detent is nearest.
    Settle,
}

/// A release is a swipe when `|velocity| >= threshold`. Zero velocity never
/// swipes.
pub fn classify_release(velocity: f32, threshold: f32) -> Release {
    if velocity != 0.0 && velocity.is_finite() && velocity.abs() >= threshold {
        if velocity > 0.0 {
            Release::Swipe(SwipeDirection::Up)
        } else {
            Release::Swipe(SwipeDirection::Down)
        }
    } else {
        Release::Settle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sampler_returns_zero() {
        let sampler = SwipeSampler::new();
        assert_eq!(sampler.average_velocity(0.016), 0.0);
        assert_eq!(sampler.average_delta(), 0.0);
    }

    #[test]
    fn test_average_over_samples() {
        let mut sampler = SwipeSampler::new();
        sampler.push(100.0);
        sampler.push(150.0);
        // (250 / 2) / 0.25
        assert_eq!(sampler.average_velocity(0.25), 500.0);
    }

    #[test]
    fn test_negative_velocity() {
        let mut sampler = SwipeSampler::new();
        sampler.push(-10.0);
        sampler.push(-30.0);
        let velocity = sampler.average_velocity(0.5);
        assert_eq!(velocity, -40.0);
    }

    #[test]
    fn test_zero_frame_delta_returns_zero() {
        let mut sampler = SwipeSampler::new();
        sampler.push(10.0);
        assert_eq!(sampler.average_velocity(0.0), 0.0);
        assert_eq!(sampler.average_velocity(f32::NAN), 0.0);
    }

    #[test]
    fn test_clear() {
        let mut sampler = SwipeSampler::new();
        sampler.push(10.0);
        sampler.clear();
        assert!(sampler.is_empty());
        assert_eq!(sampler.average_velocity(0.016), 0.0);
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let mut sampler = SwipeSampler::new();
        for _ in 0..(INLINE_SAMPLES * 2) {
            sampler.push(2.0);
        }
        assert_eq!(sampler.len(), INLINE_SAMPLES * 2);
        assert_eq!(sampler.average_delta(), 2.0);
    }

    #[test]
    fn test_non_finite_samples_dropped() {
        let mut sampler = SwipeSampler::new();
        sampler.push(f32::INFINITY);
        assert!(sampler.is_empty());
    }
}
