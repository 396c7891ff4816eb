//! Sheet configuration.

use toybox_animation::MotionCurve;
use toybox_gestures::{DEFAULT_MAX_TAP_DURATION, DEFAULT_SWIPE_VELOCITY, DRAG_THRESHOLD};

use crate::detents::DetentSet;
use crate::error::SheetError;

pub const DEFAULT_DETENTS: [f32; 3] = [0.4, 0.7, 0.94];

/// 3.5 reference screen heights per second.
pub const DEFAULT_ANIMATION_SPEED: f32 = 1920.0 * 3.5;

pub const DEFAULT_OPEN_DETENT: usize = 1;

pub const DEFAULT_DISMISS_DELAY: f32 = 0.5;

/// Fraction of the remaining touch-follow distance covered per second of
/// frame time (clamped to one per frame).
pub const DEFAULT_FOLLOW_SHARPNESS: f32 = 20.0;

/// Everything a [`BottomSheet`](crate::BottomSheet) needs at construction.
///
/// Built with chained setters:
///
/// ```ignore
/// let config = SheetConfig::default()
///     .with_detents([0.3, 0.9])
///     .with_swipe_velocity_threshold(800.0)
///     .without_bounce();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    /// Resting ratios of the viewport height. Sorted on build.
    pub detent_ratios: Vec<f32>,
    /// Travel speed in pixels per second, after scaling.
    pub animation_speed: f32,
    /// Curve used as an unclamped interpolation factor. `None` is linear.
    pub bounce_curve: Option<MotionCurve>,
    pub swipe_velocity_threshold: f32,
    /// Seconds.
    pub max_tap_duration: f32,
    /// Detent targeted by [`BottomSheet::open`](crate::BottomSheet::open).
    pub open_detent: usize,
    /// Seconds between `request_close` and the `Dismissed` notification. Not
    /// tied to the close animation; a long travel at low speed can still be
    /// moving when this fires.
    pub dismiss_delay: f32,
    pub follow_sharpness: f32,
    /// UI height the animation speed was tuned for. When set, travel
    /// distances are scaled by `reference_height / viewport height`.
    pub reference_height: Option<f32>,
    /// Pointer travel swallowed by [`BottomSheet::dispatch`](crate::BottomSheet::dispatch)
    /// before a press becomes a drag.
    pub drag_slop: f32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            detent_ratios: DEFAULT_DETENTS.to_vec(),
            animation_speed: DEFAULT_ANIMATION_SPEED,
            bounce_curve: Some(MotionCurve::elastic_bounce()),
            swipe_velocity_threshold: DEFAULT_SWIPE_VELOCITY,
            max_tap_duration: DEFAULT_MAX_TAP_DURATION,
            open_detent: DEFAULT_OPEN_DETENT,
            dismiss_delay: DEFAULT_DISMISS_DELAY,
            follow_sharpness: DEFAULT_FOLLOW_SHARPNESS,
            reference_height: None,
            drag_slop: DRAG_THRESHOLD,
        }
    }
}

impl SheetConfig {
    pub fn with_detents(mut self, ratios: impl IntoIterator<Item = f32>) -> Self {
        self.detent_ratios = ratios.into_iter().collect();
        self
    }

    pub fn with_animation_speed(mut self, pixels_per_second: f32) -> Self {
        self.animation_speed = pixels_per_second;
        self
    }

    pub fn with_bounce_curve(mut self, curve: impl Into<MotionCurve>) -> Self {
        self.bounce_curve = Some(curve.into());
        self
    }

    pub fn without_bounce(mut self) -> Self {
        self.bounce_curve = None;
        self
    }

    pub fn with_swipe_velocity_threshold(mut self, pixels_per_second: f32) -> Self {
        self.swipe_velocity_threshold = pixels_per_second;
        self
    }

    pub fn with_max_tap_duration(mut self, seconds: f32) -> Self {
        self.max_tap_duration = seconds;
        self
    }

    pub fn with_open_detent(mut self, index: usize) -> Self {
        self.open_detent = index;
        self
    }

    pub fn with_dismiss_delay(mut self, seconds: f32) -> Self {
        self.dismiss_delay = seconds;
        self
    }

    pub fn with_follow_sharpness(mut self, sharpness: f32) -> Self {
        self.follow_sharpness = sharpness;
        self
    }

    pub fn with_reference_height(mut self, height: f32) -> Self {
        self.reference_height = Some(height);
        self
    }

    pub fn with_drag_slop(mut self, pixels: f32) -> Self {
        self.drag_slop = pixels;
        self
    }

    /// Checks every field and builds the detent set.
    pub fn validate(&self) -> Result<DetentSet, SheetError> {
        if !self.animation_speed.is_finite() || self.animation_speed <= 0.0 {
            return Err(invalid("animation_speed", "must be positive and finite"));
        }
        require_non_negative("swipe_velocity_threshold", self.swipe_velocity_threshold)?;
        require_non_negative("max_tap_duration", self.max_tap_duration)?;
        require_non_negative("dismiss_delay", self.dismiss_delay)?;
        require_non_negative("follow_sharpness", self.follow_sharpness)?;
        require_non_negative("drag_slop", self.drag_slop)?;
        if let Some(height) = self.reference_height {
            if !height.is_finite() || height <= 0.0 {
                return Err(invalid("reference_height", "must be positive and finite"));
            }
        }
        DetentSet::new(self.detent_ratios.iter().copied())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> SheetError {
    SheetError::InvalidConfig { field, reason }
}

fn require_non_negative(field: &'static str, value: f32) -> Result<(), SheetError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be non-negative and finite"))
    }
}
