//! Shared gesture thresholds.
//!
//! Distances are in screen pixels, durations in seconds, velocities in pixels
//! per second.

/// Distance a pointer must travel from its press position before moves are
/// treated as a drag.
///
/// Presses that stay inside this radius still count as taps when released.
/// 8.0 matches the common platform touch slop.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Release velocity at or above which a drag jumps one detent.
pub const DEFAULT_SWIPE_VELOCITY: f32 = 500.0;

/// Longest press that still counts as a tap.
pub const DEFAULT_MAX_TAP_DURATION: f32 = 0.2;

/// Transitions shorter than this snap instead of animating.
pub const MIN_ANIMATION_DURATION: f32 = 0.01;
