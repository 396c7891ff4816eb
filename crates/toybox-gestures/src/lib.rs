//! Pointer input and gesture classification for Toybox
//!
//! Turns a stream of press/move/release events into the facts the sheet cares
//! about: was it a tap, how far did the finger drag, and how fast was it moving
//! when it let go.

pub mod gesture_constants;
mod pointer;
mod session;
mod swipe;

pub use gesture_constants::*;
pub use pointer::{PointerEvent, PointerEventKind, PointerId};
pub use session::TouchSession;
pub use swipe::{classify_release, Release, SwipeDirection, SwipeSampler};

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
