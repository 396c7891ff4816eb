//! Per-press bookkeeping.

use toybox_geometry::Point;

/// State that exists only while a pointer is held down.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchSession {
    origin: Point,
    last_pointer: Point,
    dragged: bool,
    elapsed: f32,
    /// Sheet position the touch-follow loop is chasing.
    pub follow_target: Point,
}

impl TouchSession {
    /// Starts a session at screen position `pointer`. The follow target starts
    /// at the sheet's current position so nothing moves until the finger does.
    pub fn begin(pointer: Point, sheet_position: Point) -> Self {
        Self {
            origin: pointer,
            last_pointer: pointer,
            dragged: false,
            elapsed: 0.0,
            follow_target: sheet_position,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn last_pointer(&self) -> Point {
        self.last_pointer
    }

    pub fn dragged(&self) -> bool {
        self.dragged
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn accumulate(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Records a move to `pointer`, marking the session as dragged. Returns
    /// the previous pointer position.
    pub fn record_move(&mut self, pointer: Point) -> Point {
        self.dragged = true;
        std::mem::replace(&mut self.last_pointer, pointer)
    }

    /// True once `pointer` has travelled farther than `slop` from the press
    /// origin.
    pub fn exceeded_slop(&self, pointer: Point, slop: f32) -> bool {
        self.origin.distance(pointer) > slop
    }

    /// A press with no drag that was released within `max_duration`.
    pub fn is_tap(&self, max_duration: f32) -> bool {
        !self.dragged && self.elapsed <= max_duration
    }
}
