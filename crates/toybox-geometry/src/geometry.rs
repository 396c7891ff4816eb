//! Geometric primitives: Point, Size

use std::ops::{Add, AddAssign, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Returns a copy with the vertical coordinate replaced.
    pub const fn with_y(self, y: f32) -> Self {
        Self { x: self.x, y }
    }

    /// Straight-line distance to `other`.
    pub fn distance(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Interpolates towards `target` without clamping `fraction`, so values
    /// outside `[0, 1]` extrapolate past either endpoint.
    pub fn lerp_unclamped(&self, target: Point, fraction: f32) -> Point {
        Point {
            x: self.x + (target.x - self.x) * fraction,
            y: self.y + (target.y - self.y) * fraction,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// True when both dimensions are finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn lerp_unclamped_extrapolates() {
        let a = Point::new(0.0, 100.0);
        let b = Point::new(0.0, 200.0);
        assert_eq!(a.lerp_unclamped(b, 0.5), Point::new(0.0, 150.0));
        assert_eq!(a.lerp_unclamped(b, 1.5), Point::new(0.0, 250.0));
        assert_eq!(a.lerp_unclamped(b, -0.5), Point::new(0.0, 50.0));
    }

    #[test]
    fn with_y_keeps_x() {
        let p = Point::new(12.0, 3.0).with_y(7.0);
        assert_eq!(p, Point::new(12.0, 7.0));
    }

    #[test]
    fn size_positivity() {
        assert!(Size::new(1080.0, 1920.0).is_positive());
        assert!(!Size::new(1080.0, 0.0).is_positive());
        assert!(!Size::new(f32::NAN, 10.0).is_positive());
    }
}
