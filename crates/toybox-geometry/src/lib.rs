//! Pure math for Toybox
//!
//! Points and sizes in the sheet's coordinate space. The vertical axis grows
//! upwards, so a detent ratio maps to `ratio * viewport height`.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Size};
}
