//! Bottom sheet motion controller for Toybox
//!
//! [`BottomSheet`] turns pointer input and per-frame time deltas into a
//! vertical position that rests on one of a few configured detents. It knows
//! nothing about rendering: the host reads [`BottomSheet::position`] each
//! frame and listens for opened/closed/dismissed notifications.
//!
//! ```ignore
//! let mut sheet = BottomSheet::new(SheetConfig::default(), FixedViewport::new(1080.0, 1920.0))?;
//! sheet.on_opened(|| println!("fully open"));
//! sheet.open();
//! loop {
//!     sheet.tick(frame_delta_seconds);
//!     draw_sheet_at(sheet.position());
//! }
//! ```

mod config;
mod detents;
mod error;
mod listeners;
mod sheet;
mod viewport;

pub use config::*;
pub use detents::DetentSet;
pub use error::SheetError;
pub use listeners::{ListenerId, SheetEvent};
pub use sheet::BottomSheet;
pub use viewport::{FixedViewport, ScreenOrigin, SheetViewport};

pub use toybox_animation::{Easing, Keyframe, KeyframeCurve, MotionCurve};
pub use toybox_geometry::{Point, Size};
pub use toybox_gestures::{PointerEvent, PointerEventKind};

pub mod prelude {
    pub use crate::config::SheetConfig;
    pub use crate::listeners::SheetEvent;
    pub use crate::sheet::BottomSheet;
    pub use crate::viewport::{FixedViewport, SheetViewport};
    pub use toybox_geometry::Point;
    pub use toybox_gestures::PointerEvent;
}

#[cfg(test)]
#[path = "tests/sheet_tests.rs"]
mod tests;
