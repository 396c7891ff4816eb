//! Testing utilities and harness for Toybox sheets

pub mod recorder;
pub mod testing;

pub use recorder::EventRecorder;
pub use testing::*;

pub mod prelude {
    pub use crate::recorder::EventRecorder;
    pub use crate::testing::*;
    pub use toybox_geometry::Point;
    pub use toybox_sheet::{BottomSheet, FixedViewport, SheetConfig, SheetEvent};
}
