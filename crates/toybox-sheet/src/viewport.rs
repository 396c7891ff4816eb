//! Mapping between screen space and sheet space.

use toybox_geometry::{Point, Size};

/// Supplies the viewport height and maps screen positions into the sheet's
/// vertical coordinate, where `y` grows upwards from the bottom edge.
///
/// Implementations must be pure: the same input always yields the same output
/// for the lifetime of a frame.
pub trait SheetViewport {
    fn height(&self) -> f32;

    fn to_sheet_y(&self, screen: Point) -> f32;
}

/// Where screen-space `y = 0` lies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScreenOrigin {
    /// `y` grows upwards, as in most game engines.
    #[default]
    BottomLeft,
    /// `y` grows downwards, as in window systems and the web.
    TopLeft,
}

/// A viewport of constant size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedViewport {
    size: Size,
    origin: ScreenOrigin,
}

impl FixedViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            origin: ScreenOrigin::BottomLeft,
        }
    }

    pub fn with_origin(mut self, origin: ScreenOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl SheetViewport for FixedViewport {
    fn height(&self) -> f32 {
        self.size.height
    }

    fn to_sheet_y(&self, screen: Point) -> f32 {
        match self.origin {
            ScreenOrigin::BottomLeft => screen.y,
            ScreenOrigin::TopLeft => self.size.height - screen.y,
        }
    }
}

impl<V: SheetViewport + ?Sized> SheetViewport for &V {
    fn height(&self) -> f32 {
        (**self).height()
    }

    fn to_sheet_y(&self, screen: Point) -> f32 {
        (**self).to_sheet_y(screen)
    }
}

impl<V: SheetViewport + ?Sized> SheetViewport for Box<V> {
    fn height(&self) -> f32 {
        (**self).height()
    }

    fn to_sheet_y(&self, screen: Point) -> f32 {
        (**self).to_sheet_y(screen)
    }
}
