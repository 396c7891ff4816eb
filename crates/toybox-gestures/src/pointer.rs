use toybox_geometry::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw pointer event in screen space.
///
/// The source device (touch, mouse, stylus) is irrelevant here; only the kind
/// and position matter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
        }
    }

    pub fn down(position: Point) -> Self {
        Self::new(PointerEventKind::Down, position)
    }

    pub fn moved(position: Point) -> Self {
        Self::new(PointerEventKind::Move, position)
    }

    pub fn up(position: Point) -> Self {
        Self::new(PointerEventKind::Up, position)
    }

    pub fn cancel(position: Point) -> Self {
        Self::new(PointerEventKind::Cancel, position)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}
