//! Captures sheet notifications for later assertions.

use std::cell::RefCell;
use std::rc::Rc;

use toybox_sheet::{BottomSheet, ListenerId, SheetEvent, SheetViewport};

/// Shared log of every event a sheet emitted, in order.
#[derive(Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<SheetEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a catch-all listener on `sheet` that appends to this log.
    pub fn attach<V: SheetViewport>(&self, sheet: &mut BottomSheet<V>) -> ListenerId {
        let events = Rc::clone(&self.events);
        sheet.add_listener(move |event| events.borrow_mut().push(event))
    }

    pub fn events(&self) -> Vec<SheetEvent> {
        self.events.borrow().clone()
    }

    pub fn take(&self) -> Vec<SheetEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn count(&self, event: SheetEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}
