//! Notification registry.

/// Notifications a sheet emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SheetEvent {
    /// An animation settled on the highest detent.
    Opened,
    /// An animation settled on the lowest detent.
    Closed,
    /// The grace delay after [`BottomSheet::request_close`] elapsed; the host
    /// should tear the sheet down.
    ///
    /// [`BottomSheet::request_close`]: crate::BottomSheet::request_close
    Dismissed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct ListenerEntry {
    id: ListenerId,
    /// `None` receives every event.
    filter: Option<SheetEvent>,
    callback: Box<dyn FnMut(SheetEvent)>,
}

#[derive(Default)]
pub(crate) struct SheetListeners {
    next_id: u64,
    entries: Vec<ListenerEntry>,
}

impl SheetListeners {
    pub(crate) fn add(
        &mut self,
        filter: Option<SheetEvent>,
        callback: impl FnMut(SheetEvent) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(ListenerEntry {
            id,
            filter,
            callback: Box::new(callback),
        });
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn emit(&mut self, event: SheetEvent) {
        for entry in &mut self.entries {
            if entry.filter.map_or(true, |wanted| wanted == event) {
                (entry.callback)(event);
            }
        }
    }
}
